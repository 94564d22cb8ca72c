#![allow(dead_code)]

use invoice_frontend::config::{
    BackendSettings, ServerSettings, Settings, TelemetrySettings, UiSettings,
};
use invoice_frontend::startup::Application;
use invoice_frontend::theme::Theme;
use reqwest::redirect::Policy;
use serde_json::{json, Value};
use wiremock::MockServer;

/// A running front end wired to a mock invoice API.
pub struct TestApp {
    pub address: String,
    pub backend: MockServer,
    pub client: reqwest::Client,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with_theme(Theme::Gradient).await
    }

    pub async fn spawn_with_theme(theme: Theme) -> Self {
        invoice_frontend::services::metrics::init_metrics();
        let backend = MockServer::start().await;

        let settings = Settings {
            server: ServerSettings {
                host: "127.0.0.1".to_string(),
                port: 0, // Random port for testing
                public_url: "http://127.0.0.1".to_string(),
            },
            backend: BackendSettings {
                base_url: Some(backend.uri()),
                timeout_secs: Some(5),
            },
            ui: UiSettings { theme },
            telemetry: TelemetrySettings::default(),
        };

        let app = Application::build(settings)
            .await
            .expect("Failed to build test application");
        let address = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        let client = reqwest::Client::builder()
            .redirect(Policy::none())
            .build()
            .expect("Failed to build HTTP client");

        TestApp {
            address,
            backend,
            client,
        }
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn htmx_get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.address, path))
            .header("HX-Request", "true")
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn htmx_post(&self, path: &str, form: &[(&str, &str)]) -> reqwest::Response {
        self.client
            .post(format!("{}{}", self.address, path))
            .header("HX-Request", "true")
            .form(form)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn htmx_put(&self, path: &str, form: &[(&str, &str)]) -> reqwest::Response {
        self.client
            .put(format!("{}{}", self.address, path))
            .header("HX-Request", "true")
            .form(form)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn plain_post(&self, path: &str, form: &[(&str, &str)]) -> reqwest::Response {
        self.client
            .post(format!("{}{}", self.address, path))
            .form(form)
            .send()
            .await
            .expect("Failed to execute request")
    }
}

/// The reference invoice as typed into the form.
pub fn reference_form() -> Vec<(&'static str, &'static str)> {
    vec![
        ("invoice_no", "INV-001"),
        ("customer", "Acme"),
        ("item_name", "Widget"),
        ("surat_jalan_no", "SJ-001"),
        ("quantity", "10"),
        ("price", "1000"),
    ]
}

/// A backend invoice record.
pub fn invoice_json(id: i64, invoice_no: &str, customer: &str, quantity: i64, price: i64) -> Value {
    let subtotal = quantity * price;
    let tax = (subtotal * 11) as f64 / 100.0;
    json!({
        "id": id,
        "invoice_no": invoice_no,
        "customer": customer,
        "item_name": "Widget",
        "surat_jalan_no": format!("SJ-{:03}", id),
        "quantity": quantity,
        "price": price,
        "tax": tax,
        "total": (subtotal * 111) as f64 / 100.0
    })
}

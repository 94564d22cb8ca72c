//! Contract tests for InvoiceClient against a mock invoice API.
//!
//! | Method | Path | Test |
//! |--------|------|------|
//! | GET    | `/api/invoices` | `list_*` |
//! | POST   | `/api/invoices` | `create_*` |
//! | PUT    | `/api/invoices/{id}` | `update_*` |

mod common;

use common::invoice_json;
use invoice_frontend::config::{BackendSettings, ServerSettings};
use invoice_frontend::models::{CreateInvoiceRequest, InvoiceId, UpdateInvoiceRequest};
use invoice_frontend::services::{InvoiceApi, InvoiceApiError, InvoiceClient};
use rust_decimal::Decimal;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(base_url: String) -> InvoiceClient {
    InvoiceClient::new(
        &BackendSettings {
            base_url: Some(base_url),
            timeout_secs: Some(5),
        },
        &ServerSettings::default(),
    )
    .unwrap()
}

fn create_request() -> CreateInvoiceRequest {
    CreateInvoiceRequest {
        invoice_no: "INV-001".into(),
        customer: "Acme".into(),
        item_name: "Widget".into(),
        surat_jalan_no: "SJ-001".into(),
        quantity: 10,
        price: Decimal::from(1000),
    }
}

fn update_request() -> UpdateInvoiceRequest {
    UpdateInvoiceRequest {
        customer: "Acme Updated".into(),
        item_name: "Widget".into(),
        surat_jalan_no: "SJ-001".into(),
        quantity: 12,
        price: Decimal::new(99950, 2),
    }
}

// ── GET /api/invoices ────────────────────────────────────────────────

#[tokio::test]
async fn list_returns_invoices_in_server_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/invoices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            invoice_json(2, "INV-002", "Globex", 1, 500),
            invoice_json(1, "INV-001", "Acme", 10, 1000),
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let invoices = client_for(mock_server.uri()).list_invoices().await.unwrap();
    assert_eq!(invoices.len(), 2);
    assert_eq!(invoices[0].invoice_no, "INV-002");
    assert_eq!(invoices[1].id, Some(InvoiceId::Number(1)));
}

#[tokio::test]
async fn list_reports_malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/invoices"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let result = client_for(mock_server.uri()).list_invoices().await;
    assert!(matches!(result, Err(InvoiceApiError::Decode { .. })));
}

#[tokio::test]
async fn list_conflict_is_not_a_duplicate() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/invoices"))
        .respond_with(ResponseTemplate::new(409))
        .mount(&mock_server)
        .await;

    let result = client_for(mock_server.uri()).list_invoices().await;
    assert!(matches!(result, Err(InvoiceApiError::Status { .. })));
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    // Nothing listens on port 9 locally.
    let result = client_for("http://127.0.0.1:9".into()).list_invoices().await;
    assert!(matches!(result, Err(InvoiceApiError::Transport { .. })));
}

// ── POST /api/invoices ───────────────────────────────────────────────

#[tokio::test]
async fn create_sends_exactly_the_six_input_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/invoices"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "invoice_no": "INV-001",
            "customer": "Acme",
            "item_name": "Widget",
            "surat_jalan_no": "SJ-001",
            "quantity": 10,
            "price": 1000
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(invoice_json(1, "INV-001", "Acme", 10, 1000)),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let created = client_for(mock_server.uri())
        .create_invoice(&create_request())
        .await
        .unwrap();

    assert_eq!(created.id, Some(InvoiceId::Number(1)));
    assert_eq!(created.tax, Some(Decimal::from(1100)));
    assert_eq!(created.total, Some(Decimal::from(11100)));
}

#[tokio::test]
async fn create_conflict_is_a_duplicate_invoice_number() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/invoices"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "detail": "invoice_no already exists"
        })))
        .mount(&mock_server)
        .await;

    let result = client_for(mock_server.uri())
        .create_invoice(&create_request())
        .await;
    assert!(matches!(result, Err(InvoiceApiError::DuplicateInvoiceNumber)));
}

#[tokio::test]
async fn create_server_error_keeps_status_and_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/invoices"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database down"))
        .mount(&mock_server)
        .await;

    let result = client_for(mock_server.uri())
        .create_invoice(&create_request())
        .await;
    match result {
        Err(InvoiceApiError::Status { status, body }) => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(body, "database down");
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

// ── PUT /api/invoices/{id} ───────────────────────────────────────────

#[tokio::test]
async fn update_puts_five_fields_to_item_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/invoices/7"))
        .and(body_json(json!({
            "customer": "Acme Updated",
            "item_name": "Widget",
            "surat_jalan_no": "SJ-001",
            "quantity": 12,
            "price": 999.5
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(invoice_json(7, "INV-007", "Acme Updated", 12, 999)),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let updated = client_for(mock_server.uri())
        .update_invoice(&InvoiceId::Number(7), &update_request())
        .await
        .unwrap();

    assert_eq!(updated.customer, "Acme Updated");
    assert_eq!(updated.invoice_no, "INV-007");
}

#[tokio::test]
async fn update_uses_string_ids_verbatim() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/invoices/65f0c2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "65f0c2",
            "invoice_no": "INV-010"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let updated = client_for(mock_server.uri())
        .update_invoice(&InvoiceId::Text("65f0c2".into()), &update_request())
        .await
        .unwrap();
    assert_eq!(updated.id, Some(InvoiceId::Text("65f0c2".into())));
}

#[tokio::test]
async fn update_conflict_is_a_duplicate_invoice_number() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/invoices/7"))
        .respond_with(ResponseTemplate::new(409))
        .mount(&mock_server)
        .await;

    let result = client_for(mock_server.uri())
        .update_invoice(&InvoiceId::Number(7), &update_request())
        .await;
    assert!(matches!(result, Err(InvoiceApiError::DuplicateInvoiceNumber)));
}

#[tokio::test]
async fn update_percent_encodes_ids_with_slashes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/invoices/2024%2F001"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "2024/001",
            "invoice_no": "INV-2024-001"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let updated = client_for(mock_server.uri())
        .update_invoice(&InvoiceId::Text("2024/001".into()), &update_request())
        .await
        .unwrap();
    assert_eq!(updated.id, Some(InvoiceId::Text("2024/001".into())));
}

#[tokio::test]
async fn list_tolerates_null_numbers_in_a_row() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/invoices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "invoice_no": "INV-GOOD", "price": 10 },
            { "id": 2, "invoice_no": "INV-NULL", "price": null }
        ])))
        .mount(&mock_server)
        .await;

    let invoices = client_for(mock_server.uri()).list_invoices().await.unwrap();
    assert_eq!(invoices.len(), 2);
    assert_eq!(invoices[1].price, Decimal::ZERO);
}

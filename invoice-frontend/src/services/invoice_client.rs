//! HTTP client for the external invoice API.
//!
//! Trace context is injected into every outgoing request so backend spans
//! join the page request's trace.

use crate::config::{BackendSettings, ServerSettings};
use crate::models::{CreateInvoiceRequest, Invoice, InvoiceId, UpdateInvoiceRequest};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use service_core::observability::SendTraced;
use std::time::Duration;
use thiserror::Error;

pub const DUPLICATE_INVOICE_MESSAGE: &str =
    "Duplicate invoice number: an invoice with this number already exists.";
pub const SAVE_FAILED_MESSAGE: &str = "Failed to save invoice. Please try again.";

#[derive(Debug, Error)]
pub enum InvoiceApiError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Invalid invoice API origin {origin}: {reason}")]
    Origin { origin: String, reason: String },

    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Invoice number already exists")]
    DuplicateInvoiceNumber,

    #[error("Invoice API returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Malformed response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl InvoiceApiError {
    /// Message shown to the user when a save fails.
    pub fn save_message(&self) -> &'static str {
        match self {
            InvoiceApiError::DuplicateInvoiceNumber => DUPLICATE_INVOICE_MESSAGE,
            _ => SAVE_FAILED_MESSAGE,
        }
    }

    /// Short label used for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            InvoiceApiError::Client(_) | InvoiceApiError::Origin { .. } => "client",
            InvoiceApiError::Transport { .. } => "transport",
            InvoiceApiError::DuplicateInvoiceNumber => "duplicate",
            InvoiceApiError::Status { .. } => "status",
            InvoiceApiError::Decode { .. } => "decode",
        }
    }
}

/// Operations the front end needs from the invoice API.
#[async_trait]
pub trait InvoiceApi: Send + Sync {
    async fn list_invoices(&self) -> Result<Vec<Invoice>, InvoiceApiError>;

    async fn create_invoice(
        &self,
        request: &CreateInvoiceRequest,
    ) -> Result<Invoice, InvoiceApiError>;

    async fn update_invoice(
        &self,
        id: &InvoiceId,
        request: &UpdateInvoiceRequest,
    ) -> Result<Invoice, InvoiceApiError>;
}

pub struct InvoiceClient {
    client: Client,
    collection: Url,
}

impl InvoiceClient {
    pub fn new(
        backend: &BackendSettings,
        server: &ServerSettings,
    ) -> Result<Self, InvoiceApiError> {
        let mut builder = Client::builder();
        if let Some(secs) = backend.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(InvoiceApiError::Client)?;

        let origin = backend.api_origin(server);
        let invalid = |reason: String| InvoiceApiError::Origin {
            origin: origin.clone(),
            reason,
        };
        let mut collection = Url::parse(&origin).map_err(|e| invalid(e.to_string()))?;
        collection
            .path_segments_mut()
            .map_err(|_| invalid("cannot be a base URL".to_string()))?
            .pop_if_empty()
            .extend(["api", "invoices"]);

        Ok(Self { client, collection })
    }

    /// `{origin}/api/invoices`
    pub fn endpoint(&self) -> &str {
        self.collection.as_str()
    }

    fn collection_url(&self) -> Url {
        self.collection.clone()
    }

    /// The id is pushed as one path segment, so `/` and other reserved
    /// characters are percent-encoded.
    fn item_url(&self, id: &InvoiceId) -> Url {
        let mut url = self.collection.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(&id.to_string());
        }
        url
    }
}

#[async_trait]
impl InvoiceApi for InvoiceClient {
    async fn list_invoices(&self) -> Result<Vec<Invoice>, InvoiceApiError> {
        let url = self.collection_url();
        let response = self
            .client
            .get(url.clone())
            .send_traced()
            .await
            .map_err(|source| transport_error(url.as_str(), source))?;

        decode(url.as_str(), check_status(response, false).await?).await
    }

    async fn create_invoice(
        &self,
        request: &CreateInvoiceRequest,
    ) -> Result<Invoice, InvoiceApiError> {
        let url = self.collection_url();
        let response = self
            .client
            .post(url.clone())
            .json(request)
            .send_traced()
            .await
            .map_err(|source| transport_error(url.as_str(), source))?;

        let invoice: Invoice = decode(url.as_str(), check_status(response, true).await?).await?;
        tracing::info!(
            invoice_no = %request.invoice_no,
            id = ?invoice.id,
            "Invoice created"
        );
        Ok(invoice)
    }

    async fn update_invoice(
        &self,
        id: &InvoiceId,
        request: &UpdateInvoiceRequest,
    ) -> Result<Invoice, InvoiceApiError> {
        let url = self.item_url(id);
        let response = self
            .client
            .put(url.clone())
            .json(request)
            .send_traced()
            .await
            .map_err(|source| transport_error(url.as_str(), source))?;

        let invoice: Invoice = decode(url.as_str(), check_status(response, true).await?).await?;
        tracing::info!(id = %id, "Invoice updated");
        Ok(invoice)
    }
}

fn transport_error(url: &str, source: reqwest::Error) -> InvoiceApiError {
    tracing::error!("Failed to send request to {}: {}", url, source);
    InvoiceApiError::Transport {
        url: url.to_string(),
        source,
    }
}

/// Map non-2xx responses to errors. A 409 on a write means the invoice
/// number is taken.
async fn check_status(response: Response, is_write: bool) -> Result<Response, InvoiceApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if is_write && status == StatusCode::CONFLICT {
        tracing::warn!("Invoice API rejected duplicate invoice number");
        return Err(InvoiceApiError::DuplicateInvoiceNumber);
    }

    let body = response.text().await.unwrap_or_default();
    tracing::error!(status = %status, body = %body, "Invoice API request failed");
    Err(InvoiceApiError::Status { status, body })
}

async fn decode<T: DeserializeOwned>(url: &str, response: Response) -> Result<T, InvoiceApiError> {
    response.json::<T>().await.map_err(|source| {
        tracing::error!("Failed to decode response from {}: {}", url, source);
        InvoiceApiError::Decode {
            url: url.to_string(),
            source,
        }
    })
}

//! The invoice list shown under the form.
//!
//! A successful load replaces the whole list in server order. A failed load
//! keeps the previous list and records the failure so the page can say so.

use crate::models::Invoice;
use crate::services::invoice_client::InvoiceApi;
use crate::services::metrics;
use tokio::sync::RwLock;

pub const LOAD_FAILED_MESSAGE: &str =
    "Failed to load invoices. The list below may be out of date.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvoiceListSnapshot {
    pub invoices: Vec<Invoice>,
    pub load_error: Option<&'static str>,
}

#[derive(Debug, Default)]
pub struct InvoiceList {
    state: RwLock<InvoiceListSnapshot>,
}

impl InvoiceList {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn snapshot(&self) -> InvoiceListSnapshot {
        self.state.read().await.clone()
    }

    /// Fetch the collection and replace the list with it.
    pub async fn refresh(&self, api: &dyn InvoiceApi) -> InvoiceListSnapshot {
        match api.list_invoices().await {
            Ok(invoices) => {
                tracing::debug!(count = invoices.len(), "Invoice list loaded");
                metrics::record_list_load("ok");
                let mut state = self.state.write().await;
                *state = InvoiceListSnapshot {
                    invoices,
                    load_error: None,
                };
                state.clone()
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load invoices");
                metrics::record_list_load(e.kind());
                let mut state = self.state.write().await;
                state.load_error = Some(LOAD_FAILED_MESSAGE);
                state.clone()
            }
        }
    }

    /// Merge a record returned by a save: replace the entry with the same id,
    /// or append it.
    pub async fn upsert(&self, invoice: Invoice) {
        let mut state = self.state.write().await;
        let existing = invoice.id.as_ref().and_then(|id| {
            state
                .invoices
                .iter()
                .position(|current| current.id.as_ref() == Some(id))
        });
        match existing {
            Some(index) => state.invoices[index] = invoice,
            None => state.invoices.push(invoice),
        }
    }

    /// Look up a listed invoice by the id as it appears in a URL.
    pub async fn find(&self, segment: &str) -> Option<Invoice> {
        self.state
            .read()
            .await
            .invoices
            .iter()
            .find(|invoice| invoice.id.as_ref().is_some_and(|id| id.matches(segment)))
            .cloned()
    }
}

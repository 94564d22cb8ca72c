pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
pub mod theme;
pub mod utils;

use services::{InvoiceApi, InvoiceList};
use std::sync::Arc;
use theme::Theme;

/// Shared application state: the invoice API, the displayed list and the
/// active theme.
#[derive(Clone)]
pub struct AppState {
    pub invoice_api: Arc<dyn InvoiceApi>,
    pub invoice_list: Arc<InvoiceList>,
    pub theme: Theme,
}

impl AppState {
    pub fn new(invoice_api: Arc<dyn InvoiceApi>, theme: Theme) -> Self {
        Self {
            invoice_api,
            invoice_list: Arc::new(InvoiceList::new()),
            theme,
        }
    }
}

//! Display-ready data handed to the templates.

use crate::models::{FormMode, Invoice, InvoiceForm};
use crate::services::pricing::InvoiceTotals;
use crate::services::InvoiceListSnapshot;
use crate::utils::money::{format_idr, price_input_value};

#[derive(Debug, Clone)]
pub struct TotalsView {
    pub subtotal: String,
    pub tax: String,
    pub total: String,
}

impl From<InvoiceTotals> for TotalsView {
    fn from(totals: InvoiceTotals) -> Self {
        Self {
            subtotal: format_idr(totals.subtotal),
            tax: format_idr(totals.tax),
            total: format_idr(totals.total),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FormView {
    pub editing: bool,
    pub action: String,
    pub invoice_no: String,
    pub customer: String,
    pub item_name: String,
    pub surat_jalan_no: String,
    pub quantity: String,
    pub price: String,
    pub error: Option<&'static str>,
}

impl FormView {
    pub fn new(form: &InvoiceForm, error: Option<&'static str>) -> Self {
        let action = match &form.mode {
            FormMode::Create => "/invoices".to_string(),
            FormMode::Edit(id) => format!("/invoices/{}", id.path_segment()),
        };

        Self {
            editing: form.is_editing(),
            action,
            invoice_no: form.invoice_no.clone(),
            customer: form.customer.clone(),
            item_name: form.item_name.clone(),
            surat_jalan_no: form.surat_jalan_no.clone(),
            quantity: form.quantity.to_string(),
            price: price_input_value(form.price),
            error,
        }
    }
}

#[derive(Debug, Clone)]
pub struct InvoiceRow {
    pub invoice_no: String,
    pub customer: String,
    pub item_name: String,
    pub surat_jalan_no: String,
    pub quantity: i64,
    pub price: String,
    pub tax: String,
    pub total: String,
    /// Empty when the record has no id to edit by.
    pub edit_url: String,
}

impl From<&Invoice> for InvoiceRow {
    fn from(invoice: &Invoice) -> Self {
        Self {
            invoice_no: invoice.invoice_no.clone(),
            customer: invoice.customer.clone(),
            item_name: invoice.item_name.clone(),
            surat_jalan_no: invoice.surat_jalan_no.clone(),
            quantity: invoice.quantity,
            price: format_idr(invoice.price),
            tax: invoice.tax.map(format_idr).unwrap_or_else(|| "-".to_string()),
            total: invoice
                .total
                .map(format_idr)
                .unwrap_or_else(|| "-".to_string()),
            edit_url: invoice
                .id
                .as_ref()
                .map(|id| format!("/invoices/{}/edit", id.path_segment()))
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TableView {
    pub rows: Vec<InvoiceRow>,
    pub load_error: Option<&'static str>,
}

impl From<&InvoiceListSnapshot> for TableView {
    fn from(snapshot: &InvoiceListSnapshot) -> Self {
        Self {
            rows: snapshot.invoices.iter().map(InvoiceRow::from).collect(),
            load_error: snapshot.load_error,
        }
    }
}

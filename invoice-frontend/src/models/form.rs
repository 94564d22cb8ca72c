//! Invoice entry form state.
//!
//! The form is either empty (creating a new invoice) or editing an existing
//! record. A successful save always returns it to the empty state; a failed
//! save leaves every field untouched.

use crate::models::invoice::{CreateInvoiceRequest, Invoice, InvoiceId, UpdateInvoiceRequest};
use crate::services::pricing::{compute_totals, InvoiceTotals};
use crate::utils::money::{parse_price, parse_quantity};
use rust_decimal::Decimal;
use serde::Deserialize;

/// Raw form fields as posted by the browser.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct InvoiceFormInput {
    pub invoice_no: String,
    pub customer: String,
    pub item_name: String,
    pub surat_jalan_no: String,
    pub quantity: String,
    pub price: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(InvoiceId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceForm {
    pub mode: FormMode,
    pub invoice_no: String,
    pub customer: String,
    pub item_name: String,
    pub surat_jalan_no: String,
    pub quantity: i64,
    pub price: Decimal,
}

/// Request produced by submitting the form.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Create(CreateInvoiceRequest),
    Update {
        id: InvoiceId,
        request: UpdateInvoiceRequest,
    },
}

impl Default for InvoiceForm {
    fn default() -> Self {
        Self::empty()
    }
}

impl InvoiceForm {
    pub fn empty() -> Self {
        Self {
            mode: FormMode::Create,
            invoice_no: String::new(),
            customer: String::new(),
            item_name: String::new(),
            surat_jalan_no: String::new(),
            quantity: 0,
            price: Decimal::ZERO,
        }
    }

    /// Load an existing invoice for editing. Returns `None` for records the
    /// backend has not assigned an id to yet.
    pub fn editing(invoice: &Invoice) -> Option<Self> {
        let id = invoice.id.clone()?;
        Some(Self {
            mode: FormMode::Edit(id),
            invoice_no: invoice.invoice_no.clone(),
            customer: invoice.customer.clone(),
            item_name: invoice.item_name.clone(),
            surat_jalan_no: invoice.surat_jalan_no.clone(),
            quantity: invoice.quantity,
            price: invoice.price,
        })
    }

    /// Build form state from posted fields, coercing invalid numbers to 0.
    ///
    /// In edit mode the invoice number is taken from `frozen_invoice_no`
    /// when given, so a tampered field cannot change it.
    pub fn from_input(
        mode: FormMode,
        input: InvoiceFormInput,
        frozen_invoice_no: Option<&str>,
    ) -> Self {
        let invoice_no = match (&mode, frozen_invoice_no) {
            (FormMode::Edit(_), Some(frozen)) => frozen.to_string(),
            _ => input.invoice_no,
        };

        Self {
            mode,
            invoice_no,
            customer: input.customer,
            item_name: input.item_name,
            surat_jalan_no: input.surat_jalan_no,
            quantity: parse_quantity(&input.quantity),
            price: parse_price(&input.price),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    /// Preview of the derived amounts for the current inputs.
    pub fn totals(&self) -> InvoiceTotals {
        compute_totals(self.quantity, self.price)
    }

    pub fn submission(&self) -> Submission {
        match &self.mode {
            FormMode::Create => Submission::Create(CreateInvoiceRequest {
                invoice_no: self.invoice_no.clone(),
                customer: self.customer.clone(),
                item_name: self.item_name.clone(),
                surat_jalan_no: self.surat_jalan_no.clone(),
                quantity: self.quantity,
                price: self.price,
            }),
            FormMode::Edit(id) => Submission::Update {
                id: id.clone(),
                request: UpdateInvoiceRequest {
                    customer: self.customer.clone(),
                    item_name: self.item_name.clone(),
                    surat_jalan_no: self.surat_jalan_no.clone(),
                    quantity: self.quantity,
                    price: self.price,
                },
            },
        }
    }

    /// State after a successful save.
    pub fn saved(self) -> Self {
        Self::empty()
    }
}

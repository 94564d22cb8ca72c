pub mod form;
pub mod invoice;

pub use form::{FormMode, InvoiceForm, InvoiceFormInput, Submission};
pub use invoice::{CreateInvoiceRequest, Invoice, InvoiceId, UpdateInvoiceRequest};

pub mod invoice_client;
pub mod invoice_list;
pub mod metrics;
pub mod pricing;

pub use invoice_client::{InvoiceApi, InvoiceApiError, InvoiceClient};
pub use invoice_list::{InvoiceList, InvoiceListSnapshot};

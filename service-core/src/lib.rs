//! service-core: shared infrastructure for the invoice front end.
pub mod error;
pub mod middleware;
pub mod observability;

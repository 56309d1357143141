pub mod models;
pub mod routes;
pub mod validation;

pub use models::{Currency, InvoiceRequest, InvoiceResult, InvoiceStatus, ParseError, Platform};
pub use routes::{Merchant, Route};

use async_trait::async_trait;
use btcpay_core::{InvoiceRequest, InvoiceResult};
use thiserror::Error;

/// Failure of a single call against the invoice API.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("invoice API responded with {status}{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Status { status: u16, message: Option<String> },
    #[error("failed to decode invoice API response: {0}")]
    Decode(String),
}

impl RemoteError {
    /// The `error` text the server put in its response body, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            RemoteError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

#[async_trait]
pub trait InvoiceClient: Send + Sync {
    async fn create_invoice(&self, request: &InvoiceRequest) -> Result<InvoiceResult, RemoteError>;
    /// Not polled by the workflow; available to callers that need a fresh status.
    async fn invoice_status(&self, invoice_id: &str) -> Result<InvoiceResult, RemoteError>;
}

pub mod http;
pub mod mock;

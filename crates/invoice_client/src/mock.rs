use super::{InvoiceClient, RemoteError};
use async_trait::async_trait;
use btcpay_core::{InvoiceRequest, InvoiceResult, InvoiceStatus};
use rand::{distributions::Alphanumeric, Rng};
use std::sync::Arc;
use tokio::time::{sleep, Duration};

/// Offline stand-in for the invoice API. Every invoice it hands out is `New`.
#[derive(Clone)]
pub struct MockClient {
    base_url: String,
    latency: Duration,
}

impl MockClient {
    pub fn new(base_url: &str) -> Arc<Self> {
        Arc::new(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            latency: Duration::from_millis(200),
        })
    }

    pub fn with_latency(base_url: &str, latency: Duration) -> Arc<Self> {
        Arc::new(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            latency,
        })
    }

    fn invoice(&self, invoice_id: String) -> InvoiceResult {
        InvoiceResult {
            payment_url: Some(format!("{}/i/{}", self.base_url, invoice_id)),
            invoice_id,
            status: InvoiceStatus::New,
            payment_received: false,
        }
    }
}

#[async_trait]
impl InvoiceClient for MockClient {
    async fn create_invoice(&self, request: &InvoiceRequest) -> Result<InvoiceResult, RemoteError> {
        let id: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(16)
            .map(char::from)
            .collect();
        // simulate network latency
        sleep(self.latency).await;
        tracing::info!(
            invoice_id = %id,
            amount = request.amount,
            currency = %request.currency,
            platform = %request.product_id,
            "Mock invoice created"
        );
        Ok(self.invoice(format!("mock_{id}")))
    }

    async fn invoice_status(&self, invoice_id: &str) -> Result<InvoiceResult, RemoteError> {
        Ok(self.invoice(invoice_id.to_string()))
    }
}

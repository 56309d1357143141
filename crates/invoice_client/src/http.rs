use super::{InvoiceClient, RemoteError};
use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use btcpay_core::{InvoiceRequest, InvoiceResult};
use reqwest::{RequestBuilder, Url};
use serde::Deserialize;
use std::sync::Arc;

/// Error body returned by the invoice API on non-success responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Client for the invoice backend's JSON API.
///
/// Uses transport defaults: no custom timeout, no retries. Each call issues
/// exactly one request.
#[derive(Clone)]
pub struct HttpInvoiceClient {
    base_url: Url,
    http_client: reqwest::Client,
}

impl HttpInvoiceClient {
    pub fn new(base_url: &str) -> Result<Arc<Self>> {
        let base_url = Url::parse(base_url.trim())
            .with_context(|| format!("Invalid invoice API base URL: {base_url}"))?;
        if base_url.cannot_be_a_base() {
            bail!("Invoice API base URL cannot carry a path: {base_url}");
        }
        Ok(Arc::new(Self {
            base_url,
            http_client: reqwest::Client::new(),
        }))
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // checked in `new`
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn execute(url: &Url, request: RequestBuilder) -> Result<InvoiceResult, RemoteError> {
        let transport = |source: reqwest::Error| RemoteError::Transport {
            url: url.to_string(),
            source,
        };

        let resp = request.send().await.map_err(transport)?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.error)
                .filter(|m| !m.trim().is_empty());
            return Err(RemoteError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body = resp.text().await.map_err(transport)?;
        serde_json::from_str(&body).map_err(|e| RemoteError::Decode(e.to_string()))
    }
}

#[async_trait]
impl InvoiceClient for HttpInvoiceClient {
    async fn create_invoice(&self, request: &InvoiceRequest) -> Result<InvoiceResult, RemoteError> {
        let url = self.endpoint(&["api", "create-invoice"]);

        let result = Self::execute(&url, self.http_client.post(url.clone()).json(request)).await;

        match &result {
            Ok(invoice) => tracing::info!(
                invoice_id = %invoice.invoice_id,
                status = %invoice.status,
                "Invoice created"
            ),
            Err(err) => tracing::error!(error = %err, "Error creating invoice"),
        }
        result
    }

    async fn invoice_status(&self, invoice_id: &str) -> Result<InvoiceResult, RemoteError> {
        let url = self.endpoint(&["api", "invoices", invoice_id]);

        let result = Self::execute(&url, self.http_client.get(url.clone())).await;

        match &result {
            Ok(invoice) => tracing::debug!(
                invoice_id = %invoice.invoice_id,
                status = %invoice.status,
                "Fetched invoice status"
            ),
            Err(err) => tracing::error!(invoice_id = %invoice_id, error = %err, "Error fetching invoice status"),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_join_onto_base_path() {
        let client = HttpInvoiceClient::new("http://localhost:3000").unwrap();
        assert_eq!(
            client.endpoint(&["api", "create-invoice"]).as_str(),
            "http://localhost:3000/api/create-invoice"
        );

        let nested = HttpInvoiceClient::new("https://pay.example.com/backend/").unwrap();
        assert_eq!(
            nested.endpoint(&["api", "invoices", "inv_123"]).as_str(),
            "https://pay.example.com/backend/api/invoices/inv_123"
        );
    }

    #[test]
    fn invoice_id_stays_one_segment() {
        let client = HttpInvoiceClient::new("http://localhost:3000").unwrap();
        assert_eq!(
            client.endpoint(&["api", "invoices", "a/b c"]).as_str(),
            "http://localhost:3000/api/invoices/a%2Fb%20c"
        );
    }

    #[test]
    fn rejects_unusable_base_urls() {
        assert!(HttpInvoiceClient::new("not a url").is_err());
        assert!(HttpInvoiceClient::new("mailto:ops@example.com").is_err());
    }
}

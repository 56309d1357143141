use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),
    #[error("Unknown platform: {0}")]
    UnknownPlatform(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Btc,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Usd, Currency::Eur, Currency::Btc];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Btc => "BTC",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Currency::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseError::UnknownCurrency(trimmed.to_string()))
    }
}

/// Gaming platform the payment is credited to. Sent as `productId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    Firekirin,
    Milkyway,
    Yolo,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Firekirin, Platform::Milkyway, Platform::Yolo];

    pub fn name(&self) -> &'static str {
        match self {
            Platform::Firekirin => "Firekirin",
            Platform::Milkyway => "Milkyway",
            Platform::Yolo => "Yolo",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Platform {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Platform::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseError::UnknownPlatform(trimmed.to_string()))
    }
}

/// Body of `POST /api/create-invoice`.
///
/// Optional fields are skipped entirely when `None`; the API treats an
/// omitted field differently from an empty one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRequest {
    pub amount: f64,
    pub currency: Currency,
    pub product_id: Platform,
    /// Username on the selected platform
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InvoiceStatus {
    New,
    Processing,
    Settled,
    Expired,
    Invalid,
    Other(String),
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &str {
        match self {
            InvoiceStatus::New => "New",
            InvoiceStatus::Processing => "Processing",
            InvoiceStatus::Settled => "Settled",
            InvoiceStatus::Expired => "Expired",
            InvoiceStatus::Invalid => "Invalid",
            InvoiceStatus::Other(s) => s,
        }
    }
}

impl From<String> for InvoiceStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "New" => InvoiceStatus::New,
            "Processing" => InvoiceStatus::Processing,
            "Settled" => InvoiceStatus::Settled,
            "Expired" => InvoiceStatus::Expired,
            "Invalid" => InvoiceStatus::Invalid,
            _ => InvoiceStatus::Other(s),
        }
    }
}

impl From<InvoiceStatus> for String {
    fn from(status: InvoiceStatus) -> Self {
        match status {
            InvoiceStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceResult {
    pub invoice_id: String,
    pub status: InvoiceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_url: Option<String>,
    #[serde(default)]
    pub payment_received: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request() -> InvoiceRequest {
        InvoiceRequest {
            amount: 25.5,
            currency: Currency::Usd,
            product_id: Platform::Firekirin,
            title: "player1".to_string(),
            customer_email: None,
            description: None,
        }
    }

    #[test]
    fn request_omits_absent_optional_fields() {
        let value = serde_json::to_value(request()).unwrap();
        assert_eq!(
            value,
            json!({
                "amount": 25.5,
                "currency": "USD",
                "productId": "Firekirin",
                "title": "player1"
            })
        );
    }

    #[test]
    fn request_keeps_present_optional_fields() {
        let mut req = request();
        req.customer_email = Some("p1@example.com".to_string());
        req.description = Some("top up".to_string());
        let value = serde_json::to_value(req).unwrap();
        assert_eq!(value["customerEmail"], "p1@example.com");
        assert_eq!(value["description"], "top up");
    }

    #[test]
    fn result_decodes_without_payment_url() {
        let result: InvoiceResult = serde_json::from_value(json!({
            "invoiceId": "inv_123",
            "status": "New",
            "paymentReceived": false
        }))
        .unwrap();
        assert_eq!(result.invoice_id, "inv_123");
        assert_eq!(result.status, InvoiceStatus::New);
        assert_eq!(result.payment_url, None);
        assert!(!result.payment_received);
    }

    #[test]
    fn result_defaults_payment_received_and_ignores_extra_fields() {
        let result: InvoiceResult = serde_json::from_value(json!({
            "invoiceId": "inv_9",
            "status": "Settled",
            "paymentUrl": "https://pay.example/i/inv_9",
            "amount": "10.00"
        }))
        .unwrap();
        assert_eq!(result.status, InvoiceStatus::Settled);
        assert_eq!(result.payment_url.as_deref(), Some("https://pay.example/i/inv_9"));
        assert!(!result.payment_received);
    }

    #[test]
    fn unknown_status_is_kept_verbatim() {
        let status: InvoiceStatus = serde_json::from_value(json!("PaidPartial")).unwrap();
        assert_eq!(status, InvoiceStatus::Other("PaidPartial".to_string()));
        assert_eq!(serde_json::to_value(&status).unwrap(), json!("PaidPartial"));
    }

    #[test]
    fn platform_and_currency_parse_case_insensitively() {
        assert_eq!("milkyway".parse::<Platform>(), Ok(Platform::Milkyway));
        assert_eq!(" btc ".parse::<Currency>(), Ok(Currency::Btc));
        assert_eq!(
            "Orion".parse::<Platform>(),
            Err(ParseError::UnknownPlatform("Orion".to_string()))
        );
        assert_eq!(
            "GBP".parse::<Currency>(),
            Err(ParseError::UnknownCurrency("GBP".to_string()))
        );
    }
}

use btcpay_core::{validation, Currency, InvoiceRequest, ParseError, Platform};
use thiserror::Error;

/// Editable field of the payment form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Amount,
    Currency,
    /// Platform selection, sent as `productId`
    ProductId,
    /// Platform username
    Title,
    CustomerEmail,
    Description,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Amount,
        Field::Currency,
        Field::ProductId,
        Field::Title,
        Field::CustomerEmail,
        Field::Description,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Amount => "Amount",
            Field::Currency => "Currency",
            Field::ProductId => "Select Platform",
            Field::Title => "Enter Platform Username",
            Field::CustomerEmail => "Email (Optional)",
            Field::Description => "Description (Optional)",
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, Field::Amount | Field::ProductId | Field::Title)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("Amount is required")]
    MissingAmount,
    #[error("Amount must be a number: {0}")]
    AmountNotANumber(String),
    #[error("Please select a platform")]
    MissingPlatform,
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("{}", .0.join("; "))]
    Invalid(Vec<String>),
}

/// Raw form contents exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFields {
    pub amount: String,
    pub currency: String,
    pub product_id: String,
    pub title: String,
    pub customer_email: String,
    pub description: String,
}

impl Default for FormFields {
    fn default() -> Self {
        Self {
            amount: String::new(),
            currency: Currency::default().code().to_string(),
            product_id: String::new(),
            title: String::new(),
            customer_email: String::new(),
            description: String::new(),
        }
    }
}

impl FormFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Amount => &self.amount,
            Field::Currency => &self.currency,
            Field::ProductId => &self.product_id,
            Field::Title => &self.title,
            Field::CustomerEmail => &self.customer_email,
            Field::Description => &self.description,
        }
    }

    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            Field::Amount => self.amount = value,
            Field::Currency => self.currency = value,
            Field::ProductId => self.product_id = value,
            Field::Title => self.title = value,
            Field::CustomerEmail => self.customer_email = value,
            Field::Description => self.description = value,
        }
        self
    }

    /// Coerces the raw fields into a request.
    ///
    /// The amount goes through plain float parsing with no rounding. Blank
    /// optional fields become `None` so they are left out of the payload.
    pub fn to_request(&self) -> Result<InvoiceRequest, FormError> {
        let amount = self.amount.trim();
        if amount.is_empty() {
            return Err(FormError::MissingAmount);
        }
        let amount: f64 = amount
            .parse()
            .map_err(|_| FormError::AmountNotANumber(amount.to_string()))?;

        let currency: Currency = self.currency.parse()?;

        if self.product_id.trim().is_empty() {
            return Err(FormError::MissingPlatform);
        }
        let product_id: Platform = self.product_id.parse()?;

        let request = InvoiceRequest {
            amount,
            currency,
            product_id,
            title: self.title.clone(),
            customer_email: non_blank(&self.customer_email),
            description: non_blank(&self.description),
        };
        validation::validate(&request).map_err(FormError::Invalid)?;
        Ok(request)
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

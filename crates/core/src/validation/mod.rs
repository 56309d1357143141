mod rules;

use crate::models::InvoiceRequest;

/// Checks the invariants an invoice request must hold before it is sent.
///
/// Every failing rule is reported, not just the first one.
pub fn validate(request: &InvoiceRequest) -> Result<(), Vec<String>> {
    let mut errs = Vec::new();
    if let Err(e) = rules::amount_is_positive(request.amount) {
        errs.push(e);
    }
    if let Err(e) = rules::username_is_present(&request.title) {
        errs.push(e);
    }
    if let Some(email) = request.customer_email.as_deref() {
        if let Err(e) = rules::email_is_well_formed(email) {
            errs.push(e);
        }
    }
    if errs.is_empty() {
        Ok(())
    } else {
        Err(errs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Currency, Platform};

    fn request(amount: f64, title: &str) -> InvoiceRequest {
        InvoiceRequest {
            amount,
            currency: Currency::Usd,
            product_id: Platform::Yolo,
            title: title.to_string(),
            customer_email: None,
            description: None,
        }
    }

    #[test]
    fn accepts_minimal_request() {
        assert_eq!(validate(&request(0.01, "player1")), Ok(()));
    }

    #[test]
    fn collects_every_failure() {
        let mut req = request(0.0, "   ");
        req.customer_email = Some("not-an-email".to_string());
        let errs = validate(&req).unwrap_err();
        assert_eq!(errs.len(), 3);
        assert!(errs[0].contains("Amount"));
        assert!(errs[1].contains("username"));
        assert!(errs[2].contains("email"));
    }

    #[test]
    fn rejects_non_finite_amounts() {
        assert!(validate(&request(f64::NAN, "p")).is_err());
        assert!(validate(&request(f64::INFINITY, "p")).is_err());
        assert!(validate(&request(-3.0, "p")).is_err());
    }
}

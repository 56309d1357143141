pub fn amount_is_positive(amount: f64) -> Result<(), String> {
    if !amount.is_finite() {
        return Err("Amount must be a finite number".to_string());
    }
    if amount <= 0.0 {
        return Err("Amount must be greater than zero".to_string());
    }
    Ok(())
}

pub fn username_is_present(title: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("Platform username is required".to_string());
    }
    Ok(())
}

// Same shape a browser `type="email"` input accepts: one '@', both sides
// non-empty, no whitespace.
pub fn email_is_well_formed(email: &str) -> Result<(), String> {
    let invalid = || Err(format!("Invalid email address: {email}"));
    if email.chars().any(char::is_whitespace) {
        return invalid();
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
            Ok(())
        }
        _ => invalid(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shapes() {
        assert!(email_is_well_formed("p1@example.com").is_ok());
        assert!(email_is_well_formed("p1@localhost").is_ok());
        assert!(email_is_well_formed("@example.com").is_err());
        assert!(email_is_well_formed("p1@").is_err());
        assert!(email_is_well_formed("p1@a@b").is_err());
        assert!(email_is_well_formed("p 1@example.com").is_err());
    }
}

//! Plain-text rendering of the workflow, one line per entry.

use crate::form::Field;
use crate::state::WorkflowState;
use btcpay_core::{Merchant, Platform};

pub const SUBMITTING_LABEL: &str = "Creating Invoice...";
pub const PAYMENT_RECEIVED_BANNER: &str = "Payment Received!";
pub const PAY_ACTION: &str = "Pay Now with BTC/Lightning";
pub const RESET_ACTION: &str = "Create New Invoice";
pub const SUBMIT_ACTION: &str = "Create Bitcoin Invoice";
pub const FOOTER: &str = "Secure Bitcoin payments powered by BTCPay Server";

pub fn header(merchant: Option<Merchant>) -> String {
    match merchant {
        Some(m) => format!("BTCPay | {}", m.label()),
        None => "BTCPay".to_string(),
    }
}

pub fn not_found_page() -> Vec<String> {
    vec![
        header(None),
        String::new(),
        "Merchant Not Found".to_string(),
        "Sorry, the merchant you are looking for does not exist or is not available.".to_string(),
        "Return to Homepage: /".to_string(),
        String::new(),
        FOOTER.to_string(),
    ]
}

/// Options listed under the platform selector.
pub fn platform_options() -> Vec<String> {
    Platform::ALL
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{}) {}", i + 1, p))
        .collect()
}

pub fn render(state: &WorkflowState) -> Vec<String> {
    let mut lines = vec!["Bitcoin | Payment".to_string()];
    match state {
        WorkflowState::Editing(form) | WorkflowState::Error { form, .. } => {
            for field in Field::ALL {
                let value = form.get(field);
                let value = if value.is_empty() { "-" } else { value };
                lines.push(format!("{}: {}", field.label(), value));
            }
            lines.push(format!("[{SUBMIT_ACTION}]"));
        }
        WorkflowState::Submitting { .. } => lines.push(SUBMITTING_LABEL.to_string()),
        WorkflowState::Display(result) => {
            lines.push("Invoice Created".to_string());
            lines.push(format!("Invoice ID: {}", result.invoice_id));
            lines.push(format!("Status: {}", result.status));
            if result.payment_received {
                lines.push(PAYMENT_RECEIVED_BANNER.to_string());
            }
            lines.push(format!("[{PAY_ACTION}]"));
            lines.push(format!("[{RESET_ACTION}]"));
        }
    }
    if let Some(message) = state.error() {
        lines.push(format!("Error: {message}"));
    }
    lines
}

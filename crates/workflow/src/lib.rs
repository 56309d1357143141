mod form;
mod navigator;
mod state;
pub mod view;

pub use form::{Field, FormError, FormFields};
pub use navigator::Navigator;
pub use state::{transition, Event, WorkflowState};

use invoice_client::{InvoiceClient, RemoteError};
use std::io;
use std::sync::Arc;

/// Shown when the server gave no error text of its own.
pub const GENERIC_FAILURE: &str = "Failed to create payment invoice";

/// User-facing message for a failed submission.
pub fn failure_message(err: &RemoteError) -> String {
    err.server_message()
        .unwrap_or(GENERIC_FAILURE)
        .to_string()
}

/// Drives one payment form against an invoice client.
pub struct PaymentWorkflow {
    client: Arc<dyn InvoiceClient>,
    navigator: Arc<dyn Navigator>,
    state: WorkflowState,
}

impl PaymentWorkflow {
    pub fn new(client: Arc<dyn InvoiceClient>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            client,
            navigator,
            state: WorkflowState::default(),
        }
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    fn apply(&mut self, event: Event) {
        let current = std::mem::take(&mut self.state);
        self.state = transition(current, event);
    }

    pub fn update(&mut self, field: Field, value: impl Into<String>) {
        self.apply(Event::FieldChanged(field, value.into()));
    }

    /// Validates the form and, if it holds, sends it. Returns once the
    /// workflow has settled in Display or Error.
    pub async fn submit(&mut self) {
        self.apply(Event::Submit);
        let request = match &self.state {
            WorkflowState::Submitting { request, .. } => request.clone(),
            _ => return,
        };

        let outcome = self
            .client
            .create_invoice(&request)
            .await
            .map_err(|err| failure_message(&err));
        if let Err(message) = &outcome {
            tracing::warn!(%message, "Invoice submission failed");
        }
        self.apply(Event::Completed(outcome));
    }

    /// Opens the invoice's payment page. `Ok(false)` when there is nothing
    /// to open.
    pub fn pay(&self) -> io::Result<bool> {
        let Some(url) = self.state.result().and_then(|r| r.payment_url.as_deref()) else {
            return Ok(false);
        };
        self.navigator.open_in_new_context(url)?;
        tracing::debug!(%url, "Opened payment page");
        Ok(true)
    }

    pub fn reset(&mut self) {
        self.apply(Event::Reset);
    }
}

use crate::form::{Field, FormFields};
use btcpay_core::{InvoiceRequest, InvoiceResult};

#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowState {
    Editing(FormFields),
    /// The request built from `form` is in flight.
    Submitting {
        form: FormFields,
        request: InvoiceRequest,
    },
    Display(InvoiceResult),
    /// Editing, with a banner describing the last failed submission.
    Error { form: FormFields, message: String },
}

impl Default for WorkflowState {
    fn default() -> Self {
        WorkflowState::Editing(FormFields::default())
    }
}

impl WorkflowState {
    pub fn form(&self) -> Option<&FormFields> {
        match self {
            WorkflowState::Editing(form)
            | WorkflowState::Submitting { form, .. }
            | WorkflowState::Error { form, .. } => Some(form),
            WorkflowState::Display(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            WorkflowState::Error { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&InvoiceResult> {
        match self {
            WorkflowState::Display(result) => Some(result),
            _ => None,
        }
    }

    pub fn is_editable(&self) -> bool {
        matches!(self, WorkflowState::Editing(_) | WorkflowState::Error { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    FieldChanged(Field, String),
    Submit,
    /// Outcome of the in-flight submission; the error side is already the
    /// message to show.
    Completed(Result<InvoiceResult, String>),
    Reset,
}

/// Pure transition function. Events that make no sense in the current
/// state leave it untouched.
pub fn transition(state: WorkflowState, event: Event) -> WorkflowState {
    match (state, event) {
        (WorkflowState::Editing(form), Event::FieldChanged(field, value)) => {
            WorkflowState::Editing(form.with(field, value))
        }
        (WorkflowState::Error { form, message }, Event::FieldChanged(field, value)) => {
            WorkflowState::Error {
                form: form.with(field, value),
                message,
            }
        }

        (WorkflowState::Editing(form) | WorkflowState::Error { form, .. }, Event::Submit) => {
            match form.to_request() {
                Ok(request) => WorkflowState::Submitting { form, request },
                Err(err) => WorkflowState::Error {
                    message: err.to_string(),
                    form,
                },
            }
        }

        (WorkflowState::Submitting { .. }, Event::Completed(Ok(result))) => {
            WorkflowState::Display(result)
        }
        (WorkflowState::Submitting { form, .. }, Event::Completed(Err(message))) => {
            WorkflowState::Error { form, message }
        }

        // no cancellation: a pending submission always runs to completion
        (state @ WorkflowState::Submitting { .. }, Event::Reset) => state,
        (_, Event::Reset) => WorkflowState::default(),

        (state, _) => state,
    }
}

use crate::auth::validate;
use crate::errors::AppError;

/// Password-recovery page state: an email form that flips to a
/// "check your inbox" confirmation once submitted.
#[derive(Debug, Clone, Default)]
pub struct RecoveryRequest {
    submitted_email: Option<String>,
}

impl RecoveryRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the address and flip to the confirmation view. No mail is
    /// actually sent; the record of the submitted address drives the UI.
    pub fn submit(&mut self, email: &str) -> Result<(), AppError> {
        if let Some(reason) = validate::validate_required(email, "Email") {
            return Err(AppError::Validation(reason));
        }
        self.submitted_email = Some(email.trim().to_string());
        Ok(())
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted_email.is_some()
    }

    /// The address the confirmation view echoes back.
    pub fn submitted_email(&self) -> Option<&str> {
        self.submitted_email.as_deref()
    }
}

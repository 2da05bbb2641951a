use serde::Deserialize;

use crate::auth::validate;
use crate::errors::AppError;
use crate::ui::View;

/// Login form state for the sign-in page.
///
/// Submission only checks field presence; there is no credential store, so
/// `auth::password::verify_password` is the collaborator a real account
/// system wires in here before handing out a session.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// Validate and "sign in". On success the caller navigates to the
    /// dashboard; on failure nothing is mutated and the user may retry.
    pub fn submit(&self) -> Result<View, AppError> {
        if validate::validate_required(&self.email, "Email").is_some()
            || validate::validate_password(&self.password).is_some()
        {
            return Err(AppError::validation("Please fill in all fields"));
        }
        Ok(View::Dashboard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_fields_required() {
        let form = LoginForm {
            email: "ivan.ivanov@example.com".into(),
            password: String::new(),
        };
        assert!(form.submit().is_err());

        let form = LoginForm {
            email: String::new(),
            password: "secret123".into(),
        };
        assert!(form.submit().is_err());
    }

    #[test]
    fn success_navigates_to_dashboard() {
        let form = LoginForm {
            email: "ivan.ivanov@example.com".into(),
            password: "secret123".into(),
        };
        assert_eq!(form.submit().unwrap(), View::Dashboard);
    }
}

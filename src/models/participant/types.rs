use serde::{Deserialize, Serialize};

use crate::auth::validate;
use crate::errors::AppError;
use crate::models::status::ModerationStatus;

/// How a participant takes part in the conference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticipationType {
    Speaker,
    Listener,
    Poster,
}

impl ParticipationType {
    pub fn code(&self) -> &'static str {
        match self {
            ParticipationType::Speaker => "speaker",
            ParticipationType::Listener => "listener",
            ParticipationType::Poster => "poster",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "speaker" => Some(ParticipationType::Speaker),
            "listener" => Some(ParticipationType::Listener),
            "poster" => Some(ParticipationType::Poster),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ParticipationType::Speaker => "Speaker",
            ParticipationType::Listener => "Listener",
            ParticipationType::Poster => "Poster session",
        }
    }
}

/// A registered attendee record with a moderation status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub organization: String,
    pub position: String,
    pub participation_type: ParticipationType,
    pub status: ModerationStatus,
    /// Registration date, YYYY-MM-DD.
    pub registered_at: String,
    /// Argon2 hash; `None` for seeded mock accounts that never set one.
    #[serde(skip_serializing, default)]
    pub password: Option<String>,
}

impl Participant {
    /// Full display name, as shown in the admin table.
    pub fn name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Validated registration data handed to the registry.
#[derive(Debug, Clone)]
pub struct NewParticipant {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub organization: String,
    pub position: String,
    pub participation_type: ParticipationType,
    /// Already hashed.
    pub password: String,
}

/// Raw form data from the registration page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub organization: String,
    pub position: String,
    pub participation_type: Option<ParticipationType>,
    pub agree_to_terms: bool,
}

impl RegistrationForm {
    /// Check every rule of the signup contract. First failing rule wins and
    /// is returned as the toast reason; nothing is mutated on failure.
    pub fn validate(&self) -> Result<(), AppError> {
        let checks = [
            validate::validate_required(&self.first_name, "First name"),
            validate::validate_required(&self.last_name, "Last name"),
            validate::validate_required(&self.email, "Email"),
            validate::validate_password(&self.password),
            validate::validate_password_match(&self.password, &self.confirm_password),
            validate::validate_terms(self.agree_to_terms),
        ];
        for reason in checks.into_iter().flatten() {
            return Err(AppError::Validation(reason));
        }
        Ok(())
    }

    /// Participation type defaults to listener when the select was left blank.
    pub fn participation(&self) -> ParticipationType {
        self.participation_type.unwrap_or(ParticipationType::Listener)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> RegistrationForm {
        RegistrationForm {
            first_name: "Ivan".into(),
            last_name: "Ivanov".into(),
            email: "ivan.ivanov@example.com".into(),
            password: "secret123".into(),
            confirm_password: "secret123".into(),
            organization: "Moscow State University".into(),
            position: "Professor".into(),
            participation_type: Some(ParticipationType::Speaker),
            agree_to_terms: true,
        }
    }

    #[test]
    fn complete_form_passes() {
        assert!(filled_form().validate().is_ok());
    }

    #[test]
    fn missing_required_field_names_the_field() {
        let mut form = filled_form();
        form.last_name.clear();
        let err = form.validate().unwrap_err();
        assert_eq!(err, AppError::validation("Last name is required"));
    }

    #[test]
    fn password_mismatch_is_specific() {
        let mut form = filled_form();
        form.confirm_password = "secret124".into();
        let err = form.validate().unwrap_err();
        assert_eq!(err, AppError::validation("Passwords do not match"));
    }

    #[test]
    fn terms_must_be_accepted() {
        let mut form = filled_form();
        form.agree_to_terms = false;
        assert!(form.validate().is_err());
    }

    #[test]
    fn organization_and_position_are_optional() {
        let mut form = filled_form();
        form.organization.clear();
        form.position.clear();
        form.participation_type = None;
        assert!(form.validate().is_ok());
        assert_eq!(form.participation(), ParticipationType::Listener);
    }
}

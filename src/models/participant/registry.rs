use std::collections::BTreeSet;

use crate::auth::password;
use crate::errors::AppError;
use crate::models::status::{self, ModerationAction, ModerationStatus};

use super::types::{NewParticipant, Participant, RegistrationForm};

/// In-memory participant collection backing the registration form and the
/// admin "Participants" tab. The registry owns its state exclusively; list
/// views read through the projection methods and never mutate.
#[derive(Debug, Default)]
pub struct ParticipantRegistry {
    participants: Vec<Participant>,
    /// Checkbox selection used by the "selected" mailing filter.
    selected: BTreeSet<i64>,
    next_id: i64,
}

impl ParticipantRegistry {
    pub fn new() -> Self {
        ParticipantRegistry {
            participants: Vec::new(),
            selected: BTreeSet::new(),
            next_id: 1,
        }
    }

    /// Build a registry from pre-existing records (seed data). The next id
    /// continues after the highest seeded one.
    pub fn with_participants(participants: Vec<Participant>) -> Self {
        let next_id = participants.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        ParticipantRegistry {
            participants,
            selected: BTreeSet::new(),
            next_id,
        }
    }

    // ---------- Registration ----------

    /// Validate a signup form, hash the password, and append a new pending
    /// participant. Returns the new id; on any validation failure the
    /// registry is untouched.
    pub fn register(&mut self, form: &RegistrationForm, today: &str) -> Result<i64, AppError> {
        form.validate()?;
        let new = NewParticipant {
            first_name: form.first_name.trim().to_string(),
            last_name: form.last_name.trim().to_string(),
            email: form.email.trim().to_string(),
            organization: form.organization.trim().to_string(),
            position: form.position.trim().to_string(),
            participation_type: form.participation(),
            password: password::hash_password(&form.password)?,
        };
        Ok(self.insert(new, today))
    }

    fn insert(&mut self, new: NewParticipant, today: &str) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        self.participants.push(Participant {
            id,
            first_name: new.first_name,
            last_name: new.last_name,
            email: new.email,
            organization: new.organization,
            position: new.position,
            participation_type: new.participation_type,
            status: ModerationStatus::Pending,
            registered_at: today.to_string(),
            password: Some(new.password),
        });
        log::info!("Registered participant #{id}");
        id
    }

    // ---------- Moderation ----------

    pub fn approve(&mut self, id: i64) -> Result<&Participant, AppError> {
        self.apply(id, ModerationAction::Approve)
    }

    pub fn reject(&mut self, id: i64) -> Result<&Participant, AppError> {
        self.apply(id, ModerationAction::Reject)
    }

    /// Apply a moderation action to one participant. Fails without mutation
    /// when the record is missing or already left `pending`.
    pub fn apply(&mut self, id: i64, action: ModerationAction) -> Result<&Participant, AppError> {
        let participant = self
            .participants
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(AppError::NotFound)?;
        participant.status = status::transition(participant.status, action)?;
        Ok(participant)
    }

    // ---------- Selection ----------

    /// Toggle a participant in or out of the mailing selection set.
    pub fn toggle_selection(&mut self, id: i64) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    pub fn is_selected(&self, id: i64) -> bool {
        self.selected.contains(&id)
    }

    pub fn selected(&self) -> &BTreeSet<i64> {
        &self.selected
    }

    // ---------- Read-side projections ----------

    pub fn get(&self, id: i64) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    pub fn all(&self) -> &[Participant] {
        &self.participants
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Filter for the admin table: case-insensitive search over name and
    /// email, plus an optional status filter. Pure view over the collection.
    pub fn filtered(
        &self,
        search: &str,
        status: Option<ModerationStatus>,
    ) -> Vec<&Participant> {
        let needle = search.trim().to_lowercase();
        self.participants
            .iter()
            .filter(|p| status.is_none_or(|s| p.status == s))
            .filter(|p| {
                needle.is_empty()
                    || p.name().to_lowercase().contains(&needle)
                    || p.email.to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn count_by_status(&self, status: ModerationStatus) -> usize {
        self.participants.iter().filter(|p| p.status == status).count()
    }

    pub fn count_by_type(&self, participation: super::ParticipationType) -> usize {
        self.participants
            .iter()
            .filter(|p| p.participation_type == participation)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::participant::ParticipationType;

    fn registry_with_one_pending() -> (ParticipantRegistry, i64) {
        let mut registry = ParticipantRegistry::new();
        let form = RegistrationForm {
            first_name: "Maria".into(),
            last_name: "Petrova".into(),
            email: "petrova@example.com".into(),
            password: "secret123".into(),
            confirm_password: "secret123".into(),
            organization: "SPbU".into(),
            position: String::new(),
            participation_type: Some(ParticipationType::Listener),
            agree_to_terms: true,
        };
        let id = registry.register(&form, "2024-12-11").unwrap();
        (registry, id)
    }

    #[test]
    fn register_appends_pending_with_hashed_password() {
        let (registry, id) = registry_with_one_pending();
        let p = registry.get(id).unwrap();
        assert_eq!(p.status, ModerationStatus::Pending);
        assert_eq!(p.registered_at, "2024-12-11");
        let hash = p.password.as_deref().unwrap();
        assert!(password::verify_password("secret123", hash).unwrap());
    }

    #[test]
    fn invalid_form_mutates_nothing() {
        let mut registry = ParticipantRegistry::new();
        let form = RegistrationForm::default();
        assert!(registry.register(&form, "2024-12-11").is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn approve_is_single_shot() {
        let (mut registry, id) = registry_with_one_pending();
        assert_eq!(
            registry.approve(id).unwrap().status,
            ModerationStatus::Approved
        );
        assert!(registry.reject(id).is_err());
        assert_eq!(
            registry.get(id).unwrap().status,
            ModerationStatus::Approved
        );
    }

    #[test]
    fn moderating_unknown_id_is_not_found() {
        let mut registry = ParticipantRegistry::new();
        assert_eq!(registry.approve(42).unwrap_err(), AppError::NotFound);
    }

    #[test]
    fn selection_toggles() {
        let (mut registry, id) = registry_with_one_pending();
        registry.toggle_selection(id);
        assert!(registry.is_selected(id));
        registry.toggle_selection(id);
        assert!(!registry.is_selected(id));
    }

    #[test]
    fn filtered_searches_name_and_email_without_mutating() {
        let (mut registry, id) = registry_with_one_pending();
        let form = RegistrationForm {
            first_name: "Petr".into(),
            last_name: "Sidorov".into(),
            email: "sidorov@example.com".into(),
            password: "secret123".into(),
            confirm_password: "secret123".into(),
            organization: "NSU".into(),
            position: String::new(),
            participation_type: Some(ParticipationType::Speaker),
            agree_to_terms: true,
        };
        registry.register(&form, "2024-12-12").unwrap();
        registry.approve(id).unwrap();

        assert_eq!(registry.filtered("petrova", None).len(), 1);
        assert_eq!(registry.filtered("sidorov@", None).len(), 1);
        assert_eq!(
            registry.filtered("", Some(ModerationStatus::Approved)).len(),
            1
        );
        assert_eq!(registry.filtered("", None).len(), 2);
        assert_eq!(registry.count_by_type(ParticipationType::Speaker), 1);
    }
}

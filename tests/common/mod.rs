//! Shared fixtures for the domain-model tests: the seeded mock collections
//! the site ships with, plus a fully filled registration form.

use confhub::models::abstracts::AbstractStore;
use confhub::models::mailing::MailingLog;
use confhub::models::participant::{ParticipantRegistry, ParticipationType, RegistrationForm};
use confhub::seed;

pub const TEST_EMAIL: &str = "smirnova@example.com";
pub const TEST_PASSWORD: &str = "correct-horse";
pub const TODAY: &str = "2024-12-13";

/// The three mock participants: #1 approved speaker, #2 pending listener,
/// #3 pending speaker.
pub fn seeded_participants() -> ParticipantRegistry {
    seed::participants()
}

/// The two mock abstracts, both pending.
pub fn seeded_abstracts() -> AbstractStore {
    seed::abstracts()
}

/// The two delivered mailings of the history table.
pub fn seeded_mailing_history() -> MailingLog {
    seed::mailing_history()
}

/// A registration form that passes every rule.
pub fn filled_registration() -> RegistrationForm {
    RegistrationForm {
        first_name: "Anna".into(),
        last_name: "Smirnova".into(),
        email: TEST_EMAIL.into(),
        password: TEST_PASSWORD.into(),
        confirm_password: TEST_PASSWORD.into(),
        organization: "Ural Federal University".into(),
        position: "Researcher".into(),
        participation_type: Some(ParticipationType::Poster),
        agree_to_terms: true,
    }
}

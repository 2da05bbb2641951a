pub mod registry;
pub mod types;

pub use registry::ParticipantRegistry;
pub use types::{NewParticipant, Participant, ParticipationType, RegistrationForm};

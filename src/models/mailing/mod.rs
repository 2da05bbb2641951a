pub mod composer;
pub mod types;

pub use composer::{MailingLog, recipient_count, resolve_placeholders};
pub use types::{DeliveryStatus, EmailTemplate, RecipientFilter, SentMailing};

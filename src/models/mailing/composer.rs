use std::collections::BTreeSet;

use crate::errors::AppError;
use crate::models::participant::{Participant, ParticipationType};
use crate::models::status::ModerationStatus;

use super::types::{DeliveryStatus, EmailTemplate, RecipientFilter, SentMailing};

/// Resolve how many participants a filter addresses. An explicit selection
/// may be empty; zero recipients is a valid (if pointless) mailing.
pub fn recipient_count(
    filter: RecipientFilter,
    participants: &[Participant],
    selected: &BTreeSet<i64>,
) -> usize {
    match filter {
        RecipientFilter::All => participants.len(),
        RecipientFilter::Approved => participants
            .iter()
            .filter(|p| p.status == ModerationStatus::Approved)
            .count(),
        RecipientFilter::Speakers => participants
            .iter()
            .filter(|p| p.participation_type == ParticipationType::Speaker)
            .count(),
        RecipientFilter::Listeners => participants
            .iter()
            .filter(|p| p.participation_type == ParticipationType::Listener)
            .count(),
        RecipientFilter::Selected => selected.len(),
    }
}

/// Substitute the `{name}`, `{email}` and `{organization}` tokens for one
/// recipient. Purely textual; unknown tokens pass through untouched.
pub fn resolve_placeholders(body: &str, recipient: &Participant) -> String {
    body.replace("{name}", &recipient.name())
        .replace("{email}", &recipient.email)
        .replace("{organization}", &recipient.organization)
}

/// The mailing composer's send-history log. `send` is the only mutation;
/// everything else reads.
#[derive(Debug, Default)]
pub struct MailingLog {
    history: Vec<SentMailing>,
}

impl MailingLog {
    pub fn new() -> Self {
        MailingLog {
            history: Vec::new(),
        }
    }

    pub fn with_history(history: Vec<SentMailing>) -> Self {
        MailingLog { history }
    }

    /// "Send" a mailing: refuse when subject or body is blank, otherwise
    /// record the raw template's subject, the resolved recipient count and a
    /// timestamp. No transport exists, so the record stays `Queued`.
    pub fn send(
        &mut self,
        template: &EmailTemplate,
        participants: &[Participant],
        selected: &BTreeSet<i64>,
        sent_at: &str,
    ) -> Result<usize, AppError> {
        if template.subject.trim().is_empty() || template.body.trim().is_empty() {
            return Err(AppError::validation("Fill in the email subject and body"));
        }
        let count = recipient_count(template.recipient_filter, participants, selected);
        self.history.push(SentMailing {
            subject: template.subject.clone(),
            recipient_count: count,
            sent_at: sent_at.to_string(),
            status: DeliveryStatus::Queued,
        });
        log::info!(
            "Mailing '{}' queued for {count} recipient(s)",
            template.subject
        );
        Ok(count)
    }

    pub fn history(&self) -> &[SentMailing] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

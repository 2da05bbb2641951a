use crate::errors::AppError;
use crate::models::status::{self, ModerationAction, ModerationStatus};

use super::types::{Abstract, AbstractForm};

/// In-memory abstract collection: the dashboard submits into it, the admin
/// "Abstracts" tab moderates it.
#[derive(Debug, Default)]
pub struct AbstractStore {
    abstracts: Vec<Abstract>,
    next_id: i64,
}

impl AbstractStore {
    pub fn new() -> Self {
        AbstractStore {
            abstracts: Vec::new(),
            next_id: 1,
        }
    }

    pub fn with_abstracts(abstracts: Vec<Abstract>) -> Self {
        let next_id = abstracts.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        AbstractStore { abstracts, next_id }
    }

    /// Validate and accept a submission, appending it as `Pending`.
    /// `author`/`email` come from the logged-in participant's profile.
    pub fn submit(
        &mut self,
        form: &AbstractForm,
        author: &str,
        email: &str,
        today: &str,
    ) -> Result<i64, AppError> {
        form.validate()?;
        let id = self.next_id;
        self.next_id += 1;
        self.abstracts.push(Abstract {
            id,
            title: form.title.trim().to_string(),
            author: if form.authors.trim().is_empty() {
                author.to_string()
            } else {
                form.authors.trim().to_string()
            },
            email: email.to_string(),
            content: form.content.clone(),
            keywords: form.keywords.trim().to_string(),
            file: form.file.clone(),
            submitted_at: today.to_string(),
            status: ModerationStatus::Pending,
        });
        log::info!("Accepted abstract #{id} for moderation");
        Ok(id)
    }

    pub fn approve(&mut self, id: i64) -> Result<&Abstract, AppError> {
        self.apply(id, ModerationAction::Approve)
    }

    pub fn reject(&mut self, id: i64) -> Result<&Abstract, AppError> {
        self.apply(id, ModerationAction::Reject)
    }

    /// Same single-shot transition as participants.
    pub fn apply(&mut self, id: i64, action: ModerationAction) -> Result<&Abstract, AppError> {
        let entry = self
            .abstracts
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(AppError::NotFound)?;
        entry.status = status::transition(entry.status, action)?;
        Ok(entry)
    }

    pub fn get(&self, id: i64) -> Option<&Abstract> {
        self.abstracts.iter().find(|a| a.id == id)
    }

    pub fn all(&self) -> &[Abstract] {
        &self.abstracts
    }

    pub fn len(&self) -> usize {
        self.abstracts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.abstracts.is_empty()
    }

    /// Status filter for the moderation table; read-only projection.
    pub fn filtered(&self, status: Option<ModerationStatus>) -> Vec<&Abstract> {
        self.abstracts
            .iter()
            .filter(|a| status.is_none_or(|s| a.status == s))
            .collect()
    }

    pub fn count_by_status(&self, status: ModerationStatus) -> usize {
        self.abstracts.iter().filter(|a| a.status == status).count()
    }

    /// Abstracts submitted from a given account, for the "My abstracts" list.
    pub fn by_email(&self, email: &str) -> Vec<&Abstract> {
        self.abstracts.iter().filter(|a| a.email == email).collect()
    }
}

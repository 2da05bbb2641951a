use serde::{Deserialize, Serialize};

use crate::auth::validate;
use crate::errors::AppError;
use crate::models::status::ModerationStatus;

/// Hard cap on an attached file, 5 MiB.
pub const MAX_FILE_BYTES: u64 = 5 * 1024 * 1024;

/// Cap on the abstract body. The form shows a remaining-count; submission
/// also blocks over-limit content outright.
pub const MAX_CONTENT_CHARS: usize = 3000;

/// Accepted attachment formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    Pdf,
    Doc,
    Docx,
}

impl FileKind {
    /// Derive the kind from the file-name extension. The picker filter is
    /// advisory; this is the check that actually gates submission.
    pub fn from_name(name: &str) -> Option<Self> {
        let ext = name.rsplit_once('.').map(|(_, ext)| ext.to_lowercase())?;
        match ext.as_str() {
            "pdf" => Some(FileKind::Pdf),
            "doc" => Some(FileKind::Doc),
            "docx" => Some(FileKind::Docx),
            _ => None,
        }
    }
}

/// What the file-selection interface hands us: a name and a byte size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileUpload {
    pub name: String,
    pub size: u64,
}

impl FileUpload {
    /// Enforce the attachment policy. Returns the rejection reason, or
    /// `None` when the file is acceptable. Exactly 5 MiB still passes.
    pub fn validate(&self) -> Option<String> {
        if self.size > MAX_FILE_BYTES {
            return Some("File is too large. Maximum size: 5 MB".to_string());
        }
        if FileKind::from_name(&self.name).is_none() {
            return Some("Unsupported file format. Allowed: PDF, DOC, DOCX".to_string());
        }
        None
    }

    pub fn kind(&self) -> Option<FileKind> {
        FileKind::from_name(&self.name)
    }
}

/// A submitted talk abstract with a moderation status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Abstract {
    pub id: i64,
    pub title: String,
    /// Short author line as shown in the moderation table ("Ivanov I.I.").
    pub author: String,
    pub email: String,
    pub content: String,
    pub keywords: String,
    pub file: Option<FileUpload>,
    /// Submission date, YYYY-MM-DD.
    pub submitted_at: String,
    pub status: ModerationStatus,
}

/// Form state for the dashboard "submit abstract" page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AbstractForm {
    pub title: String,
    pub authors: String,
    pub content: String,
    pub keywords: String,
    pub file: Option<FileUpload>,
}

impl AbstractForm {
    /// Attach a picked file, rejecting it up front the way the upload
    /// handler did. A rejected file leaves any previous attachment in place.
    pub fn attach(&mut self, file: FileUpload) -> Result<(), AppError> {
        if let Some(reason) = file.validate() {
            return Err(AppError::Validation(reason));
        }
        self.file = Some(file);
        Ok(())
    }

    /// Full submission contract: title and content present, content within
    /// the character cap, attachment (if any) within policy.
    pub fn validate(&self) -> Result<(), AppError> {
        let checks = [
            validate::validate_required(&self.title, "Title"),
            validate::validate_required(&self.content, "Content"),
            validate::validate_max_len(&self.content, "Content", MAX_CONTENT_CHARS),
            self.file.as_ref().and_then(|f| f.validate()),
        ];
        for reason in checks.into_iter().flatten() {
            return Err(AppError::Validation(reason));
        }
        Ok(())
    }

    /// Characters still available, for the "n / 3000" counter.
    pub fn remaining_chars(&self) -> usize {
        MAX_CONTENT_CHARS.saturating_sub(self.content.chars().count())
    }
}

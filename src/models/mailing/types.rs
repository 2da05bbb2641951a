use serde::{Deserialize, Serialize};

/// Named rule selecting which participants receive a mailing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RecipientFilter {
    #[default]
    All,
    Approved,
    Speakers,
    Listeners,
    Selected,
}

impl RecipientFilter {
    pub fn code(&self) -> &'static str {
        match self {
            RecipientFilter::All => "all",
            RecipientFilter::Approved => "approved",
            RecipientFilter::Speakers => "speakers",
            RecipientFilter::Listeners => "listeners",
            RecipientFilter::Selected => "selected",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "all" => Some(RecipientFilter::All),
            "approved" => Some(RecipientFilter::Approved),
            "speakers" => Some(RecipientFilter::Speakers),
            "listeners" => Some(RecipientFilter::Listeners),
            "selected" => Some(RecipientFilter::Selected),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RecipientFilter::All => "All participants",
            RecipientFilter::Approved => "Approved only",
            RecipientFilter::Speakers => "Speakers only",
            RecipientFilter::Listeners => "Listeners only",
            RecipientFilter::Selected => "Selected",
        }
    }
}

/// An outbound message descriptor. The body may carry `{name}`, `{email}`
/// and `{organization}` placeholder tokens; they stay raw here and are only
/// resolved per recipient on the (hypothetical) send path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmailTemplate {
    pub subject: String,
    pub body: String,
    pub recipient_filter: RecipientFilter,
}

impl EmailTemplate {
    pub fn new(subject: &str, body: &str, recipient_filter: RecipientFilter) -> Self {
        EmailTemplate {
            subject: subject.to_string(),
            body: body.to_string(),
            recipient_filter,
        }
    }

    // Preset templates from the admin mailing tab.

    pub fn invitation() -> Self {
        Self::new(
            "Conference invitation",
            "Hello, {name}!\n\nWe invite you to take part in the conference...",
            RecipientFilter::All,
        )
    }

    pub fn registration_confirmed() -> Self {
        Self::new(
            "Registration confirmed",
            "Hello, {name}!\n\nYour registration has been confirmed...",
            RecipientFilter::Approved,
        )
    }

    pub fn reminder() -> Self {
        Self::new(
            "Conference reminder",
            "Hello, {name}!\n\nA reminder that the conference starts...",
            RecipientFilter::Approved,
        )
    }

    pub fn materials() -> Self {
        Self::new(
            "Access to conference materials",
            "Hello, {name}!\n\nThe conference materials are available at the link...",
            RecipientFilter::Approved,
        )
    }

    pub fn abstract_status() -> Self {
        Self::new(
            "Abstract status",
            "Hello, {name}!\n\nYour abstract has passed moderation...",
            RecipientFilter::Speakers,
        )
    }
}

/// Delivery state shown in the send-history table. No transport exists, so
/// new sends stay `Queued`; the seeded history shows `Delivered`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    Queued,
    Delivered,
}

impl DeliveryStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DeliveryStatus::Queued => "Queued",
            DeliveryStatus::Delivered => "Delivered",
        }
    }
}

/// One row of the send-history log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentMailing {
    pub subject: String,
    pub recipient_count: usize,
    /// Send timestamp, "YYYY-MM-DD HH:MM".
    pub sent_at: String,
    pub status: DeliveryStatus,
}

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Moderation status shared by participants and abstracts.
///
/// Every entity starts at `Pending` and leaves it exactly once — both
/// `Approved` and `Rejected` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ModerationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// The two administrator actions a pending entity exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModerationAction {
    Approve,
    Reject,
}

impl ModerationStatus {
    /// Stable machine code, used in filters and audit payloads.
    pub fn code(&self) -> &'static str {
        match self {
            ModerationStatus::Pending => "pending",
            ModerationStatus::Approved => "approved",
            ModerationStatus::Rejected => "rejected",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pending" => Some(ModerationStatus::Pending),
            "approved" => Some(ModerationStatus::Approved),
            "rejected" => Some(ModerationStatus::Rejected),
            _ => None,
        }
    }

    /// Display label for the status badge.
    pub fn label(&self) -> &'static str {
        match self {
            ModerationStatus::Pending => "Under review",
            ModerationStatus::Approved => "Approved",
            ModerationStatus::Rejected => "Rejected",
        }
    }

    /// Badge variant name the templates key their styling on.
    pub fn badge_variant(&self) -> &'static str {
        match self {
            ModerationStatus::Pending => "secondary",
            ModerationStatus::Approved => "default",
            ModerationStatus::Rejected => "destructive",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, ModerationStatus::Pending)
    }
}

impl ModerationAction {
    /// The status this action moves a pending entity to.
    pub fn target(&self) -> ModerationStatus {
        match self {
            ModerationAction::Approve => ModerationStatus::Approved,
            ModerationAction::Reject => ModerationStatus::Rejected,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ModerationAction::Approve => "approve",
            ModerationAction::Reject => "reject",
        }
    }
}

/// Apply an administrator action to a status.
///
/// Only `Pending` entities may move; anything else is a single-shot
/// violation and errors without mutating.
pub fn transition(
    current: ModerationStatus,
    action: ModerationAction,
) -> Result<ModerationStatus, AppError> {
    match current {
        ModerationStatus::Pending => Ok(action.target()),
        from => Err(AppError::InvalidTransition {
            from,
            to: action.target(),
        }),
    }
}

/// Actions currently exposed for a status. Terminal statuses expose none,
/// which is what makes repeated approve/reject unreachable from any view.
pub fn available_actions(status: ModerationStatus) -> &'static [ModerationAction] {
    match status {
        ModerationStatus::Pending => &[ModerationAction::Approve, ModerationAction::Reject],
        ModerationStatus::Approved | ModerationStatus::Rejected => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_approves_once() {
        let next = transition(ModerationStatus::Pending, ModerationAction::Approve).unwrap();
        assert_eq!(next, ModerationStatus::Approved);
        assert!(next.is_terminal());
    }

    #[test]
    fn terminal_statuses_refuse_actions() {
        for status in [ModerationStatus::Approved, ModerationStatus::Rejected] {
            for action in [ModerationAction::Approve, ModerationAction::Reject] {
                assert!(transition(status, action).is_err());
            }
            assert!(available_actions(status).is_empty());
        }
    }

    #[test]
    fn pending_exposes_both_actions() {
        assert_eq!(available_actions(ModerationStatus::Pending).len(), 2);
    }

    #[test]
    fn code_roundtrip() {
        for status in [
            ModerationStatus::Pending,
            ModerationStatus::Approved,
            ModerationStatus::Rejected,
        ] {
            assert_eq!(ModerationStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(ModerationStatus::from_code("archived"), None);
    }
}

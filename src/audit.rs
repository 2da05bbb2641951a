//! In-memory trail of administrator actions. Toasts are fire-and-forget;
//! the trail keeps enough context to answer "who approved what, when"
//! within the session.

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Serialize)]
pub struct AuditEntry {
    /// Action code, e.g. "participant.approved" or "mailing.sent".
    pub action: String,
    pub target_type: String,
    pub target_id: i64,
    pub details: Value,
    /// Timestamp, "YYYY-MM-DD HH:MM".
    pub at: String,
}

#[derive(Debug, Default)]
pub struct AuditLog {
    entries: Vec<AuditEntry>,
}

impl AuditLog {
    pub fn new() -> Self {
        AuditLog {
            entries: Vec::new(),
        }
    }

    pub fn record(
        &mut self,
        action: &str,
        target_type: &str,
        target_id: i64,
        details: Value,
        at: &str,
    ) {
        log::info!("audit: {action} {target_type}#{target_id}");
        self.entries.push(AuditEntry {
            action: action.to_string(),
            target_type: target_type.to_string(),
            target_id,
            details,
            at: at.to_string(),
        });
    }

    pub fn entries(&self) -> &[AuditEntry] {
        &self.entries
    }

    /// Entries for one action code, newest last.
    pub fn by_action(&self, action: &str) -> Vec<&AuditEntry> {
        self.entries.iter().filter(|e| e.action == action).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn records_and_filters_by_action() {
        let mut audit = AuditLog::new();
        audit.record(
            "participant.approved",
            "participant",
            2,
            json!({"summary": "Approved participant #2"}),
            "2024-12-12 10:00",
        );
        audit.record(
            "mailing.sent",
            "mailing",
            1,
            json!({"recipient_count": 3}),
            "2024-12-12 10:05",
        );
        assert_eq!(audit.entries().len(), 2);
        assert_eq!(audit.by_action("participant.approved").len(), 1);
        assert_eq!(
            audit.by_action("mailing.sent")[0].details["recipient_count"],
            3
        );
    }
}

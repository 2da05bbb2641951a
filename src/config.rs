use chrono::{NaiveDate, NaiveDateTime};

/// Conference-wide settings, the admin "Settings" tab backed by environment
/// variables instead of a store. Malformed values warn and fall back to the
/// defaults rather than failing startup.
#[derive(Debug, Clone)]
pub struct ConferenceConfig {
    pub name: String,
    /// The instant the countdown targets.
    pub starts_at: NaiveDateTime,
    pub ends_on: NaiveDate,
    pub organizer_email: String,
}

impl Default for ConferenceConfig {
    fn default() -> Self {
        ConferenceConfig {
            name: "International Scientific Conference 2024".to_string(),
            starts_at: parse_start("2024-12-15T09:00:00").expect("default start is well-formed"),
            ends_on: NaiveDate::from_ymd_opt(2024, 12, 15).expect("default end is well-formed"),
            organizer_email: "organizer@conference.com".to_string(),
        }
    }
}

impl ConferenceConfig {
    /// Read overrides from `CONFHUB_*` environment variables.
    pub fn from_env() -> Self {
        let mut cfg = ConferenceConfig::default();
        if let Ok(name) = std::env::var("CONFHUB_NAME") {
            if !name.trim().is_empty() {
                cfg.name = name;
            }
        }
        if let Ok(raw) = std::env::var("CONFHUB_STARTS_AT") {
            match parse_start(&raw) {
                Some(starts_at) => cfg.starts_at = starts_at,
                None => log::warn!(
                    "CONFHUB_STARTS_AT '{raw}' is not YYYY-MM-DDTHH:MM:SS — using default"
                ),
            }
        }
        if let Ok(raw) = std::env::var("CONFHUB_ENDS_ON") {
            match NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
                Ok(ends_on) => cfg.ends_on = ends_on,
                Err(_) => {
                    log::warn!("CONFHUB_ENDS_ON '{raw}' is not YYYY-MM-DD — using default")
                }
            }
        }
        if let Ok(email) = std::env::var("CONFHUB_ORGANIZER_EMAIL") {
            if email.contains('@') {
                cfg.organizer_email = email;
            } else {
                log::warn!("CONFHUB_ORGANIZER_EMAIL '{email}' is not an address — using default");
            }
        }
        cfg
    }
}

/// Parse a start instant in the `2024-12-15T09:00:00` shape.
pub fn parse_start(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw.trim(), "%Y-%m-%dT%H:%M:%S").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn default_targets_the_conference_morning() {
        let cfg = ConferenceConfig::default();
        assert_eq!(cfg.starts_at.date().year(), 2024);
        assert_eq!(cfg.starts_at.date().month(), 12);
        assert_eq!(cfg.starts_at.date().day(), 15);
        assert_eq!(cfg.starts_at.time().hour(), 9);
    }

    #[test]
    fn parse_start_rejects_garbage() {
        assert!(parse_start("2024-12-15T09:00:00").is_some());
        assert!(parse_start("December 15th").is_none());
        assert!(parse_start("2024-12-15").is_none());
    }
}

//! Predefined statuses - message templates users can pick instead of free text

use chrono::DateTime;
use serde::Serialize;

/// When a predefined message clears itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "time", rename_all = "kebab-case")]
pub enum ClearAtPolicy {
    /// Clear after the given number of seconds
    Period(i64),
    /// Clear at the last second of the current UTC day
    EndOfDay,
    /// Stay until changed
    Never,
}

impl ClearAtPolicy {
    /// Absolute clear-at timestamp for a message set at `now`
    pub fn resolve(self, now: i64) -> Option<i64> {
        match self {
            Self::Period(seconds) => Some(now + seconds),
            Self::EndOfDay => {
                let day = DateTime::from_timestamp(now, 0)?.date_naive();
                Some(day.and_hms_opt(23, 59, 59)?.and_utc().timestamp())
            }
            Self::Never => None,
        }
    }
}

/// A message template from the built-in catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredefinedStatus {
    pub id: &'static str,
    pub icon: &'static str,
    pub message: &'static str,
    pub clear_at: ClearAtPolicy,
}

/// Built-in catalog
pub const PREDEFINED_STATUSES: [PredefinedStatus; 5] = [
    PredefinedStatus {
        id: "meeting",
        icon: "📅",
        message: "In a meeting",
        clear_at: ClearAtPolicy::Period(3600),
    },
    PredefinedStatus {
        id: "commuting",
        icon: "🚌",
        message: "Commuting",
        clear_at: ClearAtPolicy::Period(1800),
    },
    PredefinedStatus {
        id: "remote-work",
        icon: "🏡",
        message: "Working remotely",
        clear_at: ClearAtPolicy::EndOfDay,
    },
    PredefinedStatus {
        id: "sick-leave",
        icon: "🤒",
        message: "Out sick",
        clear_at: ClearAtPolicy::EndOfDay,
    },
    PredefinedStatus {
        id: "vacationing",
        icon: "🌴",
        message: "Vacationing",
        clear_at: ClearAtPolicy::Never,
    },
];

impl PredefinedStatus {
    /// Look up a catalog entry by id
    pub fn find(id: &str) -> Option<&'static PredefinedStatus> {
        PREDEFINED_STATUSES.iter().find(|status| status.id == id)
    }

    /// Whether `id` names a catalog entry
    pub fn is_valid_id(id: &str) -> bool {
        Self::find(id).is_some()
    }
}

//! Status type - the availability state a user can be in

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User availability state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StatusType {
    /// User is online and active
    Online,
    /// User is away from keyboard
    Away,
    /// Do not disturb
    Dnd,
    /// User appears offline to others
    Invisible,
    /// User is offline
    #[default]
    Offline,
}

impl StatusType {
    /// All status types, in the order clients list them
    pub const ALL: [StatusType; 5] = [
        Self::Online,
        Self::Away,
        Self::Dnd,
        Self::Invisible,
        Self::Offline,
    ];

    /// String form as persisted and serialized
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Away => "away",
            Self::Dnd => "dnd",
            Self::Invisible => "invisible",
            Self::Offline => "offline",
        }
    }

    /// Status as seen by other users (invisible users look offline)
    #[must_use]
    pub const fn public(self) -> Self {
        match self {
            Self::Invisible => Self::Offline,
            other => other,
        }
    }
}

impl fmt::Display for StatusType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusType {
    type Err = StatusTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "online" => Ok(Self::Online),
            "away" => Ok(Self::Away),
            "dnd" => Ok(Self::Dnd),
            "invisible" => Ok(Self::Invisible),
            "offline" => Ok(Self::Offline),
            _ => Err(StatusTypeParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an unknown status type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid status type: {0}")]
pub struct StatusTypeParseError(pub String);

//! Lane identifiers and task status.

use super::ParseLaneError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Board lane, which doubles as the task status.
///
/// A task's lane is the single source of truth for its status; the
/// `completed` flag exposed on [`Task`](super::Task) is derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Lane {
    /// Work that has not been started.
    Pending,
    /// Work that is underway.
    InProgress,
    /// Work that has been finished.
    Completed,
}

impl Lane {
    /// All lanes in board order.
    pub const ALL: [Self; 3] = [Self::Pending, Self::InProgress, Self::Completed];

    /// Returns the lane identifier exposed to the presentation layer.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }

    /// Returns the human-readable lane heading.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }

    /// Returns `true` for the completed lane.
    #[must_use]
    pub const fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Returns the lane an upstream record lands in.
    #[must_use]
    pub const fn from_completed(completed: bool) -> Self {
        if completed {
            Self::Completed
        } else {
            Self::Pending
        }
    }
}

impl TryFrom<&str> for Lane {
    type Error = ParseLaneError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "pending" => Ok(Self::Pending),
            "in-progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseLaneError(value.to_owned())),
        }
    }
}

impl FromStr for Lane {
    type Err = ParseLaneError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::try_from(value)
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four kanban stages a work package can occupy. Closed set: any lane
/// name arriving from a caller is normalized and validated before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lane {
    Planned,
    Doing,
    ForReview,
    Done,
}

impl Lane {
    /// Lanes in board order. Scans and listings iterate in this order.
    pub fn all() -> &'static [Lane] {
        &[Lane::Planned, Lane::Doing, Lane::ForReview, Lane::Done]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Lane::Planned => "planned",
            Lane::Doing => "doing",
            Lane::ForReview => "for_review",
            Lane::Done => "done",
        }
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Lane {
    type Err = crate::error::BoardError;

    /// Case-folds and treats `-` as `_`, so `For-Review` parses as `for_review`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "planned" => Ok(Lane::Planned),
            "doing" => Ok(Lane::Doing),
            "for_review" => Ok(Lane::ForReview),
            "done" => Ok(Lane::Done),
            _ => Err(crate::error::BoardError::InvalidLane(s.to_string())),
        }
    }
}

use crate::config::Config;
use crate::lane::Lane;
use chrono::Utc;
use serde::Serialize;
use std::fmt;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Current time in the fixed UTC format used by activity-log entries.
pub fn now_utc() -> String {
    Utc::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Who an activity entry is attributed to: the configured actor if the
/// project sets one, else `$USER`, else the literal `unknown`. Lifecycle
/// operations never fail for a missing identity.
pub fn resolve_actor(config: &Config) -> String {
    config
        .actor
        .clone()
        .or_else(|| std::env::var("USER").ok())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Where an entry was recorded: in a lane, or crossing between two.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Context {
    InLane(Lane),
    Transition { from: Lane, to: Lane },
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Context::InLane(lane) => write!(f, "{lane}"),
            Context::Transition { from, to } => write!(f, "{from} → {to}"),
        }
    }
}

/// One immutable audit record. Entries are only ever appended to a
/// document's activity log, never edited or removed.
#[derive(Debug, Clone, Serialize)]
pub struct ActivityEntry {
    pub timestamp: String,
    pub actor: String,
    pub context: Context,
    pub note: String,
}

impl ActivityEntry {
    pub fn new(actor: &str, context: Context, note: &str) -> Self {
        Self {
            timestamp: now_utc(),
            actor: actor.to_string(),
            context,
            note: note.to_string(),
        }
    }

    /// Markdown bullet line as stored in the document body.
    pub fn render(&self) -> String {
        format!(
            "- **{}** | {} | {} | {}",
            self.timestamp, self.actor, self.context, self.note
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_transition_entry() {
        let entry = ActivityEntry {
            timestamp: "2026-01-02T03:04:05Z".to_string(),
            actor: "alice".to_string(),
            context: Context::Transition {
                from: Lane::Planned,
                to: Lane::Doing,
            },
            note: "start work".to_string(),
        };
        assert_eq!(
            entry.render(),
            "- **2026-01-02T03:04:05Z** | alice | planned → doing | start work"
        );
    }

    #[test]
    fn renders_in_lane_entry() {
        let entry = ActivityEntry {
            timestamp: "2026-01-02T03:04:05Z".to_string(),
            actor: "bob".to_string(),
            context: Context::InLane(Lane::ForReview),
            note: "Activity recorded".to_string(),
        };
        assert_eq!(
            entry.render(),
            "- **2026-01-02T03:04:05Z** | bob | for_review | Activity recorded"
        );
    }

    #[test]
    fn configured_actor_wins() {
        let config = Config {
            actor: Some("release-bot".to_string()),
            ..Config::default()
        };
        assert_eq!(resolve_actor(&config), "release-bot");
    }
}

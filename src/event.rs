//! The resolved event handed to the event store.
//!
//! The engine only produces the two strings; this type pairs them with the
//! event's time span and serializes to the outbound request body:
//!
//! ```json
//! {"action":"create","id":null,"title":"...","description":"...",
//!  "start":"2026-10-17T19:00:00Z","end":"2026-10-17T20:00:00Z"}
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether the request creates a new event or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventAction {
    Create,
    Edit,
}

impl std::fmt::Display for EventAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventAction::Create => write!(f, "create"),
            EventAction::Edit => write!(f, "edit"),
        }
    }
}

/// A fully resolved event, ready to submit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedEvent {
    pub action: EventAction,

    /// Id of the event being edited; `None` when creating.
    pub id: Option<String>,

    pub title: String,
    pub description: String,

    /// RFC3339 start timestamp.
    pub start: DateTime<Utc>,

    /// RFC3339 end timestamp.
    pub end: DateTime<Utc>,
}

impl ResolvedEvent {
    /// Build an event; a non-empty `id` makes it an edit.
    pub fn new(
        id: Option<String>,
        title: String,
        description: String,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Self {
        let id = id.filter(|id| !id.is_empty());
        let action = if id.is_some() {
            EventAction::Edit
        } else {
            EventAction::Create
        };

        Self {
            action,
            id,
            title,
            description,
            start,
            end,
        }
    }

    /// Serialize to a single-line JSON request body.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn span() -> (DateTime<Utc>, DateTime<Utc>) {
        (
            Utc.with_ymd_and_hms(2026, 10, 17, 19, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2026, 10, 17, 20, 0, 0).unwrap(),
        )
    }

    #[test]
    fn new_event_is_create() {
        let (start, end) = span();
        let event = ResolvedEvent::new(None, "t".into(), "d".into(), start, end);
        assert_eq!(event.action, EventAction::Create);

        let event = ResolvedEvent::new(Some(String::new()), "t".into(), "d".into(), start, end);
        assert_eq!(event.action, EventAction::Create);
        assert_eq!(event.id, None);
    }

    #[test]
    fn event_with_id_is_edit() {
        let (start, end) = span();
        let event = ResolvedEvent::new(Some("evt-1".into()), "t".into(), "d".into(), start, end);
        assert_eq!(event.action, EventAction::Edit);
        assert_eq!(event.action.to_string(), "edit");
    }

    #[test]
    fn serializes_request_body() {
        let (start, end) = span();
        let event = ResolvedEvent::new(
            None,
            "🍴 Dinner Date".into(),
            "What to eat: <b>Sushi</b>".into(),
            start,
            end,
        );

        let value: serde_json::Value = serde_json::from_str(&event.to_json().unwrap()).unwrap();
        assert_eq!(value["action"], "create");
        assert!(value["id"].is_null());
        assert_eq!(value["title"], "🍴 Dinner Date");
        assert_eq!(value["description"], "What to eat: <b>Sushi</b>");
        assert_eq!(value["start"], "2026-10-17T19:00:00Z");
        assert_eq!(value["end"], "2026-10-17T20:00:00Z");
    }
}

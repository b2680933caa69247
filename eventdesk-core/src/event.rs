//! Event records and the JSON shapes exchanged with the events API.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One event as stored by the remote service.
///
/// `event_id` is assigned by whoever creates the record, not by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub event_id: i64,
    pub event_name: String,
    pub venue: String,
    pub capacity: i64,
}

impl Event {
    /// The update body for this event. The id travels in the path instead.
    pub fn patch(&self) -> EventPatch {
        EventPatch {
            event_name: self.event_name.clone(),
            venue: self.venue.clone(),
            capacity: self.capacity,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} @ {} ({})", self.event_id, self.event_name, self.venue, self.capacity)
    }
}

/// Body of `PUT /events/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPatch {
    pub event_name: String,
    pub venue: String,
    pub capacity: i64,
}

/// Body returned by create, update and delete.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MutationResponse {
    #[serde(default)]
    pub msg: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_uses_camel_case_on_the_wire() {
        let event = Event {
            event_id: 5,
            event_name: "Gala".to_string(),
            venue: "Hall A".to_string(),
            capacity: 100,
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"eventId": 5, "eventName": "Gala", "venue": "Hall A", "capacity": 100})
        );
    }

    #[test]
    fn patch_has_no_event_id() {
        let event = Event {
            event_id: 5,
            event_name: "Gala".to_string(),
            venue: "Hall B".to_string(),
            capacity: 100,
        };

        let json = serde_json::to_value(event.patch()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"eventName": "Gala", "venue": "Hall B", "capacity": 100})
        );
    }

    #[test]
    fn mutation_response_tolerates_missing_msg() {
        let resp: MutationResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(resp.msg, "");

        let resp: MutationResponse =
            serde_json::from_str(r#"{"msg": "Event added", "extra": true}"#).unwrap();
        assert_eq!(resp.msg, "Event added");
    }

    #[test]
    fn list_response_ignores_unknown_fields() {
        let json = r#"[{"_id": "abc", "eventId": 1, "eventName": "Expo", "venue": "Pier", "capacity": 40, "__v": 0}]"#;
        let events: Vec<Event> = serde_json::from_str(json).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_name, "Expo");
    }
}

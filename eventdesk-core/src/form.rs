//! Editable form state.
//!
//! The form mirrors one [`Event`] as plain text, the way the inputs hold it.
//! Numbers are only parsed when a request is built from the form.

use std::fmt;

use crate::desk::Action;
use crate::error::Alert;
use crate::event::{Event, EventPatch};

/// One input of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    EventId,
    EventName,
    Venue,
    Capacity,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::EventId, Field::EventName, Field::Venue, Field::Capacity];

    /// Whether the input only takes digits.
    pub fn is_numeric(self) -> bool {
        matches!(self, Field::EventId | Field::Capacity)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Field::EventId => "Event ID",
            Field::EventName => "Event Name",
            Field::Venue => "Venue",
            Field::Capacity => "Capacity",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventForm {
    pub event_id: String,
    pub event_name: String,
    pub venue: String,
    pub capacity: String,
}

impl EventForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::EventId => &self.event_id,
            Field::EventName => &self.event_name,
            Field::Venue => &self.venue,
            Field::Capacity => &self.capacity,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::EventId => self.event_id = value,
            Field::EventName => self.event_name = value,
            Field::Venue => self.venue = value,
            Field::Capacity => self.capacity = value,
        }
    }

    pub fn clear(&mut self) {
        *self = EventForm::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == EventForm::default()
    }

    /// Whether an id is present, i.e. a record was selected or typed in.
    pub fn has_selection(&self) -> bool {
        !blank(&self.event_id)
    }

    /// Copy a record into the form, numbers as their decimal text.
    pub fn fill_from(&mut self, event: &Event) {
        self.event_id = event.event_id.to_string();
        self.event_name = event.event_name.clone();
        self.venue = event.venue.clone();
        self.capacity = event.capacity.to_string();
    }

    /// Build the create payload. Every field is required.
    pub fn to_event(&self) -> Result<Event, Alert> {
        if Field::ALL.iter().any(|&field| blank(self.get(field))) {
            return Err(Alert::IncompleteForm);
        }

        Ok(Event {
            event_id: parse_number(&self.event_id, Field::EventId)?,
            event_name: self.event_name.trim().to_string(),
            venue: self.venue.trim().to_string(),
            capacity: parse_number(&self.capacity, Field::Capacity)?,
        })
    }

    /// Build the update target and body. The id must already be filled in.
    pub fn to_update(&self) -> Result<(i64, EventPatch), Alert> {
        let event_id = self.selected_id(Action::Update)?;

        if blank(&self.event_name) || blank(&self.venue) || blank(&self.capacity) {
            return Err(Alert::IncompleteUpdate);
        }

        let patch = EventPatch {
            event_name: self.event_name.trim().to_string(),
            venue: self.venue.trim().to_string(),
            capacity: parse_number(&self.capacity, Field::Capacity)?,
        };

        Ok((event_id, patch))
    }

    /// The id the form points at, for update and delete.
    pub fn selected_id(&self, action: Action) -> Result<i64, Alert> {
        if !self.has_selection() {
            return Err(Alert::NoSelection { action });
        }
        parse_number(&self.event_id, Field::EventId)
    }
}

impl From<&Event> for EventForm {
    fn from(event: &Event) -> Self {
        let mut form = EventForm::default();
        form.fill_from(event);
        form
    }
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn parse_number(value: &str, field: Field) -> Result<i64, Alert> {
    value
        .trim()
        .parse()
        .map_err(|_| Alert::NotANumber { field })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gala_form() -> EventForm {
        EventForm {
            event_id: "5".to_string(),
            event_name: "Gala".to_string(),
            venue: "Hall A".to_string(),
            capacity: "100".to_string(),
        }
    }

    #[test]
    fn to_event_converts_numbers_and_trims_text() {
        let mut form = gala_form();
        form.event_id = " 5 ".to_string();
        form.event_name = "  Gala ".to_string();

        let event = form.to_event().unwrap();
        assert_eq!(
            event,
            Event {
                event_id: 5,
                event_name: "Gala".to_string(),
                venue: "Hall A".to_string(),
                capacity: 100,
            }
        );
    }

    #[test]
    fn to_event_rejects_whitespace_only_fields() {
        for field in Field::ALL {
            let mut form = gala_form();
            form.set(field, "   ");
            assert_eq!(form.to_event(), Err(Alert::IncompleteForm), "{field}");
        }
    }

    #[test]
    fn to_event_rejects_non_numeric_capacity() {
        let mut form = gala_form();
        form.capacity = "lots".to_string();
        assert_eq!(
            form.to_event(),
            Err(Alert::NotANumber { field: Field::Capacity })
        );
    }

    #[test]
    fn to_update_requires_selection_first() {
        let mut form = EventForm::default();
        assert_eq!(
            form.to_update(),
            Err(Alert::NoSelection { action: Action::Update })
        );

        form.event_id = "5".to_string();
        assert_eq!(form.to_update(), Err(Alert::IncompleteUpdate));
    }

    #[test]
    fn fill_from_stringifies_numbers() {
        let event = Event {
            event_id: 42,
            event_name: "Expo".to_string(),
            venue: "Pier 9".to_string(),
            capacity: 1500,
        };

        let form = EventForm::from(&event);
        assert_eq!(form.event_id, "42");
        assert_eq!(form.event_name, "Expo");
        assert_eq!(form.venue, "Pier 9");
        assert_eq!(form.capacity, "1500");
        assert!(form.has_selection());
    }

    #[test]
    fn alert_messages_name_the_action() {
        assert_eq!(
            Alert::NoSelection { action: Action::Delete }.to_string(),
            "Select an event to delete!"
        );
        assert_eq!(
            Alert::NotANumber { field: Field::EventId }.to_string(),
            "Event ID must be a whole number"
        );
    }
}

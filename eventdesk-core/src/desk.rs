//! The event desk: form state, fetched list and request lifecycle in one place.
//!
//! Mutations go through two steps. [`EventDesk::prepare`] validates the form
//! and marks the desk as submitting; [`EventDesk::complete`] applies the
//! server's answer. While a mutation is in flight a second `prepare` is
//! refused. List fetches carry a [`RefreshTicket`] so an older response can
//! never overwrite a newer one.

use std::fmt;

use tracing::{debug, info, warn};

use crate::client::EventApi;
use crate::error::{Alert, EventDeskResult};
use crate::event::{Event, EventPatch, MutationResponse};
use crate::form::{EventForm, Field};

/// The three mutating buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Create,
    Update,
    Delete,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Action::Create => "add",
            Action::Update => "update",
            Action::Delete => "delete",
        };
        f.write_str(verb)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting(Action),
    /// The last mutation failed; its error is in the status line.
    Failed,
}

/// A validated request, ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Create(Event),
    Update { event_id: i64, patch: EventPatch },
    Delete { event_id: i64 },
}

/// A mutation handed out by [`EventDesk::prepare`].
#[derive(Debug)]
pub struct Mutation {
    token: u64,
    action: Action,
    request: Request,
}

impl Mutation {
    pub fn action(&self) -> Action {
        self.action
    }

    pub fn request(&self) -> &Request {
        &self.request
    }

    /// Send the request through `api`.
    pub async fn send<A: EventApi>(&self, api: &A) -> EventDeskResult<MutationResponse> {
        match &self.request {
            Request::Create(event) => api.create(event).await,
            Request::Update { event_id, patch } => api.update(*event_id, patch).await,
            Request::Delete { event_id } => api.delete(*event_id).await,
        }
    }
}

/// Identifies one list fetch. Only the newest ticket's response is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket {
    token: u64,
}

pub struct EventDesk<A> {
    api: A,
    form: EventForm,
    events: Vec<Event>,
    status: Option<String>,
    phase: Phase,
    refresh_error: Option<String>,
    next_token: u64,
    in_flight: Option<u64>,
    latest_refresh: Option<u64>,
}

impl<A: EventApi> EventDesk<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            form: EventForm::default(),
            events: Vec::new(),
            status: None,
            phase: Phase::Idle,
            refresh_error: None,
            next_token: 0,
            in_flight: None,
            latest_refresh: None,
        }
    }

    /// Create a desk and load the list once.
    pub async fn mount(api: A) -> Self {
        let mut desk = Self::new(api);
        desk.refresh().await;
        desk
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn form(&self) -> &EventForm {
        &self.form
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Message from the last mutation: the server's `msg` or the error text.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.phase, Phase::Submitting(_))
    }

    /// Error from the last list fetch, if it failed. The list shown is then stale.
    pub fn refresh_error(&self) -> Option<&str> {
        self.refresh_error.as_deref()
    }

    pub fn find(&self, event_id: i64) -> Option<&Event> {
        self.events.iter().find(|e| e.event_id == event_id)
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Load a record into the form for editing. No request is made.
    pub fn select(&mut self, event: &Event) {
        self.form.fill_from(event);
    }

    /// Select the record at `index` in the current list.
    pub fn select_at(&mut self, index: usize) -> bool {
        match self.events.get(index) {
            Some(event) => {
                self.form.fill_from(event);
                true
            }
            None => false,
        }
    }

    fn next_token(&mut self) -> u64 {
        self.next_token += 1;
        self.next_token
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Validate the form for `action` and mark the desk as submitting.
    pub fn prepare(&mut self, action: Action) -> Result<Mutation, Alert> {
        if self.in_flight.is_some() {
            return Err(Alert::Busy);
        }

        let request = match action {
            Action::Create => Request::Create(self.form.to_event()?),
            Action::Update => {
                let (event_id, patch) = self.form.to_update()?;
                Request::Update { event_id, patch }
            }
            Action::Delete => Request::Delete {
                event_id: self.form.selected_id(Action::Delete)?,
            },
        };

        let token = self.next_token();
        self.in_flight = Some(token);
        self.phase = Phase::Submitting(action);

        Ok(Mutation {
            token,
            action,
            request,
        })
    }

    /// Apply the outcome of a prepared mutation. Returns true on success,
    /// after which the form is empty and the list should be re-fetched.
    pub fn complete(&mut self, mutation: Mutation, result: EventDeskResult<MutationResponse>) -> bool {
        if self.in_flight != Some(mutation.token) {
            debug!(action = %mutation.action, "ignoring outcome of a mutation that is no longer in flight");
            return false;
        }
        self.in_flight = None;

        match result {
            Ok(resp) => {
                info!(action = %mutation.action, msg = %resp.msg, "mutation succeeded");
                self.status = Some(resp.msg);
                self.form.clear();
                self.phase = Phase::Idle;
                true
            }
            Err(e) => {
                warn!(action = %mutation.action, error = %e, "mutation failed");
                self.status = Some(e.to_string());
                self.phase = Phase::Failed;
                false
            }
        }
    }

    /// Validate, send, apply and re-fetch on success.
    ///
    /// `Err` means the request never left: the alert should be shown to the user.
    /// `Ok(false)` means the server or transport rejected it; see [`status`](Self::status).
    pub async fn submit(&mut self, action: Action) -> Result<bool, Alert> {
        let mutation = self.prepare(action)?;
        let result = mutation.send(&self.api).await;

        let succeeded = self.complete(mutation, result);
        if succeeded {
            self.refresh().await;
        }

        Ok(succeeded)
    }

    pub async fn create(&mut self) -> Result<bool, Alert> {
        self.submit(Action::Create).await
    }

    pub async fn update(&mut self) -> Result<bool, Alert> {
        self.submit(Action::Update).await
    }

    pub async fn delete(&mut self) -> Result<bool, Alert> {
        self.submit(Action::Delete).await
    }

    // ------------------------------------------------------------------
    // List fetches
    // ------------------------------------------------------------------

    /// Start a list fetch. Any earlier ticket becomes stale.
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        let token = self.next_token();
        self.latest_refresh = Some(token);
        RefreshTicket { token }
    }

    /// Apply a list response. Returns true if the list was replaced.
    pub fn finish_refresh(&mut self, ticket: RefreshTicket, result: EventDeskResult<Vec<Event>>) -> bool {
        if self.latest_refresh != Some(ticket.token) {
            debug!(token = ticket.token, "discarding stale event list");
            return false;
        }

        match result {
            Ok(events) => {
                debug!(count = events.len(), "event list replaced");
                self.events = events;
                self.refresh_error = None;
                true
            }
            Err(e) => {
                warn!(error = %e, "failed to fetch events, keeping previous list");
                self.refresh_error = Some(e.to_string());
                false
            }
        }
    }

    /// Fetch the whole list and replace the local copy.
    pub async fn refresh(&mut self) -> bool {
        let ticket = self.begin_refresh();
        let result = self.api.list().await;
        self.finish_refresh(ticket, result)
    }
}

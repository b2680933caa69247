//! Core types for eventdesk.
//!
//! - `Event` and the request/response shapes exchanged with the events API
//! - `EventForm`, the editable text mirror of one event
//! - `RemoteClient`, the HTTP side, behind the `EventApi` trait
//! - `EventDesk`, the state container driving validation, mutations and refreshes

pub mod client;
pub mod config;
pub mod desk;
pub mod error;
pub mod event;
pub mod form;

pub use client::{EventApi, RemoteClient};
pub use config::DeskConfig;
pub use desk::{Action, EventDesk, Mutation, Phase, RefreshTicket, Request};
pub use error::{Alert, EventDeskError, EventDeskResult};
pub use event::{Event, EventPatch, MutationResponse};
pub use form::{EventForm, Field};

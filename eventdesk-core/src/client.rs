//! HTTP client for the events API.

use std::future::Future;
use std::time::Duration;

use reqwest::Response;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::DeskConfig;
use crate::error::{EventDeskError, EventDeskResult};
use crate::event::{Event, EventPatch, MutationResponse};

/// The four calls the form controller makes against the event service.
pub trait EventApi {
    /// GET /events
    fn list(&self) -> impl Future<Output = EventDeskResult<Vec<Event>>> + Send;

    /// POST /events
    fn create(&self, event: &Event) -> impl Future<Output = EventDeskResult<MutationResponse>> + Send;

    /// PUT /events/:id
    fn update(
        &self,
        event_id: i64,
        patch: &EventPatch,
    ) -> impl Future<Output = EventDeskResult<MutationResponse>> + Send;

    /// DELETE /events/:id
    fn delete(&self, event_id: i64) -> impl Future<Output = EventDeskResult<MutationResponse>> + Send;
}

/// HTTP implementation of [`EventApi`]. One attempt per call, no retries.
#[derive(Clone)]
pub struct RemoteClient {
    http: reqwest::Client,
    base_url: String,
}

impl RemoteClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &DeskConfig) -> EventDeskResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let http = builder.build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn events_url(&self) -> String {
        format!("{}/events", self.base_url)
    }

    fn event_url(&self, event_id: i64) -> String {
        format!("{}/events/{}", self.base_url, event_id)
    }
}

impl EventApi for RemoteClient {
    async fn list(&self) -> EventDeskResult<Vec<Event>> {
        let url = self.events_url();
        debug!(%url, "GET");

        let resp = self.http.get(url).send().await?;
        let items: Vec<Value> = decode(resp).await?;
        Ok(keep_valid_events(items))
    }

    async fn create(&self, event: &Event) -> EventDeskResult<MutationResponse> {
        let url = self.events_url();
        debug!(%url, event_id = event.event_id, "POST");

        let resp = self.http.post(url).json(event).send().await?;
        decode(resp).await
    }

    async fn update(&self, event_id: i64, patch: &EventPatch) -> EventDeskResult<MutationResponse> {
        let url = self.event_url(event_id);
        debug!(%url, "PUT");

        let resp = self.http.put(url).json(patch).send().await?;
        decode(resp).await
    }

    async fn delete(&self, event_id: i64) -> EventDeskResult<MutationResponse> {
        let url = self.event_url(event_id);
        debug!(%url, "DELETE");

        let resp = self.http.delete(url).send().await?;
        decode(resp).await
    }
}

/// Convert list items one by one so a single malformed record does not hide the rest.
fn keep_valid_events(items: Vec<Value>) -> Vec<Event> {
    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value::<Event>(item) {
            Ok(event) => Some(event),
            Err(e) => {
                warn!(index, error = %e, "skipping malformed event record");
                None
            }
        })
        .collect()
}

/// Turn a response into `T`, or into a `Remote` error carrying the status.
async fn decode<T: DeserializeOwned>(resp: Response) -> EventDeskResult<T> {
    let status = resp.status();

    if !status.is_success() {
        let body: Option<MutationResponse> = resp.json().await.ok();
        let message = match body {
            Some(MutationResponse { msg }) if !msg.is_empty() => {
                format!("Request failed with status code {}: {}", status.as_u16(), msg)
            }
            _ => format!("Request failed with status code {}", status.as_u16()),
        };
        debug!(status = status.as_u16(), "request failed");
        return Err(EventDeskError::Remote(message));
    }

    Ok(resp.json().await?)
}

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Clone)]
pub struct EventDraft {
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub description: String,
    pub guest: String,
    pub send_invites: bool,
}

#[async_trait]
pub trait CalendarClient: Send + Sync {
    async fn create_event(
        &self,
        event: &EventDraft,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>>;
}

pub struct HttpCalendarClient {
    base_url: String,
    token: String,
    client: reqwest::Client,
}

impl HttpCalendarClient {
    pub fn new(base_url: String, token: String) -> Self {
        Self {
            base_url,
            token,
            client: reqwest::Client::new(),
        }
    }
}

#[derive(Debug, Serialize)]
struct CreateEventRequest<'a> {
    title: &'a str,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    description: &'a str,
    guests: Vec<&'a str>,
    send_invites: bool,
}

#[derive(Debug, Deserialize)]
struct CreateEventResponse {
    id: String,
}

#[async_trait]
impl CalendarClient for HttpCalendarClient {
    async fn create_event(
        &self,
        event: &EventDraft,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let request = CreateEventRequest {
            title: &event.title,
            start: event.start,
            end: event.end,
            description: &event.description,
            guests: vec![event.guest.as_str()],
            send_invites: event.send_invites,
        };

        let response = self
            .client
            .post(format!("{}/events", self.base_url))
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?; // read the body once

        if !status.is_success() {
            return Err(format!("Calendar request failed with status {}: {}", status, text).into());
        }

        let parsed: CreateEventResponse = serde_json::from_str(&text).map_err(|e| {
            format!("Failed to parse calendar response: {}\nRaw body: {}", e, text)
        })?;
        Ok(parsed.id)
    }
}

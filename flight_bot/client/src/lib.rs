mod record;

pub use record::{FlightRecord, NOT_AVAILABLE, UNKNOWN, UNKNOWN_AIRPORT};

use anyhow::{Context, Result};
use reqwest::StatusCode;
use std::fmt::Debug;
use tracing::instrument;

pub const DEFAULT_API_URL: &str = "https://airlabs.co/api/v9/flight";

#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Found(FlightRecord),
    NotFound,
    /// The provider answered with something other than 200.
    Rejected(u16),
}

#[derive(serde::Deserialize, Debug, Default)]
struct Envelope {
    response: Option<serde_json::Value>,
    error: Option<serde_json::Value>,
}

impl Envelope {
    fn into_outcome(self) -> Result<LookupOutcome> {
        if let Some(error) = &self.error {
            tracing::warn!("Provider reported an error: {}", error);
        }
        match self.response {
            Some(response) if !is_blank(&response) => {
                let record = serde_json::from_value(response)
                    .context("unexpected flight record in provider response")?;
                Ok(LookupOutcome::Found(record))
            }
            _ => Ok(LookupOutcome::NotFound),
        }
    }
}

fn is_blank(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => true,
        serde_json::Value::Object(map) => map.is_empty(),
        serde_json::Value::Array(items) => items.is_empty(),
        serde_json::Value::String(s) => s.is_empty(),
        _ => false,
    }
}

#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    url: String,
    api_key: String,
}

impl Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client").field("url", &self.url).finish()
    }
}

impl Client {
    pub fn new(url: &str, api_key: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.to_owned(),
            api_key: api_key.to_owned(),
        }
    }

    /// Looks up a single flight. `flight_iata` is sent as given, callers
    /// normalize it first.
    #[instrument(skip(self))]
    pub async fn lookup(&self, flight_iata: &str) -> Result<LookupOutcome> {
        tracing::debug!("Requesting {}", self.url);

        // The request URL carries the API key, keep it out of error messages.
        let response = self
            .http
            .get(&self.url)
            .query(&[("flight_iata", flight_iata), ("api_key", &self.api_key)])
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = response.status();
        tracing::debug!("Provider answered with {}", status);
        if status != StatusCode::OK {
            return Ok(LookupOutcome::Rejected(status.as_u16()));
        }

        let envelope: Envelope = response
            .json()
            .await
            .map_err(reqwest::Error::without_url)?;
        envelope.into_outcome()
    }
}

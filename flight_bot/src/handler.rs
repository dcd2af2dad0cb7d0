use airlabs_client::{Client, LookupOutcome};
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use tracing::instrument;

use crate::query::FlightQuery;
use crate::reply::{FlightCard, Reply};

/// Chat-side half of a command invocation.
///
/// The platform wants a quick acknowledgment and the actual content as a
/// follow-up, so handlers call [`Interaction::acknowledge`] first and
/// [`Interaction::respond`] exactly once afterwards.
#[async_trait]
pub trait Interaction: Send + Sync {
    async fn acknowledge(&self) -> Result<()>;
    async fn respond(&self, reply: Reply) -> Result<()>;
}

/// Handles `/track <flight_iata>`. Lookup failures of any kind end up in the
/// reply; only a failed follow-up is returned as an error.
#[instrument(skip_all, fields(flight_iata = raw))]
pub async fn track_flight<I>(interaction: &I, client: &Client, raw: &str) -> Result<()>
where
    I: Interaction + ?Sized,
{
    if let Err(e) = interaction.acknowledge().await {
        tracing::warn!("Error acknowledging command: {:?}", e);
    }

    let reply = match FlightQuery::parse(raw) {
        Some(query) => lookup_reply(client, &query).await,
        None => Reply::Usage,
    };
    tracing::info!("Replying with: {}", reply);

    interaction.respond(reply).await
}

async fn lookup_reply(client: &Client, query: &FlightQuery) -> Reply {
    match client.lookup(query.as_str()).await {
        Ok(LookupOutcome::Found(record)) => {
            Reply::Flight(FlightCard::new(&record, query, Utc::now()))
        }
        Ok(LookupOutcome::NotFound) => Reply::NotFound(query.to_string()),
        Ok(LookupOutcome::Rejected(status)) => Reply::ApiError(status),
        Err(e) => {
            tracing::error!("Error looking up {}: {:?}", query, e);
            Reply::Failure(format!("{:#}", e))
        }
    }
}

//! Outbound submission: the one HTTP call the form ever makes.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::models::application::ApplicationRecord;

/// Acknowledgement body returned by the submission endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitAck {
    pub message: String,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server responded with status {0}")]
    Status(u16),
}

/// The outbound seam of the form controller. Implement this to point the
/// wizard at anything other than a live endpoint; tests use an in-memory
/// stub that counts calls.
#[async_trait]
pub trait SubmitApplication: Send + Sync {
    async fn submit(&self, record: &ApplicationRecord) -> Result<SubmitAck, SubmitError>;
}

/// Posts the record as a JSON body to the submission endpoint.
#[derive(Clone)]
pub struct HttpSubmitClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSubmitClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl SubmitApplication for HttpSubmitClient {
    async fn submit(&self, record: &ApplicationRecord) -> Result<SubmitAck, SubmitError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(record)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::Status(status.as_u16()));
        }

        let ack: SubmitAck = response.json().await?;
        debug!("submission acknowledged: {}", ack.message);
        Ok(ack)
    }
}

/// Resolves `fut`, but takes at least `min` wall time to do so. Keeps the
/// busy indicator up long enough to read when the round trip is fast.
pub async fn with_min_duration<F, T>(min: Duration, fut: F) -> T
where
    F: Future<Output = T>,
{
    let (result, ()) = tokio::join!(fut, tokio::time::sleep(min));
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_fast_future_is_held_to_the_minimum() {
        let start = Instant::now();
        let value = with_min_duration(Duration::from_secs(2), async { 7 }).await;
        assert_eq!(value, 7);
        assert!(start.elapsed() >= Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_future_is_not_delayed_further() {
        let start = Instant::now();
        let value = with_min_duration(Duration::from_secs(2), async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            7
        })
        .await;
        assert_eq!(value, 7);
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_secs(5));
        assert!(elapsed < Duration::from_secs(7));
    }
}

//! Fire-and-forget usage tracking.
//!
//! Calculators emit a [`UsageEvent`] when a calculation completes; the
//! sink posts it to the tracking endpoint. Failures are reported but never
//! block a calculation, so callers typically spawn and forget the send.

use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum TrackingError {
    #[error("tracking request failed: {0}")]
    Request(String),

    #[error("tracking endpoint returned status {0}")]
    Status(u16),
}

/// One usage record, wire-compatible with the `/api/track` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageEvent {
    pub calculator_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_health_score: Option<Decimal>,
}

impl UsageEvent {
    pub fn new(calculator_name: impl Into<String>) -> Self {
        Self {
            calculator_name: calculator_name.into(),
            financial_health_score: None,
        }
    }

    pub fn with_score(
        calculator_name: impl Into<String>,
        score: Decimal,
    ) -> Self {
        Self {
            calculator_name: calculator_name.into(),
            financial_health_score: Some(score),
        }
    }
}

/// Destination for usage events.
#[async_trait]
pub trait UsageSink: Send + Sync {
    async fn record(&self, event: &UsageEvent) -> Result<(), TrackingError>;
}

/// Posts events as JSON to the tracking endpoint.
pub struct HttpUsageSink {
    client: Client,
    endpoint: String,
}

impl HttpUsageSink {
    pub fn new(endpoint: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl UsageSink for HttpUsageSink {
    async fn record(&self, event: &UsageEvent) -> Result<(), TrackingError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(event)
            .send()
            .await
            .map_err(|error| {
                warn!(%error, "usage tracking send failed");
                TrackingError::Request(error.to_string())
            })?;

        if !response.status().is_success() {
            warn!(status = response.status().as_u16(), "usage tracking rejected");
            return Err(TrackingError::Status(response.status().as_u16()));
        }

        debug!(calculator = %event.calculator_name, "usage event recorded");
        Ok(())
    }
}

/// Discards every event; for tests and offline sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullUsageSink;

#[async_trait]
impl UsageSink for NullUsageSink {
    async fn record(&self, _event: &UsageEvent) -> Result<(), TrackingError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn event_serializes_to_the_endpoint_shape() {
        let event = UsageEvent::with_score("mortgage", dec!(85));

        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["calculatorName"], serde_json::json!("mortgage"));
        assert_eq!(json["financialHealthScore"], serde_json::json!("85"));
    }

    #[test]
    fn score_is_omitted_when_absent() {
        let event = UsageEvent::new("loan");

        let json = serde_json::to_value(&event).unwrap();

        assert!(json.get("financialHealthScore").is_none());
    }

    #[tokio::test]
    async fn null_sink_accepts_everything() {
        let sink = NullUsageSink;

        let result = sink.record(&UsageEvent::new("budget")).await;

        assert!(result.is_ok());
    }
}

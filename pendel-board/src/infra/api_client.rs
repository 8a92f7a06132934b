//! HTTP client for the stats backend.

use anyhow::{Context, Result};
use chrono::Utc;
use log::{info, warn};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

use pendel_model::prelude::*;

use crate::infra::constants::board::{JOURNEY_LIMIT, REQUEST_TIMEOUT_SECS};

/// Errors callers may want to branch on; everything else is wrapped in
/// `anyhow` context by the snapshot assembly.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("backend returned {status} for {path}")]
    Status { status: StatusCode, path: String },
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Client for the delay-statistics backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client.
    ///
    /// The base URL is normalized first: many users provide
    /// "localhost:8000", which reqwest rejects without a scheme, and a
    /// trailing slash would produce double slashes in request paths.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = normalize(base_url.into());
        Url::parse(&base_url)
            .with_context(|| format!("invalid backend URL '{base_url}'"))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("building HTTP client")?;

        info!("[ApiClient] backend at {base_url}");
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> std::result::Result<T, ApiError> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ApiError::Status {
                status: response.status(),
                path: path.to_string(),
            });
        }
        Ok(response.json::<T>().await?)
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> std::result::Result<T, ApiError> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ApiError::Status {
                status: response.status(),
                path: path.to_string(),
            });
        }
        Ok(response.json::<T>().await?)
    }

    // Endpoint calls.

    pub async fn overall_stats(&self) -> std::result::Result<DelayStats, ApiError> {
        self.get_json("/stats").await
    }

    pub async fn stats_by_line(&self) -> std::result::Result<Vec<LineDelayStats>, ApiError> {
        self.get_json("/stats/by-line").await
    }

    pub async fn heatmap(&self) -> std::result::Result<Vec<HeatmapCell>, ApiError> {
        self.get_json("/stats/heatmap").await
    }

    pub async fn recent_journeys(
        &self,
        limit: usize,
    ) -> std::result::Result<Vec<JourneySummary>, ApiError> {
        self.get_json(&format!("/journeys?limit={limit}")).await
    }

    pub async fn current_weather(&self) -> std::result::Result<WeatherObservation, ApiError> {
        self.get_json("/weather/current").await
    }

    pub async fn predict_batch(
        &self,
        features: &[PredictionFeatures],
    ) -> std::result::Result<Vec<DelayPrediction>, ApiError> {
        let response: BatchPredictionResponse =
            self.post_json("/predict/batch", features).await?;
        Ok(response.predictions)
    }

    /// Assemble one full board snapshot.
    ///
    /// Statistics are fetched concurrently and are required; weather and
    /// predictions degrade softly (the backend's own weather client
    /// falls back the same way).
    pub async fn fetch_snapshot(&self) -> Result<BoardSnapshot> {
        let (overall, by_line, heatmap, journeys) = tokio::try_join!(
            self.overall_stats(),
            self.stats_by_line(),
            self.heatmap(),
            self.recent_journeys(JOURNEY_LIMIT),
        )
        .context("fetching delay statistics")?;

        let weather = match self.current_weather().await {
            Ok(weather) => weather,
            Err(err) => {
                warn!("weather request failed, using fallback: {err}");
                WeatherObservation::fallback()
            }
        };

        let generated_at = Utc::now();
        let predictions = if by_line.is_empty() {
            Vec::new()
        } else {
            let features: Vec<PredictionFeatures> = by_line
                .iter()
                .map(|per_line| {
                    PredictionFeatures::for_line(&per_line.line, &weather, generated_at)
                })
                .collect();
            match self.predict_batch(&features).await {
                Ok(predictions) => by_line
                    .iter()
                    .zip(predictions)
                    .map(|(per_line, prediction)| LinePrediction {
                        line: per_line.line.clone(),
                        prediction,
                    })
                    .collect(),
                Err(err) => {
                    warn!("prediction request failed, omitting predictions: {err}");
                    Vec::new()
                }
            }
        };

        Ok(BoardSnapshot {
            generated_at,
            overall,
            by_line,
            heatmap,
            predictions,
            journeys,
            weather,
        })
    }
}

#[derive(Debug, Deserialize)]
struct BatchPredictionResponse {
    predictions: Vec<DelayPrediction>,
    #[allow(dead_code)]
    count: usize,
}

fn normalize(raw: String) -> String {
    let trimmed = raw.trim().trim_end_matches('/').to_string();
    let with_scheme = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed
    } else {
        format!("http://{trimmed}")
    };
    if with_scheme != raw {
        warn!("[ApiClient] normalized base URL from '{raw}' to '{with_scheme}'");
    }
    with_scheme
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_normalization() {
        assert_eq!(normalize("localhost:8000".into()), "http://localhost:8000");
        assert_eq!(
            normalize("http://localhost:8000/".into()),
            "http://localhost:8000"
        );
        assert_eq!(
            normalize("https://api.example.org".into()),
            "https://api.example.org"
        );
    }

    #[test]
    fn client_rejects_garbage_urls() {
        assert!(ApiClient::new("http://[not-a-host").is_err());
        assert!(ApiClient::new("localhost:8000").is_ok());
    }
}

use chrono::{DateTime, Utc};

use crate::journey::JourneySummary;
use crate::prediction::LinePrediction;
use crate::stats::{DelayStats, HeatmapCell, LineDelayStats};
use crate::weather::WeatherObservation;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One refresh cycle's worth of dashboard data.
///
/// Snapshots are read-only once assembled; consumers swap whole
/// snapshots rather than mutating fields in place.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardSnapshot {
    pub generated_at: DateTime<Utc>,
    pub overall: DelayStats,
    pub by_line: Vec<LineDelayStats>,
    pub heatmap: Vec<HeatmapCell>,
    pub predictions: Vec<LinePrediction>,
    pub journeys: Vec<JourneySummary>,
    pub weather: WeatherObservation,
}

impl BoardSnapshot {
    /// A snapshot with no observations, for first paint before data lands.
    pub fn empty(generated_at: DateTime<Utc>) -> Self {
        Self {
            generated_at,
            overall: DelayStats::empty(),
            by_line: Vec::new(),
            heatmap: Vec::new(),
            predictions: Vec::new(),
            journeys: Vec::new(),
            weather: WeatherObservation::fallback(),
        }
    }

    /// Lines ordered worst-first by average delay, for the leaderboard.
    pub fn leaderboard(&self) -> Vec<&LineDelayStats> {
        let mut ranked: Vec<&LineDelayStats> = self.by_line.iter().collect();
        ranked.sort_by(|a, b| {
            b.stats
                .avg_delay_minutes
                .total_cmp(&a.stats.avg_delay_minutes)
        });
        ranked
    }
}

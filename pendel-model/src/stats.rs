use crate::error::{ModelError, Result};
use crate::line::TransitLine;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Aggregate delay figures over a set of observed journey segments.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DelayStats {
    pub total_segments: u64,
    pub avg_delay_minutes: f64,
    pub max_delay_minutes: i32,
    pub min_delay_minutes: i32,
    /// Share of segments above [`DelayStats::DELAYED_THRESHOLD_MINUTES`], in percent.
    pub delayed_percentage: f64,
}

impl DelayStats {
    /// A segment counts as delayed above this many minutes.
    pub const DELAYED_THRESHOLD_MINUTES: i32 = 2;

    /// Stats for an empty observation window.
    pub fn empty() -> Self {
        Self {
            total_segments: 0,
            avg_delay_minutes: 0.0,
            max_delay_minutes: 0,
            min_delay_minutes: 0,
            delayed_percentage: 0.0,
        }
    }
}

/// Severity banding for a line's average delay, used by the leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DelaySeverity {
    OnTime,
    Minor,
    Severe,
}

impl DelaySeverity {
    /// Band boundaries are 2 and 5 minutes of average delay.
    pub fn from_avg_delay(avg_delay_minutes: f64) -> Self {
        if avg_delay_minutes < 2.0 {
            DelaySeverity::OnTime
        } else if avg_delay_minutes < 5.0 {
            DelaySeverity::Minor
        } else {
            DelaySeverity::Severe
        }
    }
}

/// Delay statistics for a single line.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LineDelayStats {
    pub line: TransitLine,
    pub stats: DelayStats,
    pub severity: DelaySeverity,
}

impl LineDelayStats {
    pub fn new(line: TransitLine, stats: DelayStats) -> Self {
        let severity = DelaySeverity::from_avg_delay(stats.avg_delay_minutes);
        Self {
            line,
            stats,
            severity,
        }
    }
}

/// Average delay in one (day of week, hour of day) bucket.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HeatmapCell {
    /// 1 = Sunday .. 7 = Saturday, matching the feed's convention.
    pub day_of_week: u8,
    /// 0..=23.
    pub hour_of_day: u8,
    pub avg_delay_minutes: f64,
    pub sample_count: u64,
}

impl HeatmapCell {
    pub fn new(
        day_of_week: u8,
        hour_of_day: u8,
        avg_delay_minutes: f64,
        sample_count: u64,
    ) -> Result<Self> {
        if !(1..=7).contains(&day_of_week) {
            return Err(ModelError::OutOfRange(format!(
                "day_of_week {day_of_week} not in 1..=7"
            )));
        }
        if hour_of_day > 23 {
            return Err(ModelError::OutOfRange(format!(
                "hour_of_day {hour_of_day} not in 0..=23"
            )));
        }
        Ok(Self {
            day_of_week,
            hour_of_day,
            avg_delay_minutes,
            sample_count,
        })
    }
}

use chrono::{DateTime, Utc};

use crate::line::TransitLine;
use crate::stats::DelayStats;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One observed journey with its realtime delay.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JourneySummary {
    /// Feed-assigned id; absent for synthesized history rows.
    pub journey_id: Option<String>,
    pub line: TransitLine,
    pub delay_minutes: i32,
    pub recorded_at: DateTime<Utc>,
}

impl JourneySummary {
    pub fn is_delayed(&self) -> bool {
        self.delay_minutes > DelayStats::DELAYED_THRESHOLD_MINUTES
    }
}

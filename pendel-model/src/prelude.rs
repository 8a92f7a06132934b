//! Convenience re-exports for downstream crates.

pub use crate::board::BoardSnapshot;
pub use crate::error::{ModelError, Result as ModelResult};
pub use crate::journey::JourneySummary;
pub use crate::line::{LineKind, TransitLine, VehicleType};
pub use crate::prediction::{
    DelayClassification, DelayPrediction, LinePrediction, PredictionFeatures,
};
pub use crate::stats::{DelaySeverity, DelayStats, HeatmapCell, LineDelayStats};
pub use crate::weather::WeatherObservation;

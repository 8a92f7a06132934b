#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Vehicle categories as reported by the HVV realtime feed.
/// The wire names are the feed's own; the backend normalizes anything
/// outside this vocabulary before it reaches the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum VehicleType {
    #[cfg_attr(feature = "serde", serde(rename = "U_BAHN"))]
    UBahn,
    #[cfg_attr(feature = "serde", serde(rename = "S_BAHN"))]
    SBahn,
    #[cfg_attr(feature = "serde", serde(rename = "A_BAHN"))]
    ABahn,
    #[cfg_attr(feature = "serde", serde(rename = "R_BAHN"))]
    RBahn,
    #[cfg_attr(feature = "serde", serde(rename = "METROBUS"))]
    MetroBus,
    #[cfg_attr(feature = "serde", serde(rename = "SCHNELLBUS"))]
    SchnellBus,
    #[cfg_attr(feature = "serde", serde(rename = "XPRESSBUS"))]
    XpressBus,
    #[cfg_attr(feature = "serde", serde(rename = "NACHTBUS"))]
    NachtBus,
    #[cfg_attr(feature = "serde", serde(rename = "REGIONALBUS"))]
    RegionalBus,
    #[cfg_attr(feature = "serde", serde(rename = "FAEHRE"))]
    Ferry,
}

impl VehicleType {
    /// Coarse BUS/TRAIN split used by the prediction features.
    /// The feed reports only these two line types; ferries ride as BUS.
    pub fn kind(&self) -> LineKind {
        match self {
            VehicleType::UBahn
            | VehicleType::SBahn
            | VehicleType::ABahn
            | VehicleType::RBahn => LineKind::Train,
            _ => LineKind::Bus,
        }
    }

    pub fn is_rail(&self) -> bool {
        self.kind() == LineKind::Train
    }
}

/// Coarse line categorization (the `line_type` prediction feature).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum LineKind {
    Bus,
    Train,
}

/// One transit line as the dashboard identifies it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TransitLine {
    /// Line name as printed on the vehicle, e.g. "U3" or "6".
    pub name: String,
    pub vehicle_type: VehicleType,
    /// Terminus label when the feed supplies one.
    pub direction: Option<String>,
}

impl TransitLine {
    pub fn new(name: impl Into<String>, vehicle_type: VehicleType) -> Self {
        Self {
            name: name.into(),
            vehicle_type,
            direction: None,
        }
    }

    pub fn with_direction(mut self, direction: impl Into<String>) -> Self {
        self.direction = Some(direction.into());
        self
    }

    pub fn kind(&self) -> LineKind {
        self.vehicle_type.kind()
    }
}

impl std::fmt::Display for TransitLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.direction {
            Some(direction) => write!(f, "{} → {}", self.name, direction),
            None => write!(f, "{}", self.name),
        }
    }
}

//! Label resolution - any accepted spelling to its canonical unit

use std::fmt;
use serde::Serialize;
use agconv_core::ConvertError;
use crate::category::{Area, CategoryKind, Length, Mass, Time, Volume};
use crate::compound::looks_compound;
use crate::ratio::{MassAreaRatioUnit, RateUnit, VolumeAreaRatioUnit};
use crate::unit::{resolve, AreaUnit, LengthUnit, MassUnit, TimeUnit, VolumeUnit};

/// A resolved unit of any kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "unit", rename_all = "snake_case")]
pub enum Unit {
    Area(&'static AreaUnit),
    Length(&'static LengthUnit),
    Mass(&'static MassUnit),
    Time(&'static TimeUnit),
    Volume(&'static VolumeUnit),
    MassAreaRatio(MassAreaRatioUnit),
    VolumeAreaRatio(VolumeAreaRatioUnit),
}

impl Unit {
    /// Category of a simple unit; `None` for rates
    pub fn category(&self) -> Option<CategoryKind> {
        match self {
            Unit::Area(_) => Some(CategoryKind::Area),
            Unit::Length(_) => Some(CategoryKind::Length),
            Unit::Mass(_) => Some(CategoryKind::Mass),
            Unit::Time(_) => Some(CategoryKind::Time),
            Unit::Volume(_) => Some(CategoryKind::Volume),
            Unit::MassAreaRatio(_) | Unit::VolumeAreaRatio(_) => None,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Unit::MassAreaRatio(_) => "mass per area",
            Unit::VolumeAreaRatio(_) => "volume per area",
            simple => simple.category().map(|c| c.name()).unwrap_or_default(),
        }
    }

    pub fn full(&self) -> String {
        match self {
            Unit::Area(u) => u.full().to_string(),
            Unit::Length(u) => u.full().to_string(),
            Unit::Mass(u) => u.full().to_string(),
            Unit::Time(u) => u.full().to_string(),
            Unit::Volume(u) => u.full().to_string(),
            Unit::MassAreaRatio(u) => u.ratio().full(),
            Unit::VolumeAreaRatio(u) => u.ratio().full(),
        }
    }

    pub fn fancy(&self) -> String {
        match self {
            Unit::Area(u) => u.fancy().to_string(),
            Unit::Length(u) => u.fancy().to_string(),
            Unit::Mass(u) => u.fancy().to_string(),
            Unit::Time(u) => u.fancy().to_string(),
            Unit::Volume(u) => u.fancy().to_string(),
            Unit::MassAreaRatio(u) => u.ratio().fancy(),
            Unit::VolumeAreaRatio(u) => u.ratio().fancy(),
        }
    }
}

impl From<RateUnit> for Unit {
    fn from(rate: RateUnit) -> Self {
        match rate {
            RateUnit::MassArea(u) => Unit::MassAreaRatio(u),
            RateUnit::VolumeArea(u) => Unit::VolumeAreaRatio(u),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Area(u) => write!(f, "{}", u),
            Unit::Length(u) => write!(f, "{}", u),
            Unit::Mass(u) => write!(f, "{}", u),
            Unit::Time(u) => write!(f, "{}", u),
            Unit::Volume(u) => write!(f, "{}", u),
            Unit::MassAreaRatio(u) => write!(f, "{}", u),
            Unit::VolumeAreaRatio(u) => write!(f, "{}", u),
        }
    }
}

/// Resolve a label to a unit, trying area, length, mass, time, volume and then
/// the two rate kinds.
pub fn unit_from_label(label: &str) -> Result<Unit, ConvertError> {
    if let Ok(u) = resolve::<Area>(label) {
        return Ok(Unit::Area(u));
    }
    if let Ok(u) = resolve::<Length>(label) {
        return Ok(Unit::Length(u));
    }
    if let Ok(u) = resolve::<Mass>(label) {
        return Ok(Unit::Mass(u));
    }
    if let Ok(u) = resolve::<Time>(label) {
        return Ok(Unit::Time(u));
    }
    if let Ok(u) = resolve::<Volume>(label) {
        return Ok(Unit::Volume(u));
    }
    if looks_compound(label) {
        return RateUnit::from_label(label).map(Unit::from);
    }
    Err(ConvertError::unresolved("known", label))
}

/// Canonical spelling of a label, e.g. "hectares" gives "ha" and "kg/ha" gives
/// "kg1ha-1". An empty label stays empty.
pub fn standard_label(label: &str) -> Result<String, ConvertError> {
    if label.is_empty() {
        return Ok(String::new());
    }
    Ok(unit_from_label(label)?.to_string())
}

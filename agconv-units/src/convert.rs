//! Conversion engine
//!
//! A conversion classifies both unit strings once, picks the first family
//! both belong to and does the scale arithmetic for that family.

use std::fmt;
use serde::Serialize;
use agconv_core::{ConvertError, Side};
use crate::category::{Area, Length, Mass, Volume};
use crate::compound::looks_compound;
use crate::measurement::Measurement;
use crate::ratio::{
    MassAreaRatioMeasurement, MassAreaRatioUnit, RateUnit, VolumeAreaRatioMeasurement,
    VolumeAreaRatioUnit,
};
use crate::unit::{is_time_unit, resolve, AreaUnit, LengthUnit, MassUnit, VolumeUnit};

/// Family of a conversion, in the order families are tried
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitFamily {
    Area,
    Length,
    Mass,
    Volume,
    MassAreaRatio,
    VolumeAreaRatio,
}

impl UnitFamily {
    pub const ORDER: [UnitFamily; 6] = [
        UnitFamily::Area,
        UnitFamily::Length,
        UnitFamily::Mass,
        UnitFamily::Volume,
        UnitFamily::MassAreaRatio,
        UnitFamily::VolumeAreaRatio,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            UnitFamily::Area => "area",
            UnitFamily::Length => "length",
            UnitFamily::Mass => "mass",
            UnitFamily::Volume => "volume",
            UnitFamily::MassAreaRatio => "mass per area",
            UnitFamily::VolumeAreaRatio => "volume per area",
        }
    }
}

impl fmt::Display for UnitFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// What one label resolves to in each family
#[derive(Debug, Clone, Copy)]
struct Classified {
    area: Option<&'static AreaUnit>,
    length: Option<&'static LengthUnit>,
    mass: Option<&'static MassUnit>,
    volume: Option<&'static VolumeUnit>,
    rate: Option<RateUnit>,
    /// Known as a time unit, which has no conversion family
    time: bool,
}

impl Classified {
    fn of(label: &str) -> Self {
        Classified {
            area: resolve::<Area>(label).ok(),
            length: resolve::<Length>(label).ok(),
            mass: resolve::<Mass>(label).ok(),
            volume: resolve::<Volume>(label).ok(),
            rate: RateUnit::from_label(label).ok(),
            time: is_time_unit(label),
        }
    }

    fn is_empty(&self) -> bool {
        self.area.is_none()
            && self.length.is_none()
            && self.mass.is_none()
            && self.volume.is_none()
            && self.rate.is_none()
            && !self.time
    }
}

/// Why `label` resolves to nothing: the compound parse error if it looks like
/// a rate, otherwise a plain unresolved unit.
fn unresolved(label: &str, side: Side) -> ConvertError {
    let err = if looks_compound(label) {
        match RateUnit::from_label(label) {
            Err(err) => err,
            Ok(_) => ConvertError::unresolved("known", label),
        }
    } else {
        ConvertError::unresolved("known", label)
    };
    err.at(side)
}

/// A resolved pair of units sharing a family
#[derive(Debug, Clone, Copy)]
enum Conversion {
    Area(&'static AreaUnit, &'static AreaUnit),
    Length(&'static LengthUnit, &'static LengthUnit),
    Mass(&'static MassUnit, &'static MassUnit),
    Volume(&'static VolumeUnit, &'static VolumeUnit),
    MassAreaRatio(MassAreaRatioUnit, MassAreaRatioUnit),
    VolumeAreaRatio(VolumeAreaRatioUnit, VolumeAreaRatioUnit),
}

impl Conversion {
    /// First family, in [`UnitFamily::ORDER`], both sides belong to
    fn detect(from: &Classified, to: &Classified) -> Option<Conversion> {
        if let (Some(a), Some(b)) = (from.area, to.area) {
            return Some(Conversion::Area(a, b));
        }
        if let (Some(a), Some(b)) = (from.length, to.length) {
            return Some(Conversion::Length(a, b));
        }
        if let (Some(a), Some(b)) = (from.mass, to.mass) {
            return Some(Conversion::Mass(a, b));
        }
        if let (Some(a), Some(b)) = (from.volume, to.volume) {
            return Some(Conversion::Volume(a, b));
        }
        if let (Some(RateUnit::MassArea(a)), Some(RateUnit::MassArea(b))) = (from.rate, to.rate) {
            return Some(Conversion::MassAreaRatio(a, b));
        }
        if let (Some(RateUnit::VolumeArea(a)), Some(RateUnit::VolumeArea(b))) = (from.rate, to.rate) {
            return Some(Conversion::VolumeAreaRatio(a, b));
        }
        None
    }

    fn family(&self) -> UnitFamily {
        match self {
            Conversion::Area(..) => UnitFamily::Area,
            Conversion::Length(..) => UnitFamily::Length,
            Conversion::Mass(..) => UnitFamily::Mass,
            Conversion::Volume(..) => UnitFamily::Volume,
            Conversion::MassAreaRatio(..) => UnitFamily::MassAreaRatio,
            Conversion::VolumeAreaRatio(..) => UnitFamily::VolumeAreaRatio,
        }
    }

    fn apply(&self, value: f64) -> f64 {
        match *self {
            Conversion::Area(a, b) => Measurement::new(value, a).to(b).value,
            Conversion::Length(a, b) => Measurement::new(value, a).to(b).value,
            Conversion::Mass(a, b) => Measurement::new(value, a).to(b).value,
            Conversion::Volume(a, b) => Measurement::new(value, a).to(b).value,
            Conversion::MassAreaRatio(a, b) => MassAreaRatioMeasurement::new(value, a).to(b).value(),
            Conversion::VolumeAreaRatio(a, b) => VolumeAreaRatioMeasurement::new(value, a).to(b).value(),
        }
    }
}

/// The family `from` and `to` would be converted in, if any
pub fn conversion_family(from: &str, to: &str) -> Option<UnitFamily> {
    Conversion::detect(&Classified::of(from), &Classified::of(to)).map(|c| c.family())
}

/// Convert `value` from one unit to another of the same family.
///
/// Time units are not a conversion family: they resolve through
/// [`crate::unit_from_label`] only.
///
/// Identical strings short-circuit before any lookup, so `value_from_to(v, u, u)`
/// is `v` even for unregistered `u`. A side that resolves to nothing is reported
/// as unresolved; two known units with no family in common are incompatible.
///
/// ```
/// use agconv_units::value_from_to;
///
/// assert_eq!(value_from_to(10_000.0, "m2", "ha").unwrap(), 1.0);
/// ```
pub fn value_from_to(value: f64, from: &str, to: &str) -> Result<f64, ConvertError> {
    if from == to {
        return Ok(value);
    }

    let (a, b) = (Classified::of(from), Classified::of(to));
    if a.is_empty() {
        return Err(unresolved(from, Side::From));
    }
    if b.is_empty() {
        return Err(unresolved(to, Side::To));
    }
    let conversion = Conversion::detect(&a, &b).ok_or_else(|| ConvertError::incompatible(from, to))?;
    tracing::debug!(family = conversion.family().name(), from, to, "converting");
    Ok(conversion.apply(value))
}

/// Convert between two area rates whose numerators must be of the same kind.
///
/// Unlike [`value_from_to`], each side is parsed as a rate and errors name the
/// side they came from. A mass rate on one side and a volume rate on the other
/// is a [`ConvertError::NumeratorMismatch`]: only a crop can bridge them.
pub fn convert_rate(value: f64, from: &str, to: &str) -> Result<f64, ConvertError> {
    if from == to {
        return Ok(value);
    }

    let from_rate = RateUnit::from_label(from).map_err(|e| e.at(Side::From))?;
    let to_rate = RateUnit::from_label(to).map_err(|e| e.at(Side::To))?;
    match (from_rate, to_rate) {
        (RateUnit::MassArea(a), RateUnit::MassArea(b)) => {
            Ok(MassAreaRatioMeasurement::new(value, a).to(b).value())
        }
        (RateUnit::VolumeArea(a), RateUnit::VolumeArea(b)) => {
            Ok(VolumeAreaRatioMeasurement::new(value, a).to(b).value())
        }
        (a, b) => Err(ConvertError::NumeratorMismatch {
            from: from.to_string(),
            to: to.to_string(),
            from_kind: a.numerator_kind(),
            to_kind: b.numerator_kind(),
        }),
    }
}

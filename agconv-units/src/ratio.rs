//! Ratio units and rate measurements
//!
//! `RatioUnit<N, D>` is any "N per D" pair and only knows how to print itself.
//! Conversions go through the two area-rate types, whose numerator and
//! denominator categories are fixed by their field types.

use std::fmt;
use serde::Serialize;
use agconv_core::{ConvertError, Part};
use crate::category::{Area, Category, Mass, Volume};
use crate::compound::{exponent_form, split_compound_unit};
use crate::measurement::Measurement;
use crate::unit::{resolve, AreaUnit, MassUnit, UnitDescriptor, VolumeUnit};

/// "Numerator per denominator" for any pair of categories
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(bound = "")]
pub struct RatioUnit<N: Category, D: Category> {
    pub numerator: &'static UnitDescriptor<N>,
    pub denominator: &'static UnitDescriptor<D>,
}

impl<N: Category, D: Category> RatioUnit<N, D> {
    pub fn new(numerator: &'static UnitDescriptor<N>, denominator: &'static UnitDescriptor<D>) -> Self {
        RatioUnit { numerator, denominator }
    }

    /// Long form, e.g. "kilogram per hectare"
    pub fn full(&self) -> String {
        format!("{} per {}", self.numerator.full(), self.denominator.full())
    }

    /// Display form, e.g. "kg/m²"
    pub fn fancy(&self) -> String {
        format!("{}/{}", self.numerator.fancy(), self.denominator.fancy())
    }
}

impl<N: Category, D: Category> fmt::Display for RatioUnit<N, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", exponent_form(self.numerator.symbol(), self.denominator.symbol()))
    }
}

/// Split a compound label and resolve its halves in categories `N` and `D`.
fn resolve_pair<N: Category, D: Category>(
    label: &str,
    expected: &'static str,
) -> Result<RatioUnit<N, D>, ConvertError> {
    let (num, den) = split_compound_unit(label)?;
    let numerator = resolve::<N>(&num).map_err(|_| ConvertError::InvalidCompoundPart {
        label: label.to_string(),
        part: Part::Numerator,
        segment: num.clone(),
        expected,
    })?;
    let denominator = resolve::<D>(&den).map_err(|_| ConvertError::InvalidCompoundPart {
        label: label.to_string(),
        part: Part::Denominator,
        segment: den.clone(),
        expected: "an area",
    })?;
    Ok(RatioUnit::new(numerator, denominator))
}

/// Area denominator conversion: how many `to` units one `from` unit is.
fn area_ratio(from: &'static AreaUnit, to: &'static AreaUnit) -> f64 {
    Measurement::new(1.0, from).to(to).value
}

/// Mass per area, e.g. kg/ha
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MassAreaRatioUnit {
    pub numerator: &'static MassUnit,
    pub denominator: &'static AreaUnit,
}

impl MassAreaRatioUnit {
    pub fn new(numerator: &'static MassUnit, denominator: &'static AreaUnit) -> Self {
        MassAreaRatioUnit { numerator, denominator }
    }

    /// Parse a compound label whose numerator is a mass unit
    pub fn from_label(label: &str) -> Result<Self, ConvertError> {
        let pair = resolve_pair::<Mass, Area>(label, "a mass")?;
        Ok(Self::new(pair.numerator, pair.denominator))
    }

    pub fn ratio(&self) -> RatioUnit<Mass, Area> {
        RatioUnit::new(self.numerator, self.denominator)
    }
}

impl fmt::Display for MassAreaRatioUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.ratio(), f)
    }
}

/// Volume per area, e.g. l/ha or bu/ac
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VolumeAreaRatioUnit {
    pub numerator: &'static VolumeUnit,
    pub denominator: &'static AreaUnit,
}

impl VolumeAreaRatioUnit {
    pub fn new(numerator: &'static VolumeUnit, denominator: &'static AreaUnit) -> Self {
        VolumeAreaRatioUnit { numerator, denominator }
    }

    /// Parse a compound label whose numerator is a volume unit
    pub fn from_label(label: &str) -> Result<Self, ConvertError> {
        let pair = resolve_pair::<Volume, Area>(label, "a volume")?;
        Ok(Self::new(pair.numerator, pair.denominator))
    }

    pub fn ratio(&self) -> RatioUnit<Volume, Area> {
        RatioUnit::new(self.numerator, self.denominator)
    }
}

impl fmt::Display for VolumeAreaRatioUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.ratio(), f)
    }
}

/// A validated area rate of either kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RateUnit {
    MassArea(MassAreaRatioUnit),
    VolumeArea(VolumeAreaRatioUnit),
}

impl RateUnit {
    /// Parse a compound label. A mass numerator wins over a volume one.
    pub fn from_label(label: &str) -> Result<Self, ConvertError> {
        let (num, _) = split_compound_unit(label)?;
        if crate::unit::is_mass_unit(&num) {
            MassAreaRatioUnit::from_label(label).map(RateUnit::MassArea)
        } else {
            VolumeAreaRatioUnit::from_label(label).map(RateUnit::VolumeArea)
        }
    }

    /// Category of the numerator, "mass" or "volume"
    pub fn numerator_kind(&self) -> &'static str {
        match self {
            RateUnit::MassArea(_) => Mass::KIND.name(),
            RateUnit::VolumeArea(_) => Volume::KIND.name(),
        }
    }

    pub fn denominator(&self) -> &'static AreaUnit {
        match self {
            RateUnit::MassArea(u) => u.denominator,
            RateUnit::VolumeArea(u) => u.denominator,
        }
    }

    pub fn full(&self) -> String {
        match self {
            RateUnit::MassArea(u) => u.ratio().full(),
            RateUnit::VolumeArea(u) => u.ratio().full(),
        }
    }

    pub fn fancy(&self) -> String {
        match self {
            RateUnit::MassArea(u) => u.ratio().fancy(),
            RateUnit::VolumeArea(u) => u.ratio().fancy(),
        }
    }
}

impl fmt::Display for RateUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RateUnit::MassArea(u) => fmt::Display::fmt(u, f),
            RateUnit::VolumeArea(u) => fmt::Display::fmt(u, f),
        }
    }
}

/// A mass spread over one unit of area
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MassAreaRatioMeasurement {
    pub mass: Measurement<Mass>,
    pub area: &'static AreaUnit,
}

impl MassAreaRatioMeasurement {
    pub fn new(value: f64, unit: MassAreaRatioUnit) -> Self {
        MassAreaRatioMeasurement {
            mass: Measurement::new(value, unit.numerator),
            area: unit.denominator,
        }
    }

    pub fn value(&self) -> f64 {
        self.mass.value
    }

    pub fn unit(&self) -> MassAreaRatioUnit {
        MassAreaRatioUnit::new(self.mass.unit, self.area)
    }

    /// Convert the numerator first, then divide by the area scale.
    pub fn to(&self, unit: MassAreaRatioUnit) -> MassAreaRatioMeasurement {
        let mass = self.mass.to(unit.numerator);
        MassAreaRatioMeasurement {
            mass: Measurement::new(mass.value / area_ratio(self.area, unit.denominator), mass.unit),
            area: unit.denominator,
        }
    }
}

impl fmt::Display for MassAreaRatioMeasurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value(), self.unit())
    }
}

/// A volume spread over one unit of area
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VolumeAreaRatioMeasurement {
    pub volume: Measurement<Volume>,
    pub area: &'static AreaUnit,
}

impl VolumeAreaRatioMeasurement {
    pub fn new(value: f64, unit: VolumeAreaRatioUnit) -> Self {
        VolumeAreaRatioMeasurement {
            volume: Measurement::new(value, unit.numerator),
            area: unit.denominator,
        }
    }

    pub fn value(&self) -> f64 {
        self.volume.value
    }

    pub fn unit(&self) -> VolumeAreaRatioUnit {
        VolumeAreaRatioUnit::new(self.volume.unit, self.area)
    }

    /// Convert the numerator first, then divide by the area scale.
    pub fn to(&self, unit: VolumeAreaRatioUnit) -> VolumeAreaRatioMeasurement {
        let volume = self.volume.to(unit.numerator);
        VolumeAreaRatioMeasurement {
            volume: Measurement::new(volume.value / area_ratio(self.area, unit.denominator), volume.unit),
            area: unit.denominator,
        }
    }
}

impl fmt::Display for VolumeAreaRatioMeasurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value(), self.unit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{Length, Time};
    use crate::units::{area, length, mass, time, volume};

    fn mass_rate(label: &str) -> MassAreaRatioUnit {
        MassAreaRatioUnit::from_label(label).unwrap()
    }

    fn volume_rate(label: &str) -> VolumeAreaRatioUnit {
        VolumeAreaRatioUnit::from_label(label).unwrap()
    }

    #[test]
    fn test_generic_ratio_display() {
        let speed = RatioUnit::<Length, Time>::new(&length::KILOMETRE, &time::HOUR);
        assert_eq!(speed.to_string(), "km1h-1");
        assert_eq!(speed.full(), "kilometre per hour");

        let rate = RatioUnit::<Volume, Area>::new(&volume::CUBIC_METRE, &area::SQUARE_METRE);
        assert_eq!(rate.to_string(), "[m3]1[m2]-1");
        assert_eq!(rate.fancy(), "m³/m²");
    }

    #[test]
    fn test_from_label() {
        let unit = mass_rate("kg/ha");
        assert_eq!(unit.numerator.symbol(), "kg");
        assert_eq!(unit.denominator.symbol(), "ha");
        assert_eq!(unit.to_string(), "kg1ha-1");

        assert_eq!(volume_rate("US gal / acres").to_string(), "gal1ac-1");
    }

    #[test]
    fn test_from_label_wrong_numerator() {
        let err = MassAreaRatioUnit::from_label("l/ha").unwrap_err();
        assert!(matches!(
            err,
            ConvertError::InvalidCompoundPart { part: Part::Numerator, expected: "a mass", .. }
        ));
        assert!(VolumeAreaRatioUnit::from_label("kg1ha-1").is_err());
    }

    #[test]
    fn test_rate_unit_from_label() {
        assert!(matches!(RateUnit::from_label("kg1ha-1").unwrap(), RateUnit::MassArea(_)));
        assert!(matches!(RateUnit::from_label("bu/ac").unwrap(), RateUnit::VolumeArea(_)));
        assert_eq!(RateUnit::from_label("bu/ac").unwrap().numerator_kind(), "volume");
        assert!(RateUnit::from_label("kg").is_err());
    }

    #[test]
    fn test_mass_rate_conversion() {
        let rate = MassAreaRatioMeasurement::new(1.0, mass_rate("kg1ha-1"));
        let converted = rate.to(mass_rate("lb1ac-1"));
        assert!((converted.value() - 0.892180).abs() < 0.0001);
        assert_eq!(converted.unit().to_string(), "lb1ac-1");
    }

    #[test]
    fn test_area_only_change() {
        // 100 kg on one hectare is 1 kg on each 100 m2
        let rate = MassAreaRatioMeasurement::new(100.0, mass_rate("kg/ha"));
        let per_m2 = rate.to(mass_rate("kg/m2"));
        assert!((per_m2.value() - 0.01).abs() < 1e-12);
    }

    #[test]
    fn test_volume_rate_conversion() {
        let rate = VolumeAreaRatioMeasurement::new(100.0, volume_rate("l/ha"));
        let converted = rate.to(volume_rate("gal/ac"));
        // 100 l/ha = 26.417 gal/ha = 10.691 gal/ac
        assert!((converted.value() - 10.6907).abs() < 0.001);
    }

    #[test]
    fn test_ratio_round_trip() {
        let labels = ["kg1ha-1", "lb1ac-1", "t/ha", "g1[m2]-1", "ozm/ft2"];
        for a in labels {
            for b in labels {
                let there = MassAreaRatioMeasurement::new(3.75, mass_rate(a)).to(mass_rate(b));
                let back = there.to(mass_rate(a));
                assert!((back.value() - 3.75).abs() < 1e-9, "{} -> {}", a, b);
            }
        }
    }

    #[test]
    fn test_zero_rate() {
        let unit = volume_rate("megalitres/ha");
        assert_eq!(unit.numerator.symbol(), "Ml");
        let rate = VolumeAreaRatioMeasurement::new(0.0, unit);
        assert_eq!(rate.to(volume_rate("floz/ft2")).value(), 0.0);
    }

    #[test]
    fn test_measurement_display() {
        let rate = MassAreaRatioMeasurement::new(2.5, MassAreaRatioUnit::new(&mass::TONNE, &area::HECTARE));
        assert_eq!(rate.to_string(), "2.5 t1ha-1");
    }
}

//! Crop yield factors and the mass/volume rate bridge
//!
//! Bushels and bales are volumes, but a yield in bu/ac only becomes a mass per
//! area once the crop is known. Each crop weighs a fixed number of grams per
//! bushel, or per bale for cotton.

use std::fmt;
use serde::Serialize;
use agconv_core::ConvertError;
use crate::category::{Mass, Volume};
use crate::convert::value_from_to;
use crate::measurement::Measurement;
use crate::ratio::{
    MassAreaRatioMeasurement, MassAreaRatioUnit, RateUnit, VolumeAreaRatioMeasurement,
    VolumeAreaRatioUnit,
};
use crate::unit::VolumeUnit;
use crate::units::{mass, volume};

/// Volume unit a crop's yield is counted in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum YieldUnit {
    Bushel,
    Bale,
}

impl YieldUnit {
    pub fn unit(&self) -> &'static VolumeUnit {
        match self {
            YieldUnit::Bushel => &volume::BUSHEL,
            YieldUnit::Bale => &volume::BALE,
        }
    }
}

impl fmt::Display for YieldUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.unit().full())
    }
}

/// One crop and its weight per yield unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Crop {
    pub name: &'static str,
    pub yield_unit: YieldUnit,
    pub grams_per_unit: f64,
}

const fn bushel(name: &'static str, grams_per_unit: f64) -> Crop {
    Crop { name, yield_unit: YieldUnit::Bushel, grams_per_unit }
}

const fn bale(name: &'static str, grams_per_unit: f64) -> Crop {
    Crop { name, yield_unit: YieldUnit::Bale, grams_per_unit }
}

/// Crops weighed per bushel
pub static BUSHEL_CROPS: [Crop; 14] = [
    bushel("alfalfa", 27_215.5),
    bushel("barley", 21_772.0),
    bushel("corn", 25_400.0),
    bushel("flax", 25_401.2),
    bushel("lucerne", 27_215.5),
    bushel("maize", 25_400.0),
    bushel("millet", 22_679.6),
    bushel("oats", 14_515.0),
    bushel("rye", 25_401.2),
    bushel("sorghum", 25_400.0),
    bushel("soybean", 27_215.5),
    bushel("soybeans", 27_215.5),
    bushel("spelt", 18_143.7),
    bushel("wheat", 27_215.5),
];

/// Crops weighed per bale
pub static BALE_CROPS: [Crop; 1] = [bale("cotton", 226_800.0)];

impl Crop {
    /// Look a crop up by name, ignoring case and surrounding whitespace.
    pub fn from_name(name: &str) -> Result<&'static Crop, ConvertError> {
        let key = name.trim().to_lowercase();
        BUSHEL_CROPS
            .iter()
            .chain(BALE_CROPS.iter())
            .find(|crop| crop.name == key)
            .ok_or_else(|| ConvertError::UnknownCrop(name.to_string()))
    }

    /// Every known crop, bushel crops first
    pub fn all() -> impl Iterator<Item = &'static Crop> {
        BUSHEL_CROPS.iter().chain(BALE_CROPS.iter())
    }

    /// Weight of a yield measured in this crop's yield unit
    pub fn to_mass(&self, amount: Measurement<Volume>) -> Measurement<Mass> {
        let count = amount.to(self.yield_unit.unit()).value;
        Measurement::new(count * self.grams_per_unit, &mass::GRAM)
    }

    /// Yield-unit count that weighs `amount`
    pub fn to_volume(&self, amount: Measurement<Mass>) -> Measurement<Volume> {
        let grams = amount.to(&mass::GRAM).value;
        Measurement::new(grams / self.grams_per_unit, self.yield_unit.unit())
    }

    fn expect_unit(&self, unit: YieldUnit) -> Result<(), ConvertError> {
        if self.yield_unit == unit {
            Ok(())
        } else {
            Err(ConvertError::InvalidArgument(format!(
                "{} is measured in {}s, not {}s",
                self.name, self.yield_unit, unit
            )))
        }
    }
}

impl fmt::Display for Crop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

pub fn is_bushel_crop(name: &str) -> bool {
    matches!(Crop::from_name(name), Ok(crop) if crop.yield_unit == YieldUnit::Bushel)
}

pub fn is_bale_crop(name: &str) -> bool {
    matches!(Crop::from_name(name), Ok(crop) if crop.yield_unit == YieldUnit::Bale)
}

pub fn bushels_to_grams(bushels: f64, crop: &str) -> Result<f64, ConvertError> {
    let crop = Crop::from_name(crop)?;
    crop.expect_unit(YieldUnit::Bushel)?;
    Ok(crop.to_mass(Measurement::new(bushels, &volume::BUSHEL)).value)
}

pub fn grams_to_bushels(grams: f64, crop: &str) -> Result<f64, ConvertError> {
    let crop = Crop::from_name(crop)?;
    crop.expect_unit(YieldUnit::Bushel)?;
    Ok(crop.to_volume(Measurement::new(grams, &mass::GRAM)).value)
}

pub fn bales_to_grams(bales: f64, crop: &str) -> Result<f64, ConvertError> {
    let crop = Crop::from_name(crop)?;
    crop.expect_unit(YieldUnit::Bale)?;
    Ok(crop.to_mass(Measurement::new(bales, &volume::BALE)).value)
}

pub fn grams_to_bales(grams: f64, crop: &str) -> Result<f64, ConvertError> {
    let crop = Crop::from_name(crop)?;
    crop.expect_unit(YieldUnit::Bale)?;
    Ok(crop.to_volume(Measurement::new(grams, &mass::GRAM)).value)
}

/// Convert a yield rate, bridging mass and volume rates through the crop.
///
/// Rates of the same kind, and anything that is not a pair of area rates,
/// convert as [`value_from_to`] does and ignore the crop. Across kinds the
/// numerator moves between mass and the crop's bushels or bales over the
/// source area, and the area changes only in the final rate conversion.
///
/// ```
/// use agconv_units::crop_rate;
///
/// let lb = crop_rate("Alfalfa", 1.0, "bu1ac-1", "lb1ac-1").unwrap();
/// assert!((lb - 60.0).abs() < 1.0);
/// ```
pub fn crop_rate(crop: &str, value: f64, from: &str, to: &str) -> Result<f64, ConvertError> {
    if from == to {
        return Ok(value);
    }

    match (RateUnit::from_label(from), RateUnit::from_label(to)) {
        (Ok(RateUnit::MassArea(source)), Ok(RateUnit::VolumeArea(target))) => {
            let crop = Crop::from_name(crop)?;
            tracing::debug!(crop = crop.name, from, to, "bridging mass rate to volume rate");
            Ok(mass_to_volume_rate(crop, MassAreaRatioMeasurement::new(value, source), target).value())
        }
        (Ok(RateUnit::VolumeArea(source)), Ok(RateUnit::MassArea(target))) => {
            let crop = Crop::from_name(crop)?;
            tracing::debug!(crop = crop.name, from, to, "bridging volume rate to mass rate");
            Ok(volume_to_mass_rate(crop, VolumeAreaRatioMeasurement::new(value, source), target).value())
        }
        _ => value_from_to(value, from, to),
    }
}

/// Mass per area to the crop's yield unit per the same area, then to `target`.
pub fn mass_to_volume_rate(
    crop: &Crop,
    rate: MassAreaRatioMeasurement,
    target: VolumeAreaRatioUnit,
) -> VolumeAreaRatioMeasurement {
    let counted = crop.to_volume(rate.mass);
    let intermediate = VolumeAreaRatioUnit::new(counted.unit, rate.area);
    VolumeAreaRatioMeasurement::new(counted.value, intermediate).to(target)
}

/// Volume per area to the crop's mass per the same area, then to `target`.
pub fn volume_to_mass_rate(
    crop: &Crop,
    rate: VolumeAreaRatioMeasurement,
    target: MassAreaRatioUnit,
) -> MassAreaRatioMeasurement {
    let weighed = crop.to_mass(rate.volume);
    let intermediate = MassAreaRatioUnit::new(weighed.unit, rate.area);
    MassAreaRatioMeasurement::new(weighed.value, intermediate).to(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use agconv_core::codes;

    #[test]
    fn test_alfalfa_bushels_to_pounds() {
        let lb = crop_rate("Alfalfa", 1.0, "bu1ac-1", "lb1ac-1").unwrap();
        assert!((lb - 60.0).abs() < 1.0);
    }

    #[test]
    fn test_cotton_bales_to_tonnes() {
        let t = crop_rate("cotton", 10.0, "bale1ac-1", "t1ac-1").unwrap();
        assert!((t - 2.268).abs() < 0.01);
    }

    #[test]
    fn test_area_changes_once() {
        // 1 bu/ac of wheat is 27.2155 kg/ac, and 1 ha is 2.47105 ac
        let kg_ha = crop_rate("wheat", 1.0, "bu/ac", "kg/ha").unwrap();
        let expected = 27.2155 * 10_000.0 / 4046.86;
        assert!((kg_ha - expected).abs() < 1e-6);
    }

    #[test]
    fn test_padded_rate_labels() {
        let kg_ha = crop_rate("wheat", 1.0, "bu1ac-1 ", "kg1ha-1").unwrap();
        let expected = 27.2155 * 10_000.0 / 4046.86;
        assert!((kg_ha - expected).abs() < 1e-6);
    }

    #[test]
    fn test_mass_to_bushels() {
        // 25.4 kg of corn is one bushel
        let bu = crop_rate("corn", 25.4, "kg/ha", "bu/ha").unwrap();
        assert!((bu - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_bridge_round_trip() {
        for crop in ["wheat", "oats", "cotton"] {
            let there = crop_rate(crop, 3200.0, "kg1ha-1", "bu1ac-1").unwrap();
            let back = crop_rate(crop, there, "bu1ac-1", "kg1ha-1").unwrap();
            assert!((back - 3200.0).abs() < 1e-6, "{}", crop);
        }
    }

    #[test]
    fn test_bale_crop_in_bushels() {
        // cotton is counted in bales; the bale count is then expressed in bushels
        let bu = crop_rate("cotton", 226.8, "kg/ha", "bu/ha").unwrap();
        assert!((bu - 480.0 / 35.2391).abs() < 1e-6);
    }

    #[test]
    fn test_same_kind_ignores_crop() {
        let lb = crop_rate("", 1.0, "kg1ha-1", "lb1ac-1").unwrap();
        assert!((lb - 0.892180).abs() < 0.0001);
        let gal = crop_rate("not a crop", 1.0, "l/ha", "l/ac").unwrap();
        assert!((gal - 0.404686).abs() < 0.0001);
        assert_eq!(crop_rate("", 5.0, "kg", "g").unwrap(), 5000.0);
    }

    #[test]
    fn test_identity() {
        assert_eq!(crop_rate("kale", 9.0, "bushels per acre", "bushels per acre").unwrap(), 9.0);
    }

    #[test]
    fn test_unknown_crop() {
        let err = crop_rate("kale", 1.0, "bu/ac", "kg/ha").unwrap_err();
        assert_eq!(err, ConvertError::UnknownCrop("kale".to_string()));
        let err = crop_rate("", 1.0, "kg/ha", "bu/ac").unwrap_err();
        assert_eq!(err.code(), codes::UNKNOWN_CROP);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Crop::from_name(" WHEAT ").unwrap().grams_per_unit, 27_215.5);
        assert_eq!(Crop::from_name("Cotton").unwrap().yield_unit, YieldUnit::Bale);
        assert!(Crop::from_name("kale").is_err());
        assert_eq!(Crop::all().count(), 15);
    }

    #[test]
    fn test_crop_sets_are_disjoint() {
        for crop in &BUSHEL_CROPS {
            assert!(is_bushel_crop(crop.name));
            assert!(!is_bale_crop(crop.name));
        }
        assert!(is_bale_crop("cotton"));
        assert!(!is_bushel_crop("cotton"));
    }

    #[test]
    fn test_unit_helpers() {
        assert_eq!(bushels_to_grams(2.0, "barley").unwrap(), 43_544.0);
        assert!((grams_to_bushels(14_515.0, "oats").unwrap() - 1.0).abs() < 1e-12);
        assert_eq!(bales_to_grams(1.0, "cotton").unwrap(), 226_800.0);
        assert!((grams_to_bales(113_400.0, "cotton").unwrap() - 0.5).abs() < 1e-12);

        let err = bushels_to_grams(1.0, "cotton").unwrap_err();
        assert!(matches!(err, ConvertError::InvalidArgument(_)));
        assert!(grams_to_bales(1.0, "wheat").is_err());
    }
}

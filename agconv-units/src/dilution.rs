//! Diluted product application
//!
//! A product is dissolved in a carrier (say 10 g per litre of water) and the
//! mix is sprayed at some carrier rate (say 100 l per hectare). The product
//! rate over the area follows from the two.

use std::fmt;
use serde::{Deserialize, Serialize};
use agconv_core::ConvertError;
use crate::category::Area;
use crate::convert::value_from_to;
use crate::label::{unit_from_label, Unit};
use crate::ratio::{MassAreaRatioUnit, RateUnit, VolumeAreaRatioUnit};
use crate::unit::{is_mass_unit, is_volume_unit, resolve};

fn one() -> f64 {
    1.0
}

/// `product_amount` of product in `carrier_solvent_amount` of carrier, with
/// `carrier_application_amount` of carrier applied per area unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DilutedProductApplication {
    pub product_amount: f64,
    pub product_unit: String,
    #[serde(default = "one")]
    pub carrier_solvent_amount: f64,
    pub carrier_solvent_unit: String,
    pub carrier_application_amount: f64,
    pub carrier_application_unit: String,
    pub area_unit: String,
}

/// Product applied per area unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ApplicationRate {
    pub value: f64,
    pub unit: RateUnit,
}

impl ApplicationRate {
    /// Exponent-form label of the rate unit, e.g. "g1ha-1"
    pub fn label(&self) -> String {
        self.unit.to_string()
    }
}

impl fmt::Display for ApplicationRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CarrierKind {
    Mass,
    Volume,
}

fn carrier_kind(role: &str, label: &str) -> Result<CarrierKind, ConvertError> {
    if is_mass_unit(label) {
        Ok(CarrierKind::Mass)
    } else if is_volume_unit(label) {
        Ok(CarrierKind::Volume)
    } else {
        Err(ConvertError::InvalidArgument(format!(
            "carrier ({}) unit '{}' is not a mass or volume unit",
            role, label
        )))
    }
}

impl DilutedProductApplication {
    /// Validate the units and build the unit of the resulting rate.
    ///
    /// The carrier must be weighed or measured the same way on both sides:
    /// 10 g/kg spread at 50 kg/ha works, 10 g/l spread at 10 kg/ha needs a
    /// density and is rejected.
    pub fn unit_check(&self) -> Result<RateUnit, ConvertError> {
        let area = resolve::<Area>(&self.area_unit)?;

        let rate = match unit_from_label(&self.product_unit) {
            Ok(Unit::Mass(product)) => RateUnit::MassArea(MassAreaRatioUnit::new(product, area)),
            Ok(Unit::Volume(product)) => RateUnit::VolumeArea(VolumeAreaRatioUnit::new(product, area)),
            _ => {
                return Err(ConvertError::InvalidArgument(format!(
                    "product unit '{}' is not a mass or volume unit",
                    self.product_unit
                )))
            }
        };

        let solvent = carrier_kind("solvent", &self.carrier_solvent_unit)?;
        let application = carrier_kind("application", &self.carrier_application_unit)?;
        if solvent != application {
            return Err(ConvertError::InvalidArgument(format!(
                "carrier (solvent) unit '{}' and carrier (application) unit '{}' need to both be mass or both be volume",
                self.carrier_solvent_unit, self.carrier_application_unit
            )));
        }

        if !(self.carrier_solvent_amount.is_finite() && self.carrier_solvent_amount > 0.0) {
            return Err(ConvertError::InvalidArgument(format!(
                "carrier (solvent) amount must be positive, got {}",
                self.carrier_solvent_amount
            )));
        }

        Ok(rate)
    }

    /// Product applied per area unit, e.g. 10 g/l at 100 l/ha is 1000 g1ha-1.
    pub fn application_rate(&self) -> Result<ApplicationRate, ConvertError> {
        let unit = self.unit_check()?;
        let carrier = value_from_to(
            self.carrier_application_amount,
            &self.carrier_application_unit,
            &self.carrier_solvent_unit,
        )?;
        let per_carrier_unit = self.product_amount / self.carrier_solvent_amount;
        Ok(ApplicationRate { value: per_carrier_unit * carrier, unit })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn application(
        product: (f64, &str),
        solvent: (f64, &str),
        carrier: (f64, &str),
        area: &str,
    ) -> DilutedProductApplication {
        DilutedProductApplication {
            product_amount: product.0,
            product_unit: product.1.to_string(),
            carrier_solvent_amount: solvent.0,
            carrier_solvent_unit: solvent.1.to_string(),
            carrier_application_amount: carrier.0,
            carrier_application_unit: carrier.1.to_string(),
            area_unit: area.to_string(),
        }
    }

    #[test]
    fn test_grams_per_litre() {
        let rate = application((10.0, "g"), (1.0, "l"), (100.0, "l"), "ha").application_rate().unwrap();
        assert_eq!(rate.value, 1000.0);
        assert_eq!(rate.label(), "g1ha-1");
    }

    #[test]
    fn test_dilution_cases() {
        let cases = [
            (application((1.0, "g"), (1.0, "l"), (1.0, "l"), "ha"), 1.0, "g1ha-1"),
            (application((1.0, "g"), (10.0, "l"), (100.0, "l"), "ha"), 10.0, "g1ha-1"),
            (application((15.0, "g"), (1.0, "l"), (150.0, "l"), "ha"), 2250.0, "g1ha-1"),
            (application((15.0, "ml"), (1.0, "l"), (150.0, "l"), "ha"), 2250.0, "ml1ha-1"),
            (application((250.0, "g"), (10.0, "kg"), (1.5, "t"), "ha"), 37_500.0, "g1ha-1"),
            (application((0.0, "g"), (1.0, "l"), (0.0, "l"), "hectares"), 0.0, "g1ha-1"),
        ];
        for (dpa, value, unit) in cases {
            let rate = dpa.application_rate().unwrap();
            assert!((rate.value - value).abs() < 1e-9, "{:?}", dpa);
            assert_eq!(rate.label(), unit);
        }
    }

    #[test]
    fn test_carrier_unit_conversion() {
        // 2 g per litre sprayed at 10 US gal per acre
        let rate = application((2.0, "g"), (1.0, "l"), (10.0, "gal"), "ac").application_rate().unwrap();
        assert!((rate.value - 75.7082).abs() < 1e-4);
        assert_eq!(rate.label(), "g1ac-1");
    }

    #[test]
    fn test_carrier_kinds_must_match() {
        let err = application((1.0, "kg"), (1.0, "l"), (100.0, "kg"), "ha").application_rate().unwrap_err();
        assert!(matches!(err, ConvertError::InvalidArgument(_)));
    }

    #[test]
    fn test_invalid_units() {
        let err = application((1.0, "g"), (1.0, "l"), (1.0, "l"), "kg").unit_check().unwrap_err();
        assert_eq!(err, ConvertError::unresolved("area", "kg"));

        let err = application((1.0, "ha"), (1.0, "l"), (1.0, "l"), "ha").unit_check().unwrap_err();
        assert!(err.to_string().contains("product unit 'ha'"));

        let err = application((1.0, "g"), (1.0, "m"), (1.0, "l"), "ha").unit_check().unwrap_err();
        assert!(err.to_string().contains("carrier (solvent)"));
    }

    #[test]
    fn test_solvent_amount_must_be_positive() {
        let err = application((1.0, "g"), (0.0, "l"), (1.0, "l"), "ha").unit_check().unwrap_err();
        assert!(matches!(err, ConvertError::InvalidArgument(_)));
    }

    #[test]
    fn test_solvent_amount_defaults_to_one() {
        let dpa: DilutedProductApplication = serde_json::from_str(
            r#"{"product_amount": 5, "product_unit": "ml", "carrier_solvent_unit": "l",
                "carrier_application_amount": 200, "carrier_application_unit": "l",
                "area_unit": "ha"}"#,
        )
        .unwrap();
        assert_eq!(dpa.carrier_solvent_amount, 1.0);
        assert_eq!(dpa.application_rate().unwrap().value, 1000.0);
    }
}

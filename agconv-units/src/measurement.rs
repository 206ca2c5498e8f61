//! Measurement type - a value with an associated unit

use std::fmt;
use serde::Serialize;
use crate::category::Category;
use crate::unit::UnitDescriptor;

/// A value in one unit of category `C`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(bound = "")]
pub struct Measurement<C: Category> {
    /// The numeric value
    pub value: f64,
    /// The unit of measurement
    pub unit: &'static UnitDescriptor<C>,
}

impl<C: Category> Measurement<C> {
    /// Create a new measurement
    pub fn new(value: f64, unit: &'static UnitDescriptor<C>) -> Self {
        Measurement { value, unit }
    }

    /// Convert to another unit of the same category.
    ///
    /// Zero stays exactly zero whatever the factors.
    pub fn to(&self, unit: &'static UnitDescriptor<C>) -> Measurement<C> {
        let value = if self.value == 0.0 {
            0.0
        } else {
            self.value * self.unit.factor() / unit.factor()
        };
        Measurement { value, unit }
    }

    /// Get the value in the category's base unit
    pub fn base_value(&self) -> f64 {
        self.value * self.unit.factor()
    }
}

impl<C: Category> fmt::Display for Measurement<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{Area, Length, Mass};
    use crate::unit::resolve;
    use crate::units::{area, length, mass, volume};

    #[test]
    fn test_to_same_category() {
        let m = Measurement::new(1.0, &mass::KILOGRAM).to(&mass::GRAM);
        assert_eq!(m.value, 1000.0);
        assert_eq!(m.unit.symbol(), "g");
    }

    #[test]
    fn test_zero_is_preserved() {
        let m = Measurement::new(0.0, &volume::MEGALITRE).to(&volume::MICROLITRE);
        assert_eq!(m.value, 0.0);
        let m = Measurement::new(-0.0, &area::ACRE).to(&area::HECTARE);
        assert_eq!(m.value, 0.0);
    }

    #[test]
    fn test_round_trip() {
        let units = ["mm", "cm", "m", "km", "in", "ft", "yd", "mi"];
        for from in units {
            for to in units {
                let a = resolve::<Length>(from).unwrap();
                let b = resolve::<Length>(to).unwrap();
                let back = Measurement::new(12.5, a).to(b).to(a);
                assert!((back.value - 12.5).abs() < 1e-9, "{} -> {} -> {}", from, to, from);
            }
        }
    }

    #[test]
    fn test_acre_to_hectare() {
        let m = Measurement::<Area>::new(1.0, &area::ACRE).to(&area::HECTARE);
        assert!((m.value - 0.404686).abs() < 0.0001);
    }

    #[test]
    fn test_base_value() {
        let m = Measurement::<Mass>::new(2.0, &mass::POUND);
        assert!((m.base_value() - 907.184).abs() < 1e-9);
        assert_eq!(Measurement::new(3.0, &length::KILOMETRE).base_value(), 3000.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Measurement::new(2.5, &mass::TONNE)), "2.5 t");
    }
}

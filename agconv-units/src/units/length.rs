//! Length units (base: metre)

use crate::unit::LengthUnit;

pub static MILLIMETRE: LengthUnit = LengthUnit::new(
    "mm", "millimetre", "millimetre",
    &["millimeter", "millimeters", "millimetres"],
    0.001,
);

pub static CENTIMETRE: LengthUnit = LengthUnit::new(
    "cm", "centimetre", "centimetre",
    &["centimeter", "centimeters", "centimetres"],
    0.01,
);

pub static METRE: LengthUnit = LengthUnit::new(
    "m", "metre", "metre",
    &["meter", "meters", "metres"],
    1.0,
);

pub static KILOMETRE: LengthUnit = LengthUnit::new(
    "km", "kilometre", "kilometre",
    &["kilometer", "kilometers", "kilometres"],
    1000.0,
);

pub static INCH: LengthUnit = LengthUnit::new("in", "inch", "inch", &["inches"], 0.0254);

pub static FOOT: LengthUnit = LengthUnit::new("ft", "foot", "foot", &["feet"], 0.3048);

pub static YARD: LengthUnit = LengthUnit::new("yd", "yard", "yard", &["yards"], 0.9144);

pub static MILE: LengthUnit = LengthUnit::new("mi", "mile", "mile", &["miles"], 1609.34);

pub static LENGTH_UNITS: [&LengthUnit; 8] = [
    &MILLIMETRE,
    &CENTIMETRE,
    &METRE,
    &KILOMETRE,
    &INCH,
    &FOOT,
    &YARD,
    &MILE,
];

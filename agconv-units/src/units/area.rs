//! Area units (base: square metre)

use crate::unit::AreaUnit;

pub static SQUARE_CENTIMETRE: AreaUnit = AreaUnit::new(
    "cm2", "square centimetre", "cm²",
    &[
        "cm^2",
        "centimetre squared",
        "centimetres squared",
        "centimeter squared",
        "square centimetres",
        "square centimeter",
        "squared centimeters",
    ],
    0.0001,
);

pub static SQUARE_METRE: AreaUnit = AreaUnit::new(
    "m2", "square metre", "m²",
    &[
        "m^2",
        "metre squared",
        "metres squared",
        "meter squared",
        "square metres",
        "square meter",
        "squared meters",
    ],
    1.0,
);

pub static SQUARE_KILOMETRE: AreaUnit = AreaUnit::new(
    "km2", "square kilometre", "km²",
    &[
        "km^2",
        "kilometre squared",
        "kilometres squared",
        "kilometer squared",
        "square kilometres",
        "square kilometer",
        "squared kilometers",
    ],
    1_000_000.0,
);

pub static HECTARE: AreaUnit = AreaUnit::new("ha", "hectare", "ha", &["hectares"], 10_000.0);

pub static SQUARE_INCH: AreaUnit = AreaUnit::new(
    "in2", "square inch", "in²",
    &["in^2", "inch squared", "inches squared", "square inches"],
    0.00064516,
);

pub static SQUARE_FOOT: AreaUnit = AreaUnit::new(
    "ft2", "square foot", "ft²",
    &["ft^2", "foot squared", "feet squared", "square feet"],
    0.092903,
);

pub static SQUARE_YARD: AreaUnit = AreaUnit::new(
    "yd2", "square yard", "yd²",
    &["yd^2", "yard squared", "yards squared", "square yards"],
    0.836127,
);

pub static SQUARE_MILE: AreaUnit = AreaUnit::new(
    "mi2", "square mile", "mi²",
    &["mi^2", "mile squared", "miles squared", "square miles"],
    2_589_988.11,
);

pub static ACRE: AreaUnit = AreaUnit::new("ac", "acre", "ac", &["acres"], 4046.86);

pub static AREA_UNITS: [&AreaUnit; 9] = [
    &SQUARE_CENTIMETRE,
    &SQUARE_METRE,
    &SQUARE_KILOMETRE,
    &HECTARE,
    &SQUARE_INCH,
    &SQUARE_FOOT,
    &SQUARE_YARD,
    &SQUARE_MILE,
    &ACRE,
];

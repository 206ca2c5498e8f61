//! Mass units (base: gram)

use crate::unit::MassUnit;

pub static MILLIGRAM: MassUnit = MassUnit::new(
    "mg", "milligram", "mg",
    &["milligrams", "mil", "mils"],
    0.001,
);

pub static DECIGRAM: MassUnit = MassUnit::new("dg", "decigram", "dg", &["decigrams"], 0.1);

pub static GRAM: MassUnit = MassUnit::new("g", "gram", "g", &["grams"], 1.0);

pub static KILOGRAM: MassUnit = MassUnit::new(
    "kg", "kilogram", "kg",
    &["kilograms", "kilo", "kilos"],
    1000.0,
);

pub static TONNE: MassUnit = MassUnit::new(
    "t", "tonne", "t",
    &["tonnes", "metric ton", "metric tons", "metric tonne", "metric tonnes"],
    1_000_000.0,
);

pub static POUND: MassUnit = MassUnit::new("lb", "pound", "lb", &["pounds", "lbs"], 453.592);

// "oz" on its own is taken to mean mass; fluid ounces are "floz" / "fl oz".
pub static OUNCE_MASS: MassUnit = MassUnit::new(
    "ozm", "ounce mass", "ozm",
    &["ounce", "ounces", "oz"],
    28.3495,
);

pub static STONE: MassUnit = MassUnit::new("st", "stone", "st", &["stones"], 6350.29);

pub static TON: MassUnit = MassUnit::new(
    "ton", "ton", "ton",
    &["tons", "short ton", "short tons"],
    907_185.0,
);

pub static MASS_UNITS: [&MassUnit; 9] = [
    &MILLIGRAM,
    &DECIGRAM,
    &GRAM,
    &KILOGRAM,
    &TONNE,
    &POUND,
    &OUNCE_MASS,
    &STONE,
    &TON,
];

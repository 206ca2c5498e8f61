//! Volume units (base: litre)
//!
//! Bushel and bale are nominal volumes. They only become meaningful as
//! yields when bridged to mass through a crop factor (see `crop`).

use crate::unit::VolumeUnit;

pub static MICROLITRE: VolumeUnit = VolumeUnit::new(
    "ul", "microlitre", "µl",
    &["microlitres", "microliter", "microliters", "mcL"],
    0.000_001,
);

pub static MILLILITRE: VolumeUnit = VolumeUnit::new(
    "ml", "millilitre", "ml",
    &["millilitres", "milliliter", "milliliters"],
    0.001,
);

pub static CENTILITRE: VolumeUnit = VolumeUnit::new(
    "cl", "centilitre", "cl",
    &["centilitres", "centiliter", "centiliters"],
    0.01,
);

pub static DECILITRE: VolumeUnit = VolumeUnit::new(
    "dl", "decilitre", "dl",
    &["decilitres", "deciliter", "deciliters"],
    0.1,
);

pub static LITRE: VolumeUnit = VolumeUnit::new(
    "l", "litre", "l",
    &["litres", "liter", "liters"],
    1.0,
);

pub static KILOLITRE: VolumeUnit = VolumeUnit::new(
    "kl", "kilolitre", "kl",
    &["kilolitres", "kiloliter", "kiloliters"],
    1000.0,
);

pub static DECALITRE: VolumeUnit = VolumeUnit::new(
    "dal", "decalitre", "dal",
    &["decalitres", "decaliter", "decaliters"],
    10.0,
);

pub static HECTOLITRE: VolumeUnit = VolumeUnit::new(
    "hl", "hectolitre", "hl",
    &[
        "hectolitres",
        "hectoliter",
        "hectoliters",
        "100l",
        "100 litres",
        "100 liters",
        "100 litre",
        "100 liter",
    ],
    100.0,
);

pub static MEGALITRE: VolumeUnit = VolumeUnit::new(
    "Ml", "megalitre", "Ml",
    &["megalitres", "megaliter", "megaliters"],
    1_000_000.0,
);

pub static CUBIC_CENTIMETRE: VolumeUnit = VolumeUnit::new(
    "cm3", "cubic centimetre", "cm³",
    &["cm^3", "cubic centimetres", "cubic centimeter", "cubic centimeters", "cc"],
    0.001,
);

pub static CUBIC_METRE: VolumeUnit = VolumeUnit::new(
    "m3", "cubic metre", "m³",
    &["m^3", "cubic metres", "cubic meter", "cubic meters"],
    1000.0,
);

pub static GALLON: VolumeUnit = VolumeUnit::new(
    "gal", "gallon", "gal",
    &["us gal", "us-gal", "us gallon", "us gallons", "gallons"],
    3.78541,
);

pub static FLUID_OUNCE: VolumeUnit = VolumeUnit::new(
    "floz", "fluid ounce", "fl oz",
    &["us fl oz", "us-fluid-ounce", "us fluid ounce", "us fluid ounces", "fluid ounces"],
    0.0295735,
);

pub static QUART: VolumeUnit = VolumeUnit::new(
    "qt", "quart", "qt",
    &["us qt", "us-quart", "us quarts", "quarts"],
    0.946353,
);

pub static PINT: VolumeUnit = VolumeUnit::new(
    "pt", "pint", "pt",
    &["us pt", "us-pint", "us pints", "pints"],
    0.473176,
);

pub static CUBIC_INCH: VolumeUnit = VolumeUnit::new(
    "in3", "cubic inch", "in³",
    &["in^3", "cubic inches"],
    0.0163871,
);

pub static CUBIC_FOOT: VolumeUnit = VolumeUnit::new(
    "ft3", "cubic foot", "ft³",
    &["ft^3", "cubic feet"],
    28.3168,
);

pub static CUBIC_YARD: VolumeUnit = VolumeUnit::new(
    "yd3", "cubic yard", "yd³",
    &["yd^3", "cubic yards"],
    764.555,
);

pub static ACRE_FOOT: VolumeUnit = VolumeUnit::new(
    "ac-ft", "acre foot", "ac-ft",
    &["acre feet", "ac ft"],
    1_233_480.0,
);

pub static ACRE_INCH: VolumeUnit = VolumeUnit::new(
    "ac-in", "acre inch", "ac-in",
    &["acre inches", "ac in"],
    102_790.153_128_96,
);

/// Grain bushel
pub static BUSHEL: VolumeUnit = VolumeUnit::new("bu", "bushel", "bu", &["bushels"], 35.2391);

/// Cotton bale
pub static BALE: VolumeUnit = VolumeUnit::new("bale", "bale", "bale", &["bales"], 480.0);

pub static VOLUME_UNITS: [&VolumeUnit; 22] = [
    &MICROLITRE,
    &MILLILITRE,
    &CENTILITRE,
    &DECILITRE,
    &LITRE,
    &KILOLITRE,
    &DECALITRE,
    &HECTOLITRE,
    &MEGALITRE,
    &CUBIC_CENTIMETRE,
    &CUBIC_METRE,
    &GALLON,
    &FLUID_OUNCE,
    &QUART,
    &PINT,
    &CUBIC_INCH,
    &CUBIC_FOOT,
    &CUBIC_YARD,
    &ACRE_FOOT,
    &ACRE_INCH,
    &BUSHEL,
    &BALE,
];

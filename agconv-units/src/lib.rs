//! agconv Units - Agronomic Unit Conversion
//!
//! Converts values between units of the same physical category and between
//! application rates expressed per unit area.
//!
//! Categories:
//! - Length (mm, m, km, in, ft, mi, etc.)
//! - Area (m², ha, ac, ft², etc.)
//! - Mass (g, kg, t, lb, ozm, etc.)
//! - Volume (ml, l, Ml, gal, bu, bale, etc.)
//! - Time (s, min, h, d, yr, etc.), resolved as labels only
//!
//! Rates are written in exponent form (`kg1ha-1`, `[m3]1[m2]-1`) or slash
//! form (`kg/ha`). Crop yields bridge mass rates and bushel or bale rates.

mod category;
mod unit;
mod units;
mod measurement;
mod compound;
mod ratio;
mod convert;
mod crop;
mod label;
mod dilution;

pub use category::{Area, Category, CategoryKind, Length, Mass, Time, Volume};
pub use unit::{
    classify, is_area_unit, is_length_unit, is_mass_unit, is_time_unit, is_unit, is_volume_unit,
    resolve, AreaUnit, LengthUnit, MassUnit, TimeUnit, UnitDescriptor, VolumeUnit,
};
pub use units::{area, length, mass, time, volume};
pub use measurement::Measurement;
pub use compound::{join_compound_unit, looks_compound, split_compound_unit, wrap_segment};
pub use ratio::{
    MassAreaRatioMeasurement, MassAreaRatioUnit, RateUnit, RatioUnit, VolumeAreaRatioMeasurement,
    VolumeAreaRatioUnit,
};
pub use convert::{conversion_family, convert_rate, value_from_to, UnitFamily};
pub use crop::{
    bales_to_grams, bushels_to_grams, crop_rate, grams_to_bales, grams_to_bushels, is_bale_crop,
    is_bushel_crop, mass_to_volume_rate, volume_to_mass_rate, Crop, YieldUnit, BALE_CROPS,
    BUSHEL_CROPS,
};
pub use label::{standard_label, unit_from_label, Unit};
pub use dilution::{ApplicationRate, DilutedProductApplication};

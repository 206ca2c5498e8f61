//! Physical categories
//!
//! Each category is a closed set of linearly related units sharing one base
//! unit (factor 1). Categories are zero-sized marker types so that a
//! `Measurement<Mass>` can never be handed a volume unit.

use std::fmt;
use serde::{Serialize, Deserialize};
use crate::unit::UnitDescriptor;
use crate::units::{area, length, mass, time, volume};

/// Runtime tag for a category, used in errors and listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Length,
    Area,
    Mass,
    Volume,
    Time,
}

impl CategoryKind {
    pub const ALL: [CategoryKind; 5] = [
        CategoryKind::Length,
        CategoryKind::Area,
        CategoryKind::Mass,
        CategoryKind::Volume,
        CategoryKind::Time,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CategoryKind::Length => "length",
            CategoryKind::Area => "area",
            CategoryKind::Mass => "mass",
            CategoryKind::Volume => "volume",
            CategoryKind::Time => "time",
        }
    }

    /// Symbol of the unit with factor 1
    pub fn base_symbol(&self) -> &'static str {
        match self {
            CategoryKind::Length => "m",
            CategoryKind::Area => "m2",
            CategoryKind::Mass => "g",
            CategoryKind::Volume => "l",
            CategoryKind::Time => "s",
        }
    }

    /// Parse a category name such as "area" (case-insensitive)
    pub fn from_name(s: &str) -> Option<CategoryKind> {
        CategoryKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A category of units with a static registry
pub trait Category: Sized + Copy + fmt::Debug + Send + Sync + 'static {
    const KIND: CategoryKind;

    /// Units in declaration order; resolution is first match wins.
    fn units() -> &'static [&'static UnitDescriptor<Self>];

    /// Case-sensitive carve-outs that must not match `unit` even when a
    /// case-insensitive comparison would.
    fn excludes(_unit: &UnitDescriptor<Self>, _label: &str) -> bool {
        false
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Length;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Area;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mass;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Volume;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Time;

impl Category for Length {
    const KIND: CategoryKind = CategoryKind::Length;

    fn units() -> &'static [&'static UnitDescriptor<Self>] {
        &length::LENGTH_UNITS
    }
}

impl Category for Area {
    const KIND: CategoryKind = CategoryKind::Area;

    fn units() -> &'static [&'static UnitDescriptor<Self>] {
        &area::AREA_UNITS
    }
}

impl Category for Mass {
    const KIND: CategoryKind = CategoryKind::Mass;

    fn units() -> &'static [&'static UnitDescriptor<Self>] {
        &mass::MASS_UNITS
    }
}

impl Category for Volume {
    const KIND: CategoryKind = CategoryKind::Volume;

    fn units() -> &'static [&'static UnitDescriptor<Self>] {
        &volume::VOLUME_UNITS
    }

    // "Ml" is megalitre. Case-folding would otherwise resolve it to millilitre,
    // which comes first in the registry.
    fn excludes(unit: &UnitDescriptor<Self>, label: &str) -> bool {
        unit.symbol() == volume::MILLILITRE.symbol() && label == volume::MEGALITRE.symbol()
    }
}

impl Category for Time {
    const KIND: CategoryKind = CategoryKind::Time;

    fn units() -> &'static [&'static UnitDescriptor<Self>] {
        &time::TIME_UNITS
    }
}

//! Unit descriptors and name resolution

use std::fmt;
use std::marker::PhantomData;
use serde::Serialize;
use agconv_core::ConvertError;
use crate::category::{Area, Category, CategoryKind, Length, Mass, Time, Volume};

/// An immutable registry entry: one named unit within a category
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(bound = "")]
pub struct UnitDescriptor<C: Category> {
    /// Canonical symbol (e.g., "ha", "kg", "Ml")
    symbol: &'static str,
    /// Full word form (e.g., "hectare")
    full: &'static str,
    /// Display form, may carry superscript digits (e.g., "m²")
    fancy: &'static str,
    /// Additional case-insensitive spellings
    aliases: &'static [&'static str],
    /// Multiplicative scale to the category's base unit
    factor: f64,
    #[serde(skip)]
    category: PhantomData<C>,
}

pub type LengthUnit = UnitDescriptor<Length>;
pub type AreaUnit = UnitDescriptor<Area>;
pub type MassUnit = UnitDescriptor<Mass>;
pub type VolumeUnit = UnitDescriptor<Volume>;
pub type TimeUnit = UnitDescriptor<Time>;

impl<C: Category> UnitDescriptor<C> {
    pub const fn new(
        symbol: &'static str,
        full: &'static str,
        fancy: &'static str,
        aliases: &'static [&'static str],
        factor: f64,
    ) -> Self {
        UnitDescriptor {
            symbol,
            full,
            fancy,
            aliases,
            factor,
            category: PhantomData,
        }
    }

    pub fn symbol(&self) -> &'static str {
        self.symbol
    }

    pub fn full(&self) -> &'static str {
        self.full
    }

    pub fn fancy(&self) -> &'static str {
        self.fancy
    }

    pub fn aliases(&self) -> &'static [&'static str] {
        self.aliases
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    pub fn kind(&self) -> CategoryKind {
        C::KIND
    }

    /// Every spelling this unit answers to: symbol, fancy form, full word, then aliases.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        [self.symbol, self.fancy, self.full]
            .into_iter()
            .chain(self.aliases.iter().copied())
    }

    /// True if `label` names this unit
    pub fn matches(&self, label: &str) -> bool {
        if C::excludes(self, label) {
            return false;
        }
        self.names().any(|name| eq_fold(name, label))
    }
}

impl<C: Category> fmt::Display for UnitDescriptor<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

/// Unicode-aware case-insensitive equality
fn eq_fold(a: &str, b: &str) -> bool {
    if a.len() == b.len() && a.eq_ignore_ascii_case(b) {
        return true;
    }
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Resolve a label to the first unit of category `C` that matches it.
pub fn resolve<C: Category>(label: &str) -> Result<&'static UnitDescriptor<C>, ConvertError> {
    match C::units().iter().find(|u| u.matches(label)) {
        Some(unit) => Ok(*unit),
        None => {
            tracing::trace!(category = C::KIND.name(), label, "no unit matched");
            Err(ConvertError::unresolved(C::KIND.name(), label))
        }
    }
}

/// True if `label` resolves in category `C`
pub fn is_unit<C: Category>(label: &str) -> bool {
    C::units().iter().any(|u| u.matches(label))
}

pub fn is_length_unit(label: &str) -> bool {
    is_unit::<Length>(label)
}

pub fn is_area_unit(label: &str) -> bool {
    is_unit::<Area>(label)
}

pub fn is_mass_unit(label: &str) -> bool {
    is_unit::<Mass>(label)
}

pub fn is_volume_unit(label: &str) -> bool {
    is_unit::<Volume>(label)
}

pub fn is_time_unit(label: &str) -> bool {
    is_unit::<Time>(label)
}

/// True if `label` resolves in the category named by `kind`
pub fn classify(kind: CategoryKind, label: &str) -> bool {
    match kind {
        CategoryKind::Length => is_length_unit(label),
        CategoryKind::Area => is_area_unit(label),
        CategoryKind::Mass => is_mass_unit(label),
        CategoryKind::Volume => is_volume_unit(label),
        CategoryKind::Time => is_time_unit(label),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{area, volume};

    #[test]
    fn test_matches_all_name_forms() {
        assert!(area::SQUARE_METRE.matches("m2"));
        assert!(area::SQUARE_METRE.matches("M2"));
        assert!(area::SQUARE_METRE.matches("m²"));
        assert!(area::SQUARE_METRE.matches("Square Metre"));
        assert!(area::SQUARE_METRE.matches("m^2"));
        assert!(!area::SQUARE_METRE.matches("m"));
    }

    #[test]
    fn test_resolve_first_match() {
        let unit = resolve::<Area>("hectares").unwrap();
        assert_eq!(unit.symbol(), "ha");
        assert_eq!(unit.factor(), 10000.0);
    }

    #[test]
    fn test_resolve_unknown() {
        let err = resolve::<Mass>("furlong").unwrap_err();
        assert_eq!(err, ConvertError::unresolved("mass", "furlong"));
    }

    #[test]
    fn test_millilitre_megalitre_carve_out() {
        assert_eq!(resolve::<Volume>("ml").unwrap().symbol(), "ml");
        assert_eq!(resolve::<Volume>("Ml").unwrap().symbol(), "Ml");
        assert_eq!(resolve::<Volume>("ML").unwrap().symbol(), "ml");
        assert_eq!(resolve::<Volume>("megalitres").unwrap().symbol(), "Ml");
        assert!(!volume::MILLILITRE.matches("Ml"));
    }

    #[test]
    fn test_classify() {
        assert!(classify(CategoryKind::Area, "ha"));
        assert!(classify(CategoryKind::Length, "m"));
        assert!(!classify(CategoryKind::Length, "m2"));
        assert!(classify(CategoryKind::Time, "m"));
        assert!(!classify(CategoryKind::Mass, "l"));
    }

    #[test]
    fn test_eq_fold_unicode() {
        assert!(eq_fold("µl", "µL"));
        assert!(eq_fold("M²", "m²"));
        assert!(!eq_fold("m²", "m2"));
    }
}

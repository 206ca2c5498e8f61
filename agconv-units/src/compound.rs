//! Compound unit strings - parse and build labels like "kg1ha-1" or "kg/ha"
//!
//! Two notations denote "numerator per denominator":
//! - Exponent form: `<NUM>1<DEN>-1`, e.g. `kg1ha-1`, `[m3]1[m2]-1`. Segments
//!   ending in an exponent digit or containing a space are usually wrapped in
//!   square brackets, but unwrapped segments are accepted too.
//! - Slash form: `<NUM>/<DEN>`, e.g. `kg/ha`, `l / ac`.
//!
//! Only value-per-area units are valid: the numerator must be a mass or volume
//! unit and the denominator an area unit.

use agconv_core::{ConvertError, Part};
use crate::category::{Area, Mass, Volume};
use crate::unit::{is_area_unit, is_mass_unit, is_volume_unit, resolve};

const EXPONENT_MARKER: &str = "-1";
const SLASH: char = '/';

/// Split a compound unit string into lower-cased numerator and denominator labels.
///
/// ```
/// use agconv_units::split_compound_unit;
///
/// let (n, d) = split_compound_unit("[m3]1[m2]-1").unwrap();
/// assert_eq!((n.as_str(), d.as_str()), ("m3", "m2"));
/// ```
pub fn split_compound_unit(label: &str) -> Result<(String, String), ConvertError> {
    let (numerator, denominator) = if label.contains(EXPONENT_MARKER) {
        split_exponent_form(label)?
    } else if label.contains(SLASH) {
        split_slash_form(label)?
    } else {
        return Err(ConvertError::malformed(
            label,
            "expected exponent form (eg kg1ha-1) or slash form (eg kg/ha)",
        ));
    };
    validate_segments(label, &numerator, &denominator)?;
    Ok((numerator, denominator))
}

fn split_exponent_form(label: &str) -> Result<(String, String), ConvertError> {
    let stripped = label.trim().trim_end_matches(|c| c == '-' || c == '1');
    let parts: Vec<&str> = stripped.split('1').collect();
    if parts.len() != 2 {
        return Err(ConvertError::malformed(
            label,
            format!("split into {} parts, should be 2", parts.len()),
        ));
    }
    Ok((clean_segment(parts[0], true), clean_segment(parts[1], true)))
}

fn split_slash_form(label: &str) -> Result<(String, String), ConvertError> {
    let parts: Vec<&str> = label.split(SLASH).collect();
    if parts.len() != 2 {
        return Err(ConvertError::malformed(
            label,
            format!("split into {} parts, should be 2", parts.len()),
        ));
    }
    Ok((clean_segment(parts[0], false), clean_segment(parts[1], false)))
}

fn clean_segment(segment: &str, unwrap_brackets: bool) -> String {
    let segment = segment.trim();
    let segment = if unwrap_brackets {
        segment.trim_start_matches('[').trim_end_matches(']').trim()
    } else {
        segment
    };
    segment.to_lowercase()
}

fn validate_segments(label: &str, numerator: &str, denominator: &str) -> Result<(), ConvertError> {
    if !is_mass_unit(numerator) && !is_volume_unit(numerator) {
        return Err(ConvertError::InvalidCompoundPart {
            label: label.to_string(),
            part: Part::Numerator,
            segment: numerator.to_string(),
            expected: "a mass or volume",
        });
    }
    if !is_area_unit(denominator) {
        return Err(ConvertError::InvalidCompoundPart {
            label: label.to_string(),
            part: Part::Denominator,
            segment: denominator.to_string(),
            expected: "an area",
        });
    }
    Ok(())
}

/// Join a numerator and denominator into a canonical exponent-form label.
///
/// Both labels are resolved first and their canonical symbols are used, so
/// `join_compound_unit("kilograms", "hectare")` gives `kg1ha-1`.
pub fn join_compound_unit(numerator: &str, denominator: &str) -> Result<String, ConvertError> {
    let label = format!("{}/{}", numerator, denominator);
    let n = match resolve::<Mass>(numerator) {
        Ok(unit) => unit.symbol(),
        Err(_) => match resolve::<Volume>(numerator) {
            Ok(unit) => unit.symbol(),
            Err(_) => {
                return Err(ConvertError::InvalidCompoundPart {
                    label,
                    part: Part::Numerator,
                    segment: numerator.to_string(),
                    expected: "a mass or volume",
                })
            }
        },
    };
    let d = resolve::<Area>(denominator)
        .map_err(|_| ConvertError::InvalidCompoundPart {
            label: label.clone(),
            part: Part::Denominator,
            segment: denominator.to_string(),
            expected: "an area",
        })?
        .symbol();
    Ok(exponent_form(n, d))
}

/// Write `numerator` per `denominator` in exponent form, bracketing where needed.
pub(crate) fn exponent_form(numerator: &str, denominator: &str) -> String {
    format!("{}1{}{}", wrap_segment(numerator), wrap_segment(denominator), EXPONENT_MARKER)
}

/// Wrap a segment in square brackets if it ends in an exponent digit or contains a space.
pub fn wrap_segment(segment: &str) -> String {
    if segment.ends_with('2') || segment.ends_with('3') || segment.contains(' ') {
        format!("[{}]", segment)
    } else {
        segment.to_string()
    }
}

/// True if the label looks like a compound unit. A hint only; nothing is validated.
pub fn looks_compound(label: &str) -> bool {
    label.contains(EXPONENT_MARKER) || label.contains(SLASH)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(label: &str) -> (String, String) {
        split_compound_unit(label).unwrap()
    }

    #[test]
    fn test_split_exponent_form() {
        assert_eq!(split("kg1ha-1"), ("kg".to_string(), "ha".to_string()));
        assert_eq!(split("[m3]1[m2]-1"), ("m3".to_string(), "m2".to_string()));
        assert_eq!(split("pt1[ft2]-1"), ("pt".to_string(), "ft2".to_string()));
        assert_eq!(split("[fl oz]1[ft2]-1"), ("fl oz".to_string(), "ft2".to_string()));
    }

    #[test]
    fn test_split_tolerates_whitespace() {
        assert_eq!(split("kg 1 ha -1"), ("kg".to_string(), "ha".to_string()));
        assert_eq!(split(" l / ac "), ("l".to_string(), "ac".to_string()));
        assert_eq!(split("[ m3 ] 1 ha-1"), ("m3".to_string(), "ha".to_string()));
        assert_eq!(split("kg1ha-1 "), ("kg".to_string(), "ha".to_string()));
        assert_eq!(split(" [m3]1[m2]-1\t"), ("m3".to_string(), "m2".to_string()));
        assert_eq!(split(" kg / ha "), ("kg".to_string(), "ha".to_string()));
    }

    #[test]
    fn test_split_unbracketed_exponent_segments() {
        assert_eq!(split("m3 1 ha-1"), ("m3".to_string(), "ha".to_string()));
        assert_eq!(split("kg1m2-1"), ("kg".to_string(), "m2".to_string()));
    }

    #[test]
    fn test_split_lowercases() {
        assert_eq!(split("KG/HA"), ("kg".to_string(), "ha".to_string()));
        assert_eq!(split("Lb1Ac-1"), ("lb".to_string(), "ac".to_string()));
    }

    #[test]
    fn test_split_slash_form() {
        assert_eq!(split("kg/ha"), ("kg".to_string(), "ha".to_string()));
        assert_eq!(split("bu/ac"), ("bu".to_string(), "ac".to_string()));
    }

    #[test]
    fn test_split_unknown_units() {
        let err = split_compound_unit("aa/bb").unwrap_err();
        assert!(matches!(
            err,
            ConvertError::InvalidCompoundPart { part: Part::Numerator, .. }
        ));

        let err = split_compound_unit("kg/bb").unwrap_err();
        assert!(matches!(
            err,
            ConvertError::InvalidCompoundPart { part: Part::Denominator, .. }
        ));
    }

    #[test]
    fn test_split_wrong_kinds() {
        // area numerator
        assert!(split_compound_unit("ha/kg").is_err());
        // length denominator
        assert!(split_compound_unit("kg/m").is_err());
    }

    #[test]
    fn test_split_malformed() {
        let err = split_compound_unit("kg").unwrap_err();
        assert!(matches!(err, ConvertError::MalformedCompound { .. }));

        let err = split_compound_unit("kg/ha/yr").unwrap_err();
        assert!(matches!(err, ConvertError::MalformedCompound { .. }));

        let err = split_compound_unit("kg1ha1m2-1").unwrap_err();
        assert!(matches!(err, ConvertError::MalformedCompound { .. }));

        let err = split_compound_unit("kgha-1").unwrap_err();
        assert!(matches!(err, ConvertError::MalformedCompound { .. }));
    }

    #[test]
    fn test_exponent_form_wins_over_slash() {
        // "-1" present, so exponent parsing is used and the slash stays in the segment
        assert!(split_compound_unit("kg/1ha-1").is_err());
    }

    #[test]
    fn test_join() {
        assert_eq!(join_compound_unit("kg", "ha").unwrap(), "kg1ha-1");
        assert_eq!(join_compound_unit("m3", "m2").unwrap(), "[m3]1[m2]-1");
        assert_eq!(join_compound_unit("kilograms", "hectares").unwrap(), "kg1ha-1");
        assert_eq!(join_compound_unit("bushels", "acre").unwrap(), "bu1ac-1");
        assert_eq!(join_compound_unit("pt", "square feet").unwrap(), "pt1[ft2]-1");
    }

    #[test]
    fn test_join_rejects_invalid() {
        let err = join_compound_unit("ha", "ha").unwrap_err();
        assert!(matches!(err, ConvertError::InvalidCompoundPart { part: Part::Numerator, .. }));
        let err = join_compound_unit("kg", "kg").unwrap_err();
        assert!(matches!(err, ConvertError::InvalidCompoundPart { part: Part::Denominator, .. }));
    }

    #[test]
    fn test_join_split_resolves_to_same_units() {
        for label in ["kg/ha", "l1ac-1", "[m3]1[m2]-1", "floz / ft2", "US gal/acres", "bale1ac-1"] {
            let (n, d) = split(label);
            let joined = join_compound_unit(&n, &d).unwrap();
            let (n2, d2) = split(&joined);
            assert_eq!(join_compound_unit(&n2, &d2).unwrap(), joined, "{}", label);
        }
    }

    #[test]
    fn test_wrap_segment() {
        assert_eq!(wrap_segment("m2"), "[m2]");
        assert_eq!(wrap_segment("cm3"), "[cm3]");
        assert_eq!(wrap_segment("fl oz"), "[fl oz]");
        assert_eq!(wrap_segment("kg"), "kg");
    }

    #[test]
    fn test_looks_compound() {
        assert!(looks_compound("kg1ha-1"));
        assert!(looks_compound("kg/ha"));
        assert!(looks_compound("aa/bb"));
        assert!(!looks_compound("kg"));
    }
}

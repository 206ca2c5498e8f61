//! Conversion errors
//!
//! Every failure is a per-call value. Nothing here is fatal and nothing is
//! retried: the same inputs always produce the same error.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const INVALID_COMPOUND_PART: &str = "INVALID_COMPOUND_PART";
    pub const MALFORMED_COMPOUND: &str = "MALFORMED_COMPOUND";
    pub const INCOMPATIBLE_UNITS: &str = "INCOMPATIBLE_UNITS";
    pub const NUMERATOR_MISMATCH: &str = "NUMERATOR_MISMATCH";
    pub const UNKNOWN_CROP: &str = "UNKNOWN_CROP";
    pub const INVALID_ARGUMENT: &str = "INVALID_ARGUMENT";
}

/// Which argument of a conversion an error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    From,
    To,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::From => write!(f, "fromUnit"),
            Side::To => write!(f, "toUnit"),
        }
    }
}

/// Which half of a compound unit an error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Part {
    Numerator,
    Denominator,
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Part::Numerator => write!(f, "numerator"),
            Part::Denominator => write!(f, "denominator"),
        }
    }
}

/// Error type for unit resolution and conversion
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    /// A label matched no unit in the registry it was looked up in.
    #[error("no {category} unit found for '{label}'")]
    UnresolvedUnit { category: &'static str, label: String },

    /// One half of a compound label resolved to the wrong kind of unit (or nothing).
    #[error("compound unit '{label}' has {part} '{segment}', expecting {expected} unit")]
    InvalidCompoundPart {
        label: String,
        part: Part,
        segment: String,
        expected: &'static str,
    },

    /// The label is not in exponent form or slash form, or splits into the wrong number of pieces.
    #[error("unrecognized compound unit syntax '{label}': {reason}")]
    MalformedCompound { label: String, reason: String },

    #[error("cannot convert from {from} to {to}: incompatible units")]
    IncompatibleUnits { from: String, to: String },

    /// A rate conversion whose numerators are mass on one side and volume on the other.
    #[error("cannot convert from {from_kind} ({from}) to {to_kind} ({to})")]
    NumeratorMismatch {
        from: String,
        to: String,
        from_kind: &'static str,
        to_kind: &'static str,
    },

    #[error("unknown crop: '{0}'")]
    UnknownCrop(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{side}: {source}")]
    InUnit {
        side: Side,
        #[source]
        source: Box<ConvertError>,
    },
}

impl ConvertError {
    pub fn unresolved(category: &'static str, label: impl Into<String>) -> Self {
        Self::UnresolvedUnit { category, label: label.into() }
    }

    pub fn malformed(label: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedCompound { label: label.into(), reason: reason.into() }
    }

    pub fn incompatible(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::IncompatibleUnits { from: from.into(), to: to.into() }
    }

    /// Attach the argument this error came from. Already-attributed errors are left alone.
    pub fn at(self, side: Side) -> Self {
        match self {
            Self::InUnit { .. } => self,
            other => Self::InUnit { side, source: Box::new(other) },
        }
    }

    /// The innermost error, with any argument attribution stripped.
    pub fn root(&self) -> &ConvertError {
        match self {
            Self::InUnit { source, .. } => source.root(),
            other => other,
        }
    }

    /// The argument the error was attributed to, if any
    pub fn side(&self) -> Option<Side> {
        match self {
            Self::InUnit { side, .. } => Some(*side),
            _ => None,
        }
    }

    /// Machine-readable code of the underlying failure
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnresolvedUnit { .. } => codes::UNKNOWN_UNIT,
            Self::InvalidCompoundPart { .. } => codes::INVALID_COMPOUND_PART,
            Self::MalformedCompound { .. } => codes::MALFORMED_COMPOUND,
            Self::IncompatibleUnits { .. } => codes::INCOMPATIBLE_UNITS,
            Self::NumeratorMismatch { .. } => codes::NUMERATOR_MISMATCH,
            Self::UnknownCrop(_) => codes::UNKNOWN_CROP,
            Self::InvalidArgument(_) => codes::INVALID_ARGUMENT,
            Self::InUnit { source, .. } => source.code(),
        }
    }
}

/// Serialisable view of a [`ConvertError`] for transport layers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    /// Argument the error was attributed to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<Side>,
}

impl ErrorReport {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
            side: None,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Builder: set side
    pub fn with_side(mut self, side: Side) -> Self {
        self.side = Some(side);
        self
    }
}

impl From<&ConvertError> for ErrorReport {
    fn from(err: &ConvertError) -> Self {
        let report = Self::new(err.code(), err.to_string());
        let report = match err.root() {
            ConvertError::UnresolvedUnit { .. } | ConvertError::InvalidCompoundPart { .. } => {
                report.with_suggestion("Use a registered symbol, full name or alias, e.g. kg, hectares, US gal")
            }
            ConvertError::MalformedCompound { .. } => {
                report.with_suggestion("Write rates in exponent form (kg1ha-1, [m3]1[m2]-1) or slash form (kg/ha)")
            }
            ConvertError::IncompatibleUnits { .. } => {
                report.with_suggestion("Both units must measure the same quantity")
            }
            ConvertError::NumeratorMismatch { .. } => {
                report.with_suggestion("Mass and volume rates can only be bridged through a crop yield conversion")
            }
            ConvertError::UnknownCrop(_) => {
                report.with_suggestion("Use a bushel crop such as wheat or corn, or the bale crop cotton")
            }
            _ => report,
        };
        match err.side() {
            Some(side) => report.with_side(side),
            None => report,
        }
    }
}

impl From<ConvertError> for ErrorReport {
    fn from(err: ConvertError) -> Self {
        Self::from(&err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_wraps_once() {
        let err = ConvertError::unresolved("area", "xx").at(Side::From).at(Side::To);
        assert_eq!(err.side(), Some(Side::From));
        assert_eq!(err.root(), &ConvertError::unresolved("area", "xx"));
    }

    #[test]
    fn test_code_reports_root_cause() {
        let err = ConvertError::UnknownCrop("kale".to_string()).at(Side::To);
        assert_eq!(err.code(), codes::UNKNOWN_CROP);
    }

    #[test]
    fn test_display_names_side() {
        let err = ConvertError::unresolved("mass", "kgs?").at(Side::From);
        assert_eq!(err.to_string(), "fromUnit: no mass unit found for 'kgs?'");
    }

    #[test]
    fn test_report_from_error() {
        let err = ConvertError::incompatible("m", "kg");
        let report = ErrorReport::from(&err);
        assert_eq!(report.code, codes::INCOMPATIBLE_UNITS);
        assert!(report.message.contains("m to kg"));
        assert!(report.suggestion.is_some());
        assert!(report.side.is_none());
    }
}

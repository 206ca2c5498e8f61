//! agconv Core - Fundamental types
//!
//! This crate provides the types shared by the conversion engine and the
//! transport layers that call into it:
//! - `ConvertError`: the error taxonomy of every fallible conversion step
//! - `ErrorReport`: a serialisable view of an error for responses
//! - `round_to`: decimal rounding for presenting results

mod error;
mod number;

pub use error::{ConvertError, ErrorReport, Part, Side, codes};
pub use number::{approx_eq, round_to};

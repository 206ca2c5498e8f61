//! Unit definitions, one registry per category
//!
//! Tables are scanned linearly in declaration order and the first match wins,
//! so no two units in a category may share a spelling (see the alias
//! uniqueness tests below).

pub mod area;
pub mod length;
pub mod mass;
pub mod time;
pub mod volume;

//! Text normalization for extracted transcript lines.
//!
//! Registrar PDFs ship text with diacritics, glued tokens left over from
//! positional reconstruction, bullet markers, and honorific prefixes on
//! instructor names. The helpers in this module turn those raw captures
//! into stable, comparable field values. All cleaning functions are
//! idempotent: applying one twice yields the same string as applying it
//! once.

pub mod normalize;

pub use normalize::{
    clean_course_name, clean_instructor_name, collapse_whitespace, fold_ascii_upper, parse_decimal,
};

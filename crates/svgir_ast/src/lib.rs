//! Trait representation for the element trees that are converted.
//!
//! Conversion only needs to read elements, so any XML tree can be converted by implementing
//! [`Element`](element::Element). An implementation for `roxmltree` is included with the
//! `roxmltree` feature.

pub mod element;
pub mod implementations;

#[cfg(feature = "roxmltree")]
pub mod parse;

//! Collections of data and types for resolving SVG attributes
//!
//! Raw attribute text is resolved against a [`Viewport`](viewport::Viewport) into absolute
//! user-space numbers, colors, and opacities.

pub mod color;
pub mod element;
pub mod error;
pub mod filter_effect;
pub mod length;
pub mod viewport;

//! Implementations of [`Element`](crate::element::Element) for XML trees
#[cfg(feature = "roxmltree")]
pub mod roxmltree;

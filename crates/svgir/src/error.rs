//! Error types.

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
/// Errors which may occur while converting a document
pub enum Error {
    /// The `d` attribute of a path couldn't be parsed
    #[error("invalid path data: {0}")]
    Path(#[from] svgir_path::parser::Error),
    /// An attribute couldn't be resolved to a length, color, or number
    #[error(transparent)]
    Attribute(#[from] svgir_collections::error::Error),
    /// A URL or `url(#id)` reference couldn't be resolved
    #[error("could not resolve the reference `{0}`")]
    UnresolvedReference(String),
    /// An element is missing an attribute it can't be drawn without
    #[error("`<{element}>` is missing the required `{attribute}` attribute")]
    MissingRequiredGeometry {
        /// The local-name of the element
        element: &'static str,
        /// The missing attribute
        attribute: &'static str,
    },
    /// The root element isn't `<svg>`
    #[error("expected the root element to be `<svg>` but found `<{0}>`")]
    NotSvg(String),
}

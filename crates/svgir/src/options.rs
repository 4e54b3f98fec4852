//! Configuration for converting a document
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use url::Url;

use svgir_collections::viewport::DEFAULT_FONT_SIZE;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
/// Options for converting a document.
///
/// # Strictness
///
/// Attributes that can't be resolved are always replaced with their default. Path data that
/// can't be parsed makes the element unusable, so by default the element is skipped with a
/// warning. With `strict` the whole conversion fails instead.
pub struct Options {
    /// Whether invalid path data fails the conversion
    pub strict: bool,
    /// The URL of the document, which relative `href`s are resolved against
    pub base_url: Option<Url>,
    /// The font size used when the root element doesn't declare one
    pub default_font_size: f64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            strict: false,
            base_url: None,
            default_font_size: DEFAULT_FONT_SIZE,
        }
    }
}

#[test]
#[cfg(feature = "serde")]
fn options_serialization() -> Result<(), &'static str> {
    let options: Options =
        serde_json::from_str(r#"{ "strict": true, "baseUrl": "https://example.com/a/b.svg" }"#)
            .map_err(|_| "Failed from serde")?;
    assert!(options.strict);
    assert_eq!(
        options.base_url.as_ref().map(Url::as_str),
        Some("https://example.com/a/b.svg")
    );
    assert_eq!(options.default_font_size, DEFAULT_FONT_SIZE);
    Ok(())
}

//! Linked resources, such as the images of `<image>` and `<feImage>`
//!
//! Nothing is fetched while converting. Bytes come from `data:` URLs or from a
//! [`ResourceProvider`] filled by the caller beforehand.
use std::{collections::HashMap, sync::Arc};

use base64::Engine;
use url::Url;

use crate::error::Error;

/// Provides the bytes of pre-fetched resources
pub trait ResourceProvider {
    /// Returns the bytes for the URL, if they're available
    fn fetch(&self, url: &Url) -> Option<Arc<[u8]>>;
}

impl ResourceProvider for () {
    fn fetch(&self, _url: &Url) -> Option<Arc<[u8]>> {
        None
    }
}

impl<S: std::hash::BuildHasher> ResourceProvider for HashMap<Url, Arc<[u8]>, S> {
    fn fetch(&self, url: &Url) -> Option<Arc<[u8]>> {
        self.get(url).cloned()
    }
}

#[derive(Debug, Clone, PartialEq)]
/// A resolved reference to an image
pub struct ImageSource {
    /// The absolute URL of the image
    pub url: Url,
    /// The encoded image, when it's embedded or was provided
    pub data: Option<Arc<[u8]>>,
}

/// Resolves an `href` as an absolute URL, or else relative to the document's URL
///
/// # Errors
/// If the `href` is neither absolute nor joinable to the base
pub fn resolve_href(href: &str, base_url: Option<&Url>) -> Result<Url, Error> {
    let unresolved = || Error::UnresolvedReference(href.to_string());
    match Url::parse(href) {
        Ok(url) => Ok(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => base_url
            .ok_or_else(unresolved)?
            .join(href)
            .map_err(|_| unresolved()),
        Err(_) => Err(unresolved()),
    }
}

/// Resolves an `href` and loads it's bytes from the URL or the provider.
///
/// # Errors
/// If the `href` can't be resolved
pub fn load_image(
    href: &str,
    base_url: Option<&Url>,
    resources: &dyn ResourceProvider,
) -> Result<ImageSource, Error> {
    let url = resolve_href(href, base_url)?;
    let data = if url.scheme() == "data" {
        decode_data_url(&url)
    } else {
        resources.fetch(&url)
    };
    if data.is_none() {
        log::debug!("no data available for image `{url}`");
    }
    Ok(ImageSource { url, data })
}

/// Decodes the payload of a `data:[<mediatype>][;base64],<data>` URL.
///
/// The payload is everything after the first `,`, including any `?` or `#`.
pub fn decode_data_url(url: &Url) -> Option<Arc<[u8]>> {
    let Some(content) = url.as_str().strip_prefix("data:") else {
        log::warn!("`{url}` is not a data URL");
        return None;
    };
    let Some((metadata, data)) = content.split_once(',') else {
        log::warn!("invalid data URL, missing `,`");
        return None;
    };
    let data = match urlencoding::decode_binary(data.as_bytes()) {
        std::borrow::Cow::Borrowed(data) => data.to_vec(),
        std::borrow::Cow::Owned(data) => data,
    };

    if metadata.ends_with(";base64") {
        let data: Vec<u8> = data
            .into_iter()
            .filter(|byte| !byte.is_ascii_whitespace())
            .collect();
        base64::engine::general_purpose::STANDARD
            .decode(data)
            .map(Into::into)
            .map_err(|error| log::warn!("invalid base64 in data URL: {error}"))
            .ok()
    } else {
        Some(data.into())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn href() {
        let base = Url::parse("https://example.com/images/doc.svg").ok();
        assert_eq!(
            resolve_href("https://other.org/a.png", base.as_ref()).map(String::from),
            Ok("https://other.org/a.png".to_string())
        );
        assert_eq!(
            resolve_href("a.png", base.as_ref()).map(String::from),
            Ok("https://example.com/images/a.png".to_string())
        );
        assert_eq!(
            resolve_href("../a.png", base.as_ref()).map(String::from),
            Ok("https://example.com/a.png".to_string())
        );
        assert_eq!(
            resolve_href("a.png", None),
            Err(Error::UnresolvedReference("a.png".to_string()))
        );
    }

    #[test]
    fn data_url() {
        let url = Url::parse("data:text/plain;base64,SGVsbG8=").unwrap();
        assert_eq!(decode_data_url(&url).as_deref(), Some(&b"Hello"[..]));

        let url = Url::parse("data:,Hello%20world").unwrap();
        assert_eq!(decode_data_url(&url).as_deref(), Some(&b"Hello world"[..]));

        let url = Url::parse("data:image/png;base64,!!!").unwrap();
        assert_eq!(decode_data_url(&url), None);

        let url = Url::parse("data:,a?b#c").unwrap();
        assert_eq!(decode_data_url(&url).as_deref(), Some(&b"a?b#c"[..]));

        let url = Url::parse("https://example.com/a,b").unwrap();
        assert_eq!(decode_data_url(&url), None);
    }

    #[test]
    fn provider() {
        let url = Url::parse("https://example.com/a.png").unwrap();
        let bytes: Arc<[u8]> = Arc::from(&b"png"[..]);
        let resources = HashMap::from([(url.clone(), bytes.clone())]);

        let source = load_image("a.png", Some(&url), &resources).unwrap();
        assert_eq!(source.url, url);
        assert_eq!(source.data, Some(bytes));

        let source = load_image("b.png", Some(&url), &()).unwrap();
        assert_eq!(source.data, None);
    }
}

//! Parsing documents with roxmltree

/// Parse an xml document using roxmltree as the parser.
///
/// # Errors
///
/// If the string cannot be parsed
pub fn parse(source: &str) -> Result<roxmltree::Document<'_>, roxmltree::Error> {
    let document = roxmltree::Document::parse_with_options(
        source,
        roxmltree::ParsingOptions {
            // WARN: DOS risk
            allow_dtd: true,
            ..roxmltree::ParsingOptions::default()
        },
    );
    if let Err(error) = &document {
        log::debug!("failed to parse document: {error}");
    }
    document
}

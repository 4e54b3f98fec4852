//! Error types that may occur while parsing an SVG value

/// Parse errors that can be encountered by parsing
#[derive(Debug, Clone, PartialEq)]
pub enum Error<'input> {
    /// The end of an input was reached before parsing finished
    EndOfInput,
    /// No valid number starts at the given byte offset
    MalformedNumber {
        /// Byte offset where a number was expected
        offset: usize,
    },
    /// A valid value within an invalid range was parsed.
    InvalidRange,
    /// Parsing is done but there is trailing input.
    ExpectedDone,
    /// A specific string was unmatched
    ExpectedString {
        /// The expected string
        expected: &'static str,
        /// The received string
        received: &'input str,
    },
    /// An XML name was expected
    ExpectedIdent {
        /// What was expected
        expected: &'static str,
        /// The received string
        received: &'input str,
    },
    /// A specific character was unmatched
    ExpectedChar {
        /// The expected character
        expected: char,
        /// The received character
        received: char,
    },
    #[cfg(feature = "lightningcss")]
    /// An invalid lightningcss value was parsed
    Lightningcss(
        cssparser_lightningcss::ParseError<'input, lightningcss::error::ParserError<'input>>,
    ),
}

impl std::fmt::Display for Error<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fmt = match self {
            Self::EndOfInput => "Unexpected end of input while parsing",
            Self::MalformedNumber { offset } => {
                return f.write_fmt(format_args!("Expected a number at offset {offset}"))
            }
            Self::InvalidRange => "Value out of range",
            Self::ExpectedDone => "Unexpected trailing content after parsing",
            Self::ExpectedString { expected, received } => {
                return f.write_fmt(format_args!(
                    r#"Expected "{expected}" but received "{received}" instead"#
                ))
            }
            Self::ExpectedIdent { expected, received } => {
                return f.write_fmt(format_args!(
                    "Expected {expected} but received `{received}` instead"
                ))
            }
            Self::ExpectedChar { expected, received } => {
                return f.write_fmt(format_args!(
                    "Expected '{expected}' but received '{received}' instead"
                ))
            }
            #[cfg(feature = "lightningcss")]
            Self::Lightningcss(e) => return e.fmt(f),
        };
        f.write_str(fmt)
    }
}
impl std::error::Error for Error<'_> {}

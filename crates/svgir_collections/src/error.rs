//! Errors for attribute values that can't be resolved

#[derive(Debug, Clone, PartialEq, Eq)]
/// An attribute value that couldn't be resolved
pub enum Error {
    /// The value isn't a number, or isn't a number on it's own
    MalformedNumber(String),
    /// The value isn't a length, percentage, or number
    InvalidLength(String),
    /// The value isn't a color that can be resolved to sRGB
    InvalidColor(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedNumber(value) => {
                f.write_fmt(format_args!("Expected a number but received `{value}`"))
            }
            Self::InvalidLength(value) => {
                f.write_fmt(format_args!("Expected a length but received `{value}`"))
            }
            Self::InvalidColor(value) => {
                f.write_fmt(format_args!("Expected a color but received `{value}`"))
            }
        }
    }
}

impl std::error::Error for Error {}

//! Primitives for parsing SVG attribute values
//!
//! The [`Parser`] is a cursor over an attribute's text. Values implement [`Parse`] to read
//! themselves from a cursor, and [`number::lex_number`] is the lexer for SVG's permissive
//! number syntax shared by path data, point lists and lengths.

use error::Error;
mod types;

pub mod error;
pub mod number;

/// A parser containing state for the active parsing of an SVG value
#[derive(Debug, Clone)]
pub struct Parser<'input> {
    input: &'input str,
    cursor: usize,
}

impl<'input> Parser<'input> {
    /// Create a new parser with the input
    pub fn new(input: &'input str) -> Self {
        Self { input, cursor: 0 }
    }

    /// Returns the current position in the input being read
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Try reading the next value
    ///
    /// # Errors
    ///
    /// If the input has ended
    pub fn read(&mut self) -> Result<char, Error<'input>> {
        let current = self.current()?;
        self.cursor += current.len_utf8();
        Ok(current)
    }

    /// Go to the next character without reading
    pub fn advance(&mut self) {
        if let Ok(current) = self.current() {
            self.cursor += current.len_utf8();
        }
    }

    /// Skip remaining input
    pub fn done(&mut self) {
        self.cursor = self.input.len();
    }

    /// Get remaining slice of input
    pub fn slice(&self) -> &'input str {
        &self.input[self.cursor..]
    }

    /// Get remaining slice of input and advance to the end of the input
    pub fn take_slice(&mut self) -> &'input str {
        let slice = self.slice();
        self.done();
        slice
    }

    /// Get slice from start position to current position
    pub fn slice_from(&self, start: usize) -> &'input str {
        let end = self.cursor.min(self.input.len());
        &self.input[start..end]
    }

    /// Get the length of the remaining input
    pub fn len(&self) -> usize {
        self.input.len() - self.cursor
    }

    /// Returns whether the remaining input is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Gets the current character of the input
    ///
    /// # Errors
    ///
    /// If reached the end of input
    pub fn current(&self) -> Result<char, Error<'input>> {
        self.slice().chars().next().ok_or(Error::EndOfInput)
    }

    /// Move the cursor forward while the characters match the given predicate
    ///
    /// Returns the skipped content as a slice
    pub fn take_matches<F: FnMut(char) -> bool>(&mut self, f: F) -> &'input str {
        let cursor = self.cursor();
        self.skip_matches(f);
        self.slice_from(cursor)
    }

    /// Moves the cursor forward the number of matching characters
    pub fn skip_matches<F: FnMut(char) -> bool>(&mut self, pat: F) {
        let trimmed = self.slice().trim_start_matches(pat).len();
        self.cursor += self.len() - trimmed;
    }

    /// Moves the cursor forward the number of whitespace characters
    pub fn skip_whitespace(&mut self) {
        self.skip_matches(char::is_whitespace);
    }

    /// Skips an SVG `comma-wsp` separator: whitespace with at most one comma.
    ///
    /// Returns whether a comma was skipped
    pub fn skip_comma_whitespace(&mut self) -> bool {
        self.skip_whitespace();
        let had_comma = matches!(self.current(), Ok(','));
        if had_comma {
            self.advance();
            self.skip_whitespace();
        }
        had_comma
    }

    /// Read a number starting exactly at the cursor
    ///
    /// # Errors
    ///
    /// If no valid number starts at the cursor
    pub fn expect_number(&mut self) -> Result<f64, Error<'input>> {
        let (number, end) = number::lex_number(self.input, self.cursor)?;
        self.cursor = end;
        Ok(number)
    }

    /// Asserts the end of the input was reached
    ///
    /// # Errors
    ///
    /// When the cursor is prior to the end of the string
    pub fn expect_done(&self) -> Result<(), Error<'input>> {
        if self.cursor < self.input.len() {
            Err(Error::ExpectedDone)
        } else {
            Ok(())
        }
    }

    /// Read and assert the next character matches the expected character
    ///
    /// # Errors
    ///
    /// If the end of the input is reached, or the character does not match
    pub fn expect_char(&mut self, expected: char) -> Result<(), Error<'input>> {
        let received = self.read()?;
        if received == expected {
            Ok(())
        } else {
            Err(Error::ExpectedChar { expected, received })
        }
    }

    /// Read and assert a set of characters matches the given string, ignoring ascii case
    ///
    /// # Errors
    ///
    /// If the next set of characters does not match the given string
    pub fn expect_str(&mut self, expected: &'static str) -> Result<(), Error<'input>> {
        let received = self.slice().get(..expected.len()).unwrap_or(self.slice());
        if received.eq_ignore_ascii_case(expected) {
            self.cursor += expected.len();
            Ok(())
        } else {
            Err(Error::ExpectedString { expected, received })
        }
    }

    /// Read an XML name, such as a filter result or an element id
    ///
    /// # Errors
    ///
    /// If the next character cannot start a name
    pub fn expect_ident(&mut self) -> Result<&'input str, Error<'input>> {
        let cursor = self.cursor;
        let name_start_char = self.read()?;
        if !is_name_start_char(name_start_char) {
            return Err(Error::ExpectedIdent {
                expected: "valid ident starting character",
                received: self.slice_from(cursor),
            });
        }
        self.skip_matches(is_name_char);
        Ok(self.slice_from(cursor))
    }
}
fn is_name_start_char(char: char) -> bool {
    char.is_ascii_alphabetic()
        || matches!(char, ':' | '_' | '\u{C0}'..='\u{D6}' | '\u{D8}'..='\u{F6}' | '\u{F8}'..='\u{2FF}' | '\u{370}'..='\u{37D}' | '\u{37F}'..='\u{1FFF}' | '\u{200C}'..='\u{200D}' | '\u{2070}'..='\u{218F}' | '\u{2C00}'..='\u{2FEF}' | '\u{3001}'..='\u{D7FF}' | '\u{F900}'..='\u{FDCF}' | '\u{FDF0}'..='\u{FFFD}' | '\u{10000}'..='\u{EFFFF}')
}
fn is_name_char(char: char) -> bool {
    is_name_start_char(char)
        || char.is_ascii_digit()
        || matches!(char, '-' | '.' | '\u{B7}' | '\u{0300}'..='\u{036F}' | '\u{203F}'..='\u{2040}')
}

/// A trait for things that can be parsed from CSS or attribute values.
pub trait Parse<'input>: Sized {
    /// Parse this value using an existing parser.
    ///
    /// # Errors
    /// If parsing fails
    fn parse(input: &mut Parser<'input>) -> Result<Self, Error<'input>>;

    /// Parse a value from a string
    ///
    /// # Errors
    /// If parsing fails
    fn parse_string(input: &'input str) -> Result<Self, Error<'input>> {
        let parser = &mut Parser::new(input);
        parser.skip_whitespace();
        let result = Self::parse(parser)?;
        parser.skip_whitespace();
        parser.expect_done()?;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn comma_whitespace() {
        let mut parser = Parser::new(" , 1");
        assert!(parser.skip_comma_whitespace());
        assert_eq!(parser.slice(), "1");

        let mut parser = Parser::new(",,1");
        assert!(parser.skip_comma_whitespace());
        assert_eq!(parser.slice(), ",1");

        let mut parser = Parser::new("  1");
        assert!(!parser.skip_comma_whitespace());
        assert_eq!(parser.cursor(), 2);
    }

    #[test]
    fn multibyte_advance() {
        let mut parser = Parser::new("\u{2212}1");
        assert_eq!(parser.read(), Ok('\u{2212}'));
        assert_eq!(parser.expect_number(), Ok(1.0));
        assert!(parser.is_empty());
    }

    #[test]
    fn ident() {
        let mut parser = Parser::new("blur-1 rest");
        assert_eq!(parser.expect_ident(), Ok("blur-1"));
        assert_eq!(parser.slice(), " rest");

        let mut parser = Parser::new("1blur");
        assert_eq!(
            parser.expect_ident(),
            Err(Error::ExpectedIdent {
                expected: "valid ident starting character",
                received: "1"
            })
        );
    }
}

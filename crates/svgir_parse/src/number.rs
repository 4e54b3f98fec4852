//! Lexing and parsing for number values
//!
//! SVG allows numbers to be packed together without separators whenever the boundary is
//! unambiguous, so `M1.5.3-2` holds the numbers `1.5`, `.3` and `-2`. A number ends at the first
//! character that can't extend it.
use crate::{error::Error, Parse, Parser};

/// The Unicode minus sign, occasionally emitted by design tools in place of `-`
pub const UNICODE_MINUS: char = '\u{2212}';

/// Reads the number starting exactly at `offset`, returning it with the offset just past it.
///
/// The grammar is an optional sign, digits with an optional fraction (at least one digit
/// overall), then an optional exponent. An `e` or `E` that isn't followed by exponent digits is
/// left unread, so `1em` yields `1` and leaves the unit.
///
/// # Errors
/// If no number starts at `offset`, or the number isn't finite
pub fn lex_number(text: &str, offset: usize) -> Result<(f64, usize), Error<'_>> {
    let bytes = text.as_bytes();
    let digits_from = |mut index: usize| {
        while bytes.get(index).is_some_and(u8::is_ascii_digit) {
            index += 1;
        }
        index
    };

    let mut end = offset;
    if matches!(bytes.get(end), Some(b'+' | b'-')) {
        end += 1;
    }
    let integer_end = digits_from(end);
    let mut digits = integer_end - end;
    end = integer_end;

    if bytes.get(end) == Some(&b'.') {
        let fraction_end = digits_from(end + 1);
        let fraction_digits = fraction_end - (end + 1);
        if digits > 0 || fraction_digits > 0 {
            digits += fraction_digits;
            end = fraction_end;
        }
    }
    if digits == 0 {
        return Err(Error::MalformedNumber { offset });
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent = end + 1;
        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        let exponent_end = digits_from(exponent);
        if exponent_end > exponent {
            end = exponent_end;
        }
    }

    let number: f64 = text[offset..end]
        .parse()
        .map_err(|_| Error::MalformedNumber { offset })?;
    if number.is_finite() {
        Ok((number, end))
    } else {
        Err(Error::MalformedNumber { offset })
    }
}

/// Returns whether the character may begin a number
pub fn is_number_start(char: char) -> bool {
    char.is_ascii_digit() || matches!(char, '+' | '-' | '.')
}

impl<'input> Parse<'input> for f64 {
    fn parse(input: &mut Parser<'input>) -> Result<Self, Error<'input>> {
        input.skip_whitespace();
        input.expect_number()
    }
}

#[test]
fn float() {
    assert_eq!(f64::parse_string("0"), Ok(0.0));
    assert_eq!(f64::parse_string("1"), Ok(1.0));
    assert_eq!(f64::parse_string("-1"), Ok(-1.0));
    assert_eq!(f64::parse_string(" -1 "), Ok(-1.0));
    assert_eq!(f64::parse_string(".4"), Ok(0.4));
    assert_eq!(f64::parse_string("-.4"), Ok(-0.4));
    assert_eq!(f64::parse_string(".0000000000008"), Ok(0.000_000_000_000_8));
    assert_eq!(f64::parse_string("123456.123456"), Ok(123_456.123_456));
    assert_eq!(f64::parse_string("+10"), Ok(10.0));
    assert_eq!(f64::parse_string("1e2"), Ok(100.0));
    assert_eq!(f64::parse_string("1e+2"), Ok(100.0));
    assert_eq!(f64::parse_string("1E2"), Ok(100.0));
    assert_eq!(f64::parse_string("1e-2"), Ok(0.01));
    assert_eq!(f64::parse_string("0."), Ok(0.0));
    assert_eq!(f64::parse_string("1.3e-2"), Ok(0.013));

    assert_eq!(f64::parse_string("-.4text"), Err(Error::ExpectedDone));
    assert_eq!(f64::parse_string("-.01 4"), Err(Error::ExpectedDone));
    assert_eq!(f64::parse_string("1ex"), Err(Error::ExpectedDone));
    assert_eq!(f64::parse_string("1em"), Err(Error::ExpectedDone));
    assert_eq!(
        f64::parse_string("q"),
        Err(Error::MalformedNumber { offset: 0 })
    );
    assert_eq!(
        f64::parse_string(""),
        Err(Error::MalformedNumber { offset: 0 })
    );
    assert_eq!(
        f64::parse_string("-"),
        Err(Error::MalformedNumber { offset: 0 })
    );
    assert_eq!(
        f64::parse_string("."),
        Err(Error::MalformedNumber { offset: 0 })
    );
    assert_eq!(
        f64::parse_string("99999999e99999999"),
        Err(Error::MalformedNumber { offset: 0 })
    );
}

#[test]
fn packed_numbers() {
    assert_eq!(lex_number("1.5.3", 0), Ok((1.5, 3)));
    assert_eq!(lex_number("1.5.3", 3), Ok((0.3, 5)));
    assert_eq!(lex_number("0010", 0), Ok((10.0, 4)));
    assert_eq!(lex_number("10-20", 0), Ok((10.0, 2)));
    assert_eq!(lex_number("10-20", 2), Ok((-20.0, 5)));
    assert_eq!(lex_number("-5.176e-7.1", 0), Ok((-5.176e-7, 9)));
    assert_eq!(lex_number("2e", 0), Ok((2.0, 1)));
    assert_eq!(lex_number("2e-", 0), Ok((2.0, 1)));
    assert_eq!(lex_number("x2", 1), Ok((2.0, 2)));
    assert_eq!(lex_number("+-1", 0), Err(Error::MalformedNumber { offset: 0 }));
    assert_eq!(lex_number("1", 5), Err(Error::MalformedNumber { offset: 5 }));
}

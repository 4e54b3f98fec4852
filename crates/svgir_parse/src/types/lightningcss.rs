//! Parsing for lightningcss values
use lightningcss::values::color::CssColor;

use crate::{error::Error, Parse, Parser};

macro_rules! impl_type {
    ($ty:ty) => {
        impl<'input> Parse<'input> for $ty {
            fn parse(input: &mut Parser<'input>) -> Result<Self, Error<'input>> {
                <Self as lightningcss::traits::Parse>::parse_string(input.take_slice())
                    .map_err(Error::Lightningcss)
            }
        }
    };
}

impl_type!(CssColor);

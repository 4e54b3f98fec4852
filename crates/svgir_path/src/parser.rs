//! The state machine for reading path data.
//!
//! [`Parser`] is an iterator of commands. Its state is only the command being repeated and
//! whether operands were just read, so a fresh parser over the same text always yields the same
//! commands.
use svgir_parse::number::is_number_start;

use crate::command::{Command, Data, ID};

#[derive(Debug, Clone, PartialEq, Eq)]
/// An error that can occur while parsing path data
pub enum Error {
    /// Operands were given before any command letter, or directly after a close-path
    NoCommand {
        /// Byte offset of the operand
        offset: usize,
    },
    /// A command other than move-to was given first
    InvalidFirstCommand,
    /// A letter or character that isn't a path command was found
    UnknownPathCommand {
        /// The character found
        command: char,
        /// Byte offset of the character
        offset: usize,
    },
    /// The input ended, or another command began, before all operands were read
    IncompletePathCommand {
        /// The letter of the command missing operands
        command: char,
        /// Byte offset where the missing operand was expected
        offset: usize,
    },
    /// A comma was found where no operand may follow
    UnexpectedComma {
        /// Byte offset of the comma
        offset: usize,
    },
    /// An arc flag wasn't `0` or `1`
    InvalidArcFlag {
        /// Byte offset of the flag
        offset: usize,
    },
    /// An operand wasn't a valid number
    MalformedNumber {
        /// Byte offset of the operand
        offset: usize,
    },
}

#[derive(Debug, Clone)]
/// Reads path data into commands, one command instance per item.
///
/// Iteration stops after the first error.
pub struct Parser<'input> {
    cursor: svgir_parse::Parser<'input>,
    current: Option<(ID, bool)>,
    after_operands: bool,
}

impl<'input> Parser<'input> {
    /// Creates a parser over the path data
    pub fn new(definition: &'input str) -> Self {
        Self {
            cursor: svgir_parse::Parser::new(definition),
            current: None,
            after_operands: false,
        }
    }

    fn next_command(&mut self) -> Result<Option<Command>, Error> {
        self.cursor.skip_whitespace();
        let offset = self.cursor.cursor();
        let Ok(mut char) = self.cursor.current() else {
            return Ok(None);
        };

        if char == ',' {
            if !self.after_operands {
                return Err(Error::UnexpectedComma { offset });
            }
            self.cursor.skip_comma_whitespace();
            char = match self.cursor.current() {
                Ok(char) if is_number_start(char) => char,
                _ => return Err(Error::UnexpectedComma { offset }),
            };
        }

        let (id, relative) = if char.is_ascii_alphabetic() {
            let id = ID::try_from(char)
                .map_err(|()| Error::UnknownPathCommand {
                    command: char,
                    offset,
                })?;
            if self.current.is_none() && id != ID::MoveTo {
                return Err(Error::InvalidFirstCommand);
            }
            self.cursor.advance();
            (id, char.is_ascii_lowercase())
        } else if is_number_start(char) {
            match self.current {
                None | Some((ID::ClosePath, _)) => {
                    return Err(Error::NoCommand {
                        offset: self.cursor.cursor(),
                    })
                }
                Some((id, relative)) => (id.next_implicit(), relative),
            }
        } else {
            return Err(Error::UnknownPathCommand {
                command: char,
                offset,
            });
        };

        let mut args = [0.0; 7];
        for (index, arg) in args.iter_mut().enumerate().take(id.args()) {
            *arg = self.operand(id, relative, index)?;
        }
        self.current = Some((id, relative));
        self.after_operands = id != ID::ClosePath;
        Ok(Some(Command {
            relative,
            data: Data::from_args(id, &args),
        }))
    }

    fn operand(&mut self, id: ID, relative: bool, index: usize) -> Result<f64, Error> {
        if index == 0 {
            self.cursor.skip_whitespace();
        } else {
            self.cursor.skip_comma_whitespace();
        }
        let offset = self.cursor.cursor();
        let incomplete = Error::IncompletePathCommand {
            command: id.letter(relative),
            offset,
        };
        let char = match self.cursor.current() {
            Ok(char) if char.is_ascii_alphabetic() => return Err(incomplete),
            Ok(char) => char,
            Err(_) => return Err(incomplete),
        };

        if id.is_flag(index) {
            self.cursor.advance();
            return match char {
                '0' => Ok(0.0),
                '1' => Ok(1.0),
                _ => Err(Error::InvalidArcFlag { offset }),
            };
        }
        if char == ',' {
            return Err(Error::UnexpectedComma { offset });
        }
        self.cursor
            .expect_number()
            .map_err(|_| Error::MalformedNumber { offset })
    }
}

impl Iterator for Parser<'_> {
    type Item = Result<Command, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_command() {
            Ok(command) => command.map(Ok),
            Err(error) => {
                log::debug!("failed to parse path data: {error}");
                self.cursor.done();
                Some(Err(error))
            }
        }
    }
}

impl Error {
    /// Returns the error with it's byte offset, if any, passed through `f`
    pub(crate) fn map_offset(self, f: impl FnOnce(usize) -> usize) -> Self {
        match self {
            Self::NoCommand { offset } => Self::NoCommand { offset: f(offset) },
            Self::InvalidFirstCommand => Self::InvalidFirstCommand,
            Self::UnknownPathCommand { command, offset } => Self::UnknownPathCommand {
                command,
                offset: f(offset),
            },
            Self::IncompletePathCommand { command, offset } => Self::IncompletePathCommand {
                command,
                offset: f(offset),
            },
            Self::UnexpectedComma { offset } => Self::UnexpectedComma { offset: f(offset) },
            Self::InvalidArcFlag { offset } => Self::InvalidArcFlag { offset: f(offset) },
            Self::MalformedNumber { offset } => Self::MalformedNumber { offset: f(offset) },
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoCommand { offset } => {
                f.write_fmt(format_args!("Expected a path command at offset {offset}"))
            }
            Self::InvalidFirstCommand => f.write_str("Expected path to start with `m` or `M`"),
            Self::UnknownPathCommand { command, offset } => f.write_fmt(format_args!(
                "Unknown path command `{command}` at offset {offset}"
            )),
            Self::IncompletePathCommand { command, offset } => f.write_fmt(format_args!(
                "The path command `{command}` ended too early at offset {offset}"
            )),
            Self::UnexpectedComma { offset } => f.write_fmt(format_args!(
                "Found unexpected comma in path data at offset {offset}"
            )),
            Self::InvalidArcFlag { offset } => f.write_fmt(format_args!(
                "Expected binary digit (`0` or `1`) for arc flag at offset {offset}"
            )),
            Self::MalformedNumber { offset } => f.write_fmt(format_args!(
                "Failed to parse number in path data at offset {offset}"
            )),
        }
    }
}

impl std::error::Error for Error {}

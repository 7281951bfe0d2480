//! Program Loader.
//!
//! This module reads program files into a list of addressed instruction words. It performs:
//! 1. **File reading:** Reads the raw bytes, mapping I/O failures to [`SimError::LoadFailure`].
//! 2. **Line parsing:** Accepts `"<addr>: 0x<value>"` lines, each field at most 4 hex digits.
//! 3. **Leniency:** Lines that do not match, including lines that are not valid UTF-8, are
//!    skipped and counted rather than rejected.
//!
//! Placing the words into instruction memory is done by [`crate::Cpu::load_program`].

use std::fs;
use std::path::Path;
use std::str;

use nom::{
    IResult,
    bytes::complete::{tag_no_case, take_while_m_n},
    character::complete::{char, multispace0},
    combinator::{map, map_res},
    sequence::{preceded, separated_pair},
};

use crate::common::SimError;

/// Maximum number of hex digits read for an address or a value.
const MAX_HEX_DIGITS: usize = 4;

/// One instruction word and the byte address it is stored at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgramWord {
    /// Byte address of the low byte.
    pub addr: u16,
    /// Instruction word.
    pub value: u16,
}

/// A parsed program file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    /// Words in file order. Later words overwrite earlier ones at the same address.
    pub words: Vec<ProgramWord>,
    /// Number of lines that did not match the expected format.
    pub skipped: usize,
}

// Parses 1 to 4 hex digits into a word; a fifth digit is left in the input.
fn hex_word(input: &str) -> IResult<&str, u16> {
    map_res(
        take_while_m_n(1, MAX_HEX_DIGITS, |c: char| c.is_ascii_hexdigit()),
        |digits: &str| u16::from_str_radix(digits, 16),
    )(input)
}

// Parses `<addr>:<ws>0x<value>`, with optional leading whitespace.
fn program_word(input: &str) -> IResult<&str, ProgramWord> {
    map(
        separated_pair(
            preceded(multispace0, hex_word),
            preceded(char(':'), multispace0),
            preceded(tag_no_case("0x"), hex_word),
        ),
        |(addr, value)| ProgramWord { addr, value },
    )(input)
}

/// Parses a single program line.
///
/// Leading whitespace is allowed before the address and before the value, the
/// `0x` prefix is case-insensitive, and anything after the value is ignored.
///
/// # Examples
///
/// ```
/// use sim16_core::sim::loader::{parse_line, ProgramWord};
///
/// assert_eq!(
///     parse_line("0010: 0x1234"),
///     Some(ProgramWord { addr: 0x0010, value: 0x1234 })
/// );
/// assert_eq!(parse_line("; comment"), None);
/// ```
pub fn parse_line(line: &str) -> Option<ProgramWord> {
    program_word(line).ok().map(|(_rest, word)| word)
}

/// Parses the full contents of a program file.
///
/// Lines are split on `\n`; a line that is not valid UTF-8 is skipped like any other
/// malformed line.
pub fn parse_program(data: impl AsRef<[u8]>) -> Program {
    let mut program = Program::default();
    for (lineno, raw) in data.as_ref().split_inclusive(|&b| b == b'\n').enumerate() {
        match str::from_utf8(raw).ok().and_then(parse_line) {
            Some(word) => program.words.push(word),
            None => {
                program.skipped += 1;
                tracing::debug!(
                    line = lineno + 1,
                    text = %String::from_utf8_lossy(raw).trim_end(),
                    "skipping malformed program line"
                );
            }
        }
    }
    program
}

/// Loads and parses a program file from disk.
///
/// # Errors
///
/// Returns [`SimError::LoadFailure`] if the file cannot be opened or read.
pub fn load_program(path: impl AsRef<Path>) -> Result<Program, SimError> {
    let path = path.as_ref();
    let data = fs::read(path).map_err(|source| SimError::LoadFailure {
        path: path.to_path_buf(),
        source,
    })?;
    let program = parse_program(&data);
    tracing::debug!(
        path = %path.display(),
        words = program.words.len(),
        skipped = program.skipped,
        "parsed program file"
    );
    Ok(program)
}

//! Grammar Matcher - Full-String Scanner
//!
//! version        := ["v" | "V"] core ["-" dot-identifiers] ["+" dot-identifiers]
//! core           := digits "." digits "." digits
//! dot-identifiers := identifier ("." identifier)*
//! identifier     := [0-9A-Za-z-]+
//!
//! The whole input must match. Partial matches are failures.

use std::fmt;

use serde::Serialize;

/// Raw captures from a successful match. All slices borrow from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Captures<'a> {
    pub major: &'a str,
    pub minor: &'a str,
    pub patch: &'a str,
    /// Empty when the input has no `-` segment.
    pub pre_release: &'a str,
    /// Empty when the input has no `+` segment.
    pub build: &'a str,
}

/// What the scanner wanted to see when it gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Expected {
    Digit,
    Dot,
    Identifier,
    End,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Digit => f.write_str("an ASCII digit"),
            Expected::Dot => f.write_str("'.'"),
            Expected::Identifier => f.write_str("an identifier character [0-9A-Za-z-]"),
            Expected::End => f.write_str("end of input"),
        }
    }
}

/// First point at which the input stopped matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    /// Byte offset into the original input.
    pub offset: usize,
    pub expected: Expected,
}

pub fn is_identifier_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-'
}

/// Match `input` against the version grammar.
pub fn match_version(input: &str) -> Result<Captures<'_>, Mismatch> {
    let mut scanner = Scanner { input, pos: 0 };

    if matches!(scanner.peek(), Some(b'v' | b'V')) {
        scanner.pos += 1;
    }

    let major = scanner.digits()?;
    scanner.expect(b'.', Expected::Dot)?;
    let minor = scanner.digits()?;
    scanner.expect(b'.', Expected::Dot)?;
    let patch = scanner.digits()?;

    let pre_release = if scanner.eat(b'-') {
        scanner.dot_identifiers()?
    } else {
        ""
    };
    let build = if scanner.eat(b'+') {
        scanner.dot_identifiers()?
    } else {
        ""
    };

    if scanner.pos != input.len() {
        return Err(scanner.mismatch(Expected::End));
    }

    Ok(Captures { major, minor, patch, pre_release, build })
}

/// Match `input` as a standalone dot-separated identifier list. Empty input
/// means "absent" and matches.
pub fn match_identifiers(input: &str) -> Result<&str, Mismatch> {
    if input.is_empty() {
        return Ok(input);
    }

    let mut scanner = Scanner { input, pos: 0 };
    let matched = scanner.dot_identifiers()?;
    if scanner.pos != input.len() {
        return Err(scanner.mismatch(Expected::End));
    }
    Ok(matched)
}

// Only ever advances over ASCII bytes, so every `pos` is a char boundary.
struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn eat(&mut self, b: u8) -> bool {
        if self.peek() == Some(b) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, b: u8, expected: Expected) -> Result<(), Mismatch> {
        if self.eat(b) {
            Ok(())
        } else {
            Err(self.mismatch(expected))
        }
    }

    fn mismatch(&self, expected: Expected) -> Mismatch {
        Mismatch { offset: self.pos, expected }
    }

    fn take_while(&mut self, pred: impl Fn(u8) -> bool) -> &'a str {
        let start = self.pos;
        while matches!(self.peek(), Some(b) if pred(b)) {
            self.pos += 1;
        }
        &self.input[start..self.pos]
    }

    fn digits(&mut self) -> Result<&'a str, Mismatch> {
        let digits = self.take_while(|b| b.is_ascii_digit());
        if digits.is_empty() {
            return Err(self.mismatch(Expected::Digit));
        }
        Ok(digits)
    }

    fn dot_identifiers(&mut self) -> Result<&'a str, Mismatch> {
        let start = self.pos;
        loop {
            if self.take_while(is_identifier_byte).is_empty() {
                return Err(self.mismatch(Expected::Identifier));
            }
            if !self.eat(b'.') {
                break;
            }
        }
        Ok(&self.input[start..self.pos])
    }
}

//! Precedence - Pre-release Ordering
//!
//! Core numbers are compared by the caller. This module decides the
//! pre-release part:
//! 1. No pre-release outranks any pre-release.
//! 2. Identifiers compare left to right.
//! 3. Numeric < alphanumeric; numeric vs numeric by value; alphanumeric by ASCII.
//! 4. A strict prefix sorts first.

use std::cmp::Ordering;

use crate::validation::is_numeric;

/// A single dot-separated pre-release identifier, classified for comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identifier<'a> {
    Numeric(&'a str),
    Alphanumeric(&'a str),
}

impl<'a> Identifier<'a> {
    pub fn classify(identifier: &'a str) -> Self {
        if is_numeric(identifier) {
            Identifier::Numeric(identifier)
        } else {
            Identifier::Alphanumeric(identifier)
        }
    }
}

impl Ord for Identifier<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Identifier::Numeric(a), Identifier::Numeric(b)) => compare_digits(a, b),
            (Identifier::Numeric(_), Identifier::Alphanumeric(_)) => Ordering::Less,
            (Identifier::Alphanumeric(_), Identifier::Numeric(_)) => Ordering::Greater,
            (Identifier::Alphanumeric(a), Identifier::Alphanumeric(b)) => a.as_bytes().cmp(b.as_bytes()),
        }
    }
}

impl PartialOrd for Identifier<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Digit runs can exceed any integer type; compare by magnitude without parsing.
// Equal magnitudes with different spellings ("0" vs "00") fall back to the raw
// text so `Equal` only ever means identical identifiers.
fn compare_digits(a: &str, b: &str) -> Ordering {
    let trimmed_a = a.trim_start_matches('0');
    let trimmed_b = b.trim_start_matches('0');
    trimmed_a
        .len()
        .cmp(&trimmed_b.len())
        .then_with(|| trimmed_a.cmp(trimmed_b))
        .then_with(|| a.cmp(b))
}

/// Compare two dot-joined pre-release strings. The empty string means
/// "no pre-release" and ranks above every non-empty one.
pub fn compare_pre_release(a: &str, b: &str) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a
            .split('.')
            .map(Identifier::classify)
            .cmp(b.split('.').map(Identifier::classify)),
    }
}

//! Validation - Post-Match Rules
//!
//! The grammar accepts more than semver allows. These checks run on the
//! captures after a successful match.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::version::InvalidReason;

/// Numeric core component, used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Component {
    Major,
    Minor,
    Patch,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Major => f.write_str("major"),
            Component::Minor => f.write_str("minor"),
            Component::Patch => f.write_str("patch"),
        }
    }
}

pub fn is_numeric(identifier: &str) -> bool {
    !identifier.is_empty() && identifier.bytes().all(|b| b.is_ascii_digit())
}

/// Numeric identifiers must not carry a leading zero, except `"0"` itself.
pub fn has_leading_zero(identifier: &str) -> bool {
    is_numeric(identifier) && identifier.len() > 1 && identifier.starts_with('0')
}

/// Apply the leading-zero rule to every identifier of a pre-release string.
/// An empty string means "no pre-release" and always passes.
///
/// Build metadata is never passed through here.
pub fn check_pre_release(pre_release: &str) -> Result<(), InvalidReason> {
    if pre_release.is_empty() {
        return Ok(());
    }

    match pre_release.split('.').find(|id| has_leading_zero(id)) {
        Some(identifier) => Err(InvalidReason::LeadingZero {
            identifier: identifier.to_string(),
        }),
        None => Ok(()),
    }
}

/// Convert a digit run from the core. Leading zeros are allowed here and
/// normalized away.
pub fn parse_numeric(component: Component, digits: &str) -> Result<u64, InvalidReason> {
    digits.parse::<u64>().map_err(|_| InvalidReason::OutOfRange {
        component,
        digits: digits.to_string(),
    })
}

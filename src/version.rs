//! Semantic Version - Single Entry Point
//!
//! Construction always goes through the grammar and the validation rules.
//! There is no way to build an unchecked value from outside the crate.

use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use thiserror::Error;

use crate::grammar::{self, Expected, Mismatch};
use crate::precedence::compare_pre_release;
use crate::validation::{self, Component};

/// Why a string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidReason {
    #[error("malformed version string: expected {expected} at offset {offset}")]
    Malformed { offset: usize, expected: Expected },

    #[error("pre-release identifier {identifier:?} must not include leading zeros")]
    LeadingZero { identifier: String },

    #[error("{component} version number {digits} is out of range")]
    OutOfRange { component: Component, digits: String },
}

impl From<Mismatch> for InvalidReason {
    fn from(m: Mismatch) -> Self {
        InvalidReason::Malformed { offset: m.offset, expected: m.expected }
    }
}

/// The text is not a semantic version.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid semantic version {input:?}: {reason}")]
pub struct InvalidSemanticVersion {
    pub input: String,
    pub reason: InvalidReason,
}

impl InvalidSemanticVersion {
    pub fn is_leading_zero(&self) -> bool {
        matches!(self.reason, InvalidReason::LeadingZero { .. })
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self.reason, InvalidReason::Malformed { .. })
    }
}

#[derive(Debug, Error)]
pub enum VersionError {
    /// Caller handed over something that is not text. This is a usage
    /// error, not a parse failure.
    #[error("version must be a string, got {found}")]
    NotText { found: &'static str },

    #[error(transparent)]
    Invalid(#[from] InvalidSemanticVersion),

    #[error("semver interop error: {0}")]
    Interop(#[from] semver::Error),
}

/// Immutable Semantic Versioning 2.0.0 value.
///
/// Equality, hashing and ordering ignore build metadata.
#[derive(Clone)]
pub struct SemanticVersion {
    major: u64,
    minor: u64,
    patch: u64,
    pre_release: String,
    build: String,
}

/// Flat export of a [`SemanticVersion`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionDict {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub pre_release: String,
    pub build_metadata: String,
}

impl SemanticVersion {
    /// Parse and validate `input`. An optional leading `v`/`V` is dropped.
    pub fn parse(input: &str) -> Result<Self, InvalidSemanticVersion> {
        let invalid = |reason: InvalidReason| InvalidSemanticVersion {
            input: input.to_string(),
            reason,
        };

        let captures = grammar::match_version(input).map_err(|m| invalid(m.into()))?;

        let major = validation::parse_numeric(Component::Major, captures.major).map_err(invalid)?;
        let minor = validation::parse_numeric(Component::Minor, captures.minor).map_err(invalid)?;
        let patch = validation::parse_numeric(Component::Patch, captures.patch).map_err(invalid)?;
        validation::check_pre_release(captures.pre_release).map_err(invalid)?;

        let version = Self {
            major,
            minor,
            patch,
            pre_release: captures.pre_release.to_string(),
            build: captures.build.to_string(),
        };
        tracing::trace!(%input, %version, "parsed semantic version");
        Ok(version)
    }

    /// Parse from a dynamically typed value. Anything other than a JSON
    /// string is rejected with [`VersionError::NotText`].
    pub fn from_json(value: &Value) -> Result<Self, VersionError> {
        let found = match value {
            Value::String(s) => return Ok(Self::parse(s)?),
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        };
        Err(VersionError::NotText { found })
    }

    /// Rebuild from an exported [`VersionDict`], re-running validation on
    /// each field. Errors carry the offending field as `input`.
    pub fn from_dict(dict: &VersionDict) -> Result<Self, InvalidSemanticVersion> {
        let invalid = |field: &str, reason: InvalidReason| InvalidSemanticVersion {
            input: field.to_string(),
            reason,
        };

        let pre_release = grammar::match_identifiers(&dict.pre_release)
            .map_err(|m| invalid(&dict.pre_release, m.into()))?;
        validation::check_pre_release(pre_release)
            .map_err(|reason| invalid(&dict.pre_release, reason))?;
        let build = grammar::match_identifiers(&dict.build_metadata)
            .map_err(|m| invalid(&dict.build_metadata, m.into()))?;

        Ok(Self::from_checked_parts(dict.major, dict.minor, dict.patch, pre_release, build))
    }

    /// Plain release `major.minor.patch`.
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            pre_release: String::new(),
            build: String::new(),
        }
    }

    // Caller guarantees the parts already satisfy the grammar and rules.
    pub(crate) fn from_checked_parts(
        major: u64,
        minor: u64,
        patch: u64,
        pre_release: &str,
        build: &str,
    ) -> Self {
        Self {
            major,
            minor,
            patch,
            pre_release: pre_release.to_string(),
            build: build.to_string(),
        }
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// Dot-joined pre-release, empty if none.
    pub fn pre_release(&self) -> &str {
        &self.pre_release
    }

    /// Dot-joined build metadata, empty if none.
    pub fn build_metadata(&self) -> &str {
        &self.build
    }

    /// `major.minor.patch` only.
    pub fn version(&self) -> String {
        format!("{}.{}.{}", self.major, self.minor, self.patch)
    }

    pub fn is_pre_release(&self) -> bool {
        !self.pre_release.is_empty()
    }

    pub fn pre_release_identifiers(&self) -> impl Iterator<Item = &str> {
        split_identifiers(&self.pre_release)
    }

    pub fn build_identifiers(&self) -> impl Iterator<Item = &str> {
        split_identifiers(&self.build)
    }

    pub fn to_dict(&self) -> VersionDict {
        VersionDict {
            major: self.major,
            minor: self.minor,
            patch: self.patch,
            pre_release: self.pre_release.clone(),
            build_metadata: self.build.clone(),
        }
    }

    /// Precedence comparator. Same as [`Ord::cmp`].
    pub fn precedence_cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(|| compare_pre_release(&self.pre_release, &other.pre_release))
    }

    /// Precedence first, then build metadata by plain string order. Gives a
    /// deterministic sort when two versions differ only in build metadata.
    pub fn cmp_with_build(&self, other: &Self) -> Ordering {
        self.precedence_cmp(other)
            .then_with(|| self.build.cmp(&other.build))
    }

    /// Ordering against an arbitrary value. `None` when `other` is not a
    /// `SemanticVersion`.
    pub fn partial_cmp_any(&self, other: &dyn Any) -> Option<Ordering> {
        other
            .downcast_ref::<SemanticVersion>()
            .map(|other| self.precedence_cmp(other))
    }

    /// Equality against an arbitrary value. `None` when `other` is not a
    /// `SemanticVersion`.
    pub fn eq_any(&self, other: &dyn Any) -> Option<bool> {
        other.downcast_ref::<SemanticVersion>().map(|other| self == other)
    }
}

fn split_identifiers(joined: &str) -> impl Iterator<Item = &str> {
    joined.split('.').filter(|id| !id.is_empty())
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.pre_release.is_empty() {
            write!(f, "-{}", self.pre_release)?;
        }
        if !self.build.is_empty() {
            write!(f, "+{}", self.build)?;
        }
        Ok(())
    }
}

impl fmt::Debug for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SemanticVersion(\"{}\")", self)
    }
}

impl PartialEq for SemanticVersion {
    fn eq(&self, other: &Self) -> bool {
        self.major == other.major
            && self.minor == other.minor
            && self.patch == other.patch
            && self.pre_release == other.pre_release
    }
}

impl Eq for SemanticVersion {}

impl Hash for SemanticVersion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.pre_release.hash(state);
    }
}

impl Ord for SemanticVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.precedence_cmp(other)
    }
}

impl PartialOrd for SemanticVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for SemanticVersion {
    type Err = InvalidSemanticVersion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for SemanticVersion {
    type Error = InvalidSemanticVersion;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<String> for SemanticVersion {
    type Error = InvalidSemanticVersion;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl Serialize for SemanticVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SemanticVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}

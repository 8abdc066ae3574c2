//! Semantic Version - Parsing, Validation, Precedence
//!
//! Semantic Versioning 2.0.0 values for release tooling.
//! 1. Full-string grammar match, optional `v`/`V` prefix
//! 2. Pre-release identifiers must not carry leading zeros
//! 3. Build metadata is display-only: ignored by equality and ordering
//!
//! The numeric core accepts leading zeros (`01.2.3`) and normalizes them away.
//! Strict semver forbids this.

pub mod grammar;
pub mod validation;
pub mod precedence;
pub mod version;
pub mod interop;

pub use grammar::Expected;
pub use validation::Component;
pub use precedence::compare_pre_release;
pub use version::{InvalidReason, InvalidSemanticVersion, SemanticVersion, VersionDict, VersionError};

/// Parse `input` into a [`SemanticVersion`].
pub fn parse(input: &str) -> Result<SemanticVersion, InvalidSemanticVersion> {
    SemanticVersion::parse(input)
}

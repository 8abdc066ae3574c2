//! Interop with the `semver` crate
//!
//! `semver::Version` is stricter on the core (no leading zeros) but its
//! output is always something we accept, so only one direction can fail.

use semver::{BuildMetadata, Prerelease};

use crate::version::{SemanticVersion, VersionError};

impl TryFrom<&SemanticVersion> for semver::Version {
    type Error = VersionError;

    fn try_from(version: &SemanticVersion) -> Result<Self, Self::Error> {
        let pre = match version.pre_release() {
            "" => Prerelease::EMPTY,
            pre => Prerelease::new(pre)?,
        };
        let build = match version.build_metadata() {
            "" => BuildMetadata::EMPTY,
            build => BuildMetadata::new(build)?,
        };

        Ok(semver::Version {
            major: version.major(),
            minor: version.minor(),
            patch: version.patch(),
            pre,
            build,
        })
    }
}

impl TryFrom<SemanticVersion> for semver::Version {
    type Error = VersionError;

    fn try_from(version: SemanticVersion) -> Result<Self, Self::Error> {
        semver::Version::try_from(&version)
    }
}

impl From<&semver::Version> for SemanticVersion {
    fn from(version: &semver::Version) -> Self {
        SemanticVersion::from_checked_parts(
            version.major,
            version.minor,
            version.patch,
            version.pre.as_str(),
            version.build.as_str(),
        )
    }
}

impl From<semver::Version> for SemanticVersion {
    fn from(version: semver::Version) -> Self {
        SemanticVersion::from(&version)
    }
}

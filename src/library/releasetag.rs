// library/releasetag.rs

//! Release tags: a version string made safe for use as a git tag name.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::{GenVersionError, Result};

pub const RELEASE_TAG_PREFIX: &str = "RELEASE.";

/// Shape of the tag body for versions in HTTP time format.
const RELEASE_TAG_TIME_FORMAT: &str = "%a-%d-%b-%Y-%H-%M-%S-GMT";

/// Derives the release tag of a version.
///
/// Spaces and colons become `-`, commas are dropped, and the result is
/// prefixed with `RELEASE.`. Any input is accepted.
pub fn gen_release_tag(version: &str) -> String {
    let rel_tag = version.replace(' ', "-").replace(':', "-").replace(',', "");
    format!("{}{}", RELEASE_TAG_PREFIX, rel_tag)
}

/// Recovers the release time from a tag derived from an HTTP-date version.
pub fn release_tag_to_time(tag: &str) -> Result<DateTime<Utc>> {
    let body = tag
        .strip_prefix(RELEASE_TAG_PREFIX)
        .ok_or_else(|| GenVersionError::InvalidReleaseTag(format!("missing prefix: {}", tag)))?;

    NaiveDateTime::parse_from_str(body, RELEASE_TAG_TIME_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|e| GenVersionError::InvalidReleaseTag(format!("{}: {}", tag, e)))
}

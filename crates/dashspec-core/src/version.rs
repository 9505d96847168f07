//! Schema version tags.
//!
//! A dashboard specification version is a calendar date written exactly as
//! `YYYY-MM-DD`. Chronological order and lexicographic order coincide for
//! that format, so versions compare the way their tags sort.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::MigrationError;

const TAG_FORMAT: &str = "%Y-%m-%d";

pub const V2021_03_15: &str = "2021-03-15";
pub const V2021_04_01: &str = "2021-04-01";
pub const V2021_05_10: &str = "2021-05-10";
pub const V2021_06_21: &str = "2021-06-21";
pub const V2021_07_12: &str = "2021-07-12";
pub const V2021_08_05: &str = "2021-08-05";
pub const V2021_08_16: &str = "2021-08-16";
pub const V2021_10_14: &str = "2021-10-14";
pub const V2021_10_19: &str = "2021-10-19";
pub const V2021_10_25: &str = "2021-10-25";

/// The oldest schema version this crate can read.
pub const EARLIEST: &str = V2021_03_15;

/// The current schema version. Every document is migrated here on load.
pub const LATEST: &str = V2021_10_25;

/// A dated schema version tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(NaiveDate);

impl Version {
    /// Parses a tag, rejecting anything that does not round-trip through
    /// the canonical `YYYY-MM-DD` form (`2021-8-5` is not a version).
    pub fn parse(tag: &str) -> Result<Self, MigrationError> {
        let date = NaiveDate::parse_from_str(tag, TAG_FORMAT)
            .map_err(|_| MigrationError::InvalidVersion(tag.to_string()))?;
        let version = Self(date);
        if version.to_string() != tag {
            return Err(MigrationError::InvalidVersion(tag.to_string()));
        }
        Ok(version)
    }

    /// The current schema version.
    pub fn latest() -> Self {
        Self::from_static(LATEST)
    }

    /// The oldest readable schema version.
    pub fn earliest() -> Self {
        Self::from_static(EARLIEST)
    }

    /// Builds a version from one of the tag constants in this module.
    ///
    /// # Panics
    ///
    /// Panics if `tag` is not a valid tag. Only use with compiled-in constants.
    pub(crate) fn from_static(tag: &'static str) -> Self {
        Self::parse(tag).unwrap_or_else(|_| panic!("Invalid compiled-in version tag: {}", tag))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TAG_FORMAT))
    }
}

impl FromStr for Version {
    type Err = MigrationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Self::parse(&tag).map_err(serde::de::Error::custom)
    }
}

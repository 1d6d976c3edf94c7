use std::fmt;

use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};

/// `YYYY.MM.DD.HHMMSS`
pub const TIMESTAMP_FORMAT: &str = "%Y.%m.%d.%H%M%S";

/// Where the release version comes from when none is given on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionSource {
    /// The version must be passed explicitly
    #[default]
    Manual,
    /// The version is stamped from the current local time
    Timestamp,
}

/// Format a point in time as a timestamp version
pub fn timestamp_version<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Timestamp version for the current local time
pub fn current_timestamp_version() -> String {
    timestamp_version(&Local::now())
}

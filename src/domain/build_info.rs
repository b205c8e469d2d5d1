// SPDX-License-Identifier: MIT OR Apache-2.0

//! Build and process start metadata.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Placeholder used when the build did not supply a value.
pub const UNKNOWN: &str = "0";

/// Immutable build metadata, captured once at process start.
///
/// `commit` and `build_time` are baked in at compile time from the
/// `BUILD_COMMIT` and `BUILD_TIME` environment variables. `start_time` is the
/// moment the value was created, formatted as ISO 8601 UTC
/// (`YYYY-MM-DDThh:mm:ssZ`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildInfo {
    commit: String,
    build_time: String,
    start_time: String,
}

impl BuildInfo {
    /// Creates build metadata with an explicit commit and build time, started now.
    pub fn new(commit: impl Into<String>, build_time: impl Into<String>) -> Self {
        Self::started_at(commit, build_time, Utc::now())
    }

    /// Creates build metadata with an explicit start instant.
    pub fn started_at(
        commit: impl Into<String>,
        build_time: impl Into<String>,
        started: DateTime<Utc>,
    ) -> Self {
        Self {
            commit: commit.into(),
            build_time: build_time.into(),
            start_time: started.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        }
    }

    /// Reads the commit and build time baked in by the build script.
    pub fn from_build_env() -> Self {
        Self::new(
            option_env!("BUILD_COMMIT").unwrap_or(UNKNOWN),
            option_env!("BUILD_TIME").unwrap_or(UNKNOWN),
        )
    }

    /// The commit the binary was built from.
    pub fn commit(&self) -> &str {
        &self.commit
    }

    /// When the binary was built.
    pub fn build_time(&self) -> &str {
        &self.build_time
    }

    /// When the process started.
    pub fn start_time(&self) -> &str {
        &self.start_time
    }
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self::from_build_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_started_at_formats_iso8601() {
        let started = Utc.with_ymd_and_hms(2021, 3, 4, 5, 6, 7).unwrap();
        let info = BuildInfo::started_at("abc123", "2021-03-01T00:00:00Z", started);

        assert_eq!(info.commit(), "abc123");
        assert_eq!(info.build_time(), "2021-03-01T00:00:00Z");
        assert_eq!(info.start_time(), "2021-03-04T05:06:07Z");
    }

    #[test]
    fn test_start_time_shape() {
        let info = BuildInfo::new(UNKNOWN, UNKNOWN);
        let start = info.start_time();
        assert_eq!(start.len(), "YYYY-MM-DDThh:mm:ssZ".len());
        assert!(start.ends_with('Z'));
        assert_eq!(&start[10..11], "T");
    }

    #[test]
    fn test_from_build_env_defaults_to_placeholder() {
        let info = BuildInfo::from_build_env();
        assert!(!info.commit().is_empty());
        assert!(!info.build_time().is_empty());
    }
}

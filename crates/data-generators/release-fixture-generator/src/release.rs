//! Release records
//!
//! ## Authors
//!
//! The Veracruz Development Team.
//!
//! ## Licensing and copyright notice
//!
//! See the `LICENSE_MIT.markdown` file in the Veracruz root directory for
//! information on licensing and copyright.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

////////////////////////////////////////////////////////////////////////////////
// Constants.
////////////////////////////////////////////////////////////////////////////////

/// The number of releases produced by a single generation pass.
pub const RELEASE_COUNT: u32 = 100;
/// The spacing, in seconds, between two consecutive releases.
pub const RELEASE_INTERVAL_SECS: i64 = 3600;
/// Every release version is this prefix followed by the 1-based release index.
pub const VERSION_PREFIX: &str = "1.0.";
/// The number of test outcomes attached to a release.
pub const TESTS_PER_RELEASE: RangeInclusive<usize> = 1..=5;
/// Host identifiers a test may be attributed to.
pub const HOSTS: RangeInclusive<u8> = 1..=10;
/// Outcome codes a test may report.  Their meaning is left to consumers.
pub const RESULT_CODES: RangeInclusive<u8> = 1..=3;

////////////////////////////////////////////////////////////////////////////////
// Records.
////////////////////////////////////////////////////////////////////////////////

/// The outcome of one test run on one host.
///
/// Fields are declared in the order they appear in the JSON document.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TestResult {
    result: u8,
    host: u8,
}

impl TestResult {
    #[inline]
    pub fn new(result: u8, host: u8) -> Self {
        Self { result, host }
    }

    #[inline]
    pub fn result(&self) -> u8 {
        self.result
    }

    #[inline]
    pub fn host(&self) -> u8 {
        self.host
    }
}

/// A single release: when it happened, what it was called, and how its tests
/// went.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Release {
    timestamp: i64,
    version: String,
    tests: Vec<TestResult>,
}

impl Release {
    /// Builds the release at 1-based position `index` in the history.  The
    /// version string is derived from the index.
    pub fn new(index: u32, timestamp: i64, tests: Vec<TestResult>) -> Self {
        Self {
            timestamp,
            version: format!("{}{}", VERSION_PREFIX, index),
            tests,
        }
    }

    /// Seconds since the Unix epoch.
    #[inline]
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    #[inline]
    pub fn version(&self) -> &str {
        &self.version
    }

    #[inline]
    pub fn tests(&self) -> &[TestResult] {
        &self.tests
    }
}

//! Release history generation
//!
//! ## Authors
//!
//! The Veracruz Development Team.
//!
//! ## Licensing and copyright notice
//!
//! See the `LICENSE_MIT.markdown` file in the Veracruz root directory for
//! information on licensing and copyright.

use crate::{
    clock::{Clock, SystemClock},
    document,
    error::GeneratorError,
    release::{
        Release, TestResult, HOSTS, RELEASE_COUNT, RELEASE_INTERVAL_SECS, RESULT_CODES,
        TESTS_PER_RELEASE,
    },
};
use log::{debug, info};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::{
    fmt,
    path::{Path, PathBuf},
};

////////////////////////////////////////////////////////////////////////////////
// The generator.
////////////////////////////////////////////////////////////////////////////////

/// Builds release histories from a random source and a clock.
///
/// Releases are numbered from 1 and backdated so that the last one is stamped
/// with the clock's current reading and each predecessor sits one interval
/// earlier.
pub struct ReleaseFixtureGenerator<R, C> {
    rng: R,
    clock: C,
}

impl ReleaseFixtureGenerator<StdRng, SystemClock> {
    /// A generator seeded from operating system entropy and reading the
    /// system clock.
    pub fn from_entropy() -> Self {
        debug!("Seeding generator from system entropy.");
        Self::new(StdRng::from_entropy(), SystemClock)
    }
}

impl<C: Clock> ReleaseFixtureGenerator<StdRng, C> {
    /// A reproducible generator: the same `seed` and clock reading always
    /// yield the same history.
    pub fn seeded(seed: u64, clock: C) -> Self {
        debug!("Seeding generator with {}.", seed);
        Self::new(StdRng::seed_from_u64(seed), clock)
    }
}

impl<R: Rng, C: Clock> ReleaseFixtureGenerator<R, C> {
    pub fn new(rng: R, clock: C) -> Self {
        Self { rng, clock }
    }

    /// Generates the full release history, oldest release first.
    pub fn generate(&mut self) -> Vec<Release> {
        // A single reading keeps the spacing exact even if the clock ticks
        // mid-generation.
        let now = self.clock.now();
        debug!("Generating releases relative to timestamp {}.", now);

        (1..=RELEASE_COUNT)
            .map(|index| {
                let age = i64::from(RELEASE_COUNT - index) * RELEASE_INTERVAL_SECS;
                let tests = self.generate_tests();
                Release::new(index, now - age, tests)
            })
            .collect()
    }

    /// Generates a release history and writes it to `path`, overwriting any
    /// existing file.
    pub fn generate_and_save<P: AsRef<Path>>(
        &mut self,
        path: P,
    ) -> Result<GenerationSummary, GeneratorError> {
        let path = path.as_ref();

        info!("Generating {} releases.", RELEASE_COUNT);
        let releases = self.generate();

        info!("Writing release document, {:?}.", path);
        document::save(path, &releases)?;
        info!("Release document written successfully.");

        Ok(GenerationSummary {
            count: releases.len(),
            path: path.to_path_buf(),
        })
    }

    fn generate_tests(&mut self) -> Vec<TestResult> {
        let count = self.rng.gen_range(TESTS_PER_RELEASE);
        (0..count)
            .map(|_| {
                let host = self.rng.gen_range(HOSTS);
                let result = self.rng.gen_range(RESULT_CODES);
                TestResult::new(result, host)
            })
            .collect()
    }
}

/// Generates a release history from fresh entropy and the system clock, and
/// writes it to `path`.
pub fn generate_and_save<P: AsRef<Path>>(path: P) -> Result<GenerationSummary, GeneratorError> {
    ReleaseFixtureGenerator::from_entropy().generate_and_save(path)
}

////////////////////////////////////////////////////////////////////////////////
// Reporting.
////////////////////////////////////////////////////////////////////////////////

/// What a successful save produced, and where.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GenerationSummary {
    count: usize,
    path: PathBuf,
}

impl GenerationSummary {
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for GenerationSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Generated {} releases and saved to {}",
            self.count,
            self.path.display()
        )
    }
}

//! Release fixture generator
//!
//! Produces a synthetic release history: 100 releases, one hour apart, each
//! carrying between one and five test outcomes attributed to a host.  The
//! history is written as an indented JSON document for consumption by other
//! tools (dashboards, charting front-ends, and so on).
//!
//! The random source and the clock are owned by the generator rather than
//! taken from global state, so a seeded generator paired with a
//! [`clock::FixedClock`] always produces the same document.
//!
//! ## Authors
//!
//! The Veracruz Development Team.
//!
//! ## Licensing and copyright notice
//!
//! See the `LICENSE_MIT.markdown` file in the Veracruz root directory for
//! information on licensing and copyright.

/// Sources of the current time.
pub mod clock;
/// Rendering and parsing of the JSON release document.
pub mod document;
/// Error types raised while generating or persisting releases.
pub mod error;
/// The release generator itself.
pub mod generator;
/// Release and test-outcome records, and the constants bounding them.
pub mod release;

pub use self::error::GeneratorError;
pub use self::generator::{generate_and_save, GenerationSummary, ReleaseFixtureGenerator};
pub use self::release::{Release, TestResult};

/// The default filename of the output JSON document, if no alternative is
/// provided by the caller.
pub const DEFAULT_OUTPUT_FILENAME: &str = "releases.json";

//! Errors raised by the release fixture generator
//!
//! ## Authors
//!
//! The Veracruz Development Team.
//!
//! ## Licensing and copyright notice
//!
//! See the `LICENSE_MIT.markdown` file in the Veracruz root directory for
//! information on licensing and copyright.

use err_derive::Error;
use std::{io, path::PathBuf};

////////////////////////////////////////////////////////////////////////////////
// Generator-related errors.
////////////////////////////////////////////////////////////////////////////////

/// A generic catch-all error type for generating, saving and loading release
/// documents.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The destination could not be created or written to.
    #[error(
        display = "GeneratorError: could not write release document {:?}: {}.",
        path,
        error
    )]
    WriteFailure { path: PathBuf, error: io::Error },
    /// The source document could not be read.
    #[error(
        display = "GeneratorError: could not read release document {:?}: {}.",
        path,
        error
    )]
    ReadFailure { path: PathBuf, error: io::Error },
    /// The releases could not be rendered to, or parsed from, JSON.
    #[error(display = "GeneratorError: JSON serialization failure: {}.", _0)]
    SerializationFailure(#[error(source)] serde_json::Error),
}

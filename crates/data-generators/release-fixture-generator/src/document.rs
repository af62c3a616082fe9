//! The JSON release document
//!
//! A document is a top-level JSON array of releases, pretty-printed with a
//! four-space indent and no trailing newline.  Rendering a parsed document
//! reproduces it byte for byte.
//!
//! ## Authors
//!
//! The Veracruz Development Team.
//!
//! ## Licensing and copyright notice
//!
//! See the `LICENSE_MIT.markdown` file in the Veracruz root directory for
//! information on licensing and copyright.

use crate::{error::GeneratorError, release::Release};
use log::debug;
use serde::{ser::Error as _, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};
use std::{fs, path::Path};

/// Indentation used for each nesting level of the document.
const INDENT: &[u8] = b"    ";

/// Renders `releases` as an indented JSON document.
pub fn render(releases: &[Release]) -> Result<String, GeneratorError> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    releases
        .serialize(&mut serializer)
        .map_err(GeneratorError::SerializationFailure)?;

    String::from_utf8(buffer)
        .map_err(|e| GeneratorError::SerializationFailure(serde_json::Error::custom(e)))
}

/// Parses a document produced by [`render`].
pub fn parse(document: &str) -> Result<Vec<Release>, GeneratorError> {
    serde_json::from_str(document).map_err(GeneratorError::SerializationFailure)
}

/// Renders `releases` in full, then writes the document to `path` in a single
/// pass, replacing whatever was there before.
pub fn save<P: AsRef<Path>>(path: P, releases: &[Release]) -> Result<(), GeneratorError> {
    let path = path.as_ref();
    let document = render(releases)?;

    debug!("Writing {} bytes to {:?}.", document.len(), path);

    fs::write(path, document).map_err(|error| GeneratorError::WriteFailure {
        path: path.to_path_buf(),
        error,
    })
}

/// Reads and parses the document stored at `path`.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<Release>, GeneratorError> {
    let path = path.as_ref();
    let document = fs::read_to_string(path).map_err(|error| GeneratorError::ReadFailure {
        path: path.to_path_buf(),
        error,
    })?;

    parse(&document)
}

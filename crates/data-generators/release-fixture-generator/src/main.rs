//! Data generator for release-history fixtures
//!
//! # Authors
//!
//! The Veracruz Development Team.
//!
//! # Copyright
//!
//! See the file `LICENSE_MIT.markdown` in the Veracruz root directory for licensing
//! and copyright information.
//!
//! # Example
//! ```
//! cargo run -- [FILENAME];
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use release_fixture_generator::{generate_and_save, DEFAULT_OUTPUT_FILENAME};
use std::path::PathBuf;

////////////////////////////////////////////////////////////////////////////////
// Constants.
////////////////////////////////////////////////////////////////////////////////

/// About the utility.
const ABOUT: &str = "Generate a synthetic history of 100 releases, each with 1 to 5 \
test outcomes attributed to hosts, and save it as an indented JSON document.";
/// The name of the application.
const APPLICATION_NAME: &str = "release-fixture-generator";
/// The authors list.
const AUTHORS: &str = "The Veracruz Development Team";

////////////////////////////////////////////////////////////////////////////////
// Command line parsing.
////////////////////////////////////////////////////////////////////////////////

/// A structure collating all of the arguments passed to the executable.
#[derive(Debug, Parser)]
#[command(name = APPLICATION_NAME, author = AUTHORS, version, about = ABOUT, long_about = None)]
struct Arguments {
    /// The filename of the generated release document.
    #[arg(value_name = "FILENAME", default_value = DEFAULT_OUTPUT_FILENAME)]
    file_name: PathBuf,
}

////////////////////////////////////////////////////////////////////////////////
// Entry point.
////////////////////////////////////////////////////////////////////////////////

fn main() -> Result<()> {
    env_logger::init();

    let arguments = Arguments::parse();
    info!("Output file: {:?}.", arguments.file_name);

    let summary = generate_and_save(&arguments.file_name)
        .with_context(|| format!("Failed to generate {:?}.", arguments.file_name))?;

    println!("{}", summary);
    Ok(())
}

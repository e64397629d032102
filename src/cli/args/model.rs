//! Data structures for command-line arguments.

use std::io;
use std::path::PathBuf;

use memegen::{CaptionRequest, Options as GeneratorOptions, OutputFormat};
use thiserror::Error;


/// Structure to hold options received from the command line.
#[derive(Clone, Debug, PartialEq)]
pub struct Options {
    /// Verbosity of the logging output.
    ///
    /// Corresponds to the number of times the -v flag has been passed.
    /// If -q has been used instead, this will be negative.
    pub verbosity: isize,

    /// The meme to generate.
    pub request: CaptionRequest,
    /// Canvas & font configuration,
    /// from the --config file with any explicit flags applied on top.
    pub generator: GeneratorOptions,
    /// Directory to load fonts from, if other than the default one.
    pub font_directory: Option<PathBuf>,

    /// Format of the finished image.
    pub format: OutputFormat,
    /// Path to write the finished meme to.
    ///
    /// If absent, it shall be written to standard output.
    pub output_path: Option<PathBuf>,
}


/// Error that can occur while parsing of command line arguments.
#[derive(Debug, Error)]
pub enum ArgsError {
    /// General error when parsing the arguments.
    #[error("invalid arguments: {0}")]
    Parse(#[from] clap::Error),

    /// The --config file couldn't be read.
    #[error("cannot read config file {}: {}", path.display(), cause)]
    ConfigFile {
        path: PathBuf,
        #[source] cause: io::Error,
    },

    /// The --config file isn't valid JSON options.
    #[error("invalid config file {}: {}", path.display(), cause)]
    ConfigJson {
        path: PathBuf,
        #[source] cause: serde_json::Error,
    },
}

impl ArgsError {
    /// Whether the error is about the --config file rather than the arguments.
    #[inline]
    pub fn is_config(&self) -> bool {
        match *self {
            ArgsError::Parse(..) => false,
            _ => true,
        }
    }
}

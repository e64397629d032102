//!
//! memegen -- Top text, bottom text, in the shell
//!

#[macro_use] extern crate lazy_static;
#[macro_use] extern crate log;
#[cfg(test)] #[macro_use] extern crate spectral;


mod args;
mod logging;


use std::env;
use std::fs;
use std::io::{self, Write};
use std::process::exit;

use ansi_term::Colour;
use memegen::{BuildError, FontLoader, GeneratorBuilder, ImageLoader, MemeGenerator};

use crate::args::{ArgsError, Options};


lazy_static! {
    /// Application name, as filled out by Cargo.
    static ref NAME: &'static str = option_env!("CARGO_BIN_NAME").unwrap_or("memegen");

    /// Application version, as filled out by Cargo.
    static ref VERSION: Option<&'static str> = option_env!("CARGO_PKG_VERSION");
}


fn main() {
    let opts = args::parse().unwrap_or_else(|e| {
        let _ = print_args_error(&e);
        exit(args_exit_code(&e));
    });

    let _guard = logging::init(opts.verbosity).unwrap_or_else(|e| {
        let _ = writeln!(&mut io::stderr(), "{}: failed to initialize logging: {}",
            error_label(), e);
        exit(exitcode::SOFTWARE);
    });
    if cfg!(debug_assertions) {
        warn!("Debug mode! The program will likely be much slower.");
    }
    for (i, arg) in env::args().enumerate() {
        debug!("argv[{}] = {:?}", i, arg);
    }
    trace!("Options parsed from argv:\n{:#?}", opts);

    let generator = create_generator(&opts).unwrap_or_else(|e| {
        error!("Failed to set up meme generation: {}", e);
        exit(exitcode::CONFIG);
    });
    let meme = generator.generate_meme(&opts.request).unwrap_or_else(|e| {
        error!("Error while generating meme: {}", e);
        exit(exitcode::UNAVAILABLE);
    });
    info!("Generated {}x{} meme ({} bytes)",
        meme.dimensions().0, meme.dimensions().1, meme.len());

    match opts.output_path.as_ref() {
        Some(path) => {
            trace!("Opening --output file {}...", path.display());
            let file = fs::OpenOptions::new()
                .create(true).write(true).truncate(true)
                .open(path).unwrap_or_else(|e| {
                    error!("Failed to open output file {} for writing: {}", path.display(), e);
                    exit(exitcode::CANTCREAT);
                });
            debug!("File {} opened successfully", path.display());
            write_output(meme.bytes(), file)
        }
        None => {
            trace!("No --output given, using standard output");
            if isatty::stdout_isatty() {
                warn!("Standard output is a terminal.");
            }
            write_output(meme.bytes(), io::stdout())
        }
    }.unwrap_or_else(|e| {
        error!("Error while writing the meme: {}", e);
        exit(exitcode::IOERR);
    });
}

/// Print an error that may occur while parsing arguments.
fn print_args_error(e: &ArgsError) -> io::Result<()> {
    match *e {
        // Message provided by the clap library already includes the usage string
        // (or it is the help/version text).
        ArgsError::Parse(ref e) => e.print(),
        ref e => writeln!(&mut io::stderr(), "{}: {}", error_label(), e),
    }
}

fn args_exit_code(e: &ArgsError) -> i32 {
    match *e {
        ArgsError::Parse(ref e) if !e.use_stderr() => exitcode::OK,
        ArgsError::Parse(..) => exitcode::USAGE,
        _ => exitcode::CONFIG,
    }
}

/// Label for error messages, colored if it goes to a terminal.
fn error_label() -> String {
    if isatty::stderr_isatty() {
        Colour::Red.bold().paint("error").to_string()
    } else {
        "error".into()
    }
}


/// Create the meme generator configured by command line options.
fn create_generator(opts: &Options) -> Result<MemeGenerator<ImageLoader, FontLoader>, BuildError> {
    let mut builder = GeneratorBuilder::new()
        .options(opts.generator.clone())
        .output_format(opts.format);
    if let Some(ref directory) = opts.font_directory {
        trace!("Loading fonts from {}", directory.display());
        builder = builder.font_directory(directory);
    }
    builder.build()
}

/// Write the finished meme to the output.
fn write_output<W: Write>(bytes: &[u8], mut output: W) -> io::Result<()> {
    trace!("Writing {} bytes to output...", bytes.len());
    output.write_all(bytes)?;
    output.flush()
}

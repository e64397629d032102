//! Module for handling command line arguments.

mod model;
mod parser;


use std::convert::TryFrom;
use std::env;
use std::ffi::OsString;

use super::{NAME, VERSION};
pub use self::model::{ArgsError, Options};
use self::parser::create_parser;


/// Parse command line arguments and return `Options` object.
#[inline]
pub fn parse() -> Result<Options, ArgsError> {
    parse_from_argv(env::args_os())
}

/// Parse application options from given array of arguments
/// (*all* arguments, including binary name).
#[inline]
pub fn parse_from_argv<I, T>(argv: I) -> Result<Options, ArgsError>
    where I: IntoIterator<Item=T>, T: Clone + Into<OsString>
{
    let parser = create_parser();
    let matches = parser.try_get_matches_from(argv)?;
    Options::try_from(matches)
}


#[cfg(test)]
mod tests {
    use std::env;
    use std::fs;
    use std::path::PathBuf;

    use memegen::{FontWeight, OutputFormat, DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE};
    use spectral::prelude::*;

    use super::{parse_from_argv, ArgsError};
    use crate::NAME;

    /// Write a config file with given content to a temporary file.
    fn config_file(name: &str, content: &str) -> PathBuf {
        let path = env::temp_dir()
            .join(format!("memegen-cli-{}-{}.json", name, ::std::process::id()));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn no_args() {
        assert_that!(parse_from_argv(Vec::<&str>::new())).is_err();
        assert_that!(parse_from_argv(vec![*NAME])).is_err();
    }

    #[test]
    fn just_source() {
        let opts = parse_from_argv(vec![*NAME, "cat.png"]).unwrap();
        assert_eq!("cat.png", opts.request.image_source);
        assert_eq!("", opts.request.top_text);
        assert_eq!("", opts.request.bottom_text);
        assert_eq!(0, opts.verbosity);
        assert_eq!(OutputFormat::Png, opts.format);
        assert_that!(opts.output_path).is_none();
        assert_that!(opts.font_directory).is_none();

        let font = opts.generator.font();
        assert_eq!(DEFAULT_FONT_FAMILY, font.family);
        assert_eq!(DEFAULT_FONT_SIZE, font.size);
    }

    #[test]
    fn captions() {
        let opts = parse_from_argv(vec![
            *NAME, "https://example.com/boromir.jpg",
            "-t", "One does not simply", "--bottom", "walk into Mordor"]).unwrap();
        assert_eq!("https://example.com/boromir.jpg", opts.request.image_source);
        assert_eq!("One does not simply", opts.request.top_text);
        assert_eq!("walk into Mordor", opts.request.bottom_text);
    }

    #[test]
    fn canvas_flags() {
        let opts = parse_from_argv(vec![
            *NAME, "cat.png", "--width", "640", "--height", "480"]).unwrap();
        let canvas = opts.generator.canvas();
        assert_eq!(640, canvas.width);
        assert_eq!(480, canvas.height);
    }

    #[test]
    fn canvas_flags_must_be_positive() {
        assert_that!(parse_from_argv(vec![*NAME, "cat.png", "--width", "0"])).is_err();
        assert_that!(parse_from_argv(vec![*NAME, "cat.png", "--height", "-10"])).is_err();
    }

    #[test]
    fn font_flags() {
        let opts = parse_from_argv(vec![
            *NAME, "cat.png", "--font", "comic", "--font-weight", "bold",
            "--font-size", "32", "--line-height", "1.5"]).unwrap();
        let font = opts.generator.font();
        assert_eq!("comic", font.family);
        assert_eq!(Some(FontWeight::Bold), font.weight);
        assert_eq!(32.0, font.size);
        assert_eq!(1.5, font.line_height);
    }

    #[test]
    fn numeric_font_weight() {
        let opts = parse_from_argv(vec![*NAME, "cat.png", "--font-weight", "700"]).unwrap();
        assert_eq!(FontWeight::Bold, opts.generator.font().weight());
    }

    #[test]
    fn invalid_font_flags() {
        assert_that!(parse_from_argv(vec![*NAME, "cat.png", "--font-weight", "heavy"]))
            .is_err();
        assert_that!(parse_from_argv(vec![*NAME, "cat.png", "--font-size", "0"])).is_err();
        assert_that!(parse_from_argv(vec![*NAME, "cat.png", "--line-height", "x"])).is_err();
    }

    #[test]
    fn font_directory() {
        let opts = parse_from_argv(vec![*NAME, "cat.png", "--font-dir", "/usr/share/fonts"])
            .unwrap();
        assert_eq!(Some(PathBuf::from("/usr/share/fonts")), opts.font_directory);
    }

    #[test]
    fn verbosity() {
        assert_eq!(2, parse_from_argv(vec![*NAME, "cat.png", "-vv"]).unwrap().verbosity);
        assert_eq!(-3, parse_from_argv(vec![*NAME, "cat.png", "-q", "-qq"]).unwrap().verbosity);
        assert_that!(parse_from_argv(vec![*NAME, "cat.png", "-v", "-q"])).is_err();
    }

    #[test]
    fn output_path() {
        let opts = parse_from_argv(vec![*NAME, "cat.png", "-o", "meme.png"]).unwrap();
        assert_eq!(Some(PathBuf::from("meme.png")), opts.output_path);
        assert_eq!(OutputFormat::Png, opts.format);

        let opts = parse_from_argv(vec![*NAME, "cat.png", "--output", "-"]).unwrap();
        assert_that!(opts.output_path).is_none();
    }

    #[test]
    fn format_from_output_extension() {
        let opts = parse_from_argv(vec![*NAME, "cat.png", "-o", "meme.JPG"]).unwrap();
        assert_eq!(OutputFormat::jpeg(), opts.format);
    }

    #[test]
    fn explicit_format() {
        let opts = parse_from_argv(vec![
            *NAME, "cat.png", "-o", "meme.jpg", "--format", "png"]).unwrap();
        assert_eq!(OutputFormat::Png, opts.format);

        let opts = parse_from_argv(vec![
            *NAME, "cat.png", "--format", "JPEG", "--jpeg-quality", "70"]).unwrap();
        assert_eq!(OutputFormat::Jpeg(70), opts.format);

        let opts = parse_from_argv(vec![*NAME, "cat.png", "--jpeg-quality", "95"]).unwrap();
        assert_eq!(OutputFormat::Jpeg(95), opts.format);
    }

    #[test]
    fn invalid_format() {
        assert_that!(parse_from_argv(vec![*NAME, "cat.png", "--format", "gif"])).is_err();
        assert_that!(parse_from_argv(vec![*NAME, "cat.png", "--jpeg-quality", "0"])).is_err();
        assert_that!(parse_from_argv(vec![*NAME, "cat.png", "--jpeg-quality", "101"])).is_err();
    }

    #[test]
    fn config_file_with_overrides() {
        let path = config_file("overrides", r#"{
            "canvasOptions": {"canvasWidth": 300},
            "fontOptions": {"fontFamily": "comic", "fontSize": 20}
        }"#);
        let opts = parse_from_argv(vec![
            *NAME, "cat.png", "--config", path.to_str().unwrap(), "--font-size", "30"]).unwrap();

        let canvas = opts.generator.canvas();
        let font = opts.generator.font();
        assert_eq!(300, canvas.width);
        assert_eq!("comic", font.family);
        assert_eq!(30.0, font.size);
    }

    #[test]
    fn config_file_missing() {
        let path = env::temp_dir().join("memegen-cli-surely-missing.json");
        match parse_from_argv(vec![*NAME, "cat.png", "--config", path.to_str().unwrap()]) {
            Err(e @ ArgsError::ConfigFile{..}) => assert!(e.is_config()),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn config_file_invalid() {
        let path = config_file("invalid", r#"{"fontOptions": {"fontWeight": "heavy"}}"#);
        match parse_from_argv(vec![*NAME, "cat.png", "--config", path.to_str().unwrap()]) {
            Err(ArgsError::ConfigJson{..}) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }
}

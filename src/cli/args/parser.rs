//! Module defining the command line argument parser.

use std::convert::TryFrom;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{self, crate_authors, value_parser, Arg, ArgAction, ArgMatches};
use memegen::{CaptionRequest, FontWeight, Options as GeneratorOptions, OutputFormat};

use super::{NAME, VERSION};
use super::model::{ArgsError, Options};


impl TryFrom<ArgMatches> for Options {
    type Error = ArgsError;

    fn try_from(matches: ArgMatches) -> Result<Self, Self::Error> {
        let verbose_count = matches.get_count(OPT_VERBOSE) as isize;
        let quiet_count = matches.get_count(OPT_QUIET) as isize;
        let verbosity = verbose_count - quiet_count;

        let text = |name| matches.get_one::<String>(name).cloned().unwrap_or_default();
        let request = CaptionRequest::new(
            text(OPT_TOP), text(OPT_BOTTOM), text(ARG_SOURCE).trim());

        // Flags take precedence over the config file.
        let mut generator = match matches.get_one::<PathBuf>(OPT_CONFIG) {
            Some(path) => read_config(path)?,
            None => GeneratorOptions::default(),
        };
        let mut canvas = generator.canvas();
        if let Some(&width) = matches.get_one::<u32>(OPT_WIDTH) {
            canvas.width = width;
        }
        if let Some(&height) = matches.get_one::<u32>(OPT_HEIGHT) {
            canvas.height = height;
        }
        let mut font = generator.font();
        if let Some(family) = matches.get_one::<String>(OPT_FONT) {
            font.family = family.trim().to_owned();
        }
        if let Some(&weight) = matches.get_one::<FontWeight>(OPT_FONT_WEIGHT) {
            font.weight = Some(weight);
        }
        if let Some(&size) = matches.get_one::<f32>(OPT_FONT_SIZE) {
            font.size = size;
        }
        if let Some(&line_height) = matches.get_one::<f32>(OPT_LINE_HEIGHT) {
            font.line_height = line_height;
        }
        generator.canvas = Some(canvas);
        generator.font = Some(font);

        let font_directory = matches.get_one::<PathBuf>(OPT_FONT_DIR).cloned();

        // Output path can be set explicit to stdout via `-`.
        let output_path = matches.get_one::<String>(OPT_OUTPUT)
            .map(|p| p.trim())
            .and_then(|p| if p == "-" { None } else { Some(p) })
            .map(PathBuf::from);

        let jpeg_quality = matches.get_one::<u8>(OPT_JPEG_QUALITY).cloned();
        let format_name = matches.get_one::<String>(OPT_FORMAT).map(|f| f.to_lowercase());
        let format = match format_name.as_ref().map(|f| f.as_str()) {
            Some("png") => OutputFormat::Png,
            Some(_) => jpeg_quality.map(OutputFormat::Jpeg).unwrap_or_else(OutputFormat::jpeg),
            None => {
                let jpeg_path = output_path.as_ref().map(|p| is_jpeg_path(p)).unwrap_or(false);
                match jpeg_quality {
                    Some(quality) => OutputFormat::Jpeg(quality),
                    None if jpeg_path => OutputFormat::jpeg(),
                    None => OutputFormat::Png,
                }
            }
        };

        Ok(Options{verbosity, request, generator, font_directory, format, output_path})
    }
}

/// Load generator options from a JSON file.
fn read_config(path: &Path) -> Result<GeneratorOptions, ArgsError> {
    let content = fs::read_to_string(path)
        .map_err(|cause| ArgsError::ConfigFile{path: path.to_owned(), cause})?;
    serde_json::from_str(&content)
        .map_err(|cause| ArgsError::ConfigJson{path: path.to_owned(), cause})
}

/// Whether the file extension of given path says it's a JPEG image.
fn is_jpeg_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg"))
        .unwrap_or(false)
}

fn parse_font_weight(s: &str) -> Result<FontWeight, memegen::UnknownFontWeight> {
    s.parse()
}

fn parse_positive(s: &str) -> Result<f32, String> {
    match s.trim().parse::<f32>() {
        Ok(x) if x.is_finite() && x > 0.0 => Ok(x),
        Ok(x) => Err(format!("{} is not a positive number", x)),
        Err(e) => Err(e.to_string()),
    }
}


// Parser definition

/// Type of the argument parser object
/// (which is called a "Command" in clap's nomenclature).
pub type Parser = clap::Command;


lazy_static! {
    static ref ABOUT: &'static str = option_env!("CARGO_PKG_DESCRIPTION").unwrap_or("");
}

const ARG_SOURCE: &str = "source";
const OPT_TOP: &str = "top";
const OPT_BOTTOM: &str = "bottom";
const OPT_WIDTH: &str = "width";
const OPT_HEIGHT: &str = "height";
const OPT_FONT: &str = "font";
const OPT_FONT_WEIGHT: &str = "font-weight";
const OPT_FONT_SIZE: &str = "font-size";
const OPT_LINE_HEIGHT: &str = "line-height";
const OPT_FONT_DIR: &str = "font-dir";
const OPT_CONFIG: &str = "config";
const OPT_FORMAT: &str = "format";
const OPT_JPEG_QUALITY: &str = "jpeg-quality";
const OPT_OUTPUT: &str = "output";
const OPT_VERBOSE: &str = "verbose";
const OPT_QUIET: &str = "quiet";


/// Create the parser for application's command line.
pub fn create_parser() -> Parser {
    let mut parser = Parser::new(*NAME);
    if let Some(version) = *VERSION {
        parser = parser.version(version);
    }
    parser
        .about(*ABOUT)
        .author(crate_authors!(", "))

        // Image & captions.
        .arg(Arg::new(ARG_SOURCE)
            .value_name("SOURCE")
            .required(true)
            .help("Image to caption")
            .long_help(concat!(
                "Path to the image file to caption, or its URL.\n\n",
                "If SOURCE cannot be read as a local image file, ",
                "it is downloaded over HTTP(S).")))
        .arg(Arg::new(OPT_TOP)
            .long("top").short('t')
            .value_name("TEXT")
            .help("Caption at the top of the image"))
        .arg(Arg::new(OPT_BOTTOM)
            .long("bottom").short('b')
            .value_name("TEXT")
            .help("Caption at the bottom of the image"))

        // Canvas & font flags.
        .arg(Arg::new(OPT_WIDTH)
            .long("width")
            .value_name("PIXELS")
            .value_parser(value_parser!(u32).range(1..))
            .help("Width of the finished image"))
        .arg(Arg::new(OPT_HEIGHT)
            .long("height")
            .value_name("PIXELS")
            .value_parser(value_parser!(u32).range(1..))
            .help("Initial height of the canvas")
            .long_help(concat!(
                "Initial height of the canvas.\n\n",
                "The finished image always keeps the aspect ratio of the source image, ",
                "so its height only depends on --width.")))
        .arg(Arg::new(OPT_FONT)
            .long("font")
            .value_name("FAMILY")
            .help("Font family of the captions"))
        .arg(Arg::new(OPT_FONT_WEIGHT)
            .long("font-weight")
            .value_name("WEIGHT")
            .value_parser(parse_font_weight)
            .help("Font weight of the captions (regular, bold, lighter, bolder)"))
        .arg(Arg::new(OPT_FONT_SIZE)
            .long("font-size")
            .value_name("POINTS")
            .value_parser(parse_positive)
            .help("Initial font size of the captions")
            .long_help(concat!(
                "Initial font size of the captions, in points.\n\n",
                "Captions that don't fit in two lines are rendered smaller.")))
        .arg(Arg::new(OPT_LINE_HEIGHT)
            .long("line-height")
            .value_name("MULTIPLIER")
            .value_parser(parse_positive)
            .help("Line height, relative to the font size"))
        .arg(Arg::new(OPT_FONT_DIR)
            .long("font-dir")
            .value_name("DIR")
            .value_parser(value_parser!(PathBuf))
            .help("Directory to load fonts from"))
        .arg(Arg::new(OPT_CONFIG)
            .long("config")
            .value_name("FILE")
            .value_parser(value_parser!(PathBuf))
            .help("JSON file with canvas & font options")
            .long_help(concat!(
                "JSON file with canvas & font options, e.g.:\n",
                r#"{"canvas": {"width": 600}, "font": {"family": "impact", "size": 32}}"#, "\n\n",
                "Options given as flags take precedence over the ones from this file.")))

        // Output flags.
        .arg(Arg::new(OPT_FORMAT)
            .long("format")
            .value_name("FORMAT")
            .value_parser(["png", "jpeg", "jpg"])
            .ignore_case(true)
            .help("Image format of the output")
            .long_help(concat!(
                "Image format of the output.\n\n",
                "By default, it is JPEG if the output file has a .jpg or .jpeg extension ",
                "or --jpeg-quality is given, and PNG otherwise.")))
        .arg(Arg::new(OPT_JPEG_QUALITY)
            .long("jpeg-quality")
            .value_name("PERCENT")
            .value_parser(value_parser!(u8).range(1..=100))
            .help("Quality of the JPEG output"))
        .arg(Arg::new(OPT_OUTPUT)
            .long("output").short('o')
            .value_name("FILE")
            .help("File to write the finished image to")
            .long_help(concat!(
                "What file should the final image be written to.\n\n",
                "By default, or when this flag is set to `-` (single dash), the image is written ",
                "to standard output so it can be e.g. piped to the ImageMagick `display` program.")))

        // Verbosity flags.
        .arg(Arg::new(OPT_VERBOSE)
            .long("verbose").short('v')
            .action(ArgAction::Count)
            .conflicts_with(OPT_QUIET)
            .help("Increase logging verbosity"))
        .arg(Arg::new(OPT_QUIET)
            .long("quiet").short('q')
            .action(ArgAction::Count)
            .conflicts_with(OPT_VERBOSE)
            .help("Decrease logging verbosity"))
}

//! Module defining the model types.

mod anchor;
mod canvas;
mod color;
mod font;
mod format;
mod options;
mod request;

pub use self::anchor::Anchor;
pub use self::canvas::CanvasConfig;
pub use self::color::Color;
pub use self::font::{FontConfig, FontWeight, FontWeights};
pub use self::format::OutputFormat;
pub use self::options::Options;
pub use self::request::CaptionRequest;

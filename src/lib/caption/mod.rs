//! Module implementing meme generation.

mod error;
mod generator;
mod layout;
mod output;
mod task;



pub use self::error::MemeError;
pub use self::generator::{Builder as GeneratorBuilder, BuildError, Config, MemeGenerator};
pub use self::layout::{fit_caption, wrap_words, LineLayout};
pub use self::output::MemeOutput;

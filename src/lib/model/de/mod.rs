//! Deserializers for data model types.

mod font_weight;

pub use self::font_weight::UnknownFontWeight;

#[cfg(test)]
mod tests;

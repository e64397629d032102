//! Utility module.

pub mod text;

//!
//! memegen  -- Top text, bottom text
//!

#[macro_use] extern crate enum_derive;
             extern crate glob;
             extern crate image;
#[macro_use] extern crate lazy_static;
#[macro_use] extern crate log;
#[macro_use] extern crate macro_attr;
#[macro_use] extern crate maplit;
             extern crate mime;
#[macro_use] extern crate newtype_derive;
             extern crate reqwest;
             extern crate rusttype;
             extern crate serde;
             extern crate thiserror;


#[cfg(test)]              extern crate serde_json;
#[cfg(test)] #[macro_use] extern crate spectral;
#[cfg(test)]              extern crate tiny_http;


mod caption;
mod model;
mod resources;
mod util;

#[cfg(test)]
mod testing;


pub use crate::caption::*;
pub use crate::model::*;
pub use crate::resources::*;
pub use crate::util::text::{points_to_pixels, Coverage, Style, Typeface, VMetrics};

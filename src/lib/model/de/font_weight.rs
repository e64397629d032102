//! Deserializer for the FontWeight type.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserialize, Unexpected, Visitor};
use thiserror::Error;

use super::super::FontWeight;


const EXPECTING_MSG: &str = "font weight name (\"regular\", \"bold\", \"lighter\", \"bolder\") \
                             or numeric weight (400, 700)";


lazy_static! {
    /// Map of recognized weight names to font weights.
    static ref WEIGHT_NAMES: HashMap<&'static str, FontWeight> = hashmap!{
        "regular" => FontWeight::Regular,
        "normal" => FontWeight::Regular,
        "400" => FontWeight::Regular,
        "bold" => FontWeight::Bold,
        "700" => FontWeight::Bold,
        "lighter" => FontWeight::Lighter,
        "bolder" => FontWeight::Bolder,
    };
}


impl<'de> Deserialize<'de> for FontWeight {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where D: de::Deserializer<'de>
    {
        deserializer.deserialize_any(FontWeightVisitor)
    }
}

struct FontWeightVisitor;
impl<'de> Visitor<'de> for FontWeightVisitor {
    type Value = FontWeight;

    fn expecting(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", EXPECTING_MSG)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        FontWeight::from_str(v).map_err(|_| {
            warn!("Failed to parse font weight `{}`", v);
            E::invalid_value(Unexpected::Str(v), &self)
        })
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        match v {
            400 => Ok(FontWeight::Regular),
            700 => Ok(FontWeight::Bold),
            _ => Err(E::invalid_value(Unexpected::Unsigned(v), &self)),
        }
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        if v < 0 {
            return Err(E::invalid_value(Unexpected::Signed(v), &self));
        }
        self.visit_u64(v as u64)
    }
}


/// Error when parsing an unknown font weight name.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown font weight `{0}`")]
pub struct UnknownFontWeight(pub String);

impl FromStr for FontWeight {
    type Err = UnknownFontWeight;

    fn from_str(v: &str) -> Result<Self, Self::Err> {
        let key = v.trim().to_lowercase();
        WEIGHT_NAMES.get(key.as_str()).cloned()
            .ok_or_else(|| UnknownFontWeight(v.to_owned()))
    }
}

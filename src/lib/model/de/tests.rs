//! Tests for deserializing the configuration & request types from JSON.

use std::str::FromStr;

use serde_json::{self, from_str as from_json};
use spectral::prelude::*;

use crate::model::{CanvasConfig, CaptionRequest, FontConfig, FontWeight, Options};


#[test]
fn font_weight_names() {
    assert_eq!(FontWeight::Bold, FontWeight::from_str("bold").unwrap());
    assert_eq!(FontWeight::Bold, FontWeight::from_str(" BOLD ").unwrap());
    assert_eq!(FontWeight::Regular, FontWeight::from_str("normal").unwrap());
    assert_eq!(FontWeight::Lighter, FontWeight::from_str("lighter").unwrap());
    assert_eq!(FontWeight::Bolder, FontWeight::from_str("Bolder").unwrap());
    assert_that!(FontWeight::from_str("heavy")).is_err();
}

#[test]
fn font_weight_round_trips_through_name() {
    for weight in FontWeight::iter_variants() {
        assert_eq!(weight, FontWeight::from_str(weight.as_str()).unwrap());
    }
}

#[test]
fn font_weight_numeric() {
    assert_that!(from_json::<FontWeight>("700")).is_ok().is_equal_to(FontWeight::Bold);
    assert_that!(from_json::<FontWeight>("400")).is_ok().is_equal_to(FontWeight::Regular);
    assert_that!(from_json::<FontWeight>("\"700\"")).is_ok().is_equal_to(FontWeight::Bold);
    assert_that!(from_json::<FontWeight>("550")).is_err();
    assert_that!(from_json::<FontWeight>("-1")).is_err();
}

#[test]
fn empty_options() {
    let opts: Options = from_json("{}").unwrap();
    assert_eq!(Options::default(), opts);
    assert_eq!(CanvasConfig::default(), opts.canvas());
    assert_eq!(FontConfig::default(), opts.font());
}

#[test]
fn partial_canvas_options() {
    let opts: Options = from_json(r#"{"canvas": {"width": 800}}"#).unwrap();
    assert_eq!(CanvasConfig::new(800, 500), opts.canvas());
    assert_that!(opts.font).is_none();
}

#[test]
fn camel_case_options() {
    let input = r#"{
        "canvasOptions": {"canvasWidth": 640, "canvasHeight": 480},
        "fontOptions": {
            "fontFamily": "anton",
            "fontSize": 32,
            "fontWeight": "bold",
            "lineHeight": 1.5
        }
    }"#;
    let opts: Options = from_json(input).unwrap();
    assert_eq!(CanvasConfig::new(640, 480), opts.canvas());
    assert_eq!(FontConfig{
        family: "anton".into(),
        weight: Some(FontWeight::Bold),
        size: 32.0,
        line_height: 1.5,
    }, opts.font());
}

#[test]
fn invalid_weight_is_an_error() {
    let input = r#"{"font": {"weight": "extra-heavy"}}"#;
    assert_that!(from_json::<Options>(input)).is_err();
}

#[test]
fn caption_request() {
    let input = r#"{"topText": "one does not simply", "url": "http://example.com/a.png"}"#;
    let request: CaptionRequest = from_json(input).unwrap();
    assert_eq!(CaptionRequest::new("one does not simply", "", "http://example.com/a.png"),
        request);
    assert!(request.has_text());
}

#[test]
fn caption_request_snake_case() {
    let input = json_request("", "   ", "cat.jpg");
    let request: CaptionRequest = from_json(&input).unwrap();
    assert_eq!("cat.jpg", request.image_source);
    assert!(!request.has_text());
}


fn json_request(top: &str, bottom: &str, source: &str) -> String {
    serde_json::json!({
        "top_text": top,
        "bottom_text": bottom,
        "image_source": source,
    }).to_string()
}

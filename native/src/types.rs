use napi_derive::napi;
use serde::{Deserialize, Serialize};

/// A color with both representations materialized.
///
/// `r`, `g`, `b` are 0-255, `h` is degrees, `s`, `l` and `a` are 0-100.
/// Alpha is shared by both representations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub a: f64,
}

/// The three normalized CSS serializations of a color.
#[napi(object)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CssColors {
    /// `#rrggbb` or `#rrggbbaa`
    pub hex: String,
    /// `rgb(r g b)` or `rgb(r g b / a%)`
    pub rgb: String,
    /// `hsl(hdeg s% l%)` or `hsl(hdeg s% l% / a%)`
    pub hsl: String,
}

/// Batch input passed from JS to Rust
#[napi(object)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchOptions {
    pub inputs: Vec<String>,
}

/// Per-input outcome of a batch parse. Exactly one of `colors` / `error` is set.
#[napi(object)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorParseResult {
    pub input: String,
    pub colors: Option<CssColors>,
    pub error: Option<String>,
}

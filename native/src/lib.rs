#[macro_use]
extern crate napi_derive;

pub mod engine;
pub mod error;
pub mod format;
pub mod math;
pub mod parser;
pub mod types;

pub use error::ColorError;
pub use parser::parse_css_color;
pub use types::{BatchOptions, Color, ColorParseResult, CssColors};

#[napi]
pub fn health_check() -> String {
    "css-color-native ok".to_string()
}

/// Convert a CSS color (hex, rgb, hsl) to all three formats.
/// Throws with the parser's message on malformed input.
#[napi(js_name = "parseCssColor")]
pub fn parse_css_color_js(text: String) -> napi::Result<CssColors> {
    Ok(parser::parse_css_color(&text)?)
}

/// Convert a list of CSS colors in parallel, one result per input.
#[napi(js_name = "parseCssColors")]
pub fn parse_css_colors_js(options: BatchOptions) -> Vec<ColorParseResult> {
    engine::parse_css_colors(&options)
}

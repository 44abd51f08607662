pub mod scanner;
pub mod number;
pub mod hex;
pub mod function;

use crate::error::ColorError;
use crate::format::format_color;
use crate::math::convert::{get_hsl, get_rgb};
use crate::types::{Color, CssColors};
use function::{match_hsl, match_rgb, FunctionTokens};
use hex::{match_hex, HexChannels};
use number::parse_number;

/// Alpha when the token is omitted.
const DEFAULT_ALPHA: &str = "100%";

/// Parse a CSS color and render it as hex, `rgb()` and `hsl()`.
///
/// Accepted inputs, after trimming:
/// - `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
/// - `rgb()` / `rgba()` with space or comma separated channels, optional alpha after `/` or `,`
/// - `hsl()` / `hsla()` with an optional `deg` hue unit, same separators
///
/// Grammars are tried in that order; anything else is `UnhandledFormat`.
pub fn parse_css_color(text: &str) -> Result<CssColors, ColorError> {
    let text = scanner::trim_css(text);

    let color = if let Some(channels) = match_hex(text) {
        color_from_hex(channels)?
    } else if let Some(tokens) = match_rgb(text) {
        color_from_rgb(text, tokens)?
    } else if let Some(tokens) = match_hsl(text) {
        color_from_hsl(tokens)?
    } else {
        return Err(ColorError::UnhandledFormat(text.to_string()));
    };

    Ok(format_color(&color))
}

fn color_from_hex(HexChannels { r, g, b, alpha }: HexChannels) -> Result<Color, ColorError> {
    let a = match alpha {
        Some(byte) => f64::from(byte) / 2.55,
        None => 100.0,
    };
    get_hsl(f64::from(r), f64::from(g), f64::from(b), a)
}

fn color_from_rgb(text: &str, tokens: FunctionTokens<'_>) -> Result<Color, ColorError> {
    let mut rgb = [0.0; 3];
    for (slot, token) in rgb.iter_mut().zip(tokens.channels) {
        let raw = parse_number(token)?;
        *slot = if raw.is_percent {
            255.0 * (raw.value / 100.0)
        } else {
            raw.value
        };
    }
    let a = parse_alpha(tokens.alpha)?;

    // Legacy values above a byte are rejected, not clamped
    if rgb.iter().any(|&channel| channel > 255.0) {
        return Err(ColorError::UnhandledFormat(text.to_string()));
    }

    let [r, g, b] = rgb;
    get_hsl(r, g, b, a)
}

fn color_from_hsl(tokens: FunctionTokens<'_>) -> Result<Color, ColorError> {
    let [h, s, l] = tokens.channels;
    let h = parse_number(h)?.value;
    let s = parse_number(s)?.value;
    let l = parse_number(l)?.value;
    let a = parse_alpha(tokens.alpha)?;
    get_rgb(h, s, l, a)
}

/// Percent alpha is used as-is, a plain number is on the 0-1 scale.
fn parse_alpha(token: Option<&str>) -> Result<f64, ColorError> {
    let raw = parse_number(token.unwrap_or(DEFAULT_ALPHA))?;
    Ok(if raw.is_percent { raw.value } else { raw.value * 100.0 })
}

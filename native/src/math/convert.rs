use crate::error::ColorError;
use crate::types::Color;

/// Round to the nearest integer, ties toward positive infinity (`-2.5` -> `-2`).
pub fn round_half_up(x: f64) -> f64 {
    let rounded = x.round();
    if x - rounded == 0.5 {
        rounded + 1.0
    } else {
        rounded
    }
}

fn check_alpha(a: f64) -> Result<(), ColorError> {
    if a > 100.0 {
        return Err(ColorError::InvalidAlpha(a));
    }
    Ok(())
}

/// Derive HSL from RGB channels (0-255) and alpha (0-100).
///
/// Hue is whole degrees, saturation and lightness whole percents. Achromatic
/// input gets hue 0 and saturation 0. The RGB channels pass through untouched.
pub fn get_hsl(r: f64, g: f64, b: f64, a: f64) -> Result<Color, ColorError> {
    check_alpha(a)?;

    let r_pct = r / 255.0;
    let g_pct = g / 255.0;
    let b_pct = b / 255.0;

    let max = r_pct.max(g_pct).max(b_pct);
    let min = r_pct.min(g_pct).min(b_pct);
    let delta = max - min;

    let mut h = 0.0;
    let mut s = 0.0;
    let l = (max + min) / 2.0;

    if delta != 0.0 {
        s = delta / (1.0 - (2.0 * l - 1.0).abs());

        h = if max == r_pct {
            ((g_pct - b_pct) / delta) % 6.0
        } else if max == g_pct {
            (b_pct - r_pct) / delta + 2.0
        } else {
            (r_pct - g_pct) / delta + 4.0
        };

        h = round_half_up(h * 60.0);
        if h < 0.0 {
            h += 360.0;
        }
    }

    Ok(Color {
        r,
        g,
        b,
        h,
        s: round_half_up(s * 100.0),
        l: round_half_up(l * 100.0),
        a,
    })
}

/// Derive RGB from hue (degrees), saturation and lightness (0-100) and alpha (0-100).
///
/// Hues outside `[0, 300)` all land in the magenta-red sector. Channels are
/// rounded to whole bytes but not clamped.
pub fn get_rgb(h: f64, s: f64, l: f64, a: f64) -> Result<Color, ColorError> {
    check_alpha(a)?;

    let s_dec = s / 100.0;
    let l_dec = l / 100.0;

    let chroma = (1.0 - (2.0 * l_dec - 1.0).abs()) * s_dec;
    let x = chroma * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l_dec - chroma / 2.0;

    let (r, g, b) = if (0.0..60.0).contains(&h) {
        (chroma, x, 0.0)
    } else if (60.0..120.0).contains(&h) {
        (x, chroma, 0.0)
    } else if (120.0..180.0).contains(&h) {
        (0.0, chroma, x)
    } else if (180.0..240.0).contains(&h) {
        (0.0, x, chroma)
    } else if (240.0..300.0).contains(&h) {
        (x, 0.0, chroma)
    } else {
        (chroma, 0.0, x)
    };

    let to_byte = |channel: f64| round_half_up((channel + m) * 255.0);

    Ok(Color {
        r: to_byte(r),
        g: to_byte(g),
        b: to_byte(b),
        h,
        s,
        l,
        a,
    })
}

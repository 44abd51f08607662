use crate::math::convert::round_half_up;
use crate::types::{Color, CssColors};

const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Three fixed decimals, exact ties rounded away from zero (`0.0625` -> `0.063`).
///
/// `{:.3}` rounds exact ties to even. A double sits exactly halfway between
/// two thousandths only when it is an odd number of sixteenths, so those are
/// rounded by hand in integer thousandths.
fn to_fixed_3(n: f64) -> String {
    let sixteenths = n.abs() * 16.0;
    if sixteenths.fract() == 0.0 && sixteenths % 2.0 == 1.0 && sixteenths < MAX_SAFE_INTEGER {
        let thousandths = (sixteenths as u64 * 625 + 5) / 10;
        let sign = if n < 0.0 { "-" } else { "" };
        return format!("{sign}{}.{:03}", thousandths / 1000, thousandths % 1000);
    }
    format!("{n:.3}")
}

/// Round to at most 3 decimals and drop trailing zeros (`66.667`, `255`).
pub fn fancy(n: f64) -> String {
    let fixed = to_fixed_3(n);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// `fancy(n)` followed by `%`.
pub fn pct(n: f64) -> String {
    format!("{}%", fancy(n))
}

/// Floor `n` and render it as lowercase hex, left-padded with `0` to two digits.
///
/// Values outside 0-255 are not clamped: `382` renders as `17e`, `-128` as `-80`.
pub fn hex_byte(n: f64) -> String {
    let v = n.floor() as i64;
    let digits = if v < 0 {
        format!("-{:x}", v.unsigned_abs())
    } else {
        format!("{v:x}")
    };
    format!("{digits:0>2}")
}

/// Render a color as hex, `rgb()` and `hsl()`.
///
/// Alpha of exactly 100 is omitted from all three forms.
pub fn format_color(color: &Color) -> CssColors {
    let Color { r, g, b, h, s, l, a } = *color;

    let hex = format!("#{}{}{}", hex_byte(r), hex_byte(g), hex_byte(b));
    let rgb = format!("{} {} {}", fancy(r), fancy(g), fancy(b));
    let hsl = format!("{}deg {} {}", fancy(h), pct(s), pct(l));

    if a == 100.0 {
        CssColors {
            hex,
            rgb: format!("rgb({rgb})"),
            hsl: format!("hsl({hsl})"),
        }
    } else {
        let alpha_byte = round_half_up(255.0 * (a / 100.0));
        CssColors {
            hex: format!("{hex}{}", hex_byte(alpha_byte)),
            rgb: format!("rgb({rgb} / {})", pct(a)),
            hsl: format!("hsl({hsl} / {})", pct(a)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color(r: f64, g: f64, b: f64, h: f64, s: f64, l: f64, a: f64) -> Color {
        Color { r, g, b, h, s, l, a }
    }

    #[test]
    fn fancy_drops_trailing_zeros() {
        assert_eq!(fancy(255.0), "255");
        assert_eq!(fancy(66.6667), "66.667");
        assert_eq!(fancy(20.000000000000004), "20");
        assert_eq!(fancy(127.5), "127.5");
        assert_eq!(fancy(0.1 + 0.2), "0.3");
    }

    #[test]
    fn fancy_never_prints_negative_zero() {
        assert_eq!(fancy(-0.0), "0");
        assert_eq!(fancy(-0.0001), "0");
    }

    #[test]
    fn fancy_rounds_exact_ties_up() {
        assert_eq!(fancy(10.0625), "10.063");
        assert_eq!(fancy(0.3125), "0.313");
        assert_eq!(fancy(0.1875), "0.188");
        assert_eq!(fancy(-0.0625), "-0.063");
        // exact thousandths and non-ties are untouched
        assert_eq!(fancy(0.125), "0.125");
        assert_eq!(fancy(0.0626), "0.063");
        assert_eq!(fancy(0.0624), "0.062");
    }

    #[test]
    fn pct_appends_percent() {
        assert_eq!(pct(0.0625), "0.063%");
        assert_eq!(pct(100.0), "100%");
        assert_eq!(pct(170.0 / 2.55), "66.667%");
    }

    #[test]
    fn hex_byte_pads_and_floors() {
        assert_eq!(hex_byte(0.0), "00");
        assert_eq!(hex_byte(10.0), "0a");
        assert_eq!(hex_byte(255.0), "ff");
        assert_eq!(hex_byte(127.5), "7f");
    }

    #[test]
    fn hex_byte_out_of_gamut_is_not_clamped() {
        assert_eq!(hex_byte(382.0), "17e");
        assert_eq!(hex_byte(-128.0), "-80");
        assert_eq!(hex_byte(-1.0), "-1");
    }

    #[test]
    fn opaque_omits_alpha() {
        let out = format_color(&color(215.0, 72.0, 148.0, 328.0, 64.0, 56.0, 100.0));
        assert_eq!(
            out,
            CssColors {
                hex: "#d74894".to_string(),
                rgb: "rgb(215 72 148)".to_string(),
                hsl: "hsl(328deg 64% 56%)".to_string(),
            }
        );
    }

    #[test]
    fn translucent_appends_alpha() {
        let out = format_color(&color(215.0, 72.0, 148.0, 328.0, 64.0, 56.0, 20.0));
        assert_eq!(out.hex, "#d7489433");
        assert_eq!(out.rgb, "rgb(215 72 148 / 20%)");
        assert_eq!(out.hsl, "hsl(328deg 64% 56% / 20%)");
    }

    #[test]
    fn alpha_just_below_100_is_kept() {
        let out = format_color(&color(0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 99.9));
        assert_eq!(out.rgb, "rgb(0 0 0 / 99.9%)");
        assert_eq!(out.hex, "#000000ff");
    }

    #[test]
    fn zero_alpha() {
        let out = format_color(&color(0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0));
        assert_eq!(out.hex, "#00000000");
        assert_eq!(out.hsl, "hsl(0deg 0% 0% / 0%)");
    }
}

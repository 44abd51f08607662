use crate::error::ColorError;

/// A channel value as written, before any rescaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawToken {
    pub is_percent: bool,
    pub value: f64,
}

/// Parse a channel token (`"255"`, `"66.667%"`, `"0.5"`).
///
/// A trailing `%` sets `is_percent`. The longest leading decimal literal of
/// the remainder is used, so `"1.2.3"` reads as `1.2`. Fails if there is no
/// such literal or it overflows to infinity.
pub fn parse_number(token: &str) -> Result<RawToken, ColorError> {
    let (is_percent, digits) = match token.strip_suffix('%') {
        Some(rest) => (true, rest),
        None => (false, token),
    };

    let literal = decimal_prefix(digits);
    let value: f64 = literal
        .parse()
        .map_err(|_| ColorError::InvalidNumber(token.to_string()))?;
    if !value.is_finite() {
        return Err(ColorError::InvalidNumber(token.to_string()));
    }

    Ok(RawToken { is_percent, value })
}

/// Longest prefix of the form `\d*(\.\d*)?` with at least one digit.
/// Returns an empty slice when there is none.
fn decimal_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let len = bytes.len();

    let mut i = 0;
    while i < len && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i;

    if i < len && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        digits += j - frac_start;
        i = j;
    }

    if digits == 0 {
        return "";
    }
    &s[..i]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_integer() {
        assert_eq!(
            parse_number("255"),
            Ok(RawToken { is_percent: false, value: 255.0 })
        );
    }

    #[test]
    fn percentage() {
        assert_eq!(
            parse_number("66.667%"),
            Ok(RawToken { is_percent: true, value: 66.667 })
        );
    }

    #[test]
    fn fraction_without_leading_zero() {
        assert_eq!(parse_number(".5").map(|t| t.value), Ok(0.5));
        assert_eq!(parse_number("1.").map(|t| t.value), Ok(1.0));
    }

    #[test]
    fn extra_dots_are_ignored_after_first_literal() {
        assert_eq!(parse_number("1.2.3").map(|t| t.value), Ok(1.2));
        assert_eq!(parse_number("10.5.%"), Ok(RawToken { is_percent: true, value: 10.5 }));
    }

    #[test]
    fn lone_dot_is_invalid() {
        assert_eq!(
            parse_number("."),
            Err(ColorError::InvalidNumber(".".to_string()))
        );
        assert_eq!(
            parse_number("..%"),
            Err(ColorError::InvalidNumber("..%".to_string()))
        );
    }

    #[test]
    fn empty_is_invalid() {
        assert!(parse_number("").is_err());
        assert!(parse_number("%").is_err());
    }

    #[test]
    fn overflow_is_invalid() {
        let huge = "9".repeat(400);
        assert_eq!(parse_number(&huge), Err(ColorError::InvalidNumber(huge.clone())));
    }

    #[test]
    fn literal_stops_at_first_non_digit() {
        assert_eq!(parse_number("1e2").map(|t| t.value), Ok(1.0));
        assert!(parse_number("-1").is_err());
    }
}

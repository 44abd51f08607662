/// Channels decoded from a hex color. `alpha` is the raw byte when present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexChannels {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: Option<u8>,
}

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Match `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA` (any case).
///
/// Shorthand digits are duplicated (`f` -> `ff`). Any other length, or a
/// non-hex digit, is not a match.
pub fn match_hex(text: &str) -> Option<HexChannels> {
    let digits = text.strip_prefix('#')?;
    let nibbles: Vec<u8> = digits.bytes().map(nibble).collect::<Option<_>>()?;

    let bytes: Vec<u8> = match nibbles.len() {
        3 | 4 => nibbles.iter().map(|n| n * 17).collect(),
        6 | 8 => nibbles.chunks(2).map(|pair| pair[0] << 4 | pair[1]).collect(),
        _ => return None,
    };

    Some(HexChannels {
        r: bytes[0],
        g: bytes[1],
        b: bytes[2],
        alpha: bytes.get(3).copied(),
    })
}

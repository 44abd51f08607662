use super::scanner::Cursor;

/// Raw tokens destructured from an `rgb()` or `hsl()` body.
///
/// `channels` keep their `%` suffix; the hue token of `hsl()` has its `deg`
/// unit already stripped. `alpha` is `None` when the fourth token is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionTokens<'a> {
    pub channels: [&'a str; 3],
    pub alpha: Option<&'a str>,
}

/// `^rgba?\(\s*(NUM)\s*[, ]\s*(NUM)\s*[, ]\s*(NUM)(?:\s*[,/]\s*(NUM))?\s*\)$`, case-insensitive.
pub fn match_rgb(text: &str) -> Option<FunctionTokens<'_>> {
    let mut cursor = Cursor::new(text);
    open(&mut cursor, "rgb")?;
    let first = cursor.take_number(true)?;
    finish(cursor, first)
}

/// `^hsla?\(\s*([\d.]+)(?:deg)?\s*[, ]\s*(NUM)\s*[, ]\s*(NUM)(?:\s*[,/]\s*(NUM))?\s*\)$`, case-insensitive.
pub fn match_hsl(text: &str) -> Option<FunctionTokens<'_>> {
    let mut cursor = Cursor::new(text);
    open(&mut cursor, "hsl")?;
    let hue = cursor.take_number(false)?;
    cursor.eat_ci("deg");
    finish(cursor, hue)
}

/// `name a? ( \s*`
fn open(cursor: &mut Cursor<'_>, name: &str) -> Option<()> {
    if !cursor.eat_ci(name) {
        return None;
    }
    cursor.eat_ci("a");
    if !cursor.eat(b'(') {
        return None;
    }
    cursor.skip_spaces();
    Some(())
}

/// Everything after the first channel token: two more channels, the optional
/// alpha, then `\s*\)` at end of input.
fn finish<'a>(mut cursor: Cursor<'a>, first: &'a str) -> Option<FunctionTokens<'a>> {
    if !cursor.separator(b", ") {
        return None;
    }
    let second = cursor.take_number(true)?;
    if !cursor.separator(b", ") {
        return None;
    }
    let third = cursor.take_number(true)?;

    let before_alpha = cursor.pos();
    let alpha = if cursor.separator(b",/") {
        let token = cursor.take_number(true);
        if token.is_none() {
            cursor.reset(before_alpha);
        }
        token
    } else {
        None
    };

    cursor.skip_spaces();
    if !cursor.eat(b')') || !cursor.is_at_end() {
        return None;
    }

    Some(FunctionTokens {
        channels: [first, second, third],
        alpha,
    })
}

/// ECMAScript `\s`: Unicode White_Space without U+0085, plus U+FEFF.
/// Used for both trimming and the in-function separators.
pub fn is_css_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Trim leading and trailing whitespace the same way `String.prototype.trim` does.
pub fn trim_css(text: &str) -> &str {
    text.trim_matches(is_css_space)
}

/// Forward-only cursor over a color function body.
///
/// Each method either consumes what it recognizes and returns success, or
/// leaves the position untouched. Callers that need to undo a partial
/// match save `pos()` and `reset()` to it.
pub struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn reset(&mut self, pos: usize) {
        self.pos = pos;
    }

    pub fn is_at_end(&self) -> bool {
        self.pos == self.src.len()
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    /// `\s*`
    pub fn skip_spaces(&mut self) {
        let rest = self.rest();
        let trimmed = rest.trim_start_matches(is_css_space);
        self.pos += rest.len() - trimmed.len();
    }

    /// Consume `word` ignoring ASCII case.
    pub fn eat_ci(&mut self, word: &str) -> bool {
        let rest = self.rest().as_bytes();
        if rest.len() >= word.len() && rest[..word.len()].eq_ignore_ascii_case(word.as_bytes()) {
            self.pos += word.len();
            true
        } else {
            false
        }
    }

    /// Consume a single ASCII byte.
    pub fn eat(&mut self, byte: u8) -> bool {
        if self.rest().as_bytes().first() == Some(&byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// `[\d.]+`, plus a trailing `%` when `allow_percent`.
    pub fn take_number(&mut self, allow_percent: bool) -> Option<&'a str> {
        let bytes = self.rest().as_bytes();
        let mut end = bytes
            .iter()
            .take_while(|b| b.is_ascii_digit() || **b == b'.')
            .count();
        if end == 0 {
            return None;
        }
        if allow_percent && bytes.get(end) == Some(&b'%') {
            end += 1;
        }
        let token = &self.rest()[..end];
        self.pos += end;
        Some(token)
    }

    /// `\s*[<delims>]\s*` where the next token cannot start with whitespace.
    ///
    /// Regex backtracking lets a plain space in the leading run stand in for
    /// the delimiter when `' '` is one of `delims`, so `"1 \t 2"` still matches
    /// `\s*[, ]\s*` while `"1\t2"` does not.
    pub fn separator(&mut self, delims: &[u8]) -> bool {
        let start = self.pos;
        self.skip_spaces();
        let run = &self.src[start..self.pos];

        if let Some(&next) = self.rest().as_bytes().first() {
            if delims.contains(&next) {
                self.pos += 1;
                self.skip_spaces();
                return true;
            }
        }

        if delims.contains(&b' ') && run.contains(' ') {
            return true;
        }

        self.pos = start;
        false
    }
}

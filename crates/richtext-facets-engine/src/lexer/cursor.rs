/// A byte cursor over the tokenizer input.
///
/// Positions are byte offsets into `s`. Callers only stop on ASCII
/// delimiters, so every position they record is a char boundary.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    pub fn pos(&self) -> usize {
        self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s
            .as_bytes()
            .get(self.i..)
            .is_some_and(|rest| rest.starts_with(pat))
    }

    /// True at offset 0 or directly after a `\n`.
    pub fn at_line_start(&self) -> bool {
        self.i == 0 || self.s.as_bytes().get(self.i - 1) == Some(&b'\n')
    }

    /// Byte offset of the next occurrence of `pat` at or after the cursor.
    pub fn find(&self, pat: &[u8]) -> Option<usize> {
        let rest = self.s.as_bytes().get(self.i..)?;
        if pat.is_empty() {
            return Some(self.i);
        }
        rest.windows(pat.len())
            .position(|w| w == pat)
            .map(|off| self.i + off)
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Advances while `pred` holds for the current byte.
    pub fn bump_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.i += 1;
        }
    }
}

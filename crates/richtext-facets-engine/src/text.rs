use crate::span::Span;

/// A UTF-8 string addressed by byte offset.
///
/// Every other component slices through this type so that offsets are always
/// UTF-8 byte positions, never char or UTF-16 indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteText<'a> {
    text: &'a str,
}

impl<'a> ByteText<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// Byte length of the UTF-8 encoding (not the character count).
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn as_str(&self) -> &'a str {
        self.text
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.text.as_bytes()
    }

    /// True if `pos` is `len()` or falls on the first byte of a code point.
    pub fn is_char_boundary(&self, pos: usize) -> bool {
        self.text.is_char_boundary(pos)
    }

    /// Returns exactly the bytes `[start, end)` as a string.
    ///
    /// Callers pass offsets on code-point boundaries. Offsets that are out of
    /// range or split a multi-byte sequence yield the empty string.
    pub fn slice_by_bytes(&self, start: usize, end: usize) -> &'a str {
        self.text.get(start..end).unwrap_or_default()
    }

    pub fn slice(&self, sp: Span) -> &'a str {
        self.slice_by_bytes(sp.start, sp.end)
    }
}

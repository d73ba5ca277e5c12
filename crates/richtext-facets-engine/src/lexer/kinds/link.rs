pub struct Link;

impl Link {
    pub const TEXT_OPEN: u8 = b'[';
    pub const TEXT_CLOSE: u8 = b']';
    pub const URI_OPEN: u8 = b'(';
    pub const URI_CLOSE: u8 = b')';

    /// Writes `[text](uri)`.
    pub fn render(out: &mut String, text: &str, uri: &str) {
        out.push(char::from(Self::TEXT_OPEN));
        out.push_str(text);
        out.push(char::from(Self::TEXT_CLOSE));
        out.push(char::from(Self::URI_OPEN));
        out.push_str(uri);
        out.push(char::from(Self::URI_CLOSE));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_link() {
        let mut out = String::new();
        Link::render(&mut out, "docs", "https://example.com");
        assert_eq!(out, "[docs](https://example.com)");
    }
}

/// Fenced code block delimiters.
///
/// A fence is three backticks at the start of the input or of a line. The
/// rest of the opening line is an optional info string. The block closes at
/// the next line that starts with a fence.
pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";
    /// A newline followed by a fence: the closing delimiter.
    pub const CLOSE: &'static str = "\n```";

    /// Writes a complete fenced block around `body`.
    pub fn render(out: &mut String, body: &str, lang: Option<&str>) {
        out.push_str(Self::FENCE);
        if let Some(lang) = lang {
            out.push_str(lang);
        }
        out.push('\n');
        out.push_str(body);
        out.push_str(Self::CLOSE);
    }
}

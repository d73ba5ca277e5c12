/// Inline code span delimiter.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick that opens and closes inline code.
    pub const TICK: &'static str = "`";
}

/// Bold and italic delimiters.
///
/// Both use `*`; the tokenizer tries `BOLD` first so `**` is never split into
/// two italic markers.
pub struct Emphasis;

impl Emphasis {
    pub const BOLD: &'static str = "**";
    pub const ITALIC: &'static str = "*";
}

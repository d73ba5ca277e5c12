/// `@handle.domain` mentions.
pub struct Mention;

impl Mention {
    pub const SIGIL: u8 = b'@';
    pub const SEPARATOR: u8 = b'.';

    /// Bytes that may appear in a handle: ASCII letters, digits, `-` and `.`.
    pub fn is_handle_byte(b: u8) -> bool {
        b.is_ascii_alphanumeric() || b == b'-' || b == Self::SEPARATOR
    }

    /// A handle needs at least two dot-separated segments, may not start or
    /// end with `.` or `-`, and may not contain `..`.
    pub fn is_valid_handle(handle: &str) -> bool {
        let bytes = handle.as_bytes();
        let (Some(&first), Some(&last)) = (bytes.first(), bytes.last()) else {
            return false;
        };
        let edge_ok = |b: u8| b != Self::SEPARATOR && b != b'-';

        bytes.iter().all(|&b| Self::is_handle_byte(b))
            && edge_ok(first)
            && edge_ok(last)
            && bytes.contains(&Self::SEPARATOR)
            && !handle.contains("..")
    }
}

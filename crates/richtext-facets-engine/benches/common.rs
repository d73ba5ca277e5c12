// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markup(size: usize) -> String {
    let base = "Some **bold** and *italic* text with `code`, a [link](https://example.com) and @alice.bsky.social 🔥 日本語\n```rust\nfn example() {}\n```\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_unpaired_markers(size: usize) -> String {
    "**a *b `c [d](e @f.".repeat(size)
}

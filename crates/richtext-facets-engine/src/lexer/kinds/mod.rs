//! # Markup Kinds
//!
//! Types that own their syntax delimiters. The tokenizer and serializer call
//! these constants; they never hardcode `**`, `` ` `` or `[`.
//!
//! - **`Emphasis`**: `BOLD = "**"`, `ITALIC = "*"`
//! - **`CodeSpan`**: single backtick, no nesting
//! - **`CodeFence`**: three-backtick fences at line start
//! - **`Link`**: `[text](uri)` brackets
//! - **`Mention`**: `@` sigil and handle grammar

pub mod code_fence;
pub mod code_span;
pub mod emphasis;
pub mod link;
pub mod mention;

pub use code_fence::CodeFence;
pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use link::Link;
pub use mention::Mention;

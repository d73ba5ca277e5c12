//! # richtext-facets-engine
//!
//! Converts between lightweight inline markup and plain text annotated with
//! byte-range facets.
//!
//! ```text
//! encode("hello **world**") -> { text: "hello world", facets: [6..11 bold] }
//! decode("hello world", [6..11 bold]) -> "hello **world**"
//! ```
//!
//! Offsets are UTF-8 byte positions. Both directions are pure functions that
//! never fail: malformed markup degrades to literal text, malformed facets are
//! dropped.
//!
//! ## Modules
//!
//! - **`text`**: `ByteText`, byte-offset slicing
//! - **`lexer`**: tokenizer producing a flat token stream
//! - **`parser`**: per-kind marker pairing and facet emission
//! - **`serializer`**: facets back to markup
//! - **`segment`**: boundary segmentation for renderers
//! - **`model`**: wire types (`Facet`, `ByteSlice`, `FormatFeature`)

pub mod lexer;
pub mod mention;
pub mod model;
pub mod parser;
pub mod segment;
pub mod serializer;
pub mod span;
pub mod text;

#[cfg(test)]
mod tests;

pub use mention::{HandleAsId, MentionResolver};
pub use model::{ByteSlice, Facet, FacetError, FormatFeature, RichText};
pub use segment::{Segment, segments};
pub use serializer::decode;
pub use span::Span;
pub use text::ByteText;

/// Encodes markup into plain text and facets, using each mention's handle as
/// its identity.
pub fn encode(input: &str) -> RichText {
    encode_with(input, &HandleAsId)
}

/// Encodes markup, resolving mention identities through `resolver`.
pub fn encode_with<R>(input: &str, resolver: &R) -> RichText
where
    R: MentionResolver + ?Sized,
{
    let tokens = lexer::tokenize(input);
    parser::parse_tokens(input, &tokens, resolver)
}

use crate::{
    lexer::kinds::{CodeSpan, Emphasis},
    model::FormatFeature,
    span::Span,
};

/// The three paired marker types. Each is matched independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    Bold,
    Italic,
    Code,
}

impl MarkerKind {
    pub const ALL: [MarkerKind; 3] = [MarkerKind::Bold, MarkerKind::Italic, MarkerKind::Code];

    pub fn delimiter(self) -> &'static str {
        match self {
            MarkerKind::Bold => Emphasis::BOLD,
            MarkerKind::Italic => Emphasis::ITALIC,
            MarkerKind::Code => CodeSpan::TICK,
        }
    }

    pub fn feature(self) -> FormatFeature {
        match self {
            MarkerKind::Bold => FormatFeature::Bold,
            MarkerKind::Italic => FormatFeature::Italic,
            MarkerKind::Code => FormatFeature::Code,
        }
    }
}

/// A token with byte spans into the tokenizer input.
///
/// Tokens never own text; slicing the input with a token's spans reproduces
/// the bytes it was scanned from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A run of literal text.
    Text(Span),
    /// A bare `**`, `*` or `` ` ``. Whether it opens or closes is decided by
    /// pairing.
    Marker { kind: MarkerKind, span: Span },
    /// A fenced code block.
    CodeBlock {
        /// From the opening fence through the closing fence.
        full: Span,
        /// Lines between the fences, without the final newline.
        content: Span,
        /// Info string after the opening fence, if non-blank.
        lang: Option<Span>,
    },
    /// `[text](uri)`.
    Link { full: Span, text: Span, uri: Span },
    /// `@handle`; `full` includes the sigil.
    Mention { full: Span, handle: Span },
}

impl Token {
    /// The input bytes this token was scanned from.
    pub fn full(&self) -> Span {
        match self {
            Token::Text(sp) => *sp,
            Token::Marker { span, .. } => *span,
            Token::CodeBlock { full, .. } | Token::Link { full, .. } | Token::Mention { full, .. } => {
                *full
            }
        }
    }
}

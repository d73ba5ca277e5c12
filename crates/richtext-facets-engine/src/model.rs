//! # Facet Model
//!
//! Wire types shared by the encoder, the serializer and any external system
//! that stores or transmits byte-offset facets.
//!
//! Offsets are UTF-8 byte positions into the plain text. They are signed so
//! that payloads from an untrusted peer (including negative offsets) can be
//! represented and then rejected by [`Facet::validate`] at consumption time.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    lexer::kinds::{CodeSpan, Emphasis},
    span::Span,
    text::ByteText,
};

/// Half-open range of UTF-8 byte offsets into a specific text buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ByteSlice {
    pub byte_start: i64,
    pub byte_end: i64,
}

impl ByteSlice {
    pub fn new(byte_start: i64, byte_end: i64) -> Self {
        Self {
            byte_start,
            byte_end,
        }
    }

    /// Length in bytes, zero when inverted.
    #[must_use]
    pub fn len(&self) -> u64 {
        u64::try_from(self.byte_end.saturating_sub(self.byte_start)).unwrap_or(0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Span> for ByteSlice {
    fn from(sp: Span) -> Self {
        Self {
            byte_start: i64::try_from(sp.start).unwrap_or(i64::MAX),
            byte_end: i64::try_from(sp.end).unwrap_or(i64::MAX),
        }
    }
}

/// A formatting feature carried by a facet.
///
/// Serialized with an internal `kind` tag, e.g. `{"kind":"link","uri":"..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FormatFeature {
    Bold,
    Italic,
    Code,
    CodeBlock {
        /// Info string from the opening fence, e.g. `rust`.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        lang: Option<String>,
    },
    Link {
        uri: String,
    },
    Mention {
        id: String,
    },
    Tag {
        value: String,
    },
}

impl FormatFeature {
    /// Marker bytes for features that wrap their range in place.
    pub fn wrap_marker(&self) -> Option<&'static str> {
        match self {
            FormatFeature::Bold => Some(Emphasis::BOLD),
            FormatFeature::Italic => Some(Emphasis::ITALIC),
            FormatFeature::Code => Some(CodeSpan::TICK),
            _ => None,
        }
    }

    /// Features that substitute a reconstructed literal for their whole range.
    pub fn is_replacing(&self) -> bool {
        matches!(
            self,
            FormatFeature::CodeBlock { .. } | FormatFeature::Link { .. }
        )
    }
}

/// A byte-range annotation over plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facet {
    pub index: ByteSlice,
    pub features: Vec<FormatFeature>,
}

impl Facet {
    pub fn new(index: impl Into<ByteSlice>, features: Vec<FormatFeature>) -> Self {
        Self {
            index: index.into(),
            features,
        }
    }

    /// Checks this facet against `text` and returns its byte span.
    ///
    /// # Errors
    /// Returns the first [`FacetError`] found. Facets from an untrusted
    /// source are expected to fail here; callers drop them.
    pub fn validate(&self, text: &ByteText<'_>) -> Result<Span, FacetError> {
        let ByteSlice {
            byte_start,
            byte_end,
        } = self.index;

        if byte_start < 0 || byte_end < 0 {
            return Err(FacetError::NegativeOffset {
                byte_start,
                byte_end,
            });
        }
        if byte_start >= byte_end {
            return Err(FacetError::EmptyRange {
                byte_start,
                byte_end,
            });
        }
        let len = text.len();
        let (start, end) = match (usize::try_from(byte_start), usize::try_from(byte_end)) {
            (Ok(start), Ok(end)) if end <= len => (start, end),
            _ => return Err(FacetError::OutOfBounds { byte_end, len }),
        };
        if self.features.is_empty() {
            return Err(FacetError::NoFeatures);
        }
        for offset in [start, end] {
            if !text.is_char_boundary(offset) {
                return Err(FacetError::NotCharBoundary { offset });
            }
        }
        Ok(Span::new(start, end))
    }
}

/// Output of encoding: plain text plus facets sorted by `byte_start`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichText {
    pub text: String,
    pub facets: Vec<Facet>,
}

/// Why a facet was rejected during decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FacetError {
    #[error("negative byte offset in {byte_start}..{byte_end}")]
    NegativeOffset { byte_start: i64, byte_end: i64 },

    #[error("empty or inverted range {byte_start}..{byte_end}")]
    EmptyRange { byte_start: i64, byte_end: i64 },

    #[error("range end {byte_end} is past the text length {len}")]
    OutOfBounds { byte_end: i64, len: usize },

    #[error("facet has no features")]
    NoFeatures,

    #[error("offset {offset} splits a UTF-8 sequence")]
    NotCharBoundary { offset: usize },
}

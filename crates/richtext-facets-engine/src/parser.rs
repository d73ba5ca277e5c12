//! # Pairing Parser
//!
//! Turns the token stream into plain text plus facets. Marker bytes are
//! stripped, so facet offsets are computed in output-byte space.
//!
//! Pairing happens up front with one LIFO stack per marker kind
//! ([`match_pairs`]); a single emission pass then consults the pair table.
//! Bold, italic and code never interact even though bold and italic share `*`.
//!
//! The parser never fails. Unpaired markers are written back literally.

use std::collections::HashMap;

use log::trace;

use crate::{
    lexer::{MarkerKind, Token},
    mention::MentionResolver,
    model::{ByteSlice, Facet, FormatFeature, RichText},
    span::Span,
    text::ByteText,
};

/// The role a marker token plays once pairing is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairRole {
    Open,
    /// Closes the marker at token index `open`.
    Close { open: usize },
}

/// Marker token index to pairing role. Markers absent from the table have no
/// partner.
pub type PairTable = HashMap<usize, PairRole>;

/// Pairs the markers of one `kind` with a LIFO stack.
///
/// A marker pops the stack when it is non-empty (it closes the popped
/// opener), otherwise it is pushed as an opening candidate. Anything still on
/// the stack at the end is unpaired.
pub fn match_pairs(tokens: &[Token], kind: MarkerKind) -> PairTable {
    let mut stack: Vec<usize> = vec![];
    let mut table = PairTable::new();

    for (idx, tok) in tokens.iter().enumerate() {
        let Token::Marker { kind: k, .. } = tok else {
            continue;
        };
        if *k != kind {
            continue;
        }
        match stack.pop() {
            Some(open) => {
                table.insert(open, PairRole::Open);
                table.insert(idx, PairRole::Close { open });
            }
            None => stack.push(idx),
        }
    }

    table
}

/// Collects facets, merging ranges that coincide exactly.
#[derive(Debug, Default)]
struct FacetSet {
    facets: Vec<Facet>,
    by_span: HashMap<Span, usize>,
}

impl FacetSet {
    /// Adds `feature` over `[start, end)`. Empty ranges are ignored.
    fn add(&mut self, start: usize, end: usize, feature: FormatFeature) {
        let span = Span::new(start, end);
        if span.is_empty() {
            return;
        }
        match self.by_span.get(&span) {
            Some(&i) => self.facets[i].features.push(feature),
            None => {
                self.by_span.insert(span, self.facets.len());
                self.facets.push(Facet::new(ByteSlice::from(span), vec![feature]));
            }
        }
    }

    /// Facets ordered by `byte_start`. Equal starts keep insertion order.
    fn into_sorted(self) -> Vec<Facet> {
        let mut facets = self.facets;
        facets.sort_by_key(|f| f.index.byte_start);
        facets
    }
}

/// Emits `(text, facets)` for a token stream scanned from `input`.
pub fn parse_tokens<R>(input: &str, tokens: &[Token], resolver: &R) -> RichText
where
    R: MentionResolver + ?Sized,
{
    let src = ByteText::new(input);
    let roles: PairTable = MarkerKind::ALL
        .into_iter()
        .flat_map(|kind| match_pairs(tokens, kind))
        .collect();

    let mut text = String::with_capacity(input.len());
    let mut open_at: HashMap<usize, usize> = HashMap::new();
    let mut facets = FacetSet::default();

    for (idx, tok) in tokens.iter().enumerate() {
        match tok {
            Token::Text(sp) => text.push_str(src.slice(*sp)),
            Token::Marker { kind, span } => match roles.get(&idx) {
                Some(PairRole::Open) => {
                    open_at.insert(idx, text.len());
                }
                Some(PairRole::Close { open }) => {
                    if let Some(start) = open_at.remove(open) {
                        // A pair around nothing is consumed without a facet
                        facets.add(start, text.len(), kind.feature());
                    }
                }
                None => text.push_str(src.slice(*span)),
            },
            Token::CodeBlock { content, lang, .. } => {
                let start = text.len();
                text.push_str(src.slice(*content));
                let lang = lang.map(|l| src.slice(l).to_owned());
                facets.add(start, text.len(), FormatFeature::CodeBlock { lang });
            }
            Token::Link {
                text: label, uri, ..
            } => {
                let start = text.len();
                text.push_str(src.slice(*label));
                let uri = src.slice(*uri).to_owned();
                facets.add(start, text.len(), FormatFeature::Link { uri });
            }
            Token::Mention { full, handle } => {
                let start = text.len();
                text.push_str(src.slice(*full));
                if let Some(id) = resolver.resolve(src.slice(*handle)) {
                    facets.add(start, text.len(), FormatFeature::Mention { id });
                }
            }
        }
    }

    let facets = facets.into_sorted();
    trace!(
        "parsed {} tokens into {} bytes of text and {} facets",
        tokens.len(),
        text.len(),
        facets.len()
    );
    RichText { text, facets }
}

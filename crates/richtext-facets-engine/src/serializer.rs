//! # Serializer
//!
//! Rebuilds markup from plain text and an untrusted facet list.
//!
//! Facets are validated one by one; invalid ones are dropped with a debug log
//! and the text underneath is emitted unformatted. The text itself is always
//! returned in full.
//!
//! ## Event stream
//!
//! - Wrapping features (bold, italic, code) become open/close marker events.
//! - Replacing features (link, code block) substitute `[text](uri)` or a fence
//!   for their whole range; the underlying bytes are not copied again.
//! - Mentions and tags are annotation-only and emit nothing.
//!
//! At one position the order is: closes (innermost first), opens (outermost
//! first), then a replacement. The serializer sequences by position only; it
//! does not repair bad nesting.

use std::{
    cmp::{Ordering, Reverse},
    collections::HashSet,
};

use log::debug;

use crate::{
    lexer::kinds::{CodeFence, Link},
    model::{Facet, FormatFeature},
    span::Span,
    text::ByteText,
};

/// A replacing feature with the span it consumes.
#[derive(Debug, Clone, Copy)]
struct Replacement<'f> {
    span: Span,
    feature: &'f FormatFeature,
}

#[derive(Debug)]
enum Event<'f> {
    /// `seq` orders wrapping features by appearance in the facet list.
    Close {
        pos: usize,
        start: usize,
        seq: usize,
        marker: &'static str,
    },
    Open {
        pos: usize,
        end: usize,
        seq: usize,
        marker: &'static str,
    },
    Replace(Replacement<'f>),
}

impl Event<'_> {
    fn pos(&self) -> usize {
        match self {
            Event::Close { pos, .. } | Event::Open { pos, .. } => *pos,
            Event::Replace(r) => r.span.start,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Event::Close { .. } => 0,
            Event::Open { .. } => 1,
            Event::Replace(_) => 2,
        }
    }

    fn cmp_order(&self, other: &Self) -> Ordering {
        self.pos()
            .cmp(&other.pos())
            .then(self.rank().cmp(&other.rank()))
            .then_with(|| match (self, other) {
                (
                    Event::Close { start: a, seq: sa, .. },
                    Event::Close { start: b, seq: sb, .. },
                ) => (Reverse(*a), Reverse(*sa)).cmp(&(Reverse(*b), Reverse(*sb))),
                (Event::Open { end: a, seq: sa, .. }, Event::Open { end: b, seq: sb, .. }) => {
                    (Reverse(*a), *sa).cmp(&(Reverse(*b), *sb))
                }
                _ => Ordering::Equal,
            })
    }
}

/// Reconstructs markup text from `text` and `facets`.
///
/// Never fails: invalid facets are skipped and `decode(t, &[]) == t`.
pub fn decode(text: &str, facets: &[Facet]) -> String {
    let src = ByteText::new(text);

    let valid: Vec<(Span, &Facet)> = facets
        .iter()
        .enumerate()
        .filter_map(|(i, facet)| match facet.validate(&src) {
            Ok(span) => Some((span, facet)),
            Err(err) => {
                debug!("dropping facet {i} ({:?}): {err}", facet.index);
                None
            }
        })
        .collect();

    let (replacements, rejected) = select_replacements(&valid);
    let events = build_events(&valid, &replacements, &rejected);

    let mut out = String::with_capacity(text.len() + events.len() * 2);
    let mut cursor = 0;
    for ev in &events {
        let pos = ev.pos();
        if pos > cursor {
            out.push_str(src.slice_by_bytes(cursor, pos));
            cursor = pos;
        }
        match ev {
            Event::Open { marker, .. } | Event::Close { marker, .. } => out.push_str(marker),
            Event::Replace(r) => {
                render_replacement(&mut out, src.slice(r.span), r.feature);
                cursor = r.span.end;
            }
        }
    }
    out.push_str(src.slice_by_bytes(cursor, src.len()));
    out
}

/// Picks non-overlapping replacements, earliest start first and longer first
/// on ties. Returns the kept replacements sorted by start and the indices
/// (into `valid`) of facets whose replacement lost an overlap.
fn select_replacements<'f>(
    valid: &[(Span, &'f Facet)],
) -> (Vec<Replacement<'f>>, HashSet<usize>) {
    let mut candidates: Vec<(usize, Replacement<'f>)> = valid
        .iter()
        .enumerate()
        .filter_map(|(i, (span, facet))| {
            let feature = facet.features.iter().find(|f| f.is_replacing())?;
            Some((i, Replacement { span: *span, feature }))
        })
        .collect();
    candidates.sort_by_key(|(i, r)| (r.span.start, Reverse(r.span.end), *i));

    let mut kept: Vec<Replacement<'f>> = vec![];
    let mut rejected = HashSet::new();
    for (i, r) in candidates {
        if kept.last().is_some_and(|last| r.span.start < last.span.end) {
            debug!("dropping facet {:?}: overlaps another replacement", r.span);
            rejected.insert(i);
        } else {
            kept.push(r);
        }
    }
    (kept, rejected)
}

/// True if `pos` falls strictly inside one of the sorted, disjoint `kept`.
fn inside_replacement(kept: &[Replacement<'_>], pos: usize) -> bool {
    let i = kept.partition_point(|r| r.span.start < pos);
    i > 0 && kept[i - 1].span.strictly_contains(pos)
}

fn build_events<'f>(
    valid: &[(Span, &'f Facet)],
    replacements: &[Replacement<'f>],
    rejected: &HashSet<usize>,
) -> Vec<Event<'f>> {
    let mut events: Vec<Event<'f>> = replacements.iter().copied().map(Event::Replace).collect();
    let mut seq = 0;

    for (i, (span, facet)) in valid.iter().enumerate() {
        if rejected.contains(&i) {
            continue;
        }
        if inside_replacement(replacements, span.start) || inside_replacement(replacements, span.end)
        {
            debug!("dropping wrapping features of {span:?}: boundary inside a replacement");
            continue;
        }
        for marker in facet.features.iter().filter_map(FormatFeature::wrap_marker) {
            events.push(Event::Open {
                pos: span.start,
                end: span.end,
                seq,
                marker,
            });
            events.push(Event::Close {
                pos: span.end,
                start: span.start,
                seq,
                marker,
            });
            seq += 1;
        }
    }

    events.sort_by(Event::cmp_order);
    events
}

fn render_replacement(out: &mut String, text: &str, feature: &FormatFeature) {
    match feature {
        FormatFeature::Link { uri } => Link::render(out, text, uri),
        FormatFeature::CodeBlock { lang } => CodeFence::render(out, text, lang.as_deref()),
        // only replacing features are selected
        _ => out.push_str(text),
    }
}

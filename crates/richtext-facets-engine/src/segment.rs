//! # Segmentation
//!
//! Splits text at every facet boundary so a renderer can build a flat run of
//! styled pieces from overlapping facets. Same "collect boundaries, then walk"
//! approach as the serializer, with the same facet validation.

use std::collections::BTreeSet;

use log::debug;

use crate::{
    model::{Facet, FormatFeature},
    span::Span,
    text::ByteText,
};

/// A maximal run of text covered by the same set of facets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<'a> {
    pub span: Span,
    pub text: &'a str,
    /// Every feature whose facet covers this segment, in facet order.
    pub features: Vec<&'a FormatFeature>,
}

/// Segments `text` by the boundaries of its valid facets.
///
/// The segments cover the whole text in order. Invalid facets are ignored.
pub fn segments<'a>(text: &'a str, facets: &'a [Facet]) -> Vec<Segment<'a>> {
    let src = ByteText::new(text);
    if src.is_empty() {
        return vec![];
    }

    let valid: Vec<(Span, &Facet)> = facets
        .iter()
        .filter_map(|facet| match facet.validate(&src) {
            Ok(span) => Some((span, facet)),
            Err(err) => {
                debug!("ignoring facet {:?} for segmentation: {err}", facet.index);
                None
            }
        })
        .collect();

    let mut bounds = BTreeSet::from([0, src.len()]);
    for (span, _) in &valid {
        bounds.insert(span.start);
        bounds.insert(span.end);
    }
    let bounds: Vec<usize> = bounds.into_iter().collect();

    bounds
        .windows(2)
        .map(|w| {
            let span = Span::new(w[0], w[1]);
            let features = valid
                .iter()
                .filter(|(fs, _)| fs.covers(span))
                .flat_map(|&(_, facet)| facet.features.iter())
                .collect();
            Segment {
                span,
                text: src.slice(span),
                features,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ByteSlice;
    use pretty_assertions::assert_eq;

    fn facet(start: i64, end: i64, features: Vec<FormatFeature>) -> Facet {
        Facet::new(ByteSlice::new(start, end), features)
    }

    #[test]
    fn empty_text_has_no_segments() {
        assert!(segments("", &[]).is_empty());
    }

    #[test]
    fn no_facets_is_one_plain_segment() {
        let segs = segments("hello", &[]);
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].text, "hello");
        assert!(segs[0].features.is_empty());
    }

    #[test]
    fn overlapping_facets_split_at_every_boundary() {
        let facets = [
            facet(0, 18, vec![FormatFeature::Italic]),
            facet(7, 11, vec![FormatFeature::Bold]),
        ];
        let segs = segments("italic bold italic", &facets);
        let texts: Vec<&str> = segs.iter().map(|s| s.text).collect();
        assert_eq!(texts, vec!["italic ", "bold", " italic"]);

        assert!(segs[0].features.contains(&&FormatFeature::Italic));
        assert!(!segs[0].features.contains(&&FormatFeature::Bold));
        assert!(segs[1].features.contains(&&FormatFeature::Italic));
        assert!(segs[1].features.contains(&&FormatFeature::Bold));
        assert_eq!(segs[2].features, vec![&FormatFeature::Italic]);
    }

    #[test]
    fn crossing_facets() {
        let facets = [
            facet(0, 4, vec![FormatFeature::Bold]),
            facet(2, 6, vec![FormatFeature::Code]),
        ];
        let segs = segments("abcdef", &facets);
        let spans: Vec<Span> = segs.iter().map(|s| s.span).collect();
        assert_eq!(
            spans,
            vec![Span::new(0, 2), Span::new(2, 4), Span::new(4, 6)]
        );
        assert_eq!(
            segs[1].features,
            vec![&FormatFeature::Bold, &FormatFeature::Code]
        );
    }

    #[test]
    fn invalid_facets_do_not_split() {
        let facets = [facet(-2, 3, vec![FormatFeature::Bold])];
        let segs = segments("abcdef", &facets);
        assert_eq!(segs.len(), 1);
    }

    #[test]
    fn multibyte_segments() {
        let facets = [facet(0, 4, vec![FormatFeature::Bold])];
        let segs = segments("🔥日", &facets);
        assert_eq!(segs[0].text, "🔥");
        assert_eq!(segs[1].text, "日");
    }
}

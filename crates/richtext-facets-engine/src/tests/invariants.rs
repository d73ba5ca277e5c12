use crate::{model::RichText, text::ByteText};

/// Validates encoder output invariants.
///
/// Asserts that:
/// - Every facet range is non-empty and within the text
/// - Every facet offset lands on a char boundary
/// - Every facet carries at least one feature
/// - Facets are sorted by `byte_start`
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(rt: &RichText) {
    let text = ByteText::new(&rt.text);
    let len = i64::try_from(text.len()).unwrap();
    for f in &rt.facets {
        let (start, end) = (f.index.byte_start, f.index.byte_end);
        assert!(
            0 <= start && start < end && end <= len,
            "facet out of bounds: {:?} (text len: {})",
            f.index,
            len
        );
        assert!(
            f.validate(&text).is_ok(),
            "facet rejected by validation: {f:?}"
        );
        assert!(!f.features.is_empty(), "facet without features: {f:?}");
    }
    assert!(
        rt.facets
            .windows(2)
            .all(|w| w[0].index.byte_start <= w[1].index.byte_start),
        "facets not sorted by start: {:?}",
        rt.facets
    );
}

//! Property-based tests for the codec.
//!
//! Covers totality of both directions on arbitrary input, byte validity of
//! encoded facets, and round-tripping of well-formed markup built from
//! balanced spans, links, mentions and fenced blocks.

use proptest::prelude::*;
use richtext_facets_engine::{ByteSlice, Facet, FormatFeature, decode, encode};

/// Plain words with multi-byte characters but no markup bytes.
fn word_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9]{1,8}",
        "[日本語한국어]{1,4}",
        Just("🔥".to_string()),
        Just("e\u{301}".to_string()),
        Just("\u{200b}x".to_string()),
        Just("\u{202e}rtl\u{202c}".to_string()),
    ]
}

/// One well-formed construct.
fn piece_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        word_strategy(),
        word_strategy().prop_map(|w| format!("**{w}**")),
        word_strategy().prop_map(|w| format!("*{w}*")),
        word_strategy().prop_map(|w| format!("`{w}`")),
        (word_strategy(), word_strategy()).prop_map(|(a, b)| format!("*{a} **{b}***")),
        (word_strategy(), word_strategy()).prop_map(|(a, b)| format!("***{a}** {b}*")),
        (word_strategy(), "[a-z]{1,6}").prop_map(|(w, u)| format!("[{w}](https://{u}.example)")),
        ("[a-z]{1,6}", "[a-z]{2,4}").prop_map(|(h, d)| format!("@{h}.{d}")),
        ("[a-z]{0,4}", prop::collection::vec(word_strategy(), 1..3))
            .prop_map(|(lang, lines)| format!("\n```{lang}\n{}\n```\n", lines.join("\n"))),
    ]
}

/// Fences that must stay literal: empty or blank body, or no closer.
fn broken_fence_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("```\n```".to_string()),
        Just("```\n\n```".to_string()),
        "[a-z]{0,4}".prop_map(|lang| format!("```{lang}\n\n```")),
        word_strategy().prop_map(|w| format!("```\n{w}")),
        word_strategy().prop_map(|w| format!("```{w}")),
    ]
}

/// Well-formed markup: constructs separated by spaces.
fn markup_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(piece_strategy(), 0..8).prop_map(|pieces| pieces.join(" "))
}

/// Markup-heavy noise, mostly delimiter bytes.
fn noise_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("*"),
            Just("**"),
            Just("`"),
            Just("```"),
            Just("\n"),
            Just("["),
            Just("]"),
            Just("("),
            Just(")"),
            Just("@"),
            Just("."),
            Just("a"),
            Just("🔥"),
        ],
        0..40,
    )
    .prop_map(|parts| parts.concat())
}

fn feature_strategy() -> impl Strategy<Value = FormatFeature> {
    prop_oneof![
        Just(FormatFeature::Bold),
        Just(FormatFeature::Italic),
        Just(FormatFeature::Code),
        Just(FormatFeature::CodeBlock { lang: None }),
        "[a-z]{1,5}".prop_map(|uri| FormatFeature::Link { uri }),
        "[a-z]{1,5}".prop_map(|id| FormatFeature::Mention { id }),
        "[a-z]{1,5}".prop_map(|value| FormatFeature::Tag { value }),
    ]
}

/// Arbitrary facets, including negative, inverted and out-of-range ones.
fn facet_strategy() -> impl Strategy<Value = Facet> {
    (
        -5i64..40,
        -5i64..40,
        prop::collection::vec(feature_strategy(), 0..3),
    )
        .prop_map(|(start, end, features)| Facet::new(ByteSlice::new(start, end), features))
}

proptest! {
    #[test]
    fn encode_is_total_and_byte_valid(input in any::<String>()) {
        let rt = encode(&input);
        let len = i64::try_from(rt.text.len()).unwrap();
        for f in &rt.facets {
            prop_assert!(0 <= f.index.byte_start);
            prop_assert!(f.index.byte_start < f.index.byte_end);
            prop_assert!(f.index.byte_end <= len);
        }
    }

    #[test]
    fn encode_noise_is_byte_valid(input in noise_strategy()) {
        let rt = encode(&input);
        let len = i64::try_from(rt.text.len()).unwrap();
        for f in &rt.facets {
            prop_assert!(0 <= f.index.byte_start && f.index.byte_start < f.index.byte_end);
            prop_assert!(f.index.byte_end <= len);
            let start = usize::try_from(f.index.byte_start).unwrap();
            let end = usize::try_from(f.index.byte_end).unwrap();
            prop_assert!(rt.text.is_char_boundary(start) && rt.text.is_char_boundary(end));
        }
    }

    #[test]
    fn facets_sorted_by_start(input in markup_strategy()) {
        let rt = encode(&input);
        prop_assert!(rt.facets.windows(2).all(|w| w[0].index.byte_start <= w[1].index.byte_start));
    }

    #[test]
    fn well_formed_markup_round_trips(input in markup_strategy()) {
        let rt = encode(&input);
        prop_assert_eq!(decode(&rt.text, &rt.facets), input);
    }

    #[test]
    fn broken_fences_stay_literal(
        before in "[a-z ]{0,6}",
        fence in broken_fence_strategy(),
        after in "[a-z ]{0,6}",
    ) {
        let input = format!("{before}\n{fence}\n{after}");
        let rt = encode(&input);
        prop_assert_eq!(&rt.text, &input);
        prop_assert!(rt.facets.is_empty());
    }

    #[test]
    fn decode_is_total(text in any::<String>(), facets in prop::collection::vec(facet_strategy(), 0..6)) {
        let out = decode(&text, &facets);
        // text content is never dropped, only annotations
        prop_assert!(out.len() >= text.len());
    }

    #[test]
    fn decode_without_facets_is_identity(text in any::<String>()) {
        prop_assert_eq!(decode(&text, &[]), text);
    }

    #[test]
    fn same_start_facets_have_no_order_dependency(input in markup_strategy()) {
        let rt = encode(&input);
        let mut reordered = rt.facets.clone();
        // reverse runs of equal byte_start
        let mut i = 0;
        while i < reordered.len() {
            let start = reordered[i].index.byte_start;
            let j = reordered[i..].iter().take_while(|f| f.index.byte_start == start).count() + i;
            reordered[i..j].reverse();
            i = j;
        }
        prop_assert_eq!(decode(&rt.text, &reordered), decode(&rt.text, &rt.facets));
    }
}

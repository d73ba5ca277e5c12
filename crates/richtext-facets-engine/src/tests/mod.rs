//! Crate-level tests exercising `encode` and `decode` together.

mod invariants;

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::{decode, encode};

#[rstest]
#[case::plain("just text")]
#[case::bold("hello **world**")]
#[case::italic("an *aside* here")]
#[case::code("run `cargo` now")]
#[case::nested("*italic **bold** italic*")]
#[case::adjacent("**a**b**c**")]
#[case::triple("***both***")]
#[case::link("see [the docs](https://example.com/a?b=c) please")]
#[case::mention("thanks @alice.bsky.social!")]
#[case::fence("intro\n```rust\nfn main() {}\n```\noutro")]
#[case::unicode("**日本語** and *🔥* with `é`")]
#[case::rtl("**\u{202e}abc\u{202c}** done")]
#[case::zero_width("a**\u{200b}**b")]
fn well_formed_round_trip(#[case] input: &str) {
    let rt = encode(input);
    invariants::check(&rt);
    assert_eq!(decode(&rt.text, &rt.facets), input);
}

#[rstest]
#[case::unpaired("hello **world")]
#[case::lone_tick("a ` b")]
#[case::unterminated_fence("```\nnever closed")]
#[case::blank_fence_body("```\n\n```")]
#[case::blank_fence_body_between_lines("a\n```\n\n```\nb")]
#[case::bad_link("[text](")]
#[case::bad_mention("@nodot and @a..b")]
fn degraded_input_is_literal(#[case] input: &str) {
    let rt = encode(input);
    invariants::check(&rt);
    assert_eq!(rt.text, input);
    assert!(rt.facets.is_empty());
}

#[test]
fn garbage_input_keeps_invariants() {
    let inputs = [
        "***",
        "`*`**`",
        "[*](**)",
        "**[a](b**)",
        "```\n```\n```",
        "@@a.b..c.d@",
        "\u{0}\u{7f}*\u{fffd}*",
    ];
    for input in inputs {
        let rt = encode(input);
        invariants::check(&rt);
    }
}

//! # Tokenizer
//!
//! Single left-to-right scan over the UTF-8 input producing a flat token
//! stream. No recursion and no unbounded backtracking: a failed attempt at a
//! construct restores the cursor and the opening byte becomes literal text.
//!
//! ## Rules, tried at each position in order
//!
//! 1. Fenced code block at input start or after `\n`. Unterminated fences
//!    are literal text.
//! 2. `**` bold marker
//! 3. `*` italic marker
//! 4. `` ` `` inline code marker
//! 5. `[text](uri)` link
//! 6. `@handle.domain` mention
//! 7. Anything else accumulates into a text run
//!
//! ## Modules
//!
//! - **`types`**: `Token` and `MarkerKind`
//! - **`kinds`**: delimiter-owning types (`Emphasis`, `CodeFence`, ...)
//! - **`cursor`**: byte `Cursor` with position tracking

pub mod cursor;
pub mod kinds;
pub mod types;

use crate::span::Span;

use cursor::Cursor;
use kinds::{CodeFence, Link, Mention};
pub use types::{MarkerKind, Token};

/// Tokenizes `input` into a flat stream covering every byte exactly once.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut cur = Cursor::new(input);
    let mut out = vec![];
    let mut text_start = cur.pos();

    // Flushes pending text up to the token start, then pushes the token
    fn emit(out: &mut Vec<Token>, text_start: &mut usize, tok: Token) {
        let full = tok.full();
        if full.start > *text_start {
            out.push(Token::Text(Span::new(*text_start, full.start)));
        }
        *text_start = full.end;
        out.push(tok);
    }

    while !cur.eof() {
        if cur.at_line_start() && cur.starts_with(CodeFence::FENCE.as_bytes()) {
            match try_code_block(&mut cur) {
                Some(tok) => emit(&mut out, &mut text_start, tok),
                // Unterminated: the backticks stay in the text run
                None => cur.bump_n(CodeFence::FENCE.len()),
            }
            continue;
        }
        if let Some(tok) = try_marker(&mut cur) {
            emit(&mut out, &mut text_start, tok);
            continue;
        }
        if let Some(tok) = try_link(&mut cur) {
            emit(&mut out, &mut text_start, tok);
            continue;
        }
        if let Some(tok) = try_mention(&mut cur) {
            emit(&mut out, &mut text_start, tok);
            continue;
        }
        cur.bump();
    }

    if cur.pos() > text_start {
        out.push(Token::Text(Span::new(text_start, cur.pos())));
    }
    out
}

/// Bold is checked before italic so `**` is never two italic markers.
fn try_marker(cur: &mut Cursor<'_>) -> Option<Token> {
    let kind = MarkerKind::ALL
        .into_iter()
        .find(|k| cur.starts_with(k.delimiter().as_bytes()))?;
    let start = cur.pos();
    cur.bump_n(kind.delimiter().len());
    Some(Token::Marker {
        kind,
        span: Span::new(start, cur.pos()),
    })
}

/// Attempts a fenced code block at a line-start fence.
///
/// Returns `None` (cursor restored) when the opening line has no newline,
/// the body is empty, or no closing fence follows.
fn try_code_block(cur: &mut Cursor<'_>) -> Option<Token> {
    let saved = cur.clone();
    let start = cur.pos();
    cur.bump_n(CodeFence::FENCE.len());

    let info_start = cur.pos();
    cur.bump_while(|b| b != b'\n');
    let info_end = cur.pos();
    if cur.bump() != Some(b'\n') {
        *cur = saved;
        return None;
    }

    let content_start = cur.pos();
    if cur.starts_with(CodeFence::FENCE.as_bytes()) {
        *cur = saved;
        return None;
    }
    let Some(content_end) = cur.find(CodeFence::CLOSE.as_bytes()) else {
        *cur = saved;
        return None;
    };
    // A lone blank line before the closer is an empty body too
    if content_end == content_start {
        *cur = saved;
        return None;
    }
    cur.i = content_end + CodeFence::CLOSE.len();

    let info = Span::new(info_start, info_end);
    let info_text = &cur.s[info.range()];
    let trimmed = info_text.trim();
    let lang = (!trimmed.is_empty()).then(|| {
        let lead = info_text.len() - info_text.trim_start().len();
        Span::new(info.start + lead, info.start + lead + trimmed.len())
    });

    Some(Token::CodeBlock {
        full: Span::new(start, cur.pos()),
        content: Span::new(content_start, content_end),
        lang,
    })
}

/// Attempts `[text](uri)`. Text and uri must be non-empty and may not span
/// a newline.
fn try_link(cur: &mut Cursor<'_>) -> Option<Token> {
    if cur.peek() != Some(Link::TEXT_OPEN) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump(); // [

    let Some(text) = bracketed(cur, Link::TEXT_CLOSE) else {
        *cur = saved;
        return None;
    };
    if cur.peek() != Some(Link::URI_OPEN) {
        *cur = saved;
        return None;
    }
    cur.bump(); // (
    let Some(uri) = bracketed(cur, Link::URI_CLOSE) else {
        *cur = saved;
        return None;
    };

    Some(Token::Link {
        full: Span::new(start, cur.pos()),
        text,
        uri,
    })
}

/// Scans a non-empty run up to `close` on the same line and consumes `close`.
fn bracketed(cur: &mut Cursor<'_>, close: u8) -> Option<Span> {
    let inner_start = cur.pos();
    cur.bump_while(|b| b != close && b != b'\n');
    let inner = Span::new(inner_start, cur.pos());
    if cur.peek() != Some(close) || inner.is_empty() {
        return None;
    }
    cur.bump();
    Some(inner)
}

/// Attempts `@handle`, taking the maximal run of handle bytes.
fn try_mention(cur: &mut Cursor<'_>) -> Option<Token> {
    if cur.peek() != Some(Mention::SIGIL) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump(); // @
    let handle_start = cur.pos();
    cur.bump_while(Mention::is_handle_byte);
    let handle = Span::new(handle_start, cur.pos());

    if !Mention::is_valid_handle(&cur.s[handle.range()]) {
        *cur = saved;
        return None;
    }

    Some(Token::Mention {
        full: Span::new(start, cur.pos()),
        handle,
    })
}

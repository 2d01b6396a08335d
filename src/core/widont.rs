//! Widon't: keep a single word from ending up alone on the last line.
//!
//! The string version glues the last two words with a non-breaking space; the token
//! version wraps them in a marker so styling can decide when a widow is acceptable.

use std::sync::LazyLock;

use regex::Regex;

use super::characters::NON_BREAKING_SPACE;
use super::token::{Token, TokenList};

static WIDONT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\S+)\s+(\S+)(\s*)$").expect("widont pattern must be valid")
});

// The separator may already be U+00A0 from the string pass.
static WIDONT_WRAP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"((\S+)[\s\x{00A0}]+(\S+))(\s*)$").expect("widont wrap pattern must be valid")
});

/// Length limits past which the last two words are left alone. `None` is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WidontLimits {
    pub max_last_word_length: Option<usize>,
    /// Includes the space between the two words.
    pub max_last_two_words_length: Option<usize>,
}

impl WidontLimits {
    pub fn new(
        max_last_word_length: Option<usize>,
        max_last_two_words_length: Option<usize>,
    ) -> Self {
        Self {
            max_last_word_length,
            max_last_two_words_length,
        }
    }
}

/// True when the words are too long to be glued together.
pub fn exceeds_widont_limits(
    second_to_last_word: &str,
    last_word: &str,
    limits: WidontLimits,
) -> bool {
    let last_len = last_word.chars().count();
    let second_len = second_to_last_word.chars().count();

    limits.max_last_word_length.is_some_and(|max| last_len > max)
        || limits
            .max_last_two_words_length
            .is_some_and(|max| second_len + last_len + 1 > max)
}

/// Put a non-breaking space between the last two words.
///
/// Text with fewer than two words, or whose last words exceed `limits`, is returned as is.
/// Whitespace after the last word is preserved.
pub fn apply_widont(text: &str, limits: WidontLimits) -> String {
    let Some(caps) = WIDONT.captures(text) else {
        return text.to_string();
    };

    let full = caps.get(0).map_or(0..0, |m| m.range());
    let a_word = &caps[1];
    let b_word = &caps[2];
    let extra_spaces = &caps[3];

    if exceeds_widont_limits(a_word, b_word, limits) {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() + 1);
    out.push_str(&text[..full.start]);
    out.push_str(a_word);
    out.push(NON_BREAKING_SPACE);
    out.push_str(b_word);
    out.push_str(extra_spaces);
    out
}

/// Wrap the last two words of the token list in `marker`.
///
/// Only the tail of the list is considered: a trailing markup token is descended into,
/// earlier siblings are never touched. The list is returned unchanged when there is no
/// two-word tail or the words exceed `limits`.
pub fn apply_wrap_widont<M: Clone>(
    mut tokens: TokenList<M>,
    marker: &M,
    limits: WidontLimits,
) -> TokenList<M> {
    let Some(last) = tokens.pop() else {
        return tokens;
    };

    match last {
        Token::Markup {
            marker: outer,
            children,
        } => {
            let children = apply_wrap_widont(children, marker, limits);
            tokens.push(Token::markup(outer, children));
        }
        Token::Text { text } => {
            tokens.extend(wrap_last_two_words(text, marker, limits));
        }
    }
    tokens
}

fn wrap_last_two_words<M: Clone>(
    text: String,
    marker: &M,
    limits: WidontLimits,
) -> TokenList<M> {
    let Some(caps) = WIDONT_WRAP.captures(&text) else {
        return vec![Token::text(text)];
    };

    if exceeds_widont_limits(&caps[2], &caps[3], limits) {
        return vec![Token::text(text)];
    }

    let start = caps.get(0).map_or(0, |m| m.start());
    let before_text = &text[..start];
    let last_two_words = &caps[1];
    let extra_spaces = &caps[4];

    let mut out = Vec::with_capacity(3);
    if !before_text.is_empty() {
        out.push(Token::text(before_text));
    }
    out.push(Token::markup_with_text(marker.clone(), last_two_words));
    if !extra_spaces.is_empty() {
        out.push(Token::text(extra_spaces));
    }
    out
}

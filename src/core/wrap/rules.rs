//! The concrete wrap rules: capitals, ampersands, ordinals, quote marks and parentheses.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use super::{whole_match, wrap_matches};
use crate::core::characters::{
    AMPERSAND, DOUBLE_QUOTE, LEFT_DOUBLE_QUOTE, LEFT_PAREN, LEFT_SINGLE_QUOTE,
    LEFT_SQUARE_PAREN, RIGHT_DOUBLE_QUOTE, RIGHT_PAREN, RIGHT_SINGLE_QUOTE,
    RIGHT_SQUARE_PAREN, SINGLE_QUOTE,
};
use crate::core::token::TokenList;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in wrap pattern must be valid")
}

fn literal(c: char) -> Regex {
    compile(&regex::escape(c.encode_utf8(&mut [0; 4])))
}

static SINGLE_CAPITAL: LazyLock<Regex> = LazyLock::new(|| compile(r"\b[A-Z]\b"));
// Length is checked per match so the minimum can vary without recompiling.
static CAPITALS_RUN: LazyLock<Regex> =
    LazyLock::new(|| compile(r"\b(?:\d[A-Z][A-Z\d]*|[A-Z][A-Z\d]*)\b"));
static AMPERSAND_MARK: LazyLock<Regex> = LazyLock::new(|| literal(AMPERSAND));
static ORDINAL: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)(\d)(st|nd|rd|th)\b"));

static LEFT_DOUBLE: LazyLock<Regex> = LazyLock::new(|| literal(LEFT_DOUBLE_QUOTE));
static RIGHT_DOUBLE: LazyLock<Regex> = LazyLock::new(|| literal(RIGHT_DOUBLE_QUOTE));
static LEFT_SINGLE: LazyLock<Regex> = LazyLock::new(|| literal(LEFT_SINGLE_QUOTE));
// A closing quote is not followed by a word character; an apostrophe is (can’t).
static RIGHT_SINGLE: LazyLock<Regex> = LazyLock::new(|| compile(r"\x{2019}\B"));
static APOSTROPHE: LazyLock<Regex> = LazyLock::new(|| compile(r"\x{2019}\b"));
static STRAIGHT_DOUBLE: LazyLock<Regex> = LazyLock::new(|| literal(DOUBLE_QUOTE));
static STRAIGHT_SINGLE: LazyLock<Regex> = LazyLock::new(|| literal(SINGLE_QUOTE));

static LEFT_PAREN_MARK: LazyLock<Regex> = LazyLock::new(|| literal(LEFT_PAREN));
static RIGHT_PAREN_MARK: LazyLock<Regex> = LazyLock::new(|| literal(RIGHT_PAREN));
static LEFT_SQUARE_MARK: LazyLock<Regex> = LazyLock::new(|| literal(LEFT_SQUARE_PAREN));
static RIGHT_SQUARE_MARK: LazyLock<Regex> = LazyLock::new(|| literal(RIGHT_SQUARE_PAREN));

/// Markers for each kind of quote mark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuoteMarkers<M> {
    pub left_double: M,
    pub right_double: M,
    pub left_single: M,
    pub right_single: M,
    pub apostrophe: M,
    /// Straight `"`.
    pub double: M,
    /// Straight `'`.
    pub single: M,
}

impl<M: Clone> QuoteMarkers<M> {
    /// The same marker for every quote mark.
    pub fn uniform(marker: M) -> Self {
        Self {
            left_double: marker.clone(),
            right_double: marker.clone(),
            left_single: marker.clone(),
            right_single: marker.clone(),
            apostrophe: marker.clone(),
            double: marker.clone(),
            single: marker,
        }
    }
}

/// Markers for round and square parentheses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParenMarkers<M> {
    pub left_paren: M,
    pub right_paren: M,
    pub left_square_paren: M,
    pub right_square_paren: M,
}

impl<M: Clone> ParenMarkers<M> {
    /// The same marker for every parenthesis.
    pub fn uniform(marker: M) -> Self {
        Self {
            left_paren: marker.clone(),
            right_paren: marker.clone(),
            left_square_paren: marker.clone(),
            right_square_paren: marker,
        }
    }
}

/// Wrap all-capital words.
///
/// With `min_length <= 1` only single capital letters are wrapped. Otherwise runs of
/// capitals and digits of at least `min_length` characters are wrapped, as long as they
/// start with a capital or with a digit followed by a capital (2ND).
pub fn apply_wrap_multiple_caps<M: Clone>(
    tokens: TokenList<M>,
    marker: &M,
    min_length: usize,
) -> TokenList<M> {
    if min_length <= 1 {
        return wrap_matches(tokens, &SINGLE_CAPITAL, marker, &whole_match);
    }

    let long_enough = |caps: &Captures<'_>| {
        caps.get(0)
            .filter(|m| m.as_str().chars().count() >= min_length)
            .map(|m| m.range())
    };
    wrap_matches(tokens, &CAPITALS_RUN, marker, &long_enough)
}

/// Wrap every `&`.
pub fn apply_wrap_ampersand<M: Clone>(tokens: TokenList<M>, marker: &M) -> TokenList<M> {
    wrap_matches(tokens, &AMPERSAND_MARK, marker, &whole_match)
}

/// Wrap ordinal indicators: `1st` becomes `1` followed by the wrapped `st`.
pub fn apply_wrap_ordinal_indicator<M: Clone>(
    tokens: TokenList<M>,
    marker: &M,
) -> TokenList<M> {
    let suffix = |caps: &Captures<'_>| caps.get(2).map(|m| m.range());
    wrap_matches(tokens, &ORDINAL, marker, &suffix)
}

/// Wrap curly and straight quote marks, each kind in its own marker.
pub fn apply_wrap_quotes<M: Clone>(
    tokens: TokenList<M>,
    markers: &QuoteMarkers<M>,
) -> TokenList<M> {
    let passes: [(&Regex, &M); 7] = [
        (&*LEFT_DOUBLE, &markers.left_double),
        (&*RIGHT_DOUBLE, &markers.right_double),
        (&*LEFT_SINGLE, &markers.left_single),
        (&*RIGHT_SINGLE, &markers.right_single),
        (&*APOSTROPHE, &markers.apostrophe),
        (&*STRAIGHT_DOUBLE, &markers.double),
        (&*STRAIGHT_SINGLE, &markers.single),
    ];
    passes.into_iter().fold(tokens, |t, (pattern, marker)| {
        wrap_matches(t, pattern, marker, &whole_match)
    })
}

/// Wrap `(`, `)`, `[` and `]`, each in its own marker.
pub fn apply_wrap_parenthesis<M: Clone>(
    tokens: TokenList<M>,
    markers: &ParenMarkers<M>,
) -> TokenList<M> {
    let passes: [(&Regex, &M); 4] = [
        (&*LEFT_PAREN_MARK, &markers.left_paren),
        (&*RIGHT_PAREN_MARK, &markers.right_paren),
        (&*LEFT_SQUARE_MARK, &markers.left_square_paren),
        (&*RIGHT_SQUARE_MARK, &markers.right_square_paren),
    ];
    passes.into_iter().fold(tokens, |t, (pattern, marker)| {
        wrap_matches(t, pattern, marker, &whole_match)
    })
}

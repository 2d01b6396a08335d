//! Span wrapping: find a pattern in the text tokens and wrap each match in a marker.
//!
//! Wrapping only adds structure. Every rule in [`rules`] goes through [`wrap_matches`],
//! which never adds or drops characters and leaves existing markup in place (it only
//! descends into its children).

mod rules;

use std::ops::Range;

use regex::{Captures, Regex};

use super::token::{Token, TokenList};

pub use rules::{
    ParenMarkers, QuoteMarkers, apply_wrap_ampersand, apply_wrap_multiple_caps,
    apply_wrap_ordinal_indicator, apply_wrap_parenthesis, apply_wrap_quotes,
};

/// Wrap the whole match. The split used by rules without surrounding context.
pub fn whole_match(caps: &Captures<'_>) -> Option<Range<usize>> {
    caps.get(0).map(|m| m.range())
}

/// Wrap every match of `pattern` inside the text tokens with a clone of `marker`.
///
/// `split` picks the part of a match to wrap, as a byte range into the scanned text.
/// Whatever the match covers before that range stays as unwrapped text (a lookbehind),
/// whatever it covers after becomes its own text token (a lookahead). Returning `None`
/// skips the match and scanning resumes after it.
///
/// Tokens without an accepted match are returned as they were.
pub fn wrap_matches<M, F>(
    tokens: TokenList<M>,
    pattern: &Regex,
    marker: &M,
    split: &F,
) -> TokenList<M>
where
    M: Clone,
    F: Fn(&Captures<'_>) -> Option<Range<usize>>,
{
    let mut results = Vec::with_capacity(tokens.len());
    for token in tokens {
        match token {
            Token::Text { text } => wrap_text(text, pattern, marker, split, &mut results),
            Token::Markup {
                marker: outer,
                children,
            } => {
                let children = wrap_matches(children, pattern, marker, split);
                results.push(Token::markup(outer, children));
            }
        }
    }
    results
}

fn wrap_text<M, F>(
    text: String,
    pattern: &Regex,
    marker: &M,
    split: &F,
    results: &mut TokenList<M>,
) where
    M: Clone,
    F: Fn(&Captures<'_>) -> Option<Range<usize>>,
{
    // `emitted` is where the next unwrapped text starts, `search` where the next scan starts.
    let mut emitted = 0;
    let mut search = 0;
    let mut wrapped_any = false;

    while search < text.len() {
        let Some(caps) = pattern.captures_at(&text, search) else {
            break;
        };
        let Some(full) = caps.get(0) else {
            break;
        };

        if full.is_empty() {
            let step = text[full.end()..].chars().next().map_or(1, char::len_utf8);
            search = full.end() + step;
            continue;
        }

        let wrapped = match split(&caps) {
            Some(range)
                if !range.is_empty() && range.start >= full.start() && range.end <= full.end() =>
            {
                range
            }
            _ => {
                search = full.end();
                continue;
            }
        };

        if wrapped.start > emitted {
            results.push(Token::text(&text[emitted..wrapped.start]));
        }
        results.push(Token::markup_with_text(
            marker.clone(),
            &text[wrapped.clone()],
        ));
        if full.end() > wrapped.end {
            results.push(Token::text(&text[wrapped.end..full.end()]));
        }

        wrapped_any = true;
        emitted = full.end();
        search = full.end();
    }

    if !wrapped_any {
        results.push(Token::Text { text });
    } else if emitted < text.len() {
        results.push(Token::text(&text[emitted..]));
    }
}

//! Text-to-text replacements: smart quotes, smart ellipsis and smart dashes.
//!
//! The widon't non-breaking space lives in [`super::widont`] next to its wrapping twin.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::characters::{ELLIPSIS, EM_DASH, EN_DASH};

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in replacement pattern must be valid")
}

static APOSTROPHE: LazyLock<Regex> = LazyLock::new(|| compile(r"(\w)'(\w)"));
static LEADING_APOSTROPHE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)(^|\W)'(til|tis|tude|twas|twere|em)\b"));
static DOUBLE_QUOTES: LazyLock<Regex> = LazyLock::new(|| compile(r#""([^"]*)""#));
static LEFT_SINGLE_QUOTE: LazyLock<Regex> = LazyLock::new(|| compile(r"(^|\W)'(\w)"));
static RIGHT_SINGLE_QUOTE: LazyLock<Regex> =
    LazyLock::new(|| compile(r#"([\w?.!"'\x{201D}])'($|\W)"#));
static DOTS: LazyLock<Regex> = LazyLock::new(|| compile(r"\.{3,}"));
static DASHES: LazyLock<Regex> = LazyLock::new(|| compile(r"-{2,}"));

/// Replace `"` and `'` with curly quotes, including apostrophes in contractions
/// and the known leading-apostrophe words like 'Twas.
///
/// Quoted slang such as `rock 'n' roll` is not supported.
pub fn apply_smart_quotes(text: &str) -> String {
    // don't
    let t = APOSTROPHE.replace_all(text, "${1}\u{2019}${2}");
    // 'Twas
    let t = LEADING_APOSTROPHE.replace_all(&t, "${1}\u{2019}${2}");
    // "Hello World"
    let t = DOUBLE_QUOTES.replace_all(&t, "\u{201C}${1}\u{201D}");
    // 'Hello World', which also catches trailing apostrophes: James' bicycle
    let t = LEFT_SINGLE_QUOTE.replace_all(&t, "${1}\u{2018}${2}");
    let t = RIGHT_SINGLE_QUOTE.replace_all(&t, "${1}\u{2019}${2}");
    t.into_owned()
}

/// Replace exactly three periods with an ellipsis. Runs of four or more are kept.
pub fn apply_smart_ellipsis(text: &str) -> String {
    DOTS.replace_all(text, |caps: &Captures| {
        let dots = &caps[0];
        if dots.len() == 3 {
            ELLIPSIS.to_string()
        } else {
            dots.to_string()
        }
    })
    .into_owned()
}

/// Replace `--` with an en dash and `---` with an em dash. Runs of four or more are kept.
pub fn apply_smart_dashes(text: &str) -> String {
    DASHES
        .replace_all(text, |caps: &Captures| {
            let dashes = &caps[0];
            match dashes.len() {
                2 => EN_DASH.to_string(),
                3 => EM_DASH.to_string(),
                _ => dashes.to_string(),
            }
        })
        .into_owned()
}

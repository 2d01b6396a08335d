//! Named characters used by the replacements and wrap rules.

pub const NON_BREAKING_SPACE: char = '\u{00A0}';
pub const EM_DASH: char = '\u{2014}';
pub const EN_DASH: char = '\u{2013}';
pub const ELLIPSIS: char = '\u{2026}';
pub const AMPERSAND: char = '&';

pub const LEFT_DOUBLE_QUOTE: char = '\u{201C}';
pub const RIGHT_DOUBLE_QUOTE: char = '\u{201D}';
pub const LEFT_SINGLE_QUOTE: char = '\u{2018}';
pub const RIGHT_SINGLE_QUOTE: char = '\u{2019}';
pub const DOUBLE_QUOTE: char = '"';
pub const SINGLE_QUOTE: char = '\'';

pub const LEFT_PAREN: char = '(';
pub const RIGHT_PAREN: char = ')';
pub const LEFT_SQUARE_PAREN: char = '[';
pub const RIGHT_SQUARE_PAREN: char = ']';

//! Token tree: text interspersed with markup spans.

use serde::Serialize;

/// A node of the token tree: either literal text or a markup span around child tokens.
///
/// The marker is opaque to the pipeline; it is cloned per wrapped span and handed to the
/// render adapter untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Token<M> {
    Text { text: String },
    Markup { marker: M, children: Vec<Token<M>> },
}

/// An ordered run of tokens in reading order.
pub type TokenList<M> = Vec<Token<M>>;

impl<M> Token<M> {
    pub fn text(text: impl Into<String>) -> Self {
        Token::Text { text: text.into() }
    }

    pub fn markup(marker: M, children: TokenList<M>) -> Self {
        Token::Markup { marker, children }
    }

    /// Markup holding a single text child.
    pub fn markup_with_text(marker: M, text: impl Into<String>) -> Self {
        Token::markup(marker, vec![Token::text(text)])
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Token::Text { .. })
    }

    /// Append this token's text (recursively, markers ignored) to `out`.
    pub fn push_text_content(&self, out: &mut String) {
        match self {
            Token::Text { text } => out.push_str(text),
            Token::Markup { children, .. } => {
                for child in children {
                    child.push_text_content(out);
                }
            }
        }
    }
}

/// Start a token list from a raw string: a single text token.
pub fn seed<M>(text: impl Into<String>) -> TokenList<M> {
    vec![Token::text(text)]
}

/// Concatenate every text token in reading order.
pub fn text_content<M>(tokens: &[Token<M>]) -> String {
    let mut out = String::new();
    for token in tokens {
        token.push_text_content(&mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_token_holds_payload() {
        let token: Token<&str> = Token::text("Burrito & Tacos");
        assert_eq!(
            token,
            Token::Text {
                text: "Burrito & Tacos".to_string()
            }
        );
        assert!(token.is_text());
    }

    #[test]
    fn markup_token_holds_marker_and_children() {
        let token = Token::markup("marky", vec![Token::text("Pizza pie")]);
        match token {
            Token::Markup { marker, children } => {
                assert_eq!(marker, "marky");
                assert_eq!(children, vec![Token::text("Pizza pie")]);
            }
            _ => panic!("expected Markup"),
        }
    }

    #[test]
    fn markup_with_text_is_sugar_for_single_child() {
        assert_eq!(
            Token::markup_with_text("m", "st"),
            Token::markup("m", vec![Token::text("st")])
        );
    }

    #[test]
    fn seed_creates_single_text_token() {
        let tokens: TokenList<&str> = seed("Hello World");
        assert_eq!(tokens, vec![Token::text("Hello World")]);
    }

    #[test]
    fn seed_keeps_empty_string() {
        let tokens: TokenList<&str> = seed("");
        assert_eq!(tokens, vec![Token::text("")]);
        assert_eq!(text_content(&tokens), "");
    }

    #[test]
    fn text_content_flattens_nested_markup() {
        let tokens = vec![
            Token::markup_with_text("i", "\""),
            Token::markup(
                "mark",
                vec![Token::text("Hi "), Token::markup_with_text("n", "BOB")],
            ),
            Token::markup_with_text("i", "\""),
        ];
        assert_eq!(text_content(&tokens), "\"Hi BOB\"");
    }

    #[test]
    fn serializes_with_type_tag() {
        let tokens = vec![Token::text("21"), Token::markup_with_text("ords", "st")];
        let json = serde_json::to_value(&tokens).unwrap();
        assert_eq!(json[0]["type"], "text");
        assert_eq!(json[0]["text"], "21");
        assert_eq!(json[1]["type"], "markup");
        assert_eq!(json[1]["marker"], "ords");
        assert_eq!(json[1]["children"][0]["text"], "st");
    }
}

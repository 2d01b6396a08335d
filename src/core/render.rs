//! Render a token tree: HTML for display, plain text for checking.

use super::characters::NON_BREAKING_SPACE;
use super::marker::Element;
use super::token::{Token, text_content};

/// A marker that knows how to open and close its span in HTML.
pub trait RenderMarker {
    fn open_tag(&self) -> String;
    fn close_tag(&self) -> String;
}

impl RenderMarker for Element {
    fn open_tag(&self) -> String {
        match &self.class {
            Some(class) => format!("<{} class=\"{}\">", self.tag, escape_attribute(class)),
            None => format!("<{}>", self.tag),
        }
    }

    fn close_tag(&self) -> String {
        format!("</{}>", self.tag)
    }
}

/// A class name renders as a classed `<span>`.
impl RenderMarker for String {
    fn open_tag(&self) -> String {
        format!("<span class=\"{}\">", escape_attribute(self))
    }

    fn close_tag(&self) -> String {
        "</span>".to_string()
    }
}

/// Render tokens as an HTML fragment.
pub fn to_html<M: RenderMarker>(tokens: &[Token<M>]) -> String {
    let mut out = String::new();
    push_html(tokens, &mut out);
    out
}

fn push_html<M: RenderMarker>(tokens: &[Token<M>], out: &mut String) {
    for token in tokens {
        match token {
            Token::Text { text } => push_escaped_text(text, out),
            Token::Markup { marker, children } => {
                out.push_str(&marker.open_tag());
                push_html(children, out);
                out.push_str(&marker.close_tag());
            }
        }
    }
}

/// Render tokens as the plain text they contain.
pub fn to_plain_text<M>(tokens: &[Token<M>]) -> String {
    text_content(tokens)
}

fn push_escaped_text(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            NON_BREAKING_SPACE => out.push_str("&nbsp;"),
            _ => out.push(c),
        }
    }
}

fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

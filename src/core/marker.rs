//! Markers and the per-feature wrap options that choose them.
//!
//! A marker is whatever the render side needs to style a wrapped span. The pipeline only
//! clones markers; it builds its own solely when a feature is enabled without one, using
//! the class names below.

use serde::{Deserialize, Serialize};

use super::wrap::{ParenMarkers, QuoteMarkers};

pub const AMPERSAND_CLASS: &str = "amp";
pub const CAPITALS_CLASS: &str = "caps";
pub const ORDINAL_CLASS: &str = "ords";
pub const WIDONT_CLASS: &str = "widont";

pub const LEFT_DOUBLE_QUOTE_CLASS: &str = "left-double-quote";
pub const RIGHT_DOUBLE_QUOTE_CLASS: &str = "right-double-quote";
pub const LEFT_SINGLE_QUOTE_CLASS: &str = "left-single-quote";
pub const RIGHT_SINGLE_QUOTE_CLASS: &str = "right-single-quote";
pub const DOUBLE_QUOTE_CLASS: &str = "double-quote";
pub const SINGLE_QUOTE_CLASS: &str = "single-quote";
pub const APOSTROPHE_CLASS: &str = "apostrophe";

pub const LEFT_PAREN_CLASS: &str = "left-paren";
pub const RIGHT_PAREN_CLASS: &str = "right-paren";
pub const LEFT_SQUARE_PAREN_CLASS: &str = "left-square-paren";
pub const RIGHT_SQUARE_PAREN_CLASS: &str = "right-square-paren";

/// A value that can stand for a styled span.
pub trait Marker: Clone {
    /// The marker used when a feature is switched on without a custom marker.
    fn from_class(class: &'static str) -> Self;
}

/// The class name itself.
impl Marker for String {
    fn from_class(class: &'static str) -> Self {
        class.to_string()
    }
}

/// An element to wrap spans in, e.g. `<span class="amp">` or `<mark>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Element {
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            class: None,
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

impl Marker for Element {
    fn from_class(class: &'static str) -> Self {
        Element::new("span").with_class(class)
    }
}

/// Built-in markers for every quote mark.
pub fn default_quote_markers<M: Marker>() -> QuoteMarkers<M> {
    QuoteMarkers {
        left_double: M::from_class(LEFT_DOUBLE_QUOTE_CLASS),
        right_double: M::from_class(RIGHT_DOUBLE_QUOTE_CLASS),
        left_single: M::from_class(LEFT_SINGLE_QUOTE_CLASS),
        right_single: M::from_class(RIGHT_SINGLE_QUOTE_CLASS),
        apostrophe: M::from_class(APOSTROPHE_CLASS),
        double: M::from_class(DOUBLE_QUOTE_CLASS),
        single: M::from_class(SINGLE_QUOTE_CLASS),
    }
}

/// Built-in markers for every parenthesis.
pub fn default_paren_markers<M: Marker>() -> ParenMarkers<M> {
    ParenMarkers {
        left_paren: M::from_class(LEFT_PAREN_CLASS),
        right_paren: M::from_class(RIGHT_PAREN_CLASS),
        left_square_paren: M::from_class(LEFT_SQUARE_PAREN_CLASS),
        right_square_paren: M::from_class(RIGHT_SQUARE_PAREN_CLASS),
    }
}

/// Whether and how a feature wraps its spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Wrap<M> {
    Off,
    /// Use the built-in marker.
    Default,
    Marker(M),
}

impl<M: Marker> Wrap<M> {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Wrap::Off)
    }

    /// The marker to wrap with, if enabled.
    pub fn resolve(&self, default_class: &'static str) -> Option<M> {
        match self {
            Wrap::Off => None,
            Wrap::Default => Some(M::from_class(default_class)),
            Wrap::Marker(marker) => Some(marker.clone()),
        }
    }
}

impl<M> Default for Wrap<M> {
    fn default() -> Self {
        Wrap::Off
    }
}

impl<M> From<bool> for Wrap<M> {
    fn from(enabled: bool) -> Self {
        if enabled { Wrap::Default } else { Wrap::Off }
    }
}

/// Quote wrapping: one marker for all quote marks or one per kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteWrap<M> {
    Off,
    Default,
    Marker(M),
    Each(QuoteMarkers<M>),
}

impl<M: Marker> QuoteWrap<M> {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, QuoteWrap::Off)
    }

    pub fn resolve(&self) -> Option<QuoteMarkers<M>> {
        match self {
            QuoteWrap::Off => None,
            QuoteWrap::Default => Some(default_quote_markers()),
            QuoteWrap::Marker(marker) => Some(QuoteMarkers::uniform(marker.clone())),
            QuoteWrap::Each(markers) => Some(markers.clone()),
        }
    }
}

impl<M> Default for QuoteWrap<M> {
    fn default() -> Self {
        QuoteWrap::Off
    }
}

impl<M> From<bool> for QuoteWrap<M> {
    fn from(enabled: bool) -> Self {
        if enabled { QuoteWrap::Default } else { QuoteWrap::Off }
    }
}

/// Parenthesis wrapping: one marker for all parentheses or one per kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParenWrap<M> {
    Off,
    Default,
    Marker(M),
    Each(ParenMarkers<M>),
}

impl<M: Marker> ParenWrap<M> {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, ParenWrap::Off)
    }

    pub fn resolve(&self) -> Option<ParenMarkers<M>> {
        match self {
            ParenWrap::Off => None,
            ParenWrap::Default => Some(default_paren_markers()),
            ParenWrap::Marker(marker) => Some(ParenMarkers::uniform(marker.clone())),
            ParenWrap::Each(markers) => Some(markers.clone()),
        }
    }
}

impl<M> Default for ParenWrap<M> {
    fn default() -> Self {
        ParenWrap::Off
    }
}

impl<M> From<bool> for ParenWrap<M> {
    fn from(enabled: bool) -> Self {
        if enabled { ParenWrap::Default } else { ParenWrap::Off }
    }
}

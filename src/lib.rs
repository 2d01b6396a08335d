//! # typography-hacks
//!
//! Typographic post-processing for display text. A string goes through a fixed pipeline of
//! optional hacks: smart quotes, ellipses and dashes, a non-breaking space against widows,
//! and wrapping of ampersands, all-caps words, ordinal suffixes, quote marks and
//! parentheses in style-able spans. The result is a token tree that renders to HTML.
//!
//! ```
//! use typography_hacks::{PipelineConfig, Wrap, process, to_html};
//!
//! let config = PipelineConfig::<String> {
//!     wrap_ordinal_indicator: Wrap::Default,
//!     ..PipelineConfig::default()
//! };
//! let tokens = process("21st Century", &config);
//! assert_eq!(to_html(&tokens), "21<span class=\"ords\">st</span> Century");
//! ```

pub mod core;

pub use crate::core::config::{ConfigError, ConfigFile};
pub use crate::core::marker::{Element, Marker, ParenWrap, QuoteWrap, Wrap};
pub use crate::core::pipeline::{PipelineConfig, process};
pub use crate::core::render::{RenderMarker, to_html, to_plain_text};
pub use crate::core::token::{Token, TokenList};
pub use crate::core::widont::WidontLimits;
pub use crate::core::wrap::{ParenMarkers, QuoteMarkers};

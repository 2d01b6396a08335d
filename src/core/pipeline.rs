//! The typography pipeline: text replacements first, then wrapping, in a fixed order.

use super::marker::{
    AMPERSAND_CLASS, CAPITALS_CLASS, Marker, ORDINAL_CLASS, ParenWrap, QuoteWrap,
    WIDONT_CLASS, Wrap,
};
use super::replace::{apply_smart_dashes, apply_smart_ellipsis, apply_smart_quotes};
use super::token::{TokenList, seed};
use super::widont::{WidontLimits, apply_widont, apply_wrap_widont};
use super::wrap::{
    apply_wrap_ampersand, apply_wrap_multiple_caps, apply_wrap_ordinal_indicator,
    apply_wrap_parenthesis, apply_wrap_quotes,
};

/// Minimum length of an all-caps word unless configured otherwise.
pub const DEFAULT_CAPITALS_MIN_LENGTH: usize = 2;

/// Which typography hacks to apply. Everything is off by default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig<M> {
    /// Put a non-breaking space between the last two words.
    pub widont_non_breaking_space: bool,
    /// Wrap the last two words so styling can control widowing.
    pub wrap_widont: Wrap<M>,
    pub widont_limits: WidontLimits,

    /// Curly quotes and apostrophes.
    pub smart_quotes: bool,
    /// `...` to an ellipsis.
    pub smart_ellipsis: bool,
    /// `--` and `---` to en and em dashes.
    pub smart_dashes: bool,

    pub wrap_ampersand: Wrap<M>,
    pub wrap_multiple_capitals: Wrap<M>,
    pub wrap_multiple_capitals_min_length: usize,
    pub wrap_ordinal_indicator: Wrap<M>,
    pub wrap_quotes: QuoteWrap<M>,
    pub wrap_parenthesis: ParenWrap<M>,
}

impl<M> Default for PipelineConfig<M> {
    fn default() -> Self {
        Self {
            widont_non_breaking_space: false,
            wrap_widont: Wrap::Off,
            widont_limits: WidontLimits::default(),
            smart_quotes: false,
            smart_ellipsis: false,
            smart_dashes: false,
            wrap_ampersand: Wrap::Off,
            wrap_multiple_capitals: Wrap::Off,
            wrap_multiple_capitals_min_length: DEFAULT_CAPITALS_MIN_LENGTH,
            wrap_ordinal_indicator: Wrap::Off,
            wrap_quotes: QuoteWrap::Off,
            wrap_parenthesis: ParenWrap::Off,
        }
    }
}

impl<M> PipelineConfig<M> {
    /// Every feature on, with the built-in markers.
    pub fn all() -> Self {
        Self {
            widont_non_breaking_space: true,
            wrap_widont: Wrap::Default,
            smart_quotes: true,
            smart_ellipsis: true,
            smart_dashes: true,
            wrap_ampersand: Wrap::Default,
            wrap_multiple_capitals: Wrap::Default,
            wrap_ordinal_indicator: Wrap::Default,
            wrap_quotes: QuoteWrap::Default,
            wrap_parenthesis: ParenWrap::Default,
            ..Self::default()
        }
    }
}

/// Apply the string replacements only: widon't space, quotes, ellipsis, dashes.
pub fn replace_text<M>(text: &str, config: &PipelineConfig<M>) -> String {
    let mut t = text.to_string();
    if config.widont_non_breaking_space {
        log::debug!("applying widont non-breaking space");
        t = apply_widont(&t, config.widont_limits);
    }
    if config.smart_quotes {
        log::debug!("applying smart quotes");
        t = apply_smart_quotes(&t);
    }
    if config.smart_ellipsis {
        log::debug!("applying smart ellipsis");
        t = apply_smart_ellipsis(&t);
    }
    if config.smart_dashes {
        log::debug!("applying smart dashes");
        t = apply_smart_dashes(&t);
    }
    t
}

/// Run the whole pipeline over `text` and return the token tree for rendering.
///
/// Stages run in a fixed order regardless of which are enabled: the string replacements,
/// then widon't, quote, ordinal, ampersand, capitals and parenthesis wrapping.
pub fn process<M: Marker>(text: &str, config: &PipelineConfig<M>) -> TokenList<M> {
    let mut tokens = seed(replace_text(text, config));

    if let Some(marker) = config.wrap_widont.resolve(WIDONT_CLASS) {
        log::debug!("wrapping widont");
        tokens = apply_wrap_widont(tokens, &marker, config.widont_limits);
    }
    if let Some(markers) = config.wrap_quotes.resolve() {
        log::debug!("wrapping quotes");
        tokens = apply_wrap_quotes(tokens, &markers);
    }
    if let Some(marker) = config.wrap_ordinal_indicator.resolve(ORDINAL_CLASS) {
        log::debug!("wrapping ordinal indicators");
        tokens = apply_wrap_ordinal_indicator(tokens, &marker);
    }
    if let Some(marker) = config.wrap_ampersand.resolve(AMPERSAND_CLASS) {
        log::debug!("wrapping ampersands");
        tokens = apply_wrap_ampersand(tokens, &marker);
    }
    if let Some(marker) = config.wrap_multiple_capitals.resolve(CAPITALS_CLASS) {
        log::debug!(
            "wrapping capitals (min length {})",
            config.wrap_multiple_capitals_min_length
        );
        tokens = apply_wrap_multiple_caps(
            tokens,
            &marker,
            config.wrap_multiple_capitals_min_length,
        );
    }
    if let Some(markers) = config.wrap_parenthesis.resolve() {
        log::debug!("wrapping parentheses");
        tokens = apply_wrap_parenthesis(tokens, &markers);
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::token::{Token, text_content};

    fn m(s: &str) -> String {
        s.to_string()
    }

    #[test]
    fn default_config_is_passthrough() {
        let config = PipelineConfig::<String>::default();
        let text = "\"We said, 'why that?'\" ...but it (duck) couldn't be";
        assert_eq!(process(text, &config), vec![Token::text(text)]);
    }

    #[test]
    fn default_caps_min_length_is_two() {
        let config = PipelineConfig::<String>::default();
        assert_eq!(config.wrap_multiple_capitals_min_length, 2);
        assert_eq!(config.widont_limits, WidontLimits::default());
    }

    #[test]
    fn ordinal_scenario() {
        let config = PipelineConfig {
            wrap_ordinal_indicator: Wrap::Marker(m("mark")),
            ..PipelineConfig::default()
        };
        assert_eq!(
            process("21st Century", &config),
            vec![
                Token::text("21"),
                Token::markup_with_text(m("mark"), "st"),
                Token::text(" Century"),
            ]
        );
    }

    #[test]
    fn caps_ampersand_ordinal_scenario() {
        let config = PipelineConfig {
            wrap_ampersand: Wrap::Default,
            wrap_multiple_capitals: Wrap::Default,
            wrap_ordinal_indicator: Wrap::Default,
            ..PipelineConfig::default()
        };
        assert_eq!(
            process("ABC & 21st", &config),
            vec![
                Token::markup_with_text(m("caps"), "ABC"),
                Token::text(" "),
                Token::markup_with_text(m("amp"), "&"),
                Token::text(" 21"),
                Token::markup_with_text(m("ords"), "st"),
            ]
        );
    }

    #[test]
    fn replacements_run_before_seeding() {
        let config = PipelineConfig::<String> {
            smart_dashes: true,
            smart_ellipsis: true,
            ..PipelineConfig::default()
        };
        assert_eq!(
            process("wait... what--no", &config),
            vec![Token::text("wait\u{2026} what\u{2013}no")]
        );
    }

    #[test]
    fn widont_space_then_wrap() {
        let config = PipelineConfig::<String> {
            widont_non_breaking_space: true,
            wrap_widont: Wrap::Default,
            ..PipelineConfig::default()
        };
        assert_eq!(
            process("it couldn't be ", &config),
            vec![
                Token::text("it "),
                Token::markup_with_text(m("widont"), "couldn't\u{a0}be"),
                Token::text(" "),
            ]
        );
    }

    #[test]
    fn widont_limits_apply_to_both_stages() {
        let config = PipelineConfig::<String> {
            widont_non_breaking_space: true,
            wrap_widont: Wrap::Default,
            widont_limits: WidontLimits::new(Some(4), None),
            ..PipelineConfig::default()
        };
        assert_eq!(process("Hello World", &config), vec![Token::text("Hello World")]);
    }

    #[test]
    fn text_is_preserved_for_every_subset() {
        let text = "'ABC' & \"21st\", (...well--ok), [not ok, can't be]";
        for bits in 0u32..(1 << 6) {
            let on = |i: u32| bits & (1 << i) != 0;
            let config = PipelineConfig::<String> {
                wrap_widont: on(0).into(),
                wrap_quotes: on(1).into(),
                wrap_ordinal_indicator: on(2).into(),
                wrap_ampersand: on(3).into(),
                wrap_multiple_capitals: on(4).into(),
                wrap_parenthesis: on(5).into(),
                smart_quotes: true,
                smart_ellipsis: true,
                smart_dashes: true,
                widont_non_breaking_space: true,
                ..PipelineConfig::default()
            };
            let replaced = replace_text(text, &config);
            assert_eq!(text_content(&process(text, &config)), replaced);
        }
    }

    #[test]
    fn all_enables_everything() {
        let config = PipelineConfig::<String>::all();
        assert!(config.smart_quotes && config.smart_dashes && config.smart_ellipsis);
        assert!(config.widont_non_breaking_space);
        assert!(config.wrap_widont.is_enabled());
        assert!(config.wrap_quotes.is_enabled());
        assert!(config.wrap_parenthesis.is_enabled());
        assert_eq!(config.wrap_multiple_capitals_min_length, 2);
    }
}

//! Config validation: element checks and conversion to PipelineConfig.

use super::{ConfigError, ConfigFile, ParenEntry, QuoteEntry, WrapEntry};
use crate::core::marker::{Element, ParenWrap, QuoteWrap, Wrap};
use crate::core::pipeline::{DEFAULT_CAPITALS_MIN_LENGTH, PipelineConfig};
use crate::core::widont::WidontLimits;

/// Check that an element renders to a well-formed tag.
pub(crate) fn validate_element(key: &str, element: &Element) -> Result<(), ConfigError> {
    let tag = &element.tag;
    if tag.is_empty() {
        return Err(ConfigError::Validation(format!(
            "{}: tag cannot be empty",
            key
        )));
    }
    if !tag.starts_with(|c: char| c.is_ascii_alphabetic())
        || !tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "{}: tag '{}' must start with a letter and contain only letters, numbers, and hyphens",
            key, tag
        )));
    }
    if let Some(class) = &element.class
        && class.contains(['"', '<', '>'])
    {
        return Err(ConfigError::Validation(format!(
            "{}: class '{}' cannot contain quotes or angle brackets",
            key, class
        )));
    }
    Ok(())
}

fn convert_wrap(key: &str, entry: WrapEntry) -> Result<Wrap<Element>, ConfigError> {
    match entry {
        WrapEntry::Flag(enabled) => Ok(enabled.into()),
        WrapEntry::Marker(element) => {
            validate_element(key, &element)?;
            Ok(Wrap::Marker(element))
        }
    }
}

fn convert_quotes(entry: QuoteEntry) -> Result<QuoteWrap<Element>, ConfigError> {
    match entry {
        QuoteEntry::Flag(enabled) => Ok(enabled.into()),
        QuoteEntry::Marker(element) => {
            validate_element("wrap_quotes", &element)?;
            Ok(QuoteWrap::Marker(element))
        }
        QuoteEntry::Each(markers) => {
            for (name, element) in [
                ("left_double", &markers.left_double),
                ("right_double", &markers.right_double),
                ("left_single", &markers.left_single),
                ("right_single", &markers.right_single),
                ("apostrophe", &markers.apostrophe),
                ("double", &markers.double),
                ("single", &markers.single),
            ] {
                validate_element(&format!("wrap_quotes.{}", name), element)?;
            }
            Ok(QuoteWrap::Each(markers))
        }
    }
}

fn convert_parens(entry: ParenEntry) -> Result<ParenWrap<Element>, ConfigError> {
    match entry {
        ParenEntry::Flag(enabled) => Ok(enabled.into()),
        ParenEntry::Marker(element) => {
            validate_element("wrap_parenthesis", &element)?;
            Ok(ParenWrap::Marker(element))
        }
        ParenEntry::Each(markers) => {
            for (name, element) in [
                ("left_paren", &markers.left_paren),
                ("right_paren", &markers.right_paren),
                ("left_square_paren", &markers.left_square_paren),
                ("right_square_paren", &markers.right_square_paren),
            ] {
                validate_element(&format!("wrap_parenthesis.{}", name), element)?;
            }
            Ok(ParenWrap::Each(markers))
        }
    }
}

/// Validate the file and convert it to a pipeline config.
pub(crate) fn validate_and_convert(
    file: ConfigFile,
) -> Result<PipelineConfig<Element>, ConfigError> {
    let widont_limits = WidontLimits::new(
        file.widont_max_last_word_length,
        file.widont_max_last_two_words_length,
    );
    let widont_enabled =
        file.widont_non_breaking_space || file.wrap_widont != WrapEntry::Flag(false);
    if !widont_enabled && widont_limits != WidontLimits::default() {
        log::warn!("widont length limits are set but widont is disabled; ignoring them");
    }

    let caps_enabled = file.wrap_multiple_capitals != WrapEntry::Flag(false);
    if !caps_enabled && file.wrap_multiple_capitals_min_length.is_some() {
        log::warn!(
            "wrap_multiple_capitals_min_length is set but capitals wrapping is disabled; ignoring it"
        );
    }

    Ok(PipelineConfig {
        widont_non_breaking_space: file.widont_non_breaking_space,
        wrap_widont: convert_wrap("wrap_widont", file.wrap_widont)?,
        widont_limits,
        smart_quotes: file.smart_quotes,
        smart_ellipsis: file.smart_ellipsis,
        smart_dashes: file.smart_dashes,
        wrap_ampersand: convert_wrap("wrap_ampersand", file.wrap_ampersand)?,
        wrap_multiple_capitals: convert_wrap(
            "wrap_multiple_capitals",
            file.wrap_multiple_capitals,
        )?,
        wrap_multiple_capitals_min_length: file
            .wrap_multiple_capitals_min_length
            .unwrap_or(DEFAULT_CAPITALS_MIN_LENGTH),
        wrap_ordinal_indicator: convert_wrap(
            "wrap_ordinal_indicator",
            file.wrap_ordinal_indicator,
        )?,
        wrap_quotes: convert_quotes(file.wrap_quotes)?,
        wrap_parenthesis: convert_parens(file.wrap_parenthesis)?,
    })
}

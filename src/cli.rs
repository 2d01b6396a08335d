//! CLI definitions: argument parsing, subcommands, and help text.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use typography_hacks::ConfigFile;

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  typography-hacks -t \"It's the 21st...\" --smart --wrap-ordinals
  echo \"AT&T -- the 2ND\" | typography-hacks --all
  typography-hacks -t \"one two three\" --widont-nbsp -f text
  typography-hacks -t \"(x)\" --wrap-parens -f json
  typography-hacks config                 Show config path and effective configuration
  typography-hacks completions bash       Generate bash completions

Features enabled in the config file stay enabled; flags can only add to them.
";

/// Output format for processed text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// HTML fragment with wrapped spans
    Html,
    /// Plain text after replacements, markers dropped
    Text,
    /// The token tree as JSON
    Json,
}

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Typographic post-processing for display text",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Text to process
    #[arg(
        short = 't',
        long,
        help = "Text to process (use '-' or omit to read from stdin)"
    )]
    pub text: Option<String>,

    /// Non-breaking space between the last two words
    #[arg(long)]
    pub widont_nbsp: bool,

    /// Wrap the last two words in a widont span
    #[arg(long)]
    pub wrap_widont: bool,

    /// Skip widont when the last word is longer than N characters
    #[arg(long, value_name = "N")]
    pub widont_max_last_word: Option<usize>,

    /// Skip widont when the last two words are longer than N characters
    #[arg(long, value_name = "N")]
    pub widont_max_last_two_words: Option<usize>,

    /// Curly quotes and apostrophes
    #[arg(long)]
    pub smart_quotes: bool,

    /// Replace three or more dots with an ellipsis
    #[arg(long)]
    pub smart_ellipsis: bool,

    /// Replace -- with an en dash and --- with an em dash
    #[arg(long)]
    pub smart_dashes: bool,

    /// Shorthand for --smart-quotes --smart-ellipsis --smart-dashes
    #[arg(long)]
    pub smart: bool,

    /// Wrap ampersands
    #[arg(long)]
    pub wrap_ampersand: bool,

    /// Wrap all-caps words
    #[arg(long)]
    pub wrap_caps: bool,

    /// Minimum length of a wrapped all-caps word (1 wraps single capitals only)
    #[arg(long, value_name = "N")]
    pub caps_min_length: Option<usize>,

    /// Wrap ordinal suffixes (1st, 2nd, 3rd, 4th)
    #[arg(long)]
    pub wrap_ordinals: bool,

    /// Wrap quote marks and apostrophes
    #[arg(long)]
    pub wrap_quotes: bool,

    /// Wrap round and square parentheses
    #[arg(long)]
    pub wrap_parens: bool,

    /// Enable every feature
    #[arg(long)]
    pub all: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = Format::Html)]
    pub format: Format,

    /// Config file to use instead of the default location
    #[arg(short = 'c', long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Ignore the config file
    #[arg(long, global = true, conflicts_with = "config")]
    pub no_config: bool,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the config file path and the effective configuration
    Config,
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }

    /// Layer the feature flags on top of the config file.
    pub fn apply_to(&self, file: &mut ConfigFile) {
        if self.all {
            file.enable_all();
        }
        file.widont_non_breaking_space |= self.widont_nbsp;
        file.smart_quotes |= self.smart_quotes || self.smart;
        file.smart_ellipsis |= self.smart_ellipsis || self.smart;
        file.smart_dashes |= self.smart_dashes || self.smart;

        for (enabled, entry) in [
            (self.wrap_widont, &mut file.wrap_widont),
            (self.wrap_ampersand, &mut file.wrap_ampersand),
            (self.wrap_caps, &mut file.wrap_multiple_capitals),
            (self.wrap_ordinals, &mut file.wrap_ordinal_indicator),
        ] {
            if enabled {
                entry.enable();
            }
        }
        if self.wrap_quotes {
            file.wrap_quotes.enable();
        }
        if self.wrap_parens {
            file.wrap_parenthesis.enable();
        }

        if self.widont_max_last_word.is_some() {
            file.widont_max_last_word_length = self.widont_max_last_word;
        }
        if self.widont_max_last_two_words.is_some() {
            file.widont_max_last_two_words_length = self.widont_max_last_two_words;
        }
        if self.caps_min_length.is_some() {
            file.wrap_multiple_capitals_min_length = self.caps_min_length;
        }
    }
}

//! Application run modes: logger init, text processing, config display.

use std::error::Error;
use std::io::{self, Read, Write};

use typography_hacks::core::{app, config};
use typography_hacks::{ConfigFile, Element, Token, process, to_html, to_plain_text};

use crate::cli::{Args, Format};

/// Initialize env_logger on stderr so stdout carries only the output.
pub fn init_logger(args: &Args) {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.log_level()),
    )
    .target(env_logger::Target::Stderr)
    .try_init();
}

/// Config file plus command-line flags, before validation.
fn effective_config(args: &Args) -> Result<ConfigFile, config::ConfigError> {
    let mut file = if args.no_config {
        ConfigFile::default()
    } else {
        config::load(args.config.as_deref())?
    };
    args.apply_to(&mut file);
    Ok(file)
}

/// Text from `--text`, or stdin when absent or `-`.
fn read_input(args: &Args) -> io::Result<String> {
    match args.text.as_deref() {
        Some(text) if text != "-" => Ok(text.to_string()),
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn render(tokens: &[Token<Element>], format: Format) -> Result<String, serde_json::Error> {
    Ok(match format {
        Format::Html => to_html(tokens),
        Format::Text => to_plain_text(tokens),
        Format::Json => serde_json::to_string_pretty(tokens)?,
    })
}

/// Process the input text and print it in the requested format.
pub fn run_process(args: &Args) -> Result<(), Box<dyn Error>> {
    let pipeline = effective_config(args)?.into_pipeline()?;
    let text = read_input(args)?;
    log::debug!("processing {} characters", text.chars().count());

    let tokens = process(&text, &pipeline);
    let out = render(&tokens, args.format)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(out.as_bytes())?;
    if args.format == Format::Json {
        writeln!(stdout)?;
    }
    stdout.flush()?;
    Ok(())
}

/// Print the config file location and the configuration in effect.
pub fn run_config(args: &Args) -> Result<(), Box<dyn Error>> {
    let path = if args.no_config {
        "(ignored)".to_string()
    } else {
        args.config
            .clone()
            .or_else(config::default_path)
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none)".to_string())
    };
    let file = effective_config(args)?;
    // Validate so a broken file is reported here too.
    file.clone().into_pipeline()?;

    println!("{} {}", app::NAME, app::VERSION);
    println!("Config: {}", path);
    println!("{}", serde_json::to_string_pretty(&file)?);
    Ok(())
}

//! Command-line front end for `roman_keys`.
//!
//! Chords come from the positional arguments, or from stdin when none are given.

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use roman_keys::{
    analyze_and_rank_with, report_json, romanize_text, AnalysisOptions, Config, Key, LineMode,
    RankingMode,
};

#[derive(Debug, Parser)]
#[command(name = "roman-keys")]
#[command(author, version, about = "Roman-numeral analysis of chord symbols in every key.")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Config file path (default: ~/.config/roman-keys/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Ordering of candidate keys: score, fifths or alphabetical.
    #[arg(short, long)]
    sort: Option<RankingMode>,

    /// Include minor keys in the catalog.
    #[arg(long)]
    minor: bool,

    /// Treat all input lines as one progression instead of one report per line.
    #[arg(long)]
    combined: bool,

    /// Show only the N best keys of each report.
    #[arg(long)]
    top: Option<usize>,

    /// Emit JSON.
    #[arg(long)]
    json: bool,

    /// Chord symbols, e.g. `C G Am F`. Reads stdin when omitted.
    chords: Vec<String>,

    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render the chords in a single key.
    Key {
        /// Key, e.g. `C:maj`, `F#:min` or `Bb`.
        #[arg(long)]
        key: Key,

        /// Emit JSON.
        #[arg(long)]
        json: bool,

        /// Chord symbols. Reads stdin when omitted.
        chords: Vec<String>,
    },
    /// Create a default configuration file.
    Init,
    /// Show the configuration file path.
    ConfigPath,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.cmd {
        Some(Command::Init) => {
            let path = Config::create_default_config_file()?;
            println!("Created default config at: {}", path.display());
        }
        Some(Command::ConfigPath) => {
            println!("{}", Config::config_path()?.display());
        }
        Some(Command::Key { key, json, chords }) => {
            let text = read_chords(&chords)?;
            let romanized = romanize_text(text.trim(), &key);
            if json {
                let value = serde_json::json!({
                    "schema_version": 1,
                    "key": key,
                    "romanized": romanized,
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!("{}:\n  {}", key.display_name(), romanized);
            }
        }
        None => {
            let config = load_config(cli.config.as_deref())?;
            let opts = AnalysisOptions {
                ranking: cli.sort.unwrap_or(config.ranking),
                include_minor: cli.minor || config.include_minor,
                line_mode: if cli.combined {
                    LineMode::Combined
                } else {
                    config.line_mode
                },
                top: cli.top,
            };
            log::debug!("options: {opts:?}");

            let text = read_chords(&cli.chords)?;
            if cli.json {
                println!("{}", report_json(&text, &opts)?);
            } else {
                println!("{}", analyze_and_rank_with(&text, &opts));
            }
        }
    }

    Ok(())
}

fn load_config(path: Option<&std::path::Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(Config::load_or_default()),
    }
}

/// Join positional chords with spaces, or read all of stdin if there are none.
fn read_chords(args: &[String]) -> Result<String> {
    if !args.is_empty() {
        return Ok(args.join(" "));
    }
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("failed to read chords from stdin")?;
    Ok(text)
}

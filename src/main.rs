// SPDX-License-Identifier: MIT
//
// daylight: command-line front end for the site theme and the code block
// renderer.
//
//   daylight theme [--at <RFC3339>] [--latitude <deg> --longitude <deg>]
//       → Theme as JSON on stdout
//   daylight highlight [FILE] [--class language-<name>] [--format html|json]
//       → rendered code block on stdout (FILE or stdin)
//   daylight styles      → the global stylesheet import
//   daylight languages   → accepted language names
//
// Logs go to stderr and are filtered with RUST_LOG, so stdout carries
// only the requested output.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing_subscriber::{EnvFilter, fmt};

use daylight_code::language::CLASS_PREFIX;
use daylight_code::{Language, SUPPORTED_LANGUAGES, render_code_block};
use daylight_theme::{GLOBAL_STYLES, Observer, get_theme, get_theme_for};

// ─── Arguments ──────────────────────────────────────────────────────────────

/// Sun-tracking site theme and syntax-highlighted code blocks.
#[derive(Parser, Debug)]
#[command(name = "daylight", version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the theme for a moment in time as JSON.
    Theme {
        /// Moment to compute the theme for (RFC 3339). Defaults to now,
        /// in the local time zone.
        #[arg(long, value_parser = parse_rfc3339)]
        at: Option<OffsetDateTime>,

        /// Observer latitude in degrees (north positive). Defaults to the
        /// equator.
        #[arg(long, requires = "longitude", allow_negative_numbers = true)]
        latitude: Option<f64>,

        /// Observer longitude in degrees (east positive). Defaults to the
        /// longitude implied by the UTC offset.
        #[arg(long, requires = "latitude", allow_negative_numbers = true)]
        longitude: Option<f64>,
    },

    /// Render a code block.
    Highlight {
        /// Source file. Reads stdin when omitted.
        file: Option<PathBuf>,

        /// Language class, e.g. `language-python`. Inferred from the file
        /// extension when omitted.
        #[arg(long)]
        class: Option<String>,

        #[arg(long, value_enum, default_value_t = Format::Html)]
        format: Format,
    },

    /// Print the global stylesheet (web font import).
    Styles,

    /// List accepted language names.
    Languages,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Html,
    Json,
}

fn parse_rfc3339(s: &str) -> Result<OffsetDateTime, String> {
    OffsetDateTime::parse(s, &Rfc3339).map_err(|e| format!("invalid RFC 3339 timestamp: {e}"))
}

// ─── Commands ───────────────────────────────────────────────────────────────

fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Theme {
            at,
            latitude,
            longitude,
        } => {
            let datetime = at.unwrap_or_else(now);
            let theme = match (latitude, longitude) {
                (Some(lat), Some(lon)) => get_theme_for(datetime, Observer::new(lat, lon)),
                _ => get_theme(datetime),
            };
            println!("{}", serde_json::to_string_pretty(&theme)?);
        }
        Command::Highlight {
            file,
            class,
            format,
        } => {
            let class = resolve_class(class, file.as_deref())?;
            let source = read_source(file.as_deref())?;
            let block = render_code_block(&source, &class)?;
            match format {
                Format::Html => println!("{}", block.to_html()),
                Format::Json => println!("{}", serde_json::to_string_pretty(&block)?),
            }
        }
        Command::Styles => println!("{GLOBAL_STYLES}"),
        Command::Languages => {
            for (name, language) in SUPPORTED_LANGUAGES {
                println!("{name}\t{language}");
            }
        }
    }
    Ok(())
}

/// The current time in the local zone, or UTC when the local offset
/// cannot be determined.
fn now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|err| {
        tracing::warn!(%err, "local UTC offset unavailable, using UTC");
        OffsetDateTime::now_utc()
    })
}

/// Pick the language class: explicit `--class`, else the file extension.
fn resolve_class(class: Option<String>, file: Option<&Path>) -> Result<String> {
    if let Some(class) = class {
        return Ok(class);
    }
    let Some(path) = file else {
        bail!("reading stdin: pass --class {CLASS_PREFIX}<name>");
    };
    match Language::from_path(path) {
        Some(language) => Ok(format!("{CLASS_PREFIX}{}", language.name())),
        None => bail!(
            "cannot infer language of {}: pass --class {CLASS_PREFIX}<name>",
            path.display()
        ),
    }
}

fn read_source(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        }
        None => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("reading stdin")?;
            Ok(source)
        }
    }
}

fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    run(Args::parse())
}

// ─── Tests ──────────────────────────────────────────────────────────────────

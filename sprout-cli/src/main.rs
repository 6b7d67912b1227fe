//! Sprout CLI
//!
//! Parses HTML-subset markup and prints the resulting document as an outline,
//! JSON, or re-serialized minimal markup.

mod diagnostic;

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use sprout_common::warning::warn_once;
use sprout_dom::Document;
use sprout_html::config::DEFAULT_MAX_DEPTH;
use sprout_html::{ParserConfig, parse_with_config, print_tree};
use strum_macros::{Display, EnumString};

/// Largest `--max-depth` accepted; deeper limits could overflow the main
/// thread's stack on adversarial input.
const MAX_DEPTH_CEILING: usize = 4096;

/// How a parsed document is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
enum OutputFormat {
    /// Indented outline, one node per line
    Tree,
    /// Pretty-printed JSON
    Json,
    /// Minimal markup
    Html,
}

/// Sprout - strict HTML-subset parser
#[derive(Parser, Debug)]
#[command(name = "sprout")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Print the tree of a file
    sprout page.html

    # Parse inline markup as JSON
    sprout --html '<p class="x">Hi</p>' --format json

    # Normalize markup read from stdin
    cat page.html | sprout --format html
"#)]
struct Cli {
    /// Files to parse; `-` or no file reads stdin
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Parse this markup string instead of files
    #[arg(long, value_name = "MARKUP", conflicts_with = "files")]
    html: Option<String>,

    /// Output format: tree, json or html
    #[arg(short, long, default_value_t = OutputFormat::Tree)]
    format: OutputFormat,

    /// Maximum element nesting depth (at most 4096)
    #[arg(
        long,
        value_name = "N",
        default_value_t = DEFAULT_MAX_DEPTH,
        value_parser = parse_max_depth
    )]
    max_depth: usize,
}

fn parse_max_depth(value: &str) -> Result<usize, String> {
    let depth: usize = value
        .parse()
        .map_err(|_| format!("'{value}' is not a non-negative integer"))?;
    if depth > MAX_DEPTH_CEILING {
        return Err(format!("must be at most {MAX_DEPTH_CEILING}"));
    }
    Ok(depth)
}

/// One named piece of markup to parse.
struct Input {
    name: String,
    source: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = ParserConfig::default().with_max_depth(cli.max_depth);

    let inputs = collect_inputs(&cli)?;
    let mut failures = 0;
    for input in &inputs {
        match parse_with_config(&input.source, &config) {
            Ok(document) => {
                if document.is_empty() {
                    warn_once("cli", "input produced an empty document");
                }
                println!("{}", render(&document, cli.format)?);
            }
            Err(err) => {
                eprintln!("{}\n", diagnostic::render(&input.name, &input.source, &err));
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!("{failures} of {} input(s) failed to parse", inputs.len());
    }
    Ok(())
}

fn collect_inputs(cli: &Cli) -> Result<Vec<Input>> {
    if let Some(html) = &cli.html {
        return Ok(vec![Input {
            name: "<inline>".to_string(),
            source: html.clone(),
        }]);
    }
    if cli.files.is_empty() {
        return Ok(vec![read_stdin()?]);
    }

    cli.files
        .iter()
        .map(|path| {
            if path.as_os_str() == "-" {
                return read_stdin();
            }
            let source = fs::read_to_string(path)
                .with_context(|| format!("failed to read '{}'", path.display()))?;
            Ok(Input {
                name: path.display().to_string(),
                source,
            })
        })
        .collect()
}

fn read_stdin() -> Result<Input> {
    let mut source = String::new();
    let _ = io::stdin()
        .read_to_string(&mut source)
        .context("failed to read stdin")?;
    Ok(Input {
        name: "<stdin>".to_string(),
        source,
    })
}

fn render(document: &Document, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Tree => print_tree(document).trim_end().to_string(),
        OutputFormat::Json => {
            serde_json::to_string_pretty(document).context("failed to serialize document")?
        }
        OutputFormat::Html => document.to_html(),
    })
}

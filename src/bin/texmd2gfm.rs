//! texmd2gfm CLI - pandoc LaTeX Markdown to GitHub Flavored Markdown
//!
//! Usage:
//!   pandoc --from=latex --to=gfm+tex_math_dollars <maths.tex | texmd2gfm --label-type p

use clap::Parser;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use texmd2gfm::{convert, ConversionError, ConversionResult, GfmOptions, LabelStyle};

#[derive(Parser)]
#[command(name = "texmd2gfm")]
#[command(version)]
#[command(about = "Convert LaTeX-generated Markdown to GitHub-compatible Markdown", long_about = None)]
struct Args {
    /// Input Markdown file produced by `pandoc --from=latex --to=gfm+tex_math_dollars`
    /// (reads from stdin if not provided)
    input_file: Option<PathBuf>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Remove parentheses around citation links
    #[arg(long)]
    remove_parens: bool,

    /// Use [label](#label) instead of [[label]](#label) in references
    #[arg(long)]
    keep_link_brackets: bool,

    /// How \label{...} is rendered: tag (\tag{...} inside math),
    /// quadd:<n> (<n> \qquad then \text{(label)} inside math),
    /// p (<p align="right">(label)</p> above the math block)
    #[arg(long, default_value = "tag")]
    label_type: LabelStyle,

    /// Write the equation label -> number map as JSON to this path
    #[arg(long)]
    label_map: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    if let Err(err) = run(args) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run(args: Args) -> ConversionResult<()> {
    let input = match args.input_file {
        Some(ref path) => fs::read_to_string(path)
            .map_err(|e| ConversionError::input_not_found(path, e))?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    debug!(bytes = input.len(), "input read");

    let options = GfmOptions::new()
        .with_remove_parens(args.remove_parens)
        .with_keep_link_brackets(args.keep_link_brackets)
        .with_label_style(args.label_type);

    let result = convert(&input, &options);

    if let Some(path) = &args.label_map {
        let serialized = serde_json::to_string_pretty(&result.equations)?;
        fs::write(path, serialized)?;
        info!(path = %path.display(), equations = result.equations.len(), "label map written");
    }

    match args.output {
        Some(path) => {
            fs::write(&path, &result.content)?;
            info!(path = %path.display(), "output written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(result.content.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

//! texty - copy HTML lists to the clipboard in Slack's paste format
//!
//! Reads an HTML fragment (from the clipboard's HTML representation or a
//! file), converts any list it contains into Slack's rich-text clipboard
//! payload, and installs the result back onto the clipboard so pasting
//! into Slack reproduces the list structure.

mod pasteboard;

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use texty::TextyService;
use tracing::{debug, info, Level};
use tracing_subscriber::EnvFilter;

use crate::pasteboard::Pasteboard;

/// Copy HTML lists to the clipboard in Slack's paste format
#[derive(Parser, Debug)]
#[command(name = "texty")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Read HTML from a file instead of the clipboard
    file: Option<PathBuf>,

    /// Copy only the plain-text outline
    #[arg(short, long)]
    text: bool,

    /// Print the converted output instead of touching the clipboard
    #[arg(long)]
    dry_run: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_target(false)
        .init();

    run(&cli, &pasteboard::system())
}

fn run(cli: &Cli, pasteboard: &dyn Pasteboard) -> Result<()> {
    let html = match &cli.file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read '{}'", path.display()))?,
        None => pasteboard
            .read_html()
            .context("failed to read HTML from the clipboard")?,
    };
    if html.trim().is_empty() {
        bail!("no HTML input to convert");
    }
    debug!(bytes = html.len(), "read input HTML");

    let service = TextyService::new();
    let result = service.convert_html(&html)?;

    if cli.dry_run {
        println!("{}", result.plain_text);
        if !cli.text {
            println!("{}", result.delta.to_compact_json()?);
        }
        return Ok(());
    }

    if cli.text {
        pasteboard.write_text(&result.plain_text)?;
        info!("plain text copied to clipboard");
    } else {
        pasteboard.write_rich(&result.payload, &result.plain_text)?;
        info!(
            payload_bytes = result.payload.len(),
            "rich text copied to clipboard"
        );
    }
    Ok(())
}

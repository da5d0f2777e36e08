use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use crate::clipboard::read_from_clipboard;
use crate::models::Conversation;
use crate::parsers::parse_transcript;
use crate::render::render_markdown;
use crate::utils::sanitize_transcript;

#[derive(Parser)]
#[command(name = "messenger2md")]
#[command(version = "0.1.0")]
#[command(about = "Convert pasted chat transcripts into Markdown", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a transcript into Markdown or JSON
    Convert {
        /// Your full display name as it appears in the transcript
        #[arg(short, long)]
        name: String,

        /// Read the transcript from a file instead of stdin
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Read the transcript from the system clipboard
        #[arg(long, conflicts_with = "input")]
        clipboard: bool,

        /// Output format
        #[arg(long, value_enum, default_value = "markdown")]
        format: OutputFormat,

        /// Echo the sanitized transcript to stderr before parsing
        #[arg(long)]
        debug: bool,
    },

    /// Show statistics about a transcript
    Stats {
        /// Your full display name as it appears in the transcript
        #[arg(short, long)]
        name: String,

        /// Read the transcript from a file instead of stdin
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Read the transcript from the system clipboard
        #[arg(long, conflicts_with = "input")]
        clipboard: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Markdown,
    Json,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Convert { name, input, clipboard, format, debug }) => {
            convert(&name, input.as_deref(), clipboard, format, debug)?;
        }
        Some(Commands::Stats { name, input, clipboard }) => {
            show_stats(&name, input.as_deref(), clipboard)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

/// Resolve the transcript source (clipboard, file, or stdin) and sanitize
/// the captured text to printable characters.
fn read_transcript(input: Option<&Path>, clipboard: bool) -> Result<String> {
    let raw = if clipboard {
        read_from_clipboard()?
    } else if let Some(path) = input {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read transcript from {}", path.display()))?
    } else {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read transcript from stdin")?;
        buffer
    };

    Ok(sanitize_transcript(&raw))
}

fn convert(
    name: &str,
    input: Option<&Path>,
    clipboard: bool,
    format: OutputFormat,
    debug: bool,
) -> Result<()> {
    let text = read_transcript(input, clipboard)?;

    if debug {
        eprintln!("Parsing the following conversation:\n<<=====>>{}\n<<=====>>", text);
    }

    let conversations = parse_transcript(&text, name)?;

    match format {
        OutputFormat::Markdown => println!("{}", render_markdown(&conversations)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&conversations)?),
    }

    Ok(())
}

fn show_stats(name: &str, input: Option<&Path>, clipboard: bool) -> Result<()> {
    let text = read_transcript(input, clipboard)?;
    let conversations = parse_transcript(&text, name)?;

    let turns: usize = conversations.iter().map(|c| c.monologues.len()).sum();
    let messages: usize = conversations.iter().map(Conversation::message_count).sum();

    let mut speakers: Vec<&str> = conversations
        .iter()
        .flat_map(|c| &c.monologues)
        .map(|m| m.speaker.as_str())
        .collect();
    speakers.sort_unstable();
    speakers.dedup();

    println!("Transcript Statistics");
    println!("================================");
    println!("Conversations: {}", conversations.len());
    println!("  Speaker turns: {}", turns);
    println!("  Messages: {}", messages);
    println!();
    println!("Speakers:");
    for speaker in &speakers {
        println!("  {}", speaker);
    }

    Ok(())
}

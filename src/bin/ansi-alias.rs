//! Command-line front end: render escape sequences and list aliases.

use std::io::Write;

use ansi_alias::{ansi_esc, AliasCatalog, AliasResolver, DEFAULT_SAMPLE_TEXT};
use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "ansi-alias", version, about = "ANSI escape sequences from style aliases")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Disable logging
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the escape sequence for a format, optionally wrapping text
    Render {
        /// Aliases separated by ',' or ';' (e.g. "bold, text/blue")
        format: String,
        /// Text to wrap; a reset sequence is appended after it
        text: Option<String>,
    },
    /// List every alias with a styled sample
    List {
        /// Show only one alias per SGR code
        #[arg(long)]
        unique: bool,
        /// Sample text to style
        #[arg(long, default_value = DEFAULT_SAMPLE_TEXT)]
        text: String,
        /// Print the sample without escape sequences
        #[arg(long)]
        plain: bool,
        /// Print the aliases as JSON
        #[arg(long, conflicts_with = "plain")]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    let mut stdout = std::io::stdout().lock();
    run(cli.command, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}

fn run(command: Command, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Render { format, text } => {
            let sequence = ansi_esc(format.as_str(), text.as_deref())
                .with_context(|| format!("cannot render '{}'", format))?;
            out.write_all(sequence.as_bytes())?;
        }
        Command::List {
            unique,
            text,
            plain,
            json,
        } => {
            let catalog = AliasCatalog::new(AliasResolver::global())
                .unique(unique)
                .sample(text);
            if json {
                serde_json::to_writer_pretty(&mut *out, &catalog.entries())?;
                writeln!(out)?;
            } else {
                let colored = !plain && console::colors_enabled();
                tracing::debug!(colored, unique, "rendering alias catalog");
                out.write_all(catalog.render(colored)?.as_bytes())?;
            }
        }
    }
    Ok(())
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info"),
            2 => tracing_subscriber::EnvFilter::new("debug"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

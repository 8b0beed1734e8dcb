//! CLI entrypoint for multismtp
//!
//! This is the main binary that wires together all layers using
//! dependency injection: the TOML-backed store adapter satisfies the
//! resolver's three ports.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use multismtp_application::{SenderConfigResolver, SenderMap};
use multismtp_domain::{ConfigEntry, EntryId};
use multismtp_infrastructure::StoreLoader;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "multismtp", version, about = "SMTP sender configuration lookup")]
struct Cli {
    /// Path to the TOML store file
    #[arg(long, short = 's')]
    store: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List all configuration entries (id and title)
    List,
    /// Print the sender map (email -> label)
    Senders {
        /// Extra EMAIL=LABEL pairs merged last (override matching emails)
        #[arg(long = "extra", value_parser = parse_extra)]
        extra: Vec<(String, String)>,
    },
    /// Resolve the configuration entry for a sender email
    Resolve {
        /// Sender email address (exact, case-sensitive match)
        email: String,
    },
    /// Show a configuration entry by id
    Show {
        /// Entry identifier
        id: String,
    },
}

fn parse_extra(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((email, label)) if !email.is_empty() => {
            Ok((email.to_string(), label.to_string()))
        }
        _ => Err(format!("expected EMAIL=LABEL, got '{s}'")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!(store = %cli.store.display(), "loading store");

    // === Dependency Injection ===
    // One adapter satisfies all three ports.
    let store = Arc::new(StoreLoader::load(&cli.store).map_err(|e| anyhow!(e))?);
    let resolver = SenderConfigResolver::new(store.clone(), store.clone(), store);

    match cli.command {
        Command::List => {
            for (id, title) in resolver.list_config_entries() {
                println!("{id}\t{title}");
            }
        }
        Command::Senders { extra } => {
            let extras: SenderMap = extra.into_iter().collect();
            for (email, label) in resolver.senders_with_labels(extras) {
                println!("{email}\t{label}");
            }
        }
        Command::Resolve { email } => {
            let entry = resolver.resolve_entry_by_email(&email)?;
            print_entry(&entry);
        }
        Command::Show { id } => {
            let entry = resolver.load_entry_by_id(&EntryId::new(id))?;
            print_entry(&entry);
        }
    }

    Ok(())
}

fn print_entry(entry: &ConfigEntry) {
    println!("id:    {}", entry.id);
    println!("type:  {}", entry.entry_type);
    println!("title: {}", entry.title);

    let mut names: Vec<_> = entry.fields.keys().collect();
    names.sort();
    for name in names {
        match entry.field_value(name) {
            Some(value) => {
                let rendered = value
                    .as_str()
                    .map(str::to_string)
                    .unwrap_or_else(|| value.to_string());
                println!("{name}: {rendered}");
            }
            None => println!("{name}: (empty)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_extra_valid() {
        assert_eq!(
            parse_extra("x@y.com=Test Sender").unwrap(),
            ("x@y.com".to_string(), "Test Sender".to_string())
        );
    }

    #[test]
    fn test_parse_extra_invalid() {
        assert!(parse_extra("no-separator").is_err());
        assert!(parse_extra("=label-only").is_err());
    }

    #[test]
    fn test_cli_parses_subcommands() {
        let cli = Cli::try_parse_from([
            "multismtp", "--store", "store.toml", "resolve", "a@x.com",
        ])
        .unwrap();
        assert!(matches!(cli.command, Command::Resolve { email } if email == "a@x.com"));

        let cli = Cli::try_parse_from([
            "multismtp", "-s", "store.toml", "-vv", "senders",
            "--extra", "x@y.com=Override",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Command::Senders { extra } if extra.len() == 1));
    }
}

//! CLI entry point for the Kezan Protocol companion client
//!
//! Provides command-line access to the dashboard's data feeds and to the
//! shortcut table: listing, conflict checking, and chord simulation.

use clap::{Parser, Subcommand};
use colored::*;
use kezan_protocol::config::ClientConfig;
use kezan_protocol::gateway::{ApiGateway, Resource};
use kezan_protocol::shortcuts::{
    load_shortcuts_file, parse_shortcut_entries, Action, ChordTable, ConflictDetector,
    HandlerTable, KeyEvent, ManualEventSource, ShortcutDispatcher,
};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "kezan-protocol")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the client config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch trading advice for the current auction snapshot
    Advice,

    /// Fetch underpriced auctions with the best margins
    Deals,

    /// Fetch profitable crafting recipes
    Craftables,

    /// Fetch every feed, the way the dashboard does on mount
    Board,

    /// Inspect and exercise the keyboard shortcut table
    Shortcuts {
        #[command(subcommand)]
        command: ShortcutCommands,
    },
}

#[derive(Subcommand)]
enum ShortcutCommands {
    /// List the active chord table
    List,

    /// Check a shortcuts file for chord conflicts
    Check {
        /// Path to the shortcuts file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Feed one chord through the dispatcher and report what fires
    Simulate {
        /// Chord to press, like "ctrl+n", "ctrl+shift+s", or "F5"
        chord: String,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Advice => fetch_feed(&config, Resource::Advice),
        Commands::Deals => fetch_feed(&config, Resource::Deals),
        Commands::Craftables => fetch_feed(&config, Resource::Craftables),
        Commands::Board => {
            // Feeds are independent and idempotent; order does not matter
            for resource in Resource::ALL {
                fetch_feed(&config, resource);
                println!();
            }
        }
        Commands::Shortcuts { command } => match command {
            ShortcutCommands::List => list_shortcuts(&config)?,
            ShortcutCommands::Check { file } => check_shortcuts(&file)?,
            ShortcutCommands::Simulate { chord } => simulate_chord(&config, &chord)?,
        },
    }

    Ok(())
}

/// Load client config, expanding a user-supplied path
fn load_config(path: Option<&Path>) -> anyhow::Result<ClientConfig> {
    let expanded = match path {
        Some(p) => {
            let raw = p
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Invalid path encoding"))?;
            Some(PathBuf::from(shellexpand::tilde(raw).as_ref()))
        }
        None => None,
    };

    Ok(ClientConfig::load_or_default(expanded.as_deref())?)
}

/// The chord table in effect: the user's shortcuts file, or the built-ins
fn active_table(config: &ClientConfig) -> anyhow::Result<ChordTable> {
    match &config.shortcuts_file {
        Some(path) => Ok(load_shortcuts_file(path)?),
        None => Ok(ChordTable::defaults()),
    }
}

/// Fetch one feed and print its records
fn fetch_feed(config: &ClientConfig, resource: Resource) {
    let gateway = ApiGateway::new(config.api_base_url.clone(), config.timeout());

    println!(
        "{} Fetching {} from {}",
        "→".cyan(),
        resource,
        gateway.base_url()
    );

    let records = gateway.fetch(resource);

    if records.is_empty() {
        println!("{} No data (empty feed or backend unavailable)", "✗".yellow());
        return;
    }

    for record in &records {
        match (record.get("id"), record.get("nombre")) {
            (Some(id), Some(nombre)) => {
                println!("  {} {}", format!("#{}", id).dimmed(), nombre)
            }
            _ => println!("  {}", record),
        }
    }

    println!("\n{} {} records", "✓".green(), records.len());
}

/// List the active chord table
fn list_shortcuts(config: &ClientConfig) -> anyhow::Result<()> {
    let table = active_table(config)?;

    println!("{}\n", "Active shortcuts".bold());

    for (chord, action) in table.sorted_entries() {
        println!("{} → {}", format!("{}", chord).cyan().bold(), action.to_string().green());
    }

    println!("\n{} Total: {} chords", "✓".green(), table.len());

    Ok(())
}

/// Check a shortcuts file for chord conflicts
fn check_shortcuts(file: &Path) -> anyhow::Result<()> {
    // Expand tilde in path
    let expanded = shellexpand::tilde(
        file.to_str()
            .ok_or_else(|| anyhow::anyhow!("Invalid path encoding"))?,
    );
    let path = Path::new(expanded.as_ref());

    let content = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file: {}", e))?;

    println!("{} Parsing shortcuts: {}", "→".cyan(), path.display());

    let entries = parse_shortcut_entries(&content)?;

    println!("{} Found {} bindings\n", "✓".green(), entries.len());

    let mut detector = ConflictDetector::new();
    for (chord, action) in entries {
        detector.add_binding(chord, action);
    }

    let conflicts = detector.find_conflicts();

    if conflicts.is_empty() {
        println!("{} {}", "✓".green().bold(), "No conflicts detected!".bold());
    } else {
        println!(
            "{} Found {} conflict{}:\n",
            "✗".red().bold(),
            conflicts.len(),
            if conflicts.len() == 1 { "" } else { "s" }
        );

        for (i, conflict) in conflicts.iter().enumerate() {
            println!(
                "{} {}",
                format!("Conflict {}", i + 1).yellow().bold(),
                format!("{}", conflict.chord).cyan()
            );

            for (idx, action) in conflict.actions.iter().enumerate() {
                println!("  {} {}", format!("{}.", idx + 1).dimmed(), action);
            }
            println!();
        }

        println!("{}", "⚠ One chord cannot trigger two actions!".yellow());
        std::process::exit(1);
    }

    Ok(())
}

/// Feed one chord through a registered dispatcher and report the outcome
fn simulate_chord(config: &ClientConfig, chord: &str) -> anyhow::Result<()> {
    let event = parse_chord_arg(chord)?;

    let mut dispatcher = ShortcutDispatcher::new(ManualEventSource::new(), active_table(config)?);

    let mut handlers = HandlerTable::new();
    for action in Action::ALL {
        handlers = handlers.on(action, move || {
            println!("{} would invoke {}", "✓".green().bold(), action.to_string().green())
        });
    }
    dispatcher.register(handlers);

    let suppressed = dispatcher.source_mut().emit(&event);

    if suppressed {
        println!("{} Default action suppressed", "✓".green());
    } else {
        println!("{} No chord matched; event passes through", "→".cyan());
    }

    Ok(())
}

/// Parse a chord argument like "ctrl+shift+s" or "F5" into a key event
fn parse_chord_arg(chord: &str) -> anyhow::Result<KeyEvent> {
    let mut ctrl = false;
    let mut meta = false;
    let mut shift = false;
    let mut key: Option<&str> = None;

    for part in chord.split('+') {
        let part = part.trim();
        match part.to_lowercase().as_str() {
            "ctrl" | "control" => ctrl = true,
            "cmd" | "meta" | "super" => meta = true,
            "shift" => shift = true,
            "" => anyhow::bail!("Empty token in chord '{}'", chord),
            _ => {
                if key.is_some() {
                    anyhow::bail!("More than one key in chord '{}'", chord);
                }
                key = Some(part);
            }
        }
    }

    let key = key.ok_or_else(|| anyhow::anyhow!("No key in chord '{}'", chord))?;

    Ok(KeyEvent {
        key: key.to_string(),
        ctrl,
        meta,
        shift,
    })
}

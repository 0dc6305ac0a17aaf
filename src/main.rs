//! TrailAssist inspector - resolve anagram clues against a simulated session
//!
//! Drives the clue catalog from the command line: look a clue up by scroll
//! item id or observed text, and print the overlay hint the host would
//! render, either as panel lines or as the JSON payload.

use anyhow::{bail, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use trail_assist::catalog::ClueCatalog;
use trail_assist::overlay::{ClueHint, HintFeed, MarkerDirective};
use trail_assist::session::ClueTracker;
use trail_assist::state::{self, SimulatedState};

/// TrailAssist - anagram clue resolution for treasure trails
#[derive(Parser, Debug)]
#[command(name = "trail-assist")]
#[command(about = "Resolve anagram clues and print the overlay hint")]
struct Args {
    /// Observed clue or challenge text to match
    #[arg(short, long, conflicts_with = "item")]
    text: Option<String>,

    /// Clue scroll item id to look up
    #[arg(short, long)]
    item: Option<i32>,

    /// Simulated session file (TOML); defaults to the config directory
    #[arg(short, long)]
    state: Option<PathBuf>,

    /// Write a template session file and exit
    #[arg(long)]
    write_state: bool,

    /// List every record in the catalog and exit
    #[arg(long)]
    list: bool,

    /// Print the hint payload as JSON instead of panel lines
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let level = if args.debug { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Write template session mode
    if args.write_state {
        let path = match &args.state {
            Some(path) => path.clone(),
            None => state::default_state_path()?,
        };
        state::save_state(&SimulatedState::default(), &path)?;
        println!("Wrote template session to {}", path.display());
        return Ok(());
    }

    let session = load_or_default_session(args.state.as_deref())?;
    let catalog = Arc::new(ClueCatalog::new());

    // List catalog mode
    if args.list {
        println!("Catalog ({} records):", catalog.len());
        for record in catalog.records() {
            let text = record.resolve_text(&session)?;
            let npc = record.resolve_npc(&session)?;
            match record.item_id() {
                Some(id) => println!("  [{id:>5}] {text} -> {npc} ({})", record.area()),
                None => println!("  [     ] {text} -> {npc} ({})", record.area()),
            }
        }
        return Ok(());
    }

    info!("TrailAssist inspector starting...");

    let tracker = ClueTracker::new(catalog);

    let sighted = if let Some(text) = &args.text {
        tracker.on_game_text(&session, text)?
    } else if let Some(item_id) = args.item {
        tracker.on_clue_item(item_id)
    } else {
        bail!("nothing to do: pass --text or --item (or --list)");
    };

    if !sighted {
        println!("No clue record matches.");
        return Ok(());
    }

    // Hand the hint over the renderer boundary the way the host does: the
    // resolution side sends on its own handle, the render side drains
    let feed = HintFeed::new();
    let receiver = feed.receiver();
    let sender = feed.sender();
    if let Some(hint) = tracker.active_hint(&session)? {
        let _ = sender.send(hint);
    }

    for hint in receiver.try_iter() {
        if args.json {
            println!("{}", serde_json::to_string_pretty(&hint)?);
        } else {
            print_hint(&hint);
        }
    }

    Ok(())
}

/// Load the session file, or fall back to a fresh default session
fn load_or_default_session(path: Option<&Path>) -> Result<SimulatedState> {
    if let Some(path) = path {
        let session = state::load_state(path)?;
        info!("Loaded session from {:?}", path);
        return Ok(session);
    }
    if let Ok(default_path) = state::default_state_path() {
        if default_path.exists() {
            if let Ok(session) = state::load_state(&default_path) {
                info!("Loaded session from {:?}", default_path);
                return Ok(session);
            }
        }
    }
    info!("Using a fresh session: no quest progress, all varbits 0");
    Ok(SimulatedState::default())
}

/// Print a hint the way the overlay panel lays it out
fn print_hint(hint: &ClueHint) {
    for line in &hint.lines {
        if line.value.is_empty() {
            println!("{}", line.label);
        } else {
            println!("  {:<9} {}", line.label, line.value);
        }
    }
    match &hint.marker {
        MarkerDirective::NpcAnchor { name } => println!("  Marker:   NPC \"{name}\""),
        MarkerDirective::ObjectAnchor { object_id } => {
            println!("  Marker:   object {object_id}")
        }
    }
    if let Some(point) = hint.location {
        println!("  World:    ({}, {}, {})", point.x, point.y, point.plane);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_reject_text_and_item_together() {
        let parsed =
            Args::try_parse_from(["trail-assist", "--text", "A BAKER", "--item", "2801"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_args_accept_either_lookup_alone() {
        assert!(Args::try_parse_from(["trail-assist", "--text", "A BAKER"]).is_ok());
        assert!(Args::try_parse_from(["trail-assist", "--item", "2801"]).is_ok());
    }
}

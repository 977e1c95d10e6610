//! Minimal host stub intended for downstream embedders.
//!
//! Guarded by the `host` feature: boots the headless core with demo board
//! content, reports where the session stands, and drains any due deferred
//! transitions once. Real frontends embed [`AppCore`] directly; this binary
//! exists so integrations have something runnable to reference.

use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use commons_app::{AppConfig, AppCore};
use commons_core::{BoardContentProvider, BoardId, Post, PostDraft, TimeStamp};

#[derive(Debug, Parser)]
#[command(name = "app-host", about = "Boot the Commons headless core")]
struct Args {
    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override: posts seeded per board.
    #[arg(long)]
    posts_per_board: Option<usize>,

    /// Override: messages-redirect delay in milliseconds.
    #[arg(long)]
    redirect_ms: Option<u64>,

    /// Print the full view-state snapshot as JSON.
    #[arg(long)]
    snapshot: bool,
}

/// On-disk configuration; every field optional, CLI flags win.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    posts_per_board: Option<usize>,
    messages_redirect_ms: Option<u64>,
}

/// Demo content for the host stub. Deterministic and dependency-free; real
/// embedders plug in their own provider.
struct DemoContent;

impl BoardContentProvider for DemoContent {
    fn posts_for(&self, board: BoardId, count: usize) -> Vec<Post> {
        const BASE_MILLIS: u64 = 1_718_000_000_000;
        (0..count)
            .map(|index| {
                let at = TimeStamp::from_millis(BASE_MILLIS - index as u64 * 3_600_000);
                PostDraft {
                    title: format!("Welcome to the {} board", board.title()),
                    content: "Seeded demo content.".to_string(),
                    batch: None,
                    images: Vec::new(),
                }
                .into_post(board, at)
            })
            .collect()
    }
}

fn load_config(args: &Args) -> Result<AppConfig> {
    let file = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            toml::from_str::<ConfigFile>(&raw)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => ConfigFile::default(),
    };

    let defaults = AppConfig::default();
    Ok(AppConfig {
        posts_per_board: args
            .posts_per_board
            .or(file.posts_per_board)
            .unwrap_or(defaults.posts_per_board),
        messages_redirect_ms: args
            .redirect_ms
            .or(file.messages_redirect_ms)
            .unwrap_or(defaults.messages_redirect_ms),
    })
}

fn now() -> TimeStamp {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();
    TimeStamp::from_millis(millis)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;

    let mut core = AppCore::bootstrap(config, &DemoContent);
    core.advance(now());

    let seeded: usize = BoardId::ALL
        .iter()
        .map(|b| core.views().boards.feed(*b).len())
        .sum();
    println!(
        "App host ready: {} boards, {} seeded posts, rendering {:?}",
        BoardId::ALL.len(),
        seeded,
        core.render_target()
    );

    if args.snapshot {
        println!("{}", serde_json::to_string_pretty(core.views())?);
    }
    Ok(())
}

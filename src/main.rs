//! Gomoku desktop board
//!
//! Hotseat play under any built-in variant or a ruleset loaded from TOML.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::info;

use gomoku::ui::GomokuApp;
use gomoku::RuleSet;

#[derive(Parser, Debug)]
#[command(author, version, about = "Gomoku rule engine with a desktop board")]
struct Args {
    /// Built-in variant to play
    #[arg(long, default_value = "standard")]
    variant: String,

    /// TOML rules file (overrides --variant)
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "gomoku=trace" (overrides RUST_LOG)
    #[arg(long)]
    log: Option<String>,

    /// Print the built-in variants and exit
    #[arg(long)]
    list_variants: bool,
}

fn init_logging(filter: Option<&str>) -> Result<()> {
    let env_filter = match filter {
        Some(directives) => tracing_subscriber::EnvFilter::try_new(directives)
            .with_context(|| format!("invalid log filter '{directives}'"))?,
        None => tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
    };
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    Ok(())
}

fn load_rules(args: &Args) -> Result<RuleSet> {
    if let Some(path) = &args.rules {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read rules file {}", path.display()))?;
        return RuleSet::from_toml_str(&source)
            .with_context(|| format!("failed to load rules from {}", path.display()));
    }

    RuleSet::preset(&args.variant).ok_or_else(|| {
        anyhow!(
            "unknown variant '{}' (try --list-variants)",
            args.variant
        )
    })
}

fn print_variants() {
    for rules in RuleSet::presets() {
        let size = rules.board_size();
        let forbidden: Vec<&str> = rules.forbidden().iter().map(|r| r.name()).collect();
        println!(
            "{:<12} {}x{}  overlines {}  forbidden [{}]{}",
            rules.name(),
            size,
            size,
            if rules.allow_overlines() { "win" } else { "don't win" },
            forbidden.join(", "),
            if rules.requires_unblocked_win() { "  unblocked win" } else { "" },
        );
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.list_variants {
        print_variants();
        return Ok(());
    }

    init_logging(args.log.as_deref())?;

    let rules = Arc::new(load_rules(&args)?);
    info!(
        "Starting {} ({}x{}, {} in a row)",
        rules.name(),
        rules.board_size(),
        rules.board_size(),
        rules.win_length()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title(format!("Gomoku - {}", rules.name())),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, rules)))),
    )
    .map_err(|e| anyhow!("failed to open the board window: {e}"))
}

//! furrow-bench: compare visiting-order strategies for a point set.
//!
//! Reads a JSON array of `{"id", "x", "y"}` points, scores every exposed
//! strategy, and prints comparison bars. Useful for:
//!
//! - Checking which ordering is shortest for a real point group
//! - Comparing the linear and spatial nearest-neighbor backends
//! - Trying out strategy activation without a persistence backend
//!
//! # Usage
//!
//! ```text
//! cargo run --release --bin furrow-bench -- [OPTIONS] <POINTS_PATH>
//! ```

#![allow(clippy::print_stdout, clippy::print_stderr)]

mod logging;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use furrow_order::{
    Activation, GroupId, NearestNeighborIndex, Persistence, Point, ScoreConfig, ScoreMap,
    Selector, SelectorConfig, StrategyBar, StrategyName, UiHost,
};
use serde::Serialize;

use crate::logging::{LogLevel, init_logger};

/// Width of the longest comparison bar, in characters.
const BAR_WIDTH: usize = 40;

/// Score and compare visiting orders for a point set.
#[derive(Parser)]
#[command(name = "furrow-bench", version)]
struct Cli {
    /// Path to a JSON array of points (`[{"id": 1, "x": 0.0, "y": 0.0}, ...]`).
    points_path: PathBuf,

    /// Expose every experimental heuristic strategy.
    #[arg(long)]
    experimental: bool,

    /// Expose one experimental strategy (repeatable).
    #[arg(long = "enable")]
    enabled: Vec<StrategyName>,

    /// Nearest-neighbor search backend.
    #[arg(long, value_enum, default_value_t = NnIndex::Linear)]
    nn_index: NnIndex,

    /// Seed for the `random` strategy.
    #[arg(long)]
    seed: Option<u64>,

    /// Full score config as a JSON string.
    ///
    /// When provided, `--nn-index` and `--seed` are ignored.
    #[arg(long)]
    config_json: Option<String>,

    /// The group's current strategy, highlighted in the output.
    #[arg(long)]
    current: Option<StrategyName>,

    /// Activate a strategy after scoring.
    #[arg(long)]
    activate: Option<StrategyName>,

    /// Group id used for activation.
    #[arg(long, default_value_t = 0)]
    group: GroupId,

    /// Output a JSON report instead of bars.
    #[arg(long)]
    json: bool,

    /// Log verbosity (written to stderr).
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
}

/// Nearest-neighbor backend selection.
#[derive(Clone, Copy, ValueEnum)]
enum NnIndex {
    /// Exhaustive scan, O(n^2).
    Linear,
    /// R*-tree accelerated search.
    Spatial,
}

/// Build a [`ScoreConfig`] from CLI arguments.
///
/// If `--config-json` is provided it is parsed directly and the individual
/// flags are ignored.
fn score_config_from_cli(cli: &Cli) -> Result<ScoreConfig, String> {
    if let Some(ref json) = cli.config_json {
        return serde_json::from_str(json).map_err(|e| format!("Error parsing --config-json: {e}"));
    }

    Ok(ScoreConfig {
        nearest_neighbor_index: match cli.nn_index {
            NnIndex::Linear => NearestNeighborIndex::Linear,
            NnIndex::Spatial => NearestNeighborIndex::Spatial,
        },
        random_seed: cli.seed,
    })
}

/// Build a [`SelectorConfig`] from CLI arguments.
fn selector_config_from_cli(cli: &Cli) -> SelectorConfig {
    let mut config = if cli.experimental {
        SelectorConfig::all_experimental()
    } else {
        SelectorConfig::default()
    };
    config
        .enabled_experimental_strategies
        .extend(cli.enabled.iter().copied().filter(|s| !s.is_applicable()));
    config
}

/// Read and validate the point file.
fn load_points(path: &Path) -> Result<Vec<Point>, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("Error reading {}: {e}", path.display()))?;
    let points: Vec<Point> = serde_json::from_str(&text)
        .map_err(|e| format!("Error parsing {}: {e}", path.display()))?;
    furrow_order::validate_points(&points)
        .map_err(|e| format!("Invalid point set in {}: {e}", path.display()))?;
    Ok(points)
}

/// Persistence stand-in that prints each call.
struct PrintPersistence;

impl Persistence for PrintPersistence {
    fn apply_sort(&mut self, group: GroupId, strategy: StrategyName) {
        println!("apply: group {group} sort_type={strategy}");
    }

    fn commit(&mut self, group: GroupId) {
        println!("commit: group {group}");
    }
}

/// UI stand-in that writes notices to stderr.
struct StderrUi;

impl UiHost for StderrUi {
    fn preview(&mut self, strategy: Option<StrategyName>) {
        match strategy {
            Some(s) => eprintln!("preview: {s}"),
            None => eprintln!("preview cleared"),
        }
    }

    fn notify(&mut self, message: &str) {
        eprintln!("{message}");
    }
}

/// Machine-readable output for `--json`.
#[derive(Serialize)]
struct Report<'a> {
    point_count: usize,
    scores: &'a ScoreMap,
    bars: &'a [StrategyBar],
    best: Option<StrategyName>,
}

/// Render one bar as a fixed-width text line.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn render_bar(bar: &StrategyBar) -> String {
    let filled = ((bar.relative_width / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    let marker = if bar.selected { '*' } else { ' ' };
    format!(
        "{marker} {:<18} {}{} {:>8.2}m",
        bar.label,
        "#".repeat(filled),
        ".".repeat(BAR_WIDTH - filled),
        bar.display_meters,
    )
}

fn run(cli: &Cli) -> Result<(), String> {
    let score_config = score_config_from_cli(cli)?;
    let selector = Selector::new(selector_config_from_cli(cli));
    let points = load_points(&cli.points_path)?;

    log::info!(
        "loaded {} points from {}",
        points.len(),
        cli.points_path.display()
    );

    let scores = selector.score(&points, &score_config, &score_config.standard_sorts());
    let bars = selector.bars(&scores, cli.current);
    let best = scores.best().map(|(name, _)| name);

    if cli.json {
        let report = Report {
            point_count: points.len(),
            scores: &scores,
            bars: &bars,
            best,
        };
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| format!("Error serializing report: {e}"))?;
        println!("{json}");
    } else {
        println!("{} points", points.len());
        for bar in &bars {
            println!("{}", render_bar(bar));
        }
        if let Some(best) = best {
            println!("shortest: {}", best.label());
        }
    }

    if let Some(strategy) = cli.activate {
        let mut ui = StderrUi;
        selector.hover_enter(strategy, &mut ui);
        let outcome = selector.activate(strategy, cli.group, &mut PrintPersistence, &mut ui);
        selector.hover_exit(&mut ui);
        if outcome == Activation::Unsupported {
            log::warn!("{strategy} was not applied");
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(msg) = init_logger(cli.log_level) {
        eprintln!("{msg}");
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("{msg}");
            ExitCode::FAILURE
        }
    }
}

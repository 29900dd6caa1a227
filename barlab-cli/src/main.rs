//! BarLab CLI — run, compare, and synthetic-data commands.
//!
//! Commands:
//! - `run` — execute one strategy over a bars file, print the summary,
//!   save artifacts
//! - `compare` — run every built-in strategy over the same bars and print
//!   a comparison table
//! - `synth` — generate a synthetic bars CSV for offline experiments

use std::path::PathBuf;

use anyhow::{bail, Result};
use chrono::{TimeZone, Utc};
use clap::{Parser, Subcommand};

use barlab_runner::{
    bars_to_csv, compare_strategies, load_bars, run_single_backtest, save_artifacts, synthetic_bars,
    BacktestConfig, BacktestResult,
};

#[derive(Parser)]
#[command(name = "barlab", about = "BarLab CLI — bar-series backtesting engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute a backtest over a bars file (.csv or .json).
    Run {
        /// Path to the bars file.
        #[arg(long)]
        data: PathBuf,

        /// Strategy name: trend-cross, buy-hold, breakout, custom.
        #[arg(long)]
        strategy: Option<String>,

        /// Path to a TOML config file (required for custom).
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output directory for artifacts.
        #[arg(long, default_value = "results")]
        output_dir: PathBuf,

        /// Skip writing artifacts.
        #[arg(long, default_value_t = false)]
        no_artifacts: bool,
    },
    /// Run all built-in strategies over the same bars and compare.
    Compare {
        /// Path to the bars file.
        #[arg(long)]
        data: PathBuf,
    },
    /// Generate a synthetic bars CSV.
    Synth {
        /// Number of bars to generate.
        #[arg(long, default_value_t = 500)]
        bars: usize,

        /// RNG seed — same seed, same bars.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Output file.
        #[arg(long, default_value = "bars.csv")]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            data,
            strategy,
            config,
            output_dir,
            no_artifacts,
        } => run_cmd(data, strategy, config, output_dir, no_artifacts),
        Commands::Compare { data } => compare_cmd(data),
        Commands::Synth { bars, seed, out } => synth_cmd(bars, seed, out),
    }
}

fn run_cmd(
    data: PathBuf,
    strategy: Option<String>,
    config_path: Option<PathBuf>,
    output_dir: PathBuf,
    no_artifacts: bool,
) -> Result<()> {
    if strategy.is_some() && config_path.is_some() {
        bail!("--strategy and --config are mutually exclusive");
    }
    let config = match (strategy, config_path) {
        (Some(name), None) => BacktestConfig::for_strategy(&name),
        (None, Some(path)) => BacktestConfig::from_file(&path)?,
        _ => bail!("one of --strategy or --config is required"),
    };

    let loaded = load_bars(&data)?;
    let result = run_single_backtest(&config, &loaded.bars, &loaded.dataset_hash)?;

    print_summary(&result);

    if !no_artifacts {
        let run_dir = save_artifacts(&result, &output_dir)?;
        println!("Artifacts saved to: {}", run_dir.display());
    }

    Ok(())
}

fn compare_cmd(data: PathBuf) -> Result<()> {
    let loaded = load_bars(&data)?;
    let results = compare_strategies(&loaded.bars, &loaded.dataset_hash);

    println!();
    println!("=== Strategy Comparison ({} bars) ===", loaded.bars.len());
    println!(
        "{:<12} {:>7} {:>6} {:>7} {:>14}",
        "Strategy", "Trades", "Wins", "Losses", "Total Profit"
    );
    println!("{}", "-".repeat(50));
    for result in &results {
        let s = &result.report.summary;
        println!(
            "{:<12} {:>7} {:>6} {:>7} {:>14.4}",
            result.strategy, s.trades, s.wins, s.losses, s.total_profit
        );
    }
    println!();

    Ok(())
}

fn synth_cmd(bars: usize, seed: u64, out: PathBuf) -> Result<()> {
    if bars == 0 {
        bail!("--bars must be >= 1");
    }
    let generated = synthetic_bars(bars, seed);
    std::fs::write(&out, bars_to_csv(&generated)?)?;
    println!("Wrote {bars} synthetic bars (seed {seed}) to {}", out.display());
    Ok(())
}

fn format_time(epoch: i64) -> String {
    match Utc.timestamp_opt(epoch, 0) {
        chrono::LocalResult::Single(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        _ => epoch.to_string(),
    }
}

fn print_summary(result: &BacktestResult) {
    let s = &result.report.summary;
    println!();
    println!("=== Backtest Result ===");
    println!("Strategy:       {}", result.strategy);
    println!("Bars:           {}", result.bar_count);
    println!("Run ID:         {}", &result.run_id[..16.min(result.run_id.len())]);
    println!("Dataset Hash:   {}", &result.dataset_hash[..16.min(result.dataset_hash.len())]);
    println!();
    println!("--- Performance ---");
    println!("Trades:         {}", s.trades);
    println!("Wins:           {}", s.wins);
    println!("Losses:         {}", s.losses);
    println!("Total Profit:   {:.4}", s.total_profit);
    if let Some(first) = result.report.trades.first() {
        println!();
        println!("First trade:    {} -> {}", format_time(first.entry_time), format_time(first.exit_time));
    }
    for warn in &result.warnings {
        println!("WARNING: {warn}");
    }
    println!();
}

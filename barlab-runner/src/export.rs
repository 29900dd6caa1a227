//! Artifact export — JSON manifest and trade tape CSV per run.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use barlab_core::domain::{Bar, Trade};

use crate::runner::{BacktestResult, SCHEMA_VERSION};

/// Serialize a result as pretty-printed JSON.
pub fn export_json(result: &BacktestResult) -> Result<String> {
    serde_json::to_string_pretty(result).context("failed to serialize result")
}

/// Parse a result from JSON, rejecting unknown schema versions.
pub fn import_json(json: &str) -> Result<BacktestResult> {
    let result: BacktestResult =
        serde_json::from_str(json).context("failed to parse result JSON")?;
    if result.schema_version != SCHEMA_VERSION {
        bail!(
            "unsupported schema version {} (expected {})",
            result.schema_version,
            SCHEMA_VERSION
        );
    }
    Ok(result)
}

/// Export a trade ledger as CSV.
pub fn export_trades_csv(trades: &[Trade]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    for trade in trades {
        writer.serialize(trade)?;
    }
    finish_csv(writer)
}

/// Serialize bars to CSV with the canonical
/// `time,open,high,low,close,volume` header.
pub fn bars_to_csv(bars: &[Bar]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    for bar in bars {
        writer.serialize(bar)?;
    }
    finish_csv(writer)
}

fn finish_csv(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let data = writer.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

/// Save the artifact set for a run.
///
/// Creates `{strategy}_{timestamp}/` under `output_dir` containing:
/// - `manifest.json` — the full `BacktestResult`
/// - `trades.csv` — the trade tape
///
/// Returns the path to the created directory.
pub fn save_artifacts(result: &BacktestResult, output_dir: &Path) -> Result<PathBuf> {
    let dirname = format!(
        "{}_{}",
        result.strategy,
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    );
    let run_dir = output_dir.join(dirname);
    std::fs::create_dir_all(&run_dir)
        .with_context(|| format!("failed to create artifact dir: {}", run_dir.display()))?;

    std::fs::write(run_dir.join("manifest.json"), export_json(result)?)?;
    std::fs::write(
        run_dir.join("trades.csv"),
        export_trades_csv(&result.report.trades)?,
    )?;

    Ok(run_dir)
}

/// Load a `BacktestResult` back from an artifact directory's manifest.json.
pub fn load_artifacts(dir: &Path) -> Result<BacktestResult> {
    let manifest_path = dir.join("manifest.json");
    let json = std::fs::read_to_string(&manifest_path)
        .with_context(|| format!("failed to read {}", manifest_path.display()))?;
    import_json(&json)
}

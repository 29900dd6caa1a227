//! Bar loading from CSV and JSON files.
//!
//! The loader stands in for the data-feed collaborator the engine assumes:
//! it is the one place that enforces what the core only assumes — a
//! non-empty sequence ordered by strictly increasing time. Format is
//! chosen by file extension.

use std::path::Path;

use thiserror::Error;

use barlab_core::domain::Bar;

/// Errors from the data loading layer.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported data format '{0}' (expected .csv or .json)")]
    UnsupportedFormat(String),

    #[error("csv parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no bars in '{0}'")]
    Empty(String),

    #[error("bars are not ordered by strictly increasing time (index {0})")]
    Unordered(usize),
}

/// Loaded bars plus provenance.
#[derive(Debug, Clone)]
pub struct LoadedData {
    pub bars: Vec<Bar>,
    /// BLAKE3 over the raw bar values.
    pub dataset_hash: String,
}

/// Load bars from a CSV or JSON file, selected by extension.
///
/// CSV must carry a `time,open,high,low,close,volume` header; JSON must be
/// an array of bar objects with the same fields.
pub fn load_bars(path: &Path) -> Result<LoadedData, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let bars = match ext.as_str() {
        "csv" => parse_csv(&content)?,
        "json" => serde_json::from_str::<Vec<Bar>>(&content)?,
        other => return Err(LoadError::UnsupportedFormat(other.to_string())),
    };

    if bars.is_empty() {
        return Err(LoadError::Empty(path.display().to_string()));
    }
    check_ordering(&bars)?;

    let dataset_hash = dataset_hash(&bars);
    Ok(LoadedData { bars, dataset_hash })
}

fn parse_csv(content: &str) -> Result<Vec<Bar>, LoadError> {
    let mut reader = csv::Reader::from_reader(content.as_bytes());
    let mut bars = Vec::new();
    for record in reader.deserialize() {
        bars.push(record?);
    }
    Ok(bars)
}

fn check_ordering(bars: &[Bar]) -> Result<(), LoadError> {
    for (i, pair) in bars.windows(2).enumerate() {
        if pair[1].time <= pair[0].time {
            return Err(LoadError::Unordered(i + 1));
        }
    }
    Ok(())
}

/// BLAKE3 fingerprint of a bar sequence, for run provenance.
pub fn dataset_hash(bars: &[Bar]) -> String {
    let mut hasher = blake3::Hasher::new();
    for bar in bars {
        hasher.update(&bar.time.to_le_bytes());
        hasher.update(&bar.open.to_le_bytes());
        hasher.update(&bar.high.to_le_bytes());
        hasher.update(&bar.low.to_le_bytes());
        hasher.update(&bar.close.to_le_bytes());
        hasher.update(&bar.volume.to_le_bytes());
    }
    hasher.finalize().to_hex().to_string()
}

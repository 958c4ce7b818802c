//! Dashboard configuration: parsing, normalization, and loading.
//!
//! The TOML-backed config describes:
//! - The watchlist (`[instruments]` table): display label -> ticker symbol,
//!   rendered in insertion order
//! - `history_years`: how many trailing years of weekly bars to request
//!
//! Key behaviors:
//! - Normalization trims labels and symbols, drops entries whose symbol is
//!   blank, and rejects duplicate labels after trimming.
//! - `history_years` is clamped into the supported 2..=15 range.
//! - An absent config file yields the built-in default watchlist.
//!
//! Entrypoints:
//! - Parse + normalize from a TOML string: [`load_config_str`]
//! - Parse + normalize from a file path: [`load_config_path`]

use anyhow::{Context, bail};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use toml::from_str;
use tracing::debug;

/// Default years of trailing history requested per symbol.
pub const DEFAULT_HISTORY_YEARS: u32 = 7;

/// Smallest supported `history_years` value.
pub const MIN_HISTORY_YEARS: u32 = 2;

/// Largest supported `history_years` value.
pub const MAX_HISTORY_YEARS: u32 = 15;

/// Insertion-ordered mapping of display label to ticker symbol.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Watchlist {
    /// Display label -> ticker symbol, in configuration order.
    pub instruments: IndexMap<String, String>,
}

impl Default for Watchlist {
    fn default() -> Self {
        let instruments = [
            ("Nifty BeES", "NIFTYBEES.NS"),
            ("Bank BeES", "BANKBEES.NS"),
            ("Gold BeES", "GOLDBEES.NS"),
            ("Silver BeES", "SILVERBEES.NS"),
            ("Hang Seng BeES", "HNGSNGBEES.NS"),
            ("MON 100", "MON100.NS"),
        ]
        .into_iter()
        .map(|(label, symbol)| (label.to_string(), symbol.to_string()))
        .collect();
        Self { instruments }
    }
}

/// Top-level dashboard configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DashboardConfig {
    /// Years of trailing history to request (clamped to 2..=15).
    #[serde(default = "default_history_years")]
    pub history_years: u32,

    /// The instruments to render, keyed by display label.
    #[serde(default, rename = "instruments")]
    pub watchlist: Watchlist,
}

fn default_history_years() -> u32 {
    DEFAULT_HISTORY_YEARS
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            history_years: DEFAULT_HISTORY_YEARS,
            watchlist: Watchlist::default(),
        }
    }
}

/// Summary of changes performed during normalization.
#[derive(Debug, Default)]
pub struct NormalizationReport {
    /// Entries dropped because their symbol was blank after trimming.
    pub blank_symbols_dropped: usize,
    /// Whether `history_years` had to be clamped into the supported range.
    pub years_clamped: bool,
}

/// Normalize a configuration in-place.
///
/// What normalization does:
/// - Trim labels and symbols
/// - Drop entries whose symbol is blank after trimming
/// - Reject duplicate labels after trimming
/// - Clamp `history_years` into 2..=15
///
/// Errors:
/// - Empty or duplicate labels after trimming
pub fn normalize_config(config: &mut DashboardConfig) -> anyhow::Result<NormalizationReport> {
    let mut report = NormalizationReport::default();

    let mut rebuilt: IndexMap<String, String> = IndexMap::new();
    let old = std::mem::take(&mut config.watchlist.instruments);

    for (raw_label, raw_symbol) in old {
        let label = raw_label.trim().to_string();
        if label.is_empty() {
            bail!("instrument label cannot be empty after trimming");
        }

        let symbol = raw_symbol.trim().to_string();
        if symbol.is_empty() {
            report.blank_symbols_dropped += 1;
            continue;
        }

        if rebuilt.contains_key(&label) {
            bail!("duplicate instrument label after trimming: {label}");
        }
        rebuilt.insert(label, symbol);
    }

    config.watchlist.instruments = rebuilt;

    let clamped = config
        .history_years
        .clamp(MIN_HISTORY_YEARS, MAX_HISTORY_YEARS);
    if clamped != config.history_years {
        config.history_years = clamped;
        report.years_clamped = true;
    }

    Ok(report)
}

/// Parse and normalize a configuration from a TOML string.
///
/// Errors:
/// - TOML parse failures
/// - Normalization errors (see [`normalize_config`])
pub fn load_config_str(toml_str: &str) -> anyhow::Result<DashboardConfig> {
    let mut config: DashboardConfig = from_str(toml_str).context("failed to parse config TOML")?;
    let _report = normalize_config(&mut config).context("normalize_config failed")?;
    Ok(config)
}

/// Read a configuration TOML file from disk, parse, and normalize it.
///
/// An absent file is not an error: the built-in defaults apply.
pub fn load_config_path(path: impl AsRef<std::path::Path>) -> anyhow::Result<DashboardConfig> {
    let path = path.as_ref();
    if !path.exists() {
        debug!(path = %path.display(), "config file absent, using defaults");
        return Ok(DashboardConfig::default());
    }
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read config file {}", path.display()))?;
    load_config_str(&text)
}

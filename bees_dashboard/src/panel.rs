//! Panel assembly: a symbol's weekly series paired with its trend overlay.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use weekly_ingestor::models::{bar::Bar, series::BarSeries};

/// One chart panel: a symbol's weekly series with its moving-average overlay.
///
/// `sma` is aligned index-for-index with `series.bars`; the lengths are
/// always equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolPanel {
    /// Display label (e.g., "Gold BeES").
    pub label: String,
    /// Ticker symbol backing the panel.
    pub symbol: String,
    /// The fetched weekly series.
    pub series: BarSeries,
    /// Trailing moving average, one entry per bar; `None` until a full
    /// window of closes exists.
    pub sma: Vec<Option<f64>>,
}

/// One aligned (timestamp, close, trend) row of a panel overlay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayRow {
    /// Week-boundary timestamp (UTC).
    pub timestamp: DateTime<Utc>,
    /// Adjusted weekly close.
    pub close: f64,
    /// Moving-average value, absent until the window fills.
    pub sma: Option<f64>,
}

impl SymbolPanel {
    /// Aligned (timestamp, close, sma) rows for the rendering collaborator.
    pub fn overlay(&self) -> Vec<OverlayRow> {
        self.series
            .bars
            .iter()
            .zip(&self.sma)
            .map(|(bar, sma)| OverlayRow {
                timestamp: bar.timestamp,
                close: bar.close,
                sma: *sma,
            })
            .collect()
    }

    /// The trailing `n` raw bars, for the raw-data table view.
    pub fn tail_rows(&self, n: usize) -> &[Bar] {
        self.series.tail(n)
    }
}

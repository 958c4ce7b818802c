//! Per-symbol fetch-and-derive pipeline with failure isolation.

use indexmap::IndexMap;
use tracing::{info, warn};
use trend::simple_moving_average;
use weekly_ingestor::{
    models::{interval::Interval, request_params::SeriesRequest},
    providers::{SeriesProvider, errors::ProviderError},
};

use crate::{config::DashboardConfig, panel::SymbolPanel};

/// Moving-average window, in weekly bars.
pub const SMA_WINDOW: usize = 30;

/// The aggregated outcome of one dashboard run.
#[derive(Debug)]
pub struct DashboardRun {
    /// Per-symbol outcome, keyed by display label in watchlist order.
    pub panels: IndexMap<String, Result<SymbolPanel, ProviderError>>,
}

impl DashboardRun {
    /// The panels that were assembled successfully, in watchlist order.
    pub fn succeeded(&self) -> Vec<&SymbolPanel> {
        self.panels
            .values()
            .filter_map(|outcome| outcome.as_ref().ok())
            .collect()
    }

    /// Labels and errors of the symbols that failed, in watchlist order.
    pub fn failed(&self) -> Vec<(&str, &ProviderError)> {
        self.panels
            .iter()
            .filter_map(|(label, outcome)| match outcome {
                Ok(_) => None,
                Err(error) => Some((label.as_str(), error)),
            })
            .collect()
    }

    /// One-line success/failure tally for the end of a run.
    pub fn summary(&self) -> String {
        let succeeded = self.panels.values().filter(|r| r.is_ok()).count();
        let failed = self.panels.len() - succeeded;
        format!("{succeeded} succeeded, {failed} failed")
    }
}

/// Runs every watchlist entry through the provider, one symbol at a time.
///
/// Each symbol is fetched, its 30-week moving average derived, and a panel
/// assembled. A failed symbol is recorded in the run and never aborts the
/// rest of the watchlist.
pub async fn run_dashboard(
    provider: &dyn SeriesProvider,
    config: &DashboardConfig,
) -> DashboardRun {
    let mut panels = IndexMap::with_capacity(config.watchlist.instruments.len());

    for (label, symbol) in &config.watchlist.instruments {
        let request =
            SeriesRequest::trailing_years(symbol.clone(), Interval::Week, config.history_years);

        let outcome = match provider.fetch_series(&request).await {
            Ok(series) => {
                let sma = simple_moving_average(&series.closes(), SMA_WINDOW);
                info!(%label, %symbol, bars = series.bars.len(), "assembled panel");
                Ok(SymbolPanel {
                    label: label.clone(),
                    symbol: symbol.clone(),
                    series,
                    sma,
                })
            }
            Err(error) => {
                warn!(%label, %symbol, %error, "symbol failed");
                Err(error)
            }
        };

        panels.insert(label.clone(), outcome);
    }

    DashboardRun { panels }
}

use async_trait::async_trait;
use chrono::DateTime;
use reqwest::Client;
use tracing::{debug, warn};

use crate::{
    models::{bar::Bar, request_params::SeriesRequest, series::BarSeries},
    providers::{
        SeriesProvider,
        errors::{ProviderError, ProviderInitError},
        yahoo_chart::{
            params::construct_params,
            response::{ChartResponse, ChartResult},
        },
    },
    utils::env::env_or,
};

const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";
const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:124.0) Gecko/20100101 Firefox/124.0";

/// Provider backed by the public Yahoo Finance v8 chart endpoint.
///
/// The endpoint is unauthenticated but rejects clients without a browser-like
/// User-Agent header.
pub struct YahooChartProvider {
    client: Client,
    base_url: String,
}

impl YahooChartProvider {
    /// Creates a new chart-API provider.
    ///
    /// `YF_BASE_URL` and `YF_USER_AGENT` override the endpoint and the
    /// User-Agent header; unset variables fall back to the defaults.
    pub fn new() -> Result<Self, ProviderInitError> {
        let client = Client::builder()
            .user_agent(env_or("YF_USER_AGENT", DEFAULT_USER_AGENT))
            .build()?;

        Ok(Self {
            client,
            base_url: env_or("YF_BASE_URL", DEFAULT_BASE_URL),
        })
    }
}

#[async_trait]
impl SeriesProvider for YahooChartProvider {
    async fn fetch_series(&self, params: &SeriesRequest) -> Result<BarSeries, ProviderError> {
        let url = format!("{}/v8/finance/chart/{}", self.base_url, params.symbol);
        let query = construct_params(params);
        debug!(symbol = %params.symbol, %url, "requesting chart data");

        let response = self.client.get(&url).query(&query).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown API error".to_string());
            return Err(ProviderError::Api(format!("{status}: {body}")));
        }

        let chart_response = response.json::<ChartResponse>().await?;

        if let Some(error) = chart_response.chart.error {
            return Err(ProviderError::Api(format!(
                "{}: {}",
                error.code, error.description
            )));
        }

        let result = chart_response
            .chart
            .result
            .into_iter()
            .flatten()
            .next()
            .ok_or_else(|| ProviderError::NoData {
                symbol: params.symbol.clone(),
            })?;

        let bars = assemble_bars(&params.symbol, &result);
        if bars.is_empty() {
            return Err(ProviderError::NoData {
                symbol: params.symbol.clone(),
            });
        }

        Ok(BarSeries {
            symbol: params.symbol.clone(),
            interval: params.interval,
            bars,
        })
    }
}

/// Converts a chart result into canonical bars.
///
/// Rows with a missing price are dropped, the adjusted close substitutes the
/// raw close when present, and out-of-order or duplicate timestamps are
/// discarded keep-first so the series stays strictly ascending.
fn assemble_bars(symbol: &str, result: &ChartResult) -> Vec<Bar> {
    let Some(quote) = result.indicators.quote.first() else {
        return Vec::new();
    };
    let adjclose = result.indicators.adjclose.first().map(|a| &a.adjclose);

    let mut bars: Vec<Bar> = Vec::with_capacity(result.timestamp.len());
    let mut dropped = 0usize;

    for (i, epoch) in result.timestamp.iter().enumerate() {
        let row = (
            quote.open.get(i).copied().flatten(),
            quote.high.get(i).copied().flatten(),
            quote.low.get(i).copied().flatten(),
            quote.close.get(i).copied().flatten(),
        );
        let (Some(open), Some(high), Some(low), Some(raw_close)) = row else {
            dropped += 1;
            continue;
        };
        let close = adjclose
            .and_then(|a| a.get(i).copied().flatten())
            .unwrap_or(raw_close);

        let Some(timestamp) = DateTime::from_timestamp(*epoch, 0) else {
            dropped += 1;
            continue;
        };
        if bars.last().is_some_and(|prev| prev.timestamp >= timestamp) {
            dropped += 1;
            continue;
        }

        bars.push(Bar {
            timestamp,
            open,
            high,
            low,
            close,
            volume: quote.volume.get(i).copied().flatten(),
        });
    }

    if dropped > 0 {
        warn!(symbol, dropped, "dropped unusable rows from chart result");
    }

    bars
}

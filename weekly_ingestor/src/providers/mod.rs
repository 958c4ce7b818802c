//! Provider abstraction for historical price-series sources.
//!
//! This module defines the [`SeriesProvider`] trait, which serves as a unified
//! interface for fetching a bar series from any market data vendor.
//!
//! Each concrete provider implementation (such as the Yahoo chart provider)
//! implements [`SeriesProvider`] to handle vendor-specific API logic.
//!
//! The trait is designed for async usage and supports dynamic dispatch
//! (`dyn SeriesProvider`) for runtime selection of providers.

pub mod errors;
pub mod yahoo_chart;

use async_trait::async_trait;

use crate::{
    models::{request_params::SeriesRequest, series::BarSeries},
    providers::errors::ProviderError,
};

/// Trait for fetching a historical bar series from a market data provider.
#[async_trait]
pub trait SeriesProvider {
    /// Fetches the bar series for the given request parameters.
    ///
    /// Implementations make exactly one outbound request per invocation;
    /// there is no caching and no retry.
    async fn fetch_series(&self, params: &SeriesRequest) -> Result<BarSeries, ProviderError>;
}

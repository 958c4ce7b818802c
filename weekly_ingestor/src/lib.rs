//! Weekly price-series ingestion: canonical bar models, the provider
//! abstraction, and the Yahoo chart-API provider.

pub mod models;
pub mod providers;
pub mod utils;

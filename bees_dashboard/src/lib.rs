//! Weekly ETF dashboard core: watchlist configuration, the per-symbol
//! fetch-and-derive pipeline, panel assembly, and panel sinks.

#![deny(missing_docs)]

pub mod config;
pub mod panel;
pub mod pipeline;
pub mod sink;

use serde::{Deserialize, Serialize};

/// Bar interval supported by the chart endpoint.
///
/// The dashboard only requests weekly bars, but the provider's API names
/// daily and monthly intervals the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Interval {
    /// One bar per trading day (`1d`).
    Day,
    /// One bar per week (`1wk`).
    Week,
    /// One bar per month (`1mo`).
    Month,
}

impl Interval {
    /// The query-string token the chart endpoint expects.
    pub fn as_query_token(&self) -> &'static str {
        match self {
            Interval::Day => "1d",
            Interval::Week => "1wk",
            Interval::Month => "1mo",
        }
    }
}

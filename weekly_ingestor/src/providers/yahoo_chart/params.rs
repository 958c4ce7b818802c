use crate::models::request_params::SeriesRequest;

/// Builds the query-string pairs for a chart-API request.
///
/// The window is expressed as `period1`/`period2` epoch seconds; dividend
/// and split events are requested so the endpoint returns adjusted closes.
pub fn construct_params(params: &SeriesRequest) -> Vec<(String, String)> {
    vec![
        (
            "interval".to_string(),
            params.interval.as_query_token().to_string(),
        ),
        ("period1".to_string(), params.start.timestamp().to_string()),
        ("period2".to_string(), params.end.timestamp().to_string()),
        ("events".to_string(), "div,splits".to_string()),
        ("includeAdjustedClose".to_string(), "true".to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use crate::models::interval::Interval;

    use super::*;

    #[test]
    fn params_carry_the_window_and_interval() {
        let start = Utc.with_ymd_and_hms(2019, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let request = SeriesRequest {
            symbol: "GOLDBEES.NS".to_string(),
            interval: Interval::Week,
            start,
            end,
        };

        let query = construct_params(&request);

        let find = |key: &str| {
            query
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
        };
        assert_eq!(find("interval"), Some("1wk"));
        assert_eq!(find("period1"), Some(start.timestamp().to_string().as_str()));
        assert_eq!(find("period2"), Some(end.timestamp().to_string().as_str()));
        assert_eq!(find("events"), Some("div,splits"));
        assert_eq!(find("includeAdjustedClose"), Some("true"));
    }
}

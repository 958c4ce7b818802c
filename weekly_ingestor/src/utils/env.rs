/// Reads an environment variable, falling back to `default` when it is
/// unset or not valid unicode.
///
/// Used for optional overrides; none of the chart-API settings are required.
pub fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

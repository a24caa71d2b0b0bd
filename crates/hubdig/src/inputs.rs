//! Input variable resolution
//!
//! Inputs arrive as CLI arguments or, via clap's env fallback, as GitHub
//! Actions `INPUT_*` environment variables. Precedence per input: the
//! explicit value trimmed of whitespace when non-empty, else a named
//! default, else - for the required image only - a fatal error.

use hubdig_core::{Error, Result, DEFAULT_PAGE_LIMIT};

/// Trimmed explicit value, if there is one
fn explicit(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Resolve an optional input against its default
pub fn or_default(value: Option<&str>, default: &str) -> String {
    explicit(value).unwrap_or(default).to_string()
}

/// Resolve a required input; absent or empty is fatal
pub fn required(value: Option<&str>, name: &str) -> Result<String> {
    explicit(value)
        .map(str::to_string)
        .ok_or_else(|| Error::missing_input(name))
}

/// Resolve the page limit; anything that does not parse as an integer is
/// replaced by the default rather than rejected
pub fn page_limit(value: Option<&str>) -> u32 {
    explicit(value)
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_PAGE_LIMIT)
}

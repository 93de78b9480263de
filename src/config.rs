//! Server settings read from the environment.
//!
//! `HOST`, `PORT`, `TOURNAMENT_TTL_HOURS`, `CLEANUP_INTERVAL_MINUTES` and `RECORD_POLICY`.
//! Values that fail to parse fall back to their defaults with a warning, as do zero or
//! overflowing durations.

use crate::models::RecordPolicy;
use std::str::FromStr;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Tournaments idle for longer than this are evicted.
    pub tournament_ttl: Duration,
    pub cleanup_interval: Duration,
    /// Policy for tournaments created without an explicit one.
    pub default_policy: RecordPolicy,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            tournament_ttl: duration_or("TOURNAMENT_TTL_HOURS", &lookup, 3600, defaults.tournament_ttl),
            cleanup_interval: duration_or(
                "CLEANUP_INTERVAL_MINUTES",
                &lookup,
                60,
                defaults.cleanup_interval,
            ),
            default_policy: parse_or("RECORD_POLICY", &lookup, defaults.default_policy),
        }
    }
}

fn parse_or<T, F>(key: &str, lookup: &F, default: T) -> T
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("Ignoring invalid {key}={raw:?}, using default");
            default
        }),
    }
}

/// A positive count of `unit_secs`-second units. Zero or an overflowing count falls back.
fn duration_or<F>(key: &str, lookup: &F, unit_secs: u64, default: Duration) -> Duration
where
    F: Fn(&str) -> Option<String>,
{
    let count: u64 = parse_or(key, lookup, default.as_secs() / unit_secs);
    match count.checked_mul(unit_secs) {
        Some(secs) if secs > 0 => Duration::from_secs(secs),
        _ => {
            log::warn!("Ignoring out-of-range {key}={count}, using default");
            default
        }
    }
}

use std::{path::PathBuf, time::Duration};

use crate::telemetry::LogLevel;

const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;
const DEFAULT_NAV_OFFSET_PX: u64 = 64;
const DEFAULT_SUBMIT_DELAY_MS: u64 = 2_000;
const DEFAULT_HEADLINE_INTERVAL_MS: u64 = 3_000;
const DEFAULT_MOBILE_BREAKPOINT_PX: u64 = 768;
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DIST_DIR: &str = "dist";

const NAV_OFFSET_PX_BOUNDS: (u64, u64) = (0, 400);
const SUBMIT_DELAY_MS_BOUNDS: (u64, u64) = (0, 30_000);
const HEADLINE_INTERVAL_MS_BOUNDS: (u64, u64) = (500, 60_000);
const MOBILE_BREAKPOINT_PX_BOUNDS: (u64, u64) = (320, 2_048);
const PORT_BOUNDS: (u64, u64) = (1, 65_535);

/// Client settings. Baked in at build time so `trunk build` picks up the
/// `PORTFOLIO_*` variables from the environment it runs in.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub log_level: LogLevel,
    pub nav_offset: f64,
    pub submit_delay: Duration,
    pub headline_interval: Duration,
    pub mobile_breakpoint: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl SiteConfig {
    pub fn from_build_env() -> Self {
        Self::from_lookup(|name| {
            let value = match name {
                "PORTFOLIO_LOG_LEVEL" => option_env!("PORTFOLIO_LOG_LEVEL"),
                "PORTFOLIO_NAV_OFFSET_PX" => option_env!("PORTFOLIO_NAV_OFFSET_PX"),
                "PORTFOLIO_SUBMIT_DELAY_MS" => option_env!("PORTFOLIO_SUBMIT_DELAY_MS"),
                "PORTFOLIO_HEADLINE_INTERVAL_MS" => option_env!("PORTFOLIO_HEADLINE_INTERVAL_MS"),
                "PORTFOLIO_MOBILE_BREAKPOINT_PX" => option_env!("PORTFOLIO_MOBILE_BREAKPOINT_PX"),
                _ => None,
            };
            value.map(ToString::to_string)
        })
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let nav_offset_px = parse_u64_with_bounds(
            lookup("PORTFOLIO_NAV_OFFSET_PX"),
            DEFAULT_NAV_OFFSET_PX,
            NAV_OFFSET_PX_BOUNDS,
        );
        let submit_delay_ms = parse_u64_with_bounds(
            lookup("PORTFOLIO_SUBMIT_DELAY_MS"),
            DEFAULT_SUBMIT_DELAY_MS,
            SUBMIT_DELAY_MS_BOUNDS,
        );
        let headline_interval_ms = parse_u64_with_bounds(
            lookup("PORTFOLIO_HEADLINE_INTERVAL_MS"),
            DEFAULT_HEADLINE_INTERVAL_MS,
            HEADLINE_INTERVAL_MS_BOUNDS,
        );
        let mobile_breakpoint_px = parse_u64_with_bounds(
            lookup("PORTFOLIO_MOBILE_BREAKPOINT_PX"),
            DEFAULT_MOBILE_BREAKPOINT_PX,
            MOBILE_BREAKPOINT_PX_BOUNDS,
        );
        let log_level = parse_log_level(lookup("PORTFOLIO_LOG_LEVEL"), DEFAULT_LOG_LEVEL);

        Self {
            log_level,
            nav_offset: nav_offset_px as f64,
            submit_delay: Duration::from_millis(submit_delay_ms),
            headline_interval: Duration::from_millis(headline_interval_ms),
            mobile_breakpoint: mobile_breakpoint_px as f64,
        }
    }

    pub fn is_mobile_width(&self, viewport_width: f64) -> bool {
        viewport_width < self.mobile_breakpoint
    }
}

/// Settings for the native server that hosts the built bundle.
#[derive(Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    pub dist_dir: PathBuf,
    pub log_level: LogLevel,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = parse_u64_with_bounds(lookup("PORT"), u64::from(DEFAULT_PORT), PORT_BOUNDS);
        let dist_dir = non_empty(lookup("DIST_DIR"))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));
        let log_level = parse_log_level(lookup("LOG_LEVEL"), DEFAULT_LOG_LEVEL);

        Self {
            port: u16::try_from(port).unwrap_or(DEFAULT_PORT),
            dist_dir,
            log_level,
        }
    }

    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn parse_u64_with_bounds(value: Option<String>, default: u64, bounds: (u64, u64)) -> u64 {
    value
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_log_level(value: Option<String>, default: LogLevel) -> LogLevel {
    non_empty(value)
        .and_then(|value| LogLevel::from_str(&value.to_ascii_lowercase()))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn site_defaults_match_navbar_and_form_timings() {
        let config = SiteConfig::default();

        assert_eq!(config.nav_offset, 64.0);
        assert_eq!(config.submit_delay, Duration::from_millis(2_000));
        assert_eq!(config.headline_interval, Duration::from_millis(3_000));
        assert_eq!(config.mobile_breakpoint, 768.0);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn site_values_within_bounds_are_used() {
        let config = SiteConfig::from_lookup(lookup_from(&[
            ("PORTFOLIO_NAV_OFFSET_PX", " 80 "),
            ("PORTFOLIO_SUBMIT_DELAY_MS", "0"),
            ("PORTFOLIO_LOG_LEVEL", "DEBUG"),
        ]));

        assert_eq!(config.nav_offset, 80.0);
        assert_eq!(config.submit_delay, Duration::ZERO);
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn out_of_range_or_garbage_values_fall_back_to_defaults() {
        let config = SiteConfig::from_lookup(lookup_from(&[
            ("PORTFOLIO_NAV_OFFSET_PX", "9000"),
            ("PORTFOLIO_HEADLINE_INTERVAL_MS", "10"),
            ("PORTFOLIO_MOBILE_BREAKPOINT_PX", "wide"),
            ("PORTFOLIO_LOG_LEVEL", "verbose"),
        ]));

        assert_eq!(config.nav_offset, 64.0);
        assert_eq!(config.headline_interval, Duration::from_millis(3_000));
        assert_eq!(config.mobile_breakpoint, 768.0);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn mobile_width_is_strictly_below_breakpoint() {
        let config = SiteConfig::default();

        assert!(config.is_mobile_width(767.0));
        assert!(!config.is_mobile_width(768.0));
    }

    #[test]
    fn server_config_reads_port_and_dist_dir() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("PORT", "3000"),
            ("DIST_DIR", "public"),
            ("LOG_LEVEL", "warn"),
        ]));

        assert_eq!(config.port, 3000);
        assert_eq!(config.dist_dir, PathBuf::from("public"));
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
    }

    #[test]
    fn server_config_rejects_port_zero_and_blank_dist_dir() {
        let config = ServerConfig::from_lookup(lookup_from(&[("PORT", "0"), ("DIST_DIR", "  ")]));

        assert_eq!(config.port, 8080);
        assert_eq!(config.dist_dir, PathBuf::from("dist"));
    }
}

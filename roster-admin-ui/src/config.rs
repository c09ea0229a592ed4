use dioxus::logger::tracing::{Level, warn};
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub seed_demo_users: bool,
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_demo_users: true,
            log_level: Level::INFO,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or unparseable values keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed_demo_users = match lookup("ROSTER_SEED_DEMO_USERS") {
            Some(raw) => parse_bool(&raw).unwrap_or_else(|| {
                warn!("Invalid ROSTER_SEED_DEMO_USERS '{}', using {}", raw, defaults.seed_demo_users);
                defaults.seed_demo_users
            }),
            None => defaults.seed_demo_users,
        };

        let log_level = match lookup("ROSTER_LOG_LEVEL") {
            Some(raw) => Level::from_str(raw.trim()).unwrap_or_else(|_| {
                warn!("Invalid ROSTER_LOG_LEVEL '{}', using {}", raw, defaults.log_level);
                defaults.log_level
            }),
            None => defaults.log_level,
        };

        Self {
            seed_demo_users,
            log_level,
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

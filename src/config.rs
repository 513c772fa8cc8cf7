//! Build-time Configuration
//!
//! Values baked in at compile time through environment variables.

use log::LevelFilter;

/// Collection endpoint used when `TODO_API_URL` is not set
pub const DEFAULT_API_URL: &str = "https://mate.academy/students-api";

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the todo collection, without trailing slash
    pub api_url: String,
    /// Owner of every todo; `None` renders the user warning instead of the app
    pub user_id: Option<u32>,
    /// Console log level
    pub log_level: LevelFilter,
}

impl AppConfig {
    /// Read `TODO_API_URL`, `TODO_USER_ID` and `TODO_LOG` as set at build time
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("TODO_API_URL"),
            option_env!("TODO_USER_ID"),
            option_env!("TODO_LOG"),
        )
    }

    pub fn from_values(api_url: Option<&str>, user_id: Option<&str>, log: Option<&str>) -> Self {
        let api_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();

        Self {
            api_url,
            user_id: parse_user_id(user_id),
            log_level: parse_log_level(log),
        }
    }
}

/// Blank, zero or malformed ids count as unset
fn parse_user_id(raw: Option<&str>) -> Option<u32> {
    raw.map(str::trim)
        .and_then(|s| s.parse::<u32>().ok())
        .filter(|id| *id != 0)
}

fn parse_log_level(raw: Option<&str>) -> LevelFilter {
    raw.and_then(|s| s.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

//! Runtime settings sourced from the environment (and `.env`, via `dotenvy`).

use crate::analyzers::types::Route;

pub const DEFAULT_ORIGIN: &str = "VVO";
pub const DEFAULT_DESTINATION: &str = "TLV";
pub const DEFAULT_LOG_FILE_PATH: &str = "logs/tickets_analyzer.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Route used when none is given on the command line.
    pub default_route: Route,
    pub log_file_path: String,
}

impl Settings {
    /// Reads `TICKETS_DEFAULT_ORIGIN`, `TICKETS_DEFAULT_DESTINATION` and
    /// `LOG_FILE_PATH` from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Settings {
            default_route: Route::new(
                get("TICKETS_DEFAULT_ORIGIN", DEFAULT_ORIGIN),
                get("TICKETS_DEFAULT_DESTINATION", DEFAULT_DESTINATION),
            ),
            log_file_path: get("LOG_FILE_PATH", DEFAULT_LOG_FILE_PATH),
        }
    }

    /// The route to analyze: the explicit pair if given, else the default.
    pub fn route(&self, origin: Option<String>, destination: Option<String>) -> Route {
        match (origin, destination) {
            (Some(origin), Some(destination)) => Route::new(origin, destination),
            _ => self.default_route.clone(),
        }
    }
}

//! Front-end configuration.

use crate::components::toast::DEFAULT_NOTICE_MS;

/// Runtime settings for the front-end.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the recipe backend. Empty means same origin.
    pub api_base_url: String,
    /// How long a global notification stays on screen.
    pub notice_duration_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            notice_duration_ms: DEFAULT_NOTICE_MS,
        }
    }
}

impl AppConfig {
    /// Defaults, with the API base URL taken from `RECIPE_API_BASE` at build time if set.
    pub fn from_build_env() -> Self {
        Self::with_api_base(option_env!("RECIPE_API_BASE"))
    }

    fn with_api_base(base: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(base) = base.map(str::trim).filter(|b| !b.is_empty()) {
            config.api_base_url = base.trim_end_matches('/').to_string();
        }
        config
    }

    /// Absolute or origin-relative URL for an API path such as `/api/login`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }
}

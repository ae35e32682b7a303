//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Server-side configuration, used for startup logging. The WASM bundle
/// reads the submission endpoint at build time instead (`option_env!`),
/// since environment variables do not reach the browser.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Waitlist form backend URL (Formspree, custom API, ...)
    /// Example: https://formspree.io/f/FORM_ID
    pub waitlist_endpoint: Option<String>,

    /// Analytics measurement tag the deployed page expects, if any
    pub analytics_tag: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            waitlist_endpoint: std::env::var("SURVADE_WAITLIST_ENDPOINT").ok(),
            analytics_tag: std::env::var("SURVADE_ANALYTICS_TAG").ok(),
        }
    }

    /// Check if a real submission endpoint is configured
    pub fn has_waitlist_endpoint(&self) -> bool {
        self.waitlist_endpoint.is_some()
    }

    /// Check if an analytics tag is configured
    pub fn has_analytics_tag(&self) -> bool {
        self.analytics_tag.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_reports_nothing_configured() {
        let config = Config::default();
        assert!(!config.has_waitlist_endpoint());
        assert!(!config.has_analytics_tag());
    }

    #[test]
    fn populated_config_reports_presence() {
        let config = Config {
            waitlist_endpoint: Some("https://formspree.io/f/demo".into()),
            analytics_tag: Some("G-XXXXXXX".into()),
        };
        assert!(config.has_waitlist_endpoint());
        assert!(config.has_analytics_tag());
    }
}

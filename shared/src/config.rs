use log::LevelFilter;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Client settings fixed at build time
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// API root without a trailing slash
    pub base_url: String,
    pub log_level: LevelFilter,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl ClientConfig {
    /// Build from optional overrides; blank or unparsable values keep the default
    pub fn from_overrides(base_url: Option<&str>, log_level: Option<&str>) -> Self {
        let defaults = Self::default();
        let base_url = base_url
            .map(|url| url.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .map(str::to_string)
            .unwrap_or(defaults.base_url);
        let log_level = log_level
            .and_then(|level| level.trim().parse::<LevelFilter>().ok())
            .unwrap_or(defaults.log_level);
        Self { base_url, log_level }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::from_overrides(None, None);
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_overrides_are_normalized() {
        let config = ClientConfig::from_overrides(Some(" https://api.example.com/ "), Some("debug"));
        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.log_level, LevelFilter::Debug);

        let config = ClientConfig::from_overrides(Some(""), Some("loud"));
        assert_eq!(config, ClientConfig::default());
    }
}

//! Site configuration.
//!
//! The landing crate embeds `site.toml` at build time and hands the text to
//! [`SiteConfig::load_or_default`]. Every key is optional.

use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::form::DEFAULT_SUCCESS_DISPLAY;
use crate::rotation::HERO_ROTATE_INTERVAL;

pub const DEFAULT_FORM_ENDPOINT: &str = "https://formsubmit.co/ajax/hello@ath.camera";
pub const DEFAULT_SITE_URL: &str = "https://ath.camera";

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Canonical site URL, metadata only
    pub site_url: String,
    pub form: FormConfig,
    pub hero: HeroConfig,
    pub links: LinksConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Form-relay URL the lead is POSTed to
    pub endpoint: String,
    /// How long the success label stays up before the form resets
    pub success_display_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    pub rotate_interval_ms: u64,
}

/// Outbound links in the footer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LinksConfig {
    pub work: String,
    pub follow: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_url: DEFAULT_SITE_URL.to_string(),
            form: FormConfig::default(),
            hero: HeroConfig::default(),
            links: LinksConfig::default(),
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_FORM_ENDPOINT.to_string(),
            success_display_ms: DEFAULT_SUCCESS_DISPLAY.as_millis() as u64,
        }
    }
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            rotate_interval_ms: HERO_ROTATE_INTERVAL.as_millis() as u64,
        }
    }
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            work: "https://x.com/athcreative/highlights".to_string(),
            follow: "https://x.com/intent/follow?screen_name=athcreative".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse TOML text, falling back to defaults (with a warning) when it is invalid.
    pub fn load_or_default(content: &str) -> Self {
        match Self::from_toml_str(content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "invalid site config, using defaults");
                Self::default()
            }
        }
    }

    /// Apply a build-time `site_url` override (`ATH_SITE_URL`).
    pub fn with_site_url_override(mut self, site_url: Option<&str>) -> Self {
        if let Some(url) = site_url.map(str::trim).filter(|u| !u.is_empty()) {
            self.site_url = url.to_string();
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let endpoint = self.form.endpoint.trim();
        if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
            return Err(ConfigError::InvalidEndpoint(self.form.endpoint.clone()));
        }
        if self.form.success_display_ms == 0 {
            return Err(ConfigError::ZeroDuration("form.success_display_ms"));
        }
        if self.hero.rotate_interval_ms == 0 {
            return Err(ConfigError::ZeroDuration("hero.rotate_interval_ms"));
        }
        Ok(())
    }

    pub fn success_display(&self) -> Duration {
        Duration::from_millis(self.form.success_display_ms)
    }

    pub fn rotate_interval(&self) -> Duration {
        Duration::from_millis(self.hero.rotate_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.form.endpoint, DEFAULT_FORM_ENDPOINT);
        assert_eq!(config.success_display(), Duration::from_millis(4000));
        assert_eq!(config.rotate_interval(), Duration::from_millis(2000));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_text_is_all_defaults() {
        assert_eq!(SiteConfig::from_toml_str("").unwrap(), SiteConfig::default());
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let config = SiteConfig::from_toml_str(
            r#"
[form]
endpoint = "https://relay.example/f/abc"
success_display_ms = 3000
"#,
        )
        .unwrap();
        assert_eq!(config.form.endpoint, "https://relay.example/f/abc");
        assert_eq!(config.success_display(), Duration::from_millis(3000));
        assert_eq!(config.hero, HeroConfig::default());
    }

    #[test]
    fn rejects_non_http_endpoint() {
        let err = SiteConfig::from_toml_str("[form]\nendpoint = \"mailto:x@y.z\"").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEndpoint(_)));
    }

    #[test]
    fn rejects_zero_durations() {
        let err = SiteConfig::from_toml_str("[hero]\nrotate_interval_ms = 0").unwrap_err();
        assert!(matches!(err, ConfigError::ZeroDuration("hero.rotate_interval_ms")));
    }

    #[test]
    fn invalid_text_falls_back() {
        let config = SiteConfig::load_or_default("[form\nendpoint =");
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn site_url_override() {
        let config = SiteConfig::default().with_site_url_override(Some("https://preview.ath.camera"));
        assert_eq!(config.site_url, "https://preview.ath.camera");
        let config = SiteConfig::default().with_site_url_override(Some("  "));
        assert_eq!(config.site_url, DEFAULT_SITE_URL);
    }
}

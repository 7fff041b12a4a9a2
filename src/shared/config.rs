//! Application configuration. Provider credential, endpoint, paths, theme.

use serde::Deserialize;

use crate::domain::Theme;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// AI API key (Gemini-style endpoint). Read from ATS_CHECK_AI_API_KEY.
    #[serde(default)]
    pub ai_api_key: Option<String>,

    /// Models base URL. Defaults to the Google generative-language API.
    /// Read from ATS_CHECK_AI_API_URL.
    #[serde(default)]
    pub ai_api_url: Option<String>,

    /// Model name. Defaults to "gemini-2.5-flash". Read from ATS_CHECK_AI_MODEL.
    #[serde(default)]
    pub ai_model: Option<String>,

    /// Directory for saved reports. Defaults to "./reports".
    /// Read from ATS_CHECK_REPORTS_DIR.
    #[serde(default)]
    pub reports_dir: Option<String>,

    /// Initial presentation theme ("light" or "dark"). Read from ATS_CHECK_THEME.
    #[serde(default)]
    pub theme: Option<Theme>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("ATS_CHECK"));
        if let Ok(path) = std::env::var("ATS_CHECK_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    /// Returns the AI API key if configured. Reads from config or ATS_CHECK_AI_API_KEY env.
    pub fn ai_api_key(&self) -> Option<String> {
        self.ai_api_key
            .clone()
            .or_else(|| std::env::var("ATS_CHECK_AI_API_KEY").ok())
    }

    /// Returns the models base URL. Defaults to the Gemini REST endpoint.
    pub fn ai_api_url_or_default(&self) -> String {
        self.ai_api_url
            .clone()
            .or_else(|| std::env::var("ATS_CHECK_AI_API_URL").ok())
            .unwrap_or_else(|| {
                "https://generativelanguage.googleapis.com/v1beta/models".to_string()
            })
    }

    /// Returns the model name. Defaults to "gemini-2.5-flash".
    pub fn ai_model_or_default(&self) -> String {
        self.ai_model
            .clone()
            .or_else(|| std::env::var("ATS_CHECK_AI_MODEL").ok())
            .unwrap_or_else(|| "gemini-2.5-flash".to_string())
    }

    /// Returns the reports directory. Defaults to "./reports".
    pub fn reports_dir_or_default(&self) -> String {
        self.reports_dir
            .clone()
            .unwrap_or_else(|| "./reports".to_string())
    }

    /// Returns the initial theme. Defaults to dark.
    pub fn theme_or_default(&self) -> Theme {
        self.theme.unwrap_or_default()
    }

    /// Returns true if AI is configured (API key present).
    pub fn is_ai_configured(&self) -> bool {
        self.ai_api_key().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_knob() {
        let cfg = AppConfig::default();
        assert!(cfg.ai_api_url_or_default().contains("generativelanguage"));
        assert_eq!(cfg.ai_model_or_default(), "gemini-2.5-flash");
        assert_eq!(cfg.reports_dir_or_default(), "./reports");
        assert_eq!(cfg.theme_or_default(), Theme::Dark);
    }
}

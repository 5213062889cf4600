use config::{Config, Environment};
use serde::Deserialize;

use crate::error::WodError;
use crate::parser::template::TemplateChoice;

pub const DEFAULT_BASE_URL: &str = "http://crossfitph.com/";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// Runtime settings, read from `WOD_*` environment variables on top of the defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub base_url: String,
    pub user_agent: String,
    pub template: TemplateChoice,
    /// Command the formatted text is piped into. `none` or empty disables copying.
    pub clipboard: String,
}

impl Settings {
    pub fn load() -> Result<Self, WodError> {
        Self::from_env(Environment::with_prefix("WOD"))
    }

    fn from_env(env: Environment) -> Result<Self, WodError> {
        Config::builder()
            .set_default("base_url", DEFAULT_BASE_URL)
            .and_then(|b| b.set_default("user_agent", DEFAULT_USER_AGENT))
            .and_then(|b| b.set_default("template", "auto"))
            .and_then(|b| b.set_default("clipboard", default_clipboard_command()))
            .and_then(|b| b.add_source(env).build())
            .and_then(|c| c.try_deserialize::<Settings>())
            .map_err(|e| WodError::Config(e.to_string()))
    }
}

fn default_clipboard_command() -> &'static str {
    if cfg!(target_os = "macos") {
        "pbcopy"
    } else if cfg!(windows) {
        "clip"
    } else {
        "xclip -selection clipboard"
    }
}

// ── Tests ──

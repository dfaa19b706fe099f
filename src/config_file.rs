use crate::theme::{color_to_string, Theme, ThemeToken};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use strum::IntoEnumIterator;

/// Theme a file starts from before its overrides are applied
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseTheme {
    Light,
    #[default]
    Branded,
}

impl BaseTheme {
    pub fn theme(self) -> Theme {
        match self {
            BaseTheme::Light => Theme::light(),
            BaseTheme::Branded => Theme::branded(),
        }
    }
}

/// Theme overrides that can be saved/loaded
///
/// ```json
/// { "base": "light", "overrides": { "brand_stroke": "#F15D22" } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeFile {
    #[serde(default)]
    pub base: BaseTheme,
    #[serde(default)]
    pub overrides: BTreeMap<ThemeToken, String>,
}

impl ThemeFile {
    /// Create a file with no overrides on the branded base
    pub fn new() -> Self {
        Self::default()
    }

    /// Describe `theme` as a light base plus every token that differs from it
    pub fn from_theme(theme: &Theme) -> Self {
        let base = Theme::light();
        let overrides = ThemeToken::iter()
            .filter(|token| theme.get(*token) != base.get(*token))
            .map(|token| (token, color_to_string(theme.get(token))))
            .collect();
        Self {
            base: BaseTheme::Light,
            overrides,
        }
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = self.to_json()?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write theme to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read theme from {:?}", path.as_ref()))?;

        let file: Self = serde_json::from_str(&content).context("Failed to parse theme JSON")?;

        Ok(file)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize theme to JSON")
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.to_theme().map(|_| ())
    }

    /// Resolve the base theme with every override applied
    pub fn to_theme(&self) -> Result<Theme> {
        let mut theme = self.base.theme();
        for (token, value) in &self.overrides {
            theme.set_str(*token, value)?;
            log::debug!("Theme override {} = {}", token, value);
        }
        Ok(theme)
    }
}

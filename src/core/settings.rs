//! Application settings management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::recipe::Recipe;
use super::wordcloud::WordCloudOptions;

/// Application theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }

    pub fn all() -> &'static [Theme] {
        &[Theme::Dark, Theme::Light]
    }
}

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Application theme
    pub theme: Theme,
    /// Recipe shown at startup; updated on every switch
    pub last_recipe: Recipe,
    /// Seed for randomly generated sample tables
    pub random_seed: u64,
    /// CSV used by the selectbox recipe instead of the bundled sample
    pub dataset_path: Option<PathBuf>,
    /// Word cloud canvas width in px
    pub wordcloud_width: u32,
    /// Word cloud canvas height in px
    pub wordcloud_height: u32,
    /// Line plot raster size in px
    pub plot_width: u32,
    pub plot_height: u32,

    // UI State (not user-configurable, just persisted)
    /// Window size
    pub window_size: Option<(u32, u32)>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            last_recipe: Recipe::Description,
            random_seed: 0,
            dataset_path: None,
            wordcloud_width: 400,
            wordcloud_height: 200,
            plot_width: 480,
            plot_height: 320,
            window_size: None,
        }
    }
}

impl Settings {
    /// Get the data directory
    pub fn get_data_directory() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("Cookbook")
    }

    /// Validate settings and fix any invalid values
    pub fn validate(&mut self) {
        self.wordcloud_width = self.wordcloud_width.clamp(100, 2000);
        self.wordcloud_height = self.wordcloud_height.clamp(50, 2000);
        self.plot_width = self.plot_width.clamp(160, 2000);
        self.plot_height = self.plot_height.clamp(120, 2000);
    }

    /// Word cloud layout parameters from settings
    pub fn wordcloud_options(&self) -> WordCloudOptions {
        WordCloudOptions {
            width: self.wordcloud_width,
            height: self.wordcloud_height,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_clamps_canvas_sizes() {
        let mut settings = Settings {
            wordcloud_width: 10,
            plot_height: 100_000,
            ..Default::default()
        };
        settings.validate();
        assert_eq!(settings.wordcloud_width, 100);
        assert_eq!(settings.plot_height, 2000);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"theme":"Light","random_seed":7}"#).unwrap();
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.random_seed, 7);
        assert_eq!(settings.last_recipe, Recipe::Description);
        assert_eq!(settings.wordcloud_options().width, 400);
    }
}

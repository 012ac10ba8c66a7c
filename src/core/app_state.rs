//! Application state - Settings, session and storage tied together

use anyhow::Result;
use tracing::{error, info};

use super::page::{Page, WidgetEvent};
use super::recipe::Recipe;
use super::recipes::build_page;
use super::session::Session;
use super::settings::{Settings, Theme};
use crate::persistence::Database;

/// Central application state
pub struct AppState {
    /// Application settings
    pub settings: Settings,
    /// Widget values and dataset cache
    pub session: Session,
    /// Database connection
    database: Database,
}

impl AppState {
    /// Create a new application state
    pub fn new(database: Database) -> Result<Self> {
        // Load settings from database
        let settings = database.load_settings()?.unwrap_or_default();
        let recent = database.load_recent_datasets()?;
        let session = Session::new(&settings, recent);

        Ok(Self {
            settings,
            session,
            database,
        })
    }

    /// Recipe currently selected in the menu
    pub fn recipe(&self) -> Recipe {
        self.settings.last_recipe
    }

    /// Switch to another recipe
    pub fn select_recipe(&mut self, recipe: Recipe) {
        if self.settings.last_recipe == recipe {
            return;
        }
        info!("Switched to recipe {}", recipe);
        self.settings.last_recipe = recipe;
        self.persist_settings();
    }

    /// Build the page for the selected recipe
    pub fn build_page(&mut self) -> Page {
        build_page(self.settings.last_recipe, &mut self.session)
    }

    /// Apply a widget interaction, persisting any dataset change
    pub fn apply(&mut self, event: WidgetEvent) {
        if !self.session.apply(event) {
            return;
        }
        self.settings.dataset_path = self.session.dataset_path();
        info!("Dataset source set to {}", self.session.dataset);
        self.persist_settings();
        if let Err(e) = self
            .database
            .save_recent_datasets(&self.session.recent_datasets)
        {
            error!("Failed to save recent datasets: {}", e);
        }
    }

    /// Change the UI theme
    pub fn set_theme(&mut self, theme: Theme) {
        if self.settings.theme != theme {
            self.settings.theme = theme;
            self.persist_settings();
        }
    }

    /// Draw new random sample tables
    pub fn reshuffle(&mut self) {
        self.settings.random_seed = self.settings.random_seed.wrapping_add(1);
        self.session.seed = self.settings.random_seed;
        info!("Random seed set to {}", self.settings.random_seed);
        self.persist_settings();
    }

    /// Save settings
    pub fn save_settings(&self) -> Result<()> {
        self.database.save_settings(&self.settings)
    }

    fn persist_settings(&self) {
        if let Err(e) = self.save_settings() {
            error!("Failed to save settings: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn state() -> AppState {
        let db = Database::open_in_memory().unwrap();
        db.initialize().unwrap();
        AppState::new(db).unwrap()
    }

    #[test]
    fn test_recipe_switch_is_persisted() {
        let mut state = state();
        assert_eq!(state.recipe(), Recipe::Description);

        state.select_recipe(Recipe::Emojis);
        let saved = state.database.load_settings().unwrap().unwrap();
        assert_eq!(saved.last_recipe, Recipe::Emojis);
        assert_eq!(state.build_page().recipe, Recipe::Emojis);
    }

    #[test]
    fn test_reshuffle_changes_sample_table() {
        let mut state = state();
        state.select_recipe(Recipe::DataframeFormatting);
        let before = state.build_page();
        state.reshuffle();
        let after = state.build_page();

        assert_eq!(state.session.seed, 1);
        assert_ne!(before, after);
    }

    #[test]
    fn test_opening_dataset_saves_path_and_recent_list() {
        let mut state = state();
        let path = PathBuf::from("/tmp/missing.csv");
        state.apply(WidgetEvent::OpenDataset(path.clone()));

        let saved = state.database.load_settings().unwrap().unwrap();
        assert_eq!(saved.dataset_path, Some(path.clone()));
        assert_eq!(state.database.load_recent_datasets().unwrap(), vec![path]);
    }

    #[test]
    fn test_state_restores_from_database() {
        let db = Database::open_in_memory().unwrap();
        db.initialize().unwrap();
        let settings = Settings {
            last_recipe: Recipe::Seaborn,
            dataset_path: Some(PathBuf::from("/data/a.csv")),
            ..Default::default()
        };
        db.save_settings(&settings).unwrap();

        let state = AppState::new(db).unwrap();
        assert_eq!(state.recipe(), Recipe::Seaborn);
        assert_eq!(state.session.dataset_path(), Some(PathBuf::from("/data/a.csv")));
    }
}

//! Core module - Sample data, display artifacts, and the recipe dispatcher

mod app_state;
pub mod chart;
pub mod dataset;
pub mod describe;
pub mod emoji;
pub mod error;
pub mod frame;
pub mod lineplot;
pub mod page;
pub mod recipe;
mod recipes;
mod session;
pub mod settings;
pub mod style;
pub mod widgets;
pub mod wordcloud;

pub use app_state::AppState;
pub use error::{CookbookError, Result};
pub use page::{Block, Inline, Page, WidgetEvent, WidgetId};
pub use recipe::Recipe;
pub use recipes::build_page;
pub use session::Session;
pub use settings::Settings;

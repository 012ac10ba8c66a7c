//! User interface module - egui front end for the recipe pages

mod app;
mod components;
mod panels;
mod theme;

pub use app::CookbookApp;

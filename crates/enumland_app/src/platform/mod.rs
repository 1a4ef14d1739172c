//! Terminal shell around the pure core: settings, effects and rendering.
mod app;
mod effects;
mod settings;
mod ui;

pub use app::run_app;

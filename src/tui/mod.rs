//! Terminal User Interface (TUI) renderer with animated disk floats

pub mod app;
pub mod theme;
pub mod tower_widget;

pub use app::TuiRenderer;
pub use theme::Theme;

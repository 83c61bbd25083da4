//! TUI (Text User Interface) module for chapview
//!
//! Terminal front end of the chapter viewer, built on ratatui/crossterm.

pub mod app;
pub mod theme;
pub mod viewer_app;

pub use app::App;
pub use viewer_app::{Mode, ViewerApp, ViewerSession};

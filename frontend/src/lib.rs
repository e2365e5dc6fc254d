//! Eventbook frontend library: formatting helpers, theme, widgets and screens.

pub mod app;
pub mod route;
pub mod format;
pub mod forms;
pub mod screens;
pub mod theme;
pub mod widgets;

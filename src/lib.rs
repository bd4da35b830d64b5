pub mod calendar;
pub mod color_utils;
pub mod config;
pub mod grid;
pub mod model;
pub mod store;

#[cfg(feature = "tui")]
pub mod tui;

//! storefront-tui - Terminal UI for the storefront showcase
//!
//! This crate provides the ratatui-based terminal interface. It drives the
//! TEA loop from storefront-app and adds terminal rendering, event polling
//! (keyboard, mouse and resize) and the carousel widgets.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;

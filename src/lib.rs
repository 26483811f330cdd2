//! Pokemon lookup TUI - tui-dispatch app
//!
//! This library exposes the app's modules for testing.

pub mod action;
pub mod api;
pub mod card;
pub mod components;
pub mod effect;
pub mod error;
pub mod habitat;
pub mod logging;
pub mod lookup;
pub mod name_index;
pub mod reducer;
pub mod state;
pub mod tasks;

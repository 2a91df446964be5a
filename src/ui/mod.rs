//! Terminal-facing UI for the joke card.
//!
//! `render` lays the card out from widget state, `theme` owns colors,
//! `input` maps keys to actions and `terminal` owns the screen.

pub mod input;
pub mod render;
pub mod settings;
pub mod terminal;
pub mod text;
pub mod theme;

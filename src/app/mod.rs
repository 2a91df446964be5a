//! Binary-local application orchestration helpers.
//!
//! `main.rs` keeps argument and config wiring; this module hosts the two run
//! modes and logging setup so the entrypoint stays small.

pub(crate) mod interactive;
pub(crate) mod logging;
pub(crate) mod once;

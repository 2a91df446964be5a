//! Centralized, hardcoded UI settings for the terminal card.
//!
//! The single place to tweak labels, glyphs, widths and polling.

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

pub const CARD_MAX_WIDTH: usize = 60;
pub const CARD_MIN_WIDTH: usize = 24;
pub const CARD_MARGIN: &str = "  ";
pub const FALLBACK_COLUMNS: usize = 80;

// ---------------------------------------------------------------------------
// Labels
// ---------------------------------------------------------------------------

pub const TITLE: &str = "Random Joke Generator";
pub const LABEL_CATEGORY: &str = "Category";
pub const LABEL_COPY: &str = "Copy";
pub const LABEL_COPIED: &str = "Copied!";
pub const LABEL_COPY_TOOLTIP: &str = "Copy joke to clipboard";
pub const LABEL_GET_ANOTHER: &str = "Get Another Joke";
pub const LABEL_LOADING: &str = "Loading...";
pub const LABEL_SWITCH_TO_LIGHT: &str = "Switch to light mode";
pub const LABEL_SWITCH_TO_DARK: &str = "Switch to dark mode";
pub const KEY_HELP: &str = "←/→ category · n another · c copy · t theme · q quit";

// ---------------------------------------------------------------------------
// Glyphs
// ---------------------------------------------------------------------------

pub const GLYPH_RULE: char = '─';
pub const GLYPH_SKELETON: char = '▇';
pub const GLYPH_SUN: &str = "☀";
pub const GLYPH_MOON: &str = "☾";
pub const GLYPH_COPY: &str = "⧉";
pub const GLYPH_COPIED: &str = "✓";

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Poll interval for the key reader thread.
pub const EVENT_POLL_MS: u64 = 50;

//! Semantic colors for the card.
//!
//! The renderer asks for a [`ThemeToken`]; the active [`ThemeMode`] decides
//! the color. Switching the active mode recolors the whole card on the next
//! redraw, which makes it the terminal's theme marker.

use crossterm::style::Color;
use std::sync::{OnceLock, RwLock};

use crate::widget::{ThemeMode, ThemeRoot};

/// Semantic color token used by the card renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeToken {
    Title,
    Frame,
    CategoryActive,
    CategoryInactive,
    JokeText,
    Skeleton,
    ButtonPrimary,
    ButtonDisabled,
    CopyLabel,
    CopiedLabel,
    Hint,
    KeyHint,
}

// Solarized.
const BASE02: Color = rgb(0x07, 0x36, 0x42);
const BASE00: Color = rgb(0x65, 0x7b, 0x83);
const BASE0: Color = rgb(0x83, 0x94, 0x96);
const BASE1: Color = rgb(0x93, 0xa1, 0xa1);
const BASE2: Color = rgb(0xee, 0xe8, 0xd5);
const YELLOW: Color = rgb(0xb5, 0x89, 0x00);
const ORANGE: Color = rgb(0xcb, 0x4b, 0x16);
const BLUE: Color = rgb(0x26, 0x8b, 0xd2);
const CYAN: Color = rgb(0x2a, 0xa1, 0x98);
const GREEN: Color = rgb(0x85, 0x99, 0x00);

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb { r, g, b }
}

/// Color of `token` under `mode`.
pub fn palette_color(mode: ThemeMode, token: ThemeToken) -> Color {
    use ThemeToken::*;
    let dark = mode.is_dark();
    match token {
        Title => CYAN,
        ButtonPrimary => BLUE,
        CopiedLabel => GREEN,
        CategoryActive if dark => YELLOW,
        CategoryActive => ORANGE,
        JokeText if dark => BASE2,
        JokeText => BASE02,
        Skeleton if dark => rgb(0x12, 0x35, 0x2d),
        Skeleton => rgb(0xea, 0xef, 0xe7),
        CopyLabel | KeyHint if dark => BASE1,
        CopyLabel | KeyHint => BASE00,
        Frame | CategoryInactive | ButtonDisabled | Hint if dark => BASE00,
        Frame | CategoryInactive | ButtonDisabled | Hint => BASE0,
    }
}

fn active_mode() -> &'static RwLock<ThemeMode> {
    static ACTIVE: OnceLock<RwLock<ThemeMode>> = OnceLock::new();
    ACTIVE.get_or_init(|| RwLock::new(ThemeMode::Light))
}

/// Mode the card is currently drawn in.
pub fn active_theme() -> ThemeMode {
    active_mode().read().map(|mode| *mode).unwrap_or_default()
}

/// Switch the mode the card is drawn in.
pub fn set_active_theme(mode: ThemeMode) {
    match active_mode().write() {
        Ok(mut active) => *active = mode,
        Err(poisoned) => *poisoned.into_inner() = mode,
    }
}

/// Resolve one token under the active mode.
pub fn color(token: ThemeToken) -> Color {
    palette_color(active_theme(), token)
}

/// Theme root for the terminal: applying a mode makes it the active one.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActiveThemeRoot;

impl ThemeRoot for ActiveThemeRoot {
    fn apply(&mut self, mode: ThemeMode) {
        set_active_theme(mode);
    }
}

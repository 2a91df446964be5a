//! Theme mode, its startup derivation, and the root it is applied to.

use std::fmt;

/// Light or dark presentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn toggled(self) -> Self {
        Self::from_dark(!self.is_dark())
    }

    /// Value written to the preference store and used as the theme name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Process-wide theme marker consumed by the renderer.
pub trait ThemeRoot {
    fn apply(&mut self, mode: ThemeMode);
}

/// Derive the startup mode.
///
/// A stored `"dark"` wins; with nothing stored the system preference
/// decides; any other stored value means light.
pub fn initial_theme_mode(stored: Option<&str>, system_prefers_dark: bool) -> ThemeMode {
    match stored {
        Some(value) => ThemeMode::from_dark(value == ThemeMode::Dark.as_str()),
        None => ThemeMode::from_dark(system_prefers_dark),
    }
}

/// Whether the terminal reports a dark background.
pub fn system_prefers_dark() -> bool {
    system_prefers_dark_with(|name| std::env::var(name).ok())
}

/// Read the `COLORFGBG` hint (`"fg;bg"`, or `"fg;default;bg"` on some
/// terminals). Background colors 0-6 and 8 are the dark ANSI slots.
pub fn system_prefers_dark_with<FEnv>(env_lookup: FEnv) -> bool
where
    FEnv: Fn(&str) -> Option<String>,
{
    let Some(value) = env_lookup("COLORFGBG") else {
        return false;
    };
    let Some(bg) = value.rsplit(';').next() else {
        return false;
    };
    matches!(bg.trim().parse::<u8>(), Ok(0..=6 | 8))
}

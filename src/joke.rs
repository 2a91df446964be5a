//! Joke domain types: categories, the displayed joke, and fallback texts.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Text shown when the service reports an error in its response body.
pub const SERVICE_ERROR_TEXT: &str = "Oops, something went wrong with the joke API.";

/// Text shown when the request or body decoding fails.
pub const FETCH_FAILED_TEXT: &str = "Couldn't fetch a joke. Please try again!";

/// Joke topic filter. Order matches the selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Category {
    #[default]
    Any,
    Programming,
    Misc,
    Pun,
    Spooky,
    Christmas,
}

impl Category {
    /// All categories in selector order.
    pub const ALL: [Category; 6] = [
        Self::Any,
        Self::Programming,
        Self::Misc,
        Self::Pun,
        Self::Spooky,
        Self::Christmas,
    ];

    /// Canonical name, also used as the request path segment.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Any => "Any",
            Self::Programming => "Programming",
            Self::Misc => "Misc",
            Self::Pun => "Pun",
            Self::Spooky => "Spooky",
            Self::Christmas => "Christmas",
        }
    }

    /// Zero-based position in [`Category::ALL`].
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|category| *category == self)
            .unwrap_or(0)
    }

    /// Category at `index`, if in range.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Next category, wrapping to the first.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous category, wrapping to the last.
    pub fn previous(self) -> Self {
        let index = self.index();
        if index == 0 {
            Self::ALL[Self::ALL.len() - 1]
        } else {
            Self::ALL[index - 1]
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                let names = Self::ALL
                    .iter()
                    .map(|category| category.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("unknown category `{trimmed}`. Expected one of: {names}")
            })
    }
}

impl TryFrom<String> for Category {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// The joke currently on display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Joke {
    /// Display-ready text; two-part jokes are joined by a blank line.
    pub text: String,
    /// Service identifier; absent for fallback texts.
    pub id: Option<u64>,
}

impl Joke {
    pub fn new(text: impl Into<String>, id: Option<u64>) -> Self {
        Self {
            text: text.into(),
            id,
        }
    }

    /// Fallback joke for a service-reported error.
    pub fn service_error() -> Self {
        Self::new(SERVICE_ERROR_TEXT, None)
    }

    /// Fallback joke for a transport or decode failure.
    pub fn fetch_failed() -> Self {
        Self::new(FETCH_FAILED_TEXT, None)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

//! Card layout: turns a [`WidgetState`] into terminal rows.
//!
//! Layout is pure so it can be asserted on without a terminal; colors are
//! looked up from the active theme only when `color` is set.

use crossterm::style::Stylize;

use super::settings;
use super::text::{center, visible_width, wrap_text};
use super::theme::{self, ThemeToken};
use crate::joke::Category;
use crate::widget::WidgetState;

/// Card width for a terminal `columns` wide.
pub fn card_width(columns: usize) -> usize {
    columns
        .saturating_sub(settings::CARD_MARGIN.len() * 2)
        .clamp(settings::CARD_MIN_WIDTH, settings::CARD_MAX_WIDTH)
}

/// Render the whole card as rows, top to bottom.
pub fn render_card(state: &WidgetState, color: bool, width: usize) -> Vec<String> {
    let paint = Painter { color };
    let mut rows = Vec::new();

    let hint = theme_hint(state);
    rows.push(right_align(&paint.paint(&hint, ThemeToken::Hint), &hint, width));
    rows.push(String::new());
    rows.push(paint.paint(&center(settings::TITLE, width), ThemeToken::Title));
    rows.push(paint.paint(&rule(width), ThemeToken::Frame));
    rows.push(category_row(state.category, &paint));
    rows.push(String::new());
    rows.extend(joke_rows(state, width, &paint));
    rows.push(String::new());

    let copy = copy_label(state.copied);
    let copy_token = if state.copied {
        ThemeToken::CopiedLabel
    } else {
        ThemeToken::CopyLabel
    };
    rows.push(right_align(&paint.paint(&copy, copy_token), &copy, width));

    let button = fetch_button_label(state.loading);
    let button_token = if state.loading {
        ThemeToken::ButtonDisabled
    } else {
        ThemeToken::ButtonPrimary
    };
    rows.push(paint.paint(&center(&button, width), button_token));
    rows.push(paint.paint(&rule(width), ThemeToken::Frame));
    rows.push(paint.paint(&center(settings::KEY_HELP, width), ThemeToken::KeyHint));

    rows.into_iter()
        .map(|row| format!("{}{row}", settings::CARD_MARGIN))
        .collect()
}

/// Plain text of the theme toggle, naming the mode it switches to.
pub fn theme_hint(state: &WidgetState) -> String {
    if state.theme.is_dark() {
        format!("{} {} (t)", settings::GLYPH_SUN, settings::LABEL_SWITCH_TO_LIGHT)
    } else {
        format!("{} {} (t)", settings::GLYPH_MOON, settings::LABEL_SWITCH_TO_DARK)
    }
}

pub fn copy_label(copied: bool) -> String {
    if copied {
        format!("{} {}", settings::GLYPH_COPIED, settings::LABEL_COPIED)
    } else {
        format!(
            "{} {} (c) · {}",
            settings::GLYPH_COPY,
            settings::LABEL_COPY,
            settings::LABEL_COPY_TOOLTIP
        )
    }
}

pub fn fetch_button_label(loading: bool) -> String {
    if loading {
        format!("[ {} ]", settings::LABEL_LOADING)
    } else {
        format!("[ {} (n) ]", settings::LABEL_GET_ANOTHER)
    }
}

fn category_row(active: Category, paint: &Painter) -> String {
    let options = Category::ALL
        .iter()
        .enumerate()
        .map(|(idx, category)| {
            if *category == active {
                paint.paint(&format!("[{}:{category}]", idx + 1), ThemeToken::CategoryActive)
            } else {
                paint.paint(&format!(" {}:{category} ", idx + 1), ThemeToken::CategoryInactive)
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    format!("{}: {options}", settings::LABEL_CATEGORY)
}

fn joke_rows(state: &WidgetState, width: usize, paint: &Painter) -> Vec<String> {
    if state.loading {
        return [width * 3 / 4, width * 2 / 3]
            .into_iter()
            .map(|len| {
                let bar = settings::GLYPH_SKELETON.to_string().repeat(len);
                paint.paint(&center(&bar, width), ThemeToken::Skeleton)
            })
            .collect();
    }
    wrap_text(&state.joke.text, width)
        .into_iter()
        .map(|line| paint.paint(&center(&line, width), ThemeToken::JokeText))
        .collect()
}

fn rule(width: usize) -> String {
    settings::GLYPH_RULE.to_string().repeat(width)
}

/// Right-align `painted`, measuring by its unstyled text.
fn right_align(painted: &str, plain: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_width(plain));
    format!("{}{painted}", " ".repeat(pad))
}

struct Painter {
    color: bool,
}

impl Painter {
    fn paint(&self, text: &str, token: ThemeToken) -> String {
        if self.color {
            text.with(theme::color(token)).to_string()
        } else {
            text.to_string()
        }
    }
}

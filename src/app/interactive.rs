//! Interactive mode: the full-screen joke card.

use std::sync::Arc;

use jokebox::api::JokeApiClient;
use jokebox::clipboard::SystemClipboard;
use jokebox::config::{Config, FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
use jokebox::ui::input::{apply_action, KeyReader};
use jokebox::ui::render::{card_width, render_card};
use jokebox::ui::terminal::TerminalSession;
use jokebox::ui::theme::ActiveThemeRoot;
use jokebox::widget::{system_prefers_dark, JokeWidget, WidgetServices};
use tokio::sync::mpsc;
use tracing::{error, warn};

/// Run the card until the user quits. Returns the process exit code.
pub(crate) async fn run_interactive(config: &Config) -> i32 {
    let mut session = match TerminalSession::enter() {
        Ok(session) => session,
        Err(err) => {
            eprintln!("error: failed to open terminal: {err}");
            return 1;
        }
    };
    let (actions_tx, mut actions) = mpsc::unbounded_channel();
    let _reader = KeyReader::spawn(actions_tx);
    let mut widget = JokeWidget::mount(widget_services(config), config.widget.category);

    loop {
        let rows = render_card(
            widget.state(),
            config.display.color,
            card_width(session.columns()),
        );
        if let Err(err) = session.draw(&rows) {
            error!(%err, "failed to draw card");
            return 1;
        }

        tokio::select! {
            action = actions.recv() => match action {
                Some(action) => {
                    if !apply_action(&mut widget, action) {
                        break;
                    }
                }
                None => break,
            },
            event = widget.next_event() => match event {
                Some(event) => widget.apply_event(event),
                None => break,
            },
        }
    }
    0
}

fn widget_services(config: &Config) -> WidgetServices {
    let prefs: Box<dyn PreferenceStore> = match FilePreferenceStore::open_default() {
        Ok(store) => Box::new(store),
        Err(err) => {
            warn!(%err, "theme preference will not persist");
            Box::new(MemoryPreferenceStore::new())
        }
    };
    WidgetServices {
        jokes: Arc::new(JokeApiClient::new(&config.service)),
        prefs,
        clipboard: Box::new(SystemClipboard::new()),
        theme_root: Box::new(ActiveThemeRoot),
        system_prefers_dark: system_prefers_dark(),
    }
}

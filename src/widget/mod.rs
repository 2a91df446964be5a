//! The joke widget: UI state plus the operations that drive it.
//!
//! The widget is owned by one task. Fetches and the copied-flag timer run as
//! spawned tasks that report back through [`WidgetEvent`]s; only the owner
//! applies them, so state is never touched concurrently.
//!
//! Every fetch carries a sequence number. Results from a fetch that a newer
//! one has superseded are dropped, so a slow response for an old category
//! can never overwrite the joke for the category now selected.

mod theme;

pub use theme::{
    initial_theme_mode, system_prefers_dark, system_prefers_dark_with, ThemeMode, ThemeRoot,
};

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, warn};

use crate::api::{JokeResponse, JokeService};
use crate::clipboard::Clipboard;
use crate::config::{PreferenceStore, THEME_KEY};
use crate::error::ApiError;
use crate::joke::{Category, Joke};

/// How long the copied flag stays set after a copy.
pub const COPIED_RESET_AFTER: Duration = Duration::from_millis(2000);

/// Snapshot of everything the renderer needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetState {
    pub joke: Joke,
    pub loading: bool,
    pub category: Category,
    pub copied: bool,
    pub theme: ThemeMode,
}

/// Completion reported by a background task.
#[derive(Debug)]
pub enum WidgetEvent {
    JokeLoaded {
        request: u64,
        outcome: Result<JokeResponse, ApiError>,
    },
    CopiedExpired {
        generation: u64,
    },
}

/// Collaborators handed to [`JokeWidget::mount`].
pub struct WidgetServices {
    pub jokes: Arc<dyn JokeService>,
    pub prefs: Box<dyn PreferenceStore>,
    pub clipboard: Box<dyn Clipboard>,
    pub theme_root: Box<dyn ThemeRoot>,
    pub system_prefers_dark: bool,
}

pub struct JokeWidget {
    state: WidgetState,
    jokes: Arc<dyn JokeService>,
    prefs: Box<dyn PreferenceStore>,
    clipboard: Box<dyn Clipboard>,
    theme_root: Box<dyn ThemeRoot>,
    events_tx: mpsc::UnboundedSender<WidgetEvent>,
    events_rx: mpsc::UnboundedReceiver<WidgetEvent>,
    latest_request: u64,
    fetches: Vec<JoinHandle<()>>,
    copy_generation: u64,
    copied_timer: Option<JoinHandle<()>>,
}

impl JokeWidget {
    /// Mount the widget: derive the theme, apply it, and start the first fetch.
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount(services: WidgetServices, category: Category) -> Self {
        let WidgetServices {
            jokes,
            prefs,
            clipboard,
            theme_root,
            system_prefers_dark,
        } = services;
        let stored = prefs.get(THEME_KEY);
        let theme = initial_theme_mode(stored.as_deref(), system_prefers_dark);
        debug!(?stored, system_prefers_dark, %theme, "derived initial theme");

        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let mut widget = Self {
            state: WidgetState {
                category,
                theme,
                ..WidgetState::default()
            },
            jokes,
            prefs,
            clipboard,
            theme_root,
            events_tx,
            events_rx,
            latest_request: 0,
            fetches: Vec::new(),
            copy_generation: 0,
            copied_timer: None,
        };
        widget.apply_theme();
        widget.fetch_joke();
        widget
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    /// Select a category; a change triggers a fetch. Returns whether it did.
    pub fn select_category(&mut self, category: Category) -> bool {
        if category == self.state.category {
            return false;
        }
        self.state.category = category;
        self.fetch_joke();
        true
    }

    pub fn next_category(&mut self) -> bool {
        self.select_category(self.state.category.next())
    }

    pub fn previous_category(&mut self) -> bool {
        self.select_category(self.state.category.previous())
    }

    /// "Get another joke". Ignored while a fetch is loading.
    pub fn request_another(&mut self) -> bool {
        if self.state.loading {
            return false;
        }
        self.fetch_joke();
        true
    }

    /// Copy the current joke. No-op when there is no text.
    ///
    /// Sets the copied flag and (re)starts its reset timer; a copy inside the
    /// window restarts it.
    pub fn copy_joke(&mut self) -> bool {
        if self.state.joke.is_empty() {
            return false;
        }
        if let Err(err) = self.clipboard.set_text(&self.state.joke.text) {
            warn!(%err, "failed to copy joke to clipboard");
            return false;
        }
        self.state.copied = true;
        self.restart_copied_timer();
        true
    }

    /// Flip between light and dark, then apply and persist the new mode.
    pub fn toggle_theme(&mut self) {
        self.state.theme = self.state.theme.toggled();
        self.apply_theme();
    }

    /// Wait for the next background completion.
    pub async fn next_event(&mut self) -> Option<WidgetEvent> {
        self.events_rx.recv().await
    }

    /// Wait for one background completion and apply it.
    pub async fn process_next_event(&mut self) -> bool {
        match self.next_event().await {
            Some(event) => {
                self.apply_event(event);
                true
            }
            None => false,
        }
    }

    /// Apply every completion already queued without waiting.
    pub fn drain_pending_events(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply_event(event);
            applied += 1;
        }
        applied
    }

    pub fn apply_event(&mut self, event: WidgetEvent) {
        match event {
            WidgetEvent::JokeLoaded { request, outcome } => {
                if request != self.latest_request {
                    debug!(
                        request,
                        latest = self.latest_request,
                        "discarding superseded joke response"
                    );
                    return;
                }
                self.state.joke = match outcome {
                    Ok(response) => response.into_joke(),
                    Err(err) => {
                        error!(%err, category = %self.state.category, "error fetching joke");
                        Joke::fetch_failed()
                    }
                };
                self.state.loading = false;
            }
            WidgetEvent::CopiedExpired { generation } => {
                // A restarted window may leave a stale expiry in the queue.
                if generation != self.copy_generation {
                    return;
                }
                self.state.copied = false;
                self.copied_timer = None;
            }
        }
    }

    fn fetch_joke(&mut self) {
        self.state.loading = true;
        self.state.copied = false;
        self.latest_request += 1;

        let request = self.latest_request;
        let category = self.state.category;
        let jokes = Arc::clone(&self.jokes);
        let events = self.events_tx.clone();
        debug!(request, %category, "fetching joke");

        self.fetches.retain(|handle| !handle.is_finished());
        self.fetches.push(tokio::spawn(async move {
            let outcome = jokes.fetch(category).await;
            // The receiver is gone only once the widget is dropped.
            let _ = events.send(WidgetEvent::JokeLoaded { request, outcome });
        }));
    }

    fn restart_copied_timer(&mut self) {
        if let Some(timer) = self.copied_timer.take() {
            timer.abort();
        }
        self.copy_generation += 1;
        let generation = self.copy_generation;
        let events = self.events_tx.clone();
        self.copied_timer = Some(tokio::spawn(async move {
            tokio::time::sleep(COPIED_RESET_AFTER).await;
            let _ = events.send(WidgetEvent::CopiedExpired { generation });
        }));
    }

    fn apply_theme(&mut self) {
        let mode = self.state.theme;
        self.theme_root.apply(mode);
        if let Err(err) = self.prefs.set(THEME_KEY, mode.as_str()) {
            warn!(%err, %mode, "failed to persist theme preference");
        }
    }

    #[cfg(test)]
    fn copied_timer_abort_handle(&self) -> Option<tokio::task::AbortHandle> {
        self.copied_timer.as_ref().map(JoinHandle::abort_handle)
    }
}

impl Drop for JokeWidget {
    fn drop(&mut self) {
        if let Some(timer) = self.copied_timer.take() {
            timer.abort();
        }
        for fetch in self.fetches.drain(..) {
            fetch.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryPreferenceStore;
    use crate::joke::{FETCH_FAILED_TEXT, SERVICE_ERROR_TEXT};
    use crate::testsupport::{
        RecordingClipboard, RecordingPreferences, RecordingThemeRoot, Reply, ScriptedJokeService,
    };
    use tokio::time::Instant;

    struct Harness {
        service: ScriptedJokeService,
        prefs: MemoryPreferenceStore,
        clipboard: RecordingClipboard,
        theme_root: RecordingThemeRoot,
    }

    impl Harness {
        fn new(service: ScriptedJokeService) -> Self {
            Self {
                service,
                prefs: MemoryPreferenceStore::new(),
                clipboard: RecordingClipboard::new(),
                theme_root: RecordingThemeRoot::new(),
            }
        }

        fn mount(&self, category: Category, system_prefers_dark: bool) -> JokeWidget {
            JokeWidget::mount(
                WidgetServices {
                    jokes: Arc::new(self.service.clone()),
                    prefs: Box::new(self.prefs.clone()),
                    clipboard: Box::new(self.clipboard.clone()),
                    theme_root: Box::new(self.theme_root.clone()),
                    system_prefers_dark,
                },
                category,
            )
        }

        fn stored_theme(&self) -> Option<String> {
            self.prefs.get(THEME_KEY)
        }
    }

    async fn mounted_with(reply: Reply) -> (Harness, JokeWidget) {
        let harness = Harness::new(ScriptedJokeService::new().reply(reply));
        let mut widget = harness.mount(Category::Any, false);
        assert!(widget.process_next_event().await);
        (harness, widget)
    }

    #[tokio::test(start_paused = true)]
    async fn mount_fetches_initial_category_and_shows_loading() {
        let harness = Harness::new(ScriptedJokeService::new().reply(Reply::Single(1, "first")));
        let mut widget = harness.mount(Category::Programming, false);

        assert!(widget.state().loading);
        assert!(widget.state().joke.is_empty());

        widget.process_next_event().await;
        assert!(!widget.state().loading);
        assert_eq!(widget.state().joke, Joke::new("first", Some(1)));
        assert_eq!(harness.service.requests(), vec![Category::Programming]);
    }

    #[tokio::test(start_paused = true)]
    async fn every_category_change_requests_that_category() {
        let harness = Harness::new(ScriptedJokeService::new());
        let mut widget = harness.mount(Category::Any, false);
        widget.process_next_event().await;

        for category in Category::ALL.into_iter().skip(1) {
            assert!(widget.select_category(category));
            widget.process_next_event().await;
            assert_eq!(widget.state().category, category);
        }
        assert_eq!(harness.service.requests(), Category::ALL.to_vec());
    }

    #[tokio::test(start_paused = true)]
    async fn selecting_current_category_does_not_fetch() {
        let harness = Harness::new(ScriptedJokeService::new());
        let mut widget = harness.mount(Category::Pun, false);
        widget.process_next_event().await;

        assert!(!widget.select_category(Category::Pun));
        assert!(!widget.state().loading);
        assert_eq!(harness.service.requests(), vec![Category::Pun]);
    }

    #[tokio::test(start_paused = true)]
    async fn single_joke_text_and_id_come_from_response() {
        let (_harness, widget) = mounted_with(Reply::Single(99, "A single joke.")).await;
        assert_eq!(widget.state().joke.text, "A single joke.");
        assert_eq!(widget.state().joke.id, Some(99));
    }

    #[tokio::test(start_paused = true)]
    async fn twopart_joke_is_joined_by_blank_line() {
        let (_harness, widget) = mounted_with(Reply::Twopart(5, "Setup?", "Delivery!")).await;
        assert_eq!(widget.state().joke.text, "Setup?\n\nDelivery!");
        assert_eq!(widget.state().joke.id, Some(5));
    }

    #[tokio::test(start_paused = true)]
    async fn service_error_shows_apology() {
        let (_harness, widget) = mounted_with(Reply::ServiceError).await;
        assert_eq!(widget.state().joke.text, SERVICE_ERROR_TEXT);
        assert_eq!(widget.state().joke.id, None);
        assert!(!widget.state().loading);
    }

    #[tokio::test(start_paused = true)]
    async fn transport_failure_shows_retry_prompt_and_clears_loading() {
        let (_harness, widget) = mounted_with(Reply::Garbage).await;
        assert_eq!(widget.state().joke.text, FETCH_FAILED_TEXT);
        assert_eq!(widget.state().joke.id, None);
        assert!(!widget.state().loading);
    }

    #[tokio::test(start_paused = true)]
    async fn get_another_is_ignored_while_loading() {
        let harness = Harness::new(
            ScriptedJokeService::new().reply_after(Duration::from_millis(300), Reply::Single(1, "a")),
        );
        let mut widget = harness.mount(Category::Any, false);

        assert!(!widget.request_another());
        widget.process_next_event().await;
        assert!(widget.request_another());
        assert!(widget.state().loading);
        widget.process_next_event().await;
        assert_eq!(harness.service.requests().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn superseded_response_is_discarded() {
        let harness = Harness::new(
            ScriptedJokeService::new()
                .reply_after(Duration::from_millis(500), Reply::Single(1, "stale any joke"))
                .reply_after(Duration::from_millis(10), Reply::Single(2, "fresh pun")),
        );
        let mut widget = harness.mount(Category::Any, false);
        widget.select_category(Category::Pun);

        widget.process_next_event().await;
        assert_eq!(widget.state().joke.text, "fresh pun");
        assert!(!widget.state().loading);

        widget.process_next_event().await;
        assert_eq!(widget.state().joke.text, "fresh pun");
        assert_eq!(widget.state().category, Category::Pun);
    }

    #[tokio::test(start_paused = true)]
    async fn superseded_response_does_not_clear_loading() {
        let harness = Harness::new(
            ScriptedJokeService::new()
                .reply_after(Duration::from_millis(10), Reply::Single(1, "old"))
                .reply_after(Duration::from_millis(500), Reply::Single(2, "new")),
        );
        let mut widget = harness.mount(Category::Any, false);
        widget.select_category(Category::Spooky);

        widget.process_next_event().await;
        assert!(widget.state().loading);
        assert!(widget.state().joke.is_empty());

        widget.process_next_event().await;
        assert!(!widget.state().loading);
        assert_eq!(widget.state().joke.text, "new");
    }

    #[tokio::test(start_paused = true)]
    async fn copy_without_text_is_a_no_op() {
        let harness = Harness::new(
            ScriptedJokeService::new().reply_after(Duration::from_millis(100), Reply::Single(1, "a")),
        );
        let mut widget = harness.mount(Category::Any, false);

        assert!(!widget.copy_joke());
        assert!(!widget.state().copied);
        assert!(harness.clipboard.writes().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn copy_sets_flag_then_resets_after_two_seconds() {
        let (harness, mut widget) = mounted_with(Reply::Single(1, "copy me")).await;

        let started = Instant::now();
        assert!(widget.copy_joke());
        assert!(widget.state().copied);
        assert_eq!(harness.clipboard.writes(), vec!["copy me".to_string()]);

        tokio::time::advance(COPIED_RESET_AFTER - Duration::from_millis(1)).await;
        tokio::task::yield_now().await;
        widget.drain_pending_events();
        assert!(widget.state().copied);

        widget.process_next_event().await;
        assert!(!widget.state().copied);
        assert!(started.elapsed() >= COPIED_RESET_AFTER);
    }

    #[tokio::test(start_paused = true)]
    async fn copy_again_restarts_the_window() {
        let (harness, mut widget) = mounted_with(Reply::Single(1, "twice")).await;

        widget.copy_joke();
        tokio::time::advance(Duration::from_millis(1500)).await;
        let recopied_at = Instant::now();
        widget.copy_joke();

        widget.process_next_event().await;
        assert!(!widget.state().copied);
        assert!(recopied_at.elapsed() >= COPIED_RESET_AFTER);
        assert_eq!(harness.clipboard.writes().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn failed_clipboard_write_leaves_flag_unset() {
        let mut harness = Harness::new(ScriptedJokeService::new().reply(Reply::Single(1, "x")));
        harness.clipboard = RecordingClipboard::failing();
        let mut widget = harness.mount(Category::Any, false);
        widget.process_next_event().await;

        assert!(!widget.copy_joke());
        assert!(!widget.state().copied);
    }

    #[tokio::test(start_paused = true)]
    async fn new_fetch_clears_copied_flag() {
        let (_harness, mut widget) = mounted_with(Reply::Single(1, "x")).await;
        widget.copy_joke();
        assert!(widget.request_another());
        assert!(!widget.state().copied);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_widget_cancels_copied_timer() {
        let (_harness, mut widget) = mounted_with(Reply::Single(1, "x")).await;
        widget.copy_joke();
        let timer = widget.copied_timer_abort_handle().expect("timer running");

        drop(widget);
        tokio::time::sleep(Duration::from_millis(1)).await;
        assert!(timer.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn mount_applies_and_persists_initial_theme() {
        let harness = Harness::new(ScriptedJokeService::new());
        let widget = harness.mount(Category::Any, true);

        assert_eq!(widget.state().theme, ThemeMode::Dark);
        assert_eq!(harness.theme_root.applied(), vec![ThemeMode::Dark]);
        assert_eq!(harness.stored_theme().as_deref(), Some("dark"));
    }

    #[tokio::test(start_paused = true)]
    async fn stored_preference_beats_system_preference() {
        let mut harness = Harness::new(ScriptedJokeService::new());
        harness.prefs = MemoryPreferenceStore::with_value(THEME_KEY, "light");
        let widget = harness.mount(Category::Any, true);
        assert_eq!(widget.state().theme, ThemeMode::Light);
    }

    #[tokio::test(start_paused = true)]
    async fn toggling_twice_restores_marker_and_preference() {
        let harness = Harness::new(ScriptedJokeService::new());
        let mut widget = harness.mount(Category::Any, false);
        let original_marker = harness.theme_root.current();
        let original_stored = harness.stored_theme();

        widget.toggle_theme();
        assert_eq!(widget.state().theme, ThemeMode::Dark);
        assert_eq!(harness.theme_root.current(), Some(ThemeMode::Dark));
        assert_eq!(harness.stored_theme().as_deref(), Some("dark"));

        widget.toggle_theme();
        assert_eq!(harness.theme_root.current(), original_marker);
        assert_eq!(harness.stored_theme(), original_stored);
    }

    #[tokio::test(start_paused = true)]
    async fn toggle_still_applies_theme_when_preference_write_fails() {
        let prefs = RecordingPreferences::failing();
        let theme_root = RecordingThemeRoot::new();
        let mut widget = JokeWidget::mount(
            WidgetServices {
                jokes: Arc::new(ScriptedJokeService::new()),
                prefs: Box::new(prefs.clone()),
                clipboard: Box::new(RecordingClipboard::new()),
                theme_root: Box::new(theme_root.clone()),
                system_prefers_dark: false,
            },
            Category::Any,
        );
        assert_eq!(theme_root.current(), Some(ThemeMode::Light));

        widget.toggle_theme();

        assert_eq!(widget.state().theme, ThemeMode::Dark);
        assert_eq!(theme_root.current(), Some(ThemeMode::Dark));
        assert_eq!(prefs.write_attempts(), 2);
        assert_eq!(prefs.get(THEME_KEY), None);
    }
}

//! Shared test fixtures: temp dirs and scripted widget collaborators.

use async_trait::async_trait;
use std::collections::{BTreeMap, VecDeque};
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::api::{JokeResponse, JokeService};
use crate::clipboard::Clipboard;
use crate::config::PreferenceStore;
use crate::error::{ApiError, ClipboardError, ConfigError};
use crate::joke::Category;
use crate::widget::{ThemeMode, ThemeRoot};

static NEXT_DIR_ID: AtomicU64 = AtomicU64::new(0);

/// Scratch directory removed on drop.
#[derive(Debug)]
pub struct TestTempDir {
    root: PathBuf,
}

impl TestTempDir {
    pub fn new(label: &str) -> Self {
        let id = NEXT_DIR_ID.fetch_add(1, Ordering::Relaxed);
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_nanos());
        let root = std::env::temp_dir().join(format!("jokebox-{label}-{stamp}-{id}"));
        fs::create_dir_all(&root).expect("create scratch dir");
        Self { root }
    }

    pub fn child(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Write `content` to `relative`, creating parents.
    pub fn write_text(&self, relative: &str, content: &str) -> PathBuf {
        let file = self.child(relative);
        if let Some(dir) = file.parent() {
            fs::create_dir_all(dir).expect("create scratch parent");
        }
        fs::write(&file, content).expect("write scratch file");
        file
    }
}

impl Drop for TestTempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}

/// One scripted answer from [`ScriptedJokeService`].
#[derive(Debug, Clone)]
pub enum Reply {
    Single(u64, &'static str),
    Twopart(u64, &'static str, &'static str),
    ServiceError,
    /// Body that does not decode as a joke.
    Garbage,
}

impl Reply {
    fn into_result(self) -> Result<JokeResponse, ApiError> {
        let body = match self {
            Self::Single(id, joke) => {
                serde_json::json!({"error": false, "type": "single", "id": id, "joke": joke})
            }
            Self::Twopart(id, setup, delivery) => serde_json::json!({
                "error": false, "type": "twopart", "id": id, "setup": setup, "delivery": delivery
            }),
            Self::ServiceError => {
                serde_json::json!({"error": true, "message": "No matching joke found"})
            }
            Self::Garbage => {
                let err = serde_json::from_str::<JokeResponse>("<html>").unwrap_err();
                return Err(err.into());
            }
        };
        Ok(serde_json::from_value(body).expect("scripted body decodes"))
    }
}

/// Joke service answering from a queue of `(delay, reply)` pairs.
///
/// Once the queue is empty every call answers with a generic single joke.
#[derive(Debug, Clone, Default)]
pub struct ScriptedJokeService {
    replies: Arc<Mutex<VecDeque<(Duration, Reply)>>>,
    requests: Arc<Mutex<Vec<Category>>>,
}

impl ScriptedJokeService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, reply: Reply) -> Self {
        self.reply_after(Duration::ZERO, reply)
    }

    pub fn reply_after(self, delay: Duration, reply: Reply) -> Self {
        self.replies.lock().unwrap().push_back((delay, reply));
        self
    }

    /// Categories requested so far, in call order.
    pub fn requests(&self) -> Vec<Category> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl JokeService for ScriptedJokeService {
    async fn fetch(&self, category: Category) -> Result<JokeResponse, ApiError> {
        self.requests.lock().unwrap().push(category);
        let (delay, reply) = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or((Duration::ZERO, Reply::Single(0, "default joke")));
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        reply.into_result()
    }
}

/// Clipboard that records writes; clones share the log.
#[derive(Debug, Clone, Default)]
pub struct RecordingClipboard {
    writes: Arc<Mutex<Vec<String>>>,
    fail: bool,
}

impl RecordingClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clipboard whose writes always fail.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }
}

impl Clipboard for RecordingClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Unavailable("no display".to_string()));
        }
        self.writes.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// Theme root that records every applied mode; clones share the log.
#[derive(Debug, Clone, Default)]
pub struct RecordingThemeRoot {
    applied: Arc<Mutex<Vec<ThemeMode>>>,
}

impl RecordingThemeRoot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn applied(&self) -> Vec<ThemeMode> {
        self.applied.lock().unwrap().clone()
    }

    pub fn current(&self) -> Option<ThemeMode> {
        self.applied.lock().unwrap().last().copied()
    }
}

impl ThemeRoot for RecordingThemeRoot {
    fn apply(&mut self, mode: ThemeMode) {
        self.applied.lock().unwrap().push(mode);
    }
}

/// Preference store that can be told to reject every write.
#[derive(Debug, Clone, Default)]
pub struct RecordingPreferences {
    values: Arc<Mutex<BTreeMap<String, String>>>,
    writes: Arc<Mutex<usize>>,
    fail: bool,
}

impl RecordingPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store whose writes always fail; reads see nothing.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Number of writes attempted, failed ones included.
    pub fn write_attempts(&self) -> usize {
        *self.writes.lock().unwrap()
    }
}

impl PreferenceStore for RecordingPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        *self.writes.lock().unwrap() += 1;
        if self.fail {
            return Err(ConfigError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only preference file",
            )));
        }
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

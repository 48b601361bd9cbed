//! Deck persistence: best-effort key-value storage and the deck store.
//!
//! Durability is a convenience, not a correctness requirement. Every
//! failure on the storage side is swallowed (with a logged warning) and the
//! in-memory deck stays authoritative; a missing or unreadable snapshot
//! hydrates fresh.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::card::{Category, Kind};
use crate::state::{self, DeckState};

/// Fixed, versioned key the deck snapshot is stored under.
///
/// Bumping the version abandons old snapshots gracefully: an unknown key
/// reads as absent and the deck starts fresh.
pub const DECK_STATE_KEY: &str = "oracle_deck_v1";

/// Best-effort key-value storage.
///
/// Implementations never fail loudly: a `get` that cannot read returns
/// `None`, a `set` or `remove` that cannot write is a no-op.
pub trait Storage {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;
    /// Write `value` under `key`, overwriting any previous value.
    fn set(&mut self, key: &str, value: &str);
    /// Delete the value stored under `key`, if present.
    fn remove(&mut self, key: &str);
}

/// In-memory storage for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}

/// File-backed storage: one file per key beneath a root directory.
///
/// The directory is created lazily on the first write.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Create a store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The root directory of this store.
    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Err(e) = fs::create_dir_all(&self.root) {
            log::warn!("cannot create storage directory {}: {e}", self.root.display());
            return;
        }
        if let Err(e) = fs::write(self.path_for(key), value) {
            log::warn!("cannot persist '{key}': {e}");
        }
    }

    fn remove(&mut self, key: &str) {
        if let Err(e) = fs::remove_file(self.path_for(key))
            && e.kind() != ErrorKind::NotFound
        {
            log::warn!("cannot remove '{key}': {e}");
        }
    }
}

/// Owns the persisted deck snapshot and access to the canonical seeds.
#[derive(Debug)]
pub struct DeckStore<S: Storage> {
    storage: S,
    key: String,
}

impl<S: Storage> DeckStore<S> {
    /// Create a store using the default versioned snapshot key.
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DECK_STATE_KEY)
    }

    /// Create a store using a custom snapshot key.
    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// The snapshot key in use.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The persisted deck, or a pristine one if no usable snapshot exists.
    ///
    /// Never fails: an absent or unparsable snapshot falls back to
    /// [`DeckState::fresh`].
    pub fn load(&self) -> DeckState {
        match self.storage.get(&self.key) {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                log::warn!("discarding unreadable deck snapshot: {e}");
                DeckState::fresh()
            }),
            None => DeckState::fresh(),
        }
    }

    /// Persist a full snapshot of `state`, overwriting the previous one.
    ///
    /// Failures are swallowed; the in-memory state stays authoritative.
    pub fn save(&mut self, state: &DeckState) {
        match serde_json::to_string(state) {
            Ok(raw) => self.storage.set(&self.key, &raw),
            Err(e) => log::warn!("cannot serialize deck snapshot: {e}"),
        }
    }

    /// Drop the persisted snapshot and return a pristine deck.
    pub fn reset(&mut self) -> DeckState {
        self.storage.remove(&self.key);
        DeckState::fresh()
    }

    /// A new deep copy of the canonical seed pool for `(category, kind)`.
    pub fn fresh_pool(&self, category: Category, kind: Kind) -> Vec<String> {
        state::fresh_pool(category, kind)
    }
}

//! Fate deck draw engine for Oracle.
//!
//! Three intensity categories, each owning truth/dare/wildcard pools drawn
//! without replacement. Kind selection is a weighted threshold roll; an
//! exhausted pool silently replenishes from its canonical seed. The full
//! deck snapshot persists through a best-effort key-value store after every
//! draw, and a missing or unreadable snapshot simply hydrates fresh.

pub mod card;
pub mod config;
pub mod draw;
pub mod error;
pub mod state;
pub mod store;
pub mod tables;

pub use card::{Category, Kind};
pub use config::{DEFAULT_WILDCARD_CHANCE, DrawConfig};
pub use draw::{DrawOutcome, draw, draw_kind, kind_for_roll, strip_label};
pub use error::{DeckError, DeckResult};
pub use state::{DeckState, KindPools, fresh_pool};
pub use store::{DECK_STATE_KEY, DeckStore, FileStorage, MemoryStorage, Storage};

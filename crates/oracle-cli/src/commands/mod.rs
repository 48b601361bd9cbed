pub mod draw;
pub mod play;
pub mod reset;
pub mod status;

use std::path::Path;

use oracle_deck::{Category, DrawConfig, FileStorage};
use oracle_session::SessionConfig;

/// Parse a category token into the closed enumeration.
fn parse_category(token: &str) -> Result<Category, String> {
    Category::parse(token)
        .ok_or_else(|| format!("unknown category '{token}' (expected light, deep, or chaos)"))
}

/// File storage rooted at the state directory.
fn storage(state_dir: &Path) -> FileStorage {
    FileStorage::new(state_dir)
}

/// Build a session config from the shared CLI flags.
fn session_config(name: &str, seed: Option<u64>, adult: bool, tapered: bool) -> SessionConfig {
    let draw = if tapered {
        DrawConfig::tapered()
    } else {
        DrawConfig::default()
    };
    let mut config = SessionConfig::default()
        .with_invoker(name)
        .with_adult(adult)
        .with_draw(draw);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    config
}

//! Configuration for a fate deck session.

use oracle_deck::DrawConfig;

/// Configuration for a fate deck session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// RNG seed for reproducible draws; `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Name recorded with every draw this session makes.
    pub invoker: String,
    /// Whether the age gate has been passed; unlocks CHAOS.
    pub adult: bool,
    /// Wildcard probabilities for the draw engine.
    pub draw: DrawConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            invoker: "guest".to_string(),
            adult: false,
            draw: DrawConfig::default(),
        }
    }
}

impl SessionConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the invoker name.
    pub fn with_invoker(mut self, invoker: impl Into<String>) -> Self {
        self.invoker = invoker.into();
        self
    }

    /// Set whether the age gate has been passed.
    pub fn with_adult(mut self, adult: bool) -> Self {
        self.adult = adult;
        self
    }

    /// Set the draw configuration.
    pub fn with_draw(mut self, draw: DrawConfig) -> Self {
        self.draw = draw;
        self
    }
}

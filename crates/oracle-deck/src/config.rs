//! Draw configuration.

use crate::card::Category;

/// Default wildcard chance applied to every category.
pub const DEFAULT_WILDCARD_CHANCE: f64 = 0.15;

/// Per-category wildcard probabilities for the draw engine.
///
/// Only the wildcard cut is configurable; the remaining probability mass is
/// always split evenly between truth and dare.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawConfig {
    light: f64,
    deep: f64,
    chaos: f64,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            light: DEFAULT_WILDCARD_CHANCE,
            deep: DEFAULT_WILDCARD_CHANCE,
            chaos: DEFAULT_WILDCARD_CHANCE,
        }
    }
}

impl DrawConfig {
    /// Wildcard chances tapering off with intensity: 15% light, 10% deep,
    /// 6% chaos.
    pub fn tapered() -> Self {
        Self {
            light: 0.15,
            deep: 0.10,
            chaos: 0.06,
        }
    }

    /// Set the wildcard chance for one category, clamped to `[0.0, 1.0]`.
    pub fn with_wildcard_chance(mut self, category: Category, chance: f64) -> Self {
        let chance = chance.clamp(0.0, 1.0);
        match category {
            Category::Light => self.light = chance,
            Category::Deep => self.deep = chance,
            Category::Chaos => self.chaos = chance,
        }
        self
    }

    /// The wildcard chance for one category.
    pub fn wildcard_chance(&self, category: Category) -> f64 {
        match category {
            Category::Light => self.light,
            Category::Deep => self.deep,
            Category::Chaos => self.chaos,
        }
    }
}

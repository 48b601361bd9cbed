//! Deck state: the nine depleting card pools.
//!
//! A `DeckState` is a value snapshot. The draw engine never mutates a
//! caller's snapshot in place; it clones, depletes the clone, and returns
//! it. Serialization matches the persisted snapshot layout exactly: one
//! object per category, each holding `truths`/`dares`/`wildcards` arrays.

use serde::{Deserialize, Serialize};

use crate::card::{Category, Kind};
use crate::tables;

/// A new deep copy of the canonical seed pool for `(category, kind)`.
pub fn fresh_pool(category: Category, kind: Kind) -> Vec<String> {
    tables::seed(category, kind)
        .iter()
        .map(|s| (*s).to_string())
        .collect()
}

/// The three kind pools owned by one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindPools {
    /// Remaining truth prompts.
    pub truths: Vec<String>,
    /// Remaining dare prompts.
    pub dares: Vec<String>,
    /// Remaining wildcard prompts.
    pub wildcards: Vec<String>,
}

impl KindPools {
    fn fresh(category: Category) -> Self {
        Self {
            truths: fresh_pool(category, Kind::Truth),
            dares: fresh_pool(category, Kind::Dare),
            wildcards: fresh_pool(category, Kind::Wildcard),
        }
    }

    /// The pool holding one kind.
    pub fn pool(&self, kind: Kind) -> &[String] {
        match kind {
            Kind::Truth => &self.truths,
            Kind::Dare => &self.dares,
            Kind::Wildcard => &self.wildcards,
        }
    }

    /// Mutable access to the pool holding one kind.
    pub fn pool_mut(&mut self, kind: Kind) -> &mut Vec<String> {
        match kind {
            Kind::Truth => &mut self.truths,
            Kind::Dare => &mut self.dares,
            Kind::Wildcard => &mut self.wildcards,
        }
    }
}

/// Snapshot of all nine pools at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckState {
    /// Pools for the LIGHT category.
    pub light: KindPools,
    /// Pools for the DEEP category.
    pub deep: KindPools,
    /// Pools for the CHAOS category.
    pub chaos: KindPools,
}

impl DeckState {
    /// A pristine deck: every pool is a full copy of its canonical seed.
    pub fn fresh() -> Self {
        Self {
            light: KindPools::fresh(Category::Light),
            deep: KindPools::fresh(Category::Deep),
            chaos: KindPools::fresh(Category::Chaos),
        }
    }

    /// The pools owned by one category.
    pub fn category(&self, category: Category) -> &KindPools {
        match category {
            Category::Light => &self.light,
            Category::Deep => &self.deep,
            Category::Chaos => &self.chaos,
        }
    }

    /// Mutable access to the pools owned by one category.
    pub fn category_mut(&mut self, category: Category) -> &mut KindPools {
        match category {
            Category::Light => &mut self.light,
            Category::Deep => &mut self.deep,
            Category::Chaos => &mut self.chaos,
        }
    }

    /// The pool for one (category, kind) pair.
    pub fn pool(&self, category: Category, kind: Kind) -> &[String] {
        self.category(category).pool(kind)
    }

    /// Mutable pool access for the draw engine.
    pub fn pool_mut(&mut self, category: Category, kind: Kind) -> &mut Vec<String> {
        self.category_mut(category).pool_mut(kind)
    }

    /// Remaining cards in one pool.
    pub fn remaining(&self, category: Category, kind: Kind) -> usize {
        self.pool(category, kind).len()
    }

    /// Remaining cards across one category's three pools.
    pub fn category_remaining(&self, category: Category) -> usize {
        Kind::all()
            .iter()
            .map(|kind| self.remaining(category, *kind))
            .sum()
    }

    /// Remaining cards across all nine pools.
    pub fn total_remaining(&self) -> usize {
        Category::all()
            .iter()
            .map(|category| self.category_remaining(*category))
            .sum()
    }
}

impl Default for DeckState {
    fn default() -> Self {
        Self::fresh()
    }
}

//! Card taxonomy: intensity categories and card kinds.
//!
//! A drawn card is identified by the pool it came from: a `Category`
//! (thematic intensity) crossed with a `Kind` (structural type). The axes
//! are independent; every category owns one pool per kind.

use serde::{Deserialize, Serialize};

/// Thematic intensity tier of a drawn card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Casual prompts safe for any group.
    Light,
    /// Personal and emotionally heavy prompts.
    Deep,
    /// Adult prompts; locked behind the caller's age verification.
    Chaos,
}

impl Category {
    /// Parse a category from a user-supplied string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "light" => Some(Self::Light),
            "deep" => Some(Self::Deep),
            "chaos" => Some(Self::Chaos),
            _ => None,
        }
    }

    /// All categories in ascending intensity order.
    pub fn all() -> &'static [Self] {
        &[Self::Light, Self::Deep, Self::Chaos]
    }

    /// Whether draws from this category require a passed age gate.
    pub fn age_gated(self) -> bool {
        matches!(self, Self::Chaos)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => write!(f, "LIGHT"),
            Self::Deep => write!(f, "DEEP"),
            Self::Chaos => write!(f, "CHAOS"),
        }
    }
}

/// Structural type of a card, deciding its label prefix and source pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    /// A question the drawer answers honestly.
    Truth,
    /// An action the drawer performs.
    Dare,
    /// A group or meta prompt; sometimes phrased as two alternatives.
    Wildcard,
}

impl Kind {
    /// Parse a kind from a user-supplied string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "truth" => Some(Self::Truth),
            "dare" => Some(Self::Dare),
            "wildcard" | "wild" => Some(Self::Wildcard),
            _ => None,
        }
    }

    /// All kinds in pool order.
    pub fn all() -> &'static [Self] {
        &[Self::Truth, Self::Dare, Self::Wildcard]
    }

    /// The label prefix applied to drawn card text.
    pub fn label(self) -> &'static str {
        match self {
            Self::Truth => "TRUTH: ",
            Self::Dare => "DARE: ",
            Self::Wildcard => "WILD: ",
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Truth => write!(f, "TRUTH"),
            Self::Dare => write!(f, "DARE"),
            Self::Wildcard => write!(f, "WILDCARD"),
        }
    }
}

//! The draw engine.
//!
//! A draw is a pure state transition plus one fire-and-forget persistence
//! write: select a kind by weighted threshold, select a card uniformly from
//! the matching pool, remove it, and label the text. An exhausted pool is
//! replenished from its canonical seed as part of the same draw.

use rand::Rng;
use rand::rngs::StdRng;

use crate::card::{Category, Kind};
use crate::config::DrawConfig;
use crate::state::DeckState;
use crate::store::{DeckStore, Storage};

/// Marker substring that turns a wildcard into a two-way choice card.
///
/// Matched case-sensitively on the raw text; stock content phrases its
/// alternatives in lowercase and never triggers this.
const CHOICE_MARKER: &str = "ATAU";

/// Label prefixes recognized (and stripped) at the start of raw card text.
const KNOWN_LABELS: [&str; 4] = ["TRUTH:", "DARE:", "WILD:", "CHOICE:"];

/// The result of one draw: the labeled card text and the successor state.
#[derive(Debug, Clone)]
pub struct DrawOutcome {
    /// Labeled card text, e.g. `"TRUTH: ..."`.
    pub text: String,
    /// The kind the draw selected.
    pub kind: Kind,
    /// The deck after the draw. Never aliases the input state.
    pub state: DeckState,
}

/// Select a card kind from a uniform roll in `[0, 1)`.
///
/// Two ordered cumulative thresholds: rolls below `wildcard_chance` select
/// wildcard, then the remaining mass is split evenly with truth first. The
/// comparisons are strict, so a roll of exactly `wildcard_chance` selects
/// truth.
pub fn kind_for_roll(roll: f64, wildcard_chance: f64) -> Kind {
    if roll < wildcard_chance {
        Kind::Wildcard
    } else if roll < wildcard_chance + (1.0 - wildcard_chance) / 2.0 {
        Kind::Truth
    } else {
        Kind::Dare
    }
}

/// Strip one leading label prefix (any ASCII case) from raw card text.
///
/// Some content is authored with an embedded label; stripping it here keeps
/// the formatted output from carrying the label twice.
pub fn strip_label(text: &str) -> &str {
    for label in KNOWN_LABELS {
        if let Some(head) = text.get(..label.len())
            && head.eq_ignore_ascii_case(label)
        {
            return text[label.len()..].trim_start();
        }
    }
    text
}

/// The label prefix for a drawn card.
fn label_for(kind: Kind, text: &str) -> &'static str {
    if kind == Kind::Wildcard && text.contains(CHOICE_MARKER) {
        "CHOICE: "
    } else {
        kind.label()
    }
}

/// Draw one card from `category`, selecting the kind by weighted roll.
///
/// The successor state is persisted through `store` before returning; a
/// failed write is swallowed and the returned state stays authoritative.
pub fn draw<S: Storage>(
    state: &DeckState,
    category: Category,
    config: &DrawConfig,
    rng: &mut StdRng,
    store: &mut DeckStore<S>,
) -> DrawOutcome {
    let roll: f64 = rng.random();
    let kind = kind_for_roll(roll, config.wildcard_chance(category));
    draw_kind(state, category, kind, rng, store)
}

/// Draw one card of a fixed kind from `category`.
///
/// An empty pool is replaced by a fresh copy of its canonical seed as part
/// of the same draw, so the replacement is visible in the returned state.
/// Cards are removed without replacement: a card cannot repeat until its
/// pool has been exhausted and replenished.
pub fn draw_kind<S: Storage>(
    state: &DeckState,
    category: Category,
    kind: Kind,
    rng: &mut StdRng,
    store: &mut DeckStore<S>,
) -> DrawOutcome {
    let mut next = state.clone();

    let pool = next.pool_mut(category, kind);
    if pool.is_empty() {
        *pool = store.fresh_pool(category, kind);
    }

    let idx = rng.random_range(0..pool.len());
    let raw = pool.remove(idx);

    let card = strip_label(&raw);
    let text = format!("{}{card}", label_for(kind, card));

    store.save(&next);
    DrawOutcome {
        text,
        kind,
        state: next,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{DECK_STATE_KEY, MemoryStorage};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn test_store() -> DeckStore<MemoryStorage> {
        DeckStore::new(MemoryStorage::new())
    }

    #[test]
    fn roll_of_zero_is_wildcard() {
        assert_eq!(kind_for_roll(0.0, 0.15), Kind::Wildcard);
    }

    #[test]
    fn roll_at_the_wildcard_threshold_is_truth() {
        // Strict comparison: exactly the boundary falls into the truth band.
        assert_eq!(kind_for_roll(0.15, 0.15), Kind::Truth);
    }

    #[test]
    fn roll_just_below_the_truth_threshold_is_truth() {
        // 0.15 + 0.85 / 2 = 0.575
        assert_eq!(kind_for_roll(0.574_999, 0.15), Kind::Truth);
    }

    #[test]
    fn roll_at_the_truth_threshold_is_dare() {
        assert_eq!(kind_for_roll(0.575, 0.15), Kind::Dare);
    }

    #[test]
    fn roll_just_below_one_is_dare() {
        assert_eq!(kind_for_roll(0.999_999_9, 0.15), Kind::Dare);
    }

    #[test]
    fn zero_wildcard_chance_never_selects_wildcard() {
        assert_eq!(kind_for_roll(0.0, 0.0), Kind::Truth);
        assert_eq!(kind_for_roll(0.499, 0.0), Kind::Truth);
        assert_eq!(kind_for_roll(0.5, 0.0), Kind::Dare);
    }

    #[test]
    fn kind_fractions_converge_to_the_configured_weights() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut counts = [0u32; 3];
        let total = 100_000;
        for _ in 0..total {
            let roll: f64 = rng.random();
            match kind_for_roll(roll, 0.15) {
                Kind::Truth => counts[0] += 1,
                Kind::Dare => counts[1] += 1,
                Kind::Wildcard => counts[2] += 1,
            }
        }
        let frac = |n: u32| f64::from(n) / f64::from(total);
        assert!((frac(counts[2]) - 0.15).abs() < 0.01, "wildcard {counts:?}");
        assert!((frac(counts[0]) - 0.425).abs() < 0.01, "truth {counts:?}");
        assert!((frac(counts[1]) - 0.425).abs() < 0.01, "dare {counts:?}");
    }

    #[test]
    fn tapered_chaos_wildcards_are_rarer() {
        let mut rng = StdRng::seed_from_u64(11);
        let config = DrawConfig::tapered();
        let mut wild = 0u32;
        let total = 100_000;
        for _ in 0..total {
            let roll: f64 = rng.random();
            if kind_for_roll(roll, config.wildcard_chance(Category::Chaos)) == Kind::Wildcard {
                wild += 1;
            }
        }
        assert!((f64::from(wild) / f64::from(total) - 0.06).abs() < 0.01, "{wild}");
    }

    #[test]
    fn strip_label_removes_one_known_prefix() {
        assert_eq!(strip_label("TRUTH: siapa?"), "siapa?");
        assert_eq!(strip_label("truth:siapa?"), "siapa?");
        assert_eq!(strip_label("Dare:   lakukan"), "lakukan");
        assert_eq!(strip_label("WILD: tunjuk"), "tunjuk");
        assert_eq!(strip_label("choice: pilih"), "pilih");
    }

    #[test]
    fn strip_label_leaves_plain_text_alone() {
        assert_eq!(strip_label("Kapan terakhir mandi?"), "Kapan terakhir mandi?");
        assert_eq!(strip_label(""), "");
        assert_eq!(strip_label("TRUTHFUL answer"), "TRUTHFUL answer");
    }

    #[test]
    fn strip_label_is_multibyte_safe() {
        assert_eq!(strip_label("émigré"), "émigré");
        assert_eq!(strip_label("¡hola!"), "¡hola!");
    }

    #[test]
    fn forced_truth_draw_is_labeled_truth() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut store = test_store();
        let deck = DeckState::fresh();
        let outcome = draw_kind(&deck, Category::Light, Kind::Truth, &mut rng, &mut store);
        assert!(outcome.text.starts_with("TRUTH: "), "{}", outcome.text);
        assert_eq!(outcome.kind, Kind::Truth);
    }

    #[test]
    fn wildcard_with_choice_marker_is_labeled_choice() {
        let mut deck = DeckState::fresh();
        *deck.pool_mut(Category::Light, Kind::Wildcard) =
            vec!["Makan cabai ATAU push up 20x.".to_string()];

        let mut rng = StdRng::seed_from_u64(1);
        let mut store = test_store();
        let outcome = draw_kind(&deck, Category::Light, Kind::Wildcard, &mut rng, &mut store);
        assert_eq!(outcome.text, "CHOICE: Makan cabai ATAU push up 20x.");
    }

    #[test]
    fn lowercase_marker_stays_a_plain_wildcard() {
        let mut deck = DeckState::fresh();
        *deck.pool_mut(Category::Light, Kind::Wildcard) =
            vec!["Makan cabai atau push up 20x.".to_string()];

        let mut rng = StdRng::seed_from_u64(1);
        let mut store = test_store();
        let outcome = draw_kind(&deck, Category::Light, Kind::Wildcard, &mut rng, &mut store);
        assert!(outcome.text.starts_with("WILD: "), "{}", outcome.text);
    }

    #[test]
    fn choice_marker_on_a_truth_keeps_the_truth_label() {
        let mut deck = DeckState::fresh();
        *deck.pool_mut(Category::Deep, Kind::Truth) = vec!["Ini ATAU itu?".to_string()];

        let mut rng = StdRng::seed_from_u64(1);
        let mut store = test_store();
        let outcome = draw_kind(&deck, Category::Deep, Kind::Truth, &mut rng, &mut store);
        assert_eq!(outcome.text, "TRUTH: Ini ATAU itu?");
    }

    #[test]
    fn embedded_label_is_never_doubled() {
        let mut deck = DeckState::fresh();
        *deck.pool_mut(Category::Deep, Kind::Truth) = vec!["truth: sudah berlabel".to_string()];

        let mut rng = StdRng::seed_from_u64(1);
        let mut store = test_store();
        let outcome = draw_kind(&deck, Category::Deep, Kind::Truth, &mut rng, &mut store);
        assert_eq!(outcome.text, "TRUTH: sudah berlabel");
    }

    #[test]
    fn draw_does_not_mutate_the_input_state() {
        let deck = DeckState::fresh();
        let before = deck.clone();
        let mut rng = StdRng::seed_from_u64(5);
        let mut store = test_store();
        let outcome = draw(&deck, Category::Deep, &DrawConfig::default(), &mut rng, &mut store);
        assert_eq!(deck, before);
        assert_eq!(outcome.state.total_remaining(), deck.total_remaining() - 1);
    }

    #[test]
    fn draw_persists_the_successor_state() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut store = test_store();
        let deck = DeckState::fresh();
        let outcome = draw(&deck, Category::Light, &DrawConfig::default(), &mut rng, &mut store);
        assert_eq!(store.load(), outcome.state);
    }

    #[test]
    fn no_repeat_before_the_pool_reshuffles() {
        let pool_size = crate::tables::seed(Category::Light, Kind::Truth).len();
        let mut rng = StdRng::seed_from_u64(42);
        let mut store = test_store();
        let mut deck = DeckState::fresh();
        let mut seen = HashSet::new();

        // Persistence applies between draws: rehydrate from the store each
        // time, the way a sequence of independent draws would.
        for i in 0..pool_size {
            let outcome = draw_kind(&deck, Category::Light, Kind::Truth, &mut rng, &mut store);
            assert!(seen.insert(outcome.text.clone()), "repeat at draw {i}");
            deck = store.load();
        }
        assert_eq!(deck.remaining(Category::Light, Kind::Truth), 0);

        // The next draw silently reshuffles and may repeat.
        let outcome = draw_kind(&deck, Category::Light, Kind::Truth, &mut rng, &mut store);
        assert!(seen.contains(&outcome.text));
        assert_eq!(
            outcome.state.remaining(Category::Light, Kind::Truth),
            pool_size - 1
        );
    }

    #[test]
    fn reshuffle_only_touches_the_exhausted_pool() {
        let mut deck = DeckState::fresh();
        deck.pool_mut(Category::Chaos, Kind::Dare).clear();
        deck.pool_mut(Category::Chaos, Kind::Truth).truncate(4);

        let mut rng = StdRng::seed_from_u64(3);
        let mut store = test_store();
        let outcome = draw_kind(&deck, Category::Chaos, Kind::Dare, &mut rng, &mut store);

        assert_eq!(outcome.state.remaining(Category::Chaos, Kind::Dare), 27);
        assert_eq!(outcome.state.remaining(Category::Chaos, Kind::Truth), 4);
        assert_eq!(outcome.state.remaining(Category::Light, Kind::Truth), 28);
    }

    #[test]
    fn draws_are_deterministic_with_a_seed() {
        let deck = DeckState::fresh();
        let config = DrawConfig::default();

        let mut texts = Vec::new();
        for _ in 0..2 {
            let mut rng = StdRng::seed_from_u64(1234);
            let mut store = test_store();
            let mut state = deck.clone();
            let mut run = Vec::new();
            for _ in 0..20 {
                let outcome = draw(&state, Category::Deep, &config, &mut rng, &mut store);
                run.push(outcome.text);
                state = outcome.state;
            }
            texts.push(run);
        }
        assert_eq!(texts[0], texts[1]);
    }

    #[test]
    fn a_draw_still_succeeds_when_the_snapshot_is_corrupt() {
        let mut storage = MemoryStorage::new();
        storage.set(DECK_STATE_KEY, "{{{");
        let mut store = DeckStore::new(storage);
        let deck = store.load();
        assert_eq!(deck, DeckState::fresh());

        let mut rng = StdRng::seed_from_u64(2);
        let outcome = draw(&deck, Category::Light, &DrawConfig::default(), &mut rng, &mut store);
        assert_eq!(outcome.state.total_remaining(), 9 * 28 - 1);
        // The bad snapshot has been overwritten by a good one.
        assert_eq!(store.load(), outcome.state);
    }

    proptest! {
        #[test]
        fn strip_label_never_panics_and_never_grows(s in ".*") {
            let stripped = strip_label(&s);
            prop_assert!(stripped.len() <= s.len());
        }

        #[test]
        fn kind_partition_is_total(roll in 0.0f64..1.0, chance in 0.0f64..=1.0) {
            let kind = kind_for_roll(roll, chance);
            if roll < chance {
                prop_assert_eq!(kind, Kind::Wildcard);
            } else {
                prop_assert!(kind == Kind::Truth || kind == Kind::Dare);
            }
        }

        #[test]
        fn formatted_text_always_starts_with_one_label(seed in 0u64..1000) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut store = DeckStore::new(MemoryStorage::new());
            let deck = DeckState::fresh();
            let outcome = draw(&deck, Category::Chaos, &DrawConfig::default(), &mut rng, &mut store);
            let labeled = ["TRUTH: ", "DARE: ", "WILD: ", "CHOICE: "]
                .iter()
                .any(|label| outcome.text.starts_with(label));
            prop_assert!(labeled, "{}", outcome.text);
        }
    }
}

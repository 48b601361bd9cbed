//! Interactive fate deck session.
//!
//! `FateSession` owns the deck state, its store, and the RNG, and processes
//! text commands the way the chat surface's fate menu would: pick a
//! category, draw a card, pass the labeled text onward. The deck hydrates
//! from the most recent snapshot at construction and persists after every
//! draw.

use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;

use oracle_deck::{
    Category, DeckError, DeckState, DeckStore, Kind, Storage, draw, draw_kind,
};

use crate::config::SessionConfig;
use crate::error::{SessionError, SessionResult};
use crate::history::{History, HistoryEntry};

/// An interactive fate deck session.
pub struct FateSession<S: Storage> {
    deck: DeckState,
    store: DeckStore<S>,
    config: SessionConfig,
    rng: StdRng,
    history: History,
}

impl<S: Storage> FateSession<S> {
    /// Start a session over `storage`, hydrating the deck from the most
    /// recent snapshot if one exists.
    pub fn new(storage: S, config: SessionConfig) -> Self {
        let store = DeckStore::new(storage);
        let deck = store.load();
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            deck,
            store,
            config,
            rng,
            history: History::new(),
        }
    }

    /// The current deck state.
    pub fn deck(&self) -> &DeckState {
        &self.deck
    }

    /// The deck store backing this session.
    pub fn store(&self) -> &DeckStore<S> {
        &self.store
    }

    /// The draw history of this session.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The invoker name recorded with draws.
    pub fn invoker(&self) -> &str {
        &self.config.invoker
    }

    /// Whether CHAOS draws are unlocked.
    pub fn chaos_unlocked(&self) -> bool {
        self.config.adult
    }

    /// Process one line of input and return the response text.
    pub fn process(&mut self, input: &str) -> SessionResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
        let cmd = parts[0].to_lowercase();
        let rest = parts.get(1).map(|s| s.trim()).unwrap_or("");

        match cmd.as_str() {
            "draw" => self.do_draw(rest),
            "status" => self.do_status(),
            "reset" => self.do_reset(),
            "history" => self.do_history(),
            "export" => self.do_export(rest),
            "help" => Ok(help_text().to_string()),
            "quit" | "q" => Ok("The oracle falls silent.".to_string()),
            other => Err(SessionError::UnknownCommand(other.to_string())),
        }
    }

    /// Draw one card, honoring the age gate.
    ///
    /// `kind` forces the card kind; `None` selects it by weighted roll.
    pub fn draw_card(&mut self, category: Category, kind: Option<Kind>) -> SessionResult<String> {
        if category.age_gated() && !self.config.adult {
            return Err(SessionError::AgeRestricted);
        }

        let outcome = match kind {
            Some(kind) => draw_kind(&self.deck, category, kind, &mut self.rng, &mut self.store),
            None => draw(
                &self.deck,
                category,
                &self.config.draw,
                &mut self.rng,
                &mut self.store,
            ),
        };
        self.deck = outcome.state;

        self.history.append(HistoryEntry {
            category,
            kind: outcome.kind,
            text: outcome.text.clone(),
            invoker: self.config.invoker.clone(),
            timestamp: Utc::now(),
        });

        Ok(outcome.text)
    }

    fn do_draw(&mut self, rest: &str) -> SessionResult<String> {
        if rest.is_empty() {
            return Err(SessionError::InvalidChoice(
                "usage: draw <light|deep|chaos> [truth|dare|wildcard]".to_string(),
            ));
        }

        let mut words = rest.split_whitespace();
        let category_token = words.next().unwrap_or("");
        let category = Category::parse(category_token)
            .ok_or_else(|| DeckError::UnknownCategory(category_token.to_string()))?;
        let kind = match words.next() {
            Some(token) => {
                Some(Kind::parse(token).ok_or_else(|| DeckError::UnknownKind(token.to_string()))?)
            }
            None => None,
        };

        self.draw_card(category, kind)
    }

    fn do_status(&self) -> SessionResult<String> {
        let mut out = format!("Invoker: {}\n", self.config.invoker);
        for category in Category::all() {
            let locked = category.age_gated() && !self.config.adult;
            out.push_str(&format!(
                "{}{}: {} truths, {} dares, {} wildcards\n",
                category,
                if locked { " (locked)" } else { "" },
                self.deck.remaining(*category, Kind::Truth),
                self.deck.remaining(*category, Kind::Dare),
                self.deck.remaining(*category, Kind::Wildcard),
            ));
        }
        out.push_str(&format!("Draws this session: {}", self.history.len()));
        Ok(out)
    }

    fn do_reset(&mut self) -> SessionResult<String> {
        self.deck = self.store.reset();
        Ok(format!(
            "The deck re-forms: {} cards ready.",
            self.deck.total_remaining()
        ))
    }

    fn do_history(&self) -> SessionResult<String> {
        if self.history.is_empty() {
            return Ok("No cards drawn yet.".to_string());
        }
        let entries = self.history.entries();
        let start = entries.len().saturating_sub(10);
        let mut out = format!(
            "History ({} draws, showing last {}):\n",
            entries.len(),
            entries.len() - start
        );
        for entry in &entries[start..] {
            out.push_str(&format!("  [{}] {}\n", entry.category, entry.text));
        }
        Ok(out.trim_end().to_string())
    }

    fn do_export(&self, format: &str) -> SessionResult<String> {
        match format.to_lowercase().as_str() {
            "markdown" | "md" | "" => Ok(self.history.export_markdown()),
            "text" | "txt" => Ok(self.history.export_text()),
            other => Err(SessionError::InvalidChoice(format!(
                "unknown format '{other}', use: markdown, text"
            ))),
        }
    }
}

fn help_text() -> &'static str {
    "\
Fate Deck Commands:
  draw <light|deep|chaos>       Draw one fate card
  draw <category> <kind>        Force the kind (truth, dare, wildcard)
  status                        Remaining cards per pool
  reset                         Restore the full deck
  history                       Show recent draws
  export [markdown|text]        Export the full draw history
  help                          Show this help
  quit                          Exit

CHAOS stays locked until the session passed the age gate."
}

#[cfg(test)]
mod tests {
    use super::*;
    use oracle_deck::MemoryStorage;

    fn test_session() -> FateSession<MemoryStorage> {
        FateSession::new(MemoryStorage::new(), SessionConfig::default().with_seed(42))
    }

    fn adult_session() -> FateSession<MemoryStorage> {
        FateSession::new(
            MemoryStorage::new(),
            SessionConfig::default().with_seed(42).with_adult(true),
        )
    }

    #[test]
    fn create_session_hydrates_fresh() {
        let session = test_session();
        assert_eq!(session.deck().total_remaining(), 9 * 28);
        assert!(session.history().is_empty());
        assert_eq!(session.invoker(), "guest");
        assert!(!session.chaos_unlocked());
    }

    #[test]
    fn draw_depletes_and_records() {
        let mut session = test_session();
        let output = session.process("draw light").unwrap();
        assert!(!output.is_empty());
        assert_eq!(session.deck().total_remaining(), 9 * 28 - 1);
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history().entries()[0].invoker, "guest");
    }

    #[test]
    fn draw_persists_through_the_store() {
        let mut session = test_session();
        session.process("draw deep").unwrap();
        assert_eq!(session.store().load(), *session.deck());
    }

    #[test]
    fn forced_kind_draw() {
        let mut session = test_session();
        let output = session.process("draw light truth").unwrap();
        assert!(output.starts_with("TRUTH: "), "{output}");
        assert_eq!(
            session.deck().remaining(Category::Light, Kind::Truth),
            27
        );
    }

    #[test]
    fn chaos_is_locked_by_default() {
        let mut session = test_session();
        let result = session.process("draw chaos");
        assert!(matches!(result, Err(SessionError::AgeRestricted)));
        assert_eq!(session.deck().total_remaining(), 9 * 28);
    }

    #[test]
    fn chaos_unlocks_for_adults() {
        let mut session = adult_session();
        let output = session.process("draw chaos").unwrap();
        assert!(!output.is_empty());
        assert_eq!(session.deck().category_remaining(Category::Chaos), 3 * 28 - 1);
    }

    #[test]
    fn unknown_category_is_an_error() {
        let mut session = test_session();
        let result = session.process("draw nebula");
        assert!(matches!(
            result,
            Err(SessionError::Deck(DeckError::UnknownCategory(_)))
        ));
    }

    #[test]
    fn unknown_kind_is_an_error() {
        let mut session = test_session();
        let result = session.process("draw light joker");
        assert!(matches!(
            result,
            Err(SessionError::Deck(DeckError::UnknownKind(_)))
        ));
    }

    #[test]
    fn draw_without_arguments_shows_usage() {
        let mut session = test_session();
        let result = session.process("draw");
        assert!(matches!(result, Err(SessionError::InvalidChoice(_))));
    }

    #[test]
    fn unknown_command_is_an_error() {
        let mut session = test_session();
        let result = session.process("summon");
        assert!(matches!(result, Err(SessionError::UnknownCommand(_))));
    }

    #[test]
    fn status_reports_pools_and_lock() {
        let mut session = test_session();
        session.process("draw light truth").unwrap();
        let status = session.process("status").unwrap();
        assert!(status.contains("Invoker: guest"));
        assert!(status.contains("LIGHT: 27 truths, 28 dares, 28 wildcards"));
        assert!(status.contains("CHAOS (locked)"));
        assert!(status.contains("Draws this session: 1"));
    }

    #[test]
    fn status_shows_chaos_unlocked_for_adults() {
        let mut session = adult_session();
        let status = session.process("status").unwrap();
        assert!(status.contains("CHAOS: 28 truths"));
        assert!(!status.contains("(locked)"));
    }

    #[test]
    fn reset_restores_the_full_deck() {
        let mut session = test_session();
        for _ in 0..5 {
            session.process("draw light").unwrap();
        }
        assert_eq!(session.deck().total_remaining(), 9 * 28 - 5);

        let output = session.process("reset").unwrap();
        assert!(output.contains("252"));
        assert_eq!(session.deck().total_remaining(), 9 * 28);
        assert_eq!(session.store().load(), DeckState::fresh());
    }

    #[test]
    fn history_and_export() {
        let mut session = test_session();
        assert_eq!(session.process("history").unwrap(), "No cards drawn yet.");

        session.process("draw deep truth").unwrap();
        let history = session.process("history").unwrap();
        assert!(history.contains("[DEEP] TRUTH: "));

        let md = session.process("export markdown").unwrap();
        assert!(md.contains("# Fate Draw History"));
        let txt = session.process("export text").unwrap();
        assert!(txt.contains("Fate Draw History"));

        let result = session.process("export yaml");
        assert!(matches!(result, Err(SessionError::InvalidChoice(_))));
    }

    #[test]
    fn history_shows_at_most_ten() {
        let mut session = test_session();
        for _ in 0..12 {
            session.process("draw light").unwrap();
        }
        let history = session.process("history").unwrap();
        assert!(history.contains("12 draws, showing last 10"));
    }

    #[test]
    fn empty_input_is_quietly_ignored() {
        let mut session = test_session();
        assert_eq!(session.process("   ").unwrap(), "");
    }

    #[test]
    fn quit_and_help() {
        let mut session = test_session();
        assert_eq!(session.process("quit").unwrap(), "The oracle falls silent.");
        let help = session.process("help").unwrap();
        assert!(help.contains("draw <light|deep|chaos>"));
    }

    #[test]
    fn seeded_sessions_draw_identically() {
        let mut first = test_session();
        let mut second = test_session();
        for _ in 0..10 {
            assert_eq!(
                first.process("draw deep").unwrap(),
                second.process("draw deep").unwrap()
            );
        }
    }

    #[test]
    fn invoker_is_recorded_on_entries() {
        let mut session = FateSession::new(
            MemoryStorage::new(),
            SessionConfig::default().with_seed(1).with_invoker("Raka"),
        );
        session.process("draw light").unwrap();
        assert_eq!(session.history().entries()[0].invoker, "Raka");
    }
}

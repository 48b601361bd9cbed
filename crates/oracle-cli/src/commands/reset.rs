use std::path::Path;

use oracle_deck::DeckStore;

pub fn run(state_dir: &Path) -> Result<(), String> {
    let mut store = DeckStore::new(super::storage(state_dir));
    let deck = store.reset();
    println!("Deck reset: {} cards ready.", deck.total_remaining());
    Ok(())
}

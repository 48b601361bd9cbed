use std::path::Path;

use comfy_table::{ContentArrangement, Table};

use oracle_deck::{Category, DeckStore, Kind};

pub fn run(state_dir: &Path) -> Result<(), String> {
    let store = DeckStore::new(super::storage(state_dir));
    let deck = store.load();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Category", "Truths", "Dares", "Wildcards"]);

    for category in Category::all() {
        table.add_row(vec![
            category.to_string(),
            deck.remaining(*category, Kind::Truth).to_string(),
            deck.remaining(*category, Kind::Dare).to_string(),
            deck.remaining(*category, Kind::Wildcard).to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} cards remaining", deck.total_remaining());

    Ok(())
}

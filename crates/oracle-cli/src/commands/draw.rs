use std::path::Path;

use colored::Colorize;

use oracle_session::FateSession;

pub fn run(
    state_dir: &Path,
    category: &str,
    name: &str,
    seed: Option<u64>,
    adult: bool,
    tapered: bool,
) -> Result<(), String> {
    let category = super::parse_category(category)?;
    let config = super::session_config(name, seed, adult, tapered);
    let mut session = FateSession::new(super::storage(state_dir), config);

    let text = session
        .draw_card(category, None)
        .map_err(|e| e.to_string())?;

    println!("{}", text.bold());
    println!(
        "  invoked by {name} | {} cards left in {category}",
        session.deck().category_remaining(category)
    );

    Ok(())
}

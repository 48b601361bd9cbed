use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use oracle_session::FateSession;

pub fn run(
    state_dir: &Path,
    name: &str,
    seed: Option<u64>,
    adult: bool,
    tapered: bool,
) -> Result<(), String> {
    let config = super::session_config(name, seed, adult, tapered);
    let mut session = FateSession::new(super::storage(state_dir), config);

    println!("  {} the Oracle", "Consulting".bold());
    println!(
        "  Invoker: {name} | Chaos: {}",
        if adult { "unlocked" } else { "locked" }
    );
    println!("  Type 'help' for commands, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match session.process(input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
                if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
                    break;
                }
            }
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
            }
        }
    }

    Ok(())
}

use colored::*;
use console::Term;
use tracing::warn;

use crate::terminal::colors;

/// Asks on the terminal for an index into a list of `len` entries.
pub fn prompt_index(len: usize) -> anyhow::Result<usize> {
    anyhow::ensure!(len > 0, "nothing to choose from");

    let term = Term::stderr();
    loop {
        let prompt: String = format!(
            "{} Select an adapter [0-{}]: ",
            ">".color(colors::SEPARATOR),
            len - 1
        );
        term.write_str(&prompt)?;
        let line: String = term.read_line()?;

        match parse_selection(&line, len) {
            Some(idx) => return Ok(idx),
            None => warn!("'{}' is not a valid selection", line.trim()),
        }
    }
}

pub fn parse_selection(input: &str, len: usize) -> Option<usize> {
    input.trim().parse::<usize>().ok().filter(|idx| *idx < len)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

//! Interactive game command
//!
//! Wires the score table, dictionary, and stdin console into a session.

use crate::dictionary::Dictionary;
use crate::game::{GameConfig, RandomCounts, Session, SessionTotals, StdinConsole};
use crate::output::display;

/// Run the interactive game loop against the given dictionary
///
/// # Errors
///
/// Returns an error only when the console fails (e.g. stdin is closed);
/// invalid words and menu choices are recovered inside the session.
pub fn run_play(dictionary: &Dictionary, config: GameConfig) -> Result<SessionTotals, String> {
    display::print_game_banner();

    let counts = RandomCounts::new(config.seed);
    let mut session = Session::new(dictionary, StdinConsole, counts, config);

    session.run()
}

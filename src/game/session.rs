//! Game session loop
//!
//! Menu-driven loop over at most `rounds` plays. Each round draws a
//! required letter count, races a blocking read against the advisory
//! countdown, judges the word, and folds the result into the totals.

use crate::core::ScoreTable;
use crate::dictionary::Dictionary;
use crate::game::round::{RoundResult, judge_word};
use crate::game::timer::RoundTimer;
use crate::output::display;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::{self, Write};
use std::thread;
use std::time::{Duration, Instant};

/// Session knobs
///
/// The defaults reproduce the classic game: 10 rounds, 15 seconds per
/// round, one-second countdown ticks.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Maximum number of played rounds
    pub rounds: u32,
    /// Per-round time limit in whole seconds
    pub time_limit_secs: u64,
    /// Countdown tick duration
    pub tick: Duration,
    /// Pause after an invalid menu choice
    pub pause: Duration,
    /// Seed for the required-letter-count draw
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rounds: 10,
            time_limit_secs: 15,
            tick: Duration::from_secs(1),
            pause: Duration::from_secs(1),
            seed: None,
        }
    }
}

/// Accumulated results for one session
///
/// Mutated only by the session loop, reported once at exit.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SessionTotals {
    pub total_score: u32,
    pub total_time: f64,
    pub rounds_played: u32,
}

impl SessionTotals {
    /// Fold one round into the totals
    pub fn add(&mut self, round: &RoundResult) {
        self.total_score += round.score;
        self.total_time += round.elapsed;
        self.rounds_played += 1;
    }
}

/// Line-based console seam
///
/// The session only ever needs "print a prompt, read one line", so tests
/// can script the whole interaction.
pub trait Console {
    /// Print the prompt and read one trimmed line
    ///
    /// # Errors
    /// Returns an error when the underlying input is closed or unreadable.
    fn read_line(&mut self, prompt: &str) -> Result<String, String>;
}

/// Console backed by stdin/stdout
pub struct StdinConsole;

impl Console for StdinConsole {
    fn read_line(&mut self, prompt: &str) -> Result<String, String> {
        print!("{prompt}");
        io::stdout().flush().map_err(|e| e.to_string())?;

        let mut input = String::new();
        let bytes = io::stdin()
            .read_line(&mut input)
            .map_err(|e| e.to_string())?;

        if bytes == 0 {
            return Err("input closed".to_string());
        }

        Ok(input.trim().to_string())
    }
}

/// Source of the per-round required letter count
///
/// Swappable so tests can inject deterministic sequences.
pub trait CountSource {
    fn next_count(&mut self) -> usize;
}

/// Uniform draw from 0..=10, optionally seeded
pub struct RandomCounts {
    rng: StdRng,
}

impl RandomCounts {
    /// Seeded when `seed` is given, OS entropy otherwise
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self { rng }
    }
}

impl CountSource for RandomCounts {
    fn next_count(&mut self) -> usize {
        self.rng.random_range(0..=10)
    }
}

/// One game session over a shared dictionary
pub struct Session<'a, C: Console, R: CountSource> {
    config: GameConfig,
    table: ScoreTable,
    dictionary: &'a Dictionary,
    console: C,
    counts: R,
}

impl<'a, C: Console, R: CountSource> Session<'a, C, R> {
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, console: C, counts: R, config: GameConfig) -> Self {
        Self {
            config,
            table: ScoreTable::new(),
            dictionary,
            console,
            counts,
        }
    }

    /// Run the menu loop until the player exits or the round cap is reached
    ///
    /// An invalid menu choice re-prompts without charging a round; a played
    /// round always counts, valid or not.
    ///
    /// # Errors
    /// Returns an error only when the console fails; every game-level
    /// failure is recovered within the round.
    pub fn run(&mut self) -> Result<SessionTotals, String> {
        let mut totals = SessionTotals::default();

        while totals.rounds_played < self.config.rounds {
            let prompt = format!(
                "Round: {}\nPlease select:\n1. Play\n2. Exit\nSelect: ",
                totals.rounds_played + 1
            );
            let choice = self.console.read_line(&prompt)?;

            match choice.trim() {
                "1" => {
                    let result = self.play_round()?;
                    totals.add(&result);
                    display::print_round_divider();
                }
                "2" => break,
                _ => {
                    display::print_invalid_choice();
                    thread::sleep(self.config.pause);
                }
            }
        }

        display::print_session_summary(&totals);
        Ok(totals)
    }

    fn play_round(&mut self) -> Result<RoundResult, String> {
        let required = self.counts.next_count();
        let limit = self.config.time_limit_secs;

        let timer = RoundTimer::start_with_tick(limit, self.config.tick);
        let started = Instant::now();

        let input = self.console.read_line(&format!(
            "Please input a word with {required} letters in {limit} seconds:\n"
        ));

        // Reap the countdown before judging, even if the read failed
        timer.cancel();
        let elapsed = started.elapsed().as_secs_f64();
        timer.join();

        let input = input?;

        let result = match judge_word(&input, required, &self.table, self.dictionary) {
            Ok(score) => RoundResult {
                score,
                elapsed: elapsed.min(limit as f64),
                valid: true,
            },
            Err(err) => {
                display::print_round_error(&err);
                RoundResult {
                    score: 0,
                    elapsed: limit as f64,
                    valid: false,
                }
            }
        };

        display::print_round_result(&result);
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::loader::from_words;
    use std::collections::VecDeque;

    struct ScriptedConsole {
        lines: VecDeque<String>,
    }

    impl ScriptedConsole {
        fn new(lines: &[&str]) -> Self {
            Self {
                lines: lines.iter().map(|&line| line.to_string()).collect(),
            }
        }
    }

    impl Console for ScriptedConsole {
        fn read_line(&mut self, _prompt: &str) -> Result<String, String> {
            self.lines
                .pop_front()
                .ok_or_else(|| "script exhausted".to_string())
        }
    }

    struct FixedCounts {
        counts: VecDeque<usize>,
    }

    impl FixedCounts {
        fn new(counts: &[usize]) -> Self {
            Self {
                counts: counts.iter().copied().collect(),
            }
        }
    }

    impl CountSource for FixedCounts {
        fn next_count(&mut self) -> usize {
            self.counts.pop_front().unwrap_or(3)
        }
    }

    fn test_config() -> GameConfig {
        GameConfig {
            rounds: 10,
            time_limit_secs: 15,
            tick: Duration::from_millis(1),
            pause: Duration::ZERO,
            seed: None,
        }
    }

    fn test_dictionary() -> Dictionary {
        from_words(["cat", "apple", "cabbage"])
    }

    fn run_session(lines: &[&str], counts: &[usize]) -> SessionTotals {
        let dictionary = test_dictionary();
        let console = ScriptedConsole::new(lines);
        let counts = FixedCounts::new(counts);

        Session::new(&dictionary, console, counts, test_config())
            .run()
            .unwrap()
    }

    #[test]
    fn exit_immediately_plays_no_rounds() {
        let totals = run_session(&["2"], &[]);

        assert_eq!(totals.rounds_played, 0);
        assert_eq!(totals.total_score, 0);
        assert_eq!(totals.total_time, 0.0);
    }

    #[test]
    fn invalid_menu_choice_charges_nothing() {
        let totals = run_session(&["7", "banana", "2"], &[]);

        assert_eq!(totals.rounds_played, 0);
        assert_eq!(totals.total_time, 0.0);
    }

    #[test]
    fn menu_choice_is_trimmed() {
        let totals = run_session(&["  1  ", "cat", "2"], &[3]);

        assert_eq!(totals.rounds_played, 1);
        assert_eq!(totals.total_score, 5);
    }

    #[test]
    fn valid_round_scores_the_word() {
        let totals = run_session(&["1", "cat", "2"], &[3]);

        // c=3 a=1 t=1
        assert_eq!(totals.total_score, 5);
        assert_eq!(totals.rounds_played, 1);
        assert!(totals.total_time <= 15.0);
    }

    #[test]
    fn round_with_no_letters_charges_full_limit() {
        let totals = run_session(&["1", "12345", "2"], &[3]);

        assert_eq!(totals.rounds_played, 1);
        assert_eq!(totals.total_score, 0);
        assert_eq!(totals.total_time, 15.0);
    }

    #[test]
    fn length_mismatch_scores_zero_despite_dictionary_hit() {
        let totals = run_session(&["1", "cat", "2"], &[4]);

        assert_eq!(totals.total_score, 0);
        assert_eq!(totals.total_time, 15.0);
    }

    #[test]
    fn unknown_word_scores_zero() {
        let totals = run_session(&["1", "zzz", "2"], &[3]);

        assert_eq!(totals.total_score, 0);
        assert_eq!(totals.total_time, 15.0);
    }

    #[test]
    fn session_stops_at_round_cap() {
        // 11 play attempts scripted; the cap must stop the loop at 10
        // without reading the surplus pair.
        let mut lines = Vec::new();
        for _ in 0..11 {
            lines.push("1");
            lines.push("12345");
        }

        let totals = run_session(&lines, &[]);

        assert_eq!(totals.rounds_played, 10);
        assert_eq!(totals.total_score, 0);
        assert_eq!(totals.total_time, 150.0);
    }

    #[test]
    fn totals_accumulate_across_rounds() {
        let totals = run_session(&["1", "cat", "1", "cabbage", "2"], &[3, 7]);

        assert_eq!(totals.rounds_played, 2);
        assert_eq!(totals.total_score, 19);
    }

    #[test]
    fn random_counts_stay_in_range() {
        let mut counts = RandomCounts::new(Some(42));

        for _ in 0..200 {
            assert!(counts.next_count() <= 10);
        }
    }

    #[test]
    fn seeded_counts_are_reproducible() {
        let mut first = RandomCounts::new(Some(7));
        let mut second = RandomCounts::new(Some(7));

        for _ in 0..50 {
            assert_eq!(first.next_count(), second.next_count());
        }
    }

    #[test]
    fn totals_add_folds_one_round() {
        let mut totals = SessionTotals::default();

        totals.add(&RoundResult {
            score: 14,
            elapsed: 3.5,
            valid: true,
        });

        assert_eq!(totals.total_score, 14);
        assert_eq!(totals.total_time, 3.5);
        assert_eq!(totals.rounds_played, 1);
    }
}

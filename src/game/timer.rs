//! Round countdown timer
//!
//! A background thread counts down once per tick and prints the remaining
//! time. Cancellation is cooperative: the main thread sets a shared flag
//! once, the timer thread polls it every tick. The time's-up notice is
//! advisory only and never interrupts the blocking input read.

use crate::output::formatters::format_clock;
use std::io::{self, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Handle to one round's countdown thread
///
/// Lifecycle: created at round start, cancelled when input is received, or
/// expires naturally after its deadline. Either path is terminal; `join`
/// must always be called so the thread is never leaked.
pub struct RoundTimer {
    cancelled: Arc<AtomicBool>,
    expired: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

impl RoundTimer {
    /// Start a countdown of the given number of seconds, ticking once per second
    #[must_use]
    pub fn start(seconds: u64) -> Self {
        Self::start_with_tick(seconds, Duration::from_secs(1))
    }

    /// Start a countdown with an explicit tick duration
    ///
    /// The countdown still decrements one "second" per tick, so tests can
    /// drive the same logic with millisecond ticks.
    #[must_use]
    pub fn start_with_tick(seconds: u64, tick: Duration) -> Self {
        let cancelled = Arc::new(AtomicBool::new(false));
        let expired = Arc::new(AtomicBool::new(false));

        let cancel_flag = Arc::clone(&cancelled);
        let expired_flag = Arc::clone(&expired);

        let handle = thread::spawn(move || {
            let mut remaining = seconds;

            while remaining > 0 && !cancel_flag.load(Ordering::Relaxed) {
                print!("{}\r", format_clock(remaining));
                let _ = io::stdout().flush();

                thread::sleep(tick);
                remaining -= 1;
            }

            if !cancel_flag.load(Ordering::Relaxed) {
                expired_flag.store(true, Ordering::Relaxed);
                println!("\nTime's up!");
            }
        });

        Self {
            cancelled,
            expired,
            handle,
        }
    }

    /// Signal the countdown to stop
    ///
    /// The flag is polled once per tick, so the thread terminates at most
    /// one tick after cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Wait for the countdown thread to finish
    ///
    /// Returns `true` if the countdown ran to zero without being cancelled.
    pub fn join(self) -> bool {
        let _ = self.handle.join();
        self.expired.load(Ordering::Relaxed)
    }
}

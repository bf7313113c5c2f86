//! Request pacing for search-as-you-type.
//!
//! [`Debouncer`] bounds the request rate: each keystroke pokes the timer
//! and the request fires only once the delay has elapsed without another
//! poke. [`SearchSession`] closes the stale-response race that a plain
//! debounce leaves open — requests are not aborted when superseded, so a
//! slow response can arrive after a newer one; each request takes a
//! generation number and a response is applied only if its generation is
//! still current.

use std::time::{Duration, Instant};

use crate::config;

// ---------------------------------------------------------------------------
// Debouncer
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    last_poke: Option<Instant>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(config::DEFAULT_DEBOUNCE)
    }
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            last_poke: None,
        }
    }

    /// Reset the timer; called on every keystroke.
    pub fn poke(&mut self) {
        self.last_poke = Some(Instant::now());
    }

    /// True once the delay has elapsed since the last poke. Consumes the
    /// pending state so the same poke fires at most once.
    pub fn ready(&mut self) -> bool {
        match self.last_poke {
            Some(at) if at.elapsed() >= self.delay => {
                self.last_poke = None;
                true
            }
            _ => false,
        }
    }

    /// A poke has happened and has not fired yet.
    pub fn pending(&self) -> bool {
        self.last_poke.is_some()
    }
}

// ---------------------------------------------------------------------------
// SearchSession
// ---------------------------------------------------------------------------

/// Monotonic generation number identifying one issued request.
pub type Generation = u64;

#[derive(Debug, Default)]
pub struct SearchSession {
    current: Generation,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding all earlier ones.
    pub fn begin(&mut self) -> Generation {
        self.current += 1;
        self.current
    }

    /// Whether a response for `generation` may be applied. A superseded
    /// response must be discarded, never merged.
    pub fn accept(&self, generation: Generation) -> bool {
        generation == self.current
    }
}

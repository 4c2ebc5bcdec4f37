//! Consecutive engine: N identical samples in a row.
//!
//! Keeps the last 8 raw samples in a shift register and changes state only once the
//! newest `consec_n` samples all agree with the opposite level. Latency is exactly
//! `consec_n` ticks for a clean signal.
//!
//! Memory: 1 byte.

use crate::bits::{consecutive_mask, level_byte, shift_in};
use crate::config::Config;
use crate::engine::Engine;
use crate::types::{Edge, EngineKind};

/// Shift register state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Consecutive {
    history: u8,
}

impl Consecutive {
    /// Creates an engine with an all-released history.
    pub const fn new() -> Self {
        Self { history: 0 }
    }
}

/// Transition implied by the newest `consec_n` samples of `history`, given the current
/// debounced `level`.
///
/// With `consec_n == 0` the mask is empty and both checks match, so the level flips on
/// every call.
pub(crate) const fn settle(history: u8, consec_n: u8, level: bool) -> Option<Edge> {
    let mask = consecutive_mask(consec_n);
    let newest = history & mask;

    if !level && newest == mask {
        Some(Edge::Pressed)
    } else if level && newest == 0 {
        Some(Edge::Released)
    } else {
        None
    }
}

impl Engine for Consecutive {
    fn kind(&self) -> EngineKind {
        EngineKind::Consecutive
    }

    fn reset(&mut self, _config: &Config, start_down: bool) {
        self.history = level_byte(start_down);
    }

    fn update(&mut self, config: &Config, level: bool, raw_down: bool) -> Option<Edge> {
        self.history = shift_in(self.history, raw_down);
        settle(self.history, config.consec_n, level)
    }

    fn history(&self) -> u8 {
        self.history
    }
}

//! Edge-gated engine: consecutive samples with chatter suppression.
//!
//! Counts level changes across the 8-sample history every tick. While the count stays
//! at or above `edge_threshold` for `bounce_confirm` ticks the input is considered to
//! be bouncing, and no transition is accepted. Once the input settles, the consecutive
//! rule applies as usual.
//!
//! Bouncing that lasts `unstable_timeout` ticks recenters the engine: the history is
//! refilled with the current debounced level and both counters are cleared, so a
//! switch that never settles cannot lock the state machine.
//!
//! Memory: 3 bytes.

use crate::bits::{edge_count8, level_byte, shift_in};
use crate::config::Config;
use crate::consecutive::settle;
use crate::engine::Engine;
use crate::types::{Edge, EngineKind};

/// Shift register plus chatter tracking state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EdgeGated {
    history: u8,
    unstable_ticks: u8,
    bounce_streak: u8,
}

impl EdgeGated {
    /// Creates an engine with an all-released history and cleared counters.
    pub const fn new() -> Self {
        Self {
            history: 0,
            unstable_ticks: 0,
            bounce_streak: 0,
        }
    }

    /// Consecutive ticks on which the edge count met the threshold.
    pub const fn bounce_streak(&self) -> u8 {
        self.bounce_streak
    }

    /// Consecutive ticks spent in the confirmed bouncing state.
    pub const fn unstable_ticks(&self) -> u8 {
        self.unstable_ticks
    }

    /// Whether transitions are currently being suppressed.
    pub const fn is_bouncing(&self, config: &Config) -> bool {
        self.bounce_streak >= config.bounce_confirm
    }

    fn recenter(&mut self, level: bool) {
        self.history = level_byte(level);
        self.unstable_ticks = 0;
        self.bounce_streak = 0;

        #[cfg(feature = "defmt")]
        defmt::debug!("edge-gated: recentered after sustained chatter (level={})", level);
    }
}

impl Engine for EdgeGated {
    fn kind(&self) -> EngineKind {
        EngineKind::EdgeGated
    }

    fn reset(&mut self, _config: &Config, start_down: bool) {
        self.history = level_byte(start_down);
        self.unstable_ticks = 0;
        self.bounce_streak = 0;
    }

    fn update(&mut self, config: &Config, level: bool, raw_down: bool) -> Option<Edge> {
        self.history = shift_in(self.history, raw_down);

        if edge_count8(self.history) >= config.edge_threshold {
            if self.bounce_streak < u8::MAX {
                self.bounce_streak += 1;
            }
        } else {
            self.bounce_streak = 0;
        }

        let bouncing = self.is_bouncing(config);

        if bouncing {
            if self.unstable_ticks < u8::MAX {
                self.unstable_ticks += 1;
            }
        } else {
            self.unstable_ticks = 0;
        }

        if self.unstable_ticks >= config.unstable_timeout {
            self.recenter(level);
            return None;
        }

        if bouncing {
            return None;
        }

        settle(self.history, config.consec_n, level)
    }

    fn history(&self) -> u8 {
        self.history
    }
}

//! Integrator engine: saturating counter with hysteresis.
//!
//! Each pressed sample pushes the accumulator up by one and each released sample pulls
//! it down by one, clamped to `0..=integ_max`. The button becomes pressed once the
//! accumulator reaches `integ_on` and released once it falls to `integ_off`. The band
//! between the two thresholds absorbs chatter that would otherwise toggle the output
//! around a single threshold.
//!
//! Memory: 1 byte. No sample history is retained.

use crate::config::Config;
use crate::engine::Engine;
use crate::types::{Edge, EngineKind};

/// Saturating counter state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Integrator {
    accumulator: u8,
}

impl Integrator {
    /// Creates an integrator at the released rail.
    pub const fn new() -> Self {
        Self { accumulator: 0 }
    }

    /// Current accumulator value.
    pub const fn accumulator(&self) -> u8 {
        self.accumulator
    }
}

impl Engine for Integrator {
    fn kind(&self) -> EngineKind {
        EngineKind::Integrator
    }

    fn reset(&mut self, config: &Config, start_down: bool) {
        self.accumulator = if start_down { config.integ_max } else { 0 };
    }

    fn update(&mut self, config: &Config, level: bool, raw_down: bool) -> Option<Edge> {
        if raw_down {
            if self.accumulator < config.integ_max {
                self.accumulator += 1;
            }
        } else if self.accumulator > 0 {
            self.accumulator -= 1;
        }

        if !level && self.accumulator >= config.integ_on {
            Some(Edge::Pressed)
        } else if level && self.accumulator <= config.integ_off {
            Some(Edge::Released)
        } else {
            None
        }
    }

    fn history(&self) -> u8 {
        0
    }
}

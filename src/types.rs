//! Core types shared by the engines and the debouncer.

use crate::config::Config;

/// A debounced transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    /// Released to pressed.
    Pressed,

    /// Pressed to released.
    Released,
}

impl Edge {
    /// Debounced level after this transition (`true` = down).
    #[inline]
    pub const fn level(self) -> bool {
        matches!(self, Edge::Pressed)
    }
}

/// Which debouncing algorithm an engine runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EngineKind {
    /// Saturating counter with hysteresis thresholds.
    Integrator,

    /// N identical consecutive samples.
    Consecutive,

    /// Consecutive samples, gated while the input chatters.
    EdgeGated,
}

impl EngineKind {
    /// Whether the engine keeps a raw sample history.
    pub const fn has_history(self) -> bool {
        !matches!(self, EngineKind::Integrator)
    }

    /// Ticks a clean step needs to produce a transition under `config`.
    ///
    /// For the integrator this is the worst case, a full sweep of the accumulator from
    /// one rail to the other. The history engines need exactly `consec_n` samples,
    /// capped at the register width. Multiply by the tick period for wall-clock latency.
    pub const fn nominal_latency_ticks(self, config: &Config) -> u8 {
        match self {
            EngineKind::Integrator => config.integ_max,
            EngineKind::Consecutive | EngineKind::EdgeGated => {
                if config.consec_n > 8 { 8 } else { config.consec_n }
            }
        }
    }
}

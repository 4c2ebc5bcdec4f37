//! Engine abstraction and the runtime-selected engine sum type.
//!
//! Provides the [`Engine`] trait every debouncing algorithm implements, and
//! [`AnyEngine`], which holds exactly one of the built-in engines chosen at
//! construction.

use crate::config::Config;
use crate::consecutive::Consecutive;
use crate::edge_gated::EdgeGated;
use crate::integrator::Integrator;
use crate::types::{Edge, EngineKind};

/// A debouncing algorithm.
///
/// Engines own only their algorithm-specific state. The debounced level lives in the
/// [`Debouncer`](crate::Debouncer), which passes it in on every call and applies the
/// returned transition.
///
/// Implementations must only return [`Edge::Pressed`] while `level` is `false` and
/// [`Edge::Released`] while `level` is `true`.
pub trait Engine {
    /// The algorithm this engine runs.
    fn kind(&self) -> EngineKind;

    /// Reinitializes all state to match a debounced level of `start_down`.
    fn reset(&mut self, config: &Config, start_down: bool);

    /// Consumes one raw sample and returns the transition it causes, if any.
    fn update(&mut self, config: &Config, level: bool, raw_down: bool) -> Option<Edge>;

    /// Raw sample history, newest sample in bit 0. Zero for engines without history.
    fn history(&self) -> u8;
}

/// One of the built-in engines, chosen when the debouncer is built.
///
/// This is the default engine of [`Debouncer`](crate::Debouncer). It lets a single type
/// run any algorithm, at the cost of a match per tick. Use a concrete engine type as
/// the debouncer's parameter to drop the dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnyEngine {
    /// Saturating counter with hysteresis.
    Integrator(Integrator),

    /// N identical consecutive samples.
    Consecutive(Consecutive),

    /// Consecutive samples with chatter gating.
    EdgeGated(EdgeGated),
}

impl AnyEngine {
    /// Integrator engine (recommended for general use).
    pub const fn integrator() -> Self {
        AnyEngine::Integrator(Integrator::new())
    }

    /// Consecutive-sample engine.
    pub const fn consecutive() -> Self {
        AnyEngine::Consecutive(Consecutive::new())
    }

    /// Edge-gated chatter-suppressing engine.
    pub const fn edge_gated() -> Self {
        AnyEngine::EdgeGated(EdgeGated::new())
    }

    /// Fresh engine of the given kind.
    pub const fn from_kind(kind: EngineKind) -> Self {
        match kind {
            EngineKind::Integrator => Self::integrator(),
            EngineKind::Consecutive => Self::consecutive(),
            EngineKind::EdgeGated => Self::edge_gated(),
        }
    }
}

impl Default for AnyEngine {
    fn default() -> Self {
        Self::integrator()
    }
}

impl From<EngineKind> for AnyEngine {
    fn from(kind: EngineKind) -> Self {
        Self::from_kind(kind)
    }
}

impl Engine for AnyEngine {
    fn kind(&self) -> EngineKind {
        match self {
            AnyEngine::Integrator(_) => EngineKind::Integrator,
            AnyEngine::Consecutive(_) => EngineKind::Consecutive,
            AnyEngine::EdgeGated(_) => EngineKind::EdgeGated,
        }
    }

    fn reset(&mut self, config: &Config, start_down: bool) {
        match self {
            AnyEngine::Integrator(engine) => engine.reset(config, start_down),
            AnyEngine::Consecutive(engine) => engine.reset(config, start_down),
            AnyEngine::EdgeGated(engine) => engine.reset(config, start_down),
        }
    }

    fn update(&mut self, config: &Config, level: bool, raw_down: bool) -> Option<Edge> {
        match self {
            AnyEngine::Integrator(engine) => engine.update(config, level, raw_down),
            AnyEngine::Consecutive(engine) => engine.update(config, level, raw_down),
            AnyEngine::EdgeGated(engine) => engine.update(config, level, raw_down),
        }
    }

    fn history(&self) -> u8 {
        match self {
            AnyEngine::Integrator(engine) => engine.history(),
            AnyEngine::Consecutive(engine) => engine.history(),
            AnyEngine::EdgeGated(engine) => engine.history(),
        }
    }
}

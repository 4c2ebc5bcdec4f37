//! Button debouncer with one-shot transition events.
//!
//! Provides [`Debouncer`], which feeds raw samples to an [`Engine`] once per tick and
//! turns the engine's verdicts into a debounced level plus `pressed`/`released` events.

use crate::config::Config;
use crate::consecutive::Consecutive;
use crate::edge_gated::EdgeGated;
use crate::engine::{AnyEngine, Engine};
use crate::integrator::Integrator;
use crate::types::{Edge, EngineKind};

/// Debounces a single button sampled at a fixed tick interval.
///
/// Call [`update`](Self::update) exactly once per tick (5 ms recommended) with the raw
/// input. The debounced level changes at most once per tick, and every change raises
/// exactly one of [`pressed`](Self::pressed) or [`released`](Self::released) for that
/// tick only.
///
/// There is no internal synchronization. Callers sharing a debouncer between contexts
/// must serialize access themselves.
///
/// # Type Parameters
/// * `E` - Engine implementation. Defaults to [`AnyEngine`], which picks the algorithm
///   at construction; a concrete engine type fixes it at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Debouncer<E: Engine = AnyEngine> {
    config: Config,
    engine: E,
    level: bool,
    pressed: bool,
    released: bool,
}

impl<E: Engine + Default> Debouncer<E> {
    /// Creates a released debouncer running a fresh `E`.
    pub fn new(config: Config) -> Self {
        Self::with_engine(E::default(), config)
    }
}

impl Debouncer<AnyEngine> {
    /// Creates a released debouncer running the integrator engine.
    pub fn integrator(config: Config) -> Self {
        Self::with_engine(AnyEngine::integrator(), config)
    }

    /// Creates a released debouncer running the consecutive engine.
    pub fn consecutive(config: Config) -> Self {
        Self::with_engine(AnyEngine::consecutive(), config)
    }

    /// Creates a released debouncer running the edge-gated engine.
    pub fn edge_gated(config: Config) -> Self {
        Self::with_engine(AnyEngine::edge_gated(), config)
    }

    /// Creates a released debouncer running the engine of the given kind.
    pub fn from_kind(kind: EngineKind, config: Config) -> Self {
        Self::with_engine(AnyEngine::from_kind(kind), config)
    }
}

impl<E: Engine> Debouncer<E> {
    /// Creates a debouncer around `engine` and resets it to the released baseline.
    ///
    /// The configuration is stored as given; see [`Config::validate`].
    pub fn with_engine(engine: E, config: Config) -> Self {
        let mut debouncer = Self {
            config,
            engine,
            level: false,
            pressed: false,
            released: false,
        };
        debouncer.reset(false);
        debouncer
    }

    /// Forces the debounced level to `start_down` and reinitializes the engine to match.
    ///
    /// Clears both one-shot events.
    pub fn reset(&mut self, start_down: bool) {
        self.level = start_down;
        self.pressed = false;
        self.released = false;
        self.engine.reset(&self.config, start_down);
    }

    /// Advances the debouncer by one tick with the raw input (`true` = pressed).
    ///
    /// Every call consumes one sample; calling twice in a tick shortens the debounce time.
    pub fn update(&mut self, raw_down: bool) {
        self.pressed = false;
        self.released = false;

        match self.engine.update(&self.config, self.level, raw_down) {
            Some(Edge::Pressed) => {
                self.level = true;
                self.pressed = true;

                #[cfg(feature = "defmt")]
                defmt::trace!("debouncer: pressed");
            }
            Some(Edge::Released) => {
                self.level = false;
                self.released = true;

                #[cfg(feature = "defmt")]
                defmt::trace!("debouncer: released");
            }
            None => {}
        }
    }

    /// Updates from a pin that reads low while the button is pressed.
    #[inline]
    pub fn update_active_low(&mut self, pin_is_high: bool) {
        self.update(!pin_is_high);
    }

    /// Updates from a pin that reads high while the button is pressed.
    #[inline]
    pub fn update_active_high(&mut self, pin_is_high: bool) {
        self.update(pin_is_high);
    }

    /// Returns true if the last update pressed the button.
    pub fn pressed(&self) -> bool {
        self.pressed
    }

    /// Returns true if the last update released the button.
    pub fn released(&self) -> bool {
        self.released
    }

    /// Transition caused by the last update, if any.
    pub fn edge(&self) -> Option<Edge> {
        if self.pressed {
            Some(Edge::Pressed)
        } else if self.released {
            Some(Edge::Released)
        } else {
            None
        }
    }

    /// Debounced level: true while the button is held down.
    pub fn down(&self) -> bool {
        self.level
    }

    /// Debounced level: true while the button is released.
    pub fn up(&self) -> bool {
        !self.level
    }

    /// Raw sample history, newest sample in bit 0. Always 0 for the integrator.
    pub fn history(&self) -> u8 {
        self.engine.history()
    }

    /// The algorithm this debouncer runs.
    pub fn kind(&self) -> EngineKind {
        self.engine.kind()
    }

    /// Returns the configuration this debouncer was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the engine state, e.g. to inspect its counters.
    pub fn engine(&self) -> &E {
        &self.engine
    }
}

impl<E: Engine + Default> Default for Debouncer<E> {
    fn default() -> Self {
        Self::new(Config::DEFAULT)
    }
}

/// Debouncer fixed to the integrator engine.
pub type IntegratorDebouncer = Debouncer<Integrator>;

/// Debouncer fixed to the consecutive engine.
pub type ConsecutiveDebouncer = Debouncer<Consecutive>;

/// Debouncer fixed to the edge-gated engine.
pub type EdgeGatedDebouncer = Debouncer<EdgeGated>;

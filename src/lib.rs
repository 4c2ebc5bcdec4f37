#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Debouncer`**: Feeds one raw sample per tick to an engine and exposes the debounced level and one-shot events
//! - **`Engine`**: Trait implemented by every debouncing algorithm
//! - **`Integrator`**: Saturating counter with press/release hysteresis thresholds
//! - **`Consecutive`**: Requires `consec_n` identical samples in a row
//! - **`EdgeGated`**: Consecutive rule, suppressed while the input chatters, with a timeout recenter
//! - **`AnyEngine`**: Holds one of the three engines, chosen at construction
//! - **`Config`**: Tuning parameters shared by all engines
//! - **`Edge`**: A debounced transition (`Pressed` or `Released`)
//!
//! Everything is fixed-size and allocation-free. Counters are 8-bit and saturate
//! instead of wrapping, so timing is identical on every target.

pub mod bits;
pub mod config;
pub mod types;
pub mod engine;
pub mod integrator;
pub mod consecutive;
pub mod edge_gated;
pub mod debouncer;

pub use config::{Config, ConfigError};
pub use types::{Edge, EngineKind};
pub use engine::{AnyEngine, Engine};
pub use integrator::Integrator;
pub use consecutive::Consecutive;
pub use edge_gated::EdgeGated;
pub use debouncer::{ConsecutiveDebouncer, Debouncer, EdgeGatedDebouncer, IntegratorDebouncer};

/// Recommended tick period in milliseconds. The default [`Config`] is tuned for it.
pub const RECOMMENDED_TICK_MS: u32 = 5;

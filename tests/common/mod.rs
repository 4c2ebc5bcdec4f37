//! Shared test infrastructure for button-debounce integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use button_debounce::{AnyEngine, Config, Debouncer, Edge, Engine, EngineKind};

pub const ALL_KINDS: [EngineKind; 3] = [
    EngineKind::Integrator,
    EngineKind::Consecutive,
    EngineKind::EdgeGated,
];

// ============================================================================
// Tick Recording
// ============================================================================

/// Observable debouncer state after one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub pressed: bool,
    pub released: bool,
    pub down: bool,
    pub history: u8,
}

pub type Trace = heapless::Vec<Tick, 512>;

/// Feed `samples` one per tick and record the state after each
pub fn run<E: Engine>(debouncer: &mut Debouncer<E>, samples: &[bool]) -> Trace {
    let mut trace = Trace::new();
    for &raw in samples {
        debouncer.update(raw);
        trace
            .push(Tick {
                pressed: debouncer.pressed(),
                released: debouncer.released(),
                down: debouncer.down(),
                history: debouncer.history(),
            })
            .unwrap();
    }
    trace
}

/// Hold one level for `ticks` ticks
pub fn hold<E: Engine>(debouncer: &mut Debouncer<E>, raw: bool, ticks: usize) -> Trace {
    let mut samples = heapless::Vec::<bool, 512>::new();
    for _ in 0..ticks {
        samples.push(raw).unwrap();
    }
    run(debouncer, &samples)
}

/// Alternate the input for `ticks` ticks, starting with `first`
pub fn chatter<E: Engine>(debouncer: &mut Debouncer<E>, first: bool, ticks: usize) -> Trace {
    let mut samples = heapless::Vec::<bool, 512>::new();
    let mut raw = first;
    for _ in 0..ticks {
        samples.push(raw).unwrap();
        raw = !raw;
    }
    run(debouncer, &samples)
}

/// Deterministic pseudo-random samples (xorshift32)
pub fn noise(seed: u32, ticks: usize) -> heapless::Vec<bool, 512> {
    let mut state = seed.max(1);
    let mut samples = heapless::Vec::new();
    for _ in 0..ticks {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        samples.push(state & 1 == 1).unwrap();
    }
    samples
}

/// Convert 0/1 literals to samples
pub fn bits(values: &[u8]) -> heapless::Vec<bool, 512> {
    values.iter().map(|&v| v != 0).collect()
}

// ============================================================================
// Trace Queries
// ============================================================================

/// Tick indices (0-based) on which the given edge fired
pub fn edges_at(trace: &Trace, edge: Edge) -> heapless::Vec<usize, 512> {
    trace
        .iter()
        .enumerate()
        .filter(|(_, tick)| match edge {
            Edge::Pressed => tick.pressed,
            Edge::Released => tick.released,
        })
        .map(|(index, _)| index)
        .collect()
}

pub fn count(trace: &Trace, edge: Edge) -> usize {
    edges_at(trace, edge).len()
}

pub fn no_events(trace: &Trace) -> bool {
    trace.iter().all(|tick| !tick.pressed && !tick.released)
}

/// Check the one-shot contract: at most one event per tick, and every level change
/// is matched by the event of the same direction
pub fn assert_event_contract(initial_down: bool, trace: &Trace) {
    let mut previous = initial_down;
    for (index, tick) in trace.iter().enumerate() {
        assert!(
            !(tick.pressed && tick.released),
            "both events on tick {}",
            index
        );
        assert_eq!(
            tick.pressed,
            !previous && tick.down,
            "press mismatch on tick {}",
            index
        );
        assert_eq!(
            tick.released,
            previous && !tick.down,
            "release mismatch on tick {}",
            index
        );
        previous = tick.down;
    }
}

pub fn build(kind: EngineKind, config: Config) -> Debouncer<AnyEngine> {
    Debouncer::from_kind(kind, config)
}

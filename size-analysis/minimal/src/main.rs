#![no_std]
#![no_main]

use button_debounce::{
    AnyEngine, Config, ConsecutiveDebouncer, Debouncer, EdgeGatedDebouncer, IntegratorDebouncer,
};
use cortex_m_rt::entry;
use panic_halt as _;

// ============================================================================
// Simulated Input
// ============================================================================

/// Stand-in for a GPIO read that the optimizer cannot see through
#[inline(never)]
fn read_pin(tick: u32) -> bool {
    core::hint::black_box(tick & 0b100 != 0)
}

// ============================================================================
// Engine Instantiation
// ============================================================================

// Each engine is monomorphized separately so its footprint shows up as its own symbols
#[inline(never)]
fn run_integrator(ticks: u32) -> u32 {
    let mut button = IntegratorDebouncer::new(Config::DEFAULT);
    let mut presses = 0;
    for tick in 0..ticks {
        button.update_active_low(read_pin(tick));
        presses += button.pressed() as u32;
    }
    core::hint::black_box(button);
    presses
}

#[inline(never)]
fn run_consecutive(ticks: u32) -> u32 {
    let mut button = ConsecutiveDebouncer::new(Config::DEFAULT);
    let mut presses = 0;
    for tick in 0..ticks {
        button.update_active_low(read_pin(tick));
        presses += button.pressed() as u32;
    }
    core::hint::black_box(button.history());
    presses
}

#[inline(never)]
fn run_edge_gated(ticks: u32) -> u32 {
    let mut button = EdgeGatedDebouncer::new(Config::DEFAULT);
    let mut presses = 0;
    for tick in 0..ticks {
        button.update_active_low(read_pin(tick));
        presses += button.pressed() as u32;
    }
    core::hint::black_box(button.history());
    presses
}

// Runtime-selected engine pays for all three plus dispatch
#[inline(never)]
fn run_any(ticks: u32) -> u32 {
    let engine = match core::hint::black_box(ticks % 3) {
        0 => AnyEngine::integrator(),
        1 => AnyEngine::consecutive(),
        _ => AnyEngine::edge_gated(),
    };
    let mut button = Debouncer::with_engine(engine, Config::DEFAULT);
    let mut releases = 0;
    for tick in 0..ticks {
        button.update_active_high(read_pin(tick));
        releases += button.released() as u32;
    }
    core::hint::black_box(button);
    releases
}

#[entry]
fn main() -> ! {
    let total = run_integrator(100) + run_consecutive(100) + run_edge_gated(100) + run_any(100);
    core::hint::black_box(total);

    // Halt - this is a size analysis binary, not meant to run
    loop {
        cortex_m::asm::nop();
    }
}

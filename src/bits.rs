//! Bit-pattern helpers for the 8-sample history register.
//!
//! The history register holds the most recent raw samples with the newest one in
//! bit 0. Every helper here is `const` and branch-light so the history engines stay
//! cheap on small cores.

/// Number of set bits in `x`.
#[inline]
pub const fn popcount8(x: u8) -> u8 {
    x.count_ones() as u8
}

/// Number of level changes between adjacent samples in `history`.
///
/// Bit 7 is compared against the zero shifted in from above, so a register whose
/// oldest sample is a 1 counts one extra edge. The result ranges over `0..=8`.
#[inline]
pub const fn edge_count8(history: u8) -> u8 {
    popcount8(history ^ (history >> 1))
}

/// Mask covering the newest `n` samples. Saturates at the full register for `n >= 8`.
///
/// `n == 0` yields an empty mask.
#[inline]
pub const fn consecutive_mask(n: u8) -> u8 {
    if n >= 8 { 0xFF } else { (1u8 << n) - 1 }
}

/// History byte filled entirely with one level.
#[inline]
pub const fn level_byte(down: bool) -> u8 {
    if down { 0xFF } else { 0x00 }
}

/// Shifts `raw_down` into bit 0, discarding the oldest sample.
#[inline]
pub const fn shift_in(history: u8, raw_down: bool) -> u8 {
    (history << 1) | raw_down as u8
}

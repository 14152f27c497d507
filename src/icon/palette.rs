//! Deterministic background color selection.

/// Background colors cycled through when the caller does not pick one.
/// Order matters: a stable index is a position into this list.
pub const PALETTE: [&str; 8] = [
    "#F44336", "#E91E63", "#9C27B0", "#673AB7", "#3F51B5", "#2196F3", "#03A9F4", "#00BCD4",
];

/// Map a string to a stable position in `[0, max)`.
///
/// Accumulates `hash * 31 + byte` in a wrapping u32, so the same extension
/// lands on the same palette entry across processes and runtimes. The input
/// is hashed as received; upper-casing for display happens elsewhere.
pub fn stable_index(s: &str, max: usize) -> usize {
    debug_assert!(max > 0);
    let mut hash: u32 = 0;
    for &byte in s.as_bytes() {
        hash = hash.wrapping_mul(31).wrapping_add(u32::from(byte));
    }
    hash as usize % max
}

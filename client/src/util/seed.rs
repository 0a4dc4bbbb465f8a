//! Seed source for diagram jitter.
//!
//! In the browser the seed mixes `Math.random()` with the page clock so every
//! load draws different decorations. Native builds (tests, tooling) fall back
//! to the system clock.

#[cfg(test)]
#[path = "seed_test.rs"]
mod seed_test;

use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Fresh random source for one mounted app.
pub fn page_rng() -> SmallRng {
    SmallRng::seed_from_u64(entropy())
}

/// Fold two 64-bit words into one, keeping bits from both.
pub fn mix(a: u64, b: u64) -> u64 {
    (a ^ b.rotate_left(29)).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

#[cfg(feature = "csr")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn entropy() -> u64 {
    let random = (js_sys::Math::random() * (1_u64 << 53) as f64) as u64;
    let clock = web_sys::window()
        .and_then(|w| w.performance())
        .map_or(0.0, |p| p.now());
    mix(random, clock.to_bits())
}

#[cfg(not(feature = "csr"))]
fn entropy() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_nanos());
    #[allow(clippy::cast_possible_truncation)]
    let (low, high) = (nanos as u64, (nanos >> 64) as u64);
    mix(low, high)
}

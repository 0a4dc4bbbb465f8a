use rand::RngCore;

use super::*;

#[test]
fn mix_depends_on_both_words() {
    assert_ne!(mix(1, 0), mix(2, 0));
    assert_ne!(mix(1, 0), mix(1, 1));
}

#[test]
fn mix_is_deterministic() {
    assert_eq!(mix(42, 7), mix(42, 7));
}

#[test]
fn page_rng_produces_values() {
    let mut rng = page_rng();
    let a = rng.next_u64();
    let b = rng.next_u64();
    assert_ne!(a, b);
}

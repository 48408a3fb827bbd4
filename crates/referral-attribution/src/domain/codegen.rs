//! Referral code generation.
//!
//! Codes only need to be hard to guess and cheap to regenerate on
//! collision; they are not secrets. Collision handling lives in the
//! service's bounded retry loop, not here.

use rand::Rng;

/// Uppercase alphanumeric alphabet, 36 symbols.
///
/// At the default length of 8 that is 36^8 ≈ 2.8e12 candidates, so
/// collisions stay rare well past any realistic user population.
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generate one candidate code of `length` symbols.
pub fn generate_code<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

//! Random source for polygon generation.

use rand::SeedableRng;
use rand::rngs::SmallRng;

/// A freshly seeded generator. In the browser the seed mixes
/// `Math.random()` with the clock; natively it uses the system time.
pub fn fresh_rng() -> SmallRng {
    SmallRng::seed_from_u64(seed())
}

#[cfg(feature = "csr")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn seed() -> u64 {
    let random = (js_sys::Math::random() * 9_007_199_254_740_992.0) as u64;
    let now = js_sys::Date::now() as u64;
    random ^ now.rotate_left(32)
}

#[cfg(not(feature = "csr"))]
#[allow(clippy::cast_possible_truncation)]
fn seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_or(0, |d| d.as_nanos() as u64)
}

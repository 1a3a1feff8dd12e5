//! Xorshift32 generator shared by every estimator.
//!
//! Deterministic: the same seed always yields the same sequence. Not suitable
//! for large simulations or anything security related.

use rand::{Error, RngCore, SeedableRng};

/// Substituted for a zero seed, since xorshift maps zero to zero forever.
pub const ZERO_SEED_REPLACEMENT: u32 = 0x92D6_8CA2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    pub fn new(seed: u32) -> Self {
        let state = if seed == 0 { ZERO_SEED_REPLACEMENT } else { seed };
        Self { state }
    }

    pub fn state(&self) -> u32 {
        self.state
    }

    /// Advances the state with the 13/17/5 shift triple and returns it.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Uniform double in [0, 1). See [`unit_double`].
    #[inline]
    pub fn next_double(&mut self) -> f64 {
        unit_double(self)
    }
}

/// Uniform double in [0, 1) with a full 53-bit mantissa.
///
/// Takes the top 26 bits of one draw and the top 27 bits of the next, so
/// every call consumes exactly two `next_u32` values.
#[inline]
pub fn unit_double<R: RngCore + ?Sized>(rng: &mut R) -> f64 {
    let hi = u64::from(rng.next_u32() >> 6);
    let lo = u64::from(rng.next_u32() >> 5);
    ((hi << 27) | lo) as f64 / (1u64 << 53) as f64
}

impl RngCore for XorShift32 {
    fn next_u32(&mut self) -> u32 {
        XorShift32::next_u32(self)
    }

    fn next_u64(&mut self) -> u64 {
        rand_core::impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        rand_core::impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for XorShift32 {
    type Seed = [u8; 4];

    fn from_seed(seed: [u8; 4]) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}

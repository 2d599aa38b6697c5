// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use tracing::trace;

use crate::error::RngError;
use crate::scalar::Real;

/// Initial LCG state of the default stream.
pub const DEFAULT_STATE: u64 = 0x853c_49e6_748f_ea9b;
/// Increment of the default stream.
pub const DEFAULT_STREAM: u64 = 0xda3e_39cb_94b9_5bdb;
/// Multiplier of the underlying 64-bit LCG.
pub const PCG32_MULTIPLIER: u64 = 0x5851_f42d_4c95_7f2d;

/// Stateful PCG32 pseudo-random number generator.
///
/// * Not cryptographically secure; use only for sampling and simulation.
/// * Generators built with the same starting index produce bit-identical
///   sequences on every platform.
/// * Each draw mutates the state, so a generator must not be shared across
///   threads; give each thread or task its own stream instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawRng", into = "RawRng"))]
pub struct Rng {
    state: u64,
    inc: u64,
}

/// Wire form of [`Rng`]; converted back only when `inc` is odd.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawRng {
    state: u64,
    inc: u64,
}

#[cfg(feature = "serde")]
impl From<Rng> for RawRng {
    fn from(rng: Rng) -> Self {
        Self {
            state: rng.state,
            inc: rng.inc,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RawRng> for Rng {
    type Error = RngError;

    fn try_from(raw: RawRng) -> Result<Self, RngError> {
        if raw.inc & 1 == 0 {
            return Err(RngError::EvenIncrement { inc: raw.inc });
        }
        Ok(Self {
            state: raw.state,
            inc: raw.inc,
        })
    }
}

impl Default for Rng {
    fn default() -> Self {
        Self::new()
    }
}

impl Rng {
    /// Generator on the fixed default stream.
    pub const fn new() -> Self {
        Self {
            state: DEFAULT_STATE,
            inc: DEFAULT_STREAM,
        }
    }

    /// Generator on the stream selected by `starting_index`.
    ///
    /// # Examples
    /// ```
    /// use prism_math::Rng;
    /// let mut a = Rng::with_sequence(5);
    /// let mut b = Rng::with_sequence(5);
    /// assert_eq!(a.uniform_u32(), b.uniform_u32());
    /// ```
    pub fn with_sequence(starting_index: u64) -> Self {
        let mut rng = Self::new();
        rng.set_sequence(starting_index);
        rng
    }

    /// Reseeds onto the stream selected by `starting_index`.
    ///
    /// The increment is forced odd and the state is warmed up with two
    /// discarded draws, adding [`DEFAULT_STATE`] in between.
    pub fn set_sequence(&mut self, starting_index: u64) {
        self.state = 0;
        self.inc = (starting_index << 1) | 1;
        self.uniform_u32();
        self.state = self.state.wrapping_add(DEFAULT_STATE);
        self.uniform_u32();
        trace!(starting_index, "pcg32 stream selected");
    }

    /// Returns the next uniformly distributed 32-bit value.
    #[allow(clippy::cast_possible_truncation)]
    pub fn uniform_u32(&mut self) -> u32 {
        let old = self.state;
        self.state = old.wrapping_mul(PCG32_MULTIPLIER).wrapping_add(self.inc);
        let xorshifted = (((old >> 18) ^ old) >> 27) as u32;
        let rot = (old >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    /// Returns a value in `[0, limit)` without modulo bias.
    ///
    /// Draws below `2^32 mod limit` are rejected, so every residue is equally
    /// likely. `limit` must be non-zero.
    pub fn uniform_u32_below(&mut self, limit: u32) -> u32 {
        assert!(limit > 0, "uniform_u32_below requires a non-zero limit");
        let threshold = limit.wrapping_neg() % limit;
        loop {
            let r = self.uniform_u32();
            if r >= threshold {
                return r % limit;
            }
        }
    }

    /// Returns a float in `[0, 1)`.
    pub fn uniform_f32(&mut self) -> f32 {
        self.uniform_real()
    }

    /// Returns a double in `[0, 1)`.
    pub fn uniform_f64(&mut self) -> f64 {
        self.uniform_real()
    }

    /// Returns a real in `[0, 1)`, clamped to [`Real::ONE_MINUS_EPSILON`].
    pub fn uniform_real<T: Real>(&mut self) -> T {
        let v = T::from_u32_unit(self.uniform_u32());
        if v < T::ONE_MINUS_EPSILON {
            v
        } else {
            T::ONE_MINUS_EPSILON
        }
    }

    /// Returns a float in `[start, end)`.
    pub fn uniform_f32_in_range(&mut self, start: f32, end: f32) -> f32 {
        self.uniform_real_in_range(start, end)
    }

    /// Returns a real in `[start, end)`; requires `start <= end`.
    ///
    /// Rounding in `start + u * (end - start)` can land on `end` for draws
    /// close to one; such results are pulled back to the predecessor of `end`.
    pub fn uniform_real_in_range<T: Real>(&mut self, start: T, end: T) -> T {
        assert!(start <= end, "invalid range: {start:?}..{end:?}");
        let v = start + self.uniform_real::<T>() * (end - start);
        if start < end && v >= end {
            end.next_down()
        } else {
            v
        }
    }

    /// Moves the stream by `delta` draws in O(log |delta|) steps.
    ///
    /// Negative deltas rewind: the LCG has period 2⁶⁴, so `delta` is applied
    /// modulo 2⁶⁴.
    ///
    /// # Examples
    /// ```
    /// use prism_math::Rng;
    /// let mut stepped = Rng::with_sequence(9);
    /// let mut jumped = stepped;
    /// for _ in 0..100 {
    ///     stepped.uniform_u32();
    /// }
    /// jumped.advance(100);
    /// assert_eq!(stepped, jumped);
    /// ```
    #[allow(clippy::cast_sign_loss)]
    pub fn advance(&mut self, delta: i64) {
        let mut cur_mult = PCG32_MULTIPLIER;
        let mut cur_plus = self.inc;
        let mut acc_mult = 1u64;
        let mut acc_plus = 0u64;
        let mut delta = delta as u64;
        while delta > 0 {
            if delta & 1 == 1 {
                acc_mult = acc_mult.wrapping_mul(cur_mult);
                acc_plus = acc_plus.wrapping_mul(cur_mult).wrapping_add(cur_plus);
            }
            cur_plus = cur_mult.wrapping_add(1).wrapping_mul(cur_plus);
            cur_mult = cur_mult.wrapping_mul(cur_mult);
            delta >>= 1;
        }
        self.state = acc_mult.wrapping_mul(self.state).wrapping_add(acc_plus);
    }

    /// Number of draws that take `other` to `self` on a shared stream.
    ///
    /// The result is reduced modulo 2⁶⁴ and reinterpreted as signed, so
    /// `a.distance_from(&b) == -b.distance_from(&a)`.
    #[allow(clippy::cast_possible_wrap)]
    pub fn distance_from(&self, other: &Self) -> Result<i64, RngError> {
        if self.inc != other.inc {
            return Err(RngError::StreamMismatch {
                lhs: self.inc,
                rhs: other.inc,
            });
        }
        if self.inc & 1 == 0 {
            return Err(RngError::EvenIncrement { inc: self.inc });
        }
        let mut cur_mult = PCG32_MULTIPLIER;
        let mut cur_plus = self.inc;
        let mut cur_state = other.state;
        let mut the_bit = 1u64;
        let mut distance = 0u64;
        // Each iteration fixes one more low bit of the state; the low bit of
        // an odd-increment LCG has period 2, bit n has period 2^(n+1). All
        // 64 bits agree after at most 64 rounds.
        for _ in 0..u64::BITS {
            if self.state == cur_state {
                break;
            }
            if (self.state & the_bit) != (cur_state & the_bit) {
                cur_state = cur_state.wrapping_mul(cur_mult).wrapping_add(cur_plus);
                distance |= the_bit;
            }
            the_bit <<= 1;
            cur_plus = cur_mult.wrapping_add(1).wrapping_mul(cur_plus);
            cur_mult = cur_mult.wrapping_mul(cur_mult);
        }
        debug_assert_eq!(self.state, cur_state, "odd-increment streams always converge");
        Ok(distance as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_stream_golden_values() {
        let mut rng = Rng::new();
        let values: Vec<u32> = (0..4).map(|_| rng.uniform_u32()).collect();
        assert_eq!(values, vec![355_248_013, 41_705_475, 3_406_281_715, 4_186_697_710]);
    }

    #[test]
    fn seed_five_golden_values() {
        let mut rng = Rng::with_sequence(5);
        let values: Vec<u32> = (0..3).map(|_| rng.uniform_u32()).collect();
        assert_eq!(values, vec![3_723_188_829, 232_368_834, 3_360_206_734]);
    }

    #[test]
    fn set_sequence_warm_up_state() {
        let rng = Rng::with_sequence(5);
        assert_eq!(rng.inc, 0xb);
        assert_eq!(rng.state, 0xb977_59f0_bd52_9939);
    }

    #[test]
    fn increment_is_always_odd() {
        for idx in [0, 1, 2, u64::MAX, 1 << 63] {
            assert_eq!(Rng::with_sequence(idx).inc & 1, 1, "index {idx}");
        }
    }

    #[test]
    fn limit_of_one_always_yields_zero() {
        let mut rng = Rng::with_sequence(3);
        assert!((0..64).all(|_| rng.uniform_u32_below(1) == 0));
    }

    #[test]
    #[should_panic(expected = "non-zero limit")]
    fn zero_limit_is_a_contract_violation() {
        Rng::new().uniform_u32_below(0);
    }

    #[test]
    #[should_panic(expected = "invalid range")]
    fn reversed_range_is_a_contract_violation() {
        Rng::new().uniform_f32_in_range(1.0, 0.0);
    }

    #[test]
    fn distance_rejects_even_increment() {
        let a = Rng { state: 0, inc: 0 };
        let b = Rng { state: 1, inc: 0 };
        assert_eq!(a.distance_from(&b), Err(RngError::EvenIncrement { inc: 0 }));
    }

    #[test]
    fn distance_across_full_period_terminates() {
        let a = Rng::with_sequence(11);
        let mut b = a;
        b.advance(i64::MIN);
        assert_eq!(b.distance_from(&a), Ok(i64::MIN));
    }
}

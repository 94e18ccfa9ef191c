//! Injectable random draws.
//!
//! Everything stochastic in the colony (headings, snack placement, snack
//! values, recovery targets) goes through [`RandomSource`], so scenario tests
//! can hand in a seeded or scripted source instead of thread-local entropy.

use rand::Rng;

pub trait RandomSource {
    /// Uniform draw from `[0, 1)`.
    fn unit_interval(&mut self) -> f32;

    /// Uniform integer from `0..=max`.
    fn int_inclusive(&mut self, max: u32) -> u32;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn unit_interval(&mut self) -> f32 {
        self.gen::<f32>()
    }

    fn int_inclusive(&mut self, max: u32) -> u32 {
        self.gen_range(0..=max)
    }
}

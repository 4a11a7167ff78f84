use crate::error::{Error, Result};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use tracing::debug;

/// A fixed-capacity uniform sample over a stream of unknown length.
///
/// The first `capacity` records are kept unconditionally. After that, the record
/// arriving when `seen` records have already been observed is kept with probability
/// `capacity / (seen + 1)` and overwrites a uniformly chosen slot. Every record observed so
/// far therefore ends up in the sample with the same probability.
#[derive(Debug, Clone)]
pub struct Reservoir<T, R = Xoshiro256StarStar> {
    capacity: usize,
    seen: u64,
    sample: Vec<T>,
    rng: R,
}

impl<T> Reservoir<T> {
    pub fn with_seed(capacity: usize, seed: u64) -> Result<Reservoir<T>> {
        Reservoir::new(capacity, Xoshiro256StarStar::seed_from_u64(seed))
    }
}

impl<T, R: Rng> Reservoir<T, R> {
    pub fn new(capacity: usize, rng: R) -> Result<Reservoir<T, R>> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity(capacity));
        }

        Ok(Reservoir {
            capacity,
            seen: 0,
            sample: Vec::with_capacity(capacity),
            rng,
        })
    }

    /// Probability that the next record replaces one of the slots. Zero while the
    /// reservoir is still filling, since those records are kept without a draw.
    ///
    /// The next record is record number `seen + 1`, and it has to survive with
    /// probability `capacity / (seen + 1)` for the sample to stay uniform.
    pub fn inclusion_probability(&self) -> f64 {
        if self.seen < self.capacity as u64 {
            return 0.0;
        }

        self.capacity as f64 / (self.seen + 1) as f64
    }

    pub fn add(&mut self, record: T) {
        if self.seen < self.capacity as u64 {
            self.sample.push(record);

            if self.sample.len() == self.capacity {
                debug!(capacity = self.capacity, "reservoir is full");
            }
        } else if self.rng.gen::<f64>() < self.inclusion_probability() {
            let idx = self.rng.gen_range(0..self.capacity);
            self.sample[idx] = record;
        }

        // Must happen after the draw above, which uses the count before this record.
        self.seen += 1;
    }
}

impl<T, R> Reservoir<T, R> {
    pub fn sample(&self) -> &[T] {
        &self.sample
    }

    pub fn into_sample(self) -> Vec<T> {
        self.sample
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn seen(&self) -> u64 {
        self.seen
    }

    pub fn len(&self) -> usize {
        self.sample.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sample.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.sample.len() == self.capacity
    }
}

use crate::reservoir::Reservoir;
use rand::Rng;

/// Draws up to `k` items uniformly from `source`, in a single pass.
pub fn reservoir_sample<T, I: Iterator<Item = T>, R: Rng>(
    rng: &mut R,
    source: I,
    k: usize,
) -> Vec<T> {
    let Ok(mut reservoir) = Reservoir::new(k, rng) else {
        return Vec::new();
    };

    for item in source {
        reservoir.add(item);
    }

    reservoir.into_sample()
}

pub fn reservoir_sample_one<T, I: Iterator<Item = T>, R: Rng>(rng: &mut R, source: I) -> Option<T> {
    reservoir_sample(rng, source, 1).pop()
}

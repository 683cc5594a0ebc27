use rand::distr::StandardUniform;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

/// Fixed random seed to support repeatable testing
const SEED: [u8; 32] = [
    7, 1, 4, 3, 9, 5, 6, 2, 8, 0, 10, 11, 12, 13, 14, 15, 16, 15, 14, 13, 12, 11, 10, 9, 8, 7, 6,
    5, 4, 3, 2, 1,
];

/// Get a random number generator with a const seed for repeatable testing
pub fn rng_fixed_seed() -> StdRng {
    StdRng::from_seed(SEED)
}

/// Generate `n` random numbers in [0, 1) using provided generator
pub fn randn<T>(rng: &mut StdRng, n: usize) -> Vec<T>
where
    StandardUniform: rand::distr::Distribution<T>,
{
    std::iter::repeat_with(|| rng.random::<T>())
        .take(n)
        .collect()
}

/// Strictly increasing axis of `n` points starting at `start`, with
/// random spacing in [0.5, 1.5) * `step`.
pub fn random_axis(rng: &mut StdRng, start: f64, step: f64, n: usize) -> Vec<f64> {
    let mut x = start;
    randn::<f64>(rng, n)
        .into_iter()
        .map(|r| {
            let here = x;
            x += step * (0.5 + r);
            here
        })
        .collect()
}

#![allow(clippy::all)] // Clippy will attempt to remove black_box() internals

use criterion::*;
use enginterp::{DeckConfig, EngineDeck, FlightPoint, MultilinearRectilinear, Quantity, Rating};
use gridgen::*;

enum Kind {
    Interp,
    Extrap,
}

macro_rules! bench_grid_specific {
    ($group:ident, $ndims:expr, $gridsize:expr, $size:expr, $kind:expr) => {
        $group.throughput(Throughput::Elements(*$size as u64));

        // Point-by-point through the grid, the way table lookups are made
        $group.bench_with_input(
            BenchmarkId::new(format!("Grid::evaluate {}x{}D", $gridsize, $ndims), $size),
            $size,
            |b, &size| {
                let (grids, z) = gen_grid($ndims, $gridsize, 1e-3);
                let grid = gen_samples(&grids, &z).build().unwrap();

                let m: usize = ((size as f64).powf(1.0 / ($ndims as f64)) + 2.0) as usize;
                let obs = match $kind {
                    Kind::Interp => gen_interp_obs_grid(&grids, m, true),
                    Kind::Extrap => gen_extrap_obs_grid(&grids, m, true),
                };
                let mut out = vec![0.0; size];

                b.iter(|| {
                    black_box({
                        for i in 0..size {
                            out[i] = grid.evaluate(&obs[i]).unwrap();
                        }
                    })
                });
            },
        );

        // Batched through the evaluator directly
        $group.bench_with_input(
            BenchmarkId::new(
                format!("MultilinearRectilinear {}x{}D", $gridsize, $ndims),
                $size,
            ),
            $size,
            |b, &size| {
                let (grids, z) = gen_grid($ndims, $gridsize, 1e-3);

                let m: usize = ((size as f64).powf(1.0 / ($ndims as f64)) + 2.0) as usize;
                let obs = match $kind {
                    Kind::Interp => gen_interp_obs_grid(&grids, m, true),
                    Kind::Extrap => gen_extrap_obs_grid(&grids, m, true),
                };
                let obs_t = transpose(&obs, size);
                let empty: &[f64] = &[];
                let mut obs_s = [empty; $ndims];
                (0..$ndims).for_each(|i| obs_s[i] = &obs_t[i][..]);
                let mut grid_s = [empty; $ndims];
                (0..$ndims).for_each(|i| grid_s[i] = &grids[i][..]);
                let mut out = vec![0.0; size];

                b.iter(|| {
                    black_box({
                        let interpolator: MultilinearRectilinear<'_, _, $ndims> =
                            MultilinearRectilinear::new(grid_s, &z).unwrap();
                        interpolator.interp(&obs_s, &mut out).unwrap()
                    })
                });
            },
        );
    };
}

fn bench_interp(c: &mut Criterion) {
    //
    // Shuffled (un-ordered observation points)
    //
    for gridsize in [10, 100] {
        let mut group = c.benchmark_group(format!("Interp_1D_Shuffled_{gridsize}-grid"));
        for size in [1, 100, 10_000].iter() {
            bench_grid_specific!(group, 1, gridsize, size, Kind::Interp);
        }
        group.finish();
    }

    for gridsize in [10, 100] {
        let mut group = c.benchmark_group(format!("Interp_2D_Shuffled_{gridsize}-grid"));
        for size in [1, 100, 10_000].iter() {
            bench_grid_specific!(group, 2, gridsize, size, Kind::Interp);
        }
        group.finish();
    }

    for gridsize in [10, 20] {
        let mut group = c.benchmark_group(format!("Interp_3D_Shuffled_{gridsize}-grid"));
        for size in [1, 100, 10_000].iter() {
            bench_grid_specific!(group, 3, gridsize, size, Kind::Interp);
        }
        group.finish();
    }

    for gridsize in [5, 10] {
        let mut group = c.benchmark_group(format!("Interp_4D_Shuffled_{gridsize}-grid"));
        for size in [1, 100, 10_000].iter() {
            bench_grid_specific!(group, 4, gridsize, size, Kind::Interp);
        }
        group.finish();
    }
}

fn bench_extrap(c: &mut Criterion) {
    for gridsize in [10] {
        let mut group = c.benchmark_group(format!("Extrap_2D_Shuffled_{gridsize}-grid"));
        for size in [1, 100, 10_000].iter() {
            bench_grid_specific!(group, 2, gridsize, size, Kind::Extrap);
        }
        group.finish();
    }

    for gridsize in [10] {
        let mut group = c.benchmark_group(format!("Extrap_4D_Shuffled_{gridsize}-grid"));
        for size in [1, 100, 10_000].iter() {
            bench_grid_specific!(group, 4, gridsize, size, Kind::Extrap);
        }
        group.finish();
    }
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("Build");
    for (ndims, gridsize) in [(1, 1000), (2, 30), (3, 10), (4, 6)] {
        let (grids, z) = gen_grid(ndims, gridsize, 1e-3);
        let samples = gen_samples(&grids, &z);
        group.throughput(Throughput::Elements(samples.len() as u64));
        group.bench_with_input(
            BenchmarkId::new(format!("Grid::build {}D", ndims), gridsize),
            &samples,
            |b, samples| b.iter(|| black_box(samples.build().unwrap())),
        );
    }
    group.finish();
}

fn bench_deck(c: &mut Criterion) {
    let mut group = c.benchmark_group("EngineDeck");

    let (mut grids, z) = gen_grid(4, 6, 1e-3);
    // Constant throttle, so the table is trilinear
    grids[3] = vec![1.0];
    let z = z[..6 * 6 * 6].to_vec();
    let mut builder = EngineDeck::builder(DeckConfig::default());
    builder
        .insert(Rating::Cruise, Quantity::Sfc, &gen_samples(&grids, &z))
        .unwrap();
    let deck = builder.build().unwrap();

    let inside = FlightPoint::new(33.3, 66.6, 50.0, 1.0);
    let outside = FlightPoint::new(33.3, 66.6, 50.0, 0.9);
    for (name, p) in [("in range", inside), ("out of range", outside)] {
        group.bench_function(format!("value {name}"), |b| {
            b.iter(|| black_box(deck.sfc(Rating::Cruise, &p).unwrap()))
        });
    }
    group.finish();
}

criterion_group!(benches_interp, bench_interp);
criterion_group!(benches_extrap, bench_extrap);
criterion_group!(benches_build, bench_build);
criterion_group!(benches_deck, bench_deck);
criterion_main!(benches_interp, benches_extrap, benches_build, benches_deck);

mod randn {
    use rand::distr::{Distribution, StandardUniform};
    use rand::rngs::StdRng;
    use rand::Rng;
    use rand::SeedableRng;

    /// Fixed random seed to support repeatable testing
    const SEED: [u8; 32] = [
        0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 15, 14, 13, 12, 11, 10, 9, 8, 7,
        6, 5, 4, 3, 2, 1,
    ];

    /// Get a random number generator with a const seed for repeatable testing
    pub fn rng_fixed_seed() -> StdRng {
        StdRng::from_seed(SEED)
    }

    /// Generate `n` random numbers using provided generator
    pub fn randn<T>(rng: &mut StdRng, n: usize) -> Vec<T>
    where
        StandardUniform: Distribution<T>,
    {
        (0..n).map(|_| rng.random::<T>()).collect()
    }
}

mod gridgen {
    use super::randn::*;
    use enginterp::utils::*;
    use enginterp::SampleSet;
    use rand::seq::SliceRandom;

    // Generate a (potentially irregular) grid to interpolate on,
    // and some fake data values.
    pub fn gen_grid(ndims: usize, size: usize, noise: f64) -> (Vec<Vec<f64>>, Vec<f64>) {
        let mut rng = rng_fixed_seed();
        let n = size.pow(ndims as u32);
        let z = randn::<f64>(&mut rng, n);

        let grids: Vec<Vec<f64>> = (0..ndims)
            .map(|_| {
                let mut x = linspace(0.0, 100.0, size);
                if noise > 0.0 {
                    let dx = randn::<f64>(&mut rng, size);
                    (0..size).for_each(|i| x[i] = x[i] + (dx[i] - 0.5) * noise);
                }
                x
            })
            .collect();

        (grids, z)
    }

    // Lay a grid out as scattered sample tuples, in shuffled order.
    pub fn gen_samples(grids: &[Vec<f64>], z: &[f64]) -> SampleSet<f64> {
        let mut rng = rng_fixed_seed();
        let mut rows: Vec<(Vec<f64>, f64)> = meshgrid(grids.iter().collect())
            .into_iter()
            .zip(z.iter().copied())
            .collect();
        rows.shuffle(&mut rng);

        let mut samples = SampleSet::new(grids.len());
        for (coords, v) in rows {
            samples.push(&coords, v).unwrap();
        }
        samples
    }

    // Generate a set of either sequential (scanning) or shuffled
    // observation points that are entirely inside the interpolation grid.
    //
    // `size` is the size per grid, so the total number of points will be size.pow(ndims).
    pub fn gen_interp_obs_grid(grids: &[Vec<f64>], size: usize, shuffled: bool) -> Vec<Vec<f64>> {
        let xobs: Vec<Vec<f64>> = grids
            .iter()
            .map(|g| linspace(g[0], g[g.len() - 1], size))
            .collect();
        obs_points(xobs, shuffled)
    }

    // Same as above, but reaching 10% past each end of every axis.
    pub fn gen_extrap_obs_grid(grids: &[Vec<f64>], size: usize, shuffled: bool) -> Vec<Vec<f64>> {
        let xobs: Vec<Vec<f64>> = grids
            .iter()
            .map(|g| {
                let (lo, hi) = (g[0], g[g.len() - 1]);
                let pad = 0.1 * (hi - lo);
                linspace(lo - pad, hi + pad, size)
            })
            .collect();
        obs_points(xobs, shuffled)
    }

    fn obs_points(xobs: Vec<Vec<f64>>, shuffled: bool) -> Vec<Vec<f64>> {
        let mut rng = rng_fixed_seed();
        let mut points = meshgrid(xobs.iter().collect());
        if shuffled {
            points.shuffle(&mut rng);
        }
        points
    }

    // One column per dimension from the first `n` points
    pub fn transpose(points: &[Vec<f64>], n: usize) -> Vec<Vec<f64>> {
        columns(&points[..n])
    }
}

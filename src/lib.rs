//! Multilinear interpolation of tabulated engine performance data.
//!
//! Measurements come in as scattered tuples over up to four flight condition
//! axes (altitude, Mach, temperature offset, throttle). A [`Grid`] lays them
//! out on a dense rectilinear grid, drops the axes that never vary, and
//! evaluates by linear, bilinear, trilinear or quadrilinear interpolation
//! over what remains. An [`EngineDeck`] holds one grid per engine [`Rating`]
//! and output [`Quantity`], and answers lookups at a [`FlightPoint`].
//!
//! The evaluator itself, [`MultilinearRectilinear`], works directly on
//! strictly increasing axes and a C-ordered value array, and can be used
//! without the grid builder.
// These "needless" range loops are a significant speedup
#![allow(clippy::needless_range_loop)]

pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod multilinear;
pub mod utils;

#[cfg(test)]
pub(crate) mod testing;

pub use config::DeckConfig;
pub use engine::{Axis, EngineDeck, EngineDeckBuilder, FlightPoint, Pollutant, Quantity, Rating};
pub use error::{Error, MalformedSampleSet};
pub use grid::{AxisRange, Bounds, Grid, SampleSet};
pub use multilinear::MultilinearRectilinear;

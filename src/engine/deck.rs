//! A loaded engine deck: one grid per rating and output quantity.
//!
//! ```rust
//! use enginterp::{DeckConfig, EngineDeck, FlightPoint, Quantity, Rating, SampleSet};
//!
//! // Cruise thrust ratio over altitude and Mach, at ISA and full throttle
//! let mut samples = SampleSet::new(4);
//! for (alt, mach, tr) in [(0.0, 0.2, 1.0), (0.0, 0.8, 2.0), (10000.0, 0.2, 3.0), (10000.0, 0.8, 4.0)] {
//!     samples.push(&[alt, mach, 0.0, 1.0], tr).unwrap();
//! }
//!
//! let mut builder = EngineDeck::builder(DeckConfig::default());
//! builder.insert(Rating::Cruise, Quantity::ThrustRatio, &samples).unwrap();
//! let deck = builder.build().unwrap();
//!
//! let tr = deck.thrust_ratio(Rating::Cruise, &FlightPoint::new(5000.0, 0.5, 0.0, 1.0)).unwrap();
//! assert!((tr - 2.5).abs() < 1e-12);
//!
//! // Outside the sampled envelope the deck reports zero
//! let tr = deck.thrust_ratio(Rating::Cruise, &FlightPoint::new(5000.0, 0.5, 10.0, 1.0)).unwrap();
//! assert_eq!(tr, 0.0);
//! ```
use std::collections::BTreeMap;

use tracing::{debug, trace};

use super::{Axis, FlightPoint, Pollutant, Quantity, Rating};
use crate::config::DeckConfig;
use crate::error::Error;
use crate::grid::{Grid, SampleSet};

/// Immutable set of engine tables.
///
/// Lookups outside a table's sampled envelope return `0.0` rather than an
/// extrapolated value; in-range lookups are scaled by the configured
/// correction factor for the quantity.
#[derive(Debug, Clone)]
pub struct EngineDeck {
    tables: BTreeMap<(Rating, Quantity), Grid<f64>>,
    config: DeckConfig,
}

/// Collects tables during the load phase.
#[derive(Debug, Clone, Default)]
pub struct EngineDeckBuilder {
    tables: BTreeMap<(Rating, Quantity), Grid<f64>>,
    config: DeckConfig,
}

impl EngineDeckBuilder {
    /// Empty builder applying `config` to the finished deck.
    pub fn new(config: DeckConfig) -> Self {
        Self {
            tables: BTreeMap::new(),
            config,
        }
    }

    /// Build a grid from `samples` and register it, replacing any previous
    /// table for the same rating and quantity.
    ///
    /// # Errors
    /// * If `samples` does not have one column per [`Axis`]
    /// * If the samples are malformed; the load should be abandoned
    pub fn insert(
        &mut self,
        rating: Rating,
        quantity: Quantity,
        samples: &SampleSet<f64>,
    ) -> Result<&mut Self, Error> {
        if samples.ndims() != Axis::COUNT {
            return Err(Error::DimensionMismatch {
                got: samples.ndims(),
                expected: Axis::COUNT,
            });
        }
        let grid = samples.build()?;
        self.insert_grid(rating, quantity, grid)
    }

    /// Register an already built grid.
    ///
    /// # Errors
    /// * If the grid was not built over the four canonical axes
    pub fn insert_grid(
        &mut self,
        rating: Rating,
        quantity: Quantity,
        grid: Grid<f64>,
    ) -> Result<&mut Self, Error> {
        if grid.ndims() != Axis::COUNT {
            return Err(Error::DimensionMismatch {
                got: grid.ndims(),
                expected: Axis::COUNT,
            });
        }
        debug!(
            %rating,
            %quantity,
            active = ?grid.active_dims(),
            shape = ?grid.shape(),
            "Loaded engine table"
        );
        if self.tables.insert((rating, quantity), grid).is_some() {
            debug!(%rating, %quantity, "Replaced existing engine table");
        }
        Ok(self)
    }

    /// Finish loading.
    ///
    /// # Errors
    /// * If the configuration is invalid
    pub fn build(self) -> Result<EngineDeck, Error> {
        self.config.validate()?;
        debug!(tables = self.tables.len(), "Engine deck ready");
        Ok(EngineDeck {
            tables: self.tables,
            config: self.config,
        })
    }
}

impl EngineDeck {
    /// Start loading a deck.
    pub fn builder(config: DeckConfig) -> EngineDeckBuilder {
        EngineDeckBuilder::new(config)
    }

    /// Table for a rating and quantity, if one was loaded.
    pub fn grid(&self, rating: Rating, quantity: Quantity) -> Option<&Grid<f64>> {
        self.tables.get(&(rating, quantity))
    }

    /// Correction factors applied to lookups.
    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    /// Loaded (rating, quantity) pairs in order.
    pub fn tables(&self) -> impl Iterator<Item = (Rating, Quantity)> + '_ {
        self.tables.keys().copied()
    }

    /// Number of loaded tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Whether no table was loaded.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Look up `quantity` for `rating` at a flight condition.
    ///
    /// Returns `0.0` if the point is outside the sampled envelope on any axis,
    /// including axes the table does not vary along. Otherwise returns the
    /// interpolated value times the configured correction factor.
    ///
    /// # Errors
    /// * If no table was loaded for this rating and quantity
    pub fn value(
        &self,
        rating: Rating,
        quantity: Quantity,
        point: &FlightPoint,
    ) -> Result<f64, Error> {
        let grid = self
            .grid(rating, quantity)
            .ok_or(Error::MissingGrid { rating, quantity })?;
        let p = point.to_array();
        if !grid.in_range(&p)? {
            trace!(%rating, %quantity, ?point, "Flight point outside table envelope");
            return Ok(0.0);
        }
        Ok(grid.evaluate_canonical(&p)? * self.config.correction(quantity))
    }

    /// Thrust ratio at `point`; see [`EngineDeck::value`].
    pub fn thrust_ratio(&self, rating: Rating, point: &FlightPoint) -> Result<f64, Error> {
        self.value(rating, Quantity::ThrustRatio, point)
    }

    /// Specific fuel consumption at `point`; see [`EngineDeck::value`].
    pub fn sfc(&self, rating: Rating, point: &FlightPoint) -> Result<f64, Error> {
        self.value(rating, Quantity::Sfc, point)
    }

    /// Emission index of `pollutant` at `point`; see [`EngineDeck::value`].
    pub fn emission_index(
        &self,
        rating: Rating,
        pollutant: Pollutant,
        point: &FlightPoint,
    ) -> Result<f64, Error> {
        self.value(rating, Quantity::EmissionIndex(pollutant), point)
    }
}

//! Engine performance tables keyed by rating and output quantity.
//!
//! Every table is a [`Grid`](crate::Grid) over the four canonical flight
//! condition axes, in [`Axis`] order. Which of them are actually interpolated
//! depends on the data.

use std::fmt;

pub mod deck;

pub use deck::{EngineDeck, EngineDeckBuilder};

/// Canonical flight condition axes, in the column order tables are given in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Axis {
    Altitude,
    Mach,
    DeltaTemperature,
    Throttle,
}

impl Axis {
    pub const COUNT: usize = 4;
    pub const ALL: [Axis; Axis::COUNT] = [
        Axis::Altitude,
        Axis::Mach,
        Axis::DeltaTemperature,
        Axis::Throttle,
    ];

    /// Column index of this axis.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Engine rating, the operating regime a table was measured for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rating {
    TakeOff,
    /// Automatic power reserve
    Apr,
    Climb,
    /// Maximum continuous
    Continuous,
    Cruise,
    FlightIdle,
    GroundIdle,
}

impl Rating {
    pub const ALL: [Rating; 7] = [
        Rating::TakeOff,
        Rating::Apr,
        Rating::Climb,
        Rating::Continuous,
        Rating::Cruise,
        Rating::FlightIdle,
        Rating::GroundIdle,
    ];
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rating::TakeOff => "take-off",
            Rating::Apr => "APR",
            Rating::Climb => "climb",
            Rating::Continuous => "continuous",
            Rating::Cruise => "cruise",
            Rating::FlightIdle => "flight idle",
            Rating::GroundIdle => "ground idle",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Pollutant {
    NOx,
    CO,
    HC,
    Soot,
    CO2,
    SOx,
    H2O,
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Pollutant::NOx => "NOx",
            Pollutant::CO => "CO",
            Pollutant::HC => "HC",
            Pollutant::Soot => "soot",
            Pollutant::CO2 => "CO2",
            Pollutant::SOx => "SOx",
            Pollutant::H2O => "H2O",
        };
        f.write_str(name)
    }
}

/// Tabulated output quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Quantity {
    /// Thrust over sea-level static thrust
    ThrustRatio,
    /// Specific fuel consumption
    Sfc,
    EmissionIndex(Pollutant),
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::ThrustRatio => f.write_str("thrust ratio"),
            Quantity::Sfc => f.write_str("SFC"),
            Quantity::EmissionIndex(p) => write!(f, "{p} emission index"),
        }
    }
}

/// A flight condition to look tables up at. Units are whatever the tables
/// were loaded in; nothing is converted here.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FlightPoint {
    pub altitude: f64,
    pub mach: f64,
    pub delta_temperature: f64,
    pub throttle: f64,
}

impl FlightPoint {
    /// Flight point from coordinates in canonical axis order.
    pub fn new(altitude: f64, mach: f64, delta_temperature: f64, throttle: f64) -> Self {
        Self {
            altitude,
            mach,
            delta_temperature,
            throttle,
        }
    }

    /// Coordinate along one axis.
    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Altitude => self.altitude,
            Axis::Mach => self.mach,
            Axis::DeltaTemperature => self.delta_temperature,
            Axis::Throttle => self.throttle,
        }
    }

    /// Coordinates in canonical axis order.
    pub fn to_array(&self) -> [f64; Axis::COUNT] {
        Axis::ALL.map(|a| self.get(a))
    }
}

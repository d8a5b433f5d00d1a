use std::fmt;

use uom::si::f64::{Pressure, ThermodynamicTemperature};

use crate::support::{
    steam::Quality,
    units::{SpecificEnthalpy, SpecificEntropy},
};

/// Identifies a point on the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointLabel {
    /// A numbered cycle state, starting at 1 for the condensate.
    State(usize),

    /// A diagram-only saturation point on the heat addition leading to or
    /// from the numbered state, written with a prime (`2'`).
    Auxiliary(usize),
}

impl PointLabel {
    /// Returns the state number this label refers to.
    #[must_use]
    pub fn number(self) -> usize {
        match self {
            Self::State(n) | Self::Auxiliary(n) => n,
        }
    }
}

impl fmt::Display for PointLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::State(n) => write!(f, "{n}"),
            Self::Auxiliary(n) => write!(f, "{n}'"),
        }
    }
}

/// A fully resolved thermodynamic state on the cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatePoint {
    pub label: PointLabel,
    pub pressure: Pressure,
    pub temperature: ThermodynamicTemperature,
    pub enthalpy: SpecificEnthalpy,
    pub entropy: SpecificEntropy,

    /// Vapor quality, present for states on or inside the saturation dome.
    ///
    /// A turbine exhaust that leaves the dome dry reports `x = 1`.
    pub quality: Option<Quality>,
}

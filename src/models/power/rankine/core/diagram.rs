//! Temperature-entropy diagram construction.
//!
//! The cycle path and the saturation dome are built separately: the path
//! depends on a solved cycle, while the dome depends only on the steam table.

mod dome;
mod path;

pub use dome::SaturationDome;
pub use path::{DiagramPath, MAX_RESAMPLES, Marker};

use thiserror::Error;
use uom::si::{
    f64::ThermodynamicTemperature, specific_heat_capacity::kilojoule_per_kilogram_kelvin,
};

use crate::support::{
    constraint::{Constrained, StrictlyPositive},
    steam::{PropertyError, SteamTable},
    units::SpecificEntropy,
};

use super::{CycleResult, PointLabel, StatePoint, Step};

/// Default entropy spacing when resampling supercritical heat addition.
const DEFAULT_ENTROPY_STEP: f64 = 0.1;

/// A point on the T-s plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TsPoint {
    pub entropy: SpecificEntropy,
    pub temperature: ThermodynamicTemperature,
}

impl From<&StatePoint> for TsPoint {
    fn from(point: &StatePoint) -> Self {
        Self {
            entropy: point.entropy,
            temperature: point.temperature,
        }
    }
}

/// Sampling settings for a cycle diagram.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiagramConfig {
    pub dome: SaturationDome,

    /// Entropy spacing for supercritical heat addition, which has no
    /// saturation corners and would otherwise be drawn as a straight line.
    pub entropy_step: Constrained<SpecificEntropy, StrictlyPositive>,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            dome: SaturationDome::default(),
            entropy_step: Constrained::new_unchecked(SpecificEntropy::new::<
                kilojoule_per_kilogram_kelvin,
            >(DEFAULT_ENTROPY_STEP)),
        }
    }
}

/// Errors that can occur while building a cycle diagram.
#[derive(Debug, Error)]
pub enum DiagramError {
    /// A lookup for an auxiliary or resampled path point failed.
    #[error("diagram point {point}: {step} failed")]
    Property {
        point: PointLabel,
        step: Step,

        #[source]
        source: PropertyError,
    },

    /// A process segment indexes a point the result does not contain.
    #[error("segment {from} -> {to} is outside the {points} solved points")]
    Segment {
        from: usize,
        to: usize,
        points: usize,
    },

    /// Resampling a supercritical heat addition would exceed the sample limit.
    #[error("resampling toward point {point} needs more than {limit} samples")]
    TooManySamples { point: PointLabel, limit: u32 },

    /// A saturation dome sample could not be evaluated.
    #[error("saturation dome sampling failed")]
    Dome(#[source] PropertyError),
}

impl DiagramError {
    pub(super) fn at(point: PointLabel, step: Step) -> impl FnOnce(PropertyError) -> Self {
        move |source| Self::Property {
            point,
            step,
            source,
        }
    }
}

/// A cycle path together with the collected saturation dome.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagram {
    pub path: DiagramPath,
    pub liquid_line: Vec<TsPoint>,
    pub vapor_line: Vec<TsPoint>,
}

impl Diagram {
    /// Builds the path for `result` and samples both dome lines.
    ///
    /// # Errors
    ///
    /// Returns a [`DiagramError`] if any path or dome lookup fails.
    pub fn build(
        result: &CycleResult,
        config: &DiagramConfig,
        table: &impl SteamTable,
    ) -> Result<Self, DiagramError> {
        let path = DiagramPath::build(result, config, table)?;
        let liquid_line = config
            .dome
            .liquid_line(table)
            .collect::<Result<_, _>>()
            .map_err(DiagramError::Dome)?;
        let vapor_line = config
            .dome
            .vapor_line(table)
            .collect::<Result<_, _>>()
            .map_err(DiagramError::Dome)?;

        Ok(Self {
            path,
            liquid_line,
            vapor_line,
        })
    }
}

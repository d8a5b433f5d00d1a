//! Ideal Rankine cycle models.
//!
//! This module provides [`twine_core::Model`] implementations for steam power
//! cycles. Each model is a thin adapter over the internal [`core`] module and
//! is generic over the [`SteamTable`] that supplies water properties.
//!
//! - [`SuperheatRankine`]: the 4-point saturated/superheated cycle.
//! - [`ReheatRankine`]: the 6-point single-reheat cycle.
//! - [`RankineCycle`]: any validated [`Layout`].
//! - [`CycleDiagram`]: the T-s diagram of a solved cycle.
//!
//! # Example
//!
//! ```
//! use rankine_models::{
//!     models::power::rankine::{SuperheatBoundary, SuperheatRankine},
//!     support::steam::If97,
//! };
//! use twine_core::Model;
//! use uom::si::ratio::percent;
//!
//! let model = SuperheatRankine::new(If97);
//! let result = model.call(&SuperheatBoundary::default()).unwrap();
//!
//! let efficiency = result.performance.efficiency.get::<percent>();
//! assert!(efficiency > 35.0 && efficiency < 45.0);
//! ```

pub(crate) mod core;

pub use self::core::{
    CycleResult, Diagram, DiagramConfig, DiagramError, DiagramPath, HeatRate, Layout, LayoutError,
    MAX_RESAMPLES, Marker, Performance, PointLabel, ProcessKind, ProcessSegment, ReheatBoundary,
    SaturationDome, SegmentRole, SolveError, Stage, StatePoint, Step, SuperheatBoundary, TsPoint,
    analyze,
};

use twine_core::Model;

use crate::support::steam::SteamTable;

/// Saturated/superheated Rankine cycle: pump, boiler, turbine, condenser.
#[derive(Debug, Clone, Default)]
pub struct SuperheatRankine<T> {
    table: T,
}

impl<T> SuperheatRankine<T> {
    pub fn new(table: T) -> Self {
        Self { table }
    }
}

impl<T: SteamTable> Model for SuperheatRankine<T> {
    type Input = SuperheatBoundary;
    type Output = CycleResult;
    type Error = SolveError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        analyze(&Layout::superheat(input), &self.table)
    }
}

/// Single-reheat Rankine cycle with a high- and a low-pressure turbine.
#[derive(Debug, Clone, Default)]
pub struct ReheatRankine<T> {
    table: T,
}

impl<T> ReheatRankine<T> {
    pub fn new(table: T) -> Self {
        Self { table }
    }
}

impl<T: SteamTable> Model for ReheatRankine<T> {
    type Input = ReheatBoundary;
    type Output = CycleResult;
    type Error = SolveError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        analyze(&Layout::reheat(input), &self.table)
    }
}

/// Rankine cycle driven by an explicit [`Layout`], such as a double reheat.
#[derive(Debug, Clone, Default)]
pub struct RankineCycle<T> {
    table: T,
}

impl<T> RankineCycle<T> {
    pub fn new(table: T) -> Self {
        Self { table }
    }
}

impl<T: SteamTable> Model for RankineCycle<T> {
    type Input = Layout;
    type Output = CycleResult;
    type Error = SolveError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        analyze(input, &self.table)
    }
}

/// Builds the T-s diagram of a solved cycle, including the saturation dome.
#[derive(Debug, Clone, Default)]
pub struct CycleDiagram<T> {
    table: T,
    config: DiagramConfig,
}

impl<T> CycleDiagram<T> {
    pub fn new(table: T, config: DiagramConfig) -> Self {
        Self { table, config }
    }
}

impl<T: SteamTable> Model for CycleDiagram<T> {
    type Input = CycleResult;
    type Output = Diagram;
    type Error = DiagramError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Diagram::build(input, &self.config, &self.table)
    }
}

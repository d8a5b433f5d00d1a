//! Ideal Rankine cycle state-point analysis.
//!
//! A cycle is described by a [`Layout`]: saturated condensate followed by an
//! ordered list of pump, heat addition, and expansion stages. Solving walks
//! the layout once, deriving each state point from its predecessor through
//! [`SteamTable`] lookups, then reduces the points to [`Performance`] metrics.

mod boundary;
mod diagram;
mod layout;
mod performance;
mod process;
mod results;
mod solve;
mod state_point;
mod step;

#[cfg(test)]
mod test_support;

pub use boundary::{ReheatBoundary, SuperheatBoundary};
pub use diagram::{
    Diagram, DiagramConfig, DiagramError, DiagramPath, MAX_RESAMPLES, Marker, SaturationDome,
    TsPoint,
};
pub use layout::{Layout, LayoutError, Stage};
pub use performance::{HeatRate, Performance};
pub use process::{ProcessKind, ProcessSegment, SegmentRole};
pub use results::CycleResult;
pub use solve::SolveError;
pub use state_point::{PointLabel, StatePoint};
pub use step::Step;

use tracing::debug;
use uom::si::ratio::percent;

use crate::support::steam::SteamTable;

/// Solves every state point of `layout` and aggregates the cycle performance.
///
/// # Errors
///
/// Returns a [`SolveError`] naming the first state point and derivation step
/// that could not be evaluated.
pub fn analyze(layout: &Layout, table: &impl SteamTable) -> Result<CycleResult, SolveError> {
    let points = solve::solve(layout, table)?;
    let segments = layout.segments();
    let performance = Performance::aggregate(&points, &segments);

    debug!(
        points = points.len(),
        efficiency_pct = performance.efficiency.get::<percent>(),
        "analyzed rankine cycle"
    );

    Ok(CycleResult {
        points,
        segments,
        performance,
    })
}

//! Results types for Rankine cycle solving.

use super::{Performance, ProcessSegment, StatePoint};

/// Solved state points and performance metrics for a Rankine cycle.
///
/// Segment indices refer to positions in `points`. The last segment is the
/// condenser, running from the final point back to point 1.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleResult {
    /// State points in flow order, starting with the condensate.
    pub points: Vec<StatePoint>,

    /// Process segments in flow order.
    pub segments: Vec<ProcessSegment>,

    pub performance: Performance,
}

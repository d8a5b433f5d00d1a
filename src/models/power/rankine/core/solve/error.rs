use thiserror::Error;

use crate::{
    models::power::rankine::core::{PointLabel, Step},
    support::steam::PropertyError,
};

/// Errors that can occur while solving the cycle state points.
///
/// Every point depends on the one before it, so the first failure aborts the
/// whole solve and no partial point list is returned.
#[derive(Debug, Error)]
pub enum SolveError {
    /// A property lookup or process constraint fell outside the valid domain.
    #[error("state point {point}: {step} failed")]
    Domain {
        /// The point being resolved.
        point: PointLabel,

        /// The derivation step that failed.
        step: Step,

        #[source]
        source: PropertyError,
    },
}

impl SolveError {
    /// Returns a closure that attributes a property error to a point and step.
    pub(in crate::models::power::rankine::core) fn at(
        point: PointLabel,
        step: Step,
    ) -> impl FnOnce(PropertyError) -> Self {
        move |source| Self::Domain {
            point,
            step,
            source,
        }
    }
}

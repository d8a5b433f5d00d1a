//! Cycle performance metrics.

use tracing::warn;
use uom::{
    ConstZero,
    si::{
        f64::Ratio,
        ratio::{percent, ratio},
    },
};

use crate::support::units::SpecificEnthalpy;

use super::{ProcessSegment, SegmentRole, StatePoint};

/// Seconds per hour, converting kJ/kJ into kJ/kWh.
const KJ_PER_KWH: f64 = 3600.0;

/// Specific energy flows and figures of merit for a solved cycle.
///
/// All energies are per unit mass of working fluid.
#[derive(Debug, Clone, PartialEq)]
pub struct Performance {
    /// Enthalpy rise across the pump.
    pub pump_work: SpecificEnthalpy,

    /// Enthalpy drop across each turbine stage, in flow order.
    pub turbine_work: Vec<SpecificEnthalpy>,

    /// Enthalpy rise across every heat addition (boiler and reheaters).
    pub heat_input: SpecificEnthalpy,

    /// Enthalpy drop across the condenser.
    pub heat_rejection: SpecificEnthalpy,

    /// Net work over heat input.
    pub efficiency: Ratio,

    pub heat_rate: HeatRate,
}

impl Performance {
    /// Reduces solved points to performance metrics.
    ///
    /// Each segment's indices must be valid for `points`.
    pub(super) fn aggregate(points: &[StatePoint], segments: &[ProcessSegment]) -> Self {
        let mut pump_work = SpecificEnthalpy::ZERO;
        let mut turbine_work = Vec::new();
        let mut heat_input = SpecificEnthalpy::ZERO;
        let mut heat_rejection = SpecificEnthalpy::ZERO;

        for segment in segments {
            let rise = points[segment.to].enthalpy - points[segment.from].enthalpy;
            match segment.role {
                SegmentRole::Compression => pump_work += rise,
                SegmentRole::HeatAddition => heat_input += rise,
                SegmentRole::Expansion => turbine_work.push(-rise),
                SegmentRole::HeatRejection => heat_rejection -= rise,
            }
        }

        let net_work = turbine_work.iter().copied().sum::<SpecificEnthalpy>() - pump_work;
        let efficiency: Ratio = net_work / heat_input;
        let heat_rate = HeatRate::from_efficiency(efficiency);

        Self {
            pump_work,
            turbine_work,
            heat_input,
            heat_rejection,
            efficiency,
            heat_rate,
        }
    }

    /// Sum of the turbine stage works.
    #[must_use]
    pub fn total_turbine_work(&self) -> SpecificEnthalpy {
        self.turbine_work.iter().copied().sum()
    }

    /// Turbine work less pump work.
    #[must_use]
    pub fn net_work(&self) -> SpecificEnthalpy {
        self.total_turbine_work() - self.pump_work
    }
}

/// Heat input per unit of net work produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeatRate {
    /// The inverse of a positive, finite efficiency.
    Defined(Ratio),

    /// The cycle produces no net work, so no heat rate exists.
    Undefined,
}

impl HeatRate {
    /// Inverts a thermal efficiency.
    ///
    /// Non-positive or non-finite efficiencies give [`HeatRate::Undefined`].
    #[must_use]
    pub fn from_efficiency(efficiency: Ratio) -> Self {
        let eta = efficiency.get::<ratio>();
        if eta.is_finite() && eta > 0.0 {
            Self::Defined(efficiency.recip())
        } else {
            warn!(
                efficiency_pct = efficiency.get::<percent>(),
                "heat rate is undefined for a cycle without positive net work"
            );
            Self::Undefined
        }
    }

    /// Returns the heat rate in kJ of heat per kWh of net work.
    #[must_use]
    pub fn kilojoules_per_kilowatt_hour(self) -> Option<f64> {
        match self {
            Self::Defined(rate) => Some(rate.get::<ratio>() * KJ_PER_KWH),
            Self::Undefined => None,
        }
    }
}

//! The ordered stage list that drives the state-point solver.

use std::iter;

use thiserror::Error;
use uom::si::f64::{Pressure, ThermodynamicTemperature};

use super::{
    ProcessSegment, ReheatBoundary, SegmentRole, SuperheatBoundary, state_point::PointLabel,
};

/// One component the working fluid passes through after leaving the condenser.
///
/// Each stage produces the next state point from the previous one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stage {
    /// Isentropic pump raising the saturated condensate to `outlet_pressure`.
    Pump { outlet_pressure: Pressure },

    /// Isobaric heating to `outlet_temperature` at the inlet pressure.
    Heat {
        outlet_temperature: ThermodynamicTemperature,
    },

    /// Isentropic turbine expanding to `outlet_pressure`.
    Expand { outlet_pressure: Pressure },
}

impl Stage {
    fn role(self) -> SegmentRole {
        match self {
            Self::Pump { .. } => SegmentRole::Compression,
            Self::Heat { .. } => SegmentRole::HeatAddition,
            Self::Expand { .. } => SegmentRole::Expansion,
        }
    }
}

/// Errors that can occur while assembling a custom [`Layout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("the first stage must be the condensate pump")]
    MissingPump,

    #[error("stage {index} is a pump; only the first stage may be")]
    MisplacedPump { index: usize },

    #[error("the cycle needs at least one heat addition")]
    MissingHeatAddition,

    #[error("the last stage must expand to the condenser pressure")]
    OpenCycle,
}

/// An explicit, validated cycle pipeline.
///
/// Point 1 is always saturated liquid at the condenser pressure.
/// Stage `i` (zero-based) produces point `i + 2` from point `i + 1`, and an
/// implicit isobaric condenser closes the cycle from the last point back to
/// point 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    condenser_pressure: Pressure,
    stages: Vec<Stage>,
}

impl Layout {
    /// Creates a layout from a condenser pressure and the stages after it.
    ///
    /// # Errors
    ///
    /// Returns a [`LayoutError`] unless the stages start with the only pump,
    /// include a heat addition, and end by expanding to `condenser_pressure`.
    pub fn new(condenser_pressure: Pressure, stages: Vec<Stage>) -> Result<Self, LayoutError> {
        if !matches!(stages.first(), Some(Stage::Pump { .. })) {
            return Err(LayoutError::MissingPump);
        }

        if let Some(index) = stages
            .iter()
            .skip(1)
            .position(|stage| matches!(stage, Stage::Pump { .. }))
        {
            return Err(LayoutError::MisplacedPump { index: index + 1 });
        }

        if !stages.iter().any(|stage| matches!(stage, Stage::Heat { .. })) {
            return Err(LayoutError::MissingHeatAddition);
        }

        match stages.last() {
            Some(Stage::Expand { outlet_pressure }) if *outlet_pressure == condenser_pressure => {}
            _ => return Err(LayoutError::OpenCycle),
        }

        Ok(Self {
            condenser_pressure,
            stages,
        })
    }

    /// The 4-point saturated/superheated cycle: pump, boiler, turbine.
    #[must_use]
    pub fn superheat(boundary: &SuperheatBoundary) -> Self {
        Self {
            condenser_pressure: boundary.condenser_pressure,
            stages: vec![
                Stage::Pump {
                    outlet_pressure: boundary.boiler_pressure,
                },
                Stage::Heat {
                    outlet_temperature: boundary.max_temperature,
                },
                Stage::Expand {
                    outlet_pressure: boundary.condenser_pressure,
                },
            ],
        }
    }

    /// The 6-point single-reheat cycle: pump, boiler, HP turbine, reheater,
    /// LP turbine.
    #[must_use]
    pub fn reheat(boundary: &ReheatBoundary) -> Self {
        Self {
            condenser_pressure: boundary.condenser_pressure,
            stages: vec![
                Stage::Pump {
                    outlet_pressure: boundary.boiler_pressure,
                },
                Stage::Heat {
                    outlet_temperature: boundary.max_temperature,
                },
                Stage::Expand {
                    outlet_pressure: boundary.reheat_pressure,
                },
                Stage::Heat {
                    outlet_temperature: boundary.max_temperature,
                },
                Stage::Expand {
                    outlet_pressure: boundary.condenser_pressure,
                },
            ],
        }
    }

    #[must_use]
    pub fn condenser_pressure(&self) -> Pressure {
        self.condenser_pressure
    }

    #[must_use]
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Returns the stages paired with the label of the point each produces.
    pub fn labeled_stages(&self) -> impl Iterator<Item = (PointLabel, Stage)> + '_ {
        self.stages
            .iter()
            .enumerate()
            .map(|(index, stage)| (PointLabel::State(index + 2), *stage))
    }

    /// Returns the process segments in flow order, ending with the condenser.
    #[must_use]
    pub fn segments(&self) -> Vec<ProcessSegment> {
        let last = self.stages.len();
        self.stages
            .iter()
            .enumerate()
            .map(|(index, stage)| ProcessSegment::ideal(index, index + 1, stage.role()))
            .chain(iter::once(ProcessSegment::ideal(
                last,
                0,
                SegmentRole::HeatRejection,
            )))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{pressure::bar, thermodynamic_temperature::degree_celsius};

    use crate::models::power::rankine::core::ProcessKind;

    fn bars(value: f64) -> Pressure {
        Pressure::new::<bar>(value)
    }

    fn heat_to(celsius: f64) -> Stage {
        Stage::Heat {
            outlet_temperature: ThermodynamicTemperature::new::<degree_celsius>(celsius),
        }
    }

    #[test]
    fn superheat_segments() {
        let layout = Layout::superheat(&SuperheatBoundary::default());
        let roles: Vec<_> = layout
            .segments()
            .iter()
            .map(|segment| (segment.from, segment.to, segment.role))
            .collect();

        assert_eq!(
            roles,
            vec![
                (0, 1, SegmentRole::Compression),
                (1, 2, SegmentRole::HeatAddition),
                (2, 3, SegmentRole::Expansion),
                (3, 0, SegmentRole::HeatRejection),
            ]
        );
    }

    #[test]
    fn reheat_segments_alternate_heating_and_expansion() {
        let layout = Layout::reheat(&ReheatBoundary::default());
        let segments = layout.segments();

        assert_eq!(segments.len(), 6);
        assert_eq!(segments[3].role, SegmentRole::HeatAddition);
        assert_eq!(segments[4].role, SegmentRole::Expansion);
        assert_eq!(segments[5].kind, ProcessKind::Isobaric);
        assert_eq!(segments[0].kind, ProcessKind::Isentropic);
    }

    #[test]
    fn labels_start_after_the_condensate() {
        let layout = Layout::superheat(&SuperheatBoundary::default());
        let labels: Vec<_> = layout.labeled_stages().map(|(label, _)| label).collect();
        assert_eq!(
            labels,
            vec![
                PointLabel::State(2),
                PointLabel::State(3),
                PointLabel::State(4)
            ]
        );
    }

    #[test]
    fn custom_double_reheat_is_accepted() {
        let layout = Layout::new(
            bars(0.1),
            vec![
                Stage::Pump {
                    outlet_pressure: bars(300.0),
                },
                heat_to(600.0),
                Stage::Expand {
                    outlet_pressure: bars(80.0),
                },
                heat_to(600.0),
                Stage::Expand {
                    outlet_pressure: bars(15.0),
                },
                heat_to(550.0),
                Stage::Expand {
                    outlet_pressure: bars(0.1),
                },
            ],
        )
        .expect("double reheat layout should be valid");

        assert_eq!(layout.segments().len(), 8);
    }

    #[test]
    fn rejects_malformed_layouts() {
        let pump = Stage::Pump {
            outlet_pressure: bars(100.0),
        };
        let expand = Stage::Expand {
            outlet_pressure: bars(0.1),
        };

        assert_eq!(
            Layout::new(bars(0.1), vec![heat_to(500.0), expand]),
            Err(LayoutError::MissingPump)
        );
        assert_eq!(
            Layout::new(bars(0.1), vec![pump, heat_to(500.0), pump, expand]),
            Err(LayoutError::MisplacedPump { index: 2 })
        );
        assert_eq!(
            Layout::new(bars(0.1), vec![pump, expand]),
            Err(LayoutError::MissingHeatAddition)
        );
        assert_eq!(
            Layout::new(bars(0.2), vec![pump, heat_to(500.0), expand]),
            Err(LayoutError::OpenCycle)
        );
        assert_eq!(
            Layout::new(bars(0.1), vec![pump, heat_to(500.0)]),
            Err(LayoutError::OpenCycle)
        );
    }
}

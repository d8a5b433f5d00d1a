use tracing::trace;
use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    ratio::ratio,
};

use crate::{
    models::power::rankine::core::{
        CycleResult, PointLabel, ProcessSegment, SegmentRole, StatePoint, Step,
    },
    support::{
        constraint::UnitInterval,
        steam::{Quality, SteamTable},
        units::{SpecificEnthalpy, SpecificEntropy},
    },
};

use super::{DiagramConfig, DiagramError, TsPoint};

/// A labeled point drawn on the diagram.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub label: PointLabel,
    pub point: TsPoint,
}

/// The closed cycle path on the T-s plane.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramPath {
    /// Path vertices starting and ending at point 1.
    pub polygon: Vec<TsPoint>,

    /// Saturation points where a subcritical heat addition crosses the dome.
    ///
    /// These exist only for drawing and take no part in the energy balance.
    pub auxiliary: Vec<StatePoint>,

    /// Every numbered and auxiliary point, in path order.
    pub markers: Vec<Marker>,
}

impl DiagramPath {
    /// Traces the solved cycle on the T-s plane.
    ///
    /// Subcritical heat additions gain the saturation corners they cross;
    /// supercritical ones are resampled at `config.entropy_step`.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::Property`] if a lookup for an inserted point fails,
    /// [`DiagramError::Segment`] if a segment indexes past `result.points`, and
    /// [`DiagramError::TooManySamples`] if `config.entropy_step` is too fine for
    /// a supercritical heat addition.
    pub fn build(
        result: &CycleResult,
        config: &DiagramConfig,
        table: &impl SteamTable,
    ) -> Result<Self, DiagramError> {
        let mut path = Self {
            polygon: Vec::new(),
            auxiliary: Vec::new(),
            markers: Vec::new(),
        };

        let Some(first) = result.points.first() else {
            return Ok(path);
        };
        path.polygon.push(first.into());
        path.mark(first);

        let critical_pressure = table.critical_point().pressure;
        for segment in &result.segments {
            let (Some(from), Some(to)) =
                (result.points.get(segment.from), result.points.get(segment.to))
            else {
                return Err(DiagramError::Segment {
                    from: segment.from,
                    to: segment.to,
                    points: result.points.len(),
                });
            };

            if segment.role == SegmentRole::HeatAddition {
                if from.pressure >= critical_pressure {
                    let samples = resample(from, to, config.entropy_step.into_inner(), table)?;
                    trace!(
                        from = %from.label,
                        to = %to.label,
                        samples = samples.len(),
                        "resampled supercritical heat addition"
                    );
                    path.polygon.extend(samples);
                } else {
                    for corner in saturation_corners(segment, from, to, table)? {
                        path.polygon.push((&corner).into());
                        path.mark(&corner);
                        path.auxiliary.push(corner);
                    }
                }
            }

            path.polygon.push(to.into());
            if segment.to != 0 {
                path.mark(to);
            }
        }

        Ok(path)
    }

    fn mark(&mut self, point: &StatePoint) {
        self.markers.push(Marker {
            label: point.label,
            point: point.into(),
        });
    }
}

/// Upper bound on resampled points per heat addition.
pub const MAX_RESAMPLES: u32 = 10_000;

/// Points at fixed entropy steps strictly between `from` and `to`.
fn resample(
    from: &StatePoint,
    to: &StatePoint,
    step: SpecificEntropy,
    table: &impl SteamTable,
) -> Result<Vec<TsPoint>, DiagramError> {
    let span = ((to.entropy - from.entropy) / step).get::<ratio>();
    if span > f64::from(MAX_RESAMPLES) {
        return Err(DiagramError::TooManySamples {
            point: to.label,
            limit: MAX_RESAMPLES,
        });
    }

    let pressure = from.pressure;
    (1..=MAX_RESAMPLES)
        .map(|k| from.entropy + step * f64::from(k))
        .take_while(|entropy| *entropy < to.entropy)
        .map(|entropy| {
            table
                .temperature_from_pressure_entropy(pressure, entropy)
                .map(|temperature| TsPoint {
                    entropy,
                    temperature,
                })
                .map_err(DiagramError::at(
                    to.label,
                    Step::TemperatureFromPressureEntropy,
                ))
        })
        .collect()
}

/// Saturated liquid and vapor points bracketed by a subcritical heat addition.
///
/// The liquid corner is labeled after the segment inlet and the vapor corner
/// after its outlet, so boiling between points 2 and 3 yields `2'` and `3'`.
fn saturation_corners(
    segment: &ProcessSegment,
    from: &StatePoint,
    to: &StatePoint,
    table: &impl SteamTable,
) -> Result<Vec<StatePoint>, DiagramError> {
    let pressure = from.pressure;
    let liquid_label = PointLabel::Auxiliary(from.label.number());
    let vapor_label = PointLabel::Auxiliary(to.label.number());
    let brackets = |entropy: SpecificEntropy| from.entropy < entropy && entropy < to.entropy;

    let s_liq = table
        .saturated_liquid_entropy(pressure)
        .map_err(DiagramError::at(liquid_label, Step::SaturatedLiquidEntropy))?;
    let s_vap = table
        .saturated_vapor_entropy(pressure)
        .map_err(DiagramError::at(vapor_label, Step::SaturatedVaporEntropy))?;

    let crosses_liquid = brackets(s_liq);
    let crosses_vapor = brackets(s_vap);
    if !crosses_liquid && !crosses_vapor {
        return Ok(Vec::new());
    }

    trace!(
        from = segment.from,
        to = segment.to,
        crosses_liquid,
        crosses_vapor,
        "heat addition crosses the saturation dome"
    );

    let h_liq = table
        .saturated_liquid_enthalpy(pressure)
        .map_err(DiagramError::at(liquid_label, Step::SaturatedLiquidEnthalpy))?;
    let t_sat = table
        .temperature_from_pressure_enthalpy(pressure, h_liq)
        .map_err(DiagramError::at(
            liquid_label,
            Step::TemperatureFromPressureEnthalpy,
        ))?;

    let mut corners = Vec::with_capacity(2);
    if crosses_liquid {
        corners.push(corner(liquid_label, pressure, t_sat, s_liq, h_liq, UnitInterval::zero()));
    }
    if crosses_vapor {
        let h_vap = table
            .saturated_vapor_enthalpy(pressure)
            .map_err(DiagramError::at(vapor_label, Step::SaturatedVaporEnthalpy))?;
        corners.push(corner(vapor_label, pressure, t_sat, s_vap, h_vap, UnitInterval::one()));
    }

    Ok(corners)
}

fn corner(
    label: PointLabel,
    pressure: Pressure,
    temperature: ThermodynamicTemperature,
    entropy: SpecificEntropy,
    enthalpy: SpecificEnthalpy,
    quality: Quality,
) -> StatePoint {
    StatePoint {
        label,
        pressure,
        temperature,
        enthalpy,
        entropy,
        quality: Some(quality),
    }
}

//! State-point solver.

mod error;

pub use error::SolveError;

use tracing::debug;
use uom::{
    ConstZero,
    si::{
        available_energy::kilojoule_per_kilogram,
        f64::{Pressure, SpecificVolume, ThermodynamicTemperature},
        pressure::bar,
        ratio::ratio,
        specific_heat_capacity::kilojoule_per_kilogram_kelvin,
        thermodynamic_temperature::degree_celsius,
    },
};

use crate::support::{
    constraint::UnitInterval,
    steam::{PropertyError, SteamTable},
    units::{SpecificEnthalpy, SpecificEntropy},
};

use super::{Layout, PointLabel, Stage, StatePoint, Step};

/// Resolves every state point of `layout`, in flow order.
///
/// Point 1 is saturated liquid at the condenser pressure; each following
/// point is derived from its predecessor by the stage that produces it.
///
/// # Errors
///
/// Returns [`SolveError::Domain`] naming the point and derivation step of the
/// first lookup or process constraint that fails.
pub(super) fn solve(
    layout: &Layout,
    table: &impl SteamTable,
) -> Result<Vec<StatePoint>, SolveError> {
    let mut points = Vec::with_capacity(layout.stages().len() + 1);
    let mut inlet = condensate(PointLabel::State(1), layout.condenser_pressure(), table)?;
    trace_point(&inlet);

    for (label, stage) in layout.labeled_stages() {
        let outlet = match stage {
            Stage::Pump { outlet_pressure } => pump(label, &inlet, outlet_pressure, table)?,
            Stage::Heat { outlet_temperature } => heat(label, &inlet, outlet_temperature, table)?,
            Stage::Expand { outlet_pressure } => expand(label, &inlet, outlet_pressure, table)?,
        };
        trace_point(&outlet);
        points.push(inlet);
        inlet = outlet;
    }
    points.push(inlet);

    Ok(points)
}

/// Saturated liquid leaving the condenser.
fn condensate(
    label: PointLabel,
    pressure: Pressure,
    table: &impl SteamTable,
) -> Result<StatePoint, SolveError> {
    let entropy = table
        .saturated_liquid_entropy(pressure)
        .map_err(SolveError::at(label, Step::SaturatedLiquidEntropy))?;
    let enthalpy = table
        .saturated_liquid_enthalpy(pressure)
        .map_err(SolveError::at(label, Step::SaturatedLiquidEnthalpy))?;
    let temperature = table
        .temperature_from_pressure_entropy(pressure, entropy)
        .map_err(SolveError::at(label, Step::TemperatureFromPressureEntropy))?;

    Ok(StatePoint {
        label,
        pressure,
        temperature,
        enthalpy,
        entropy,
        quality: Some(UnitInterval::zero()),
    })
}

/// Isentropic pump treating the condensate as incompressible: `Δh = v·Δp`.
fn pump(
    label: PointLabel,
    inlet: &StatePoint,
    pressure: Pressure,
    table: &impl SteamTable,
) -> Result<StatePoint, SolveError> {
    let rise = pressure - inlet.pressure;
    if !(rise > Pressure::ZERO) {
        return Err(SolveError::at(label, Step::PressureRise)(
            PropertyError::out_of_domain(format!(
                "pump outlet at {} bar does not exceed its inlet at {} bar",
                pressure.get::<bar>(),
                inlet.pressure.get::<bar>(),
            )),
        ));
    }

    let density = table
        .saturated_liquid_density(inlet.pressure)
        .map_err(SolveError::at(label, Step::SaturatedLiquidDensity))?;
    let volume: SpecificVolume = density.recip();
    let enthalpy = inlet.enthalpy + volume * rise;

    let temperature = table
        .temperature_from_pressure_enthalpy(pressure, enthalpy)
        .map_err(SolveError::at(label, Step::TemperatureFromPressureEnthalpy))?;

    Ok(StatePoint {
        label,
        pressure,
        temperature,
        enthalpy,
        entropy: inlet.entropy,
        quality: None,
    })
}

/// Isobaric heating to a set outlet temperature.
fn heat(
    label: PointLabel,
    inlet: &StatePoint,
    temperature: ThermodynamicTemperature,
    table: &impl SteamTable,
) -> Result<StatePoint, SolveError> {
    let pressure = inlet.pressure;
    let enthalpy = table
        .enthalpy_from_pressure_temperature(pressure, temperature)
        .map_err(SolveError::at(label, Step::EnthalpyFromPressureTemperature))?;
    let entropy = table
        .entropy_from_pressure_temperature(pressure, temperature)
        .map_err(SolveError::at(label, Step::EntropyFromPressureTemperature))?;

    Ok(StatePoint {
        label,
        pressure,
        temperature,
        enthalpy,
        entropy,
        quality: None,
    })
}

/// Where an isentropic expansion ends up relative to the saturation dome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outlet {
    Supercritical,
    CompressedLiquid,
    TwoPhase,
    Dry,
}

fn classify_outlet(
    label: PointLabel,
    pressure: Pressure,
    entropy: SpecificEntropy,
    table: &impl SteamTable,
) -> Result<Outlet, SolveError> {
    if pressure >= table.critical_point().pressure {
        return Ok(Outlet::Supercritical);
    }

    let s_vap = table
        .saturated_vapor_entropy(pressure)
        .map_err(SolveError::at(label, Step::SaturatedVaporEntropy))?;
    if entropy >= s_vap {
        return Ok(Outlet::Dry);
    }

    let s_liq = table
        .saturated_liquid_entropy(pressure)
        .map_err(SolveError::at(label, Step::SaturatedLiquidEntropy))?;
    if entropy <= s_liq {
        Ok(Outlet::CompressedLiquid)
    } else {
        Ok(Outlet::TwoPhase)
    }
}

/// Isentropic turbine expanding to a lower pressure.
///
/// A dry outlet reports `x = 1` and skips the quality lookup, which is only
/// valid inside the dome.
fn expand(
    label: PointLabel,
    inlet: &StatePoint,
    pressure: Pressure,
    table: &impl SteamTable,
) -> Result<StatePoint, SolveError> {
    if !(pressure < inlet.pressure) {
        return Err(SolveError::at(label, Step::PressureDrop)(
            PropertyError::out_of_domain(format!(
                "turbine outlet at {} bar is not below its inlet at {} bar",
                pressure.get::<bar>(),
                inlet.pressure.get::<bar>(),
            )),
        ));
    }

    let entropy = inlet.entropy;
    let outlet = classify_outlet(label, pressure, entropy, table)?;

    let temperature = table
        .temperature_from_pressure_entropy(pressure, entropy)
        .map_err(SolveError::at(label, Step::TemperatureFromPressureEntropy))?;

    let (enthalpy, quality) = if outlet == Outlet::TwoPhase {
        let quality = table
            .quality_from_pressure_entropy(pressure, entropy)
            .map_err(SolveError::at(label, Step::QualityFromPressureEntropy))?;
        let enthalpy = table
            .enthalpy_from_pressure_quality(pressure, quality)
            .map_err(SolveError::at(label, Step::EnthalpyFromPressureQuality))?;
        (enthalpy, Some(quality))
    } else {
        let enthalpy = single_phase_enthalpy(label, outlet, pressure, temperature, table)?;
        let quality = (outlet == Outlet::Dry).then(UnitInterval::one);
        if quality.is_some() {
            debug!(point = %label, "turbine exhaust is dry, reporting x = 1");
        }
        (enthalpy, quality)
    };

    Ok(StatePoint {
        label,
        pressure,
        temperature,
        enthalpy,
        entropy,
        quality,
    })
}

/// Enthalpy of an expansion outlet that lies outside the dome.
///
/// Right at a saturation line, `T(p, s)` can round onto the wrong side of the
/// saturation temperature and `h(p, T)` then resolves to the other phase. A
/// dry outlet is bounded below by `hV(p)` and a compressed liquid outlet is
/// bounded above by `hL(p)`.
fn single_phase_enthalpy(
    label: PointLabel,
    outlet: Outlet,
    pressure: Pressure,
    temperature: ThermodynamicTemperature,
    table: &impl SteamTable,
) -> Result<SpecificEnthalpy, SolveError> {
    let enthalpy = table
        .enthalpy_from_pressure_temperature(pressure, temperature)
        .map_err(SolveError::at(label, Step::EnthalpyFromPressureTemperature))?;

    match outlet {
        Outlet::Dry => {
            let h_vap = table
                .saturated_vapor_enthalpy(pressure)
                .map_err(SolveError::at(label, Step::SaturatedVaporEnthalpy))?;
            Ok(if enthalpy < h_vap { h_vap } else { enthalpy })
        }
        Outlet::CompressedLiquid => {
            let h_liq = table
                .saturated_liquid_enthalpy(pressure)
                .map_err(SolveError::at(label, Step::SaturatedLiquidEnthalpy))?;
            Ok(if enthalpy > h_liq { h_liq } else { enthalpy })
        }
        Outlet::Supercritical | Outlet::TwoPhase => Ok(enthalpy),
    }
}

fn trace_point(point: &StatePoint) {
    debug!(
        point = %point.label,
        p_bar = point.pressure.get::<bar>(),
        t_c = point.temperature.get::<degree_celsius>(),
        h_kj_kg = point.enthalpy.get::<kilojoule_per_kilogram>(),
        s_kj_kg_k = point.entropy.get::<kilojoule_per_kilogram_kelvin>(),
        x = ?point.quality.map(|x| x.as_ref().get::<ratio>()),
        "solved state point"
    );
}

//! Plain-text cycle report.

use std::fmt;

use rankine_models::{
    models::power::rankine::{CycleResult, DiagramPath, StatePoint},
    support::units::SpecificEnthalpy,
};
use uom::si::{
    available_energy::kilojoule_per_kilogram, pressure::bar, ratio::percent,
    specific_heat_capacity::kilojoule_per_kilogram_kelvin,
    thermodynamic_temperature::degree_celsius,
};

/// Every point in path order, auxiliary points included, followed by the
/// performance summary.
pub struct Report<'a> {
    result: &'a CycleResult,
    path: &'a DiagramPath,
}

impl<'a> Report<'a> {
    pub fn new(result: &'a CycleResult, path: &'a DiagramPath) -> Self {
        Self { result, path }
    }

    fn points(&self) -> impl Iterator<Item = &'a StatePoint> + '_ {
        self.path.markers.iter().filter_map(|marker| {
            self.result
                .points
                .iter()
                .chain(&self.path.auxiliary)
                .find(|point| point.label == marker.label)
        })
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for point in self.points() {
            write_point(f, point)?;
        }
        write_summary(f, self.result)
    }
}

fn kj(value: SpecificEnthalpy) -> f64 {
    value.get::<kilojoule_per_kilogram>()
}

fn write_point(f: &mut fmt::Formatter<'_>, point: &StatePoint) -> fmt::Result {
    writeln!(f, "\nPoint {}", point.label)?;
    writeln!(f, "  p: {:.1} bar", point.pressure.get::<bar>())?;
    writeln!(f, "  T: {:.1} degC", point.temperature.get::<degree_celsius>())?;
    writeln!(f, "  h: {:.1} kJ/kg", kj(point.enthalpy))?;
    writeln!(
        f,
        "  s: {:.3} kJ/kg K",
        point.entropy.get::<kilojoule_per_kilogram_kelvin>()
    )?;
    if let Some(quality) = point.quality {
        writeln!(f, "  x: {:.1} % dry", quality.as_ref().get::<percent>())?;
    }
    Ok(())
}

fn write_summary(f: &mut fmt::Formatter<'_>, result: &CycleResult) -> fmt::Result {
    let perf = &result.performance;

    writeln!(f, "\nSummary")?;
    writeln!(f, "  Pump work: {:.1} kJ/kg", kj(perf.pump_work))?;

    let staged = perf.turbine_work.len() > 1;
    for (stage, work) in perf.turbine_work.iter().enumerate() {
        if staged {
            writeln!(f, "  Turbine stage {} work: {:.1} kJ/kg", stage + 1, kj(*work))?;
        } else {
            writeln!(f, "  Turbine work: {:.1} kJ/kg", kj(*work))?;
        }
    }
    if staged {
        writeln!(
            f,
            "  Total turbine work: {:.1} kJ/kg",
            kj(perf.total_turbine_work())
        )?;
    }

    writeln!(f, "  Heat input: {:.1} kJ/kg", kj(perf.heat_input))?;
    writeln!(f, "  Heat rejected: {:.1} kJ/kg", kj(perf.heat_rejection))?;
    writeln!(
        f,
        "  Thermal efficiency: {:.1} %",
        perf.efficiency.get::<percent>()
    )?;
    match perf.heat_rate.kilojoules_per_kilowatt_hour() {
        Some(rate) => writeln!(f, "  Heat rate: {rate:.1} kJ/kWh"),
        None => writeln!(f, "  Heat rate: undefined"),
    }
}

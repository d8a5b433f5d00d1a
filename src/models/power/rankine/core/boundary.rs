use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    pressure::bar,
    thermodynamic_temperature::degree_celsius,
};

/// Boundary conditions of the saturated/superheated Rankine cycle.
///
/// The default is a 180 bar boiler raising steam to 540 °C with the
/// condenser held at 0.1 bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuperheatBoundary {
    /// Condenser pressure. The pump draws saturated liquid at this pressure.
    pub condenser_pressure: Pressure,

    /// Boiler pressure, also the pump discharge pressure.
    pub boiler_pressure: Pressure,

    /// Boiler outlet (turbine inlet) temperature.
    pub max_temperature: ThermodynamicTemperature,
}

impl Default for SuperheatBoundary {
    fn default() -> Self {
        Self {
            condenser_pressure: Pressure::new::<bar>(0.1),
            boiler_pressure: Pressure::new::<bar>(180.0),
            max_temperature: ThermodynamicTemperature::new::<degree_celsius>(540.0),
        }
    }
}

/// Boundary conditions of the supercritical Rankine cycle with a single reheat.
///
/// The default is a 350 bar boiler at 600 °C, reheating to 600 °C at 80 bar,
/// with the condenser held at 0.1 bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReheatBoundary {
    /// Condenser pressure. The pump draws saturated liquid at this pressure.
    pub condenser_pressure: Pressure,

    /// Boiler pressure, also the pump discharge pressure.
    pub boiler_pressure: Pressure,

    /// High-pressure turbine exhaust and reheater pressure.
    pub reheat_pressure: Pressure,

    /// Boiler and reheater outlet temperature.
    pub max_temperature: ThermodynamicTemperature,
}

impl Default for ReheatBoundary {
    fn default() -> Self {
        Self {
            condenser_pressure: Pressure::new::<bar>(0.1),
            boiler_pressure: Pressure::new::<bar>(350.0),
            reheat_pressure: Pressure::new::<bar>(80.0),
            max_temperature: ThermodynamicTemperature::new::<degree_celsius>(600.0),
        }
    }
}

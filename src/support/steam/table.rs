use uom::si::{
    f64::{MassDensity, Pressure, Ratio, ThermodynamicTemperature},
    pressure::bar,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    constraint::{Constrained, UnitInterval},
    units::{SpecificEnthalpy, SpecificEntropy},
};

use super::PropertyError;

/// Vapor mass fraction of a liquid-vapor mixture, always within `[0, 1]`.
pub type Quality = Constrained<Ratio, UnitInterval>;

/// Pressure and temperature at which the liquid and vapor phases become
/// indistinguishable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CriticalPoint {
    pub pressure: Pressure,
    pub temperature: ThermodynamicTemperature,
}

impl CriticalPoint {
    /// Critical point of water as given by IAPWS-IF97.
    #[must_use]
    pub fn water() -> Self {
        Self {
            pressure: Pressure::new::<bar>(220.64),
            temperature: ThermodynamicTemperature::new::<kelvin>(647.096),
        }
    }
}

/// Equilibrium property lookups for water and steam.
///
/// Each lookup takes two independent state variables (or one, along the
/// saturation lines) and returns a dependent property.
/// Implementations are pure: the same inputs always yield the same outputs.
///
/// # Errors
///
/// Every lookup returns [`PropertyError::OutOfDomain`] when its inputs fall
/// outside the physically valid region, such as a saturation lookup above the
/// critical pressure or an entropy outside the two-phase region when asking
/// for a quality.
pub trait SteamTable {
    /// Returns the critical point bounding all saturation lookups.
    fn critical_point(&self) -> CriticalPoint {
        CriticalPoint::water()
    }

    fn saturated_liquid_entropy(&self, pressure: Pressure)
    -> Result<SpecificEntropy, PropertyError>;

    fn saturated_liquid_enthalpy(
        &self,
        pressure: Pressure,
    ) -> Result<SpecificEnthalpy, PropertyError>;

    fn saturated_vapor_enthalpy(&self, pressure: Pressure)
    -> Result<SpecificEnthalpy, PropertyError>;

    fn saturated_vapor_entropy(&self, pressure: Pressure) -> Result<SpecificEntropy, PropertyError>;

    fn saturated_liquid_density(&self, pressure: Pressure) -> Result<MassDensity, PropertyError>;

    fn temperature_from_pressure_entropy(
        &self,
        pressure: Pressure,
        entropy: SpecificEntropy,
    ) -> Result<ThermodynamicTemperature, PropertyError>;

    fn temperature_from_pressure_enthalpy(
        &self,
        pressure: Pressure,
        enthalpy: SpecificEnthalpy,
    ) -> Result<ThermodynamicTemperature, PropertyError>;

    fn enthalpy_from_pressure_temperature(
        &self,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<SpecificEnthalpy, PropertyError>;

    fn entropy_from_pressure_temperature(
        &self,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<SpecificEntropy, PropertyError>;

    /// Returns the quality of a two-phase mixture.
    ///
    /// Only valid between the saturated liquid and saturated vapor entropies
    /// at `pressure`.
    fn quality_from_pressure_entropy(
        &self,
        pressure: Pressure,
        entropy: SpecificEntropy,
    ) -> Result<Quality, PropertyError>;

    fn enthalpy_from_pressure_quality(
        &self,
        pressure: Pressure,
        quality: Quality,
    ) -> Result<SpecificEnthalpy, PropertyError>;

    fn saturated_liquid_entropy_at_temperature(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<SpecificEntropy, PropertyError>;

    fn saturated_vapor_entropy_at_temperature(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<SpecificEntropy, PropertyError>;
}

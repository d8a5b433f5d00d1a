//! CoolProp-backed steam table.

mod error;

use std::sync::{Mutex, MutexGuard};

use rfluids::{
    io::{FluidInputPair, FluidParam},
    native::AbstractState,
};
use uom::si::{
    available_energy::joule_per_kilogram,
    f64::{MassDensity, Pressure, Ratio, ThermodynamicTemperature},
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
    ratio::ratio,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    constraint::UnitInterval,
    units::{SpecificEnthalpy, SpecificEntropy},
};

use super::{PropertyError, Quality, SteamTable};

pub use error::CoolPropError;

/// A steam table backed by `CoolProp`'s IAPWS-95 water formulation.
///
/// Saturation lookups above the critical point are rejected before reaching
/// `CoolProp`, so they fail the same way as with [`If97`](super::If97).
#[cfg_attr(docsrs, doc(cfg(feature = "coolprop")))]
pub struct CoolPropSteam {
    state: Mutex<AbstractState>,
}

impl CoolPropSteam {
    const BACKEND: &'static str = "HEOS";
    const FLUID: &'static str = "Water";

    /// Constructs a new CoolProp-backed steam table.
    ///
    /// # Errors
    ///
    /// Returns [`CoolPropError`] if the underlying `AbstractState` cannot be
    /// created.
    pub fn new() -> Result<Self, CoolPropError> {
        let state = AbstractState::new(Self::BACKEND, Self::FLUID)?;
        Ok(Self {
            state: Mutex::new(state),
        })
    }

    /// Locks the `AbstractState` and updates it from an input pair.
    fn update(
        &self,
        pair: FluidInputPair,
        first: f64,
        second: f64,
    ) -> Result<MutexGuard<'_, AbstractState>, CoolPropError> {
        let mut state = self.state.lock()?;
        state.update(pair, first, second)?;
        Ok(state)
    }

    fn output(
        &self,
        pair: FluidInputPair,
        first: f64,
        second: f64,
        param: FluidParam,
    ) -> Result<f64, PropertyError> {
        let state = self.update(pair, first, second)?;
        let value = state.keyed_output(param).map_err(CoolPropError::Rfluids)?;
        Ok(value)
    }

    fn saturated(
        &self,
        pressure: Pressure,
        quality: f64,
        param: FluidParam,
    ) -> Result<f64, PropertyError> {
        let critical = self.critical_point().pressure;
        if pressure > critical {
            return Err(PropertyError::out_of_domain(format!(
                "no saturation state at {} Pa, above the critical pressure",
                pressure.get::<pascal>()
            )));
        }
        self.output(FluidInputPair::PQ, pressure.get::<pascal>(), quality, param)
    }

    fn saturated_at(
        &self,
        temperature: ThermodynamicTemperature,
        quality: f64,
        param: FluidParam,
    ) -> Result<f64, PropertyError> {
        let critical = self.critical_point().temperature;
        if temperature > critical {
            return Err(PropertyError::out_of_domain(format!(
                "no saturation state at {} K, above the critical temperature",
                temperature.get::<kelvin>()
            )));
        }
        self.output(FluidInputPair::QT, quality, temperature.get::<kelvin>(), param)
    }
}

impl SteamTable for CoolPropSteam {
    fn saturated_liquid_entropy(
        &self,
        pressure: Pressure,
    ) -> Result<SpecificEntropy, PropertyError> {
        let s = self.saturated(pressure, 0.0, FluidParam::SMass)?;
        Ok(SpecificEntropy::new::<joule_per_kilogram_kelvin>(s))
    }

    fn saturated_liquid_enthalpy(
        &self,
        pressure: Pressure,
    ) -> Result<SpecificEnthalpy, PropertyError> {
        let h = self.saturated(pressure, 0.0, FluidParam::HMass)?;
        Ok(SpecificEnthalpy::new::<joule_per_kilogram>(h))
    }

    fn saturated_vapor_enthalpy(
        &self,
        pressure: Pressure,
    ) -> Result<SpecificEnthalpy, PropertyError> {
        let h = self.saturated(pressure, 1.0, FluidParam::HMass)?;
        Ok(SpecificEnthalpy::new::<joule_per_kilogram>(h))
    }

    fn saturated_vapor_entropy(&self, pressure: Pressure) -> Result<SpecificEntropy, PropertyError> {
        let s = self.saturated(pressure, 1.0, FluidParam::SMass)?;
        Ok(SpecificEntropy::new::<joule_per_kilogram_kelvin>(s))
    }

    fn saturated_liquid_density(&self, pressure: Pressure) -> Result<MassDensity, PropertyError> {
        let rho = self.saturated(pressure, 0.0, FluidParam::DMass)?;
        Ok(MassDensity::new::<kilogram_per_cubic_meter>(rho))
    }

    fn temperature_from_pressure_entropy(
        &self,
        pressure: Pressure,
        entropy: SpecificEntropy,
    ) -> Result<ThermodynamicTemperature, PropertyError> {
        let t = self.output(
            FluidInputPair::PSMass,
            pressure.get::<pascal>(),
            entropy.get::<joule_per_kilogram_kelvin>(),
            FluidParam::T,
        )?;
        Ok(ThermodynamicTemperature::new::<kelvin>(t))
    }

    fn temperature_from_pressure_enthalpy(
        &self,
        pressure: Pressure,
        enthalpy: SpecificEnthalpy,
    ) -> Result<ThermodynamicTemperature, PropertyError> {
        let t = self.output(
            FluidInputPair::HMassP,
            enthalpy.get::<joule_per_kilogram>(),
            pressure.get::<pascal>(),
            FluidParam::T,
        )?;
        Ok(ThermodynamicTemperature::new::<kelvin>(t))
    }

    fn enthalpy_from_pressure_temperature(
        &self,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<SpecificEnthalpy, PropertyError> {
        let h = self.output(
            FluidInputPair::PT,
            pressure.get::<pascal>(),
            temperature.get::<kelvin>(),
            FluidParam::HMass,
        )?;
        Ok(SpecificEnthalpy::new::<joule_per_kilogram>(h))
    }

    fn entropy_from_pressure_temperature(
        &self,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<SpecificEntropy, PropertyError> {
        let s = self.output(
            FluidInputPair::PT,
            pressure.get::<pascal>(),
            temperature.get::<kelvin>(),
            FluidParam::SMass,
        )?;
        Ok(SpecificEntropy::new::<joule_per_kilogram_kelvin>(s))
    }

    fn quality_from_pressure_entropy(
        &self,
        pressure: Pressure,
        entropy: SpecificEntropy,
    ) -> Result<Quality, PropertyError> {
        let x = self.output(
            FluidInputPair::PSMass,
            pressure.get::<pascal>(),
            entropy.get::<joule_per_kilogram_kelvin>(),
            FluidParam::Q,
        )?;
        // CoolProp reports -1 for single-phase states.
        UnitInterval::new(Ratio::new::<ratio>(x)).map_err(|_| {
            PropertyError::out_of_domain(format!(
                "s = {} J/kg·K is outside the two-phase region at {} Pa",
                entropy.get::<joule_per_kilogram_kelvin>(),
                pressure.get::<pascal>(),
            ))
        })
    }

    fn enthalpy_from_pressure_quality(
        &self,
        pressure: Pressure,
        quality: Quality,
    ) -> Result<SpecificEnthalpy, PropertyError> {
        let h = self.saturated(pressure, quality.as_ref().get::<ratio>(), FluidParam::HMass)?;
        Ok(SpecificEnthalpy::new::<joule_per_kilogram>(h))
    }

    fn saturated_liquid_entropy_at_temperature(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<SpecificEntropy, PropertyError> {
        let s = self.saturated_at(temperature, 0.0, FluidParam::SMass)?;
        Ok(SpecificEntropy::new::<joule_per_kilogram_kelvin>(s))
    }

    fn saturated_vapor_entropy_at_temperature(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<SpecificEntropy, PropertyError> {
        let s = self.saturated_at(temperature, 1.0, FluidParam::SMass)?;
        Ok(SpecificEntropy::new::<joule_per_kilogram_kelvin>(s))
    }
}

// CoolPropSteam must be Send + Sync so it can back a shared model.
// rfluids serializes CoolProp FFI calls; the local Mutex keeps each
// update/query pair atomic.
#[allow(dead_code)]
const _: () = {
    fn assert_send_sync<T: Send + Sync>() {}
    fn check() {
        assert_send_sync::<CoolPropSteam>();
    }
};

use std::cell::Cell;

use uom::si::{
    available_energy::kilojoule_per_kilogram,
    f64::{MassDensity, Pressure, Ratio, ThermodynamicTemperature},
    mass_density::kilogram_per_cubic_meter,
    pressure::bar,
    ratio::ratio,
    specific_heat_capacity::kilojoule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    constraint::UnitInterval,
    steam::{CriticalPoint, PropertyError, Quality, SteamTable},
    units::{SpecificEnthalpy, SpecificEntropy},
};

const T_ZERO: f64 = 273.15;
const CP_LIQUID: f64 = 4.18;
const CP_VAPOR: f64 = 2.0;
const LIQUID_VOLUME: f64 = 0.001;
const LATENT_HEAT: f64 = 2400.0;
const P_NORMAL_BOILING: f64 = 1.01325;
const T_NORMAL_BOILING: f64 = 373.15;
const CLAPEYRON_SLOPE: f64 = 4900.0;
const P_CRITICAL: f64 = 220.64;

/// A closed-form steam table whose every lookup is exactly invertible.
///
/// - Liquid: incompressible, `v = 0.001 m³/kg`, `cp = 4.18 kJ/kg·K`, with
///   enthalpy `cp·(T − 273.15) + v·p` and entropy `cp·ln(T / 273.15)`.
/// - Saturation: Clausius-Clapeyron through 100 °C at 1.01325 bar.
/// - Latent heat: a constant 2400 kJ/kg.
/// - Vapor: `cp = 2.0 kJ/kg·K` above the saturation temperature.
///
/// Units inside are bar, K, kJ/kg and kJ/kg·K.
#[derive(Debug, Default)]
pub(super) struct FixtureTable {
    quality_lookups: Cell<usize>,
}

impl FixtureTable {
    /// Number of quality lookups made so far.
    pub(super) fn quality_lookups(&self) -> usize {
        self.quality_lookups.get()
    }

    /// Saturation temperature in K.
    pub(super) fn t_sat(p: f64) -> f64 {
        1.0 / (1.0 / T_NORMAL_BOILING - (p / P_NORMAL_BOILING).ln() / CLAPEYRON_SLOPE)
    }

    pub(super) fn s_liq(p: f64) -> f64 {
        CP_LIQUID * (Self::t_sat(p) / T_ZERO).ln()
    }

    pub(super) fn s_vap(p: f64) -> f64 {
        Self::s_liq(p) + LATENT_HEAT / Self::t_sat(p)
    }

    pub(super) fn h_liq(p: f64) -> f64 {
        CP_LIQUID * (Self::t_sat(p) - T_ZERO) + Self::flow_work(p)
    }

    fn h_vap(p: f64) -> f64 {
        Self::h_liq(p) + LATENT_HEAT
    }

    /// `v·p` in kJ/kg for `p` in bar.
    fn flow_work(p: f64) -> f64 {
        LIQUID_VOLUME * p * 100.0
    }

    fn pressure(pressure: Pressure) -> Result<f64, PropertyError> {
        let p = pressure.get::<bar>();
        if p.is_finite() && p > 0.0 {
            Ok(p)
        } else {
            Err(PropertyError::out_of_domain(format!("pressure {p} bar")))
        }
    }

    fn saturation_pressure(pressure: Pressure) -> Result<f64, PropertyError> {
        let p = Self::pressure(pressure)?;
        if p > P_CRITICAL {
            return Err(PropertyError::out_of_domain(format!(
                "no saturation state at {p} bar"
            )));
        }
        Ok(p)
    }

    fn saturation_temperature(temperature: ThermodynamicTemperature) -> Result<f64, PropertyError> {
        let t = temperature.get::<kelvin>();
        if (T_ZERO..=Self::t_sat(P_CRITICAL)).contains(&t) {
            Ok(t)
        } else {
            Err(PropertyError::out_of_domain(format!(
                "no saturation state at {t} K"
            )))
        }
    }

    fn temperature_ps(p: f64, s: f64) -> f64 {
        if s <= Self::s_liq(p) {
            T_ZERO * (s / CP_LIQUID).exp()
        } else if s <= Self::s_vap(p) {
            Self::t_sat(p)
        } else {
            Self::t_sat(p) * ((s - Self::s_vap(p)) / CP_VAPOR).exp()
        }
    }
}

fn enthalpy(value: f64) -> SpecificEnthalpy {
    SpecificEnthalpy::new::<kilojoule_per_kilogram>(value)
}

fn entropy(value: f64) -> SpecificEntropy {
    SpecificEntropy::new::<kilojoule_per_kilogram_kelvin>(value)
}

fn temperature(value: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<kelvin>(value)
}

impl SteamTable for FixtureTable {
    fn critical_point(&self) -> CriticalPoint {
        CriticalPoint {
            pressure: Pressure::new::<bar>(P_CRITICAL),
            temperature: temperature(Self::t_sat(P_CRITICAL)),
        }
    }

    fn saturated_liquid_entropy(
        &self,
        pressure: Pressure,
    ) -> Result<SpecificEntropy, PropertyError> {
        Self::saturation_pressure(pressure).map(|p| entropy(Self::s_liq(p)))
    }

    fn saturated_liquid_enthalpy(
        &self,
        pressure: Pressure,
    ) -> Result<SpecificEnthalpy, PropertyError> {
        Self::saturation_pressure(pressure).map(|p| enthalpy(Self::h_liq(p)))
    }

    fn saturated_vapor_enthalpy(
        &self,
        pressure: Pressure,
    ) -> Result<SpecificEnthalpy, PropertyError> {
        Self::saturation_pressure(pressure).map(|p| enthalpy(Self::h_vap(p)))
    }

    fn saturated_vapor_entropy(&self, pressure: Pressure) -> Result<SpecificEntropy, PropertyError> {
        Self::saturation_pressure(pressure).map(|p| entropy(Self::s_vap(p)))
    }

    fn saturated_liquid_density(&self, pressure: Pressure) -> Result<MassDensity, PropertyError> {
        Self::saturation_pressure(pressure)?;
        Ok(MassDensity::new::<kilogram_per_cubic_meter>(
            1.0 / LIQUID_VOLUME,
        ))
    }

    fn temperature_from_pressure_entropy(
        &self,
        pressure: Pressure,
        entropy: SpecificEntropy,
    ) -> Result<ThermodynamicTemperature, PropertyError> {
        let p = Self::pressure(pressure)?;
        let s = entropy.get::<kilojoule_per_kilogram_kelvin>();
        Ok(temperature(Self::temperature_ps(p, s)))
    }

    fn temperature_from_pressure_enthalpy(
        &self,
        pressure: Pressure,
        enthalpy: SpecificEnthalpy,
    ) -> Result<ThermodynamicTemperature, PropertyError> {
        let p = Self::pressure(pressure)?;
        let h = enthalpy.get::<kilojoule_per_kilogram>();
        let t = if h <= Self::h_liq(p) {
            T_ZERO + (h - Self::flow_work(p)) / CP_LIQUID
        } else if h <= Self::h_vap(p) {
            Self::t_sat(p)
        } else {
            Self::t_sat(p) + (h - Self::h_vap(p)) / CP_VAPOR
        };
        Ok(temperature(t))
    }

    fn enthalpy_from_pressure_temperature(
        &self,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<SpecificEnthalpy, PropertyError> {
        let p = Self::pressure(pressure)?;
        let t = temperature.get::<kelvin>();
        let h = if t <= Self::t_sat(p) {
            CP_LIQUID * (t - T_ZERO) + Self::flow_work(p)
        } else {
            Self::h_vap(p) + CP_VAPOR * (t - Self::t_sat(p))
        };
        Ok(enthalpy(h))
    }

    fn entropy_from_pressure_temperature(
        &self,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<SpecificEntropy, PropertyError> {
        let p = Self::pressure(pressure)?;
        let t = temperature.get::<kelvin>();
        let s = if t <= Self::t_sat(p) {
            CP_LIQUID * (t / T_ZERO).ln()
        } else {
            Self::s_vap(p) + CP_VAPOR * (t / Self::t_sat(p)).ln()
        };
        Ok(entropy(s))
    }

    fn quality_from_pressure_entropy(
        &self,
        pressure: Pressure,
        entropy: SpecificEntropy,
    ) -> Result<Quality, PropertyError> {
        self.quality_lookups.set(self.quality_lookups.get() + 1);
        let p = Self::saturation_pressure(pressure)?;
        let s = entropy.get::<kilojoule_per_kilogram_kelvin>();
        let x = (s - Self::s_liq(p)) / (Self::s_vap(p) - Self::s_liq(p));
        UnitInterval::new(Ratio::new::<ratio>(x))
            .map_err(|_| PropertyError::out_of_domain(format!("quality {x} at {p} bar")))
    }

    fn enthalpy_from_pressure_quality(
        &self,
        pressure: Pressure,
        quality: Quality,
    ) -> Result<SpecificEnthalpy, PropertyError> {
        let p = Self::saturation_pressure(pressure)?;
        let x = quality.as_ref().get::<ratio>();
        Ok(enthalpy(Self::h_liq(p) + x * LATENT_HEAT))
    }

    fn saturated_liquid_entropy_at_temperature(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<SpecificEntropy, PropertyError> {
        let t = Self::saturation_temperature(temperature)?;
        Ok(entropy(CP_LIQUID * (t / T_ZERO).ln()))
    }

    fn saturated_vapor_entropy_at_temperature(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<SpecificEntropy, PropertyError> {
        let t = Self::saturation_temperature(temperature)?;
        Ok(entropy(CP_LIQUID * (t / T_ZERO).ln() + LATENT_HEAT / t))
    }
}

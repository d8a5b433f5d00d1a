//! IAPWS-IF97 steam table backed by the `seuif97` crate.

use seuif97::{OD, OH, OS, OT, OX, ph, ps, pt, px, tx};
use uom::si::{
    available_energy::kilojoule_per_kilogram,
    f64::{MassDensity, Pressure, Ratio, ThermodynamicTemperature},
    mass_density::kilogram_per_cubic_meter,
    pressure::{bar, megapascal},
    ratio::ratio,
    specific_heat_capacity::kilojoule_per_kilogram_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::{
    constraint::UnitInterval,
    units::{SpecificEnthalpy, SpecificEntropy},
};

use super::{PropertyError, Quality, SteamTable};

/// Upper pressure limit of regions 1 to 3.
const MAX_PRESSURE_MPA: f64 = 100.0;

/// Upper temperature limit of region 2.
const MAX_TEMPERATURE_C: f64 = 800.0;

/// The IAPWS-IF97 industrial formulation for water and steam.
///
/// Lookups delegate to [`seuif97`], which works in MPa, °C, kJ/kg and
/// kJ/kg·K; conversion happens at this boundary.
/// The high-temperature region 5 (above 800 °C) is not supported.
///
/// A lookup that `seuif97` cannot evaluate yields a non-finite value, which is
/// reported as [`PropertyError::OutOfDomain`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct If97;

impl If97 {
    fn pressure(pressure: Pressure) -> Result<f64, PropertyError> {
        let p = pressure.get::<megapascal>();
        if p.is_finite() && p > 0.0 && p <= MAX_PRESSURE_MPA {
            Ok(p)
        } else {
            Err(PropertyError::out_of_domain(format!(
                "pressure {} bar is outside (0, {}] bar",
                pressure.get::<bar>(),
                MAX_PRESSURE_MPA * 10.0,
            )))
        }
    }

    fn saturation_pressure(&self, pressure: Pressure) -> Result<f64, PropertyError> {
        let critical = self.critical_point().pressure;
        if pressure > critical {
            return Err(PropertyError::out_of_domain(format!(
                "no saturation state at {} bar, above the critical pressure of {} bar",
                pressure.get::<bar>(),
                critical.get::<bar>(),
            )));
        }
        Self::pressure(pressure)
    }

    fn temperature(temperature: ThermodynamicTemperature) -> Result<f64, PropertyError> {
        let t = temperature.get::<degree_celsius>();
        if t.is_finite() && (0.0..=MAX_TEMPERATURE_C).contains(&t) {
            Ok(t)
        } else {
            Err(PropertyError::out_of_domain(format!(
                "temperature {t} °C is outside [0, {MAX_TEMPERATURE_C}] °C"
            )))
        }
    }

    fn saturation_temperature(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<f64, PropertyError> {
        let critical = self.critical_point().temperature;
        if temperature > critical {
            return Err(PropertyError::out_of_domain(format!(
                "no saturation state at {} °C, above the critical temperature of {} °C",
                temperature.get::<degree_celsius>(),
                critical.get::<degree_celsius>(),
            )));
        }
        Self::temperature(temperature)
    }
}

/// Rejects the non-finite values `seuif97` returns outside its domain.
fn checked(value: f64, lookup: impl FnOnce() -> String) -> Result<f64, PropertyError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PropertyError::out_of_domain(format!(
            "IF97 could not evaluate {}",
            lookup()
        )))
    }
}

fn enthalpy(value: f64) -> SpecificEnthalpy {
    SpecificEnthalpy::new::<kilojoule_per_kilogram>(value)
}

fn entropy(value: f64) -> SpecificEntropy {
    SpecificEntropy::new::<kilojoule_per_kilogram_kelvin>(value)
}

impl SteamTable for If97 {
    fn saturated_liquid_entropy(
        &self,
        pressure: Pressure,
    ) -> Result<SpecificEntropy, PropertyError> {
        let p = self.saturation_pressure(pressure)?;
        checked(px(p, 0.0, OS), || format!("sL at {p} MPa")).map(entropy)
    }

    fn saturated_liquid_enthalpy(
        &self,
        pressure: Pressure,
    ) -> Result<SpecificEnthalpy, PropertyError> {
        let p = self.saturation_pressure(pressure)?;
        checked(px(p, 0.0, OH), || format!("hL at {p} MPa")).map(enthalpy)
    }

    fn saturated_vapor_enthalpy(
        &self,
        pressure: Pressure,
    ) -> Result<SpecificEnthalpy, PropertyError> {
        let p = self.saturation_pressure(pressure)?;
        checked(px(p, 1.0, OH), || format!("hV at {p} MPa")).map(enthalpy)
    }

    fn saturated_vapor_entropy(&self, pressure: Pressure) -> Result<SpecificEntropy, PropertyError> {
        let p = self.saturation_pressure(pressure)?;
        checked(px(p, 1.0, OS), || format!("sV at {p} MPa")).map(entropy)
    }

    fn saturated_liquid_density(&self, pressure: Pressure) -> Result<MassDensity, PropertyError> {
        let p = self.saturation_pressure(pressure)?;
        let rho = checked(px(p, 0.0, OD), || format!("rhoL at {p} MPa"))?;
        Ok(MassDensity::new::<kilogram_per_cubic_meter>(rho))
    }

    fn temperature_from_pressure_entropy(
        &self,
        pressure: Pressure,
        entropy: SpecificEntropy,
    ) -> Result<ThermodynamicTemperature, PropertyError> {
        let p = Self::pressure(pressure)?;
        let s = entropy.get::<kilojoule_per_kilogram_kelvin>();
        let t = checked(ps(p, s, OT), || format!("T at {p} MPa, s = {s} kJ/kg·K"))?;
        Ok(ThermodynamicTemperature::new::<degree_celsius>(t))
    }

    fn temperature_from_pressure_enthalpy(
        &self,
        pressure: Pressure,
        enthalpy: SpecificEnthalpy,
    ) -> Result<ThermodynamicTemperature, PropertyError> {
        let p = Self::pressure(pressure)?;
        let h = enthalpy.get::<kilojoule_per_kilogram>();
        let t = checked(ph(p, h, OT), || format!("T at {p} MPa, h = {h} kJ/kg"))?;
        Ok(ThermodynamicTemperature::new::<degree_celsius>(t))
    }

    fn enthalpy_from_pressure_temperature(
        &self,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<SpecificEnthalpy, PropertyError> {
        let p = Self::pressure(pressure)?;
        let t = Self::temperature(temperature)?;
        checked(pt(p, t, OH), || format!("h at {p} MPa, {t} °C")).map(enthalpy)
    }

    fn entropy_from_pressure_temperature(
        &self,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<SpecificEntropy, PropertyError> {
        let p = Self::pressure(pressure)?;
        let t = Self::temperature(temperature)?;
        checked(pt(p, t, OS), || format!("s at {p} MPa, {t} °C")).map(entropy)
    }

    fn quality_from_pressure_entropy(
        &self,
        pressure: Pressure,
        entropy: SpecificEntropy,
    ) -> Result<Quality, PropertyError> {
        let p = self.saturation_pressure(pressure)?;
        let s = entropy.get::<kilojoule_per_kilogram_kelvin>();
        let x = checked(ps(p, s, OX), || format!("x at {p} MPa, s = {s} kJ/kg·K"))?;
        UnitInterval::new(Ratio::new::<ratio>(x)).map_err(|_| {
            PropertyError::out_of_domain(format!(
                "s = {s} kJ/kg·K is outside the two-phase region at {p} MPa"
            ))
        })
    }

    fn enthalpy_from_pressure_quality(
        &self,
        pressure: Pressure,
        quality: Quality,
    ) -> Result<SpecificEnthalpy, PropertyError> {
        let p = self.saturation_pressure(pressure)?;
        let x = quality.as_ref().get::<ratio>();
        checked(px(p, x, OH), || format!("h at {p} MPa, x = {x}")).map(enthalpy)
    }

    fn saturated_liquid_entropy_at_temperature(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<SpecificEntropy, PropertyError> {
        let t = self.saturation_temperature(temperature)?;
        checked(tx(t, 0.0, OS), || format!("sL at {t} °C")).map(entropy)
    }

    fn saturated_vapor_entropy_at_temperature(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<SpecificEntropy, PropertyError> {
        let t = self.saturation_temperature(temperature)?;
        checked(tx(t, 1.0, OS), || format!("sV at {t} °C")).map(entropy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn bars(value: f64) -> Pressure {
        Pressure::new::<bar>(value)
    }

    fn celsius(value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(value)
    }

    #[test]
    fn saturation_at_condenser_pressure() {
        let table = If97;
        let p = bars(0.1);

        let s_liq = table.saturated_liquid_entropy(p).unwrap();
        let s_vap = table.saturated_vapor_entropy(p).unwrap();
        let h_liq = table.saturated_liquid_enthalpy(p).unwrap();
        let h_vap = table.saturated_vapor_enthalpy(p).unwrap();
        let rho = table.saturated_liquid_density(p).unwrap();

        assert_relative_eq!(
            s_liq.get::<kilojoule_per_kilogram_kelvin>(),
            0.6492,
            max_relative = 1e-3
        );
        assert_relative_eq!(
            s_vap.get::<kilojoule_per_kilogram_kelvin>(),
            8.1488,
            max_relative = 1e-3
        );
        assert_relative_eq!(
            h_liq.get::<kilojoule_per_kilogram>(),
            191.81,
            max_relative = 1e-3
        );
        assert_relative_eq!(
            h_vap.get::<kilojoule_per_kilogram>(),
            2583.9,
            max_relative = 1e-3
        );
        assert_relative_eq!(
            rho.get::<kilogram_per_cubic_meter>(),
            989.8,
            max_relative = 1e-3
        );
    }

    #[test]
    fn superheated_lookups() {
        let table = If97;
        let (p, t) = (bars(80.0), celsius(600.0));

        let h = table.enthalpy_from_pressure_temperature(p, t).unwrap();
        let s = table.entropy_from_pressure_temperature(p, t).unwrap();
        assert_relative_eq!(h.get::<kilojoule_per_kilogram>(), 3642.4, max_relative = 1e-3);
        assert_relative_eq!(
            s.get::<kilojoule_per_kilogram_kelvin>(),
            7.0221,
            max_relative = 1e-3
        );

        let t_back = table.temperature_from_pressure_entropy(p, s).unwrap();
        assert_relative_eq!(t_back.get::<degree_celsius>(), 600.0, max_relative = 1e-4);

        let t_back = table.temperature_from_pressure_enthalpy(p, h).unwrap();
        assert_relative_eq!(t_back.get::<degree_celsius>(), 600.0, max_relative = 1e-4);
    }

    #[test]
    fn two_phase_lookups() {
        let table = If97;
        let p = bars(0.1);
        let s_liq = table.saturated_liquid_entropy(p).unwrap();
        let s_vap = table.saturated_vapor_entropy(p).unwrap();
        let s_mid = (s_liq + s_vap) * 0.5;

        let x = table.quality_from_pressure_entropy(p, s_mid).unwrap();
        assert_relative_eq!(x.as_ref().get::<ratio>(), 0.5, max_relative = 1e-4);

        let t = table.temperature_from_pressure_entropy(p, s_mid).unwrap();
        assert_relative_eq!(t.get::<degree_celsius>(), 45.81, max_relative = 1e-3);

        let h = table.enthalpy_from_pressure_quality(p, x).unwrap();
        let h_liq = table.saturated_liquid_enthalpy(p).unwrap();
        let h_vap = table.saturated_vapor_enthalpy(p).unwrap();
        assert_relative_eq!(
            h.get::<kilojoule_per_kilogram>(),
            ((h_liq + h_vap) * 0.5).get::<kilojoule_per_kilogram>(),
            max_relative = 1e-4
        );
    }

    #[test]
    fn saturation_lines_at_temperature() {
        let table = If97;
        let t = celsius(100.0);

        let s_liq = table.saturated_liquid_entropy_at_temperature(t).unwrap();
        let s_vap = table.saturated_vapor_entropy_at_temperature(t).unwrap();
        assert_relative_eq!(
            s_liq.get::<kilojoule_per_kilogram_kelvin>(),
            1.3072,
            max_relative = 1e-3
        );
        assert_relative_eq!(
            s_vap.get::<kilojoule_per_kilogram_kelvin>(),
            7.3541,
            max_relative = 1e-3
        );
    }

    #[test]
    fn saturation_above_critical_pressure_is_out_of_domain() {
        let table = If97;
        let p = bars(350.0);

        assert!(matches!(
            table.saturated_liquid_entropy(p),
            Err(PropertyError::OutOfDomain { .. })
        ));
        assert!(matches!(
            table.saturated_vapor_enthalpy(p),
            Err(PropertyError::OutOfDomain { .. })
        ));
        assert!(matches!(
            table.saturated_vapor_entropy_at_temperature(celsius(400.0)),
            Err(PropertyError::OutOfDomain { .. })
        ));
    }

    #[test]
    fn invalid_pressures_are_out_of_domain() {
        let table = If97;
        let t = celsius(100.0);

        for p in [bars(0.0), bars(-1.0), bars(f64::NAN), bars(2000.0)] {
            assert!(matches!(
                table.enthalpy_from_pressure_temperature(p, t),
                Err(PropertyError::OutOfDomain { .. })
            ));
        }
    }
}

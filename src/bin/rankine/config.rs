//! YAML run configuration.
//!
//! Values are plain numbers in bar, °C and kJ/kg·K. Any field left out keeps
//! its default, so an empty file reproduces the reference scenarios.

use std::{fs, path::Path};

use rankine_models::{
    models::power::rankine::{DiagramConfig, ReheatBoundary, SaturationDome, SuperheatBoundary},
    support::{constraint::Constrained, units::SpecificEntropy},
};
use serde::Deserialize;
use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    pressure::bar,
    specific_heat_capacity::kilojoule_per_kilogram_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use crate::error::{CliError, CliResult};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub superheat: SuperheatConfig,
    pub reheat: ReheatConfig,
    pub diagram: DiagramSettings,
}

impl Config {
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_yaml::from_str(&content)?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SuperheatConfig {
    pub condenser_pressure_bar: f64,
    pub boiler_pressure_bar: f64,
    pub max_temperature_c: f64,
}

impl Default for SuperheatConfig {
    fn default() -> Self {
        let boundary = SuperheatBoundary::default();
        Self {
            condenser_pressure_bar: boundary.condenser_pressure.get::<bar>(),
            boiler_pressure_bar: boundary.boiler_pressure.get::<bar>(),
            max_temperature_c: boundary.max_temperature.get::<degree_celsius>(),
        }
    }
}

impl From<SuperheatConfig> for SuperheatBoundary {
    fn from(config: SuperheatConfig) -> Self {
        Self {
            condenser_pressure: Pressure::new::<bar>(config.condenser_pressure_bar),
            boiler_pressure: Pressure::new::<bar>(config.boiler_pressure_bar),
            max_temperature: ThermodynamicTemperature::new::<degree_celsius>(
                config.max_temperature_c,
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReheatConfig {
    pub condenser_pressure_bar: f64,
    pub boiler_pressure_bar: f64,
    pub reheat_pressure_bar: f64,
    pub max_temperature_c: f64,
}

impl Default for ReheatConfig {
    fn default() -> Self {
        let boundary = ReheatBoundary::default();
        Self {
            condenser_pressure_bar: boundary.condenser_pressure.get::<bar>(),
            boiler_pressure_bar: boundary.boiler_pressure.get::<bar>(),
            reheat_pressure_bar: boundary.reheat_pressure.get::<bar>(),
            max_temperature_c: boundary.max_temperature.get::<degree_celsius>(),
        }
    }
}

impl From<ReheatConfig> for ReheatBoundary {
    fn from(config: ReheatConfig) -> Self {
        Self {
            condenser_pressure: Pressure::new::<bar>(config.condenser_pressure_bar),
            boiler_pressure: Pressure::new::<bar>(config.boiler_pressure_bar),
            reheat_pressure: Pressure::new::<bar>(config.reheat_pressure_bar),
            max_temperature: ThermodynamicTemperature::new::<degree_celsius>(
                config.max_temperature_c,
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiagramSettings {
    pub dome_samples: usize,
    pub dome_bottom_c: f64,
    pub entropy_step_kj_kg_k: f64,
}

impl Default for DiagramSettings {
    fn default() -> Self {
        let config = DiagramConfig::default();
        Self {
            dome_samples: config.dome.samples.into_inner(),
            dome_bottom_c: config.dome.bottom.get::<degree_celsius>(),
            entropy_step_kj_kg_k: config
                .entropy_step
                .into_inner()
                .get::<kilojoule_per_kilogram_kelvin>(),
        }
    }
}

impl DiagramSettings {
    pub fn to_diagram_config(self) -> CliResult<DiagramConfig> {
        let samples = Constrained::new(self.dome_samples).map_err(|source| CliError::Setting {
            setting: "dome_samples",
            source,
        })?;
        let entropy_step = Constrained::new(SpecificEntropy::new::<
            kilojoule_per_kilogram_kelvin,
        >(self.entropy_step_kj_kg_k))
        .map_err(|source| CliError::Setting {
            setting: "entropy_step_kj_kg_k",
            source,
        })?;

        Ok(DiagramConfig {
            dome: SaturationDome {
                samples,
                bottom: ThermodynamicTemperature::new::<degree_celsius>(self.dome_bottom_c),
            },
            entropy_step,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn empty_file_keeps_defaults() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(
            SuperheatBoundary::from(config.superheat),
            SuperheatBoundary::default()
        );
    }

    #[test]
    fn partial_overrides() {
        let yaml = "
reheat:
  reheat_pressure_bar: 60
diagram:
  dome_samples: 50
";
        let config: Config = serde_yaml::from_str(yaml).unwrap();

        let boundary = ReheatBoundary::from(config.reheat);
        assert_relative_eq!(boundary.reheat_pressure.get::<bar>(), 60.0);
        assert_relative_eq!(boundary.boiler_pressure.get::<bar>(), 350.0);

        let diagram = config.diagram.to_diagram_config().unwrap();
        assert_eq!(diagram.dome.samples.into_inner(), 50);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: Result<Config, _> = serde_yaml::from_str("superheat:\n  boiler_bar: 100\n");
        assert!(result.is_err());
    }

    #[test]
    fn non_positive_entropy_step_is_rejected() {
        let settings = DiagramSettings {
            entropy_step_kj_kg_k: 0.0,
            ..DiagramSettings::default()
        };

        assert!(matches!(
            settings.to_diagram_config(),
            Err(CliError::Setting {
                setting: "entropy_step_kj_kg_k",
                ..
            })
        ));
    }
}

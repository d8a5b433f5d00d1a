use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};

use crate::support::{
    constraint::{Constrained, StrictlyPositive},
    steam::{PropertyError, SteamTable},
};

use super::TsPoint;

const DEFAULT_SAMPLES: usize = 400;

/// Triple point of water, the default bottom of the dome.
const DEFAULT_BOTTOM_K: f64 = 273.16;

/// Keeps the top sample just below the critical temperature, where the
/// saturation lookups are still defined.
const TOP_MARGIN_K: f64 = 1e-3;

/// Saturation dome sampling: evenly spaced temperatures from `bottom` up to
/// just below the steam table's critical temperature.
///
/// The line methods return fresh lazy iterators, so a dome can be traversed
/// any number of times without holding the samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaturationDome {
    pub samples: Constrained<usize, StrictlyPositive>,
    pub bottom: ThermodynamicTemperature,
}

impl Default for SaturationDome {
    fn default() -> Self {
        Self {
            samples: Constrained::new_unchecked(DEFAULT_SAMPLES),
            bottom: ThermodynamicTemperature::new::<kelvin>(DEFAULT_BOTTOM_K),
        }
    }
}

impl SaturationDome {
    /// Saturated liquid line, from `bottom` toward the critical point.
    pub fn liquid_line<'a, T: SteamTable>(
        &self,
        table: &'a T,
    ) -> impl Iterator<Item = Result<TsPoint, PropertyError>> + use<'a, T> {
        self.temperatures(table.critical_point().temperature).map(move |temperature| {
            table
                .saturated_liquid_entropy_at_temperature(temperature)
                .map(|entropy| TsPoint {
                    entropy,
                    temperature,
                })
        })
    }

    /// Saturated vapor line, from `bottom` toward the critical point.
    pub fn vapor_line<'a, T: SteamTable>(
        &self,
        table: &'a T,
    ) -> impl Iterator<Item = Result<TsPoint, PropertyError>> + use<'a, T> {
        self.temperatures(table.critical_point().temperature).map(move |temperature| {
            table
                .saturated_vapor_entropy_at_temperature(temperature)
                .map(|entropy| TsPoint {
                    entropy,
                    temperature,
                })
        })
    }

    #[allow(clippy::cast_precision_loss)]
    fn temperatures(
        &self,
        critical: ThermodynamicTemperature,
    ) -> impl Iterator<Item = ThermodynamicTemperature> + use<> {
        let samples = self.samples.into_inner();
        let bottom = self.bottom.get::<kelvin>();
        let top = critical.get::<kelvin>() - TOP_MARGIN_K;
        let span = if samples > 1 {
            (top - bottom) / (samples - 1) as f64
        } else {
            0.0
        };

        (0..samples).map(move |i| ThermodynamicTemperature::new::<kelvin>(bottom + span * i as f64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::thermodynamic_temperature::degree_celsius;

    use crate::models::power::rankine::core::test_support::FixtureTable;

    fn dome(samples: usize) -> SaturationDome {
        SaturationDome {
            samples: Constrained::new(samples).unwrap(),
            ..SaturationDome::default()
        }
    }

    #[test]
    fn lines_span_bottom_to_just_below_critical() {
        let table = FixtureTable::default();
        let liquid: Vec<_> = SaturationDome::default()
            .liquid_line(&table)
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(liquid.len(), 400);
        assert_relative_eq!(
            liquid[0].temperature.get::<degree_celsius>(),
            0.01,
            epsilon = 1e-9
        );

        let critical = table.critical_point().temperature.get::<kelvin>();
        assert_relative_eq!(
            liquid[399].temperature.get::<kelvin>(),
            critical - TOP_MARGIN_K,
            max_relative = 1e-12
        );
    }

    #[test]
    fn vapor_lies_right_of_liquid() {
        let table = FixtureTable::default();
        let dome = dome(25);

        for (liquid, vapor) in dome.liquid_line(&table).zip(dome.vapor_line(&table)) {
            let (liquid, vapor) = (liquid.unwrap(), vapor.unwrap());
            assert_eq!(liquid.temperature, vapor.temperature);
            assert!(vapor.entropy > liquid.entropy);
        }
    }

    #[test]
    fn lines_restart_on_each_call() {
        let table = FixtureTable::default();
        let dome = dome(10);

        let first: Vec<_> = dome.vapor_line(&table).map(Result::unwrap).collect();
        let second: Vec<_> = dome.vapor_line(&table).map(Result::unwrap).collect();
        assert_eq!(first.len(), 10);
        assert_eq!(first, second);
    }

    #[test]
    fn single_sample_sits_at_the_bottom() {
        let table = FixtureTable::default();
        let line: Vec<_> = dome(1).liquid_line(&table).map(Result::unwrap).collect();

        assert_eq!(line.len(), 1);
        assert_relative_eq!(line[0].temperature.get::<kelvin>(), DEFAULT_BOTTOM_K);
    }

    #[test]
    fn bottom_below_the_table_range_yields_an_error() {
        let table = FixtureTable::default();
        let dome = SaturationDome {
            bottom: ThermodynamicTemperature::new::<kelvin>(200.0),
            ..dome(5)
        };

        let mut line = dome.liquid_line(&table);
        assert!(matches!(
            line.next(),
            Some(Err(PropertyError::OutOfDomain { .. }))
        ));
        assert!(matches!(line.next(), Some(Ok(_))));
    }
}

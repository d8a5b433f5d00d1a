use std::fmt;

/// A single derivation step while resolving a point.
///
/// Reported with failures so the offending lookup can be traced back to
/// the point that needed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    SaturatedLiquidEntropy,
    SaturatedLiquidEnthalpy,
    SaturatedVaporEntropy,
    SaturatedVaporEnthalpy,
    SaturatedLiquidDensity,
    TemperatureFromPressureEntropy,
    TemperatureFromPressureEnthalpy,
    EnthalpyFromPressureTemperature,
    EntropyFromPressureTemperature,
    QualityFromPressureEntropy,
    EnthalpyFromPressureQuality,

    /// The pump must raise the pressure.
    PressureRise,

    /// The turbine must lower the pressure.
    PressureDrop,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let step = match self {
            Self::SaturatedLiquidEntropy => "saturated liquid entropy lookup",
            Self::SaturatedLiquidEnthalpy => "saturated liquid enthalpy lookup",
            Self::SaturatedVaporEntropy => "saturated vapor entropy lookup",
            Self::SaturatedVaporEnthalpy => "saturated vapor enthalpy lookup",
            Self::SaturatedLiquidDensity => "saturated liquid density lookup",
            Self::TemperatureFromPressureEntropy => "temperature from (p, s) lookup",
            Self::TemperatureFromPressureEnthalpy => "temperature from (p, h) lookup",
            Self::EnthalpyFromPressureTemperature => "enthalpy from (p, T) lookup",
            Self::EntropyFromPressureTemperature => "entropy from (p, T) lookup",
            Self::QualityFromPressureEntropy => "quality from (p, s) lookup",
            Self::EnthalpyFromPressureQuality => "enthalpy from (p, x) lookup",
            Self::PressureRise => "pump pressure rise",
            Self::PressureDrop => "turbine pressure drop",
        };
        f.write_str(step)
    }
}

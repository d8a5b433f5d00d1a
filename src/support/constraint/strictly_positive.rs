use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// # Examples
///
/// ```
/// use rankine_models::support::{constraint::StrictlyPositive, units::SpecificEntropy};
/// use uom::si::specific_heat_capacity::kilojoule_per_kilogram_kelvin;
///
/// let step = StrictlyPositive::new(SpecificEntropy::new::<kilojoule_per_kilogram_kelvin>(0.1));
/// assert!(step.is_ok());
///
/// assert!(StrictlyPositive::new(0_usize).is_err());
/// assert!(StrictlyPositive::new(-0.1).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::specific_heat_capacity::kilojoule_per_kilogram_kelvin;

    use crate::support::units::SpecificEntropy;

    #[test]
    fn sample_counts() {
        assert_eq!(StrictlyPositive::new(400_usize).unwrap().into_inner(), 400);
        assert!(matches!(
            StrictlyPositive::new(0_usize),
            Err(ConstraintError::Zero)
        ));
    }

    #[test]
    fn entropy_steps() {
        let step = |value| SpecificEntropy::new::<kilojoule_per_kilogram_kelvin>(value);

        assert!(StrictlyPositive::new(step(0.1)).is_ok());
        assert!(matches!(
            StrictlyPositive::new(step(0.0)),
            Err(ConstraintError::Zero)
        ));
        assert!(matches!(
            StrictlyPositive::new(step(-0.1)),
            Err(ConstraintError::Negative)
        ));
        assert!(matches!(
            StrictlyPositive::new(step(f64::NAN)),
            Err(ConstraintError::NotANumber)
        ));
    }
}

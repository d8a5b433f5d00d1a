//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (pressure, temperature,
//! density, and so on). [`uom`] has no named quantities for specific
//! enthalpy and specific entropy, so this module defines them as aliases
//! with the right dimensions:
//!
//! ```
//! use rankine_models::support::units::{SpecificEnthalpy, SpecificEntropy};
//! use uom::si::{
//!     available_energy::kilojoule_per_kilogram,
//!     specific_heat_capacity::kilojoule_per_kilogram_kelvin,
//! };
//!
//! let h = SpecificEnthalpy::new::<kilojoule_per_kilogram>(191.8);
//! let s = SpecificEntropy::new::<kilojoule_per_kilogram_kelvin>(0.649);
//! assert!(h.get::<kilojoule_per_kilogram>() > s.get::<kilojoule_per_kilogram_kelvin>());
//! ```

mod quantities;

pub use quantities::{SpecificEnthalpy, SpecificEntropy};

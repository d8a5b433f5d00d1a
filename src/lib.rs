//! # Rankine Models
//!
//! Ideal steam Rankine cycle models for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: [`twine_core::Model`] implementations for power cycles.
//! - [`support`]: Steam tables, numeric constraints, and unit aliases the
//!   models are built on.
//!
//! The [`support`] modules are public because custom steam tables and layouts
//! need them, but their APIs are not yet stable.

pub mod models;
pub mod support;

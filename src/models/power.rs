//! Power generation models.
//!
//! This module contains models for thermodynamic power cycles, starting with
//! the ideal steam Rankine cycle.

pub mod rankine;

//! Public Twine models.
//!
//! Each model keeps its computation in a private `core` module and exposes it
//! through thin [`twine_core::Model`] adapters. The Rankine cycle, for example,
//! has one solver behind [`power::rankine::SuperheatRankine`],
//! [`power::rankine::ReheatRankine`] and [`power::rankine::RankineCycle`].

pub mod power;

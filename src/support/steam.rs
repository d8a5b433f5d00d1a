//! Water and steam property lookups.
//!
//! [`SteamTable`] is the property capability consumed by the cycle models.
//! It is passed to models explicitly, so any implementation (including a test
//! double) can stand in for the tables below.
//!
//! Provided implementations:
//!
//! - [`If97`]: IAPWS-IF97 via the `seuif97` crate.
//! - `CoolPropSteam`: `CoolProp` via `rfluids` (requires the `coolprop` feature).

#[cfg(feature = "coolprop")]
mod coolprop;
mod error;
mod if97;
mod table;

#[cfg(feature = "coolprop")]
pub use coolprop::{CoolPropError, CoolPropSteam};
pub use error::PropertyError;
pub use if97::If97;
pub use table::{CriticalPoint, Quality, SteamTable};

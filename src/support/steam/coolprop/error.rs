use std::sync::PoisonError;

use thiserror::Error;

use crate::support::steam::PropertyError;

/// Errors returned by the [`CoolPropSteam`](super::CoolPropSteam) table.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CoolPropError {
    #[error(transparent)]
    Rfluids(#[from] rfluids::native::CoolPropError),
    #[error("CoolProp abstract state mutex poisoned")]
    Poisoned,
}

impl<T> From<PoisonError<T>> for CoolPropError {
    fn from(_: PoisonError<T>) -> Self {
        CoolPropError::Poisoned
    }
}

impl From<CoolPropError> for PropertyError {
    fn from(error: CoolPropError) -> Self {
        match error {
            CoolPropError::Rfluids(message) => classify(&message.to_string()),
            CoolPropError::Poisoned => PropertyError::Calculation {
                context: "CoolProp abstract state mutex poisoned".to_string(),
            },
        }
    }
}

/// Lowercase message fragments and the error kind they indicate.
///
/// `CoolProp` reports failures as free text, so the first matching fragment
/// decides the kind. Unmatched messages become [`PropertyError::Calculation`].
const MARKERS: &[(&str, Kind)] = &[
    ("not defined", Kind::Undefined),
    ("not in range", Kind::OutOfDomain),
    ("out of range", Kind::OutOfDomain),
    ("outside the range of validity", Kind::OutOfDomain),
    ("must be in range", Kind::OutOfDomain),
    ("must be between", Kind::OutOfDomain),
    ("quality must be", Kind::OutOfDomain),
    ("above the critical", Kind::OutOfDomain),
    ("not a valid number", Kind::InvalidState),
    ("invalid state", Kind::InvalidState),
    ("invalid number", Kind::InvalidState),
];

#[derive(Debug, Clone, Copy)]
enum Kind {
    Undefined,
    OutOfDomain,
    InvalidState,
}

fn classify(message: &str) -> PropertyError {
    let lowered = message.to_lowercase();
    let context = message.to_string();

    let kind = MARKERS
        .iter()
        .find(|(marker, _)| lowered.contains(marker))
        .map(|&(_, kind)| kind);

    match kind {
        Some(Kind::Undefined) => PropertyError::Undefined { context },
        Some(Kind::OutOfDomain) => PropertyError::OutOfDomain { context },
        Some(Kind::InvalidState) => PropertyError::InvalidState { context },
        None => PropertyError::Calculation { context },
    }
}

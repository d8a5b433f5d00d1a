use thiserror::Error;

/// Errors that may occur when looking up water and steam properties.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// The property is undefined at the given state.
    ///
    /// For example, the vapor quality of a compressed liquid.
    #[error("undefined property: {context}")]
    Undefined { context: String },

    /// The inputs are outside the table's valid domain.
    ///
    /// For example, a saturation lookup above the critical pressure.
    #[error("out of domain: {context}")]
    OutOfDomain { context: String },

    /// The provided inputs are invalid or inconsistent.
    #[error("invalid state: {context}")]
    InvalidState { context: String },

    /// The calculation failed due to a numerical or internal error.
    #[error("calculation error: {context}")]
    Calculation { context: String },
}

impl PropertyError {
    pub(crate) fn out_of_domain(context: impl Into<String>) -> Self {
        Self::OutOfDomain {
            context: context.into(),
        }
    }
}

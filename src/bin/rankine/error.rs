use std::{io, path::PathBuf};

use plotters::drawing::DrawingAreaErrorKind;
use rankine_models::{
    models::power::rankine::{DiagramError, SolveError},
    support::constraint::ConstraintError,
};

pub type CliResult<T> = Result<T, CliError>;

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid diagram setting `{setting}`: {source}")]
    Setting {
        setting: &'static str,
        #[source]
        source: ConstraintError,
    },

    #[error("cycle analysis failed: {0}")]
    Solve(#[from] SolveError),

    #[error("diagram construction failed: {0}")]
    Diagram(#[from] DiagramError),

    #[error("failed to draw the T-s diagram: {0}")]
    Plot(#[from] DrawingAreaErrorKind<io::Error>),
}

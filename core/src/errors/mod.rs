mod map_error;
mod trace_error;

pub use map_error::MapLoadError;
pub use trace_error::{BlockSelectionError, StackParseError};

use miette::Diagnostic;
use thiserror::Error;

/// Unified error type wrapping all stacklift errors.
#[derive(Debug, Error, Diagnostic)]
pub enum StackliftError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    MapLoad(#[from] MapLoadError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    BlockSelection(#[from] BlockSelectionError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    StackParse(#[from] StackParseError),
}

use miette::Diagnostic;
use thiserror::Error;

/// The source map content could not be parsed. Raised once at load time;
/// lookups against a loaded map never fail.
#[derive(Debug, Error, Diagnostic)]
#[error("could not load source map: {source}")]
#[diagnostic(help("the file must be a standard JSON source map (version 3)"))]
pub struct MapLoadError {
    #[from]
    source: sourcemap::Error,
}

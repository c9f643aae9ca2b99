use miette::Diagnostic;
use thiserror::Error;

/// No blank-line-separated block of the crash log mentions the marker.
#[derive(Debug, Error, Diagnostic)]
#[error("no stack trace block contains `{marker}`")]
#[diagnostic(help("crash logs separate sections with blank lines; the exception section is required"))]
pub struct BlockSelectionError {
    pub marker: String,
}

/// A line inside the frame section matched none of the known formats.
#[derive(Debug, Error, Diagnostic)]
#[error("stack trace parse error at line {line_number}: {text}")]
#[diagnostic(help("expected `name@line:col`, `at file:line:col` or `at name (file:line:col)`"))]
pub struct StackParseError {
    pub line_number: usize,
    pub text: String,
}

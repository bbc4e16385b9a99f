//! Error types with rich diagnostics using miette.
//!
//! Low-level stages fail immediately with one of these; only the pipeline
//! orchestrator ever downgrades them into result-object errors/warnings.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

// ============================================================================
// Document parsing
// ============================================================================

/// Errors from structural parsing of an SVG document.
#[derive(Error, Diagnostic, Debug)]
pub enum ParseError {
    #[error("svg input cannot be empty")]
    #[diagnostic(code(origo::parse::empty_input))]
    EmptyInput,

    #[error("No <svg> element found")]
    #[diagnostic(
        code(origo::parse::no_svg_element),
        help("the input must contain an <svg ...> opening tag (any letter case)")
    )]
    NoSvgElement,
}

/// Errors from parsing a `viewBox` attribute value.
#[derive(Error, Diagnostic, Debug)]
pub enum ViewBoxError {
    #[error("Invalid viewBox format: {value:?}")]
    #[diagnostic(
        code(origo::viewbox::format),
        help("a viewBox is four numbers separated by whitespace and/or commas, e.g. \"0 0 100 100\"")
    )]
    Format { value: String },
}

// ============================================================================
// Path data
// ============================================================================

/// Errors from tokenizing the `d` attribute of a `<path>` element.
#[derive(Error, Diagnostic, Debug)]
pub enum PathDataError {
    #[error("unexpected token in path data")]
    #[diagnostic(code(origo::path::unexpected_token))]
    UnexpectedToken {
        #[source_code]
        src: NamedSource<String>,
        #[label("expected a command letter or a number")]
        span: SourceSpan,
    },

    #[error("not enough arguments for '{command}'")]
    #[diagnostic(
        code(origo::path::incomplete_arguments),
        help("'{command}' takes arguments in groups of {arity}")
    )]
    IncompleteArguments {
        command: char,
        arity: usize,
        #[source_code]
        src: NamedSource<String>,
        #[label("argument list cut short here")]
        span: SourceSpan,
    },

    #[error("'{command}' takes no arguments")]
    #[diagnostic(code(origo::path::close_with_arguments))]
    CloseWithArguments {
        command: char,
        #[source_code]
        src: NamedSource<String>,
        #[label("stray arguments here")]
        span: SourceSpan,
    },
}

// ============================================================================
// Bounds
// ============================================================================

/// Errors from computing content bounds.
///
/// `EmptyContent` is soft: the orchestrator turns it into a warning and
/// keeps going with the original geometry.
#[derive(Error, Diagnostic, Debug)]
pub enum BoundsError {
    #[error("no coordinate data found in any path")]
    #[diagnostic(code(origo::bounds::empty_content))]
    EmptyContent,

    #[error(transparent)]
    #[diagnostic(transparent)]
    PathData(#[from] PathDataError),
}

// ============================================================================
// ViewBox rewriting
// ============================================================================

/// Errors from normalizing the viewBox attribute.
#[derive(Error, Diagnostic, Debug)]
pub enum NormalizeError {
    #[error("width and height must be positive")]
    #[diagnostic(code(origo::normalize::non_positive_size))]
    NonPositiveSize { width: f64, height: f64 },
}

// ============================================================================
// Optimizer collaborator
// ============================================================================

/// Errors surfaced by an [`crate::Optimizer`] implementation.
#[derive(Error, Diagnostic, Debug)]
pub enum OptimizeError {
    #[error("optimizer rejected the document: {message}")]
    #[diagnostic(code(origo::optimize::rejected))]
    Rejected { message: String },
}

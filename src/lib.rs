//! origo normalizes SVG documents so their visible content starts at the
//! origin.
//!
//! The pipeline parses the markup into a structural summary, computes the
//! bounding box of the drawn content, algebraically translates path data
//! into the shifted frame, rewrites the `viewBox` to `0 0 W H`, optionally
//! hands the result to an external optimizer, and finally pretty-prints or
//! minifies it. Every stage is a pure transform over immutable values; the
//! orchestrator is re-entrant and safe to call concurrently.
//!
//! The individual stages are exposed as free functions for callers that
//! only need one step:
//!
//! ```
//! use origo::{parse_view_box, transform_paths_to_origin};
//!
//! let vb = parse_view_box("50 50 100 100")?;
//! let svg = r#"<svg viewBox="50 50 100 100"><path d="M 60 60 L 140 140"/></svg>"#;
//! let shifted = transform_paths_to_origin(svg, vb)?;
//! assert!(shifted.contains("M10 10"));
//! assert!(shifted.contains("L90 90"));
//! # Ok::<(), miette::Report>(())
//! ```
//!
//! The whole pipeline runs through [`process_svg`] (or
//! [`process_svg_with`] to inject an [`Optimizer`]), which always returns a
//! well-formed [`ProcessingResult`] carrying errors and warnings as data
//! rather than failing.

pub mod bounds;
pub mod errors;
pub mod format;
pub mod log;
pub mod normalize;
pub mod optimize;
pub mod parse;
pub mod path;
pub mod pipeline;
pub mod scan;
pub mod transform;
pub mod types;

pub use bounds::compute_bounds;
pub use errors::{
    BoundsError, NormalizeError, OptimizeError, ParseError, PathDataError, ViewBoxError,
};
pub use format::format_svg;
pub use normalize::{crop_to_content, normalize_view_box};
pub use optimize::{Optimizer, UsvgOptimizer};
pub use parse::{parse_svg, parse_view_box};
pub use path::{PathCommand, PathData};
pub use pipeline::{process_svg, process_svg_with};
pub use transform::transform_paths_to_origin;
pub use types::{
    Bounds, ParsedSvg, ProcessingOptions, ProcessingResult, ProcessingStats, ViewBox,
};

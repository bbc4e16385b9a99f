//! Core value types shared across the pipeline.
//!
//! All of these are plain immutable values: every stage consumes its input
//! and produces a fresh value, so nothing here carries interior mutability.

use std::fmt;

/// Compact numeric formatting for SVG output.
///
/// Rust's `f64` Display already produces the shortest round-trippable form
/// ("10" rather than "10.0"); this wrapper only normalizes negative zero so
/// translated coordinates never serialize as "-0".
#[derive(Clone, Copy, Debug)]
pub(crate) struct Compact(pub f64);

impl fmt::Display for Compact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = if self.0 == 0.0 { 0.0 } else { self.0 };
        write!(f, "{}", v)
    }
}

/// The four-number `viewBox` value: a window onto the document's coordinate
/// system.
///
/// Width and height are not validated at construction; a parsed viewBox may
/// carry zero or negative dimensions and it is up to consumers (the
/// normalizer) to reject those.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    pub fn new(min_x: f64, min_y: f64, width: f64, height: f64) -> Self {
        Self {
            min_x,
            min_y,
            width,
            height,
        }
    }

    /// True when the window already starts at (0, 0), which makes the
    /// origin transform a guaranteed no-op.
    pub fn is_at_origin(&self) -> bool {
        self.min_x == 0.0 && self.min_y == 0.0
    }
}

impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            Compact(self.min_x),
            Compact(self.min_y),
            Compact(self.width),
            Compact(self.height)
        )
    }
}

/// Structural summary of one SVG document, produced once per input by
/// [`crate::parse_svg`] and never mutated.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParsedSvg {
    /// Parsed `viewBox`, or `None` when the attribute is missing *or*
    /// malformed (a bad viewBox is not a parse failure).
    pub view_box: Option<ViewBox>,
    /// Verbatim `width` attribute value, unit suffix and all.
    pub width: Option<String>,
    /// Verbatim `height` attribute value.
    pub height: Option<String>,
    /// The `d` attribute of every `<path>` element, in document order.
    pub paths: Vec<String>,
}

/// Axis-aligned bounding box of drawn content, in the document's original
/// coordinate space.
///
/// Invariant: `x2 >= x` and `y2 >= y`, so the derived width/height are
/// never negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Bounds {
    /// Zero-size box at the origin, the fallback when no content exists.
    pub const ZERO: Bounds = Bounds {
        x: 0.0,
        y: 0.0,
        x2: 0.0,
        y2: 0.0,
    };

    pub fn new(x: f64, y: f64, x2: f64, y2: f64) -> Self {
        Self { x, y, x2, y2 }
    }

    pub fn width(&self) -> f64 {
        self.x2 - self.x
    }

    pub fn height(&self) -> f64 {
        self.y2 - self.y
    }
}

/// Independent stage toggles for [`crate::process_svg`].
///
/// Everything defaults to enabled except `minify` (pretty-printed output is
/// the default). Any subset is valid; with all flags off the pipeline is a
/// pass-through that only re-formats the input.
#[derive(Clone, Copy, Debug)]
pub struct ProcessingOptions {
    /// Compute tight content bounds and crop the viewBox to them.
    pub crop_whitespace: bool,
    /// Translate path coordinates so content starts at (0, 0).
    pub transform_to_origin: bool,
    /// Rewrite the viewBox attribute to `"0 0 W H"`.
    pub normalize_view_box: bool,
    /// Run the external optimizer over the result.
    pub optimize: bool,
    /// Minify instead of pretty-printing the final markup.
    pub minify: bool,
}

impl Default for ProcessingOptions {
    fn default() -> Self {
        Self {
            crop_whitespace: true,
            transform_to_origin: true,
            normalize_view_box: true,
            optimize: true,
            minify: false,
        }
    }
}

/// Before/after measurements for one pipeline run.
#[derive(Clone, Debug)]
pub struct ProcessingStats {
    /// Character count of the input document.
    pub original_size: usize,
    /// Character count of the output document.
    pub processed_size: usize,
    /// The viewBox as parsed from the input, if any.
    pub view_box_before: Option<ViewBox>,
    /// The final resolved viewBox. `None` when the run failed, or when a
    /// successful run never resolved one (no viewBox in the input and the
    /// geometric steps skipped or disabled).
    pub view_box_after: Option<ViewBox>,
}

/// Outcome of one [`crate::process_svg`] invocation.
///
/// This is always a well-formed value, never a propagated failure: the
/// orchestrator downgrades every sub-step fault into `errors` or `warnings`
/// so callers can render them without any error handling of their own.
#[derive(Clone, Debug)]
pub struct ProcessingResult {
    /// False iff a fatal error occurred; `errors` is non-empty in that case.
    pub success: bool,
    /// The processed document, or the best-effort intermediate state on
    /// failure.
    pub svg: String,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub stats: ProcessingStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_trims_float_noise() {
        assert_eq!(Compact(10.0).to_string(), "10");
        assert_eq!(Compact(10.5).to_string(), "10.5");
        assert_eq!(Compact(-3.25).to_string(), "-3.25");
        assert_eq!(Compact(-0.0).to_string(), "0");
    }

    #[test]
    fn view_box_display_is_compact() {
        let vb = ViewBox::new(-50.0, -50.0, 200.0, 200.5);
        assert_eq!(vb.to_string(), "-50 -50 200 200.5");
    }

    #[test]
    fn view_box_origin_check() {
        assert!(ViewBox::new(0.0, 0.0, 10.0, 10.0).is_at_origin());
        assert!(!ViewBox::new(0.0, 5.0, 10.0, 10.0).is_at_origin());
    }

    #[test]
    fn bounds_derive_dimensions() {
        let b = Bounds::new(10.0, 20.0, 110.0, 50.0);
        assert_eq!(b.width(), 100.0);
        assert_eq!(b.height(), 30.0);
        assert_eq!(Bounds::ZERO.width(), 0.0);
    }

    #[test]
    fn default_options_enable_everything_but_minify() {
        let opts = ProcessingOptions::default();
        assert!(opts.crop_whitespace);
        assert!(opts.transform_to_origin);
        assert!(opts.normalize_view_box);
        assert!(opts.optimize);
        assert!(!opts.minify);
    }
}

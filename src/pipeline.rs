//! Pipeline orchestrator: sequence the stages, downgrade failures, report
//! statistics.
//!
//! This is the only place where stage errors turn into result-object
//! `errors`/`warnings` instead of propagating. Callers always get a
//! well-formed [`ProcessingResult`] back, never an `Err` and never a panic.

use crate::bounds::compute_bounds;
use crate::errors::BoundsError;
use crate::format::format_svg;
use crate::log::{debug, warn};
use crate::normalize::{crop_to_content, normalize_view_box};
use crate::optimize::{Optimizer, UsvgOptimizer};
use crate::parse::parse_svg;
use crate::transform::transform_paths_to_origin;
use crate::types::{ProcessingOptions, ProcessingResult, ProcessingStats, ViewBox};

/// Warning emitted when the document holds no path content to crop or
/// transform.
const NO_PATHS_WARNING: &str = "No paths found in SVG - nothing to process";

/// Run the full pipeline with the stock [`UsvgOptimizer`].
pub async fn process_svg(svg: &str, options: &ProcessingOptions) -> ProcessingResult {
    process_svg_with(svg, options, &UsvgOptimizer).await
}

/// Run the full pipeline with a caller-supplied optimizer.
///
/// Stages run in order (parse, crop, transform, normalize, optimize,
/// format), each gated by its option flag and by the outcome of the steps
/// before it. Parse and optimizer failures are fatal; missing content
/// degrades to a warning and jumps straight to formatting the original
/// input, and unresolvable dimensions leave the viewBox alone.
pub async fn process_svg_with<O: Optimizer>(
    svg: &str,
    options: &ProcessingOptions,
    optimizer: &O,
) -> ProcessingResult {
    let original_size = svg.chars().count();
    let mut warnings: Vec<String> = Vec::new();

    let parsed = match parse_svg(svg) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!(error = %e, "parse failed");
            return failed(svg.to_string(), vec![e.to_string()], warnings, original_size, None);
        }
    };
    let view_box_before = parsed.view_box;
    debug!(
        paths = parsed.paths.len(),
        has_view_box = view_box_before.is_some(),
        "parsed input"
    );

    let mut current = svg.to_string();
    // The coordinate window the document is currently expressed in. Starts
    // as the parsed viewBox and follows the document through crop and
    // transform.
    let mut frame = view_box_before;
    let mut has_content = true;

    if options.crop_whitespace {
        match compute_bounds(&parsed.paths) {
            Ok(bounds) => {
                current = crop_to_content(&current, bounds);
                frame = Some(ViewBox::new(
                    bounds.x,
                    bounds.y,
                    bounds.width(),
                    bounds.height(),
                ));
            }
            Err(BoundsError::EmptyContent) => {
                warn!("no path content, skipping geometric steps");
                warnings.push(NO_PATHS_WARNING.to_string());
                has_content = false;
            }
            Err(e @ BoundsError::PathData(_)) => {
                return failed(
                    svg.to_string(),
                    vec![e.to_string()],
                    warnings,
                    original_size,
                    view_box_before,
                );
            }
        }
    }

    if options.transform_to_origin && has_content {
        if let Some(window) = frame {
            match transform_paths_to_origin(&current, window) {
                Ok(transformed) => {
                    current = transformed;
                    frame = Some(ViewBox::new(0.0, 0.0, window.width, window.height));
                }
                Err(e) => {
                    return failed(
                        svg.to_string(),
                        vec![e.to_string()],
                        warnings,
                        original_size,
                        view_box_before,
                    );
                }
            }
        }
        // With no viewBox and cropping disabled there is no frame to shift
        // against; the step degrades to a no-op.
    }

    if options.normalize_view_box && has_content {
        // The document keeps its original size; cropping moved the window
        // and the transform moved the content, neither changes how big the
        // canvas is. Bounds dimensions only step in when the input carried
        // no viewBox at all, and attribute dimensions after that.
        let size = view_box_before
            .map(|vb| (vb.width, vb.height))
            .or_else(|| frame.map(|vb| (vb.width, vb.height)))
            .or_else(|| attribute_dimensions(&parsed));
        match size {
            Some((width, height)) => match normalize_view_box(&current, width, height) {
                Ok(normalized) => {
                    current = normalized;
                    frame = Some(ViewBox::new(0.0, 0.0, width, height));
                }
                Err(e) => {
                    // Zero-area content; keep the document as-is.
                    warnings.push(e.to_string());
                }
            },
            None => {
                warnings.push(
                    "unable to determine content dimensions - viewBox left unchanged".to_string(),
                );
            }
        }
    }

    if options.optimize && has_content {
        match optimizer.optimize(&current).await {
            Ok(optimized) => current = optimized,
            Err(e) => {
                warn!(error = %e, "optimizer failed");
                return failed(
                    current,
                    vec![e.to_string()],
                    warnings,
                    original_size,
                    view_box_before,
                );
            }
        }
    }

    current = format_svg(&current, options.minify);

    let processed_size = current.chars().count();
    ProcessingResult {
        success: true,
        svg: current,
        errors: Vec::new(),
        warnings,
        stats: ProcessingStats {
            original_size,
            processed_size,
            view_box_before,
            view_box_after: frame,
        },
    }
}

/// Numeric width/height from the svg element's attributes, unit suffixes
/// stripped ("100px" resolves to 100).
fn attribute_dimensions(parsed: &crate::types::ParsedSvg) -> Option<(f64, f64)> {
    let width = parse_dimension(parsed.width.as_deref()?)?;
    let height = parse_dimension(parsed.height.as_deref()?)?;
    Some((width, height))
}

fn parse_dimension(value: &str) -> Option<f64> {
    value
        .trim()
        .trim_end_matches(|c: char| c.is_ascii_alphabetic() || c == '%')
        .parse()
        .ok()
}

/// Build a failed result. The pipeline never raises; every fatal fault
/// lands here with at least one recorded error.
fn failed(
    svg: String,
    errors: Vec<String>,
    warnings: Vec<String>,
    original_size: usize,
    view_box_before: Option<ViewBox>,
) -> ProcessingResult {
    let processed_size = svg.chars().count();
    ProcessingResult {
        success: false,
        svg,
        errors,
        warnings,
        stats: ProcessingStats {
            original_size,
            processed_size,
            view_box_before,
            view_box_after: None,
        },
    }
}

//! End-to-end pipeline tests.
//!
//! The optimizer is stubbed for most of these so the assertions stay about
//! the pipeline itself; `UsvgOptimizer` has its own coverage in the
//! `optimize` module.

use origo::{
    OptimizeError, Optimizer, ProcessingOptions, ProcessingResult, format_svg, process_svg,
    process_svg_with,
};
use regex_lite::Regex;

/// Optimizer stub that hands the document back unchanged.
struct EchoOptimizer;

impl Optimizer for EchoOptimizer {
    async fn optimize(&self, svg: &str) -> Result<String, OptimizeError> {
        Ok(svg.to_string())
    }
}

/// Optimizer stub that visibly replaces the document.
struct StampOptimizer;

impl Optimizer for StampOptimizer {
    async fn optimize(&self, _svg: &str) -> Result<String, OptimizeError> {
        Ok(r#"<svg stamped="1"/>"#.to_string())
    }
}

/// Optimizer stub that always fails.
struct FailingOptimizer;

impl Optimizer for FailingOptimizer {
    async fn optimize(&self, _svg: &str) -> Result<String, OptimizeError> {
        Err(OptimizeError::Rejected {
            message: "boom".to_string(),
        })
    }
}

async fn run(svg: &str, options: ProcessingOptions) -> ProcessingResult {
    process_svg_with(svg, &options, &EchoOptimizer).await
}

const OFFSET_SVG: &str = r#"<svg viewBox="50 50 100 100"><path d="M 10 10 L 90 90"/></svg>"#;

#[tokio::test]
async fn offset_svg_lands_at_origin_with_defaults() {
    let result = run(OFFSET_SVG, ProcessingOptions::default()).await;

    assert!(result.success);
    assert!(result.errors.is_empty());
    assert!(result.svg.contains(r#"viewBox="0 0 100 100""#));
    assert_eq!(result.stats.view_box_before.unwrap().min_x, 50.0);
    let after = result.stats.view_box_after.unwrap();
    assert_eq!(after.min_x, 0.0);
    assert_eq!(after.min_y, 0.0);
    // Content bounds were (10,10)-(90,90); cropped and shifted to start
    // at the origin.
    assert!(result.svg.contains("M0 0 L80 80"));
}

#[tokio::test]
async fn minified_output_is_a_single_normalized_line() {
    let options = ProcessingOptions {
        minify: true,
        ..Default::default()
    };
    let result = run(OFFSET_SVG, options).await;

    assert!(result.success);
    insta::assert_snapshot!(
        result.svg,
        @r#"<svg viewBox="0 0 100 100"><path d="M0 0 L80 80"/></svg>"#
    );
}

#[tokio::test]
async fn exactly_one_view_box_in_output() {
    let result = run(OFFSET_SVG, ProcessingOptions::default()).await;
    let re = Regex::new(r#"viewBox="[^"]*""#).unwrap();
    assert_eq!(re.find_iter(&result.svg).count(), 1);
    assert!(result.svg.contains(r#"viewBox="0 0 100 100""#));
}

#[tokio::test]
async fn svg_without_view_box_gets_one_from_content_bounds() {
    let svg = r#"<svg width="100" height="100"><path d="M 10 10 L 90 90"/></svg>"#;
    let result = run(svg, ProcessingOptions::default()).await;

    assert!(result.success);
    assert!(result.stats.view_box_before.is_none());
    let after = result.stats.view_box_after.unwrap();
    assert_eq!(after.min_x, 0.0);
    assert_eq!(after.min_y, 0.0);
    assert!(result.svg.contains(r#"viewBox="0 0 80 80""#));
}

#[tokio::test]
async fn no_paths_is_a_warning_not_a_failure() {
    let svg = r#"<svg viewBox="0 0 100 100"><rect x="10" y="10" width="80" height="80"/></svg>"#;
    let result = run(svg, ProcessingOptions::default()).await;

    assert!(result.success);
    assert!(result.errors.is_empty());
    assert!(
        result
            .warnings
            .iter()
            .any(|w| w == "No paths found in SVG - nothing to process")
    );
    // Geometry untouched, but formatting still ran.
    assert!(result.svg.contains(r#"viewBox="0 0 100 100""#));
    assert_eq!(result.svg, format_svg(svg, false));
}

#[tokio::test]
async fn no_content_skips_the_optimizer() {
    let svg = r#"<svg viewBox="0 0 100 100"><rect x="10" y="10" width="80" height="80"/></svg>"#;
    let result = process_svg_with(svg, &ProcessingOptions::default(), &StampOptimizer).await;

    assert!(result.success);
    assert!(!result.svg.contains("stamped"));
    // The output is the formatted original, nothing more.
    assert_eq!(result.svg, format_svg(svg, false));
}

#[tokio::test]
async fn no_view_box_and_no_content_resolves_no_window() {
    let svg = r#"<svg><rect width="10" height="10"/></svg>"#;
    let result = run(svg, ProcessingOptions::default()).await;

    assert!(result.success);
    assert!(result.stats.view_box_before.is_none());
    assert!(result.stats.view_box_after.is_none());
}

#[tokio::test]
async fn stock_optimizer_keeps_the_normalized_view_box() {
    let result = process_svg(OFFSET_SVG, &ProcessingOptions::default()).await;

    assert!(result.success, "errors: {:?}", result.errors);
    assert!(result.svg.contains(r#"viewBox="0 0 100 100""#));
    let re = Regex::new(r#"viewBox="[^"]*""#).unwrap();
    assert_eq!(re.find_iter(&result.svg).count(), 1);
}

#[tokio::test]
async fn invalid_input_fails_with_errors() {
    let result = run("not an svg", ProcessingOptions::default()).await;

    assert!(!result.success);
    assert!(!result.errors.is_empty());
    assert_eq!(result.svg, "not an svg");
    assert!(result.stats.view_box_after.is_none());
}

#[tokio::test]
async fn empty_input_fails() {
    for input in ["", "   "] {
        let result = run(input, ProcessingOptions::default()).await;
        assert!(!result.success, "input {input:?} should fail");
        assert!(!result.errors.is_empty());
    }
}

#[tokio::test]
async fn all_options_disabled_is_formatting_only() {
    let options = ProcessingOptions {
        crop_whitespace: false,
        transform_to_origin: false,
        normalize_view_box: false,
        optimize: false,
        minify: false,
    };
    let result = run(OFFSET_SVG, options).await;

    assert!(result.success);
    assert_eq!(result.svg, format_svg(OFFSET_SVG, false));
    // Untouched geometry: the original offset viewBox survives.
    assert!(result.svg.contains(r#"viewBox="50 50 100 100""#));
    assert_eq!(result.stats.view_box_after.unwrap().min_x, 50.0);
}

#[tokio::test]
async fn crop_without_transform_keeps_offset_window() {
    let options = ProcessingOptions {
        crop_whitespace: true,
        transform_to_origin: false,
        normalize_view_box: false,
        optimize: false,
        minify: false,
    };
    let result = run(OFFSET_SVG, options).await;

    assert!(result.success);
    assert!(result.svg.contains(r#"viewBox="10 10 80 80""#));
    // Paths keep their original coordinates.
    assert!(result.svg.contains("M 10 10 L 90 90"));
}

#[tokio::test]
async fn optimizer_failure_is_fatal() {
    let result =
        process_svg_with(OFFSET_SVG, &ProcessingOptions::default(), &FailingOptimizer).await;

    assert!(!result.success);
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].contains("boom"));
    assert!(result.stats.view_box_after.is_none());
}

#[tokio::test]
async fn malformed_path_data_is_fatal() {
    let svg = r#"<svg viewBox="0 0 10 10"><path d="garbage"/></svg>"#;
    let result = run(svg, ProcessingOptions::default()).await;

    assert!(!result.success);
    assert!(!result.errors.is_empty());
    assert_eq!(result.svg, svg);
}

#[tokio::test]
async fn minify_strips_pretty_indentation() {
    let options = ProcessingOptions {
        minify: true,
        ..Default::default()
    };
    let result = run(OFFSET_SVG, options).await;

    assert!(result.success);
    assert!(!result.svg.contains("\n  "));
}

#[tokio::test]
async fn stats_report_character_counts() {
    let options = ProcessingOptions {
        minify: true,
        ..Default::default()
    };
    let result = run(OFFSET_SVG, options).await;

    assert!(result.success);
    assert_eq!(result.stats.original_size, OFFSET_SVG.chars().count());
    assert_eq!(result.stats.processed_size, result.svg.chars().count());
    assert!(result.stats.processed_size <= result.stats.original_size);
}

#[tokio::test]
async fn default_output_is_pretty_printed() {
    let result = run(OFFSET_SVG, ProcessingOptions::default()).await;

    assert!(result.success);
    insta::assert_snapshot!(result.svg, @r#"
<svg viewBox="0 0 100 100">
  <path d="M0 0 L80 80"/>
</svg>
"#);
}

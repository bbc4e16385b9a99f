//! ViewBox rewriting: normalization to `0 0 W H` and cropping to bounds.

use crate::errors::NormalizeError;
use crate::scan::scan_tags;
use crate::types::{Bounds, Compact};

/// Replace the first `viewBox` attribute (matched case-insensitively) with
/// `viewBox="value"`, or insert one right after the `<svg` tag name when
/// none exists. Output always uses canonical attribute casing and double
/// quotes, whatever the input used.
pub(crate) fn set_view_box(svg: &str, value: &str) -> String {
    let tags = scan_tags(svg);

    for tag in &tags {
        if let Some(attr) = tag.attribute("viewBox") {
            let mut out = String::with_capacity(svg.len() + value.len());
            out.push_str(&svg[..attr.span.start]);
            out.push_str("viewBox=\"");
            out.push_str(value);
            out.push('"');
            out.push_str(&svg[attr.span.end..]);
            return out;
        }
    }

    if let Some(tag) = tags
        .iter()
        .find(|t| !t.is_closing && t.name.eq_ignore_ascii_case("svg"))
    {
        let insert_at = tag.span.start + 1 + tag.name.len();
        let mut out = String::with_capacity(svg.len() + value.len());
        out.push_str(&svg[..insert_at]);
        out.push_str(" viewBox=\"");
        out.push_str(value);
        out.push('"');
        out.push_str(&svg[insert_at..]);
        return out;
    }

    // Nothing to anchor the attribute to; leave the document alone.
    svg.to_string()
}

/// Rewrite (or insert) the viewBox as `"0 0 width height"`.
///
/// This is the final step that makes the document truly start at (0, 0);
/// it assumes paths have already been transformed into that frame.
pub fn normalize_view_box(svg: &str, width: f64, height: f64) -> Result<String, NormalizeError> {
    // The comparisons also reject NaN.
    if !(width > 0.0) || !(height > 0.0) {
        return Err(NormalizeError::NonPositiveSize { width, height });
    }
    let value = format!("0 0 {} {}", Compact(width), Compact(height));
    Ok(set_view_box(svg, &value))
}

/// Set the viewBox to the given content bounds, without forcing it to start
/// at the origin.
///
/// This is the cropping half of the pipeline: the window tightens around
/// the content first, and the origin transform moves both to (0, 0) later.
pub fn crop_to_content(svg: &str, bounds: Bounds) -> String {
    let value = format!(
        "{} {} {} {}",
        Compact(bounds.x),
        Compact(bounds.y),
        Compact(bounds.width()),
        Compact(bounds.height())
    );
    set_view_box(svg, &value)
}

//! Origin transform: rewrite path coordinates into a shifted frame.

use glam::DVec2;

use crate::errors::PathDataError;
use crate::log::debug;
use crate::path::PathData;
use crate::scan::scan_tags;
use crate::types::ViewBox;

/// Translate every path in the document by `(-min_x, -min_y)` of the given
/// viewBox, so content anchored to that window lands at the origin.
///
/// When the viewBox already starts at (0, 0) the input is returned
/// byte-identical; that fast path is part of the contract, not an
/// optimization. Otherwise each `<path>` `d` attribute is re-tokenized,
/// shifted (absolute anchors only, see [`PathData::translate`]) and spliced
/// back in place. Markup outside of `d` attribute values is untouched.
pub fn transform_paths_to_origin(svg: &str, view_box: ViewBox) -> Result<String, PathDataError> {
    if view_box.is_at_origin() {
        return Ok(svg.to_string());
    }
    let offset = DVec2::new(-view_box.min_x, -view_box.min_y);
    debug!(offset_x = offset.x, offset_y = offset.y, "translating paths");

    let mut out = String::with_capacity(svg.len());
    let mut copied = 0;
    for tag in scan_tags(svg) {
        if tag.is_closing || !tag.name.eq_ignore_ascii_case("path") {
            continue;
        }
        let Some(attr) = tag.attribute("d") else {
            continue;
        };
        let mut data = PathData::parse(attr.value)?;
        data.translate(offset);
        out.push_str(&svg[copied..attr.value_span.start]);
        out.push_str(&data.to_string());
        copied = attr.value_span.end;
    }
    out.push_str(&svg[copied..]);
    Ok(out)
}

//! Structural parsing: raw markup into a [`ParsedSvg`] summary.

use std::str::FromStr;

use crate::errors::{ParseError, ViewBoxError};
use crate::scan::scan_tags;
use crate::types::{ParsedSvg, ViewBox};

/// Extract viewBox, dimensions and path data from raw SVG markup.
///
/// Fails on empty (or all-whitespace) input and when no `<svg ...>` opening
/// tag exists (matched case-insensitively). A malformed `viewBox` value is
/// tolerated and reported as `view_box: None`; `<path>` elements without a
/// `d` attribute are skipped.
pub fn parse_svg(input: &str) -> Result<ParsedSvg, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let tags = scan_tags(input);
    let svg_tag = tags
        .iter()
        .find(|t| !t.is_closing && t.name.eq_ignore_ascii_case("svg"))
        .ok_or(ParseError::NoSvgElement)?;

    let width = svg_tag.attribute("width").map(|a| a.value.to_string());
    let height = svg_tag.attribute("height").map(|a| a.value.to_string());
    let view_box = svg_tag
        .attribute("viewBox")
        .and_then(|a| parse_view_box(a.value).ok());

    let paths = tags
        .iter()
        .filter(|t| !t.is_closing && t.name.eq_ignore_ascii_case("path"))
        .filter_map(|t| t.attribute("d").map(|a| a.value.to_string()))
        .collect();

    Ok(ParsedSvg {
        view_box,
        width,
        height,
        paths,
    })
}

/// Parse a `viewBox` attribute value into its four numbers.
///
/// Separators may be commas, whitespace runs, or any mix of the two.
/// No validity checks beyond "exactly four numbers": zero or negative
/// dimensions are a consumer concern, not a parse failure.
pub fn parse_view_box(value: &str) -> Result<ViewBox, ViewBoxError> {
    let format_error = || ViewBoxError::Format {
        value: value.to_string(),
    };

    let mut numbers = [0.0f64; 4];
    let mut count = 0;
    for token in value
        .split(|c: char| c.is_ascii_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
    {
        if count == 4 {
            return Err(format_error());
        }
        numbers[count] = token.parse().map_err(|_| format_error())?;
        count += 1;
    }
    if count != 4 {
        return Err(format_error());
    }

    Ok(ViewBox::new(numbers[0], numbers[1], numbers[2], numbers[3]))
}

impl FromStr for ViewBox {
    type Err = ViewBoxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_view_box(s)
    }
}

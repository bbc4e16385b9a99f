//! Minimal streaming scanner over SVG markup.
//!
//! This is deliberately not an XML parser: it only recognizes tags and
//! their attributes, with byte spans back into the original document so
//! later stages can splice rewritten attribute values without disturbing
//! anything else. Comments, doctypes and processing instructions are
//! skipped; quoting is tracked so a `>` inside an attribute value never
//! terminates a tag.

use std::ops::Range;

/// One attribute inside an opening tag.
#[derive(Clone, Debug, PartialEq)]
pub struct Attribute<'a> {
    pub name: &'a str,
    /// Value with quotes stripped (empty for bare attributes).
    pub value: &'a str,
    /// Byte range of the whole `name="value"` attribute in the document.
    pub span: Range<usize>,
    /// Byte range of just the value, between the quotes.
    pub value_span: Range<usize>,
}

/// One tag in document order.
#[derive(Clone, Debug, PartialEq)]
pub struct Tag<'a> {
    pub name: &'a str,
    /// Byte range from `<` through `>` (or end of input if unterminated).
    pub span: Range<usize>,
    pub is_closing: bool,
    pub self_closing: bool,
    pub attributes: Vec<Attribute<'a>>,
}

impl<'a> Tag<'a> {
    /// Look up an attribute by case-insensitive name.
    pub fn attribute(&self, name: &str) -> Option<&Attribute<'a>> {
        self.attributes
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name))
    }
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b':' | b'_' | b'-' | b'.')
}

/// Scan every tag in the document, in order.
///
/// Stray `<` characters that do not start a tag are passed over; an
/// unterminated final tag is returned with a span reaching end of input.
pub fn scan_tags(input: &str) -> Vec<Tag<'_>> {
    let bytes = input.as_bytes();
    let mut tags = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'<' {
            i += 1;
            continue;
        }
        if input[i..].starts_with("<!--") {
            i = match input[i..].find("-->") {
                Some(p) => i + p + 3,
                None => bytes.len(),
            };
            continue;
        }
        if i + 1 < bytes.len() && (bytes[i + 1] == b'!' || bytes[i + 1] == b'?') {
            // Doctype or processing instruction; these carry no path data.
            i = match input[i..].find('>') {
                Some(p) => i + p + 1,
                None => bytes.len(),
            };
            continue;
        }

        let start = i;
        let mut j = i + 1;
        let is_closing = j < bytes.len() && bytes[j] == b'/';
        if is_closing {
            j += 1;
        }
        let name_start = j;
        while j < bytes.len() && is_name_byte(bytes[j]) {
            j += 1;
        }
        if j == name_start {
            // Stray '<' with no tag name.
            i += 1;
            continue;
        }
        let name = &input[name_start..j];

        let mut attributes = Vec::new();
        let mut self_closing = false;
        loop {
            while j < bytes.len() && bytes[j].is_ascii_whitespace() {
                j += 1;
            }
            if j >= bytes.len() {
                break;
            }
            match bytes[j] {
                b'>' => {
                    j += 1;
                    break;
                }
                b'/' => {
                    if j + 1 < bytes.len() && bytes[j + 1] == b'>' {
                        self_closing = true;
                        j += 2;
                        break;
                    }
                    j += 1;
                }
                _ => {
                    let attr_start = j;
                    while j < bytes.len()
                        && !bytes[j].is_ascii_whitespace()
                        && !matches!(bytes[j], b'=' | b'>' | b'/')
                    {
                        j += 1;
                    }
                    let attr_name = &input[attr_start..j];
                    if attr_name.is_empty() {
                        j += 1;
                        continue;
                    }
                    while j < bytes.len() && bytes[j].is_ascii_whitespace() {
                        j += 1;
                    }
                    let value_span;
                    if j < bytes.len() && bytes[j] == b'=' {
                        j += 1;
                        while j < bytes.len() && bytes[j].is_ascii_whitespace() {
                            j += 1;
                        }
                        if j < bytes.len() && (bytes[j] == b'"' || bytes[j] == b'\'') {
                            let quote = bytes[j];
                            j += 1;
                            let value_start = j;
                            while j < bytes.len() && bytes[j] != quote {
                                j += 1;
                            }
                            value_span = value_start..j;
                            if j < bytes.len() {
                                j += 1; // closing quote
                            }
                        } else {
                            let value_start = j;
                            while j < bytes.len()
                                && !bytes[j].is_ascii_whitespace()
                                && bytes[j] != b'>'
                            {
                                j += 1;
                            }
                            value_span = value_start..j;
                        }
                    } else {
                        // Bare attribute with no value.
                        value_span = j..j;
                    }
                    attributes.push(Attribute {
                        name: attr_name,
                        value: &input[value_span.clone()],
                        span: attr_start..j,
                        value_span,
                    });
                }
            }
        }

        tags.push(Tag {
            name,
            span: start..j,
            is_closing,
            self_closing,
            attributes,
        });
        i = j;
    }

    tags
}

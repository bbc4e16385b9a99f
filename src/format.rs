//! Cosmetic formatting: pretty-print or minify SVG markup.
//!
//! Purely whitespace transforms. Element and attribute content is never
//! altered, only the space between tags and runs of blanks.

/// Format an SVG string: minified when `minify` is true, otherwise
/// pretty-printed with two-space indentation.
pub fn format_svg(svg: &str, minify: bool) -> String {
    if minify {
        minify_svg(svg)
    } else {
        pretty_print(svg)
    }
}

/// Drop whitespace-only runs between tags, collapse any remaining run of
/// two or more whitespace characters to a single space, and trim.
fn minify_svg(svg: &str) -> String {
    let bytes = svg.as_bytes();
    let mut joined = String::with_capacity(svg.len());

    // First pass: remove whitespace between '>' and '<'.
    let mut i = 0;
    let mut copied = 0;
    while i < bytes.len() {
        if bytes[i] == b'>' {
            let mut j = i + 1;
            while j < bytes.len() && bytes[j].is_ascii_whitespace() {
                j += 1;
            }
            if j > i + 1 && j < bytes.len() && bytes[j] == b'<' {
                joined.push_str(&svg[copied..=i]);
                copied = j;
                i = j;
                continue;
            }
        }
        i += 1;
    }
    joined.push_str(&svg[copied..]);

    // Second pass: collapse remaining whitespace runs of length >= 2.
    let mut out = String::with_capacity(joined.len());
    let mut run = 0usize;
    let mut run_char = ' ';
    for c in joined.chars() {
        if c.is_whitespace() {
            run += 1;
            run_char = c;
            continue;
        }
        match run {
            0 => {}
            1 => out.push(run_char),
            _ => out.push(' '),
        }
        run = 0;
        out.push(c);
    }
    // A trailing run disappears with the final trim anyway.

    out.trim().to_string()
}

/// Split the document on `>`-whitespace-`<` boundaries, keeping the
/// brackets out of the chunks (they are re-added while indenting).
fn split_tag_boundaries(svg: &str) -> Vec<&str> {
    let bytes = svg.as_bytes();
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'>' {
            let mut j = i + 1;
            while j < bytes.len() && bytes[j].is_ascii_whitespace() {
                j += 1;
            }
            if j < bytes.len() && bytes[j] == b'<' {
                chunks.push(&svg[start..i]);
                start = j + 1;
                i = j + 1;
                continue;
            }
        }
        i += 1;
    }
    chunks.push(&svg[start..]);
    chunks
}

/// True when the line is purely a closing tag (`</...>` with no opening
/// tag in front of it).
fn is_pure_closing(line: &str) -> bool {
    let mut opens = false;
    let mut closes = false;
    let bytes = line.as_bytes();
    for k in 0..bytes.len().saturating_sub(1) {
        if bytes[k] == b'<' {
            if bytes[k + 1] == b'/' {
                closes = true;
            } else {
                opens = true;
            }
        }
    }
    closes && !opens
}

/// True when the line opens a scope: an opening tag that is neither
/// self-closing nor immediately closed on the same line.
fn opens_scope(line: &str) -> bool {
    let bytes = line.as_bytes();
    let mut opens = false;
    for k in 0..bytes.len().saturating_sub(1) {
        if bytes[k] == b'<' && !matches!(bytes[k + 1], b'/' | b'!' | b'?') {
            opens = true;
            break;
        }
    }
    opens && !line.contains("/>") && !line.contains("</")
}

/// Re-indent the document, two spaces per nesting level.
fn pretty_print(svg: &str) -> String {
    let chunks = split_tag_boundaries(svg);
    let last = chunks.len().saturating_sub(1);
    let mut formatted = String::with_capacity(svg.len() + chunks.len() * 4);
    let mut indent: i32 = 0;

    for (i, chunk) in chunks.iter().enumerate() {
        let mut line = String::new();
        if i > 0 {
            line.push('<');
        }
        line.push_str(chunk.trim());
        if i < last {
            line.push('>');
        }

        if is_pure_closing(&line) {
            indent -= 1;
        }

        for _ in 0..indent.max(0) {
            formatted.push_str("  ");
        }
        formatted.push_str(&line);
        formatted.push('\n');

        if opens_scope(&line) {
            indent += 1;
        }
    }

    formatted.trim().to_string()
}

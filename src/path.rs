//! Path command model: tokenize, translate and re-serialize `d` attributes.
//!
//! The `d` attribute is parsed with a small pest grammar into a flat list of
//! [`PathCommand`] values (implicit repetitions are unrolled, so `M 1 2 3 4`
//! becomes a move plus a line). Translation then only has to reason about
//! one command at a time, and serialization produces the compact form
//! consumers tolerate (`M10 10 L90 90`).

use glam::{DVec2, dvec2};
use miette::NamedSource;
use pest::Parser;
use pest::iterators::Pair;
use pest_derive::Parser;

use crate::errors::PathDataError;
use crate::types::Compact;

#[derive(Parser)]
#[grammar = "svgpath.pest"]
struct PathParser;

/// One drawing command with its numeric arguments resolved.
///
/// `abs` distinguishes the uppercase (absolute) form from the lowercase
/// (relative) one; both carry identical argument shapes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    Move { abs: bool, to: DVec2 },
    Line { abs: bool, to: DVec2 },
    HLine { abs: bool, x: f64 },
    VLine { abs: bool, y: f64 },
    Cubic { abs: bool, c1: DVec2, c2: DVec2, to: DVec2 },
    SmoothCubic { abs: bool, c2: DVec2, to: DVec2 },
    Quad { abs: bool, c: DVec2, to: DVec2 },
    SmoothQuad { abs: bool, to: DVec2 },
    Arc {
        abs: bool,
        radii: DVec2,
        x_rotation: f64,
        large_arc: bool,
        sweep: bool,
        to: DVec2,
    },
    Close,
}

/// Argument count for one group of a command.
fn arity(upper: char) -> usize {
    match upper {
        'M' | 'L' | 'T' => 2,
        'H' | 'V' => 1,
        'C' => 6,
        'S' | 'Q' => 4,
        'Z' => 0,
        _ => unreachable!("grammar only emits known command letters"),
    }
}

/// A parsed `d` attribute.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathData {
    pub commands: Vec<PathCommand>,
}

impl PathData {
    /// Tokenize one `d` attribute value.
    pub fn parse(d: &str) -> Result<PathData, PathDataError> {
        let mut pairs = PathParser::parse(Rule::path_data, d).map_err(|e| {
            let span = match e.location {
                pest::error::InputLocation::Pos(p) => (p, 0).into(),
                pest::error::InputLocation::Span((s, e)) => (s, e - s).into(),
            };
            PathDataError::UnexpectedToken {
                src: NamedSource::new("path data", d.to_string()),
                span,
            }
        })?;

        let root = pairs.next().expect("path_data rule always matches once");
        let mut commands = Vec::new();
        for pair in root.into_inner() {
            if pair.as_rule() != Rule::command {
                continue;
            }
            let inner = pair
                .into_inner()
                .next()
                .expect("a command is either an arc or a generic command");
            match inner.as_rule() {
                Rule::arc => append_arcs(&mut commands, inner, d)?,
                Rule::generic => append_command(&mut commands, inner, d)?,
                _ => unreachable!("command has no other alternatives"),
            }
        }
        Ok(PathData { commands })
    }

    /// Shift every absolute coordinate pair by `offset`.
    ///
    /// Relative commands are translation-invariant and stay numerically
    /// unchanged, with one exception: the first point of the path is
    /// absolute even under a lowercase initial `m` (it anchors the whole
    /// subpath), so it is always shifted. Arc radii, rotation and flags are
    /// not coordinates and are never touched.
    pub fn translate(&mut self, offset: DVec2) {
        for (index, command) in self.commands.iter_mut().enumerate() {
            match command {
                PathCommand::Move { abs, to } => {
                    if *abs || index == 0 {
                        *to += offset;
                    }
                }
                PathCommand::Line { abs, to } | PathCommand::SmoothQuad { abs, to } => {
                    if *abs {
                        *to += offset;
                    }
                }
                PathCommand::HLine { abs, x } => {
                    if *abs {
                        *x += offset.x;
                    }
                }
                PathCommand::VLine { abs, y } => {
                    if *abs {
                        *y += offset.y;
                    }
                }
                PathCommand::Cubic { abs, c1, c2, to } => {
                    if *abs {
                        *c1 += offset;
                        *c2 += offset;
                        *to += offset;
                    }
                }
                PathCommand::SmoothCubic { abs, c2, to } => {
                    if *abs {
                        *c2 += offset;
                        *to += offset;
                    }
                }
                PathCommand::Quad { abs, c, to } => {
                    if *abs {
                        *c += offset;
                        *to += offset;
                    }
                }
                PathCommand::Arc { abs, to, .. } => {
                    if *abs {
                        *to += offset;
                    }
                }
                PathCommand::Close => {}
            }
        }
    }
}

/// Unroll one grammar-level command (letter plus argument stream) into
/// as many [`PathCommand`] values as its arity allows.
fn append_command(
    commands: &mut Vec<PathCommand>,
    pair: Pair<'_, Rule>,
    d: &str,
) -> Result<(), PathDataError> {
    let span = pair.as_span();
    let source_span = (span.start(), span.end() - span.start());
    let mut inner = pair.into_inner();
    let letter_pair = inner.next().expect("command starts with its letter");
    let letter = letter_pair
        .as_str()
        .chars()
        .next()
        .expect("cmd rule matches one letter");
    let abs = letter.is_ascii_uppercase();
    let upper = letter.to_ascii_uppercase();

    let mut args = Vec::new();
    for number in inner {
        // The number rule only matches valid float syntax.
        args.push(number.as_str().parse::<f64>().unwrap_or(0.0));
    }

    if upper == 'Z' {
        if !args.is_empty() {
            return Err(PathDataError::CloseWithArguments {
                command: letter,
                src: NamedSource::new("path data", d.to_string()),
                span: source_span.into(),
            });
        }
        commands.push(PathCommand::Close);
        return Ok(());
    }

    let n = arity(upper);
    if args.is_empty() || args.len() % n != 0 {
        return Err(PathDataError::IncompleteArguments {
            command: letter,
            arity: n,
            src: NamedSource::new("path data", d.to_string()),
            span: source_span.into(),
        });
    }

    for (group, chunk) in args.chunks(n).enumerate() {
        let command = match upper {
            // Extra argument groups on a moveto are implicit linetos.
            'M' if group == 0 => PathCommand::Move {
                abs,
                to: dvec2(chunk[0], chunk[1]),
            },
            'M' | 'L' => PathCommand::Line {
                abs,
                to: dvec2(chunk[0], chunk[1]),
            },
            'H' => PathCommand::HLine { abs, x: chunk[0] },
            'V' => PathCommand::VLine { abs, y: chunk[0] },
            'C' => PathCommand::Cubic {
                abs,
                c1: dvec2(chunk[0], chunk[1]),
                c2: dvec2(chunk[2], chunk[3]),
                to: dvec2(chunk[4], chunk[5]),
            },
            'S' => PathCommand::SmoothCubic {
                abs,
                c2: dvec2(chunk[0], chunk[1]),
                to: dvec2(chunk[2], chunk[3]),
            },
            'Q' => PathCommand::Quad {
                abs,
                c: dvec2(chunk[0], chunk[1]),
                to: dvec2(chunk[2], chunk[3]),
            },
            'T' => PathCommand::SmoothQuad {
                abs,
                to: dvec2(chunk[0], chunk[1]),
            },
            _ => unreachable!("grammar only emits known command letters"),
        };
        commands.push(command);
    }
    Ok(())
}

/// Unroll one arc command. The grammar lexes complete seven-argument groups
/// (with single-digit flags), so all that is left here is converting each
/// group into a [`PathCommand::Arc`].
fn append_arcs(
    commands: &mut Vec<PathCommand>,
    pair: Pair<'_, Rule>,
    d: &str,
) -> Result<(), PathDataError> {
    let span = pair.as_span();
    let source_span = (span.start(), span.end() - span.start());
    let mut inner = pair.into_inner();
    let letter = inner
        .next()
        .expect("arc starts with its letter")
        .as_str()
        .chars()
        .next()
        .expect("arc_cmd rule matches one letter");
    let abs = letter.is_ascii_uppercase();

    let mut any = false;
    for group in inner {
        let fields: Vec<&str> = group.into_inner().map(|p| p.as_str()).collect();
        let num = |i: usize| fields[i].parse::<f64>().unwrap_or(0.0);
        commands.push(PathCommand::Arc {
            abs,
            radii: dvec2(num(0), num(1)),
            x_rotation: num(2),
            large_arc: fields[3] == "1",
            sweep: fields[4] == "1",
            to: dvec2(num(5), num(6)),
        });
        any = true;
    }
    if !any {
        return Err(PathDataError::IncompleteArguments {
            command: letter,
            arity: 7,
            src: NamedSource::new("path data", d.to_string()),
            span: source_span.into(),
        });
    }
    Ok(())
}

fn letter(base: char, abs: bool) -> char {
    if abs { base } else { base.to_ascii_lowercase() }
}

impl std::fmt::Display for PathCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            PathCommand::Move { abs, to } => {
                write!(f, "{}{} {}", letter('M', abs), Compact(to.x), Compact(to.y))
            }
            PathCommand::Line { abs, to } => {
                write!(f, "{}{} {}", letter('L', abs), Compact(to.x), Compact(to.y))
            }
            PathCommand::HLine { abs, x } => write!(f, "{}{}", letter('H', abs), Compact(x)),
            PathCommand::VLine { abs, y } => write!(f, "{}{}", letter('V', abs), Compact(y)),
            PathCommand::Cubic { abs, c1, c2, to } => write!(
                f,
                "{}{} {} {} {} {} {}",
                letter('C', abs),
                Compact(c1.x),
                Compact(c1.y),
                Compact(c2.x),
                Compact(c2.y),
                Compact(to.x),
                Compact(to.y)
            ),
            PathCommand::SmoothCubic { abs, c2, to } => write!(
                f,
                "{}{} {} {} {}",
                letter('S', abs),
                Compact(c2.x),
                Compact(c2.y),
                Compact(to.x),
                Compact(to.y)
            ),
            PathCommand::Quad { abs, c, to } => write!(
                f,
                "{}{} {} {} {}",
                letter('Q', abs),
                Compact(c.x),
                Compact(c.y),
                Compact(to.x),
                Compact(to.y)
            ),
            PathCommand::SmoothQuad { abs, to } => {
                write!(f, "{}{} {}", letter('T', abs), Compact(to.x), Compact(to.y))
            }
            PathCommand::Arc {
                abs,
                radii,
                x_rotation,
                large_arc,
                sweep,
                to,
            } => write!(
                f,
                "{}{} {} {} {} {} {} {}",
                letter('A', abs),
                Compact(radii.x),
                Compact(radii.y),
                Compact(x_rotation),
                large_arc as u8,
                sweep as u8,
                Compact(to.x),
                Compact(to.y)
            ),
            PathCommand::Close => write!(f, "Z"),
        }
    }
}

impl std::fmt::Display for PathData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", command)?;
        }
        Ok(())
    }
}

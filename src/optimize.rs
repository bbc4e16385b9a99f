//! The optimizer collaborator.
//!
//! Optimization is a capability the pipeline depends on through a trait, so
//! tests can stub it out and callers can plug in whatever backing they
//! like. The stock implementation hands the document to usvg and takes the
//! re-serialized tree back; its internal strategy is deliberately opaque
//! here, all the pipeline relies on is "string in, smaller string out, or a
//! failure on markup the optimizer cannot parse".

use std::future::Future;

use crate::errors::OptimizeError;
use crate::normalize::set_view_box;
use crate::parse::parse_svg;
use crate::types::Compact;

/// An external SVG optimizer.
///
/// The only suspension point in the whole pipeline: optimization may do
/// non-trivial work, so the call is async. Implementations must treat
/// unparsable input as an error, never as something to pass through, and
/// must keep a viewBox on documents that carry one.
pub trait Optimizer {
    fn optimize(&self, svg: &str) -> impl Future<Output = Result<String, OptimizeError>>;
}

/// Stock optimizer backed by usvg: parse the document into a simplified
/// tree and write it back without indentation.
#[derive(Clone, Copy, Debug, Default)]
pub struct UsvgOptimizer;

impl Optimizer for UsvgOptimizer {
    async fn optimize(&self, svg: &str) -> Result<String, OptimizeError> {
        let window = parse_svg(svg).ok().and_then(|p| p.view_box);

        let tree =
            usvg::Tree::from_str(svg, &usvg::Options::default()).map_err(|e| {
                OptimizeError::Rejected {
                    message: e.to_string(),
                }
            })?;
        let write_options = usvg::WriteOptions {
            indent: usvg::Indent::None,
            ..Default::default()
        };
        let out = tree.to_string(&write_options);

        // usvg resolves the viewBox into the canvas size and drops the
        // attribute on write; put the window back so consumers that size by
        // viewBox keep working. usvg re-expresses content relative to the
        // window, so the restored value always starts at the origin.
        Ok(match window {
            Some(vb) => set_view_box(
                &out,
                &format!("0 0 {} {}", Compact(vb.width), Compact(vb.height)),
            ),
            None => out,
        })
    }
}

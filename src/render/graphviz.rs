// SPDX-License-Identifier: MPL-2.0
//! DOT rendering through the `layout-rs` engine.
//!
//! Layout is fully delegated: we hand an opaque DOT string to the library and
//! get SVG back, wrapped in an Iced handle ready for display. Rendering runs on
//! the async executor so a slow layout never blocks the update loop.

use crate::error::{Error, Result};
use iced::widget::svg;
use layout::backends::svg::SVGWriter;
use layout::gv;

/// One laid-out diagram, ready for the stage.
#[derive(Debug, Clone)]
pub struct RenderedGraph {
    handle: svg::Handle,
}

impl RenderedGraph {
    pub fn handle(&self) -> svg::Handle {
        self.handle.clone()
    }
}

/// Lays out a single DOT source and produces its SVG.
pub fn render(source: &str) -> Result<RenderedGraph> {
    if source.trim().is_empty() {
        return Err(Error::Graph("empty diagram source".into()));
    }

    let mut parser = gv::DotParser::new(source);
    let graph = parser.process().map_err(Error::Graph)?;

    // The layout engine asserts internally on degenerate input such as a
    // node-less `digraph {}`; contain that instead of killing the render task.
    let content = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let mut builder = gv::GraphBuilder::new();
        builder.visit_graph(&graph);
        let mut visual = builder.get();

        let mut writer = SVGWriter::new();
        visual.do_it(false, false, false, &mut writer);
        writer.finalize()
    }))
    .map_err(|_| Error::Graph("diagram has no drawable content".into()))?;

    Ok(RenderedGraph {
        handle: svg::Handle::from_memory(content.into_bytes()),
    })
}

// SPDX-License-Identifier: MPL-2.0
//! Diagram rendering: DOT layout and the crossfade between slides.

pub mod graphviz;
pub mod transition;

pub use graphviz::RenderedGraph;
pub use transition::Transition;

// SPDX-License-Identifier: MPL-2.0
//! DotShow core library.
//!
//! A slideshow viewer for Graphviz DOT diagrams: a deck of diagram sources is
//! rendered to SVG and presented one at a time with crossfade transitions,
//! manual navigation, and a play mode that auto-advances through the deck.

pub mod app;
pub mod config;
pub mod deck;
pub mod error;
pub mod i18n;
pub mod playback;
pub mod render;
pub mod ui;

// SPDX-License-Identifier: MPL-2.0
//! User interface components following the Elm-style "state down, messages up"
//! pattern.
//!
//! - [`controls`] - Transport bar: previous/next/play-pause, slider, index label
//! - [`pane`] - The diagram stage with crossfade, empty and error states
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod controls;
pub mod design_tokens;
pub mod pane;
pub mod styles;
pub mod theming;

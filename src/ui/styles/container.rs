// SPDX-License-Identifier: MPL-2.0
//! Centralized container styles.

use crate::ui::design_tokens::palette;
use iced::widget::container;
use iced::{Background, Theme};

/// Backdrop for the diagram stage. Diagrams are rendered on a neutral surface
/// so node and edge colors read the same in both theme modes.
pub fn stage(theme: &Theme) -> container::Style {
    let background = if matches!(theme, Theme::Light) {
        palette::WHITE
    } else {
        palette::GRAY_900
    };

    container::Style {
        background: Some(Background::Color(background)),
        ..container::Style::default()
    }
}

/// Bar hosting the transport controls.
pub fn toolbar(theme: &Theme) -> container::Style {
    let background = if matches!(theme, Theme::Light) {
        palette::GRAY_100
    } else {
        iced::Color::from_rgb(0.15, 0.15, 0.15)
    };

    container::Style {
        background: Some(Background::Color(background)),
        ..container::Style::default()
    }
}

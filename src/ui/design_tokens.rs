// SPDX-License-Identifier: MPL-2.0
//! Design tokens centralisés suivant le Design Tokens W3C standard.
//!
//! Tokens are designed to be consistent: maintain the ratios (e.g. MD = XS * 2)
//! when adjusting anything here.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors (blue scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0); // Medium light blue
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9); // Primary blue
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8); // Medium dark blue

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const BUTTON_HEIGHT: f32 = 32.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    pub const CAPTION: f32 = 12.0;
    pub const BODY: f32 = 16.0;
    pub const TITLE_LG: f32 = 24.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
}

// ============================================================================
// Shadows
// ============================================================================

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::new(0.0, 0.0),
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color {
            a: 0.2,
            ..Color::BLACK
        },
        offset: Vector::new(0.0, 1.0),
        blur_radius: 2.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color {
            a: 0.3,
            ..Color::BLACK
        },
        offset: Vector::new(0.0, 2.0),
        blur_radius: 4.0,
    };
}

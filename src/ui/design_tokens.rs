// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_vitrine::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Create a backdrop color
let backdrop = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BLACK
};

// Use the spacing scale
let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.11, 0.125, 0.15);
    pub const GRAY_700: Color = Color::from_rgb(0.27, 0.3, 0.35);
    pub const GRAY_400: Color = Color::from_rgb(0.41, 0.44, 0.5);
    pub const GRAY_200: Color = Color::from_rgb(0.77, 0.78, 0.8);
    pub const GRAY_100: Color = Color::from_rgb(0.9, 0.91, 0.93);

    // Brand colors (orange scale)
    pub const ORANGE_100: Color = Color::from_rgb(1.0, 0.93, 0.88); // Pale orange
    pub const ORANGE_300: Color = Color::from_rgb(1.0, 0.76, 0.55); // Light orange
    pub const ORANGE_500: Color = Color::from_rgb(1.0, 0.49, 0.11); // Primary orange
    pub const ORANGE_600: Color = Color::from_rgb(0.9, 0.42, 0.07); // Medium dark orange
    pub const ORANGE_700: Color = Color::from_rgb(0.77, 0.35, 0.05); // Dark orange

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.75;
    pub const OVERLAY_HOVER: f32 = 0.85;
    pub const OPAQUE: f32 = 1.0;

    /// Surface background - panels floating above the page
    pub const SURFACE: f32 = 0.98;
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
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;

    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 44.0;
    pub const NAV_CONTROL: f32 = 40.0;

    // Gallery
    pub const GALLERY_IMAGE: f32 = 420.0;
    pub const LIGHTBOX_IMAGE: f32 = 520.0;
    pub const THUMBNAIL: f32 = 84.0;

    // Panels
    pub const CART_PANEL_WIDTH: f32 = 360.0;
    pub const MENU_PANEL_WIDTH: f32 = 250.0;
    pub const PRODUCT_PANEL_WIDTH: f32 = 420.0;

    // Cart rows
    pub const CART_ROW_THUMB: f32 = 48.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Large title - product name
    pub const TITLE_LG: f32 = 34.0;

    /// Medium title - panel headers, price
    pub const TITLE_MD: f32 = 22.0;

    /// Small title - brand kicker
    pub const TITLE_SM: f32 = 14.0;

    /// Standard body - most UI text, labels, descriptions
    pub const BODY: f32 = 15.0;

    /// Caption - badges, struck-through prices, small info
    pub const CAPTION: f32 = 13.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 6.0;
    pub const MD: f32 = 10.0;
    pub const LG: f32 = 14.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 10.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 10.0 },
        blur_radius: 24.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Sizing validation
    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::ICON_MD > sizing::ICON_SM);
    assert!(sizing::LIGHTBOX_IMAGE > sizing::GALLERY_IMAGE);
    assert!(sizing::THUMBNAIL < sizing::GALLERY_IMAGE);

    // Typography validation
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::CAPTION);

    // Color validation
    assert!(palette::ORANGE_500.r >= 0.0 && palette::ORANGE_500.r <= 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn brand_orange_is_warm() {
        assert!(palette::ORANGE_500.r > palette::ORANGE_500.b);
        assert!(palette::ORANGE_100.r > palette::ORANGE_100.b);
    }
}

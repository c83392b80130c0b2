// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic panel surface used by the cart and menu overlays.
///
/// The color is derived from the active Iced `Theme` background, with a
/// slight opacity, so panels stay readable in both light and dark modes
/// without hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let palette_ext = theme.extended_palette();
    let base = palette_ext.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Toolbar strip at the top of the page.
pub fn toolbar(theme: &Theme) -> container::Style {
    let palette_ext = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette_ext.background.base.color)),
        border: Border {
            color: palette_ext.background.strong.color,
            width: 1.0,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Round badge showing the cart item count.
pub fn badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::ORANGE_500)),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Pale brand chip behind the discount percentage.
pub fn discount_chip(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::ORANGE_100)),
        text_color: Some(palette::ORANGE_600),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style pour bouton primaire (action principale).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::ORANGE_500)),
            text_color: WHITE,
            border: Border {
                color: palette::ORANGE_600,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::ORANGE_300)),
            text_color: palette::GRAY_900,
            border: Border {
                color: palette::ORANGE_500,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(palette::GRAY_200)),
            text_color: palette::GRAY_400,
            border: Border {
                color: palette::GRAY_400,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Style pour boutons overlay (navigation du carrousel, fermeture).
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered | button::Status::Pressed => alpha_hover,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Quiet icon button used in the navbar and stepper.
pub fn icon(theme: &Theme, status: button::Status) -> button::Style {
    let palette_ext = theme.extended_palette();

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette_ext.background.weak.color)),
            text_color: palette::ORANGE_500,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        _ => button::Style {
            background: None,
            text_color: palette_ext.background.base.text,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Borderless row button for menu links.
pub fn menu_item(theme: &Theme, status: button::Status) -> button::Style {
    let palette_ext = theme.extended_palette();

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: palette_ext.background.base.text,
            border: Border::default(),
            ..Default::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(palette_ext.background.strong.color.into()),
            text_color: palette_ext.background.base.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::ORANGE_500)),
            text_color: WHITE,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: palette_ext.background.weak.text,
            border: Border::default(),
            ..Default::default()
        },
    }
}

/// Thumbnail frame; the active one carries the brand border and dims its
/// artwork slightly, mirroring the page's active-thumbnail marker.
pub fn thumbnail(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (border_color, border_width) = if active {
            (palette::ORANGE_500, 2.0)
        } else {
            (
                Color {
                    a: opacity::TRANSPARENT,
                    ..BLACK
                },
                2.0,
            )
        };

        let background = if active || status == button::Status::Hovered {
            Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..WHITE
            }))
        } else {
            None
        };

        button::Style {
            background,
            text_color: palette::GRAY_900,
            border: Border {
                color: border_color,
                width: border_width,
                radius: radius::MD.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let theme = Theme::Light;
        let style = primary(&theme, button::Status::Active);

        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg, palette::ORANGE_500);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn primary_button_grays_out_when_disabled() {
        let theme = Theme::Light;
        let style = primary(&theme, button::Status::Disabled);
        assert_eq!(style.text_color, palette::GRAY_400);
    }

    #[test]
    fn overlay_button_alpha_changes_on_hover() {
        let theme = Theme::Dark;
        let style_fn = overlay(WHITE, 0.5, 0.8);

        let normal = style_fn(&theme, button::Status::Active);
        let hover = style_fn(&theme, button::Status::Hovered);
        assert_ne!(normal.background, hover.background);
    }

    #[test]
    fn active_thumbnail_carries_brand_border() {
        let theme = Theme::Light;
        let active = thumbnail(true)(&theme, button::Status::Active);
        let inactive = thumbnail(false)(&theme, button::Status::Active);

        assert_eq!(active.border.color, palette::ORANGE_500);
        assert_eq!(inactive.border.color.a, opacity::TRANSPARENT);
    }
}

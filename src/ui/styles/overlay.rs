// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for the lightbox backdrop and floating controls.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, WHITE},
};
use iced::widget::{container, svg};
use iced::{Background, Border, Color, Theme};

fn backdrop_background() -> Color {
    Color {
        a: opacity::OVERLAY_STRONG,
        ..BLACK
    }
}

/// Dimmed full-window layer behind an overlay panel.
#[must_use]
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(backdrop_background())),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Generic style for floating indicators above the gallery.
pub fn indicator(rad: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(backdrop_background())),
        text_color: Some(WHITE),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..WHITE
            },
            width: 1.0,
            radius: rad.into(),
        },
        ..Default::default()
    }
}

/// Recolors monochrome control icons drawn with `currentColor`.
pub fn icon_color(color: Color) -> impl Fn(&Theme, svg::Status) -> svg::Style {
    move |_theme: &Theme, _status: svg::Status| svg::Style { color: Some(color) }
}

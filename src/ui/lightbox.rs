// SPDX-License-Identifier: MPL-2.0
//! Enlarged-view overlay: the same gallery, bigger, above a dimmed
//! backdrop, with its own close control.
//!
//! The lightbox renders from the same navigator state as the inline
//! gallery, so the mirrored image and active thumbnail can never
//! disagree with it.

use crate::catalog::Catalog;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::gallery_panel;
use crate::ui::icons;
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Stack, Text},
    Element, Length,
};

/// Contextual data needed to render the lightbox.
pub struct ViewContext<'a> {
    pub catalog: &'a Catalog,
    pub current: usize,
    pub incoming: Option<usize>,
    pub progress: f32,
}

/// Messages emitted by the lightbox.
#[derive(Debug, Clone)]
pub enum Message {
    Close,
    NextPressed,
    PreviousPressed,
    ThumbnailPressed(usize),
}

/// Render the lightbox panel (backdrop handling lives with the caller).
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let close_button = Container::new(
        button(
            icons::sized(icons::close(), sizing::ICON_MD)
                .style(styles::overlay::icon_color(palette::WHITE)),
        )
        .on_press(Message::Close)
        .padding(spacing::XS)
        .style(styles::button::overlay(palette::WHITE, 0.0, 0.5)),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Right);

    let media = gallery_panel::crossfade(
        ctx.catalog,
        ctx.current,
        ctx.incoming,
        ctx.progress,
        sizing::LIGHTBOX_IMAGE,
    );

    let controls = gallery_panel::nav_controls(Message::PreviousPressed, Message::NextPressed);

    // Position counter: counts the committed image, like the strip marker.
    let counter = Container::new(
        Container::new(
            Text::new(format!("{} / {}", ctx.current + 1, ctx.catalog.image_count()))
                .size(typography::CAPTION),
        )
        .padding([spacing::XXS, spacing::SM])
        .style(styles::overlay::indicator(radius::FULL)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Bottom)
    .padding(spacing::SM);

    let stage = Stack::new()
        .width(Length::Fixed(sizing::LIGHTBOX_IMAGE))
        .height(Length::Fixed(sizing::LIGHTBOX_IMAGE))
        .push(media)
        .push(controls)
        .push(counter);

    let thumbs =
        gallery_panel::thumbnail_strip(ctx.catalog, ctx.current, Message::ThumbnailPressed);

    Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(close_button)
        .push(stage)
        .push(thumbs)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lightbox_view_renders() {
        let catalog = Catalog::default();
        let _element = view(ViewContext {
            catalog: &catalog,
            current: 2,
            incoming: None,
            progress: 1.0,
        });
    }

    #[test]
    fn lightbox_view_renders_mid_transition() {
        let catalog = Catalog::default();
        let _element = view(ViewContext {
            catalog: &catalog,
            current: 3,
            incoming: Some(0),
            progress: 0.8,
        });
    }
}

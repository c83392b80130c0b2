// SPDX-License-Identifier: MPL-2.0
//! Inline product gallery: the main image with its crossfade slots,
//! previous/next controls, the enlarged-view trigger, and the thumbnail
//! strip.

use crate::catalog::Catalog;
use crate::ui::design_tokens::{palette, sizing, spacing};
use crate::ui::icons;
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, svg::Handle, Column, Container, Row, Stack, Svg},
    Element, Length,
};

/// Contextual data needed to render the gallery.
pub struct ViewContext<'a> {
    pub catalog: &'a Catalog,
    /// Committed image index. Stays on the outgoing image while a
    /// directional transition is in flight.
    pub current: usize,
    /// Incoming image of an in-flight transition, if any.
    pub incoming: Option<usize>,
    /// Crossfade progress in `0.0..=1.0`.
    pub progress: f32,
}

/// Messages emitted by the gallery.
#[derive(Debug, Clone)]
pub enum Message {
    ThumbnailPressed(usize),
    NextPressed,
    PreviousPressed,
    OpenLightbox,
}

/// Render the inline gallery column.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let media = crossfade(
        ctx.catalog,
        ctx.current,
        ctx.incoming,
        ctx.progress,
        sizing::GALLERY_IMAGE,
    );

    let controls = nav_controls(Message::PreviousPressed, Message::NextPressed);

    let expand_button = Container::new(
        button(
            icons::sized(icons::expand(), sizing::ICON_SM)
                .style(styles::overlay::icon_color(palette::WHITE)),
        )
        .on_press(Message::OpenLightbox)
        .padding(spacing::XS)
        .style(styles::button::overlay(palette::WHITE, 0.5, 0.8)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Right)
    .align_y(Vertical::Bottom)
    .padding(spacing::SM);

    let stage = Stack::new()
        .width(Length::Fixed(sizing::GALLERY_IMAGE))
        .height(Length::Fixed(sizing::GALLERY_IMAGE))
        .push(media)
        .push(controls)
        .push(expand_button);

    let thumbs = thumbnail_strip(ctx.catalog, active_index(&ctx), Message::ThumbnailPressed);

    Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(stage)
        .push(thumbs)
        .into()
}

/// The thumbnail that carries the active marker: the committed index
/// (the incoming image takes over only once the transition settles).
fn active_index(ctx: &ViewContext<'_>) -> usize {
    ctx.current
}

/// Crossfading image slots. Produces no messages, so both the inline
/// gallery and the lightbox can embed it.
pub fn crossfade<'a, M: 'a>(
    catalog: &Catalog,
    current: usize,
    incoming: Option<usize>,
    progress: f32,
    size: f32,
) -> Element<'a, M> {
    let outgoing = Svg::new(icons::product_image(catalog, current))
        .width(Length::Fixed(size))
        .height(Length::Fixed(size));

    let mut stack = Stack::new()
        .width(Length::Fixed(size))
        .height(Length::Fixed(size));

    match incoming {
        Some(index) => {
            let incoming_slot = Svg::new(icons::product_image(catalog, index))
                .width(Length::Fixed(size))
                .height(Length::Fixed(size))
                .opacity(progress.clamp(0.0, 1.0));
            stack = stack
                .push(outgoing.opacity((1.0 - progress).clamp(0.0, 1.0)))
                .push(incoming_slot);
        }
        None => {
            stack = stack.push(outgoing);
        }
    }

    stack.into()
}

/// Previous/next controls vertically centered over the image.
pub fn nav_controls<'a, M: Clone + 'a>(previous: M, next: M) -> Element<'a, M> {
    let arrow = |handle: Handle, message: M| {
        button(icons::sized(handle, sizing::ICON_MD).style(styles::overlay::icon_color(palette::WHITE)))
            .on_press(message)
            .padding(spacing::XS)
            .style(styles::button::overlay(palette::WHITE, 0.4, 0.7))
    };

    Container::new(
        Row::new()
            .width(Length::Fill)
            .align_y(Vertical::Center)
            .push(arrow(icons::chevron_left(), previous))
            .push(iced::widget::space::horizontal())
            .push(arrow(icons::chevron_right(), next)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_y(Vertical::Center)
    .padding(spacing::SM)
    .into()
}

/// Horizontal thumbnail strip; exactly one entry carries the active
/// marker.
pub fn thumbnail_strip<'a, M: Clone + 'a>(
    catalog: &Catalog,
    active: usize,
    on_press: impl Fn(usize) -> M,
) -> Element<'a, M> {
    let mut row = Row::new().spacing(spacing::MD);

    for index in 0..catalog.image_count() {
        let art = Svg::new(icons::product_thumbnail(catalog, index))
            .width(Length::Fixed(sizing::THUMBNAIL))
            .height(Length::Fixed(sizing::THUMBNAIL))
            .opacity(if index == active { 0.55 } else { 1.0 });

        row = row.push(
            button(art)
                .on_press(on_press(index))
                .padding(0)
                .style(styles::button::thumbnail(index == active)),
        );
    }

    row.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gallery_view_renders_at_rest() {
        let catalog = Catalog::default();
        let _element = view(ViewContext {
            catalog: &catalog,
            current: 0,
            incoming: None,
            progress: 1.0,
        });
    }

    #[test]
    fn gallery_view_renders_mid_transition() {
        let catalog = Catalog::default();
        let _element = view(ViewContext {
            catalog: &catalog,
            current: 1,
            incoming: Some(2),
            progress: 0.5,
        });
    }

    #[test]
    fn active_marker_stays_on_committed_index_during_transition() {
        let catalog = Catalog::default();
        let ctx = ViewContext {
            catalog: &catalog,
            current: 1,
            incoming: Some(2),
            progress: 0.25,
        };
        assert_eq!(active_index(&ctx), 1);
    }
}

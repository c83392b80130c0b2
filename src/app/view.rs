// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The base page (navbar + gallery + product panel) sits at the bottom of
//! a stack; each open overlay adds a layer with a dimmed backdrop. A
//! press on the backdrop itself closes that overlay; presses inside the
//! panel are swallowed by the panel content. Overlays are independent, so
//! several layers may be present at once.

use super::Message;
use crate::cart::CartLedger;
use crate::catalog::Catalog;
use crate::i18n::fluent::I18n;
use crate::ui::cart_panel::{self, ViewContext as CartPanelViewContext};
use crate::ui::design_tokens::spacing;
use crate::ui::gallery_panel::{self, ViewContext as GalleryViewContext};
use crate::ui::lightbox::{self, ViewContext as LightboxViewContext};
use crate::ui::menu::{self, ViewContext as MenuViewContext};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::product_panel::{self, ViewContext as ProductViewContext};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{mouse_area, opaque, scrollable, Column, Container, Row, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a Catalog,
    /// Committed gallery index.
    pub current: usize,
    /// Incoming index of an in-flight transition.
    pub incoming: Option<usize>,
    /// Crossfade progress in `0.0..=1.0`.
    pub progress: f32,
    pub ledger: &'a CartLedger,
    pub pending_quantity: u32,
    pub cart_open: bool,
    pub cart_expanded: bool,
    pub lightbox_open: bool,
    pub menu_open: bool,
    pub is_dark_theme: bool,
}

/// Renders the page with any open overlay layers stacked above it.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        cart_quantity: ctx.ledger.total_quantity(),
        cart_expanded: ctx.cart_expanded,
        is_dark_theme: ctx.is_dark_theme,
    })
    .map(Message::Navbar);

    let gallery_view = gallery_panel::view(GalleryViewContext {
        catalog: ctx.catalog,
        current: ctx.current,
        incoming: ctx.incoming,
        progress: ctx.progress,
    })
    .map(Message::Gallery);

    let product_view = product_panel::view(ProductViewContext {
        i18n: ctx.i18n,
        product: ctx.catalog.product(),
        pending_quantity: ctx.pending_quantity,
    })
    .map(Message::Product);

    let content = Container::new(
        scrollable(
            Container::new(
                Row::new()
                    .spacing(spacing::XXL)
                    .padding(spacing::XL)
                    .push(gallery_view)
                    .push(product_view),
            )
            .width(Length::Fill)
            .align_x(Horizontal::Center),
        ),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_y(Vertical::Center);

    let base = Column::new().push(navbar_view).push(content);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base);

    if ctx.menu_open {
        let panel = menu::view(MenuViewContext { i18n: ctx.i18n }).map(Message::Menu);
        layers = layers.push(overlay_layer(
            panel,
            Message::Menu(menu::Message::Close),
            Horizontal::Left,
            Vertical::Top,
            0.0,
        ));
    }

    if ctx.cart_open {
        let panel = cart_panel::view(CartPanelViewContext {
            i18n: ctx.i18n,
            catalog: ctx.catalog,
            ledger: ctx.ledger,
        })
        .map(Message::CartPanel);
        layers = layers.push(overlay_layer(
            panel,
            Message::CartPanel(cart_panel::Message::Close),
            Horizontal::Right,
            Vertical::Top,
            spacing::LG,
        ));
    }

    if ctx.lightbox_open {
        let panel = lightbox::view(LightboxViewContext {
            catalog: ctx.catalog,
            current: ctx.current,
            incoming: ctx.incoming,
            progress: ctx.progress,
        })
        .map(Message::Lightbox);
        layers = layers.push(overlay_layer(
            panel,
            Message::Lightbox(lightbox::Message::Close),
            Horizontal::Center,
            Vertical::Center,
            0.0,
        ));
    }

    layers.into()
}

/// One overlay layer: a dimmed, press-to-close backdrop with the panel
/// positioned inside it. The panel is opaque to input, so only presses
/// on the backdrop itself dismiss the overlay.
fn overlay_layer(
    panel: Element<'_, Message>,
    on_backdrop: Message,
    align_x: Horizontal,
    align_y: Vertical,
    padding: f32,
) -> Element<'_, Message> {
    let positioned = Container::new(opaque(panel))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(align_x)
        .align_y(align_y)
        .padding(padding)
        .style(styles::overlay::backdrop);

    opaque(mouse_area(positioned).on_press(on_backdrop))
}

// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Every handler follows the same contract: mutate the owning component's
//! state, then let the next `view()` pass re-derive the visible
//! representation. Nothing in here reads input devices or widgets
//! directly.

use super::message::KeyInput;
use super::{persistence, Message};
use crate::cart::{CartLedger, PendingQuantity};
use crate::catalog::Catalog;
use crate::gallery::{Direction, GalleryNavigator, Transition};
use crate::i18n::fluent::I18n;
use crate::ui::cart_panel;
use crate::ui::gallery_panel;
use crate::ui::lightbox;
use crate::ui::menu;
use crate::ui::navbar;
use crate::ui::overlay::Overlays;
use crate::ui::product_panel;
use crate::ui::theming::ThemeMode;
use iced::Task;
use std::time::Instant;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub theme_mode: &'a mut ThemeMode,
    pub reduce_motion: &'a bool,
    pub catalog: &'a Catalog,
    pub gallery: &'a mut GalleryNavigator,
    pub transition: &'a mut Transition,
    pub cart: &'a mut CartLedger,
    pub pending: &'a mut PendingQuantity,
    pub overlays: &'a mut Overlays,
}

/// Handles navbar messages.
pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match message {
        navbar::Message::OpenMenu => ctx.overlays.menu.open(),
        navbar::Message::ToggleCart => ctx.overlays.cart.toggle(),
        navbar::Message::ToggleTheme => {
            *ctx.theme_mode = ctx.theme_mode.toggled();
            persistence::persist_preferences(ctx.theme_mode, ctx.i18n);
        }
    }
    Task::none()
}

/// Handles inline gallery messages.
pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery_panel::Message,
) -> Task<Message> {
    match message {
        gallery_panel::Message::ThumbnailPressed(index) => select_image(ctx, index),
        gallery_panel::Message::NextPressed => navigate(ctx, Direction::Forward),
        gallery_panel::Message::PreviousPressed => navigate(ctx, Direction::Backward),
        gallery_panel::Message::OpenLightbox => ctx.overlays.lightbox.open(),
    }
    Task::none()
}

/// Handles lightbox messages. Navigation shares the inline gallery's
/// paths, so the mirror can never drift from the committed index.
pub fn handle_lightbox_message(
    ctx: &mut UpdateContext<'_>,
    message: lightbox::Message,
) -> Task<Message> {
    match message {
        lightbox::Message::Close => ctx.overlays.lightbox.close(),
        lightbox::Message::NextPressed => navigate(ctx, Direction::Forward),
        lightbox::Message::PreviousPressed => navigate(ctx, Direction::Backward),
        lightbox::Message::ThumbnailPressed(index) => select_image(ctx, index),
    }
    Task::none()
}

/// Handles cart panel messages.
pub fn handle_cart_panel_message(
    ctx: &mut UpdateContext<'_>,
    message: cart_panel::Message,
) -> Task<Message> {
    match message {
        cart_panel::Message::RemoveItem(name) => ctx.cart.remove_item(&name),
        cart_panel::Message::CheckoutPressed => {
            // No checkout flow behind this action on the single page.
        }
        cart_panel::Message::Close => ctx.overlays.cart.close(),
    }
    Task::none()
}

/// Handles navigation menu messages.
pub fn handle_menu_message(ctx: &mut UpdateContext<'_>, message: menu::Message) -> Task<Message> {
    match message {
        menu::Message::Close => ctx.overlays.menu.close(),
        // Links have no destination on this page; activating one just
        // dismisses the menu.
        menu::Message::LinkSelected(_) => ctx.overlays.menu.close(),
    }
    Task::none()
}

/// Handles product panel messages (quantity stepper and commit).
pub fn handle_product_message(
    ctx: &mut UpdateContext<'_>,
    message: product_panel::Message,
) -> Task<Message> {
    match message {
        product_panel::Message::IncreaseQuantity => ctx.pending.increase(),
        product_panel::Message::DecreaseQuantity => ctx.pending.decrease(),
        product_panel::Message::AddToCart => {
            // The reset is unconditional: `take` zeroes the stepper even
            // though `add_items` ignores a zero quantity anyway.
            let quantity = ctx.pending.take();
            ctx.cart.add_items(ctx.catalog.product(), quantity);
        }
    }
    Task::none()
}

/// Handles keyboard input routed by the subscription.
pub fn handle_keyboard(ctx: &mut UpdateContext<'_>, key: KeyInput) -> Task<Message> {
    match key {
        KeyInput::Escape => {
            // Independent checks: each overlay reacts to Escape on its
            // own. The cart panel intentionally does not.
            if ctx.overlays.lightbox.is_open() {
                ctx.overlays.lightbox.close();
            }
            if ctx.overlays.menu.is_open() {
                ctx.overlays.menu.close();
            }
        }
        KeyInput::ArrowRight => {
            if ctx.overlays.lightbox.is_open() {
                navigate(ctx, Direction::Forward);
            }
        }
        KeyInput::ArrowLeft => {
            if ctx.overlays.lightbox.is_open() {
                navigate(ctx, Direction::Backward);
            }
        }
    }
    Task::none()
}

/// Handles the transition tick: commits the crossfade once settled.
pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    if let Some(index) = ctx.transition.settle(now) {
        ctx.gallery.select(index);
    }
    Task::none()
}

/// Commits a direct selection, cancelling any in-flight transition.
fn select_image(ctx: &mut UpdateContext<'_>, index: usize) {
    ctx.transition.cancel();
    ctx.gallery.select(index);
}

/// Starts (or cancel-and-restarts) a directional move.
///
/// If a transition is already in flight its target is committed
/// immediately and the new move departs from it, so rapid navigation
/// steps through images one by one instead of double-running slots.
fn navigate(ctx: &mut UpdateContext<'_>, direction: Direction) {
    if let Some(target) = ctx.transition.target() {
        ctx.gallery.select(target);
    }

    let from = ctx.gallery.current();
    let to = match direction {
        Direction::Forward => ctx.gallery.peek_next(),
        Direction::Backward => ctx.gallery.peek_previous(),
    };

    if *ctx.reduce_motion {
        ctx.transition.cancel();
        ctx.gallery.select(to);
    } else {
        ctx.transition.start(from, to, direction, Instant::now());
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::cart_panel;
use crate::ui::gallery_panel;
use crate::ui::lightbox;
use crate::ui::menu;
use crate::ui::navbar;
use crate::ui::product_panel;
use std::time::Instant;

/// Keyboard inputs the page reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Escape,
    ArrowLeft,
    ArrowRight,
}

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Gallery(gallery_panel::Message),
    Lightbox(lightbox::Message),
    CartPanel(cart_panel::Message),
    Menu(menu::Message),
    Product(product_panel::Message),
    Keyboard(KeyInput),
    /// Periodic tick driving the gallery crossfade and its settle commit.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_VITRINE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}

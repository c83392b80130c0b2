// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page components.
//!
//! The `App` struct wires together the domains (catalog, gallery, cart,
//! overlays, localization) and translates messages into state changes.
//! Policy decisions (window bounds, transition commit timing, preference
//! persistence) stay close to the main update loop so user-facing
//! behavior is easy to audit.

mod message;
pub mod paths;
mod persistence;
mod subscription;
mod update;
mod view;

pub use message::{Flags, KeyInput, Message};

use crate::cart::{CartLedger, PendingQuantity};
use crate::catalog::Catalog;
use crate::config;
use crate::gallery::{GalleryNavigator, Transition};
use crate::i18n::fluent::I18n;
use crate::ui::overlay::Overlays;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state bridging the page components, localization,
/// and persisted preferences.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    /// Commit directional gallery moves immediately instead of crossfading.
    reduce_motion: bool,
    catalog: Catalog,
    gallery: GalleryNavigator,
    transition: Transition,
    cart: CartLedger,
    pending: PendingQuantity,
    overlays: Overlays,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("gallery_index", &self.gallery.current())
            .field("cart_quantity", &self.cart.total_quantity())
            .field("overlays", &self.overlays)
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(
            config::WINDOW_DEFAULT_WIDTH as f32,
            config::WINDOW_DEFAULT_HEIGHT as f32,
        ),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH as f32,
            config::MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let catalog = Catalog::default();
        let gallery = GalleryNavigator::new(catalog.image_count());

        Self {
            i18n: I18n::default(),
            theme_mode: ThemeMode::System,
            reduce_motion: config::DEFAULT_REDUCE_MOTION,
            catalog,
            gallery,
            transition: Transition::new(),
            cart: CartLedger::new(),
            pending: PendingQuantity::new(),
            overlays: Overlays::new(),
        }
    }
}

impl App {
    /// Initializes application state from the config file and `Flags`
    /// received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            eprintln!("Config warning: {}", warning);
        }

        let i18n = I18n::new(flags.lang, &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };
        app.theme_mode = config.general.theme_mode;
        app.reduce_motion = config
            .display
            .reduce_motion
            .unwrap_or(config::DEFAULT_REDUCE_MOTION);

        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        format!("{} - {}", self.catalog.product().name, app_name)
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(self.transition.is_active());

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            theme_mode: &mut self.theme_mode,
            reduce_motion: &self.reduce_motion,
            catalog: &self.catalog,
            gallery: &mut self.gallery,
            transition: &mut self.transition,
            cart: &mut self.cart,
            pending: &mut self.pending,
            overlays: &mut self.overlays,
        };

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
            Message::Lightbox(lightbox_message) => {
                update::handle_lightbox_message(&mut ctx, lightbox_message)
            }
            Message::CartPanel(cart_message) => {
                update::handle_cart_panel_message(&mut ctx, cart_message)
            }
            Message::Menu(menu_message) => update::handle_menu_message(&mut ctx, menu_message),
            Message::Product(product_message) => {
                update::handle_product_message(&mut ctx, product_message)
            }
            Message::Keyboard(key) => update::handle_keyboard(&mut ctx, key),
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let now = Instant::now();
        view::view(view::ViewContext {
            i18n: &self.i18n,
            catalog: &self.catalog,
            current: self.gallery.current(),
            incoming: self.transition.target(),
            progress: self.transition.progress(now),
            ledger: &self.cart,
            pending_quantity: self.pending.value(),
            cart_open: self.overlays.cart.is_open(),
            cart_expanded: self.overlays.cart.trigger_expanded(),
            lightbox_open: self.overlays.lightbox.is_open(),
            menu_open: self.overlays.menu.is_open(),
            is_dark_theme: self.theme_mode.is_dark(),
        })
    }
}

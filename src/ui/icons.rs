// SPDX-License-Identifier: MPL-2.0
//! Centralized icon and product art handles.
//!
//! All artwork ships as monochrome SVG documents embedded at compile time
//! via `include_bytes!`; handles are cached using `OnceLock` so repeated
//! renders reuse the same allocation. Control icons draw with
//! `currentColor` and are recolored per theme through
//! [`crate::ui::styles::overlay::icon_color`].
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `trash` not `delete_item`).

use crate::catalog::Catalog;
use iced::widget::svg::{Handle, Svg};
use iced::Length;
use std::sync::OnceLock;

/// Macro to define an icon function with a cached handle.
/// The handle is created once on first access and reused thereafter.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Handle {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!("../../assets/icons/", $filename));
            HANDLE.get_or_init(|| Handle::from_memory(DATA)).clone()
        }
    };
}

define_icon!(cart, "cart.svg", "Cart icon: basket on wheels.");
define_icon!(menu, "menu.svg", "Menu icon: three horizontal bars.");
define_icon!(close, "close.svg", "Close icon: diagonal cross.");
define_icon!(
    chevron_left,
    "chevron_left.svg",
    "Chevron pointing left: previous."
);
define_icon!(
    chevron_right,
    "chevron_right.svg",
    "Chevron pointing right: next."
);
define_icon!(trash, "trash.svg", "Trash can: removal affordance.");
define_icon!(minus, "minus.svg", "Minus sign: decrement.");
define_icon!(plus, "plus.svg", "Plus sign: increment.");
define_icon!(
    expand,
    "expand.svg",
    "Outward arrows: open the enlarged view."
);
define_icon!(sun, "sun.svg", "Sun: theme toggle.");

/// Builds a square `Svg` widget of the given size from a handle.
pub fn sized<'a>(handle: Handle, size: f32) -> Svg<'a> {
    Svg::new(handle)
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
}

// =============================================================================
// Product art
// =============================================================================

fn product_handles(catalog: &Catalog) -> &'static Vec<(Handle, Handle)> {
    static HANDLES: OnceLock<Vec<(Handle, Handle)>> = OnceLock::new();
    HANDLES.get_or_init(|| {
        catalog
            .images()
            .iter()
            .map(|pair| {
                (
                    Handle::from_memory(pair.full),
                    Handle::from_memory(pair.thumbnail),
                )
            })
            .collect()
    })
}

/// Full-size artwork for the image at `index`.
#[must_use]
pub fn product_image(catalog: &Catalog, index: usize) -> Handle {
    product_handles(catalog)[index].0.clone()
}

/// Thumbnail artwork for the image at `index`.
#[must_use]
pub fn product_thumbnail(catalog: &Catalog, index: usize) -> Handle {
    product_handles(catalog)[index].1.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_icon_asset_embeds() {
        let _ = cart();
        let _ = menu();
        let _ = close();
        let _ = chevron_left();
        let _ = chevron_right();
        let _ = trash();
        let _ = minus();
        let _ = plus();
        let _ = expand();
        let _ = sun();
    }

    #[test]
    fn product_art_exists_for_every_catalog_index() {
        let catalog = Catalog::default();
        for index in 0..catalog.image_count() {
            let _ = product_image(&catalog, index);
            let _ = product_thumbnail(&catalog, index);
        }
    }
}

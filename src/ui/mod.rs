// SPDX-License-Identifier: MPL-2.0
//! UI components, styling, and overlay coordination.

pub mod cart_panel;
pub mod design_tokens;
pub mod gallery_panel;
pub mod icons;
pub mod lightbox;
pub mod menu;
pub mod navbar;
pub mod overlay;
pub mod product_panel;
pub mod styles;
pub mod theming;

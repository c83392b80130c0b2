// SPDX-License-Identifier: MPL-2.0
//! `iced_vitrine` is a single-product storefront page built with the Iced
//! GUI framework.
//!
//! It drives an image gallery with an enlarged-view lightbox, a shopping
//! cart with quantity controls, and a navigation menu, and demonstrates
//! internationalization with Fluent, user preference management, and
//! modular UI design.

#![doc(html_root_url = "https://docs.rs/iced_vitrine/0.1.0")]

pub mod app;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod ui;

// SPDX-License-Identifier: MPL-2.0
//! Top navigation bar: menu trigger, brand, theme toggle, and the cart
//! trigger with its item-count badge.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Container, Row, Text},
    Element, Length, Theme,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Total cart quantity; the badge is hidden at zero.
    pub cart_quantity: u32,
    /// Mirrored expanded flag of the cart trigger.
    pub cart_expanded: bool,
    pub is_dark_theme: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    OpenMenu,
    ToggleCart,
    ToggleTheme,
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let icon_color = if ctx.is_dark_theme {
        palette::GRAY_100
    } else {
        palette::GRAY_900
    };

    let menu_button = button(
        icons::sized(icons::menu(), sizing::ICON_MD)
            .style(styles::overlay::icon_color(icon_color)),
    )
    .on_press(Message::OpenMenu)
    .padding(spacing::XS)
    .style(styles::button::icon);

    let brand = Text::new(ctx.i18n.tr("navbar-brand"))
        .size(typography::TITLE_MD)
        .color(palette::ORANGE_500);

    let theme_button = button(
        icons::sized(icons::sun(), sizing::ICON_MD).style(styles::overlay::icon_color(icon_color)),
    )
    .on_press(Message::ToggleTheme)
    .padding(spacing::XS)
    .style(styles::button::icon);

    let cart_icon_color = if ctx.cart_expanded {
        palette::ORANGE_500
    } else {
        icon_color
    };
    let mut cart_content = Row::new().spacing(spacing::XXS).align_y(Vertical::Center).push(
        icons::sized(icons::cart(), sizing::ICON_MD)
            .style(styles::overlay::icon_color(cart_icon_color)),
    );
    if ctx.cart_quantity > 0 {
        let badge = Container::new(
            Text::new(ctx.cart_quantity.to_string()).size(typography::CAPTION),
        )
        .padding([1.0, spacing::XXS + 2.0])
        .style(styles::container::badge);
        cart_content = cart_content.push(badge);
    }
    let cart_button = button(cart_content)
        .on_press(Message::ToggleCart)
        .padding(spacing::XS)
        .style(styles::button::icon);

    let row = Row::new()
        .spacing(spacing::SM)
        .padding([spacing::SM, spacing::LG])
        .align_y(Vertical::Center)
        .push(menu_button)
        .push(brand)
        .push(iced::widget::space::horizontal())
        .push(theme_button)
        .push(cart_button);

    Container::new(row)
        .width(Length::Fill)
        .style(|theme: &Theme| styles::container::toolbar(theme))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    fn ctx(i18n: &I18n, quantity: u32) -> ViewContext<'_> {
        ViewContext {
            i18n,
            cart_quantity: quantity,
            cart_expanded: false,
            is_dark_theme: false,
        }
    }

    #[test]
    fn navbar_view_renders_without_badge() {
        let i18n = I18n::default();
        let _element = view(ctx(&i18n, 0));
    }

    #[test]
    fn navbar_view_renders_with_badge() {
        let i18n = I18n::default();
        let _element = view(ctx(&i18n, 3));
    }

    #[test]
    fn navbar_view_renders_with_cart_expanded() {
        let i18n = I18n::default();
        let context = ViewContext {
            cart_expanded: true,
            ..ctx(&i18n, 1)
        };
        let _element = view(context);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Navigation menu overlay.
//!
//! A slide-in panel with the storefront's section links. Links have no
//! destination on this single page; activating one simply dismisses the
//! menu.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

/// Section links shown in the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavLink {
    Collections,
    Men,
    Women,
    About,
    Contact,
}

impl NavLink {
    /// All links in display order.
    pub const ALL: [NavLink; 5] = [
        NavLink::Collections,
        NavLink::Men,
        NavLink::Women,
        NavLink::About,
        NavLink::Contact,
    ];

    /// Returns the i18n message key for this link's label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            NavLink::Collections => "menu-link-collections",
            NavLink::Men => "menu-link-men",
            NavLink::Women => "menu-link-women",
            NavLink::About => "menu-link-about",
            NavLink::Contact => "menu-link-contact",
        }
    }
}

/// Contextual data needed to render the menu.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the menu.
#[derive(Debug, Clone)]
pub enum Message {
    Close,
    LinkSelected(NavLink),
}

/// Render the menu panel.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let close = Row::new().push(
        button(
            icons::sized(icons::close(), sizing::ICON_SM)
                .style(styles::overlay::icon_color(palette::GRAY_400)),
        )
        .on_press(Message::Close)
        .padding(spacing::XXS)
        .style(styles::button::icon),
    );

    let mut links = Column::new().spacing(spacing::XS);
    for link in NavLink::ALL {
        links = links.push(
            button(
                Text::new(ctx.i18n.tr(link.i18n_key())).size(typography::BODY),
            )
            .on_press(Message::LinkSelected(link))
            .padding([spacing::XS, spacing::SM])
            .width(Length::Fill)
            .style(styles::button::menu_item),
        );
    }

    Container::new(
        Column::new()
            .spacing(spacing::LG)
            .push(close)
            .push(links),
    )
    .width(Length::Fixed(sizing::MENU_PANEL_WIDTH))
    .height(Length::Fill)
    .align_y(Vertical::Top)
    .padding(spacing::LG)
    .style(styles::container::panel)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_view_renders() {
        let i18n = I18n::default();
        let _element = view(ViewContext { i18n: &i18n });
    }

    #[test]
    fn every_link_has_a_translation() {
        let i18n = I18n::default();
        for link in NavLink::ALL {
            let label = i18n.tr(link.i18n_key());
            assert!(!label.starts_with("MISSING"), "missing label for {:?}", link);
        }
    }
}

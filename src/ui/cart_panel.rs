// SPDX-License-Identifier: MPL-2.0
//! Cart overlay panel.
//!
//! The itemized list is rebuilt from ledger order on every render. With a
//! zero total the panel shows the empty-state line and neither the list
//! nor the checkout action.

use crate::cart::CartLedger;
use crate::catalog::Catalog;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, rule, Column, Container, Row, Svg, Text},
    Element, Length,
};

/// Contextual data needed to render the cart panel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a Catalog,
    pub ledger: &'a CartLedger,
}

/// Messages emitted by the cart panel.
#[derive(Debug, Clone)]
pub enum Message {
    /// Delete the line item carrying this product name.
    RemoveItem(String),
    CheckoutPressed,
    Close,
}

/// Render the cart panel.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let header = Row::new()
        .align_y(Vertical::Center)
        .push(
            Text::new(ctx.i18n.tr("cart-title"))
                .size(typography::TITLE_MD),
        )
        .push(iced::widget::space::horizontal())
        .push(
            button(
                icons::sized(icons::close(), sizing::ICON_SM)
                    .style(styles::overlay::icon_color(palette::GRAY_400)),
            )
            .on_press(Message::Close)
            .padding(spacing::XXS)
            .style(styles::button::icon),
        );

    let mut content = Column::new()
        .spacing(spacing::MD)
        .push(header)
        .push(rule::horizontal(1));

    if ctx.ledger.total_quantity() == 0 {
        content = content.push(
            Container::new(
                Text::new(ctx.i18n.tr("cart-empty"))
                    .size(typography::BODY)
                    .color(palette::GRAY_400),
            )
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .padding(spacing::XL),
        );
    } else {
        let mut rows = Column::new().spacing(spacing::MD);
        for item in ctx.ledger.items() {
            rows = rows.push(item_row(ctx.catalog, item));
        }

        let checkout = button(
            Container::new(
                Text::new(ctx.i18n.tr("cart-checkout")).size(typography::BODY),
            )
            .width(Length::Fill)
            .align_x(Horizontal::Center),
        )
        .on_press(Message::CheckoutPressed)
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(styles::button::primary);

        content = content.push(rows).push(checkout);
    }

    Container::new(content)
        .width(Length::Fixed(sizing::CART_PANEL_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::panel)
        .into()
}

/// One itemized row: artwork, name, "unit × qty", row total, delete.
fn item_row<'a>(catalog: &Catalog, item: &crate::cart::LineItem) -> Element<'a, Message> {
    let art = Svg::new(icons::product_thumbnail(catalog, 0))
        .width(Length::Fixed(sizing::CART_ROW_THUMB))
        .height(Length::Fixed(sizing::CART_ROW_THUMB));

    let info = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(item.name().to_string()).size(typography::BODY))
        .push(
            Text::new(format!(
                "{} × {}",
                item.unit_price(),
                item.quantity()
            ))
            .size(typography::CAPTION)
            .color(palette::GRAY_400),
        );

    let total = Text::new(item.row_total().to_string()).size(typography::BODY);

    let delete = button(
        icons::sized(icons::trash(), sizing::ICON_SM)
            .style(styles::overlay::icon_color(palette::GRAY_400)),
    )
    .on_press(Message::RemoveItem(item.name().to_string()))
    .padding(spacing::XXS)
    .style(styles::button::icon);

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(art)
        .push(info)
        .push(iced::widget::space::horizontal())
        .push(total)
        .push(delete)
        .into()
}

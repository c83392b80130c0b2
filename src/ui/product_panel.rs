// SPDX-License-Identifier: MPL-2.0
//! Product information panel: brand kicker, name, description, pricing,
//! the quantity stepper, and the add-to-cart action.

use crate::catalog::Product;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the product panel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub product: &'a Product,
    /// Quantity chosen so far; the commit action is disabled at zero.
    pub pending_quantity: u32,
}

/// Messages emitted by the product panel.
#[derive(Debug, Clone)]
pub enum Message {
    IncreaseQuantity,
    DecreaseQuantity,
    AddToCart,
}

/// Render the product panel column.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let kicker = Text::new(ctx.i18n.tr("product-brand").to_uppercase())
        .size(typography::TITLE_SM)
        .color(palette::ORANGE_500);

    let title = Text::new(ctx.product.name.clone()).size(typography::TITLE_LG);

    let description = Text::new(ctx.i18n.tr("product-description"))
        .size(typography::BODY)
        .color(palette::GRAY_400);

    let mut price_row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(ctx.product.price.to_string()).size(typography::TITLE_MD));

    if let Some(percent) = ctx.product.discount_percent() {
        price_row = price_row.push(
            Container::new(Text::new(format!("{}%", percent)).size(typography::CAPTION))
                .padding([2.0, spacing::XS])
                .style(styles::container::discount_chip),
        );
        price_row = price_row.push(iced::widget::space::horizontal());
        price_row = price_row.push(
            Text::new(ctx.product.original_price.to_string())
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );
    }

    let stepper = stepper_row(ctx.pending_quantity);

    let add_label = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(
            icons::sized(icons::cart(), sizing::ICON_SM)
                .style(styles::overlay::icon_color(palette::WHITE)),
        )
        .push(Text::new(ctx.i18n.tr("product-add-to-cart")).size(typography::BODY));

    let mut add_button = button(
        Container::new(add_label)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .padding(spacing::SM)
    .width(Length::Fill)
    .style(styles::button::primary);

    // Enabled iff a quantity has been chosen.
    if ctx.pending_quantity > 0 {
        add_button = add_button.on_press(Message::AddToCart);
    }

    Column::new()
        .spacing(spacing::LG)
        .width(Length::Fixed(sizing::PRODUCT_PANEL_WIDTH))
        .push(kicker)
        .push(title)
        .push(description)
        .push(price_row)
        .push(stepper)
        .push(add_button)
        .into()
}

/// Minus / readout / plus. Decrement below zero is prevented at the
/// state layer; the control itself stays enabled like the page's.
fn stepper_row<'a>(pending: u32) -> Element<'a, Message> {
    let step_button = |handle, message| {
        button(
            icons::sized(handle, sizing::ICON_SM)
                .style(styles::overlay::icon_color(palette::ORANGE_500)),
        )
        .on_press(message)
        .padding(spacing::SM)
        .style(styles::button::icon)
    };

    let readout = Container::new(Text::new(pending.to_string()).size(typography::BODY))
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    Row::new()
        .align_y(Vertical::Center)
        .width(Length::Fill)
        .push(step_button(icons::minus(), Message::DecreaseQuantity))
        .push(readout)
        .push(step_button(icons::plus(), Message::IncreaseQuantity))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn product_panel_renders_with_zero_quantity() {
        let i18n = I18n::default();
        let catalog = Catalog::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            product: catalog.product(),
            pending_quantity: 0,
        });
    }

    #[test]
    fn product_panel_renders_with_chosen_quantity() {
        let i18n = I18n::default();
        let catalog = Catalog::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            product: catalog.product(),
            pending_quantity: 4,
        });
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Food row: thumbnail, name, description and price.

use crate::food::Food;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::images::ThumbnailCache;
use crate::ui::styles;
use iced::widget::{button, text, Column, Row, Text};
use iced::{alignment::Vertical, Element, Length, Theme};

/// Renders `food` as a full-width button emitting `on_press`.
pub fn view<'a, M: Clone + 'a>(
    food: &'a Food,
    images: &ThumbnailCache,
    on_press: M,
) -> Element<'a, M> {
    let thumbnail = images.view(
        Some(food.thumbnail_url.as_str()),
        sizing::FOOD_THUMBNAIL,
        sizing::FOOD_THUMBNAIL,
    );

    let price = Text::new(food.formatted_price.as_str())
        .size(typography::BODY_LG)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::PRICE_GREEN),
        });

    let details = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(Text::new(food.name.as_str()).size(typography::TITLE_SM))
        .push(Text::new(food.description.as_str()).size(typography::BODY_SM))
        .push(price);

    button(
        Row::new()
            .spacing(spacing::MD)
            .align_y(Vertical::Center)
            .push(thumbnail)
            .push(details),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(styles::button::card)
    .on_press(on_press)
    .into()
}

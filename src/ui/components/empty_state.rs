// SPDX-License-Identifier: MPL-2.0
//! Centered placeholder text for lists that are loading or empty.

use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{Container, Text};
use iced::{alignment, Element, Length};

pub fn view<'a, M: 'a>(message: String) -> Element<'a, M> {
    Container::new(Text::new(message).size(typography::BODY))
        .width(Length::Fill)
        .padding(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .into()
}

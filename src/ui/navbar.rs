// SPDX-License-Identifier: MPL-2.0
//! Bottom tab bar switching between the dashboard and the favorites list.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Container, Row, Text},
    Element, Length,
};

/// Top-level destinations reachable from the tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Dashboard,
    Favorites,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// `None` while a screen outside the tabs (food details) is shown.
    pub active: Option<Tab>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Select(Tab),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Open(Tab),
}

/// Selecting the tab already shown does nothing.
#[must_use]
pub fn update(message: Message, active: Option<Tab>) -> Event {
    match message {
        Message::Select(tab) if Some(tab) == active => Event::None,
        Message::Select(tab) => Event::Open(tab),
    }
}

#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let tab = |tab: Tab, glyph: &str, key: &str| {
        let active = ctx.active == Some(tab);
        button(
            Text::new(format!("{glyph}  {}", ctx.i18n.tr(key)))
                .size(typography::BODY)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::button::tab(active))
        .on_press(Message::Select(tab))
    };

    Container::new(
        Row::new()
            .spacing(spacing::MD)
            .align_y(Vertical::Center)
            .push(tab(Tab::Dashboard, "☰", "tab-dashboard"))
            .push(tab(Tab::Favorites, "♥", "tab-favorites")),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::TAB_BAR_HEIGHT))
    .align_y(Vertical::Center)
    .style(styles::container::tab_bar)
    .into()
}

// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the active screen above the tab bar, with toasts stacked on top.

use super::{Message, Screen};
use crate::food::Currency;
use crate::i18n::fluent::I18n;
use crate::ui::dashboard::{self, ViewContext as DashboardViewContext};
use crate::ui::favorites::{self, ViewContext as FavoritesViewContext};
use crate::ui::food_details::{self, ViewContext as FoodDetailsViewContext};
use crate::ui::images::ThumbnailCache;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{self, Toast};
use iced::{
    widget::{Column, Container, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub dashboard: &'a dashboard::State,
    pub favorites: &'a favorites::State,
    pub food_details: Option<&'a food_details::State>,
    pub images: &'a ThumbnailCache,
    pub notifications: &'a notifications::Manager,
    pub currency: Currency,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Dashboard => ctx
            .dashboard
            .view(DashboardViewContext {
                i18n: ctx.i18n,
                images: ctx.images,
            })
            .map(Message::Dashboard),
        Screen::Favorites => ctx
            .favorites
            .view(FavoritesViewContext {
                i18n: ctx.i18n,
                images: ctx.images,
            })
            .map(Message::Favorites),
        Screen::FoodDetails { .. } => match ctx.food_details {
            Some(state) => state
                .view(FoodDetailsViewContext {
                    i18n: ctx.i18n,
                    images: ctx.images,
                    currency: ctx.currency,
                })
                .map(Message::FoodDetails),
            None => Container::new(iced::widget::text(ctx.i18n.tr("list-loading")))
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
        },
    };

    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        active: ctx.screen.tab(),
    })
    .map(Message::Navbar);

    let base = Column::new()
        .push(
            Container::new(current_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(navbar_view)
        .width(Length::Fill)
        .height(Length::Fill);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .push(base)
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

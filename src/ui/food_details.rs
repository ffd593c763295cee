// SPDX-License-Identifier: MPL-2.0
//! Food details screen: photo, extras, quantity, favorite toggle and the
//! order total.
//!
//! The order lives only in this screen's state. Confirming it does not
//! reach the backend; only the favorite toggle does.

use crate::api::models::{FavoritePayload, FoodDetailsRecord};
use crate::error::ApiError;
use crate::food::{Currency, Extra, ExtraId, FoodDetails, FoodId, Order};
use crate::i18n::fluent::I18n;
use crate::ui::components::empty_state;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::images::ThumbnailCache;
use crate::ui::styles;
use iced::widget::{button, rule, scrollable, text, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

pub const DETAILS_LOAD_FAILED_KEY: &str = "notification-details-load-failed";
pub const FAVORITE_STATUS_FAILED_KEY: &str = "notification-favorite-status-failed";

/// A details response mapped for display, plus the body needed to mark the
/// food as favorite.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedFood {
    pub details: FoodDetails,
    pub extras: Vec<Extra>,
    pub favorite: FavoritePayload,
}

impl LoadedFood {
    #[must_use]
    pub fn from_record(record: FoodDetailsRecord, currency: Currency) -> Self {
        let favorite = FavoritePayload::from(&record);
        let (details, extras) = FoodDetails::from_record(record, currency);
        Self {
            details,
            extras,
            favorite,
        }
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub images: &'a ThumbnailCache,
    pub currency: Currency,
}

#[derive(Debug, Clone)]
pub enum Message {
    IncrementExtra(ExtraId),
    DecrementExtra(ExtraId),
    IncrementFood,
    DecrementFood,
    ToggleFavorite,
    FinishOrder,
    Back,
    DetailsLoaded {
        id: FoodId,
        result: Result<LoadedFood, ApiError>,
    },
    FavoriteStatusLoaded {
        id: FoodId,
        result: Result<bool, ApiError>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    Back,
    AddFavorite(FavoritePayload),
    RemoveFavorite(FoodId),
    OrderFinished {
        food_id: FoodId,
        quantity: u32,
        total: f64,
    },
    LoadFailed {
        message_key: &'static str,
        error: ApiError,
    },
    Loaded {
        message_key: &'static str,
    },
}

#[derive(Debug)]
pub struct State {
    food_id: FoodId,
    details: Option<FoodDetails>,
    favorite: Option<FavoritePayload>,
    order: Order,
    is_favorite: bool,
    /// Set once the user toggles, so a late status response cannot undo it.
    favorite_touched: bool,
}

impl State {
    /// Fresh state for `food_id`; the caller fetches details and favorites.
    #[must_use]
    pub fn new(food_id: FoodId) -> Self {
        Self {
            food_id,
            details: None,
            favorite: None,
            order: Order::default(),
            is_favorite: false,
            favorite_touched: false,
        }
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::IncrementExtra(id) => {
                self.order.increment_extra(id);
                Event::None
            }
            Message::DecrementExtra(id) => {
                self.order.decrement_extra(id);
                Event::None
            }
            Message::IncrementFood => {
                self.order.increment_food();
                Event::None
            }
            Message::DecrementFood => {
                self.order.decrement_food();
                Event::None
            }
            Message::ToggleFavorite => self.toggle_favorite(),
            Message::FinishOrder => {
                if self.details.is_none() {
                    return Event::None;
                }
                Event::OrderFinished {
                    food_id: self.food_id,
                    quantity: self.order.quantity(),
                    total: self.order.total(),
                }
            }
            Message::Back => Event::Back,
            Message::DetailsLoaded { id, result } => {
                if id != self.food_id {
                    tracing::debug!(
                        %id,
                        current = %self.food_id,
                        "ignoring details for another food"
                    );
                    return Event::None;
                }
                match result {
                    Ok(loaded) => {
                        self.order = Order::new(loaded.details.price, loaded.extras);
                        self.details = Some(loaded.details);
                        self.favorite = Some(loaded.favorite);
                        Event::Loaded {
                            message_key: DETAILS_LOAD_FAILED_KEY,
                        }
                    }
                    Err(error) => Event::LoadFailed {
                        message_key: DETAILS_LOAD_FAILED_KEY,
                        error,
                    },
                }
            }
            Message::FavoriteStatusLoaded { id, result } => {
                if id != self.food_id || self.favorite_touched {
                    return Event::None;
                }
                match result {
                    Ok(is_favorite) => {
                        self.is_favorite = is_favorite;
                        Event::None
                    }
                    Err(error) => Event::LoadFailed {
                        message_key: FAVORITE_STATUS_FAILED_KEY,
                        error,
                    },
                }
            }
        }
    }

    /// Flips the flag locally and asks for the matching request. A failed
    /// request does not flip it back.
    fn toggle_favorite(&mut self) -> Event {
        let Some(payload) = &self.favorite else {
            return Event::None;
        };
        self.favorite_touched = true;
        self.is_favorite = !self.is_favorite;
        if self.is_favorite {
            Event::AddFavorite(payload.clone())
        } else {
            Event::RemoveFavorite(self.food_id)
        }
    }

    #[must_use]
    pub fn food_id(&self) -> FoodId {
        self.food_id
    }

    #[must_use]
    pub fn details(&self) -> Option<&FoodDetails> {
        self.details.as_ref()
    }

    #[must_use]
    pub fn order(&self) -> &Order {
        &self.order
    }

    #[must_use]
    pub fn is_favorite(&self) -> bool {
        self.is_favorite
    }

    pub fn image_urls(&self) -> impl Iterator<Item = &str> {
        self.details.iter().map(|details| details.image_url.as_str())
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let header = self.view_header(&ctx);

        let body: Element<'a, Message> = match &self.details {
            None => empty_state::view(ctx.i18n.tr("list-loading")),
            Some(details) => Column::new()
                .spacing(spacing::LG)
                .padding(spacing::LG)
                .max_width(sizing::CONTENT_MAX_WIDTH)
                .push(ctx.images.view(
                    Some(details.image_url.as_str()),
                    sizing::DETAILS_IMAGE_WIDTH,
                    sizing::DETAILS_IMAGE_HEIGHT,
                ))
                .push(Text::new(details.name.as_str()).size(typography::TITLE_MD))
                .push(Text::new(details.description.as_str()).size(typography::BODY))
                .push(
                    Text::new(details.formatted_price.as_str())
                        .size(typography::BODY_LG)
                        .style(price_style),
                )
                .push(self.view_extras(&ctx))
                .push(self.view_quantity(&ctx))
                .push(self.view_total(&ctx))
                .into(),
        };

        Column::new()
            .push(header)
            .push(
                scrollable(
                    Container::new(body)
                        .width(Length::Fill)
                        .align_x(alignment::Horizontal::Center),
                )
                .height(Length::Fill),
            )
            .into()
    }

    fn view_header<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let back_label = format!("← {}", ctx.i18n.tr("details-back"));
        let back = button(Text::new(back_label).size(typography::BODY))
            .on_press(Message::Back)
            .style(styles::button::icon);

        let (glyph, label_key) = if self.is_favorite {
            ("♥", "details-favorite-remove")
        } else {
            ("♡", "details-favorite-add")
        };
        let favorite = button(
            Text::new(format!("{glyph} {}", ctx.i18n.tr(label_key))).size(typography::BODY),
        )
        .on_press_maybe(self.favorite.as_ref().map(|_| Message::ToggleFavorite))
        .style(styles::button::icon);

        Container::new(
            Row::new()
                .align_y(alignment::Vertical::Center)
                .push(back)
                .push(
                    Text::new(ctx.i18n.tr("details-title"))
                        .size(typography::TITLE_SM)
                        .width(Length::Fill)
                        .align_x(alignment::Horizontal::Center),
                )
                .push(favorite),
        )
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::header)
        .into()
    }

    fn view_extras<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let mut rows = Column::new()
            .spacing(spacing::SM)
            .push(Text::new(ctx.i18n.tr("details-extras-title")).size(typography::TITLE_SM));

        if self.order.extras().is_empty() {
            rows = rows.push(
                Text::new(ctx.i18n.tr("details-extras-empty")).size(typography::BODY_SM),
            );
        }

        for extra in self.order.extras() {
            rows = rows.push(rule::horizontal(1)).push(
                Row::new()
                    .spacing(spacing::SM)
                    .align_y(alignment::Vertical::Center)
                    .push(
                        Column::new()
                            .width(Length::Fill)
                            .push(Text::new(extra.name.as_str()).size(typography::BODY))
                            .push(
                                Text::new(ctx.currency.format(extra.value))
                                    .size(typography::BODY_SM)
                                    .style(price_style),
                            ),
                    )
                    .push(stepper(
                        extra.quantity,
                        Message::DecrementExtra(extra.id),
                        Message::IncrementExtra(extra.id),
                    )),
            );
        }

        Container::new(rows)
            .width(Length::Fill)
            .padding(spacing::MD)
            .style(styles::container::panel)
            .into()
    }

    fn view_quantity<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        Row::new()
            .align_y(alignment::Vertical::Center)
            .push(
                Text::new(ctx.i18n.tr("details-quantity"))
                    .size(typography::TITLE_SM)
                    .width(Length::Fill),
            )
            .push(stepper(
                self.order.quantity(),
                Message::DecrementFood,
                Message::IncrementFood,
            ))
            .into()
    }

    fn view_total<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let total = Column::new()
            .spacing(spacing::XXS)
            .width(Length::Fill)
            .push(Text::new(ctx.i18n.tr("details-total")).size(typography::TITLE_SM))
            .push(
                Text::new(self.order.formatted_total(ctx.currency))
                    .size(typography::TITLE_MD)
                    .style(price_style),
            );

        let confirm_label = format!("{} ✓", ctx.i18n.tr("details-confirm-order"));
        let confirm = button(Text::new(confirm_label).size(typography::BODY_LG))
            .padding(spacing::SM)
            .on_press(Message::FinishOrder)
            .style(styles::button::primary);

        Container::new(
            Row::new()
                .spacing(spacing::MD)
                .align_y(alignment::Vertical::Center)
                .push(total)
                .push(confirm),
        )
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::panel)
        .into()
    }
}

/// `- n +` counter.
fn stepper<'a>(value: u32, on_decrement: Message, on_increment: Message) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(
            button(Text::new("−").size(typography::BODY_LG))
                .on_press(on_decrement)
                .style(styles::button::icon),
        )
        .push(Text::new(value.to_string()).size(typography::BODY_LG))
        .push(
            button(Text::new("+").size(typography::BODY_LG))
                .on_press(on_increment)
                .style(styles::button::icon),
        )
        .into()
}

fn price_style(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(palette::PRICE_GREEN),
    }
}

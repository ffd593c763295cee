// SPDX-License-Identifier: MPL-2.0
//! Favorites screen: the list returned by `GET /favorites`.

use crate::error::ApiError;
use crate::food::{Food, FoodId};
use crate::i18n::fluent::I18n;
use crate::ui::components::{empty_state, food_card};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::images::ThumbnailCache;
use crate::ui::styles;
use iced::widget::{button, scrollable, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

pub const FAVORITES_LOAD_FAILED_KEY: &str = "notification-favorites-load-failed";

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub images: &'a ThumbnailCache,
}

#[derive(Debug, Clone)]
pub enum Message {
    OpenFood(FoodId),
    Refresh,
    Loaded {
        generation: u64,
        result: Result<Vec<Food>, ApiError>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// Fetch tagged with the generation its response must carry.
    Fetch(u64),
    OpenFood(FoodId),
    LoadFailed {
        message_key: &'static str,
        error: ApiError,
    },
    Loaded {
        message_key: &'static str,
    },
}

#[derive(Debug, Default)]
pub struct State {
    foods: Vec<Food>,
    loading: bool,
    generation: u64,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The list is refetched every time the tab is shown.
    pub fn enter(&mut self) -> Event {
        self.generation += 1;
        self.loading = true;
        Event::Fetch(self.generation)
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::OpenFood(id) => Event::OpenFood(id),
            Message::Refresh => self.enter(),
            Message::Loaded { generation, result } => {
                if generation != self.generation {
                    tracing::debug!(
                        generation,
                        latest = self.generation,
                        "discarding superseded favorites response"
                    );
                    return Event::None;
                }
                self.loading = false;
                match result {
                    Ok(foods) => {
                        self.foods = foods;
                        Event::Loaded {
                            message_key: FAVORITES_LOAD_FAILED_KEY,
                        }
                    }
                    Err(error) => Event::LoadFailed {
                        message_key: FAVORITES_LOAD_FAILED_KEY,
                        error,
                    },
                }
            }
        }
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn foods(&self) -> &[Food] {
        &self.foods
    }

    pub fn image_urls(&self) -> impl Iterator<Item = &str> {
        self.foods.iter().map(|food| food.thumbnail_url.as_str())
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let header = Container::new(
            Row::new()
                .align_y(alignment::Vertical::Center)
                .push(
                    Text::new(ctx.i18n.tr("favorites-title"))
                        .size(typography::TITLE_LG)
                        .width(Length::Fill),
                )
                .push(
                    button(Text::new("⟳").size(typography::BODY_LG))
                        .on_press(Message::Refresh)
                        .style(styles::button::icon),
                ),
        )
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::header);

        let body: Element<'a, Message> = if self.foods.is_empty() {
            let key = if self.loading {
                "list-loading"
            } else {
                "favorites-empty"
            };
            empty_state::view(ctx.i18n.tr(key))
        } else {
            Column::with_children(
                self.foods
                    .iter()
                    .map(|food| food_card::view(food, ctx.images, Message::OpenFood(food.id))),
            )
            .spacing(spacing::SM)
            .padding(spacing::LG)
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .into()
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
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food(id: u64) -> Food {
        Food {
            id: FoodId(id),
            name: format!("Favorite {id}"),
            description: String::new(),
            price: 25.5,
            thumbnail_url: format!("http://img/{id}.png"),
            formatted_price: "R$\u{a0}25,50".to_string(),
        }
    }

    fn loaded(state: &State, result: Result<Vec<Food>, ApiError>) -> Message {
        Message::Loaded {
            generation: state.generation(),
            result,
        }
    }

    #[test]
    fn entering_requests_a_fetch() {
        let mut state = State::new();
        assert_eq!(state.enter(), Event::Fetch(1));
        assert_eq!(state.update(Message::Refresh), Event::Fetch(2));
    }

    #[test]
    fn one_row_per_favorite() {
        let mut state = State::new();
        state.enter();
        state.update(loaded(&state, Ok(vec![food(1), food(2)])));
        assert_eq!(state.foods().len(), 2);
        assert_eq!(state.image_urls().count(), 2);
    }

    #[test]
    fn failure_keeps_previous_list() {
        let mut state = State::new();
        state.enter();
        state.update(loaded(&state, Ok(vec![food(1)])));
        let event = state.update(loaded(&state, Err(ApiError::NotFound)));
        assert!(matches!(
            event,
            Event::LoadFailed {
                error: ApiError::NotFound,
                ..
            }
        ));
        assert_eq!(state.foods().len(), 1);
    }

    #[test]
    fn superseded_response_is_discarded() {
        let mut state = State::new();
        let Event::Fetch(first) = state.enter() else {
            panic!("expected a fetch");
        };
        let Event::Fetch(second) = state.update(Message::Refresh) else {
            panic!("expected a fetch");
        };

        let event = state.update(Message::Loaded {
            generation: second,
            result: Ok(vec![food(1), food(2)]),
        });
        assert!(matches!(event, Event::Loaded { .. }));

        let late = state.update(Message::Loaded {
            generation: first,
            result: Ok(vec![food(3)]),
        });
        assert_eq!(late, Event::None);
        assert_eq!(state.foods().len(), 2);
    }

    #[test]
    fn rows_open_details() {
        let mut state = State::new();
        assert_eq!(
            state.update(Message::OpenFood(FoodId(4))),
            Event::OpenFood(FoodId(4))
        );
    }

    #[test]
    fn favorites_view_renders() {
        let i18n = I18n::default();
        let images = ThumbnailCache::new(8);
        let mut state = State::new();
        let _ = state.view(ViewContext {
            i18n: &i18n,
            images: &images,
        });
        state.enter();
        state.update(loaded(&state, Ok(vec![food(1)])));
        let _list = state.view(ViewContext {
            i18n: &i18n,
            images: &images,
        });
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Dashboard screen: search box, category chips and the food list.
//!
//! Every change to the search text or the selected category issues a new
//! food fetch tagged with a generation number. Only the response matching
//! the latest generation is applied, so a slow answer to an old query can
//! never overwrite the list of a newer one.

use crate::api::FoodFilter;
use crate::error::ApiError;
use crate::food::{Category, CategoryId, Food, FoodId};
use crate::i18n::fluent::I18n;
use crate::ui::components::{empty_state, food_card};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::images::ThumbnailCache;
use crate::ui::styles;
use iced::widget::{button, scrollable, text_input, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

pub const FOODS_LOAD_FAILED_KEY: &str = "notification-foods-load-failed";
pub const CATEGORIES_LOAD_FAILED_KEY: &str = "notification-categories-load-failed";

/// A food fetch to run, tagged with the generation it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodsRequest {
    pub generation: u64,
    pub filter: FoodFilter,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub images: &'a ThumbnailCache,
}

#[derive(Debug, Clone)]
pub enum Message {
    SearchChanged(String),
    CategoryToggled(CategoryId),
    OpenFood(FoodId),
    Refresh,
    FoodsLoaded {
        generation: u64,
        result: Result<Vec<Food>, ApiError>,
    },
    CategoriesLoaded(Result<Vec<Category>, ApiError>),
}

/// Side effects requested from the application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    FetchFoods(FoodsRequest),
    /// Categories and foods together (screen entry, refresh).
    FetchAll(FoodsRequest),
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
    categories: Vec<Category>,
    selected_category: Option<CategoryId>,
    search: String,
    generation: u64,
    foods_loading: bool,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Called when the dashboard becomes the active screen.
    pub fn enter(&mut self) -> Event {
        Event::FetchAll(self.next_request())
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::SearchChanged(search) => {
                self.search = search;
                Event::FetchFoods(self.next_request())
            }
            Message::CategoryToggled(id) => {
                self.selected_category = if self.selected_category == Some(id) {
                    None
                } else {
                    Some(id)
                };
                Event::FetchFoods(self.next_request())
            }
            Message::OpenFood(id) => Event::OpenFood(id),
            Message::Refresh => Event::FetchAll(self.next_request()),
            Message::FoodsLoaded { generation, result } => {
                if generation != self.generation {
                    tracing::debug!(
                        generation,
                        latest = self.generation,
                        "discarding superseded food response"
                    );
                    return Event::None;
                }
                self.foods_loading = false;
                match result {
                    Ok(foods) => {
                        self.foods = foods;
                        Event::Loaded {
                            message_key: FOODS_LOAD_FAILED_KEY,
                        }
                    }
                    Err(error) => Event::LoadFailed {
                        message_key: FOODS_LOAD_FAILED_KEY,
                        error,
                    },
                }
            }
            Message::CategoriesLoaded(result) => match result {
                Ok(categories) => {
                    self.categories = categories;
                    Event::Loaded {
                        message_key: CATEGORIES_LOAD_FAILED_KEY,
                    }
                }
                Err(error) => Event::LoadFailed {
                    message_key: CATEGORIES_LOAD_FAILED_KEY,
                    error,
                },
            },
        }
    }

    fn next_request(&mut self) -> FoodsRequest {
        self.generation += 1;
        self.foods_loading = true;
        FoodsRequest {
            generation: self.generation,
            filter: self.filter(),
        }
    }

    #[must_use]
    pub fn filter(&self) -> FoodFilter {
        FoodFilter {
            category: self.selected_category,
            search: self.search.clone(),
        }
    }

    #[must_use]
    pub fn foods(&self) -> &[Food] {
        &self.foods
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn selected_category(&self) -> Option<CategoryId> {
        self.selected_category
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Image URLs the screen currently displays.
    pub fn image_urls(&self) -> impl Iterator<Item = &str> {
        self.categories
            .iter()
            .map(|category| category.image_url.as_str())
            .chain(self.foods.iter().map(|food| food.thumbnail_url.as_str()))
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let header = Container::new(
            Column::new()
                .spacing(spacing::MD)
                .push(Text::new(ctx.i18n.tr("dashboard-title")).size(typography::TITLE_LG))
                .push(
                    Row::new()
                        .spacing(spacing::SM)
                        .align_y(alignment::Vertical::Center)
                        .push(
                            text_input(&ctx.i18n.tr("dashboard-search-placeholder"), &self.search)
                                .on_input(Message::SearchChanged)
                                .padding(spacing::XS)
                                .size(typography::BODY)
                                .width(Length::Fill),
                        )
                        .push(
                            button(Text::new("⟳").size(typography::BODY_LG))
                                .on_press(Message::Refresh)
                                .style(styles::button::icon),
                        ),
                ),
        )
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::header);

        let content = Column::new()
            .spacing(spacing::LG)
            .padding(spacing::LG)
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .push(self.view_categories(&ctx))
            .push(self.view_foods(&ctx));

        Column::new()
            .push(header)
            .push(
                scrollable(
                    Container::new(content)
                        .width(Length::Fill)
                        .align_x(alignment::Horizontal::Center),
                )
                .height(Length::Fill),
            )
            .into()
    }

    fn view_categories<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let chips = self.categories.iter().map(|category| {
            let selected = self.selected_category == Some(category.id);
            button(
                Column::new()
                    .spacing(spacing::XS)
                    .align_x(alignment::Horizontal::Center)
                    .push(ctx.images.view(
                        Some(category.image_url.as_str()),
                        sizing::CATEGORY_ICON,
                        sizing::CATEGORY_ICON,
                    ))
                    .push(Text::new(category.title.as_str()).size(typography::BODY_SM)),
            )
            .width(Length::Fixed(sizing::CATEGORY_CHIP_WIDTH))
            .padding(spacing::SM)
            .style(styles::button::chip(selected))
            .on_press(Message::CategoryToggled(category.id))
            .into()
        });

        Column::new()
            .spacing(spacing::SM)
            .push(Text::new(ctx.i18n.tr("dashboard-categories-title")).size(typography::TITLE_SM))
            .push(
                scrollable(Row::with_children(chips).spacing(spacing::SM))
                    .direction(scrollable::Direction::Horizontal(
                        scrollable::Scrollbar::default(),
                    )),
            )
            .into()
    }

    fn view_foods<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let title = Text::new(ctx.i18n.tr("dashboard-foods-title")).size(typography::TITLE_SM);

        let body: Element<'a, Message> = if self.foods.is_empty() {
            let key = if self.foods_loading {
                "list-loading"
            } else {
                "dashboard-foods-empty"
            };
            empty_state::view(ctx.i18n.tr(key))
        } else {
            Column::with_children(
                self.foods
                    .iter()
                    .map(|food| food_card::view(food, ctx.images, Message::OpenFood(food.id))),
            )
            .spacing(spacing::SM)
            .into()
        };

        Column::new().spacing(spacing::SM).push(title).push(body).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food(id: u64) -> Food {
        Food {
            id: FoodId(id),
            name: format!("Food {id}"),
            description: String::new(),
            price: 10.0,
            thumbnail_url: format!("http://img/{id}.png"),
            formatted_price: "R$\u{a0}10,00".to_string(),
        }
    }

    fn request_of(event: Event) -> FoodsRequest {
        match event {
            Event::FetchFoods(request) | Event::FetchAll(request) => request,
            other => panic!("expected a fetch, got {other:?}"),
        }
    }

    #[test]
    fn entering_fetches_categories_and_foods() {
        let mut state = State::new();
        let event = state.enter();
        assert!(matches!(event, Event::FetchAll(FoodsRequest { generation: 1, .. })));
    }

    #[test]
    fn search_change_fetches_with_new_text() {
        let mut state = State::new();
        let request = request_of(state.update(Message::SearchChanged("molho".into())));
        assert_eq!(request.filter.search, "molho");
        assert_eq!(request.filter.category, None);
    }

    #[test]
    fn toggling_a_category_twice_clears_the_filter() {
        let mut state = State::new();
        let first = request_of(state.update(Message::CategoryToggled(CategoryId(2))));
        assert_eq!(first.filter.category, Some(CategoryId(2)));

        let second = request_of(state.update(Message::CategoryToggled(CategoryId(2))));
        assert_eq!(second.filter.category, None);
        assert_eq!(state.selected_category(), None);
    }

    #[test]
    fn selecting_another_category_replaces_the_filter() {
        let mut state = State::new();
        state.update(Message::CategoryToggled(CategoryId(1)));
        let request = request_of(state.update(Message::CategoryToggled(CategoryId(3))));
        assert_eq!(request.filter.category, Some(CategoryId(3)));
    }

    #[test]
    fn loaded_foods_render_one_row_each() {
        let mut state = State::new();
        let request = request_of(state.enter());
        state.update(Message::FoodsLoaded {
            generation: request.generation,
            result: Ok(vec![food(1), food(2), food(3)]),
        });
        assert_eq!(state.foods().len(), 3);
    }

    #[test]
    fn superseded_response_is_discarded() {
        let mut state = State::new();
        let old = request_of(state.update(Message::SearchChanged("a".into())));
        let new = request_of(state.update(Message::SearchChanged("ab".into())));

        state.update(Message::FoodsLoaded {
            generation: new.generation,
            result: Ok(vec![food(2)]),
        });
        let event = state.update(Message::FoodsLoaded {
            generation: old.generation,
            result: Ok(vec![food(1), food(3)]),
        });

        assert_eq!(event, Event::None);
        assert_eq!(state.foods(), &[food(2)]);
    }

    #[test]
    fn failed_fetch_keeps_previous_list() {
        let mut state = State::new();
        let first = request_of(state.enter());
        state.update(Message::FoodsLoaded {
            generation: first.generation,
            result: Ok(vec![food(1)]),
        });

        let second = request_of(state.update(Message::Refresh));
        let event = state.update(Message::FoodsLoaded {
            generation: second.generation,
            result: Err(ApiError::Timeout),
        });

        assert_eq!(
            event,
            Event::LoadFailed {
                message_key: FOODS_LOAD_FAILED_KEY,
                error: ApiError::Timeout
            }
        );
        assert_eq!(state.foods().len(), 1);
    }

    #[test]
    fn open_food_forwards_the_id() {
        let mut state = State::new();
        assert_eq!(state.update(Message::OpenFood(FoodId(7))), Event::OpenFood(FoodId(7)));
    }

    #[test]
    fn image_urls_cover_categories_and_foods() {
        let mut state = State::new();
        state.update(Message::CategoriesLoaded(Ok(vec![Category {
            id: CategoryId(1),
            title: "Massas".into(),
            image_url: "http://img/massas.png".into(),
        }])));
        let request = request_of(state.enter());
        state.update(Message::FoodsLoaded {
            generation: request.generation,
            result: Ok(vec![food(1)]),
        });
        let urls: Vec<&str> = state.image_urls().collect();
        assert_eq!(urls, vec!["http://img/massas.png", "http://img/1.png"]);
    }

    #[test]
    fn dashboard_view_renders() {
        let i18n = I18n::default();
        let images = ThumbnailCache::new(8);
        let mut state = State::new();
        let request = request_of(state.enter());
        state.update(Message::FoodsLoaded {
            generation: request.generation,
            result: Ok(vec![food(1)]),
        });
        let _element = state.view(ViewContext {
            i18n: &i18n,
            images: &images,
        });
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Screens only mutate their own state and report `Event`s; this module
//! turns those events into navigation, notifications and network tasks.

use super::{Message, Screen};
use crate::api::{ApiClient, ApiResult};
use crate::error::ApiError;
use crate::food::model::foods_from_records;
use crate::food::{Category, Currency, FoodId};
use crate::ui::dashboard::{self, Event as DashboardEvent, FoodsRequest};
use crate::ui::favorites::{self, Event as FavoritesEvent};
use crate::ui::food_details::{self, Event as FoodDetailsEvent, LoadedFood};
use crate::ui::images::ThumbnailCache;
use crate::ui::navbar::{self, Event as NavbarEvent, Tab};
use crate::ui::notifications::{self, Notification, Severity};
use iced::Task;

pub const FAVORITE_SAVE_FAILED_KEY: &str = "notification-favorite-save-failed";
pub const ORDER_PLACED_KEY: &str = "notification-order-placed";

/// Context for update operations containing references to app state.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub dashboard: &'a mut dashboard::State,
    pub favorites: &'a mut favorites::State,
    pub food_details: &'a mut Option<food_details::State>,
    pub images: &'a mut ThumbnailCache,
    pub notifications: &'a mut notifications::Manager,
    /// `Err` when no usable backend URL could be configured; every fetch
    /// then fails with that error.
    pub api: &'a ApiResult<ApiClient>,
    pub currency: Currency,
}

// =============================================================================
// Screen messages
// =============================================================================

pub fn handle_dashboard_message(
    ctx: &mut UpdateContext<'_>,
    message: dashboard::Message,
) -> Task<Message> {
    let event = ctx.dashboard.update(message);
    handle_dashboard_event(ctx, event)
}

fn handle_dashboard_event(ctx: &mut UpdateContext<'_>, event: DashboardEvent) -> Task<Message> {
    match event {
        DashboardEvent::None => Task::none(),
        DashboardEvent::FetchFoods(request) => fetch_foods(ctx, request),
        DashboardEvent::FetchAll(request) => {
            Task::batch([fetch_categories(ctx), fetch_foods(ctx, request)])
        }
        DashboardEvent::OpenFood(id) => open_food_details(ctx, id),
        DashboardEvent::LoadFailed { message_key, error } => {
            report_load_failure(ctx, message_key, &error);
            Task::none()
        }
        DashboardEvent::Loaded { message_key } => {
            ctx.notifications.clear_key(message_key);
            Task::none()
        }
    }
}

pub fn handle_favorites_message(
    ctx: &mut UpdateContext<'_>,
    message: favorites::Message,
) -> Task<Message> {
    let event = ctx.favorites.update(message);
    handle_favorites_event(ctx, event)
}

fn handle_favorites_event(ctx: &mut UpdateContext<'_>, event: FavoritesEvent) -> Task<Message> {
    match event {
        FavoritesEvent::None => Task::none(),
        FavoritesEvent::Fetch(generation) => fetch_favorites(ctx, generation),
        FavoritesEvent::OpenFood(id) => open_food_details(ctx, id),
        FavoritesEvent::LoadFailed { message_key, error } => {
            report_load_failure(ctx, message_key, &error);
            Task::none()
        }
        FavoritesEvent::Loaded { message_key } => {
            ctx.notifications.clear_key(message_key);
            Task::none()
        }
    }
}

pub fn handle_food_details_message(
    ctx: &mut UpdateContext<'_>,
    message: food_details::Message,
) -> Task<Message> {
    let Some(state) = ctx.food_details.as_mut() else {
        // A response arriving after the screen was left
        tracing::debug!(?message, "food details message without an open screen");
        return Task::none();
    };
    let event = state.update(message);

    match event {
        FoodDetailsEvent::None => Task::none(),
        FoodDetailsEvent::Back => {
            let origin = ctx.screen.origin();
            switch_to_tab(ctx, origin)
        }
        FoodDetailsEvent::AddFavorite(payload) => {
            let api = ctx.api.clone();
            tracing::debug!(food = %payload.id, "adding favorite");
            Task::perform(
                async move { api?.add_favorite(&payload).await },
                Message::FavoriteSaved,
            )
        }
        FoodDetailsEvent::RemoveFavorite(id) => {
            let api = ctx.api.clone();
            tracing::debug!(food = %id, "removing favorite");
            Task::perform(
                async move { api?.remove_favorite(id).await },
                Message::FavoriteSaved,
            )
        }
        FoodDetailsEvent::OrderFinished {
            food_id,
            quantity,
            total,
        } => {
            // Orders are not sent anywhere yet
            tracing::info!(food = %food_id, quantity, total, "order confirmed");
            ctx.notifications.push(
                Notification::success(ORDER_PLACED_KEY)
                    .with_arg("total", ctx.currency.format(total)),
            );
            Task::none()
        }
        FoodDetailsEvent::LoadFailed { message_key, error } => {
            report_load_failure(ctx, message_key, &error);
            Task::none()
        }
        FoodDetailsEvent::Loaded { message_key } => {
            ctx.notifications.clear_key(message_key);
            Task::none()
        }
    }
}

pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message, ctx.screen.tab()) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::Open(tab) => switch_to_tab(ctx, tab),
    }
}

/// A failed favorite request leaves the local flag as the user set it.
pub fn handle_favorite_saved(
    ctx: &mut UpdateContext<'_>,
    result: Result<(), ApiError>,
) -> Task<Message> {
    if let Err(error) = result {
        ctx.notifications.push(Notification::api_failure(
            Severity::Warning,
            FAVORITE_SAVE_FAILED_KEY,
            &error,
        ));
    }
    Task::none()
}

pub fn handle_image_loaded(
    ctx: &mut UpdateContext<'_>,
    url: String,
    result: Result<Vec<u8>, ApiError>,
) -> Task<Message> {
    ctx.images.finish(url, result);
    Task::none()
}

// =============================================================================
// Navigation
// =============================================================================

pub fn switch_to_tab(ctx: &mut UpdateContext<'_>, tab: Tab) -> Task<Message> {
    tracing::debug!(?tab, "switching tab");
    *ctx.screen = Screen::from(tab);
    *ctx.food_details = None;
    match tab {
        Tab::Dashboard => {
            let event = ctx.dashboard.enter();
            handle_dashboard_event(ctx, event)
        }
        Tab::Favorites => {
            let event = ctx.favorites.enter();
            handle_favorites_event(ctx, event)
        }
    }
}

fn open_food_details(ctx: &mut UpdateContext<'_>, id: FoodId) -> Task<Message> {
    let origin = ctx.screen.origin();
    tracing::debug!(food = %id, ?origin, "opening food details");
    *ctx.screen = Screen::FoodDetails { origin };
    *ctx.food_details = Some(food_details::State::new(id));

    let api = ctx.api.clone();
    let currency = ctx.currency;
    let details = Task::perform(
        async move {
            let record = api?.food_details(id).await?;
            Ok::<_, ApiError>(LoadedFood::from_record(record, currency))
        },
        move |result| Message::FoodDetails(food_details::Message::DetailsLoaded { id, result }),
    );

    let api = ctx.api.clone();
    let favorite_status = Task::perform(
        async move {
            let favorites = api?.favorites().await?;
            Ok::<_, ApiError>(favorites.iter().any(|food| food.id == id))
        },
        move |result| {
            Message::FoodDetails(food_details::Message::FavoriteStatusLoaded { id, result })
        },
    );

    Task::batch([details, favorite_status])
}

// =============================================================================
// Fetches
// =============================================================================

fn fetch_foods(ctx: &UpdateContext<'_>, request: FoodsRequest) -> Task<Message> {
    let api = ctx.api.clone();
    let currency = ctx.currency;
    let FoodsRequest { generation, filter } = request;
    Task::perform(
        async move {
            let records = api?.foods(&filter).await?;
            Ok::<_, ApiError>(foods_from_records(records, currency))
        },
        move |result| Message::Dashboard(dashboard::Message::FoodsLoaded { generation, result }),
    )
}

fn fetch_categories(ctx: &UpdateContext<'_>) -> Task<Message> {
    let api = ctx.api.clone();
    Task::perform(
        async move {
            let records = api?.categories().await?;
            Ok::<Vec<Category>, ApiError>(records.into_iter().map(Category::from).collect())
        },
        |result| Message::Dashboard(dashboard::Message::CategoriesLoaded(result)),
    )
}

fn fetch_favorites(ctx: &UpdateContext<'_>, generation: u64) -> Task<Message> {
    let api = ctx.api.clone();
    let currency = ctx.currency;
    Task::perform(
        async move {
            let records = api?.favorites().await?;
            Ok::<_, ApiError>(foods_from_records(records, currency))
        },
        move |result| Message::Favorites(favorites::Message::Loaded { generation, result }),
    )
}

/// Starts downloads for the images the current screen shows but the cache
/// does not know yet.
pub fn request_images(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let missing = match *ctx.screen {
        Screen::Dashboard => ctx.images.request(ctx.dashboard.image_urls()),
        Screen::Favorites => ctx.images.request(ctx.favorites.image_urls()),
        Screen::FoodDetails { .. } => match ctx.food_details.as_ref() {
            Some(state) => ctx.images.request(state.image_urls()),
            None => Vec::new(),
        },
    };
    if missing.is_empty() {
        return Task::none();
    }

    Task::batch(missing.into_iter().map(|url| {
        let api = ctx.api.clone();
        let target = url.clone();
        Task::perform(
            async move { api?.fetch_bytes(&target).await },
            move |result| Message::ImageLoaded {
                url: url.clone(),
                result,
            },
        )
    }))
}

fn report_load_failure(ctx: &mut UpdateContext<'_>, message_key: &str, error: &ApiError) {
    tracing::warn!(key = message_key, %error, "load failed");
    ctx.notifications
        .push(Notification::api_failure(Severity::Error, message_key, error));
}

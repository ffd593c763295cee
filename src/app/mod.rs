// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the three screens.
//!
//! The `App` struct wires together the screens, localization, the backend
//! client and the image cache, and translates screen events into side
//! effects such as network requests, navigation or toasts.

mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::api::{ApiClient, ApiResult};
use crate::config::{self, Config};
use crate::food::Currency;
use crate::i18n::fluent::I18n;
use crate::ui::dashboard;
use crate::ui::favorites;
use crate::ui::food_details;
use crate::ui::images::ThumbnailCache;
use crate::ui::navbar::Tab;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

pub const INVALID_API_URL_KEY: &str = "notification-invalid-api-url";

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    dashboard: dashboard::State,
    favorites: favorites::State,
    food_details: Option<food_details::State>,
    api: ApiResult<ApiClient>,
    currency: Currency,
    images: ThumbnailCache,
    theme_mode: ThemeMode,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("api", &self.api.as_ref().map(|client| client.base_url().as_str()))
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: f32 = 760.0;
pub const WINDOW_DEFAULT_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;
pub const MIN_WINDOW_WIDTH: f32 = 360.0;

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires the boot function to be `Fn`; flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::from_config(None, &Config::default())
    }
}

impl App {
    /// Loads the configuration and enters the dashboard.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (mut config, config_warning) = config::load();
        if let Some(url) = flags.api_url {
            config.api.base_url = url;
        }

        let mut app = Self::from_config(flags.lang, &config);
        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }

        let task = app.enter(Tab::Dashboard);
        (app, task)
    }

    fn from_config(lang: Option<String>, config: &Config) -> Self {
        let mut notifications = notifications::Manager::new();
        let api = ApiClient::new(&config.api).or_else(|error| {
            tracing::warn!(
                url = %config.api.base_url,
                %error,
                "invalid backend URL, using default"
            );
            notifications.push(
                Notification::warning(INVALID_API_URL_KEY)
                    .with_arg("url", config.api.base_url.as_str()),
            );
            ApiClient::with_base_url(config::DEFAULT_API_BASE_URL, config.api.timeout())
        });

        Self {
            i18n: I18n::new(lang, config),
            screen: Screen::Dashboard,
            dashboard: dashboard::State::new(),
            favorites: favorites::State::new(),
            food_details: None,
            api,
            currency: config.display.currency,
            images: ThumbnailCache::new(config.display.clamped_thumbnail_cache_size()),
            theme_mode: config.general.theme_mode,
            notifications,
        }
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            screen: &mut self.screen,
            dashboard: &mut self.dashboard,
            favorites: &mut self.favorites,
            food_details: &mut self.food_details,
            images: &mut self.images,
            notifications: &mut self.notifications,
            api: &self.api,
            currency: self.currency,
        }
    }

    fn enter(&mut self, tab: Tab) -> Task<Message> {
        let mut ctx = self.update_context();
        update::switch_to_tab(&mut ctx, tab)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let screen_title = match self.screen {
            Screen::Dashboard => return app_name,
            Screen::Favorites => self.i18n.tr("favorites-title"),
            Screen::FoodDetails { .. } => {
                match self.food_details.as_ref().and_then(|s| s.details()) {
                    Some(details) => details.name.clone(),
                    None => self.i18n.tr("details-title"),
                }
            }
        };
        format!("{screen_title} - {app_name}")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.has_notifications())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.update_context();

        let task = match message {
            Message::Dashboard(message) => update::handle_dashboard_message(&mut ctx, message),
            Message::Favorites(message) => update::handle_favorites_message(&mut ctx, message),
            Message::FoodDetails(message) => update::handle_food_details_message(&mut ctx, message),
            Message::Navbar(message) => update::handle_navbar_message(&mut ctx, message),
            Message::Notification(message) => {
                ctx.notifications.handle_message(&message);
                Task::none()
            }
            Message::FavoriteSaved(result) => update::handle_favorite_saved(&mut ctx, result),
            Message::ImageLoaded { url, result } => {
                update::handle_image_loaded(&mut ctx, url, result)
            }
            Message::Tick(now) => {
                ctx.notifications.tick(now);
                Task::none()
            }
        };

        let images = update::request_images(&mut ctx);
        Task::batch([task, images])
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            dashboard: &self.dashboard,
            favorites: &self.favorites,
            food_details: self.food_details.as_ref(),
            images: &self.images,
            notifications: &self.notifications,
            currency: self.currency,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::error::ApiError;
    use crate::food::{Food, FoodId};
    use crate::ui::navbar;
    use tempfile::tempdir;

    fn with_temp_config_dir<F>(test: F)
    where
        F: FnOnce(&std::path::Path),
    {
        let _guard = paths::ENV_MUTEX
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let temp_dir = tempdir().expect("failed to create temp dir");
        let previous = std::env::var(paths::ENV_CONFIG_DIR).ok();
        std::env::set_var(paths::ENV_CONFIG_DIR, temp_dir.path());

        test(temp_dir.path());

        if let Some(value) = previous {
            std::env::set_var(paths::ENV_CONFIG_DIR, value);
        } else {
            std::env::remove_var(paths::ENV_CONFIG_DIR);
        }
    }

    fn food(id: u64) -> Food {
        Food {
            id: FoodId(id),
            name: format!("Food {id}"),
            description: String::new(),
            price: 12.0,
            thumbnail_url: String::new(),
            formatted_price: "R$\u{a0}12,00".to_string(),
        }
    }

    #[test]
    fn new_starts_on_dashboard() {
        with_temp_config_dir(|_| {
            let (app, _task) = App::new(Flags::default());
            assert_eq!(app.screen, Screen::Dashboard);
            assert!(app.api.is_ok());
            assert_eq!(app.dashboard.generation(), 1);
        });
    }

    #[test]
    fn api_url_flag_overrides_config() {
        with_temp_config_dir(|_| {
            let (app, _task) = App::new(Flags {
                api_url: Some("http://10.0.0.2:4000".to_string()),
                ..Flags::default()
            });
            let base = app.api.as_ref().map(|c| c.base_url().as_str().to_string());
            assert_eq!(base, Ok("http://10.0.0.2:4000/".to_string()));
        });
    }

    #[test]
    fn invalid_api_url_falls_back_with_warning() {
        let config = Config {
            api: ApiConfig {
                base_url: "not a url".to_string(),
                ..ApiConfig::default()
            },
            ..Config::default()
        };
        let app = App::from_config(None, &config);
        assert!(app.api.is_ok());
        assert_eq!(app.notifications.visible_count(), 1);
        assert_eq!(
            app.notifications.visible().next().map(|n| n.message_key()),
            Some(INVALID_API_URL_KEY)
        );
    }

    #[test]
    fn opening_a_food_switches_to_details_and_back_returns() {
        let mut app = App::default();
        let _ = app.update(Message::Dashboard(dashboard::Message::OpenFood(FoodId(3))));
        assert_eq!(
            app.screen,
            Screen::FoodDetails {
                origin: Tab::Dashboard
            }
        );
        assert_eq!(app.food_details.as_ref().map(|s| s.food_id()), Some(FoodId(3)));

        let _ = app.update(Message::FoodDetails(food_details::Message::Back));
        assert_eq!(app.screen, Screen::Dashboard);
        assert!(app.food_details.is_none());
    }

    #[test]
    fn details_opened_from_favorites_return_to_favorites() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::Select(Tab::Favorites)));
        assert_eq!(app.screen, Screen::Favorites);

        let _ = app.update(Message::Favorites(favorites::Message::OpenFood(FoodId(1))));
        let _ = app.update(Message::FoodDetails(food_details::Message::Back));
        assert_eq!(app.screen, Screen::Favorites);
    }

    #[test]
    fn failed_load_shows_toast_and_success_clears_it() {
        let mut app = App::default();
        let _ = app.update(Message::Dashboard(dashboard::Message::Refresh));
        let generation = app.dashboard.generation();

        let _ = app.update(Message::Dashboard(dashboard::Message::FoodsLoaded {
            generation,
            result: Err(ApiError::Status(500)),
        }));
        assert!(app
            .notifications
            .visible()
            .any(|n| n.message_key() == dashboard::FOODS_LOAD_FAILED_KEY));

        let _ = app.update(Message::Dashboard(dashboard::Message::Refresh));
        let generation = app.dashboard.generation();
        let _ = app.update(Message::Dashboard(dashboard::Message::FoodsLoaded {
            generation,
            result: Ok(vec![food(1)]),
        }));
        assert!(!app
            .notifications
            .visible()
            .any(|n| n.message_key() == dashboard::FOODS_LOAD_FAILED_KEY));
        assert_eq!(app.dashboard.foods().len(), 1);
    }

    #[test]
    fn failed_favorite_save_warns_without_rollback() {
        let mut app = App::default();
        let _ = app.update(Message::FavoriteSaved(Err(ApiError::Timeout)));
        assert!(app
            .notifications
            .visible()
            .any(|n| n.message_key() == update::FAVORITE_SAVE_FAILED_KEY));
    }

    #[test]
    fn late_details_message_after_leaving_is_ignored() {
        let mut app = App::default();
        let _ = app.update(Message::FoodDetails(food_details::Message::IncrementFood));
        assert!(app.food_details.is_none());
        assert_eq!(app.screen, Screen::Dashboard);
    }

    #[test]
    fn title_names_the_screen() {
        let mut app = App::default();
        assert_eq!(app.title(), app.i18n.tr("window-title"));
        let _ = app.update(Message::Navbar(navbar::Message::Select(Tab::Favorites)));
        assert!(app.title().starts_with(&app.i18n.tr("favorites-title")));
    }
}

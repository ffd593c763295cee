// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::ApiError;
use crate::ui::dashboard;
use crate::ui::favorites;
use crate::ui::food_details;
use crate::ui::navbar;
use crate::ui::notifications;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// screen messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Dashboard(dashboard::Message),
    Favorites(favorites::Message),
    FoodDetails(food_details::Message),
    Navbar(navbar::Message),
    Notification(notifications::NotificationMessage),
    /// Outcome of a favorite add/remove request.
    FavoriteSaved(Result<(), ApiError>),
    ImageLoaded {
        url: String,
        result: Result<Vec<u8>, ApiError>,
    },
    /// Periodic tick for toast auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `pt-BR`, `en`).
    pub lang: Option<String>,
    /// Optional backend URL overriding `[api].base_url`.
    pub api_url: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_FOOD_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}

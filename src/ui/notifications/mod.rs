// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Backend failures and other events that need the user's attention are
//! pushed to a [`Manager`] and drawn as toasts over the current screen.
//!
//! - [`notification`]: `Notification` with its severity and i18n key
//! - [`manager`]: queueing, deduplication and auto-dismiss
//! - [`toast`]: the widget
//!
//! Success and info toasts disappear after ~3s, warnings after ~5s, errors
//! stay until dismissed. At most three are visible; others wait in a queue.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, Severity};
pub use toast::Toast;

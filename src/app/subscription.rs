// SPDX-License-Identifier: MPL-2.0
//! Time-based subscriptions for the application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Ticks only while toasts are pending, so an idle app does not wake up.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across screens.
//!
//! - [`food_card`]: clickable food row used by the dashboard and favorites
//! - [`empty_state`]: centered message for loading and empty lists

pub mod empty_state;
pub mod food_card;

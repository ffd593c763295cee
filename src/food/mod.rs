// SPDX-License-Identifier: MPL-2.0
//! Food domain: display records, price formatting and order composition.

pub mod model;
pub mod order;
pub mod price;

pub use model::{Category, CategoryId, Extra, ExtraId, Food, FoodDetails, FoodId};
pub use order::Order;
pub use price::Currency;

// SPDX-License-Identifier: MPL-2.0
//! `iced_food` is a food-ordering desktop client built with the Iced GUI
//! framework.
//!
//! It lists foods and categories from a REST backend, lets the user compose
//! an order with extras and keeps a list of favorites. Text is localized
//! with Fluent and preferences live in a `settings.toml` file.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod food;
pub mod i18n;
pub mod ui;

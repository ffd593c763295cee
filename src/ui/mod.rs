// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Each screen follows the Elm-style "state down, messages up" pattern: it
//! owns a `State`, turns its `Message`s into `Event`s for the application,
//! and renders itself from a `ViewContext`.
//!
//! # Screens
//!
//! - [`dashboard`] - Food list with search and category filter
//! - [`favorites`] - Foods marked as favorite
//! - [`food_details`] - Extras, quantity, favorite toggle and order total
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Food rows and empty-list placeholders
//! - [`images`] - URL-keyed LRU cache of downloaded images
//! - [`navbar`] - Bottom tab bar
//! - [`notifications`] - Toast notification system for user feedback
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod components;
pub mod dashboard;
pub mod design_tokens;
pub mod favorites;
pub mod food_details;
pub mod images;
pub mod navbar;
pub mod notifications;
pub mod styles;
pub mod theming;

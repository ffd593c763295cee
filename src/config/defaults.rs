// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **API**: Backend location and request timeout
//! - **Display**: Thumbnail cache sizing

// ==========================================================================
// API Defaults
// ==========================================================================

/// Backend used when neither the config file nor `--api-url` provide one.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3333";

/// Default request timeout (in seconds).
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 10;

/// Minimum request timeout (in seconds).
pub const MIN_API_TIMEOUT_SECS: u64 = 1;

/// Maximum request timeout (in seconds).
pub const MAX_API_TIMEOUT_SECS: u64 = 120;

// ==========================================================================
// Display Defaults
// ==========================================================================

/// Default number of decoded images kept in memory.
pub const DEFAULT_THUMBNAIL_CACHE_SIZE: usize = 64;

/// Minimum thumbnail cache capacity.
pub const MIN_THUMBNAIL_CACHE_SIZE: usize = 8;

/// Maximum thumbnail cache capacity.
pub const MAX_THUMBNAIL_CACHE_SIZE: usize = 512;

const _: () = {
    assert!(MIN_API_TIMEOUT_SECS <= DEFAULT_API_TIMEOUT_SECS);
    assert!(DEFAULT_API_TIMEOUT_SECS <= MAX_API_TIMEOUT_SECS);
    assert!(MIN_THUMBNAIL_CACHE_SIZE <= DEFAULT_THUMBNAIL_CACHE_SIZE);
    assert!(DEFAULT_THUMBNAIL_CACHE_SIZE <= MAX_THUMBNAIL_CACHE_SIZE);
};

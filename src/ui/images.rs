// SPDX-License-Identifier: MPL-2.0
//! Remote image cache for food thumbnails, category icons and details photos.
//!
//! Images are keyed by URL and kept in an LRU so that scrolling back and
//! forth between screens does not refetch them. Entries move from
//! `Loading` to either `Loaded` or `Failed`; failed URLs are not retried
//! until they fall out of the cache.
//!
//! A request never evicts a URL the same request asks for. When a screen
//! shows more images than the cache holds, the overflow stays as a
//! placeholder instead of being downloaded over and over.

use crate::error::ApiError;
use crate::ui::styles;
use iced::widget::image::Handle;
use iced::widget::{image, text, Container};
use iced::{alignment, ContentFit, Element, Length};
use lru::LruCache;
use std::collections::HashSet;
use std::num::NonZeroUsize;

#[derive(Debug, Clone)]
pub enum ImageState {
    Loading,
    Loaded(Handle),
    Failed,
}

pub struct ThumbnailCache {
    cache: LruCache<String, ImageState>,
}

impl std::fmt::Debug for ThumbnailCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThumbnailCache")
            .field("len", &self.cache.len())
            .field("capacity", &self.cache.cap())
            .finish()
    }
}

impl ThumbnailCache {
    /// `capacity` is expected to be clamped by the caller; zero is bumped to one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
        }
    }

    /// Marks unknown URLs as loading and returns them for fetching.
    ///
    /// Blank and duplicate URLs are skipped. URLs already cached are promoted
    /// first so that only entries outside `urls` are evicted; once the least
    /// recently used entry is itself wanted, the remaining URLs are left out.
    pub fn request<'u>(&mut self, urls: impl IntoIterator<Item = &'u str>) -> Vec<String> {
        let mut wanted: Vec<&str> = Vec::new();
        let mut seen = HashSet::new();
        for url in urls {
            let url = url.trim();
            if !url.is_empty() && seen.insert(url) {
                wanted.push(url);
            }
        }

        for url in &wanted {
            self.cache.promote(*url);
        }

        let mut missing = Vec::new();
        for url in wanted.iter().copied() {
            if self.cache.contains(url) {
                continue;
            }
            if self.cache.len() >= self.cache.cap().get() {
                let evicts_wanted = self
                    .cache
                    .peek_lru()
                    .is_some_and(|(lru, _)| seen.contains(lru.as_str()));
                if evicts_wanted {
                    tracing::debug!(capacity = self.cache.cap().get(), "image cache full");
                    break;
                }
            }
            self.cache.put(url.to_string(), ImageState::Loading);
            missing.push(url.to_string());
        }
        missing
    }

    /// Stores the outcome of a fetch started by [`ThumbnailCache::request`].
    ///
    /// Results for URLs evicted in the meantime are dropped.
    pub fn finish(&mut self, url: String, result: Result<Vec<u8>, ApiError>) {
        let Some(entry) = self.cache.peek_mut(url.as_str()) else {
            tracing::debug!(%url, "image finished after eviction");
            return;
        };
        *entry = match result {
            Ok(bytes) => ImageState::Loaded(Handle::from_bytes(bytes)),
            Err(err) => {
                tracing::debug!(%url, error = %err, "image fetch failed");
                ImageState::Failed
            }
        };
    }

    /// Looks up a URL without touching the LRU order, so views stay `&self`.
    #[must_use]
    pub fn state(&self, url: &str) -> Option<&ImageState> {
        self.cache.peek(url)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Image sized `width` x `height`, or a placeholder box while it is
    /// missing, loading or broken.
    pub fn view<'a, M: 'a>(&self, url: Option<&str>, width: f32, height: f32) -> Element<'a, M> {
        let state = url.and_then(|url| self.state(url.trim()));
        match state {
            Some(ImageState::Loaded(handle)) => image(handle.clone())
                .width(Length::Fixed(width))
                .height(Length::Fixed(height))
                .content_fit(ContentFit::Cover)
                .into(),
            Some(ImageState::Loading) => placeholder(text("…"), width, height),
            Some(ImageState::Failed) | None => placeholder(text(""), width, height),
        }
    }
}

fn placeholder<'a, M: 'a>(
    content: iced::widget::Text<'a>,
    width: f32,
    height: f32,
) -> Element<'a, M> {
    Container::new(content)
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::image_placeholder)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_returns_only_unknown_urls() {
        let mut cache = ThumbnailCache::new(8);
        let first = cache.request([
            "http://img/a.png",
            "http://img/b.png",
            "",
            "http://img/a.png",
        ]);
        assert_eq!(first, vec!["http://img/a.png", "http://img/b.png"]);

        let second = cache.request(["http://img/a.png", "http://img/c.png"]);
        assert_eq!(second, vec!["http://img/c.png"]);
        assert!(matches!(cache.state("http://img/a.png"), Some(ImageState::Loading)));
    }

    #[test]
    fn finish_records_success_and_failure() {
        let mut cache = ThumbnailCache::new(8);
        cache.request(["http://img/a.png", "http://img/b.png"]);

        cache.finish("http://img/a.png".to_string(), Ok(vec![0u8; 4]));
        cache.finish("http://img/b.png".to_string(), Err(ApiError::NotFound));

        assert!(matches!(cache.state("http://img/a.png"), Some(ImageState::Loaded(_))));
        assert!(matches!(cache.state("http://img/b.png"), Some(ImageState::Failed)));
        // Failed URLs are not retried while cached
        assert!(cache.request(["http://img/b.png"]).is_empty());
    }

    #[test]
    fn fetched_urls_are_not_requested_again_when_screen_exceeds_capacity() {
        let mut cache = ThumbnailCache::new(2);
        let urls = ["http://img/a.png", "http://img/b.png", "http://img/c.png"];

        let first = cache.request(urls);
        assert_eq!(first, vec!["http://img/a.png", "http://img/b.png"]);
        for url in first {
            cache.finish(url, Ok(vec![0u8; 4]));
        }

        assert!(cache.request(urls).is_empty());
        assert!(cache.request(urls).is_empty());
        assert!(matches!(cache.state("http://img/a.png"), Some(ImageState::Loaded(_))));
        assert!(matches!(cache.state("http://img/b.png"), Some(ImageState::Loaded(_))));
    }

    #[test]
    fn urls_from_another_screen_are_evicted_first() {
        let mut cache = ThumbnailCache::new(2);
        cache.request(["old-a", "old-b"]);

        assert_eq!(cache.request(["new-a", "new-b"]), vec!["new-a", "new-b"]);
        assert!(cache.state("old-a").is_none());
        assert!(cache.state("old-b").is_none());
    }

    #[test]
    fn finish_for_evicted_url_is_dropped() {
        let mut cache = ThumbnailCache::new(1);
        cache.request(["a"]);
        cache.request(["b"]);

        cache.finish("a".to_string(), Ok(vec![0u8; 4]));
        assert!(cache.state("a").is_none());
        assert!(matches!(cache.state("b"), Some(ImageState::Loading)));
    }

    #[test]
    fn zero_capacity_is_bumped() {
        let mut cache = ThumbnailCache::new(0);
        cache.request(["a"]);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn view_handles_every_state() {
        let mut cache = ThumbnailCache::new(4);
        cache.request(["loading"]);
        let _: Element<'_, ()> = cache.view(Some("loading"), 10.0, 10.0);
        let _: Element<'_, ()> = cache.view(Some("unknown"), 10.0, 10.0);
        let _: Element<'_, ()> = cache.view(None, 10.0, 10.0);
    }
}

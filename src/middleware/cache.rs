// src/middleware/cache.rs
use moka::future::Cache;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::i18n::Lang;

/// Rendered HTML for pages that depend only on path and language.
#[derive(Clone)]
pub struct PageCache {
    pages: Arc<Cache<String, String>>,
}

impl PageCache {
    pub fn new(ttl_secs: u64) -> Self {
        Self {
            pages: Arc::new(
                Cache::builder()
                    .max_capacity(256)
                    .time_to_live(Duration::from_secs(ttl_secs))
                    .build(),
            ),
        }
    }

    fn key(path: &str, lang: Lang) -> String {
        format!("{}|{}", path, lang.code())
    }

    pub async fn get_or_render<F, Fut>(&self, path: &str, lang: Lang, render: F) -> String
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = String>,
    {
        let key = Self::key(path, lang);
        if let Some(html) = self.pages.get(&key).await {
            tracing::debug!("Page cache hit: {}", key);
            return html;
        }
        let html = render().await;
        self.pages.insert(key, html.clone()).await;
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_second_render_is_served_from_cache() {
        let cache = PageCache::new(60);
        let calls = AtomicUsize::new(0);

        for _ in 0..2 {
            let html = cache
                .get_or_render("/about", Lang::Sw, || async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    "<h1>Kuhusu</h1>".to_string()
                })
                .await;
            assert_eq!(html, "<h1>Kuhusu</h1>");
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_languages_are_cached_separately() {
        let cache = PageCache::new(60);
        let en = cache.get_or_render("/about", Lang::En, || async { "en".to_string() }).await;
        let sw = cache.get_or_render("/about", Lang::Sw, || async { "sw".to_string() }).await;
        assert_eq!((en.as_str(), sw.as_str()), ("en", "sw"));
    }
}

//! Cache of parsed templates keyed by their source text
//!
//! Hot logging paths hand the same template string over and over; the cache
//! makes every call after the first a map lookup.

use std::sync::Arc;

use dashmap::DashMap;
use log::{debug, trace};
use once_cell::sync::Lazy;
use serde::Deserialize;

use super::MessageTemplate;

/// Limits applied by a [`TemplateCache`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Entries held before the cache is cleared; 0 disables caching
    pub max_entries: usize,
    /// Templates longer than this (in bytes) are parsed but never stored
    pub max_template_length: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: 1000,
            max_template_length: 1024,
        }
    }
}

impl CacheConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of cached templates
    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries;
        self
    }

    /// Set the longest template that will be cached
    pub fn with_max_template_length(mut self, max_template_length: usize) -> Self {
        self.max_template_length = max_template_length;
        self
    }
}

static GLOBAL: Lazy<TemplateCache> = Lazy::new(TemplateCache::new);

/// Thread-safe map from template text to parsed template
///
/// Parsing happens outside any lock. When two threads parse the same text at
/// once, the first insert wins and both callers get that entry.
#[derive(Debug, Default)]
pub struct TemplateCache {
    entries: DashMap<String, Arc<MessageTemplate>>,
    config: CacheConfig,
}

impl TemplateCache {
    /// Create an empty cache with default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty cache with custom limits
    pub fn with_config(config: CacheConfig) -> Self {
        Self {
            entries: DashMap::new(),
            config,
        }
    }

    /// The process-wide cache, created on first use
    pub fn global() -> &'static TemplateCache {
        &GLOBAL
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Return the cached template for `text`, parsing and storing it if absent
    pub fn get_or_parse(&self, text: &str) -> Arc<MessageTemplate> {
        if let Some(entry) = self.entries.get(text) {
            trace!("template cache hit for {:?}", text);
            return Arc::clone(entry.value());
        }

        let parsed = Arc::new(MessageTemplate::parse(text));
        if self.config.max_entries == 0 || text.len() > self.config.max_template_length {
            debug!("template of {} bytes is not cacheable", text.len());
            return parsed;
        }

        if self.entries.len() >= self.config.max_entries {
            debug!(
                "template cache reached {} entries; clearing",
                self.config.max_entries
            );
            self.entries.clear();
        }

        let entry = self.entries.entry(text.to_string()).or_insert(parsed);
        Arc::clone(entry.value())
    }

    pub fn contains(&self, text: &str) -> bool {
        self.entries.contains_key(text)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every cached template
    pub fn clear(&self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_or_parse_returns_same_instance() {
        let cache = TemplateCache::new();
        let first = cache.get_or_parse("Hello {Name}");
        let second = cache.get_or_parse("Hello {Name}");
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_distinct_texts_get_distinct_entries() {
        let cache = TemplateCache::new();
        cache.get_or_parse("{A}");
        cache.get_or_parse("{B}");
        assert_eq!(cache.len(), 2);
        assert!(cache.contains("{A}"));
        assert!(!cache.contains("{C}"));
    }

    #[test]
    fn test_long_templates_are_not_cached() {
        let cache = TemplateCache::with_config(CacheConfig::new().with_max_template_length(4));
        let template = cache.get_or_parse("{Long}");
        assert_eq!(template.text(), "{Long}");
        assert!(cache.is_empty());
    }

    #[test]
    fn test_full_cache_is_cleared_before_insert() {
        let cache = TemplateCache::with_config(CacheConfig::new().with_max_entries(2));
        cache.get_or_parse("a");
        cache.get_or_parse("b");
        cache.get_or_parse("c");
        assert_eq!(cache.len(), 1);
        assert!(cache.contains("c"));
    }

    #[test]
    fn test_zero_entries_disables_caching() {
        let cache = TemplateCache::with_config(CacheConfig::new().with_max_entries(0));
        cache.get_or_parse("a");
        assert!(cache.is_empty());
    }

    #[test]
    fn test_clear() {
        let cache = TemplateCache::new();
        cache.get_or_parse("a");
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_global_cache_is_shared() {
        let a = TemplateCache::global().get_or_parse("global {Shared}");
        let b = TemplateCache::global().get_or_parse("global {Shared}");
        assert!(Arc::ptr_eq(&a, &b));
    }
}

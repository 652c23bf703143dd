use std::collections::HashMap;

/// Stream urls which were already resolved, keyed by `"{server_id}|{quality}"`. Entries are never
/// evicted and failed resolutions are never stored.
#[derive(Clone, Debug, Default)]
pub struct ResolvedUrlCache {
    urls: HashMap<String, String>,
}

impl ResolvedUrlCache {
    pub fn key(server_id: &str, quality: &str) -> String {
        format!("{server_id}|{quality}")
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.urls.get(key).map(|url| url.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.urls.contains_key(key)
    }

    pub(crate) fn insert(&mut self, key: String, url: String) {
        self.urls.insert(key, url);
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

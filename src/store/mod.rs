use std::collections::BTreeSet;
use std::sync::{Mutex, MutexGuard};

use crate::domain::NormalizedUrl;

/// Final harvest output: every parameter name and every normalized URL.
///
/// Both sets are ordered, so iterating yields a deterministic listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    pub params: BTreeSet<String>,
    pub urls: BTreeSet<String>,
}

impl ResultSet {
    pub fn param_count(&self) -> usize {
        self.params.len()
    }

    pub fn url_count(&self) -> usize {
        self.urls.len()
    }
}

/// Shared accumulator written by every domain job.
///
/// One lock covers both sets so a URL and its parameter names land together.
#[derive(Debug, Default)]
pub struct ResultStore {
    inner: Mutex<ResultSet>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn merge(&self, normalized: NormalizedUrl) {
        let mut set = self.lock();
        set.params.extend(normalized.params);
        set.urls.insert(normalized.url);
    }

    pub fn snapshot(&self) -> ResultSet {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, ResultSet> {
        // A panicking writer leaves the sets valid; keep using them.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn normalized(url: &str, params: &[&str]) -> NormalizedUrl {
        NormalizedUrl {
            url: url.to_string(),
            params: params.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn test_merge_is_idempotent() {
        let store = ResultStore::new();
        store.merge(normalized("http://x.com/a?foo=FUZZ", &["foo"]));
        store.merge(normalized("http://x.com/a?foo=FUZZ", &["foo"]));

        let set = store.snapshot();
        assert_eq!(set.url_count(), 1);
        assert_eq!(set.param_count(), 1);
    }

    #[test]
    fn test_params_are_domain_agnostic() {
        let store = ResultStore::new();
        store.merge(normalized("http://a.com/?id=FUZZ", &["id"]));
        store.merge(normalized("http://b.com/?id=FUZZ&q=FUZZ", &["id", "q"]));

        let set = store.snapshot();
        assert_eq!(set.params.iter().cloned().collect::<Vec<_>>(), vec!["id", "q"]);
        assert_eq!(set.url_count(), 2);
    }

    #[test]
    fn test_concurrent_merges() {
        let store = Arc::new(ResultStore::new());

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = store.clone();
                std::thread::spawn(move || {
                    for i in 0..100 {
                        let url = format!("http://x.com/{}?p{}=FUZZ", i, t % 2);
                        store.merge(normalized(&url, &[format!("p{}", t % 2).as_str()]));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let set = store.snapshot();
        assert_eq!(set.param_count(), 2);
        assert_eq!(set.url_count(), 200);
    }
}

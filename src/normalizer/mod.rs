use std::collections::BTreeSet;

use url::Url;

use crate::domain::NormalizedUrl;

/// Rewrites parameterized URLs so that every query value is the placeholder.
///
/// Keys are re-encoded in sorted order, so two URLs with the same path and
/// the same key set normalize to the same string whatever their values were.
#[derive(Debug, Clone)]
pub struct Normalizer {
    placeholder: String,
}

impl Normalizer {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
        }
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Returns `None` when the URL does not parse or carries no named parameters.
    pub fn normalize(&self, raw: &str) -> Option<NormalizedUrl> {
        let mut url = Url::parse(raw.trim()).ok()?;

        let params: BTreeSet<String> = url
            .query_pairs()
            .map(|(key, _)| key.into_owned())
            .filter(|key| !key.is_empty())
            .collect();

        if params.is_empty() {
            return None;
        }

        url.set_fragment(None);
        url.query_pairs_mut()
            .clear()
            .extend_pairs(params.iter().map(|key| (key.as_str(), self.placeholder.as_str())));

        Some(NormalizedUrl {
            url: url.into(),
            params,
        })
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_PLACEHOLDER)
    }
}

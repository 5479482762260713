use std::collections::BTreeSet;

use url::Url;

/// Drops URLs whose path ends in an excluded file extension.
#[derive(Debug, Clone, Default)]
pub struct ExtensionFilter {
    excluded: BTreeSet<String>,
}

impl ExtensionFilter {
    /// Extensions are stored lowercase without a leading dot.
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let excluded = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim().trim_start_matches('.').to_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();

        Self { excluded }
    }

    pub fn is_empty(&self) -> bool {
        self.excluded.is_empty()
    }

    /// True when the URL's path ends with `.` + an excluded extension.
    pub fn is_excluded(&self, url: &str) -> bool {
        if self.excluded.is_empty() {
            return false;
        }

        let path = url_path(url).to_lowercase();
        self.excluded
            .iter()
            .any(|ext| path.strip_suffix(ext.as_str()).is_some_and(|rest| rest.ends_with('.')))
    }
}

/// Path component of `url`. Unparseable input falls back to everything
/// before the first `?` or `#`.
fn url_path(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => url
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .to_string(),
    }
}

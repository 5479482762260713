use std::collections::BTreeSet;

/// A parameterized URL with every value replaced by the placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedUrl {
    /// Re-serialized URL, keys in sorted order
    pub url: String,
    /// Original parameter names
    pub params: BTreeSet<String>,
}

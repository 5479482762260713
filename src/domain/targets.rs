use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::{HarvestError, Result};

/// Where target domains come from. Sources are read in field order.
#[derive(Debug, Clone, Default)]
pub struct TargetSources {
    pub domain: Option<String>,
    pub domain_list: Option<PathBuf>,
    pub subdomain_list: Option<PathBuf>,
}

impl TargetSources {
    pub fn is_empty(&self) -> bool {
        self.domain.is_none() && self.domain_list.is_none() && self.subdomain_list.is_none()
    }
}

/// Collect distinct targets from every source, keeping first-seen order.
///
/// An unreadable list file is logged and skipped; the other sources still load.
pub fn load_targets(sources: &TargetSources) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut targets = Vec::new();

    let mut push = |target: String| {
        if seen.insert(target.clone()) {
            targets.push(target);
        }
    };

    if let Some(target) = sources.domain.as_deref().and_then(clean_target) {
        push(target);
    }

    for path in [&sources.domain_list, &sources.subdomain_list]
        .into_iter()
        .flatten()
    {
        match read_target_file(path) {
            Ok(lines) => {
                tracing::debug!("Loaded {} targets from {}", lines.len(), path.display());
                lines.into_iter().for_each(&mut push);
            }
            Err(e) => tracing::error!("{}", e),
        }
    }

    targets
}

fn read_target_file(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|e| HarvestError::TargetList {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    Ok(content.lines().filter_map(clean_target).collect())
}

/// Trim a target line, strip any scheme and trailing slash. Blank lines and
/// `#` comments yield `None`.
pub fn clean_target(line: &str) -> Option<String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let target = line
        .strip_prefix("http://")
        .or_else(|| line.strip_prefix("https://"))
        .unwrap_or(line)
        .trim_end_matches('/');

    if target.is_empty() {
        None
    } else {
        Some(target.to_string())
    }
}

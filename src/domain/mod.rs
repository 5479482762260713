pub mod normalized;
pub mod targets;

pub use normalized::NormalizedUrl;
pub use targets::{clean_target, load_targets, TargetSources};

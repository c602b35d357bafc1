use tracing::Level;

use crate::sections::EmptySectionPolicy;

pub const DEFAULT_REFERENCE_DEPTH: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    pub log_level: Level,
    /// Recursion cap for source-reference extraction. Documents are plain
    /// deserialized JSON and therefore acyclic; the cap only bounds
    /// pathological nesting.
    pub reference_depth_limit: usize,
    /// Overrides the per-kind empty-section policy when set.
    pub empty_policy: Option<EmptySectionPolicy>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            log_level: Level::INFO,
            reference_depth_limit: DEFAULT_REFERENCE_DEPTH,
            empty_policy: None,
        }
    }
}

impl ViewerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup so tests do not have
    /// to mutate the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let log_level = lookup("DESIGNER_LOG")
            .map(|raw| parse_level(&raw))
            .unwrap_or(defaults.log_level);
        let reference_depth_limit = lookup("DESIGNER_REFERENCE_DEPTH")
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .filter(|value| *value > 0)
            .unwrap_or(defaults.reference_depth_limit);
        let empty_policy = lookup("DESIGNER_EMPTY_POLICY").and_then(|raw| parse_policy(&raw));

        Self {
            log_level,
            reference_depth_limit,
            empty_policy,
        }
    }
}

fn parse_level(raw: &str) -> Level {
    match raw.trim().to_ascii_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

fn parse_policy(raw: &str) -> Option<EmptySectionPolicy> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "skip" | "hide" => Some(EmptySectionPolicy::Skip),
        "show" | "placeholder" => Some(EmptySectionPolicy::ShowPlaceholder),
        _ => None,
    }
}

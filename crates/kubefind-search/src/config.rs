use regex::Regex;
use thiserror::Error;

/// Characters of context shown on each side of a match
pub const DEFAULT_RADIUS: usize = 10;

/// Errors raised while validating settings or compiling patterns
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("invalid pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Compiled search settings, fixed for the whole run
#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// Matched against the lowercased object text
    pattern: Regex,

    /// Matched against `<namespace>/<name>`
    exclude: Option<Regex>,

    radius: usize,
}

impl SearchConfig {
    /// Compile the search pattern and the optional exclude pattern.
    /// An empty `except` disables exclusion.
    pub fn new(find: &str, except: &str, radius: usize) -> Result<Self, ConfigError> {
        if find.is_empty() {
            return Err(ConfigError::Missing("find"));
        }

        let pattern = compile(find)?;
        let exclude = if except.is_empty() {
            None
        } else {
            Some(compile(except)?)
        };

        Ok(Self {
            pattern,
            exclude,
            radius,
        })
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    pub fn exclude(&self) -> Option<&Regex> {
        self.exclude.as_ref()
    }

    pub fn radius(&self) -> usize {
        self.radius
    }
}

fn compile(pattern: &str) -> Result<Regex, ConfigError> {
    Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

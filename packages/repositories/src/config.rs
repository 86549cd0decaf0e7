use std::env;
use std::str::FromStr;

use crate::post::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// What `add_comment` does with a blank comment.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum CommentValidationPolicy {
    /// Store nothing and send the visitor back to the post, no message.
    #[default]
    SilentRedirect,
    /// Report the validation error to the caller.
    Surface,
}

impl FromStr for CommentValidationPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "silent" | "silent_redirect" => Ok(Self::SilentRedirect),
            "surface" => Ok(Self::Surface),
            other => Err(format!("Unknown comment validation policy: {}", other)),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ContentConfig {
    pub page_size: usize,
    pub comment_validation: CommentValidationPolicy,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            comment_validation: CommentValidationPolicy::default(),
        }
    }
}

impl ContentConfig {
    /// Reads `PAGE_SIZE` and `COMMENT_VALIDATION`; unparsable values fall
    /// back to the defaults.
    pub fn from_env() -> Self {
        let page_size = env::var("PAGE_SIZE")
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .filter(|n| *n > 0)
            .map(|n| n.min(MAX_PAGE_SIZE))
            .unwrap_or(DEFAULT_PAGE_SIZE);

        let comment_validation = match env::var("COMMENT_VALIDATION") {
            Ok(value) => value.parse().unwrap_or_else(|e: String| {
                tracing::warn!(error = %e, "falling back to silent comment validation");
                CommentValidationPolicy::default()
            }),
            Err(_) => CommentValidationPolicy::default(),
        };

        Self { page_size, comment_validation }
    }
}

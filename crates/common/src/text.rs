//! Text matchers over a node's identifier text

use regex::Regex;

use crate::options::PatternError;

/// A set of regexes, any of which may match
#[derive(Debug, Clone, Default)]
pub struct TextPatterns {
    patterns: Vec<Regex>,
}

impl TextPatterns {
    pub fn new(patterns: &[String]) -> Result<Self, PatternError> {
        let patterns = patterns
            .iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|source| PatternError::InvalidRegex {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Unanchored search: true if any pattern is found anywhere in `text`
    pub fn is_match(&self, text: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.is_match(text))
    }
}

/// Check if `text` starts with any of the prefixes
pub fn has_prefix(text: &str, prefixes: &[String]) -> bool {
    prefixes.iter().any(|prefix| text.starts_with(prefix.as_str()))
}

/// Check if `text` ends with any of the suffixes
pub fn has_suffix(text: &str, suffixes: &[String]) -> bool {
    suffixes.iter().any(|suffix| text.ends_with(suffix.as_str()))
}

/// Translate a glob with `*` wildcards into an anchored regex
pub fn glob_to_regex(glob: &str) -> Result<Regex, PatternError> {
    let body = glob.split('*').map(regex::escape).collect::<Vec<_>>().join(".*");
    let pattern = format!("^{body}$");
    Regex::new(&pattern).map_err(|source| PatternError::InvalidRegex { pattern, source })
}

//! Ignore options shared by the rules
//!
//! Rules accept these options in their JSON configuration. Patterns are
//! compiled once when the rule is built, so a bad pattern surfaces as a
//! configuration error instead of failing in the middle of a lint pass.

use serde::Deserialize;
use thiserror::Error;

use crate::accessor::AccessorPatterns;
use crate::text::{has_prefix, has_suffix, TextPatterns};

/// Error compiling a configured pattern
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// A configuration value given as a single string or a list of strings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl Default for OneOrMany {
    fn default() -> Self {
        OneOrMany::Many(Vec::new())
    }
}

impl OneOrMany {
    pub fn as_slice(&self) -> &[String] {
        match self {
            OneOrMany::One(value) => std::slice::from_ref(value),
            OneOrMany::Many(values) => values,
        }
    }

    pub fn into_vec(self) -> Vec<String> {
        match self {
            OneOrMany::One(value) => vec![value],
            OneOrMany::Many(values) => values,
        }
    }
}

/// How class members are treated by a rule
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "IgnoreClassValue")]
pub enum IgnoreClass {
    #[default]
    Off,
    /// Everything inside a class is ignored
    All,
    /// Only class fields and assignments to `this.<member>` are ignored
    FieldsOnly,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IgnoreClassValue {
    Flag(bool),
    Mode(IgnoreClassMode),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
enum IgnoreClassMode {
    FieldsOnly,
}

impl From<IgnoreClassValue> for IgnoreClass {
    fn from(value: IgnoreClassValue) -> Self {
        match value {
            IgnoreClassValue::Flag(true) => IgnoreClass::All,
            IgnoreClassValue::Flag(false) => IgnoreClass::Off,
            IgnoreClassValue::Mode(IgnoreClassMode::FieldsOnly) => IgnoreClass::FieldsOnly,
        }
    }
}

/// Compiled ignore options
///
/// Every option is off by default. Build with the `with_*` methods.
#[derive(Debug, Clone, Default)]
pub struct IgnoreOptions {
    /// Ignore anything inside a function body
    pub allow_local_mutation: bool,
    /// Regexes searched (unanchored) in the identifier text
    pub ignore_pattern: TextPatterns,
    /// Accessor patterns matched against the identifier text
    pub ignore_accessor_pattern: AccessorPatterns,
    pub ignore_class: IgnoreClass,
    /// Ignore members of interface bodies
    pub ignore_interface: bool,
    pub ignore_prefix: Vec<String>,
    pub ignore_suffix: Vec<String>,
}

impl IgnoreOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_allow_local_mutation(mut self, allow: bool) -> Self {
        self.allow_local_mutation = allow;
        self
    }

    pub fn with_ignore_pattern(mut self, patterns: &[String]) -> Result<Self, PatternError> {
        self.ignore_pattern = TextPatterns::new(patterns)?;
        Ok(self)
    }

    pub fn with_ignore_accessor_pattern(mut self, patterns: &[String]) -> Result<Self, PatternError> {
        self.ignore_accessor_pattern = AccessorPatterns::new(patterns)?;
        Ok(self)
    }

    pub fn with_ignore_class(mut self, ignore_class: IgnoreClass) -> Self {
        self.ignore_class = ignore_class;
        self
    }

    pub fn with_ignore_interface(mut self, ignore: bool) -> Self {
        self.ignore_interface = ignore;
        self
    }

    pub fn with_ignore_prefix(mut self, prefixes: &[String]) -> Self {
        self.ignore_prefix = prefixes.to_vec();
        self
    }

    pub fn with_ignore_suffix(mut self, suffixes: &[String]) -> Self {
        self.ignore_suffix = suffixes.to_vec();
        self
    }

    /// Whether any text-based option is configured
    pub fn has_text_matchers(&self) -> bool {
        !self.ignore_pattern.is_empty()
            || !self.ignore_accessor_pattern.is_empty()
            || !self.ignore_prefix.is_empty()
            || !self.ignore_suffix.is_empty()
    }

    pub fn matches_pattern(&self, text: &str) -> bool {
        self.ignore_pattern.is_match(text)
    }

    pub fn matches_accessor_pattern(&self, text: &str) -> bool {
        self.ignore_accessor_pattern.matches(text)
    }

    /// Whether the text starts with an ignored prefix or ends with an ignored suffix
    pub fn matches_affix(&self, text: &str) -> bool {
        has_prefix(text, &self.ignore_prefix) || has_suffix(text, &self.ignore_suffix)
    }
}

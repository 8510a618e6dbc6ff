//! ESLint-style JSON configuration
//!
//! ```json
//! {
//!   "rules": {
//!     "no-let": "error",
//!     "immutable-data": ["warn", { "ignoreAccessorPattern": "mutable*.**" }],
//!     "no-class": 0
//!   }
//! }
//! ```
//!
//! A rule entry is a severity (`"off"`, `"warn"`, `"error"` or `0`, `1`,
//! `2`) or an array of a severity followed by the rule's options object.
//! Options are validated and compiled here, once.

use common::PatternError;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::diagnostic::DiagnosticSeverity;
use crate::runner::RulesConfig;

/// Error building a rules configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown rule `{0}`")]
    UnknownRule(String),
    #[error("invalid severity for `{rule}`: {value}")]
    InvalidSeverity { rule: String, value: String },
    #[error("invalid options for `{rule}`: {source}")]
    InvalidOptions {
        rule: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid pattern for `{rule}`: {source}")]
    InvalidPattern {
        rule: String,
        #[source]
        source: PatternError,
    },
}

/// Configured severity of a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleSeverity {
    Off,
    Warn,
    Error,
}

impl RuleSeverity {
    fn parse(rule: &str, value: &Value) -> Result<Self, ConfigError> {
        let severity = match value {
            Value::String(s) => match s.as_str() {
                "off" => Some(RuleSeverity::Off),
                "warn" => Some(RuleSeverity::Warn),
                "error" => Some(RuleSeverity::Error),
                _ => None,
            },
            Value::Number(n) => match n.as_u64() {
                Some(0) => Some(RuleSeverity::Off),
                Some(1) => Some(RuleSeverity::Warn),
                Some(2) => Some(RuleSeverity::Error),
                _ => None,
            },
            _ => None,
        };
        severity.ok_or_else(|| ConfigError::InvalidSeverity {
            rule: rule.to_string(),
            value: value.to_string(),
        })
    }

    /// The diagnostic severity, or `None` when the rule is off
    pub fn diagnostic_severity(self) -> Option<DiagnosticSeverity> {
        match self {
            RuleSeverity::Off => None,
            RuleSeverity::Warn => Some(DiagnosticSeverity::Warning),
            RuleSeverity::Error => Some(DiagnosticSeverity::Error),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    rules: IndexMap<String, Value>,
}

/// Split a rule entry into its severity and options
fn parse_entry(rule: &str, entry: Value) -> Result<(RuleSeverity, Option<Value>), ConfigError> {
    match entry {
        Value::Array(mut items) => {
            if items.is_empty() || items.len() > 2 {
                return Err(ConfigError::InvalidSeverity {
                    rule: rule.to_string(),
                    value: Value::Array(items).to_string(),
                });
            }
            let options = if items.len() == 2 { items.pop() } else { None };
            let severity = RuleSeverity::parse(rule, &items[0])?;
            Ok((severity, options))
        }
        value => Ok((RuleSeverity::parse(rule, &value)?, None)),
    }
}

impl RulesConfig {
    /// Build a configuration from an ESLint-style JSON document
    ///
    /// Rules not mentioned are disabled.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = serde_json::from_str(json)?;
        Self::from_entries(file.rules)
    }

    /// Build a configuration from rule entries, in order
    pub fn from_entries(entries: IndexMap<String, Value>) -> Result<Self, ConfigError> {
        let mut config = RulesConfig::none();
        for (name, entry) in entries {
            let (severity, options) = parse_entry(&name, entry)?;
            let Some(severity) = severity.diagnostic_severity() else {
                // Still validate the name
                crate::rules::build_rule(&name, None)?;
                debug!(rule = %name, "rule disabled");
                continue;
            };
            debug!(rule = %name, ?severity, has_options = options.is_some(), "rule configured");
            config = config.with_named_rule(&name, options, severity)?;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severities() {
        let config = RulesConfig::from_json(
            r#"{ "rules": { "no-let": "error", "no-class": 1, "no-this-expression": "off" } }"#,
        )
        .unwrap();
        assert_eq!(config.len(), 2);
        assert!(config.is_enabled("no-let"));
        assert!(config.is_enabled("no-class"));
        assert!(!config.is_enabled("no-this-expression"));
        assert_eq!(config.rules()[1].severity, DiagnosticSeverity::Warning);
    }

    #[test]
    fn test_rule_order_is_kept() {
        let config = RulesConfig::from_json(
            r#"{ "rules": { "no-try-statement": 2, "no-class": 2, "no-let": 2 } }"#,
        )
        .unwrap();
        let names: Vec<_> = config.rules().iter().map(|r| r.rule.name()).collect();
        assert_eq!(names, ["no-try-statement", "no-class", "no-let"]);
    }

    #[test]
    fn test_options() {
        let config = RulesConfig::from_json(
            r#"{ "rules": { "immutable-data": ["warn", { "ignoreAccessorPattern": ["mutable*.**"] }] } }"#,
        )
        .unwrap();
        assert!(config.is_enabled("immutable-data"));
    }

    #[test]
    fn test_errors() {
        let err = RulesConfig::from_json(r#"{ "rules": { "no-such-rule": "error" } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownRule(ref name) if name == "no-such-rule"));

        let err = RulesConfig::from_json(r#"{ "rules": { "no-let": "loud" } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSeverity { .. }));

        let err = RulesConfig::from_json(r#"{ "rules": { "no-let": 3 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSeverity { .. }));

        let err = RulesConfig::from_json(r#"{ "rules": { "no-let": ["error", { "bogus": true }] } }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidOptions { .. }));
        assert!(err.to_string().contains("no-let"));

        let err = RulesConfig::from_json(
            r#"{ "rules": { "no-let": ["error", { "ignorePattern": "(" }] } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPattern { .. }));

        let err = RulesConfig::from_json(r#"{ "extends": [] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));

        let err = RulesConfig::from_json(r#"{ "rules": { "no-class": "off", "nope": 0 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownRule(_)));
    }

    #[test]
    fn test_empty_config() {
        assert!(RulesConfig::from_json("{}").unwrap().is_empty());
    }
}

//! Functional OXC Linter
//!
//! Lint rules enforcing a functional programming style in JavaScript and
//! TypeScript, built on OXC. The rules follow eslint-plugin-functional.
//!
//! ## Usage
//!
//! ```rust
//! use functional_oxc::{lint_source, RulesConfig};
//!
//! let config = RulesConfig::from_json(r#"{ "rules": { "no-let": "error" } }"#).unwrap();
//! let result = lint_source("let count = 0;", Some("counter.ts"), &config).unwrap();
//! assert_eq!(result.diagnostics.len(), 1);
//! ```

pub use functional_linter::config::{ConfigError, RuleSeverity};
pub use functional_linter::fixer::{apply_fixes, apply_suggestion, FixResult};
pub use functional_linter::{Diagnostic, DiagnosticSeverity, Fix, LintResult, RulesConfig, Suggestion};

#[cfg(feature = "napi")]
use napi_derive::napi;

use oxc_allocator::Allocator;
use oxc_parser::Parser;
use oxc_span::SourceType;
use thiserror::Error;
use tracing::debug;

/// Error linting a source file
#[derive(Debug, Error)]
pub enum LintError {
    #[error("failed to parse source: {}", .0.join("; "))]
    Parse(Vec<String>),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Lint source code with the given rules.
///
/// The source type is derived from `path`, falling back to TSX.
pub fn lint_source(source: &str, path: Option<&str>, config: &RulesConfig) -> Result<LintResult, LintError> {
    let source_type = path.and_then(|path| SourceType::from_path(path).ok()).unwrap_or(SourceType::tsx());
    debug!(path = path.unwrap_or("<input>"), "linting source");

    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, source, source_type).parse();
    if !ret.errors.is_empty() {
        return Err(LintError::Parse(ret.errors.iter().map(ToString::to_string).collect()));
    }

    Ok(functional_linter::lint(&ret.program, source_type, config))
}

/// Lint source code, reading the rules from a JSON configuration string
pub fn lint_source_with_json(source: &str, path: Option<&str>, config_json: &str) -> Result<LintResult, LintError> {
    let config = RulesConfig::from_json(config_json)?;
    lint_source(source, path, &config)
}

/// A replacement exposed to JavaScript
#[cfg(feature = "napi")]
#[napi(object)]
pub struct JsFix {
    pub start: u32,
    pub end: u32,
    pub replacement: String,
}

/// A suggested edit exposed to JavaScript
#[cfg(feature = "napi")]
#[napi(object)]
pub struct JsSuggestion {
    pub message_id: String,
    pub message: String,
    pub fixes: Vec<JsFix>,
}

/// A diagnostic exposed to JavaScript
#[cfg(feature = "napi")]
#[napi(object)]
pub struct JsDiagnostic {
    /// Rule name, e.g. "no-let"
    pub rule: String,
    pub message_id: String,
    pub message: String,
    pub help: Option<String>,
    /// "error" or "warning"
    pub severity: String,
    pub start: u32,
    pub end: u32,
    pub fixes: Vec<JsFix>,
    pub suggestions: Vec<JsSuggestion>,
}

#[cfg(feature = "napi")]
fn js_fix(fix: &Fix) -> JsFix {
    JsFix { start: fix.start, end: fix.end, replacement: fix.replacement.clone() }
}

#[cfg(feature = "napi")]
impl From<&Diagnostic> for JsDiagnostic {
    fn from(diagnostic: &Diagnostic) -> Self {
        let severity = match diagnostic.severity {
            DiagnosticSeverity::Error => "error",
            DiagnosticSeverity::Warning => "warning",
        };
        JsDiagnostic {
            rule: diagnostic.rule.to_string(),
            message_id: diagnostic.message_id.to_string(),
            message: diagnostic.message.clone(),
            help: diagnostic.help.clone(),
            severity: severity.to_string(),
            start: diagnostic.start,
            end: diagnostic.end,
            fixes: diagnostic.fixes.iter().map(js_fix).collect(),
            suggestions: diagnostic
                .suggestions
                .iter()
                .map(|suggestion| JsSuggestion {
                    message_id: suggestion.message_id.to_string(),
                    message: suggestion.message.clone(),
                    fixes: suggestion.fixes.iter().map(js_fix).collect(),
                })
                .collect(),
        }
    }
}

/// Lint source code
///
/// Without `config_json` every rule runs with its default options.
#[cfg(feature = "napi")]
#[napi(js_name = "lintSource")]
pub fn lint_source_js(
    source: String,
    filename: Option<String>,
    config_json: Option<String>,
) -> napi::Result<Vec<JsDiagnostic>> {
    let config = match config_json.as_deref() {
        Some(json) => RulesConfig::from_json(json),
        None => Ok(RulesConfig::default()),
    }
    .map_err(|err| napi::Error::from_reason(err.to_string()))?;

    let result = lint_source(&source, filename.as_deref(), &config)
        .map_err(|err| napi::Error::from_reason(err.to_string()))?;
    Ok(result.diagnostics.iter().map(JsDiagnostic::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lint_source_basic() {
        let result = lint_source("let count = 0;", Some("counter.ts"), &RulesConfig::default()).unwrap();
        assert!(result.diagnostics.iter().any(|d| d.rule == "no-let"));
    }

    #[test]
    fn test_source_type_from_path() {
        let config = RulesConfig::from_json(r#"{ "rules": { "no-class": "error" } }"#).unwrap();
        let source = "class View { render() { return <div />; } }";
        assert_eq!(lint_source(source, Some("view.tsx"), &config).unwrap().diagnostics.len(), 1);
        assert_eq!(lint_source(source, None, &config).unwrap().diagnostics.len(), 1);
        let typed = "let total: number = 1;";
        assert!(matches!(lint_source(typed, Some("total.js"), &config), Err(LintError::Parse(_))));
    }

    #[test]
    fn test_parse_error() {
        let err = lint_source("let = ;", Some("broken.ts"), &RulesConfig::default()).unwrap_err();
        let LintError::Parse(messages) = &err else {
            panic!("expected parse error, got {err:?}");
        };
        assert!(!messages.is_empty());
        assert!(err.to_string().starts_with("failed to parse source"));
    }

    #[test]
    fn test_config_error() {
        let err = lint_source_with_json("let a = 1;", None, r#"{ "rules": { "no-such-rule": "error" } }"#).unwrap_err();
        assert!(matches!(err, LintError::Config(ConfigError::UnknownRule(_))));
    }
}

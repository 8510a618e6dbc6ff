//! Functional programming lint rules
//!
//! This crate provides lint rules that enforce a functional style in
//! TypeScript and JavaScript, modelled after eslint-plugin-functional.
//! Rules run over the node table built by `oxc_semantic`:
//! 1. Configure rules from code (`RulesConfig::none().with_rule(...)`) or
//!    from ESLint-style JSON (`RulesConfig::from_json`)
//! 2. Run them with `lint` over a parsed program
//! 3. Apply automatic fixes with `fixer::apply_fixes`

pub mod config;
pub mod fixer;
pub mod ignore;
pub mod rules;
pub mod runner;
pub mod utils;
mod context;
mod diagnostic;
mod rule;

pub use config::{ConfigError, RuleSeverity};
pub use context::LintContext;
pub use diagnostic::{Diagnostic, DiagnosticSeverity, Fix, Suggestion};
pub use rule::{CheckResult, Rule};
pub use rules::*;
pub use runner::{lint, lint_semantic, ConfiguredRule, LintResult, LintRunner, RulesConfig};

/// Rule category, following the plugin's presets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleCategory {
    /// Rules that forbid mutating data
    NoMutations,
    /// Rules that forbid classes and `this`
    NoObjectOrientation,
    /// Rules that forbid statements with side effects
    NoStatements,
    /// Rules that forbid throwing and catching
    NoExceptions,
    /// Rules about function parameters
    Currying,
    /// Rules about the shape of types
    Stylistic,
}

/// Rule metadata
pub trait RuleMeta {
    const NAME: &'static str;
    const CATEGORY: RuleCategory;
    /// URL to documentation
    fn docs_url() -> String {
        format!(
            "https://github.com/eslint-functional/eslint-plugin-functional/blob/main/docs/rules/{}.md",
            Self::NAME
        )
    }
}

//! functional/no-try-statement
//!
//! Disallow `try` statements with a `catch` or `finally` clause.

use oxc_ast::AstKind;
use oxc_semantic::AstNode;
use serde::Deserialize;

use super::ConfigurableRule;
use crate::diagnostic::Diagnostic;
use crate::{CheckResult, LintContext, Rule, RuleCategory, RuleMeta};

/// no-try-statement rule
#[derive(Debug, Clone, Default)]
pub struct NoTryStatement {
    allow_catch: bool,
    allow_finally: bool,
}

impl RuleMeta for NoTryStatement {
    const NAME: &'static str = "no-try-statement";
    const CATEGORY: RuleCategory = RuleCategory::NoExceptions;
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct NoTryStatementOptions {
    pub allow_catch: bool,
    pub allow_finally: bool,
}

impl ConfigurableRule for NoTryStatement {
    type Options = NoTryStatementOptions;

    fn from_options(options: Self::Options) -> Result<Self, common::PatternError> {
        Ok(Self::new()
            .with_allow_catch(options.allow_catch)
            .with_allow_finally(options.allow_finally))
    }
}

impl NoTryStatement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_allow_catch(mut self, allow: bool) -> Self {
        self.allow_catch = allow;
        self
    }

    pub fn with_allow_finally(mut self, allow: bool) -> Self {
        self.allow_finally = allow;
        self
    }
}

impl Rule for NoTryStatement {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn runs_on(&self, kind: AstKind<'_>) -> bool {
        matches!(kind, AstKind::TryStatement(_))
    }

    fn check<'a>(&self, node: &AstNode<'a>, _ctx: &LintContext<'a>) -> CheckResult {
        let AstKind::TryStatement(stmt) = node.kind() else {
            return CheckResult::none();
        };
        // One report per statement; `catch` takes precedence
        let diagnostic = if stmt.handler.is_some() && !self.allow_catch {
            Diagnostic::new(
                Self::NAME,
                "catch",
                stmt.span,
                "Unexpected try-catch, this pattern is not functional.",
            )
        } else if stmt.finalizer.is_some() && !self.allow_finally {
            Diagnostic::new(
                Self::NAME,
                "finally",
                stmt.span,
                "Unexpected try-finally, this pattern is not functional.",
            )
        } else {
            return CheckResult::none();
        };
        CheckResult::report(diagnostic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_lint;

    fn message_ids(rule: NoTryStatement, source: &str) -> Vec<&'static str> {
        test_lint(rule, source).into_iter().map(|d| d.message_id).collect()
    }

    #[test]
    fn test_rule_name() {
        assert_eq!(NoTryStatement::NAME, "no-try-statement");
    }

    #[test]
    fn test_try_statements() {
        let source = "try {} catch {} try {} finally {} try {} catch (e) {} finally {}";
        assert_eq!(message_ids(NoTryStatement::new(), source), ["catch", "finally", "catch"]);
        assert_eq!(
            message_ids(NoTryStatement::new().with_allow_catch(true), source),
            ["finally", "finally"]
        );
        assert!(message_ids(
            NoTryStatement::new().with_allow_catch(true).with_allow_finally(true),
            source
        )
        .is_empty());
    }
}

//! functional/no-throw-statement
//!
//! Disallow `throw`; return errors as values instead.

use oxc_ast::AstKind;
use oxc_semantic::AstNode;
use serde::Deserialize;

use super::ConfigurableRule;
use crate::diagnostic::Diagnostic;
use crate::utils::is_in_async_function;
use crate::{CheckResult, LintContext, Rule, RuleCategory, RuleMeta};

/// no-throw-statement rule
#[derive(Debug, Clone, Default)]
pub struct NoThrowStatement {
    /// Allow `throw` inside async functions, where it rejects the returned promise
    allow_in_async_functions: bool,
}

impl RuleMeta for NoThrowStatement {
    const NAME: &'static str = "no-throw-statement";
    const CATEGORY: RuleCategory = RuleCategory::NoExceptions;
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct NoThrowStatementOptions {
    pub allow_in_async_functions: bool,
}

impl ConfigurableRule for NoThrowStatement {
    type Options = NoThrowStatementOptions;

    fn from_options(options: Self::Options) -> Result<Self, common::PatternError> {
        Ok(Self::new().with_allow_in_async_functions(options.allow_in_async_functions))
    }
}

impl NoThrowStatement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_allow_in_async_functions(mut self, allow: bool) -> Self {
        self.allow_in_async_functions = allow;
        self
    }
}

impl Rule for NoThrowStatement {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn runs_on(&self, kind: AstKind<'_>) -> bool {
        matches!(kind, AstKind::ThrowStatement(_))
    }

    fn check<'a>(&self, node: &AstNode<'a>, ctx: &LintContext<'a>) -> CheckResult {
        let AstKind::ThrowStatement(stmt) = node.kind() else {
            return CheckResult::none();
        };
        if self.allow_in_async_functions && is_in_async_function(ctx, node.id()) {
            return CheckResult::none();
        }
        CheckResult::report(Diagnostic::new(
            Self::NAME,
            "generic",
            stmt.span,
            "Unexpected throw, throwing exceptions is not functional.",
        ))
    }
}

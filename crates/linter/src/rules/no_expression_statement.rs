//! functional/no-expression-statement
//!
//! Disallow expression statements: an expression whose value is discarded
//! is only there for its side effects.

use common::{IgnoreOptions, OneOrMany, PatternError};
use oxc_ast::ast::{Expression, UnaryOperator};
use oxc_ast::AstKind;
use oxc_semantic::AstNode;
use serde::Deserialize;

use super::ConfigurableRule;
use crate::diagnostic::Diagnostic;
use crate::utils::is_concise_arrow_body;
use crate::{CheckResult, LintContext, Rule, RuleCategory, RuleMeta};

/// no-expression-statement rule
#[derive(Debug, Clone, Default)]
pub struct NoExpressionStatement {
    /// Allow statements that explicitly discard a value with `void`
    ignore_void: bool,
    ignore: IgnoreOptions,
}

impl RuleMeta for NoExpressionStatement {
    const NAME: &'static str = "no-expression-statement";
    const CATEGORY: RuleCategory = RuleCategory::NoStatements;
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct NoExpressionStatementOptions {
    pub ignore_pattern: OneOrMany,
    pub ignore_prefix: OneOrMany,
    pub ignore_suffix: OneOrMany,
    pub ignore_void: bool,
}

impl ConfigurableRule for NoExpressionStatement {
    type Options = NoExpressionStatementOptions;

    fn from_options(options: Self::Options) -> Result<Self, PatternError> {
        Ok(Self::new()
            .with_ignore_pattern(options.ignore_pattern.as_slice())?
            .with_ignore_prefix(options.ignore_prefix.as_slice())
            .with_ignore_suffix(options.ignore_suffix.as_slice())
            .with_ignore_void(options.ignore_void))
    }
}

impl NoExpressionStatement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ignore_pattern(mut self, patterns: &[String]) -> Result<Self, PatternError> {
        self.ignore = self.ignore.with_ignore_pattern(patterns)?;
        Ok(self)
    }

    pub fn with_ignore_prefix(mut self, prefixes: &[String]) -> Self {
        self.ignore = self.ignore.with_ignore_prefix(prefixes);
        self
    }

    pub fn with_ignore_suffix(mut self, suffixes: &[String]) -> Self {
        self.ignore = self.ignore.with_ignore_suffix(suffixes);
        self
    }

    pub fn with_ignore_void(mut self, ignore: bool) -> Self {
        self.ignore_void = ignore;
        self
    }
}

impl Rule for NoExpressionStatement {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn runs_on(&self, kind: AstKind<'_>) -> bool {
        matches!(kind, AstKind::ExpressionStatement(_))
    }

    fn ignore_options(&self) -> Option<&IgnoreOptions> {
        Some(&self.ignore)
    }

    fn check<'a>(&self, node: &AstNode<'a>, ctx: &LintContext<'a>) -> CheckResult {
        let AstKind::ExpressionStatement(stmt) = node.kind() else {
            return CheckResult::none();
        };
        // A concise arrow body is a returned value, not a statement
        if is_concise_arrow_body(ctx, node.id()) {
            return CheckResult::none();
        }
        if self.ignore_void
            && matches!(
                stmt.expression.without_parentheses(),
                Expression::UnaryExpression(unary) if unary.operator == UnaryOperator::Void
            )
        {
            return CheckResult::none();
        }
        CheckResult::report(Diagnostic::new(
            Self::NAME,
            "generic",
            stmt.span,
            "Using expressions to cause side-effects not allowed.",
        ))
    }
}

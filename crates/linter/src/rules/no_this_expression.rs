//! functional/no-this-expression
//!
//! Disallow `this`.

use oxc_ast::AstKind;
use oxc_semantic::AstNode;

use super::{ConfigurableRule, NoOptions};
use crate::diagnostic::Diagnostic;
use crate::{CheckResult, LintContext, Rule, RuleCategory, RuleMeta};

/// no-this-expression rule
#[derive(Debug, Clone, Default)]
pub struct NoThisExpression;

impl RuleMeta for NoThisExpression {
    const NAME: &'static str = "no-this-expression";
    const CATEGORY: RuleCategory = RuleCategory::NoObjectOrientation;
}

impl ConfigurableRule for NoThisExpression {
    type Options = NoOptions;

    fn from_options(_options: NoOptions) -> Result<Self, common::PatternError> {
        Ok(Self::new())
    }
}

impl NoThisExpression {
    pub fn new() -> Self {
        Self
    }
}

impl Rule for NoThisExpression {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn runs_on(&self, kind: AstKind<'_>) -> bool {
        matches!(kind, AstKind::ThisExpression(_))
    }

    fn check<'a>(&self, node: &AstNode<'a>, _ctx: &LintContext<'a>) -> CheckResult {
        let AstKind::ThisExpression(this) = node.kind() else {
            return CheckResult::none();
        };
        CheckResult::report(Diagnostic::new(
            Self::NAME,
            "generic",
            this.span,
            "Unexpected this, use functions not classes.",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_lint;

    #[test]
    fn test_rule_name() {
        assert_eq!(NoThisExpression::NAME, "no-this-expression");
    }

    #[test]
    fn test_this() {
        let diagnostics = test_lint(NoThisExpression::new(), "const f = function () { return this.x; };");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].end - diagnostics[0].start, 4);
    }
}

//! functional/no-promise-reject
//!
//! Disallow `Promise.reject(...)`; resolve with an error value instead.

use common::is_promise_reject_call;
use oxc_ast::AstKind;
use oxc_semantic::AstNode;

use super::{ConfigurableRule, NoOptions};
use crate::diagnostic::Diagnostic;
use crate::{CheckResult, LintContext, Rule, RuleCategory, RuleMeta};

/// no-promise-reject rule
#[derive(Debug, Clone, Default)]
pub struct NoPromiseReject;

impl RuleMeta for NoPromiseReject {
    const NAME: &'static str = "no-promise-reject";
    const CATEGORY: RuleCategory = RuleCategory::NoExceptions;
}

impl ConfigurableRule for NoPromiseReject {
    type Options = NoOptions;

    fn from_options(_options: NoOptions) -> Result<Self, common::PatternError> {
        Ok(Self::new())
    }
}

impl NoPromiseReject {
    pub fn new() -> Self {
        Self
    }
}

impl Rule for NoPromiseReject {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn runs_on(&self, kind: AstKind<'_>) -> bool {
        matches!(kind, AstKind::CallExpression(_))
    }

    fn check<'a>(&self, node: &AstNode<'a>, _ctx: &LintContext<'a>) -> CheckResult {
        match node.kind() {
            AstKind::CallExpression(call) if is_promise_reject_call(call) => {
                CheckResult::report(Diagnostic::new(
                    Self::NAME,
                    "generic",
                    call.span,
                    "Unexpected reject, return an error instead.",
                ))
            }
            _ => CheckResult::none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_lint;

    #[test]
    fn test_rule_name() {
        assert_eq!(NoPromiseReject::NAME, "no-promise-reject");
    }

    #[test]
    fn test_reject() {
        let source = "const a = Promise.reject(new Error()); const b = Promise.resolve(1);";
        assert_eq!(test_lint(NoPromiseReject::new(), source).len(), 1);
    }
}

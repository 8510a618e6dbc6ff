//! functional/no-class
//!
//! Disallow class declarations and class expressions.

use oxc_ast::AstKind;
use oxc_semantic::AstNode;

use super::{ConfigurableRule, NoOptions};
use crate::diagnostic::Diagnostic;
use crate::{CheckResult, LintContext, Rule, RuleCategory, RuleMeta};

/// no-class rule
#[derive(Debug, Clone, Default)]
pub struct NoClass;

impl RuleMeta for NoClass {
    const NAME: &'static str = "no-class";
    const CATEGORY: RuleCategory = RuleCategory::NoObjectOrientation;
}

impl ConfigurableRule for NoClass {
    type Options = NoOptions;

    fn from_options(_options: NoOptions) -> Result<Self, common::PatternError> {
        Ok(Self::new())
    }
}

impl NoClass {
    pub fn new() -> Self {
        Self
    }
}

impl Rule for NoClass {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn runs_on(&self, kind: AstKind<'_>) -> bool {
        matches!(kind, AstKind::Class(_))
    }

    fn check<'a>(&self, node: &AstNode<'a>, _ctx: &LintContext<'a>) -> CheckResult {
        let AstKind::Class(class) = node.kind() else {
            return CheckResult::none();
        };
        CheckResult::report(Diagnostic::new(
            Self::NAME,
            "generic",
            class.span,
            "Unexpected class, use functions not classes.",
        ))
    }
}

//! functional/no-loop-statement
//!
//! Disallow `for`, `for-in`, `for-of`, `while` and `do-while` loops.

use oxc_ast::AstKind;
use oxc_semantic::AstNode;
use oxc_span::GetSpan;

use super::{ConfigurableRule, NoOptions};
use crate::diagnostic::Diagnostic;
use crate::{CheckResult, LintContext, Rule, RuleCategory, RuleMeta};

/// no-loop-statement rule
#[derive(Debug, Clone, Default)]
pub struct NoLoopStatement;

impl RuleMeta for NoLoopStatement {
    const NAME: &'static str = "no-loop-statement";
    const CATEGORY: RuleCategory = RuleCategory::NoStatements;
}

impl ConfigurableRule for NoLoopStatement {
    type Options = NoOptions;

    fn from_options(_options: NoOptions) -> Result<Self, common::PatternError> {
        Ok(Self::new())
    }
}

impl NoLoopStatement {
    pub fn new() -> Self {
        Self
    }
}

impl Rule for NoLoopStatement {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn runs_on(&self, kind: AstKind<'_>) -> bool {
        matches!(
            kind,
            AstKind::ForStatement(_)
                | AstKind::ForInStatement(_)
                | AstKind::ForOfStatement(_)
                | AstKind::WhileStatement(_)
                | AstKind::DoWhileStatement(_)
        )
    }

    fn check<'a>(&self, node: &AstNode<'a>, _ctx: &LintContext<'a>) -> CheckResult {
        CheckResult::report(Diagnostic::new(
            Self::NAME,
            "generic",
            node.span(),
            "Unexpected loop, use map or reduce instead.",
        ))
    }
}

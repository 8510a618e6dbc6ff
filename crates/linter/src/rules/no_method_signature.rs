//! functional/no-method-signature
//!
//! Prefer property signatures with function types over method signatures,
//! since only the former can be marked `readonly`.

use oxc_ast::AstKind;
use oxc_semantic::AstNode;
use serde::Deserialize;

use super::ConfigurableRule;
use crate::diagnostic::Diagnostic;
use crate::utils::is_in_readonly_type;
use crate::{CheckResult, LintContext, Rule, RuleCategory, RuleMeta};

/// no-method-signature rule
#[derive(Debug, Clone)]
pub struct NoMethodSignature {
    /// Don't report method signatures inside `Readonly<...>`
    ignore_if_readonly: bool,
}

impl Default for NoMethodSignature {
    fn default() -> Self {
        Self { ignore_if_readonly: true }
    }
}

impl RuleMeta for NoMethodSignature {
    const NAME: &'static str = "no-method-signature";
    const CATEGORY: RuleCategory = RuleCategory::NoMutations;
}

#[derive(Debug, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct NoMethodSignatureOptions {
    pub ignore_if_readonly: bool,
}

impl Default for NoMethodSignatureOptions {
    fn default() -> Self {
        Self { ignore_if_readonly: true }
    }
}

impl ConfigurableRule for NoMethodSignature {
    type Options = NoMethodSignatureOptions;

    fn from_options(options: Self::Options) -> Result<Self, common::PatternError> {
        Ok(Self::new().with_ignore_if_readonly(options.ignore_if_readonly))
    }
}

impl NoMethodSignature {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ignore_if_readonly(mut self, ignore: bool) -> Self {
        self.ignore_if_readonly = ignore;
        self
    }
}

impl Rule for NoMethodSignature {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn runs_on(&self, kind: AstKind<'_>) -> bool {
        matches!(kind, AstKind::TSMethodSignature(_))
    }

    fn check<'a>(&self, node: &AstNode<'a>, ctx: &LintContext<'a>) -> CheckResult {
        let AstKind::TSMethodSignature(signature) = node.kind() else {
            return CheckResult::none();
        };
        if self.ignore_if_readonly && is_in_readonly_type(ctx, node.id()) {
            return CheckResult::none();
        }
        CheckResult::report(
            Diagnostic::new(
                Self::NAME,
                "generic",
                signature.span,
                "Method signature is mutable, use property signature with readonly modifier instead.",
            )
            .with_help("Write `readonly name: (args) => Result` instead."),
        )
    }
}

//! functional/no-let
//!
//! Disallow mutable variables declared with `let`.

use common::{IgnoreOptions, OneOrMany, PatternError};
use oxc_ast::ast::VariableDeclarationKind;
use oxc_ast::AstKind;
use oxc_semantic::AstNode;
use oxc_span::Span;
use serde::Deserialize;

use super::ConfigurableRule;
use crate::diagnostic::{Diagnostic, Fix, Suggestion};
use crate::utils::is_loop_declaration;
use crate::{CheckResult, LintContext, Rule, RuleCategory, RuleMeta};

/// no-let rule
#[derive(Debug, Clone, Default)]
pub struct NoLet {
    /// Allow `let` in the head of `for` loops
    allow_in_for_loop_init: bool,
    ignore: IgnoreOptions,
}

impl RuleMeta for NoLet {
    const NAME: &'static str = "no-let";
    const CATEGORY: RuleCategory = RuleCategory::NoMutations;
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct NoLetOptions {
    pub allow_in_for_loop_init: bool,
    pub allow_local_mutation: bool,
    pub ignore_pattern: OneOrMany,
}

impl ConfigurableRule for NoLet {
    type Options = NoLetOptions;

    fn from_options(options: Self::Options) -> Result<Self, PatternError> {
        Ok(Self::new()
            .with_allow_in_for_loop_init(options.allow_in_for_loop_init)
            .with_allow_local_mutation(options.allow_local_mutation)
            .with_ignore_pattern(options.ignore_pattern.as_slice())?)
    }
}

impl NoLet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_allow_in_for_loop_init(mut self, allow: bool) -> Self {
        self.allow_in_for_loop_init = allow;
        self
    }

    pub fn with_allow_local_mutation(mut self, allow: bool) -> Self {
        self.ignore = self.ignore.with_allow_local_mutation(allow);
        self
    }

    pub fn with_ignore_pattern(mut self, patterns: &[String]) -> Result<Self, PatternError> {
        self.ignore = self.ignore.with_ignore_pattern(patterns)?;
        Ok(self)
    }
}

impl Rule for NoLet {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn runs_on(&self, kind: AstKind<'_>) -> bool {
        matches!(kind, AstKind::VariableDeclaration(decl) if decl.kind == VariableDeclarationKind::Let)
    }

    fn ignore_options(&self) -> Option<&IgnoreOptions> {
        Some(&self.ignore)
    }

    fn check<'a>(&self, node: &AstNode<'a>, ctx: &LintContext<'a>) -> CheckResult {
        let AstKind::VariableDeclaration(decl) = node.kind() else {
            return CheckResult::none();
        };

        let in_loop_head = is_loop_declaration(ctx, node.id());
        if in_loop_head && self.allow_in_for_loop_init {
            return CheckResult::none();
        }

        let mut diagnostic = Diagnostic::new(
            Self::NAME,
            "generic",
            decl.span,
            "Unexpected let, use const instead.",
        );

        // `const` needs an initializer, and a classic `for` head usually updates its variable
        let can_be_const = match ctx.parent_kind(node.id()) {
            AstKind::ForInStatement(_) | AstKind::ForOfStatement(_) => true,
            _ => !in_loop_head && decl.declarations.iter().all(|d| d.init.is_some()),
        };
        if can_be_const {
            if let Some(offset) = ctx.span_text(decl.span).find("let") {
                let start = decl.span.start + offset as u32;
                diagnostic = diagnostic.with_suggestion(
                    Suggestion::new("replaceWithConst", "Replace `let` with `const`.")
                        .with_fix(Fix::new(Span::new(start, start + 3), "const")),
                );
            }
        }

        CheckResult::report(diagnostic)
    }
}

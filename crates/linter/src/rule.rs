//! The rule interface shared by every check

use std::fmt;

use common::IgnoreOptions;
use oxc_ast::AstKind;
use oxc_semantic::AstNode;

use crate::{Diagnostic, LintContext};

/// Outcome of checking one node
#[derive(Debug, Default)]
pub struct CheckResult {
    pub diagnostics: Vec<Diagnostic>,
    /// Stop offering this node's descendants to the same rule
    pub skip_children: bool,
}

impl CheckResult {
    /// Nothing to report
    pub fn none() -> Self {
        Self::default()
    }

    pub fn report(diagnostic: Diagnostic) -> Self {
        Self { diagnostics: vec![diagnostic], skip_children: false }
    }

    pub fn skip_children(mut self) -> Self {
        self.skip_children = true;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

impl From<Vec<Diagnostic>> for CheckResult {
    fn from(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics, skip_children: false }
    }
}

impl From<Option<Diagnostic>> for CheckResult {
    fn from(diagnostic: Option<Diagnostic>) -> Self {
        diagnostic.map_or_else(Self::none, Self::report)
    }
}

/// A lint rule as seen by the runner
pub trait Rule: fmt::Debug + Send + Sync {
    /// Kebab-case rule name
    fn name(&self) -> &'static str;

    /// Whether the rule inspects nodes of this kind
    fn runs_on(&self, kind: AstKind<'_>) -> bool;

    /// Ignore options consulted before `check`
    fn ignore_options(&self) -> Option<&IgnoreOptions> {
        None
    }

    /// Whether an ignored node also hides its descendants from this rule
    fn skip_ignored_subtree(&self) -> bool {
        false
    }

    fn check<'a>(&self, node: &AstNode<'a>, ctx: &LintContext<'a>) -> CheckResult;
}

//! functional/no-mixed-type
//!
//! Disallow types that mix data members with callable members.

use oxc_ast::ast::{TSSignature, TSType};
use oxc_ast::AstKind;
use oxc_semantic::AstNode;
use serde::Deserialize;

use super::ConfigurableRule;
use crate::diagnostic::Diagnostic;
use crate::{CheckResult, LintContext, Rule, RuleCategory, RuleMeta};

/// no-mixed-type rule
#[derive(Debug, Clone)]
pub struct NoMixedType {
    check_interfaces: bool,
    check_type_literals: bool,
}

impl Default for NoMixedType {
    fn default() -> Self {
        Self { check_interfaces: true, check_type_literals: true }
    }
}

impl RuleMeta for NoMixedType {
    const NAME: &'static str = "no-mixed-type";
    const CATEGORY: RuleCategory = RuleCategory::NoObjectOrientation;
}

#[derive(Debug, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct NoMixedTypeOptions {
    pub check_interfaces: bool,
    pub check_type_literals: bool,
}

impl Default for NoMixedTypeOptions {
    fn default() -> Self {
        Self { check_interfaces: true, check_type_literals: true }
    }
}

impl ConfigurableRule for NoMixedType {
    type Options = NoMixedTypeOptions;

    fn from_options(options: Self::Options) -> Result<Self, common::PatternError> {
        Ok(Self::new()
            .with_check_interfaces(options.check_interfaces)
            .with_check_type_literals(options.check_type_literals))
    }
}

impl NoMixedType {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_check_interfaces(mut self, check: bool) -> Self {
        self.check_interfaces = check;
        self
    }

    pub fn with_check_type_literals(mut self, check: bool) -> Self {
        self.check_type_literals = check;
        self
    }
}

/// Check if the members mix callable and data members
fn is_mixed(members: &[TSSignature<'_>]) -> bool {
    let mut callable = false;
    let mut data = false;
    for member in members {
        match member {
            TSSignature::TSMethodSignature(_) => callable = true,
            TSSignature::TSPropertySignature(prop) => {
                let is_function = prop
                    .type_annotation
                    .as_ref()
                    .is_some_and(|annotation| {
                        matches!(annotation.type_annotation, TSType::TSFunctionType(_))
                    });
                if is_function {
                    callable = true;
                } else {
                    data = true;
                }
            }
            _ => {}
        }
    }
    callable && data
}

impl Rule for NoMixedType {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn runs_on(&self, kind: AstKind<'_>) -> bool {
        match kind {
            AstKind::TSInterfaceDeclaration(_) => self.check_interfaces,
            AstKind::TSTypeAliasDeclaration(_) => self.check_type_literals,
            _ => false,
        }
    }

    fn check<'a>(&self, node: &AstNode<'a>, _ctx: &LintContext<'a>) -> CheckResult {
        let (span, mixed) = match node.kind() {
            AstKind::TSInterfaceDeclaration(decl) => (decl.span, is_mixed(&decl.body.body)),
            AstKind::TSTypeAliasDeclaration(decl) => match &decl.type_annotation {
                TSType::TSTypeLiteral(literal) => (decl.span, is_mixed(&literal.members)),
                _ => return CheckResult::none(),
            },
            _ => return CheckResult::none(),
        };
        if !mixed {
            return CheckResult::none();
        }
        CheckResult::report(Diagnostic::new(
            Self::NAME,
            "generic",
            span,
            "Only the same kind of members allowed in types.",
        ))
    }
}

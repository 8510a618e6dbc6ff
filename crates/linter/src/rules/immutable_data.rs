//! functional/immutable-data
//!
//! Disallow mutating existing objects and arrays: assignments to members,
//! `delete`, `++`/`--` on members, in-place array methods and
//! `Object.assign`-style functions called on an existing object.

use common::{
    array_mutator_method, callee_member, is_member_target, is_member_update_target,
    is_new_array_expression, is_object_mutator_call, IgnoreClass, IgnoreOptions, OneOrMany,
    PatternError,
};
use oxc_ast::ast::UnaryOperator;
use oxc_ast::AstKind;
use oxc_semantic::AstNode;
use serde::Deserialize;

use super::ConfigurableRule;
use crate::diagnostic::Diagnostic;
use crate::{CheckResult, LintContext, Rule, RuleCategory, RuleMeta};

const GENERIC: &str = "Modifying an existing object/array is not allowed.";
const OBJECT: &str = "Modifying properties of existing object not allowed.";
const ARRAY: &str = "Modifying an array is not allowed.";

/// immutable-data rule
#[derive(Debug, Clone)]
pub struct ImmutableData {
    /// Allow mutating arrays that were created in the same expression (`[...xs].sort()`)
    ignore_immediate_mutation: bool,
    ignore: IgnoreOptions,
}

impl Default for ImmutableData {
    fn default() -> Self {
        Self { ignore_immediate_mutation: true, ignore: IgnoreOptions::default() }
    }
}

impl RuleMeta for ImmutableData {
    const NAME: &'static str = "immutable-data";
    const CATEGORY: RuleCategory = RuleCategory::NoMutations;
}

#[derive(Debug, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ImmutableDataOptions {
    pub ignore_pattern: OneOrMany,
    pub ignore_accessor_pattern: OneOrMany,
    pub ignore_class: IgnoreClass,
    pub ignore_immediate_mutation: bool,
    /// Accepted for compatibility; types are always assumed from syntax
    pub assume_types: serde_json::Value,
}

impl Default for ImmutableDataOptions {
    fn default() -> Self {
        Self {
            ignore_pattern: OneOrMany::default(),
            ignore_accessor_pattern: OneOrMany::default(),
            ignore_class: IgnoreClass::Off,
            ignore_immediate_mutation: true,
            assume_types: serde_json::Value::Bool(true),
        }
    }
}

impl ConfigurableRule for ImmutableData {
    type Options = ImmutableDataOptions;

    fn from_options(options: Self::Options) -> Result<Self, PatternError> {
        Ok(Self::new()
            .with_ignore_pattern(options.ignore_pattern.as_slice())?
            .with_ignore_accessor_pattern(options.ignore_accessor_pattern.as_slice())?
            .with_ignore_class(options.ignore_class)
            .with_ignore_immediate_mutation(options.ignore_immediate_mutation))
    }
}

impl ImmutableData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ignore_pattern(mut self, patterns: &[String]) -> Result<Self, PatternError> {
        self.ignore = self.ignore.with_ignore_pattern(patterns)?;
        Ok(self)
    }

    pub fn with_ignore_accessor_pattern(mut self, patterns: &[String]) -> Result<Self, PatternError> {
        self.ignore = self.ignore.with_ignore_accessor_pattern(patterns)?;
        Ok(self)
    }

    pub fn with_ignore_class(mut self, ignore_class: IgnoreClass) -> Self {
        self.ignore = self.ignore.with_ignore_class(ignore_class);
        self
    }

    pub fn with_ignore_immediate_mutation(mut self, ignore: bool) -> Self {
        self.ignore_immediate_mutation = ignore;
        self
    }
}

impl Rule for ImmutableData {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn runs_on(&self, kind: AstKind<'_>) -> bool {
        matches!(
            kind,
            AstKind::AssignmentExpression(_)
                | AstKind::UnaryExpression(_)
                | AstKind::UpdateExpression(_)
                | AstKind::CallExpression(_)
        )
    }

    fn ignore_options(&self) -> Option<&IgnoreOptions> {
        Some(&self.ignore)
    }

    fn check<'a>(&self, node: &AstNode<'a>, _ctx: &LintContext<'a>) -> CheckResult {
        match node.kind() {
            AstKind::AssignmentExpression(assign) if is_member_target(&assign.left) => {
                CheckResult::report(Diagnostic::new(Self::NAME, "generic", assign.span, GENERIC))
            }
            AstKind::UnaryExpression(unary)
                if unary.operator == UnaryOperator::Delete
                    && unary.argument.get_member_expr().is_some() =>
            {
                CheckResult::report(Diagnostic::new(Self::NAME, "generic", unary.span, GENERIC))
            }
            AstKind::UpdateExpression(update) if is_member_update_target(&update.argument) => {
                CheckResult::report(Diagnostic::new(Self::NAME, "generic", update.span, GENERIC))
            }
            AstKind::CallExpression(call) => {
                if array_mutator_method(call).is_some() {
                    let fresh = self.ignore_immediate_mutation
                        && callee_member(call)
                            .is_some_and(|member| is_new_array_expression(member.object()));
                    if fresh {
                        return CheckResult::none();
                    }
                    return CheckResult::report(Diagnostic::new(Self::NAME, "array", call.span, ARRAY));
                }
                if is_object_mutator_call(call) {
                    return CheckResult::report(Diagnostic::new(Self::NAME, "object", call.span, OBJECT));
                }
                CheckResult::none()
            }
            _ => CheckResult::none(),
        }
    }
}

//! functional/functional-parameters
//!
//! Enforce functional parameters: no rest parameters, no `arguments`, and
//! optionally a fixed parameter count so functions can be curried.

use common::{IgnoreOptions, OneOrMany, PatternError};
use oxc_ast::ast::{FormalParameters, MethodDefinitionKind, PropertyKind};
use oxc_ast::AstKind;
use oxc_semantic::AstNode;
use oxc_span::Span;
use serde::Deserialize;

use super::ConfigurableRule;
use crate::diagnostic::Diagnostic;
use crate::utils::is_iife;
use crate::{CheckResult, LintContext, Rule, RuleCategory, RuleMeta};

/// Required number of parameters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterCount {
    #[default]
    AtLeastOne,
    ExactlyOne,
}

/// Compiled `enforceParameterCount`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnforceParameterCount {
    pub count: ParameterCount,
    /// Skip immediately invoked function expressions
    pub ignore_iife: bool,
}

impl Default for EnforceParameterCount {
    fn default() -> Self {
        Self { count: ParameterCount::AtLeastOne, ignore_iife: true }
    }
}

/// `enforceParameterCount` as written in configuration:
/// `false`, `"atLeastOne"`, `"exactlyOne"` or `{ count, ignoreIIFE }`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum EnforceParameterCountOption {
    Enabled(bool),
    Count(ParameterCount),
    Detailed(DetailedParameterCount),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DetailedParameterCount {
    #[serde(default)]
    pub count: ParameterCount,
    #[serde(default = "default_true", rename = "ignoreIIFE")]
    pub ignore_iife: bool,
}

fn default_true() -> bool {
    true
}

impl Default for EnforceParameterCountOption {
    fn default() -> Self {
        EnforceParameterCountOption::Enabled(true)
    }
}

impl EnforceParameterCountOption {
    pub fn resolve(self) -> Option<EnforceParameterCount> {
        match self {
            EnforceParameterCountOption::Enabled(false) => None,
            EnforceParameterCountOption::Enabled(true) => Some(EnforceParameterCount::default()),
            EnforceParameterCountOption::Count(count) => {
                Some(EnforceParameterCount { count, ..EnforceParameterCount::default() })
            }
            EnforceParameterCountOption::Detailed(detailed) => Some(EnforceParameterCount {
                count: detailed.count,
                ignore_iife: detailed.ignore_iife,
            }),
        }
    }
}

/// functional-parameters rule
#[derive(Debug, Clone)]
pub struct FunctionalParameters {
    allow_rest_parameter: bool,
    allow_arguments_keyword: bool,
    enforce_parameter_count: Option<EnforceParameterCount>,
    ignore: IgnoreOptions,
}

impl Default for FunctionalParameters {
    fn default() -> Self {
        Self {
            allow_rest_parameter: false,
            allow_arguments_keyword: false,
            enforce_parameter_count: Some(EnforceParameterCount::default()),
            ignore: IgnoreOptions::default(),
        }
    }
}

impl RuleMeta for FunctionalParameters {
    const NAME: &'static str = "functional-parameters";
    const CATEGORY: RuleCategory = RuleCategory::Currying;
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct FunctionalParametersOptions {
    pub allow_rest_parameter: bool,
    pub allow_arguments_keyword: bool,
    pub enforce_parameter_count: EnforceParameterCountOption,
    pub ignore_pattern: OneOrMany,
}

impl ConfigurableRule for FunctionalParameters {
    type Options = FunctionalParametersOptions;

    fn from_options(options: Self::Options) -> Result<Self, PatternError> {
        Ok(Self::new()
            .with_allow_rest_parameter(options.allow_rest_parameter)
            .with_allow_arguments_keyword(options.allow_arguments_keyword)
            .with_enforce_parameter_count(options.enforce_parameter_count.resolve())
            .with_ignore_pattern(options.ignore_pattern.as_slice())?)
    }
}

impl FunctionalParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_allow_rest_parameter(mut self, allow: bool) -> Self {
        self.allow_rest_parameter = allow;
        self
    }

    pub fn with_allow_arguments_keyword(mut self, allow: bool) -> Self {
        self.allow_arguments_keyword = allow;
        self
    }

    pub fn with_enforce_parameter_count(mut self, enforce: Option<EnforceParameterCount>) -> Self {
        self.enforce_parameter_count = enforce;
        self
    }

    pub fn with_ignore_pattern(mut self, patterns: &[String]) -> Result<Self, PatternError> {
        self.ignore = self.ignore.with_ignore_pattern(patterns)?;
        Ok(self)
    }

    fn check_parameters(
        &self,
        node: &AstNode<'_>,
        ctx: &LintContext<'_>,
        span: Span,
        params: &FormalParameters<'_>,
    ) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        if let Some(rest) = &params.rest {
            if !self.allow_rest_parameter {
                diagnostics.push(Diagnostic::new(
                    Self::NAME,
                    "restParam",
                    rest.span,
                    "Unexpected rest parameter. Use a regular parameter of type array instead.",
                ));
            }
        }

        let Some(enforce) = self.enforce_parameter_count else {
            return diagnostics;
        };
        if is_accessor(ctx.parent_kind(node.id())) || (enforce.ignore_iife && is_iife(ctx, node.id(), span)) {
            return diagnostics;
        }

        let count = params.items.len() + usize::from(params.rest.is_some());
        match enforce.count {
            ParameterCount::AtLeastOne if count == 0 => diagnostics.push(Diagnostic::new(
                Self::NAME,
                "paramCountAtLeastOne",
                span,
                "Functions must have at least one parameter.",
            )),
            ParameterCount::ExactlyOne if count != 1 => diagnostics.push(Diagnostic::new(
                Self::NAME,
                "paramCountExactlyOne",
                span,
                "Functions must have exactly one parameter.",
            )),
            _ => {}
        }
        diagnostics
    }
}

/// Getters and setters have a fixed arity
fn is_accessor(parent: AstKind<'_>) -> bool {
    match parent {
        AstKind::MethodDefinition(method) => {
            matches!(method.kind, MethodDefinitionKind::Get | MethodDefinitionKind::Set)
        }
        AstKind::ObjectProperty(prop) => matches!(prop.kind, PropertyKind::Get | PropertyKind::Set),
        _ => false,
    }
}

impl Rule for FunctionalParameters {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn runs_on(&self, kind: AstKind<'_>) -> bool {
        match kind {
            AstKind::Function(_) | AstKind::ArrowFunctionExpression(_) => true,
            AstKind::IdentifierReference(ident) => {
                !self.allow_arguments_keyword && ident.name == "arguments"
            }
            _ => false,
        }
    }

    fn ignore_options(&self) -> Option<&IgnoreOptions> {
        Some(&self.ignore)
    }

    fn check<'a>(&self, node: &AstNode<'a>, ctx: &LintContext<'a>) -> CheckResult {
        match node.kind() {
            // Overload signatures and `declare function` have no body
            AstKind::Function(func) if func.body.is_some() => {
                CheckResult::from(self.check_parameters(node, ctx, func.span, &func.params))
            }
            AstKind::ArrowFunctionExpression(arrow) => {
                CheckResult::from(self.check_parameters(node, ctx, arrow.span, &arrow.params))
            }
            AstKind::IdentifierReference(ident) => CheckResult::report(Diagnostic::new(
                Self::NAME,
                "arguments",
                ident.span,
                "Unexpected use of `arguments`. Use regular function arguments instead.",
            )),
            _ => CheckResult::none(),
        }
    }
}

//! functional/prefer-readonly-type
//!
//! Prefer readonly arrays, tuples, collections and properties.
//!
//! Mutable array and tuple types are fixed by prefixing `readonly`,
//! `Array`/`Map`/`Set` references by renaming to their readonly
//! counterparts, and properties by adding the `readonly` modifier.

use common::{readonly_collection, IgnoreClass, IgnoreOptions, OneOrMany, PatternError};
use oxc_ast::ast::{TSTypeName, TSTypeOperatorOperator};
use oxc_ast::AstKind;
use oxc_semantic::AstNode;
use oxc_span::{GetSpan, Span};
use serde::Deserialize;

use super::ConfigurableRule;
use crate::diagnostic::{Diagnostic, Fix};
use crate::utils::is_in_return_type;
use crate::{CheckResult, LintContext, Rule, RuleCategory, RuleMeta};

const ARRAY: &str = "Only readonly arrays allowed.";
const TUPLE: &str = "Only readonly tuples allowed.";
const TYPE: &str = "Only readonly types allowed.";
const PROPERTY: &str = "A readonly modifier is required.";

/// prefer-readonly-type rule
#[derive(Debug, Clone, Default)]
pub struct PreferReadonlyType {
    /// Allow mutable types in function return types
    allow_mutable_return_type: bool,
    /// Don't report arrays, tuples and collection types
    ignore_collections: bool,
    ignore: IgnoreOptions,
}

impl RuleMeta for PreferReadonlyType {
    const NAME: &'static str = "prefer-readonly-type";
    const CATEGORY: RuleCategory = RuleCategory::NoMutations;
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct PreferReadonlyTypeOptions {
    pub allow_local_mutation: bool,
    pub allow_mutable_return_type: bool,
    pub ignore_class: IgnoreClass,
    pub ignore_interface: bool,
    pub ignore_collections: bool,
    pub ignore_pattern: OneOrMany,
}

impl ConfigurableRule for PreferReadonlyType {
    type Options = PreferReadonlyTypeOptions;

    fn from_options(options: Self::Options) -> Result<Self, PatternError> {
        Ok(Self::new()
            .with_allow_local_mutation(options.allow_local_mutation)
            .with_allow_mutable_return_type(options.allow_mutable_return_type)
            .with_ignore_class(options.ignore_class)
            .with_ignore_interface(options.ignore_interface)
            .with_ignore_collections(options.ignore_collections)
            .with_ignore_pattern(options.ignore_pattern.as_slice())?)
    }
}

impl PreferReadonlyType {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_allow_local_mutation(mut self, allow: bool) -> Self {
        self.ignore = self.ignore.with_allow_local_mutation(allow);
        self
    }

    pub fn with_allow_mutable_return_type(mut self, allow: bool) -> Self {
        self.allow_mutable_return_type = allow;
        self
    }

    pub fn with_ignore_class(mut self, ignore_class: IgnoreClass) -> Self {
        self.ignore = self.ignore.with_ignore_class(ignore_class);
        self
    }

    pub fn with_ignore_interface(mut self, ignore: bool) -> Self {
        self.ignore = self.ignore.with_ignore_interface(ignore);
        self
    }

    pub fn with_ignore_collections(mut self, ignore: bool) -> Self {
        self.ignore_collections = ignore;
        self
    }

    pub fn with_ignore_pattern(mut self, patterns: &[String]) -> Result<Self, PatternError> {
        self.ignore = self.ignore.with_ignore_pattern(patterns)?;
        Ok(self)
    }

    fn is_allowed_return_type(&self, node: &AstNode<'_>, ctx: &LintContext<'_>) -> bool {
        self.allow_mutable_return_type && is_in_return_type(ctx, node.id())
    }

    fn check_type<'a>(&self, node: &AstNode<'a>, ctx: &LintContext<'a>) -> Option<Diagnostic> {
        if self.ignore_collections || self.is_allowed_return_type(node, ctx) {
            return None;
        }
        match node.kind() {
            AstKind::TSArrayType(array) => {
                if is_readonly_operand(ctx.parent_kind(node.id())) {
                    return None;
                }
                Some(
                    Diagnostic::new(Self::NAME, "array", array.span, ARRAY)
                        .with_fix(Fix::insert(array.span.start, "readonly ")),
                )
            }
            AstKind::TSTupleType(tuple) => {
                if is_readonly_operand(ctx.parent_kind(node.id())) {
                    return None;
                }
                Some(
                    Diagnostic::new(Self::NAME, "tuple", tuple.span, TUPLE)
                        .with_fix(Fix::insert(tuple.span.start, "readonly ")),
                )
            }
            AstKind::TSTypeReference(reference) => {
                let TSTypeName::IdentifierReference(ident) = &reference.type_name else {
                    return None;
                };
                let replacement = readonly_collection(&ident.name)?;
                Some(
                    Diagnostic::new(Self::NAME, "type", reference.span, TYPE)
                        .with_fix(Fix::new(ident.span, replacement)),
                )
            }
            _ => None,
        }
    }

    fn check_property<'a>(&self, node: &AstNode<'a>, ctx: &LintContext<'a>) -> Option<Diagnostic> {
        match node.kind() {
            AstKind::TSIndexSignature(signature) => {
                if signature.readonly || self.is_allowed_return_type(node, ctx) {
                    return None;
                }
                let diagnostic = Diagnostic::new(Self::NAME, "property", signature.span, PROPERTY);
                // `readonly` has to follow `static`
                Some(if signature.r#static {
                    diagnostic
                } else {
                    diagnostic.with_fix(Fix::insert(signature.span.start, "readonly "))
                })
            }
            AstKind::TSPropertySignature(signature) => {
                if signature.readonly || self.is_allowed_return_type(node, ctx) {
                    return None;
                }
                Some(
                    Diagnostic::new(Self::NAME, "property", signature.span, PROPERTY)
                        .with_fix(Fix::insert(signature.span.start, "readonly ")),
                )
            }
            AstKind::PropertyDefinition(prop) => {
                if prop.readonly {
                    return None;
                }
                let key_start = prop.key.span().start;
                // A computed key's `[` may be followed by whitespace
                let at = if prop.computed {
                    ctx.span_text(Span::new(prop.span.start, key_start))
                        .rfind('[')
                        .map_or(key_start, |offset| prop.span.start + offset as u32)
                } else {
                    key_start
                };
                Some(
                    Diagnostic::new(Self::NAME, "property", prop.span, PROPERTY)
                        .with_fix(Fix::insert(at, "readonly ")),
                )
            }
            AstKind::FormalParameter(param) => {
                // Only parameter properties (`constructor(private x: T)`)
                if param.accessibility.is_none() || param.readonly {
                    return None;
                }
                Some(
                    Diagnostic::new(Self::NAME, "property", param.span, PROPERTY)
                        .with_fix(Fix::insert(param.pattern.span().start, "readonly ")),
                )
            }
            _ => None,
        }
    }
}

/// Check if the type is the operand of `readonly T[]`
fn is_readonly_operand(parent: AstKind<'_>) -> bool {
    matches!(parent, AstKind::TSTypeOperator(op) if op.operator == TSTypeOperatorOperator::Readonly)
}

impl Rule for PreferReadonlyType {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn runs_on(&self, kind: AstKind<'_>) -> bool {
        matches!(
            kind,
            AstKind::TSArrayType(_)
                | AstKind::TSTupleType(_)
                | AstKind::TSTypeReference(_)
                | AstKind::TSIndexSignature(_)
                | AstKind::TSPropertySignature(_)
                | AstKind::PropertyDefinition(_)
                | AstKind::FormalParameter(_)
                // Declarations are only visited so that ignored ones hide their types
                | AstKind::VariableDeclarator(_)
                | AstKind::TSTypeAliasDeclaration(_)
                | AstKind::TSInterfaceDeclaration(_)
        )
    }

    fn ignore_options(&self) -> Option<&IgnoreOptions> {
        Some(&self.ignore)
    }

    fn skip_ignored_subtree(&self) -> bool {
        true
    }

    fn check<'a>(&self, node: &AstNode<'a>, ctx: &LintContext<'a>) -> CheckResult {
        let diagnostic = match node.kind() {
            AstKind::TSArrayType(_) | AstKind::TSTupleType(_) | AstKind::TSTypeReference(_) => {
                self.check_type(node, ctx)
            }
            _ => self.check_property(node, ctx),
        };
        CheckResult::from(diagnostic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixer::apply_fixes;
    use crate::rules::test_lint;

    fn fixed(rule: PreferReadonlyType, source: &str) -> String {
        apply_fixes(source, &test_lint(rule, source)).output
    }

    #[test]
    fn test_rule_name() {
        assert_eq!(PreferReadonlyType::NAME, "prefer-readonly-type");
    }

    #[test]
    fn test_arrays_and_tuples() {
        let source = "let a: string[]; let b: [number, string]; let c: readonly string[];";
        let ids: Vec<_> = test_lint(PreferReadonlyType::new(), source)
            .into_iter()
            .map(|d| d.message_id)
            .collect();
        assert_eq!(ids, ["array", "tuple"]);
        insta::assert_snapshot!(
            fixed(PreferReadonlyType::new(), source),
            @"let a: readonly string[]; let b: readonly [number, string]; let c: readonly string[];"
        );
    }

    #[test]
    fn test_collections() {
        let source = "let a: Array<string>; let b: Map<string, number>; let c: Set<T>; let d: Record<K, V>;";
        insta::assert_snapshot!(
            fixed(PreferReadonlyType::new(), source),
            @"let a: ReadonlyArray<string>; let b: ReadonlyMap<string, number>; let c: ReadonlySet<T>; let d: Record<K, V>;"
        );
        let ignoring = PreferReadonlyType::new().with_ignore_collections(true);
        assert!(test_lint(ignoring, source).is_empty());
    }

    #[test]
    fn test_properties() {
        let source = "interface I { a: string; readonly b: string; [k: string]: number }";
        insta::assert_snapshot!(
            fixed(PreferReadonlyType::new(), source),
            @"interface I { readonly a: string; readonly b: string; readonly [k: string]: number }"
        );
        let ignoring = PreferReadonlyType::new().with_ignore_interface(true);
        assert!(test_lint(ignoring, source).is_empty());
    }

    #[test]
    fn test_class_properties() {
        let source = "class A { private x: number = 1; readonly y = 2; constructor(public z: number) {} }";
        insta::assert_snapshot!(
            fixed(PreferReadonlyType::new(), source),
            @"class A { private readonly x: number = 1; readonly y = 2; constructor(public readonly z: number) {} }"
        );
        let ignoring = PreferReadonlyType::new().with_ignore_class(IgnoreClass::All);
        assert!(test_lint(ignoring, source).is_empty());
    }

    #[test]
    fn test_computed_class_property() {
        let source = "class A { [ key ]: string = ''; private [other]: number = 1; }";
        insta::assert_snapshot!(
            fixed(PreferReadonlyType::new(), source),
            @"class A { readonly [ key ]: string = ''; private readonly [other]: number = 1; }"
        );
    }

    #[test]
    fn test_return_types() {
        let source = "function f(): string[] { return []; }";
        assert_eq!(test_lint(PreferReadonlyType::new(), source).len(), 1);
        let allowing = PreferReadonlyType::new().with_allow_mutable_return_type(true);
        assert!(test_lint(allowing, source).is_empty());
    }

    #[test]
    fn test_ignored_declaration_hides_its_types() {
        let rule = PreferReadonlyType::new().with_ignore_pattern(&["^mutable".to_string()]).unwrap();
        let source = "type mutableState = { items: string[]; map: Map<K, V> };";
        assert!(test_lint(rule, source).is_empty());
    }

    #[test]
    fn test_local_mutation() {
        let rule = PreferReadonlyType::new().with_allow_local_mutation(true);
        let source = "function f() { const xs: string[] = []; return xs; }";
        assert!(test_lint(rule, source).is_empty());
    }
}

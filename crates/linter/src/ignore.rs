//! Ignore option resolution
//!
//! Before a rule checks a node, the runner asks [`should_ignore`] whether
//! the rule's ignore options exempt it. Text-based options match against
//! the node's identifier texts (see [`identifier_texts`]).

use common::{
    assignment_target_text, binding_pattern_text, computed_member_text, expression_text,
    is_this_member_target, private_field_text, property_key_text, simple_target_text,
    static_member_text, IgnoreClass, IgnoreOptions,
};
use oxc_ast::AstKind;
use oxc_semantic::{AstNode, NodeId};

use crate::utils::{is_in_class, is_in_function_body, is_in_interface_body};
use crate::LintContext;

/// Decide whether `options` exempt `node` from a rule; the first matching condition wins
pub fn should_ignore(node: &AstNode<'_>, ctx: &LintContext<'_>, options: &IgnoreOptions) -> bool {
    let id = node.id();

    if options.allow_local_mutation && is_in_function_body(ctx, id) {
        return true;
    }

    match options.ignore_class {
        IgnoreClass::All if is_in_class(ctx, id) => return true,
        IgnoreClass::FieldsOnly if is_class_field_mutation(node, ctx) => return true,
        _ => {}
    }

    if options.ignore_interface && is_in_interface_body(ctx, id) {
        return true;
    }

    if !options.has_text_matchers() {
        return false;
    }

    let texts = identifier_texts(ctx, id);
    if texts.is_empty() {
        return false;
    }

    texts.iter().all(|text| options.matches_pattern(text))
        || texts.iter().all(|text| options.matches_accessor_pattern(text))
        || texts
            .iter()
            .all(|text| is_ignored_by_affix(node.kind(), text, options))
}

/// A class field, or an assignment to `this.<member>` inside a class
fn is_class_field_mutation(node: &AstNode<'_>, ctx: &LintContext<'_>) -> bool {
    match node.kind() {
        AstKind::PropertyDefinition(_) => true,
        AstKind::AssignmentExpression(assign) => {
            is_this_member_target(&assign.left) && is_in_class(ctx, node.id())
        }
        _ => false,
    }
}

/// Prefix/suffix match, retried on the object of member accessors (`foo_mutable.bar`)
fn is_ignored_by_affix(kind: AstKind<'_>, text: &str, options: &IgnoreOptions) -> bool {
    if options.matches_affix(text) {
        return true;
    }
    if !is_accessor_kind(kind) {
        return false;
    }
    let mut current = text;
    while let Some(object) = object_accessor(current) {
        if options.matches_affix(object) {
            return true;
        }
        current = object;
    }
    false
}

fn is_accessor_kind(kind: AstKind<'_>) -> bool {
    matches!(
        kind,
        AstKind::AssignmentExpression(_)
            | AstKind::UpdateExpression(_)
            | AstKind::UnaryExpression(_)
            | AstKind::CallExpression(_)
            | AstKind::StaticMemberExpression(_)
            | AstKind::ComputedMemberExpression(_)
            | AstKind::PrivateFieldExpression(_)
    )
}

/// Strip the last accessor segment: `a.b.c` -> `a.b`, `a.b[0]` -> `a.b`
fn object_accessor(text: &str) -> Option<&str> {
    if text.ends_with(']') {
        let open = text.rfind('[')?;
        return (open > 0).then(|| &text[..open]);
    }
    text.rfind('.').map(|index| &text[..index])
}

/// Derive the identifier texts of a node
///
/// Most nodes yield one text; a variable declaration yields one per
/// declarator. Type nodes borrow the texts of their parent, so
/// `let foo: string[]` matches on `foo`.
pub fn identifier_texts(ctx: &LintContext<'_>, node_id: NodeId) -> Vec<String> {
    let source = ctx.source_text();
    let text = match ctx.nodes().kind(node_id) {
        AstKind::IdentifierReference(ident) => ident.name.to_string(),
        AstKind::BindingIdentifier(ident) => ident.name.to_string(),
        AstKind::IdentifierName(ident) => ident.name.to_string(),
        AstKind::VariableDeclaration(decl) => {
            return decl
                .declarations
                .iter()
                .map(|declarator| binding_pattern_text(&declarator.id, source))
                .collect();
        }
        AstKind::VariableDeclarator(declarator) => binding_pattern_text(&declarator.id, source),
        AstKind::FormalParameter(param) => binding_pattern_text(&param.pattern, source),
        AstKind::Function(func) => match &func.id {
            Some(id) => id.name.to_string(),
            None => return Vec::new(),
        },
        AstKind::Class(class) => match &class.id {
            Some(id) => id.name.to_string(),
            None => return Vec::new(),
        },
        AstKind::TSInterfaceDeclaration(decl) => decl.id.name.to_string(),
        AstKind::TSTypeAliasDeclaration(decl) => decl.id.name.to_string(),
        AstKind::PropertyDefinition(prop) => property_key_text(&prop.key, source),
        AstKind::MethodDefinition(method) => property_key_text(&method.key, source),
        AstKind::ObjectProperty(prop) => property_key_text(&prop.key, source),
        AstKind::TSPropertySignature(sig) => property_key_text(&sig.key, source),
        AstKind::TSMethodSignature(sig) => property_key_text(&sig.key, source),
        AstKind::AssignmentExpression(assign) => assignment_target_text(&assign.left, source),
        AstKind::StaticMemberExpression(member) => static_member_text(member, source),
        AstKind::ComputedMemberExpression(member) => computed_member_text(member, source),
        AstKind::PrivateFieldExpression(member) => private_field_text(member, source),
        AstKind::ThisExpression(_) => "this".to_string(),
        AstKind::UnaryExpression(unary) => expression_text(&unary.argument, source),
        AstKind::UpdateExpression(update) => simple_target_text(&update.argument, source),
        AstKind::CallExpression(call) => expression_text(&call.callee, source),
        AstKind::ExpressionStatement(stmt) => ctx.span_text(stmt.span).to_string(),
        AstKind::TSArrayType(_)
        | AstKind::TSTupleType(_)
        | AstKind::TSIndexSignature(_)
        | AstKind::TSTypeAnnotation(_)
        | AstKind::TSTypeLiteral(_)
        | AstKind::TSTypeReference(_)
        | AstKind::TSTypeOperator(_)
        | AstKind::TSUnionType(_)
        | AstKind::TSIntersectionType(_)
        | AstKind::TSParenthesizedType(_)
        | AstKind::TSTypeParameterInstantiation(_)
        | AstKind::TSNamedTupleMember(_)
        | AstKind::TSOptionalType(_)
        | AstKind::TSRestType(_) => {
            return identifier_texts(ctx, ctx.nodes().parent_id(node_id));
        }
        _ => return Vec::new(),
    };
    vec![text]
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxc_allocator::Allocator;
    use oxc_parser::Parser;
    use oxc_semantic::SemanticBuilder;
    use oxc_span::SourceType;

    /// Run `f` on the first node of the requested kind
    fn with_first<R>(
        source: &str,
        is_target: impl Fn(AstKind<'_>) -> bool,
        f: impl FnOnce(&AstNode<'_>, &LintContext<'_>) -> R,
    ) -> R {
        let allocator = Allocator::default();
        let source_type = SourceType::ts();
        let ret = Parser::new(&allocator, source, source_type).parse();
        assert!(ret.errors.is_empty(), "parse errors: {:?}", ret.errors);
        let semantic = SemanticBuilder::new().build(&ret.program).semantic;
        let ctx = LintContext::new(&semantic, source_type);
        let node = semantic
            .nodes()
            .iter()
            .find(|node| is_target(node.kind()))
            .expect("target node");
        f(node, &ctx)
    }

    fn is_assignment(kind: AstKind<'_>) -> bool {
        matches!(kind, AstKind::AssignmentExpression(_))
    }

    fn is_declaration(kind: AstKind<'_>) -> bool {
        matches!(kind, AstKind::VariableDeclaration(_))
    }

    fn texts(source: &str, is_target: impl Fn(AstKind<'_>) -> bool) -> Vec<String> {
        with_first(source, is_target, |node, ctx| identifier_texts(ctx, node.id()))
    }

    fn ignored(
        source: &str,
        is_target: impl Fn(AstKind<'_>) -> bool,
        options: &IgnoreOptions,
    ) -> bool {
        with_first(source, is_target, |node, ctx| should_ignore(node, ctx, options))
    }

    fn patterns(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn test_identifier_texts() {
        assert_eq!(texts("let a = 1, b = 2;", is_declaration), ["a", "b"]);
        assert_eq!(texts("foo.bar[0] = 1;", is_assignment), ["foo.bar[0]"]);
        assert_eq!(
            texts("arr.push(1);", |kind| matches!(kind, AstKind::CallExpression(_))),
            ["arr.push"]
        );
        assert_eq!(
            texts("foo.x++;", |kind| matches!(kind, AstKind::UpdateExpression(_))),
            ["foo.x"]
        );
        assert_eq!(
            texts("console.log(\"yo\");", |kind| matches!(kind, AstKind::ExpressionStatement(_))),
            ["console.log(\"yo\");"]
        );
    }

    #[test]
    fn test_type_nodes_use_parent_text() {
        assert_eq!(
            texts("let foo: string[] = [];", |kind| matches!(kind, AstKind::TSArrayType(_))),
            ["foo"]
        );
        assert_eq!(
            texts("interface A { items: Array<string> }", |kind| {
                matches!(kind, AstKind::TSTypeReference(_))
            }),
            ["items"]
        );
    }

    #[test]
    fn test_ignore_pattern() {
        let options = IgnoreOptions::new().with_ignore_pattern(&patterns(&["^mutable"])).unwrap();
        assert!(ignored("let mutableFoo = 0;", is_declaration, &options));
        assert!(!ignored("let immutableFoo = 0;", is_declaration, &options));
        // every declarator has to match
        assert!(!ignored("let mutableA = 0, b = 1;", is_declaration, &options));
    }

    #[test]
    fn test_ignore_accessor_pattern() {
        let options = IgnoreOptions::new()
            .with_ignore_accessor_pattern(&patterns(&["mutable*.**"]))
            .unwrap();
        assert!(ignored("mutable_x.foo.bar.baz[0] = 0;", is_assignment, &options));
        assert!(!ignored("immutable_x.foo = 0;", is_assignment, &options));
    }

    #[test]
    fn test_suffix_retried_on_member_object() {
        let options = IgnoreOptions::new().with_ignore_suffix(&patterns(&["_mutable"]));
        assert!(ignored("foo_mutable.bar = 1;", is_assignment, &options));
        assert!(ignored("foo_mutable.bar[0] = 1;", is_assignment, &options));
        assert!(!ignored("foo.bar = 1;", is_assignment, &options));
    }

    #[test]
    fn test_prefix_on_expression_statement() {
        let options = IgnoreOptions::new().with_ignore_prefix(&patterns(&["console.log"]));
        let is_statement = |kind: AstKind<'_>| matches!(kind, AstKind::ExpressionStatement(_));
        assert!(ignored("console.log(\"yo\");", is_statement, &options));
        assert!(!ignored("console.trace();", is_statement, &options));
    }

    #[test]
    fn test_allow_local_mutation() {
        let options = IgnoreOptions::new().with_allow_local_mutation(true);
        assert!(ignored("function f() { let x = 1; }", is_declaration, &options));
        assert!(ignored("const f = () => { x.y = 1; };", is_assignment, &options));
        assert!(!ignored("let x = 1;", is_declaration, &options));
    }

    #[test]
    fn test_ignore_class() {
        let all = IgnoreOptions::new().with_ignore_class(IgnoreClass::All);
        assert!(ignored("class A { m() { this.x = 1; } }", is_assignment, &all));

        let fields = IgnoreOptions::new().with_ignore_class(IgnoreClass::FieldsOnly);
        assert!(ignored("class A { m() { this.x = 1; } }", is_assignment, &fields));
        assert!(!ignored("class A { m() { other.x = 1; } }", is_assignment, &fields));
        assert!(!ignored("function f() { this.x = 1; }", is_assignment, &fields));
        assert!(ignored(
            "class A { x = 1; }",
            |kind| matches!(kind, AstKind::PropertyDefinition(_)),
            &fields
        ));
        assert!(!ignored(
            "class A { m() { delete this.x; } }",
            |kind| matches!(kind, AstKind::UnaryExpression(_)),
            &fields
        ));
    }

    #[test]
    fn test_ignore_interface() {
        let options = IgnoreOptions::new().with_ignore_interface(true);
        let is_signature = |kind: AstKind<'_>| matches!(kind, AstKind::TSPropertySignature(_));
        assert!(ignored("interface A { x: string[] }", is_signature, &options));
        assert!(!ignored("type A = { x: string[] }", is_signature, &options));
    }

    #[test]
    fn test_no_options_ignore_nothing() {
        assert!(!ignored("foo.bar = 1;", is_assignment, &IgnoreOptions::new()));
    }
}

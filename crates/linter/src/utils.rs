//! Helpers for walking the node table

use oxc_ast::ast::TSTypeName;
use oxc_ast::AstKind;
use oxc_semantic::NodeId;
use oxc_span::{GetSpan, Span};

use crate::LintContext;

/// Check if any ancestor of the node satisfies `predicate`
pub fn has_ancestor(
    ctx: &LintContext<'_>,
    node_id: NodeId,
    predicate: impl Fn(AstKind<'_>) -> bool,
) -> bool {
    ctx.ancestor_kinds(node_id).any(|kind| predicate(kind))
}

/// Check if the node is inside a function body
pub fn is_in_function_body(ctx: &LintContext<'_>, node_id: NodeId) -> bool {
    has_ancestor(ctx, node_id, |kind| matches!(kind, AstKind::FunctionBody(_)))
}

/// Check if the node is inside a class
pub fn is_in_class(ctx: &LintContext<'_>, node_id: NodeId) -> bool {
    has_ancestor(ctx, node_id, |kind| matches!(kind, AstKind::Class(_)))
}

/// Check if the node is inside an interface body
pub fn is_in_interface_body(ctx: &LintContext<'_>, node_id: NodeId) -> bool {
    has_ancestor(ctx, node_id, |kind| matches!(kind, AstKind::TSInterfaceBody(_)))
}

/// Check if the node is inside a `Readonly<...>` type reference
pub fn is_in_readonly_type(ctx: &LintContext<'_>, node_id: NodeId) -> bool {
    has_ancestor(ctx, node_id, |kind| {
        matches!(kind, AstKind::TSTypeReference(reference)
            if matches!(&reference.type_name, TSTypeName::IdentifierReference(ident) if ident.name == "Readonly"))
    })
}

/// Find the nearest enclosing function or arrow function
pub fn enclosing_function<'a>(ctx: &LintContext<'a>, node_id: NodeId) -> Option<AstKind<'a>> {
    ctx.ancestor_kinds(node_id)
        .find(|kind| matches!(kind, AstKind::Function(_) | AstKind::ArrowFunctionExpression(_)))
}

/// Check if the nearest enclosing function is `async`
pub fn is_in_async_function(ctx: &LintContext<'_>, node_id: NodeId) -> bool {
    match enclosing_function(ctx, node_id) {
        Some(AstKind::Function(func)) => func.r#async,
        Some(AstKind::ArrowFunctionExpression(arrow)) => arrow.r#async,
        _ => false,
    }
}

/// Check if the node is part of a function's return type annotation
pub fn is_in_return_type(ctx: &LintContext<'_>, node_id: NodeId) -> bool {
    let nodes = ctx.nodes();
    let Some(annotation_id) = nodes
        .ancestor_ids(node_id)
        .find(|id| matches!(nodes.kind(*id), AstKind::TSTypeAnnotation(_)))
    else {
        return false;
    };
    matches!(
        nodes.parent_kind(annotation_id),
        AstKind::Function(_)
            | AstKind::ArrowFunctionExpression(_)
            | AstKind::TSMethodSignature(_)
            | AstKind::TSFunctionType(_)
            | AstKind::TSCallSignatureDeclaration(_)
    )
}

/// Check if the function with the given span is called immediately
///
/// `(function () {})()` and `(() => {})()`; parentheses around the
/// function are looked through.
pub fn is_iife(ctx: &LintContext<'_>, node_id: NodeId, function_span: Span) -> bool {
    let call = ctx
        .ancestor_kinds(node_id)
        .find(|kind| !matches!(kind, AstKind::ParenthesizedExpression(_)));
    match call {
        Some(AstKind::CallExpression(call)) => {
            call.callee.get_inner_expression().span() == function_span
        }
        _ => false,
    }
}

/// Check if a variable declaration is the initializer or left side of a loop
pub fn is_loop_declaration(ctx: &LintContext<'_>, node_id: NodeId) -> bool {
    matches!(
        ctx.parent_kind(node_id),
        AstKind::ForStatement(_) | AstKind::ForInStatement(_) | AstKind::ForOfStatement(_)
    )
}

/// Check if a statement is the implicit body of a concise arrow (`x => x + 1`)
pub fn is_concise_arrow_body(ctx: &LintContext<'_>, node_id: NodeId) -> bool {
    let body = ctx.parent_node(node_id);
    matches!(body.kind(), AstKind::FunctionBody(_))
        && matches!(ctx.parent_kind(body.id()), AstKind::ArrowFunctionExpression(arrow) if arrow.expression)
}

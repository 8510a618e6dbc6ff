//! Textual rendering of expressions
//!
//! The ignore options match against an "identifier text" rather than the
//! raw source: member chains are rendered as `object.property`, computed
//! members keep their brackets (`baz[0]`) so they stay a single accessor
//! segment, and anything without a natural name falls back to its source.

use oxc_ast::ast::{
    AssignmentTarget, BindingPattern, ChainElement, ComputedMemberExpression, Expression,
    PrivateFieldExpression, PropertyKey, SimpleAssignmentTarget, StaticMemberExpression,
};
use oxc_span::{GetSpan, Span};

/// Source text covered by a span
pub fn span_text(source: &str, span: Span) -> &str {
    span.source_text(source)
}

/// Render an expression as identifier text
pub fn expression_text(expr: &Expression<'_>, source: &str) -> String {
    match expr {
        Expression::Identifier(ident) => ident.name.to_string(),
        Expression::ThisExpression(_) => "this".to_string(),
        Expression::Super(_) => "super".to_string(),
        Expression::StaticMemberExpression(member) => static_member_text(member, source),
        Expression::ComputedMemberExpression(member) => computed_member_text(member, source),
        Expression::PrivateFieldExpression(member) => private_field_text(member, source),
        Expression::CallExpression(call) => expression_text(&call.callee, source),
        Expression::UnaryExpression(unary) => expression_text(&unary.argument, source),
        Expression::ParenthesizedExpression(paren) => expression_text(&paren.expression, source),
        Expression::TSNonNullExpression(e) => expression_text(&e.expression, source),
        Expression::TSAsExpression(e) => expression_text(&e.expression, source),
        Expression::TSSatisfiesExpression(e) => expression_text(&e.expression, source),
        Expression::ChainExpression(chain) => match &chain.expression {
            ChainElement::CallExpression(call) => expression_text(&call.callee, source),
            ChainElement::TSNonNullExpression(e) => expression_text(&e.expression, source),
            ChainElement::StaticMemberExpression(member) => static_member_text(member, source),
            ChainElement::ComputedMemberExpression(member) => computed_member_text(member, source),
            ChainElement::PrivateFieldExpression(member) => private_field_text(member, source),
        },
        _ => span_text(source, expr.span()).to_string(),
    }
}

pub fn static_member_text(member: &StaticMemberExpression<'_>, source: &str) -> String {
    format!("{}.{}", expression_text(&member.object, source), member.property.name)
}

pub fn computed_member_text(member: &ComputedMemberExpression<'_>, source: &str) -> String {
    format!(
        "{}[{}]",
        expression_text(&member.object, source),
        span_text(source, member.expression.span())
    )
}

pub fn private_field_text(member: &PrivateFieldExpression<'_>, source: &str) -> String {
    format!("{}.#{}", expression_text(&member.object, source), member.field.name)
}

/// Render the left side of an assignment
pub fn assignment_target_text(target: &AssignmentTarget<'_>, source: &str) -> String {
    match target {
        AssignmentTarget::AssignmentTargetIdentifier(ident) => ident.name.to_string(),
        AssignmentTarget::StaticMemberExpression(member) => static_member_text(member, source),
        AssignmentTarget::ComputedMemberExpression(member) => computed_member_text(member, source),
        AssignmentTarget::PrivateFieldExpression(member) => private_field_text(member, source),
        AssignmentTarget::TSNonNullExpression(e) => expression_text(&e.expression, source),
        AssignmentTarget::TSAsExpression(e) => expression_text(&e.expression, source),
        AssignmentTarget::TSSatisfiesExpression(e) => expression_text(&e.expression, source),
        _ => span_text(source, target.span()).to_string(),
    }
}

/// Render the operand of an update expression (`x++`)
pub fn simple_target_text(target: &SimpleAssignmentTarget<'_>, source: &str) -> String {
    match target {
        SimpleAssignmentTarget::AssignmentTargetIdentifier(ident) => ident.name.to_string(),
        SimpleAssignmentTarget::StaticMemberExpression(member) => static_member_text(member, source),
        SimpleAssignmentTarget::ComputedMemberExpression(member) => {
            computed_member_text(member, source)
        }
        SimpleAssignmentTarget::PrivateFieldExpression(member) => private_field_text(member, source),
        _ => span_text(source, target.span()).to_string(),
    }
}

/// Render a property key: identifiers and literals by name, computed keys by source
pub fn property_key_text(key: &PropertyKey<'_>, source: &str) -> String {
    match key {
        PropertyKey::StaticIdentifier(ident) => ident.name.to_string(),
        PropertyKey::PrivateIdentifier(ident) => format!("#{}", ident.name),
        _ => match key.static_name() {
            Some(name) => name.into_owned(),
            None => span_text(source, key.span()).to_string(),
        },
    }
}

/// Render a binding: the bound name, or the source of a destructuring pattern
pub fn binding_pattern_text(pattern: &BindingPattern<'_>, source: &str) -> String {
    match pattern.get_identifier_name() {
        Some(name) => name.to_string(),
        None => span_text(source, pattern.span()).to_string(),
    }
}

//! Predicates over expressions and assignment targets

use oxc_ast::ast::{
    Argument, AssignmentTarget, CallExpression, Expression, MemberExpression,
    SimpleAssignmentTarget,
};

use crate::constants::{
    ARRAY_MUTATOR_METHODS, NEW_ARRAY_FUNCTIONS, NEW_ARRAY_METHODS, OBJECT_MUTATOR_FUNCTIONS,
};

/// Get the member expression a call is made on (`a.b()` -> `a.b`)
pub fn callee_member<'b, 'a>(call: &'b CallExpression<'a>) -> Option<&'b MemberExpression<'a>> {
    call.callee.get_member_expr()
}

/// Get the static `object.property` names of a call's callee
pub fn callee_static_path<'b>(call: &'b CallExpression<'_>) -> Option<(&'b str, &'b str)> {
    let member = callee_member(call)?;
    let property = member.static_property_name()?;
    match member.object().get_inner_expression() {
        Expression::Identifier(ident) => Some((ident.name.as_str(), property)),
        _ => None,
    }
}

/// If this is a call to an in-place array method (`arr.push(x)`), return the method name
pub fn array_mutator_method<'b>(call: &'b CallExpression<'_>) -> Option<&'b str> {
    let member = callee_member(call)?;
    member
        .static_property_name()
        .filter(|name| ARRAY_MUTATOR_METHODS.contains(name))
}

/// Check if this is `Object.assign(target, ...)` or a similar call mutating an existing object
pub fn is_object_mutator_call(call: &CallExpression<'_>) -> bool {
    let Some((object, function)) = callee_static_path(call) else {
        return false;
    };
    if object != "Object" || !OBJECT_MUTATOR_FUNCTIONS.contains(function) || call.arguments.len() < 2 {
        return false;
    }
    call.arguments
        .first()
        .and_then(Argument::as_expression)
        .is_some_and(is_existing_object_reference)
}

/// Check if an expression refers to an object that already exists (identifier, `this`, member)
pub fn is_existing_object_reference(expr: &Expression<'_>) -> bool {
    let expr = expr.get_inner_expression();
    matches!(expr, Expression::Identifier(_) | Expression::ThisExpression(_))
        || expr.get_member_expr().is_some()
}

/// Check if an expression always evaluates to a freshly created array
///
/// Mutating such a value in the same expression (`[...xs].sort()`,
/// `xs.slice().reverse()`) cannot affect anything else.
pub fn is_new_array_expression(expr: &Expression<'_>) -> bool {
    match expr.get_inner_expression() {
        Expression::ArrayExpression(_) => true,
        Expression::NewExpression(new_expr) => new_expr.callee.is_specific_id("Array"),
        Expression::CallExpression(call) => {
            if let Some((object, function)) = callee_static_path(call) {
                if NEW_ARRAY_FUNCTIONS.contains(format!("{object}.{function}").as_str()) {
                    return true;
                }
            }
            callee_member(call)
                .and_then(MemberExpression::static_property_name)
                .is_some_and(|name| NEW_ARRAY_METHODS.contains(name))
        }
        _ => false,
    }
}

/// Check if the call is `Promise.reject(...)`
pub fn is_promise_reject_call(call: &CallExpression<'_>) -> bool {
    call.callee.get_inner_expression().is_specific_member_access("Promise", "reject")
}

/// Check if an assignment target is a member expression (`a.b`, `a[0]`, `a.#b`)
pub fn is_member_target(target: &AssignmentTarget<'_>) -> bool {
    target.as_member_expression().is_some()
}

/// Check if an update target is a member expression
pub fn is_member_update_target(target: &SimpleAssignmentTarget<'_>) -> bool {
    target.as_member_expression().is_some()
}

/// Check if an assignment target is `this.<member>`
pub fn is_this_member_target(target: &AssignmentTarget<'_>) -> bool {
    target
        .as_member_expression()
        .is_some_and(|member| matches!(member.object(), Expression::ThisExpression(_)))
}

//! Shared building blocks for the functional lint rules.
//!
//! This crate holds everything that does not need semantic information:
//! the accessor and text pattern matchers, the compiled ignore options,
//! name tables and small AST predicates over expressions.

pub mod accessor;
pub mod check;
pub mod constants;
pub mod expression;
pub mod options;
pub mod text;

pub use accessor::{AccessorPattern, AccessorPatterns};
pub use check::*;
pub use constants::*;
pub use expression::{
    assignment_target_text, binding_pattern_text, computed_member_text, expression_text,
    private_field_text, property_key_text, simple_target_text, span_text, static_member_text,
};
pub use options::{IgnoreClass, IgnoreOptions, OneOrMany, PatternError};
pub use text::{has_prefix, has_suffix, TextPatterns};

//! Functional style lint rules
//!
//! Rules ported from eslint-plugin-functional. Every rule can be built from
//! its JSON options through [`build_rule`].

pub mod functional_parameters;
pub mod immutable_data;
pub mod no_class;
pub mod no_expression_statement;
pub mod no_let;
pub mod no_loop_statement;
pub mod no_method_signature;
pub mod no_mixed_type;
pub mod no_promise_reject;
pub mod no_this_expression;
pub mod no_throw_statement;
pub mod no_try_statement;
pub mod prefer_readonly_type;

// Re-export rule structs
pub use functional_parameters::FunctionalParameters;
pub use immutable_data::ImmutableData;
pub use no_class::NoClass;
pub use no_expression_statement::NoExpressionStatement;
pub use no_let::NoLet;
pub use no_loop_statement::NoLoopStatement;
pub use no_method_signature::NoMethodSignature;
pub use no_mixed_type::NoMixedType;
pub use no_promise_reject::NoPromiseReject;
pub use no_this_expression::NoThisExpression;
pub use no_throw_statement::NoThrowStatement;
pub use no_try_statement::NoTryStatement;
pub use prefer_readonly_type::PreferReadonlyType;

use common::PatternError;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::config::ConfigError;
use crate::{Rule, RuleMeta};

/// A rule constructible from its deserialized options object
pub trait ConfigurableRule: Rule + RuleMeta + Sized + 'static {
    type Options: DeserializeOwned + Default;

    /// Compile options into a ready rule. Fails only on bad patterns.
    fn from_options(options: Self::Options) -> Result<Self, PatternError>;
}

/// Options of rules that take none
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NoOptions {}

fn build<R: ConfigurableRule>(options: Option<Value>) -> Result<Box<dyn Rule>, ConfigError> {
    let options = match options {
        Some(value) => R::Options::deserialize(value)
            .map_err(|source| ConfigError::InvalidOptions { rule: R::NAME.to_string(), source })?,
        None => R::Options::default(),
    };
    let rule = R::from_options(options)
        .map_err(|source| ConfigError::InvalidPattern { rule: R::NAME.to_string(), source })?;
    Ok(Box::new(rule))
}

type Builder = fn(Option<Value>) -> Result<Box<dyn Rule>, ConfigError>;

const RULES: &[(&str, Builder)] = &[
    (ImmutableData::NAME, build::<ImmutableData>),
    (NoLet::NAME, build::<NoLet>),
    (PreferReadonlyType::NAME, build::<PreferReadonlyType>),
    (NoMethodSignature::NAME, build::<NoMethodSignature>),
    (NoMixedType::NAME, build::<NoMixedType>),
    (NoExpressionStatement::NAME, build::<NoExpressionStatement>),
    (NoThisExpression::NAME, build::<NoThisExpression>),
    (NoClass::NAME, build::<NoClass>),
    (NoLoopStatement::NAME, build::<NoLoopStatement>),
    (NoThrowStatement::NAME, build::<NoThrowStatement>),
    (NoTryStatement::NAME, build::<NoTryStatement>),
    (FunctionalParameters::NAME, build::<FunctionalParameters>),
    (NoPromiseReject::NAME, build::<NoPromiseReject>),
];

/// Build a rule by name, with `options` as its JSON options object
pub fn build_rule(name: &str, options: Option<Value>) -> Result<Box<dyn Rule>, ConfigError> {
    let (_, builder) = RULES
        .iter()
        .find(|(rule_name, _)| *rule_name == name)
        .ok_or_else(|| ConfigError::UnknownRule(name.to_string()))?;
    builder(options)
}

/// Every rule with default options
pub fn all_rules() -> Vec<Box<dyn Rule>> {
    RULES.iter().filter_map(|(_, builder)| builder(None).ok()).collect()
}

/// Names of every known rule, in registration order
pub fn rule_names() -> impl Iterator<Item = &'static str> {
    RULES.iter().map(|(name, _)| *name)
}

#[cfg(test)]
pub(crate) fn test_lint(rule: impl Rule + 'static, source: &str) -> Vec<crate::Diagnostic> {
    use oxc_allocator::Allocator;
    use oxc_parser::Parser;
    use oxc_span::SourceType;

    use crate::runner::{lint, RulesConfig};

    let allocator = Allocator::default();
    let source_type = SourceType::ts();
    let ret = Parser::new(&allocator, source, source_type).parse();
    assert!(ret.errors.is_empty(), "parse errors: {:?}", ret.errors);
    lint(&ret.program, source_type, &RulesConfig::none().with_rule(rule)).diagnostics
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_rules_registered() {
        let names: Vec<_> = all_rules().iter().map(|rule| rule.name()).collect();
        assert_eq!(names.len(), 13);
        assert_eq!(names, rule_names().collect::<Vec<_>>());
    }

    #[test]
    fn test_build_rule_errors() {
        assert!(matches!(build_rule("no-var", None), Err(ConfigError::UnknownRule(name)) if name == "no-var"));
        assert!(matches!(
            build_rule("no-class", Some(serde_json::json!({ "unexpected": true }))),
            Err(ConfigError::InvalidOptions { .. })
        ));
        assert!(matches!(
            build_rule("no-let", Some(serde_json::json!({ "ignorePattern": "(" }))),
            Err(ConfigError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_build_rule_with_options() {
        let rule = build_rule("no-let", Some(serde_json::json!({ "allowInForLoopInit": true }))).unwrap();
        assert_eq!(rule.name(), "no-let");
    }
}

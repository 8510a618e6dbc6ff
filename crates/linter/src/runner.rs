//! Rule dispatch over the semantic node table
//!
//! `LintRunner` walks the nodes in source order once and offers each node to
//! every enabled rule that inspects its kind. Ignore options are resolved
//! before a rule's check runs, and a rule can ask for a node's descendants to
//! be hidden from it.

use oxc_ast::ast::Program;
use oxc_semantic::{AstNode, NodeId, Semantic, SemanticBuilder};
use oxc_span::SourceType;
use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use crate::diagnostic::{Diagnostic, DiagnosticSeverity};
use crate::ignore::should_ignore;
use crate::rules::{all_rules, build_rule};
use crate::{ConfigError, LintContext, Rule};

/// A rule together with the severity it reports at
#[derive(Debug)]
pub struct ConfiguredRule {
    pub rule: Box<dyn Rule>,
    pub severity: DiagnosticSeverity,
}

/// Configuration for which rules are enabled
#[derive(Debug)]
pub struct RulesConfig {
    rules: Vec<ConfiguredRule>,
}

impl Default for RulesConfig {
    /// Every rule with its default options, reporting errors
    fn default() -> Self {
        Self {
            rules: all_rules()
                .into_iter()
                .map(|rule| ConfiguredRule { rule, severity: DiagnosticSeverity::Error })
                .collect(),
        }
    }
}

impl RulesConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn none() -> Self {
        Self { rules: Vec::new() }
    }

    /// Enable a rule at error severity
    pub fn with_rule(self, rule: impl Rule + 'static) -> Self {
        self.with_rule_severity(rule, DiagnosticSeverity::Error)
    }

    pub fn with_rule_severity(
        mut self,
        rule: impl Rule + 'static,
        severity: DiagnosticSeverity,
    ) -> Self {
        self.push(Box::new(rule), severity);
        self
    }

    /// Enable a rule by name, with options given as JSON
    pub fn with_named_rule(
        mut self,
        name: &str,
        options: Option<serde_json::Value>,
        severity: DiagnosticSeverity,
    ) -> Result<Self, ConfigError> {
        let rule = build_rule(name, options)?;
        self.push(rule, severity);
        Ok(self)
    }

    /// Add a rule, replacing an earlier entry with the same name
    pub(crate) fn push(&mut self, rule: Box<dyn Rule>, severity: DiagnosticSeverity) {
        self.rules.retain(|configured| configured.rule.name() != rule.name());
        self.rules.push(ConfiguredRule { rule, severity });
    }

    pub fn rules(&self) -> &[ConfiguredRule] {
        &self.rules
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        self.rules.iter().any(|configured| configured.rule.name() == name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Runs all enabled rules during a single pass over the node table
pub struct LintRunner<'a, 'c> {
    ctx: LintContext<'a>,
    config: &'c RulesConfig,
}

impl<'a, 'c> LintRunner<'a, 'c> {
    pub fn new(ctx: LintContext<'a>, config: &'c RulesConfig) -> Self {
        Self { ctx, config }
    }

    pub fn run(self) -> LintResult {
        let nodes = self.ctx.nodes();
        debug!(rules = self.config.len(), nodes = nodes.len(), "running lint rules");

        // Per rule: nodes whose descendants are hidden from it
        let mut skipped: Vec<FxHashSet<NodeId>> =
            self.config.rules.iter().map(|_| FxHashSet::default()).collect();
        let mut diagnostics = Vec::new();

        for node in nodes.iter() {
            let kind = node.kind();
            for (configured, skipped) in self.config.rules.iter().zip(skipped.iter_mut()) {
                let rule = configured.rule.as_ref();
                if !rule.runs_on(kind) || self.is_skipped(node, skipped) {
                    continue;
                }

                if let Some(options) = rule.ignore_options() {
                    if should_ignore(node, &self.ctx, options) {
                        trace!(rule = rule.name(), kind = ?kind.ty(), "node ignored");
                        if rule.skip_ignored_subtree() {
                            skipped.insert(node.id());
                        }
                        continue;
                    }
                }

                let result = rule.check(node, &self.ctx);
                if result.skip_children {
                    skipped.insert(node.id());
                }
                diagnostics.extend(
                    result
                        .diagnostics
                        .into_iter()
                        .map(|diagnostic| diagnostic.with_severity(configured.severity)),
                );
            }
        }

        debug!(diagnostics = diagnostics.len(), "lint finished");
        LintResult { diagnostics }
    }

    fn is_skipped(&self, node: &AstNode<'a>, skipped: &FxHashSet<NodeId>) -> bool {
        !skipped.is_empty()
            && self.ctx.nodes().ancestor_ids(node.id()).any(|id| skipped.contains(&id))
    }
}

/// Result of running the linter
#[derive(Debug, Default)]
pub struct LintResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl LintResult {
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| matches!(d.severity, DiagnosticSeverity::Error))
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| matches!(d.severity, DiagnosticSeverity::Warning))
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, DiagnosticSeverity::Error))
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, DiagnosticSeverity::Warning))
            .count()
    }

    /// Diagnostics reported by one rule
    pub fn by_rule<'r>(&'r self, rule: &'r str) -> impl Iterator<Item = &'r Diagnostic> + 'r {
        self.diagnostics.iter().filter(move |d| d.rule == rule)
    }
}

/// Lint a program that already has semantic information
pub fn lint_semantic(
    semantic: &Semantic<'_>,
    source_type: SourceType,
    config: &RulesConfig,
) -> LintResult {
    let ctx = LintContext::new(semantic, source_type);
    LintRunner::new(ctx, config).run()
}

/// Build semantic information for a parsed program and lint it
pub fn lint<'a>(program: &'a Program<'a>, source_type: SourceType, config: &RulesConfig) -> LintResult {
    let ret = SemanticBuilder::new().build(program);
    if !ret.errors.is_empty() {
        debug!(errors = ret.errors.len(), "semantic errors ignored");
    }
    lint_semantic(&ret.semantic, source_type, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{NoClass, NoLet, NoThisExpression, PreferReadonlyType};
    use crate::CheckResult;
    use oxc_allocator::Allocator;
    use oxc_parser::Parser;

    fn parse_and_lint_with_config(source: &str, config: &RulesConfig) -> LintResult {
        let allocator = Allocator::default();
        let source_type = SourceType::ts();
        let ret = Parser::new(&allocator, source, source_type).parse();
        assert!(ret.errors.is_empty(), "parse errors: {:?}", ret.errors);
        lint(&ret.program, source_type, config)
    }

    #[test]
    fn test_lint_clean_code() {
        let result = parse_and_lint_with_config(
            "const add = (a: number) => (b: number) => a + b;",
            &RulesConfig::default(),
        );
        assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics);
    }

    #[test]
    fn test_only_enabled_rules_run() {
        let config = RulesConfig::none().with_rule(NoLet::new());
        let result = parse_and_lint_with_config("let x = 1; class A {}", &config);
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].rule, "no-let");
    }

    #[test]
    fn test_severity_is_applied() {
        let config = RulesConfig::none()
            .with_rule_severity(NoClass::new(), DiagnosticSeverity::Warning)
            .with_rule(NoThisExpression::new());
        let result = parse_and_lint_with_config("class A { m() { return this; } }", &config);
        assert_eq!(result.warning_count(), 1);
        assert_eq!(result.error_count(), 1);
        assert!(result.has_errors());
        assert!(result.has_warnings());
    }

    #[test]
    fn test_later_entry_replaces_earlier() {
        let config = RulesConfig::none()
            .with_rule(NoLet::new())
            .with_rule(NoLet::new().with_allow_in_for_loop_init(true));
        assert_eq!(config.len(), 1);
        let result = parse_and_lint_with_config("for (let i = 0; i < 1; i++) {}", &config);
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_ignored_subtree_is_skipped() {
        let rule = PreferReadonlyType::new().with_ignore_pattern(&["^mutable".to_string()]).unwrap();
        let config = RulesConfig::none().with_rule(rule);
        let result = parse_and_lint_with_config(
            "type mutableT = { items: string[] }; type T = { readonly items: string[] };",
            &config,
        );
        // Only the array inside `T` is reported
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].message_id, "array");
    }

    #[test]
    fn test_diagnostics_in_source_order() {
        let config = RulesConfig::none().with_rule(NoLet::new()).with_rule(NoClass::new());
        let result = parse_and_lint_with_config("class A {} let x = 1;", &config);
        let rules: Vec<_> = result.diagnostics.iter().map(|d| d.rule).collect();
        assert_eq!(rules, ["no-class", "no-let"]);
        assert_eq!(result.by_rule("no-let").count(), 1);
    }

    /// Reports every function and hides the body of functions named `opaque`
    #[derive(Debug)]
    struct FunctionsOutsideOpaque;

    impl Rule for FunctionsOutsideOpaque {
        fn name(&self) -> &'static str {
            "functions-outside-opaque"
        }

        fn runs_on(&self, kind: oxc_ast::AstKind<'_>) -> bool {
            matches!(kind, oxc_ast::AstKind::Function(_))
        }

        fn check<'a>(&self, node: &AstNode<'a>, _ctx: &LintContext<'a>) -> CheckResult {
            let oxc_ast::AstKind::Function(func) = node.kind() else {
                return CheckResult::none();
            };
            let name = func.id.as_ref().map_or("", |id| id.name.as_str());
            let result = CheckResult::report(Diagnostic::new(self.name(), "generic", func.span, name));
            if name == "opaque" { result.skip_children() } else { result }
        }
    }

    #[test]
    fn test_skip_children_hides_descendants() {
        let config = RulesConfig::none().with_rule(FunctionsOutsideOpaque);
        let result = parse_and_lint_with_config(
            "function opaque() { function hidden() {} } function open() { function inner() {} }",
            &config,
        );
        let names: Vec<_> = result.diagnostics.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(names, ["opaque", "open", "inner"]);
    }
}

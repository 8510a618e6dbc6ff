//! Integration tests for functional-linter rules

use functional_linter::config::ConfigError;
use functional_linter::fixer::{apply_fixes, apply_suggestion};
use functional_linter::{lint, Diagnostic, DiagnosticSeverity, RulesConfig};
use oxc_allocator::Allocator;
use oxc_parser::Parser;
use oxc_span::SourceType;

fn lint_ts(source: &str, config: &RulesConfig) -> Vec<Diagnostic> {
    let allocator = Allocator::default();
    let source_type = SourceType::ts();
    let ret = Parser::new(&allocator, source, source_type).parse();
    assert!(ret.errors.is_empty(), "parse errors: {:?}", ret.errors);
    lint(&ret.program, source_type, config).diagnostics
}

fn config(json: &str) -> RulesConfig {
    RulesConfig::from_json(json).expect("valid config")
}

fn rules_and_ids(diagnostics: &[Diagnostic]) -> Vec<(&'static str, &'static str)> {
    diagnostics.iter().map(|d| (d.rule, d.message_id)).collect()
}

#[test]
fn test_accessor_pattern_ignores_matching_mutations() {
    let config = config(
        r#"{ "rules": { "immutable-data": ["error", { "ignoreAccessorPattern": "mutable*.**" }] } }"#,
    );
    let source = "mutable_x.foo.bar.baz[0] = 0;\nimmutable_x.foo = 0;";
    let diagnostics = lint_ts(source, &config);

    assert_eq!(rules_and_ids(&diagnostics), [("immutable-data", "generic")]);
    assert_eq!(&source[diagnostics[0].start as usize..diagnostics[0].end as usize], "immutable_x.foo = 0");
}

#[test]
fn test_fields_only_still_reports_delete() {
    let config = config(r#"{ "rules": { "immutable-data": ["error", { "ignoreClass": "fieldsOnly" }] } }"#);
    let source = r"
class Counter {
    count = 0;
    constructor() { this.count = 1; }
    reset() { delete this.count; }
}
";
    assert_eq!(rules_and_ids(&lint_ts(source, &config)), [("immutable-data", "generic")]);
}

#[test]
fn test_ignore_pattern_on_let() {
    let config = config(r#"{ "rules": { "no-let": ["error", { "ignorePattern": "^mutable" }] } }"#);
    let diagnostics = lint_ts("let mutableFoo = 1;\nlet immutableFoo = 2;", &config);

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, "Unexpected let, use const instead.");
    assert_eq!(diagnostics[0].start, 20);
}

#[test]
fn test_allow_local_mutation() {
    let config = config(
        r#"{
            "rules": {
                "no-let": ["error", { "allowLocalMutation": true }],
                "immutable-data": "error"
            }
        }"#,
    );
    let source = r"
let top = 1;
function f(xs) {
    let local = 0;
    xs.push(local);
    return xs;
}
";
    assert_eq!(rules_and_ids(&lint_ts(source, &config)), [("no-let", "generic"), ("immutable-data", "array")]);
}

#[test]
fn test_expression_statement_prefix() {
    let config = config(
        r#"{ "rules": { "no-expression-statement": ["warn", { "ignorePrefix": "console.log" }] } }"#,
    );
    let diagnostics = lint_ts("console.log(\"yo\");\nconsole.trace();", &config);

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].severity, DiagnosticSeverity::Warning);
    assert_eq!(diagnostics[0].start, 19);
}

#[test]
fn test_default_config_runs_every_rule() {
    let source = r"
let count = 0;
class Box {}
for (const x of [1, 2]) {}
try { run(); } catch (e) { throw e; }
const rejected = () => Promise.reject(new Error('no'));
";
    let rules: Vec<_> = lint_ts(source, &RulesConfig::default()).iter().map(|d| d.rule).collect();
    for expected in [
        "no-let",
        "no-class",
        "no-loop-statement",
        "no-try-statement",
        "no-throw-statement",
        "no-promise-reject",
        "no-expression-statement",
        "functional-parameters",
    ] {
        assert!(rules.contains(&expected), "missing {expected} in {rules:?}");
    }
}

#[test]
fn test_diagnostics_are_deterministic() {
    let source = "let a = [1]; a.push(2); interface I { m(): void; x: number[] }";
    let config = RulesConfig::default();
    let first = rules_and_ids(&lint_ts(source, &config));
    let second = rules_and_ids(&lint_ts(source, &config));
    assert_eq!(first, second);
}

#[test]
fn test_off_rules_are_not_run() {
    let config = config(r#"{ "rules": { "no-let": "off", "no-class": 2 } }"#);
    assert!(!config.is_enabled("no-let"));
    assert_eq!(rules_and_ids(&lint_ts("let a = 1; class B {}", &config)), [("no-class", "generic")]);
}

#[test]
fn test_config_errors() {
    assert!(matches!(RulesConfig::from_json(r#"{ "rules": { "no-var": "error" } }"#), Err(ConfigError::UnknownRule(_))));
    assert!(matches!(
        RulesConfig::from_json(r#"{ "rules": { "no-let": "loud" } }"#),
        Err(ConfigError::InvalidSeverity { .. })
    ));
    assert!(matches!(
        RulesConfig::from_json(r#"{ "rules": { "no-let": ["error", { "allowEverything": true }] } }"#),
        Err(ConfigError::InvalidOptions { .. })
    ));
    assert!(matches!(
        RulesConfig::from_json(r#"{ "rules": { "immutable-data": ["error", { "ignorePattern": "[" }] } }"#),
        Err(ConfigError::InvalidPattern { .. })
    ));
    assert!(matches!(RulesConfig::from_json("{ rules }"), Err(ConfigError::Json(_))));
}

#[test]
fn test_readonly_fixes() {
    let config = config(r#"{ "rules": { "prefer-readonly-type": "error" } }"#);
    let source = r"
interface State {
    items: string[];
    lookup: Map<string, number>;
    readonly pair: [number, number];
}
";
    let result = apply_fixes(source, &lint_ts(source, &config));
    insta::assert_snapshot!(result.output.trim(), @r"
    interface State {
        readonly items: readonly string[];
        readonly lookup: ReadonlyMap<string, number>;
        readonly pair: readonly [number, number];
    }
    ");
    assert_eq!(result.skipped, 0);
}

#[test]
fn test_let_suggestion() {
    let config = config(r#"{ "rules": { "no-let": "error" } }"#);
    let source = "let total = 1;\nlet pending;";
    let diagnostics = lint_ts(source, &config);

    assert_eq!(diagnostics.len(), 2);
    let suggestion = diagnostics[0].suggestions.first().expect("const suggestion");
    assert_eq!(apply_suggestion(source, suggestion), "const total = 1;\nlet pending;");
    assert!(diagnostics[1].suggestions.is_empty());
}

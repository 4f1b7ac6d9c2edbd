use indexmap::IndexMap;
use indoc::indoc;

use tspeg_core::grammar::Grammar;

use super::TypeExtractor;
use crate::{ConfigError, Error};

fn grammar(json: &str) -> Grammar {
    Grammar::from_json(json).expect("test grammar should parse")
}

fn no_overrides() -> IndexMap<String, String> {
    IndexMap::new()
}

const DIGITS: &str = indoc! {r#"
    {
      "rules": [
        {"name": "digit", "expression": {"type": "class"}},
        {"name": "digits", "expression": {
            "type": "one_or_more",
            "expression": {"type": "rule_ref", "name": "digit"}
        }}
      ]
    }
"#};

#[test]
fn digit_and_digits() {
    let grammar = grammar(DIGITS);
    let extractor = TypeExtractor::new(&grammar, true);
    let extraction = extractor.extract(None, &no_overrides()).unwrap();

    insta::assert_snapshot!(extraction.declarations, @r"
    export type Digit = string;
    export type Digits = Digit[];
    ");
}

#[test]
fn name_map_follows_declaration_order() {
    let grammar = grammar(DIGITS);
    let extractor = TypeExtractor::new(&grammar, true);
    let extraction = extractor.extract(None, &no_overrides()).unwrap();

    let entries: Vec<_> = extraction
        .name_map
        .iter()
        .map(|(rule, alias)| (rule.as_str(), alias.as_str()))
        .collect();
    assert_eq!(entries, [("digit", "Digit"), ("digits", "Digits")]);
}

#[test]
fn action_uses_declared_return_type_only() {
    let grammar = grammar(
        r#"{"rules": [
            {"name": "digit", "expression": {"type": "class"}},
            {"name": "pair", "expression": {
                "type": "action",
                "returnType": "[string, string]",
                "expression": {"type": "sequence", "elements": [
                    {"type": "labeled", "label": "a", "expression": {"type": "rule_ref", "name": "digit"}},
                    {"type": "labeled", "label": "b", "expression": {"type": "rule_ref", "name": "digit"}}
                ]}
            }}
        ]}"#,
    );
    let extractor = TypeExtractor::new(&grammar, true);
    let extraction = extractor.extract(None, &no_overrides()).unwrap();

    // The sequence shape is ignored: the annotation wins.
    insta::assert_snapshot!(extraction.declarations, @r"
    export type Digit = string;
    export type Pair = [string, string];
    ");
}

#[test]
fn action_without_annotation_is_any() {
    let grammar = grammar(
        r#"{"rules": [
            {"name": "num", "expression": {
                "type": "action",
                "expression": {"type": "class"}
            }}
        ]}"#,
    );
    let extractor = TypeExtractor::new(&grammar, true);
    let extraction = extractor.extract(None, &no_overrides()).unwrap();
    assert_eq!(extraction.declarations, "export type Num = any;\n");
}

#[test]
fn self_recursive_rule_terminates() {
    // expr = digit expr / digit
    let grammar = grammar(
        r#"{"rules": [
            {"name": "digit", "expression": {"type": "class"}},
            {"name": "expr", "expression": {"type": "choice", "alternatives": [
                {"type": "sequence", "elements": [
                    {"type": "rule_ref", "name": "digit"},
                    {"type": "rule_ref", "name": "expr"}
                ]},
                {"type": "rule_ref", "name": "digit"}
            ]}}
        ]}"#,
    );
    let extractor = TypeExtractor::new(&grammar, true);
    let extraction = extractor.extract(None, &no_overrides()).unwrap();

    // The recursive reference stays an alias, never an expansion.
    insta::assert_snapshot!(extraction.declarations, @r"
    export type Digit = string;
    export type Expr = Expr | Digit;
    ");
}

#[test]
fn mutually_recursive_rules_terminate() {
    let grammar = grammar(
        r#"{"rules": [
            {"name": "a", "expression": {"type": "choice", "alternatives": [
                {"type": "rule_ref", "name": "b"},
                {"type": "literal", "value": "a"}
            ]}},
            {"name": "b", "expression": {"type": "rule_ref", "name": "a"}}
        ]}"#,
    );
    let extractor = TypeExtractor::new(&grammar, true);
    let extraction = extractor.extract(None, &no_overrides()).unwrap();

    insta::assert_snapshot!(extraction.declarations, @r"
    export type A = B | string;
    export type B = A;
    ");
}

#[test]
fn choice_removes_duplicate_member_types() {
    // literal and class both infer as string
    let grammar = grammar(
        r#"{"rules": [
            {"name": "tok", "expression": {"type": "choice", "alternatives": [
                {"type": "literal", "value": "x"},
                {"type": "class"}
            ]}}
        ]}"#,
    );
    let extractor = TypeExtractor::new(&grammar, true);
    let extraction = extractor.extract(None, &no_overrides()).unwrap();
    assert_eq!(extraction.declarations, "export type Tok = string;\n");
}

#[test]
fn predicate_type_is_undefined() {
    let grammar = grammar(
        r#"{"rules": [
            {"name": "eof", "expression": {"type": "simple_not", "expression": {"type": "any"}}}
        ]}"#,
    );
    let extractor = TypeExtractor::new(&grammar, true);
    let extraction = extractor.extract(None, &no_overrides()).unwrap();
    assert_eq!(extraction.declarations, "export type Eof = undefined;\n");
}

#[test]
fn predicate_participates_in_choice_union() {
    let grammar = grammar(
        r#"{"rules": [
            {"name": "digit", "expression": {"type": "class"}},
            {"name": "maybe", "expression": {"type": "choice", "alternatives": [
                {"type": "rule_ref", "name": "digit"},
                {"type": "simple_not", "expression": {"type": "rule_ref", "name": "digit"}}
            ]}}
        ]}"#,
    );
    let extractor = TypeExtractor::new(&grammar, true);
    let extraction = extractor.extract(None, &no_overrides()).unwrap();
    assert!(
        extraction
            .declarations
            .contains("export type Maybe = Digit | undefined;")
    );
}

#[test]
fn sequence_skips_predicate_elements() {
    // !"x" digit  -- one effective element
    let grammar = grammar(
        r#"{"rules": [
            {"name": "digit", "expression": {"type": "class"}},
            {"name": "guarded", "expression": {"type": "sequence", "elements": [
                {"type": "simple_not", "expression": {"type": "literal", "value": "x"}},
                {"type": "rule_ref", "name": "digit"}
            ]}}
        ]}"#,
    );
    let extractor = TypeExtractor::new(&grammar, true);
    let extraction = extractor.extract(None, &no_overrides()).unwrap();
    assert!(
        extraction
            .declarations
            .contains("export type Guarded = Digit;")
    );
}

#[test]
fn sequence_of_several_elements_takes_the_last() {
    let grammar = grammar(
        r#"{"rules": [
            {"name": "digit", "expression": {"type": "class"}},
            {"name": "wrapped", "expression": {"type": "sequence", "elements": [
                {"type": "literal", "value": "("},
                {"type": "rule_ref", "name": "digit"}
            ]}}
        ]}"#,
    );
    let extractor = TypeExtractor::new(&grammar, true);
    let extraction = extractor.extract(None, &no_overrides()).unwrap();
    assert!(
        extraction
            .declarations
            .contains("export type Wrapped = Digit;")
    );
}

#[test]
fn optional_becomes_array() {
    let grammar = grammar(
        r#"{"rules": [
            {"name": "digit", "expression": {"type": "class"}},
            {"name": "opt", "expression": {"type": "optional", "expression": {"type": "rule_ref", "name": "digit"}}}
        ]}"#,
    );
    let extractor = TypeExtractor::new(&grammar, true);
    let extraction = extractor.extract(None, &no_overrides()).unwrap();
    assert!(extraction.declarations.contains("export type Opt = Digit[];"));
}

#[test]
fn repetition_of_exactly_one_is_transparent() {
    let grammar = grammar(
        r#"{"rules": [
            {"name": "digit", "expression": {"type": "class"}},
            {"name": "once", "expression": {
                "type": "repeated", "min": 1, "max": 1,
                "expression": {"type": "rule_ref", "name": "digit"}
            }}
        ]}"#,
    );
    let extractor = TypeExtractor::new(&grammar, true);
    let extraction = extractor.extract(None, &no_overrides()).unwrap();
    assert!(extraction.declarations.contains("export type Once = Digit;"));
}

#[test]
fn repeated_union_is_parenthesized() {
    let grammar = grammar(
        r#"{"rules": [
            {"name": "a", "expression": {"type": "literal", "value": "a"}},
            {"name": "b", "expression": {"type": "rule_ref", "name": "a"}},
            {"name": "items", "expression": {"type": "zero_or_more", "expression": {
                "type": "group", "expression": {"type": "choice", "alternatives": [
                    {"type": "rule_ref", "name": "a"},
                    {"type": "rule_ref", "name": "b"}
                ]}
            }}}
        ]}"#,
    );
    let extractor = TypeExtractor::new(&grammar, true);
    let extraction = extractor.extract(None, &no_overrides()).unwrap();
    assert!(
        extraction
            .declarations
            .contains("export type Items = (A | B)[];")
    );
}

#[test]
fn override_replaces_inference_wholesale() {
    let grammar = grammar(DIGITS);
    let extractor = TypeExtractor::new(&grammar, true);
    let mut overrides = IndexMap::new();
    overrides.insert("digit".to_string(), "number".to_string());
    let extraction = extractor.extract(None, &overrides).unwrap();

    insta::assert_snapshot!(extraction.declarations, @r"
    export type Digit = number;
    export type Digits = Digit[];
    ");
}

#[test]
fn unknown_start_rule_is_a_config_error() {
    let grammar = grammar(DIGITS);
    let extractor = TypeExtractor::new(&grammar, true);
    let start_rules = vec!["nope".to_string()];
    let err = extractor
        .extract(Some(&start_rules), &no_overrides())
        .unwrap_err();
    match err {
        Error::Config(ConfigError::UnknownStartRule(name)) => assert_eq!(name, "nope"),
        other => panic!("expected UnknownStartRule, got {other:?}"),
    }
}

#[test]
fn unknown_override_is_a_config_error() {
    let grammar = grammar(DIGITS);
    let extractor = TypeExtractor::new(&grammar, true);
    let mut overrides = IndexMap::new();
    overrides.insert("ghost".to_string(), "never".to_string());
    let err = extractor.extract(None, &overrides).unwrap_err();
    match err {
        Error::Config(ConfigError::UnknownTypeOverride(name)) => assert_eq!(name, "ghost"),
        other => panic!("expected UnknownTypeOverride, got {other:?}"),
    }
}

#[test]
fn alias_collisions_get_numeric_suffixes() {
    let grammar = grammar(
        r#"{"rules": [
            {"name": "foo_bar", "expression": {"type": "class"}},
            {"name": "fooBar", "expression": {"type": "class"}},
            {"name": "FooBar", "expression": {"type": "class"}}
        ]}"#,
    );
    let extractor = TypeExtractor::new(&grammar, true);
    let aliases: Vec<_> = extractor.name_map().values().map(String::as_str).collect();
    assert_eq!(aliases, ["FooBar", "FooBar2", "FooBar3"]);
}

#[test]
fn camel_casing_can_be_disabled() {
    let grammar = grammar(
        r#"{"rules": [
            {"name": "digit_list", "expression": {"type": "class"}}
        ]}"#,
    );
    let extractor = TypeExtractor::new(&grammar, false);
    let extraction = extractor.extract(None, &no_overrides()).unwrap();
    assert_eq!(extraction.declarations, "export type digit_list = string;\n");
}

#[test]
fn extraction_is_deterministic() {
    let grammar = grammar(DIGITS);
    let extractor = TypeExtractor::new(&grammar, true);
    let first = extractor.extract(None, &no_overrides()).unwrap();
    let second = extractor.extract(None, &no_overrides()).unwrap();
    assert_eq!(first.declarations, second.declarations);
    assert_eq!(first.name_map, second.name_map);
}

#[test]
fn unknown_rule_reference_renders_as_unknown() {
    let grammar = grammar(
        r#"{"rules": [
            {"name": "top", "expression": {"type": "rule_ref", "name": "missing"}}
        ]}"#,
    );
    let extractor = TypeExtractor::new(&grammar, true);
    let extraction = extractor.extract(None, &no_overrides()).unwrap();
    assert_eq!(extraction.declarations, "export type Top = unknown;\n");
}

use super::types::{Expression, Grammar, Rule};

fn any() -> Expression {
    Expression::CharacterClass {
        inverted: false,
        ignore_case: false,
    }
}

#[test]
fn rule_lookup() {
    let grammar = Grammar {
        rules: vec![
            Rule {
                name: "first".into(),
                expression: any(),
            },
            Rule {
                name: "second".into(),
                expression: any(),
            },
        ],
    };

    assert!(grammar.has_rule("first"));
    assert!(grammar.has_rule("second"));
    assert!(!grammar.has_rule("third"));
    assert_eq!(grammar.rule("second").unwrap().name, "second");
}

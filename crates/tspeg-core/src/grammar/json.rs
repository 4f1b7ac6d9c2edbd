//! JSON deserialization for grammar AST dumps.
//!
//! The host compiler serializes its grammar AST as `type`-tagged JSON nodes
//! (`{"type": "rule", "name": ..., "expression": ...}`). The raw layer below
//! matches that format one-to-one; conversion then normalizes repetition
//! sugar and predicate node types onto the compact [`Expression`] model.

use serde::Deserialize;

use super::types::{Expression, Grammar, PredicateKind, Rule};

/// Error during grammar loading.
#[derive(Debug)]
pub enum GrammarError {
    Json(serde_json::Error),
    DuplicateRule(String),
}

impl std::fmt::Display for GrammarError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::DuplicateRule(name) => write!(f, "rule {name:?} is defined more than once"),
        }
    }
}

impl std::error::Error for GrammarError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(e) => Some(e),
            Self::DuplicateRule(_) => None,
        }
    }
}

impl Grammar {
    /// Parse a grammar from the host compiler's JSON AST dump.
    pub fn from_json(json: &str) -> Result<Self, GrammarError> {
        let raw: RawGrammar = serde_json::from_str(json).map_err(GrammarError::Json)?;
        let grammar: Grammar = raw.into();
        for (i, rule) in grammar.rules.iter().enumerate() {
            if grammar.rules[..i].iter().any(|r| r.name == rule.name) {
                return Err(GrammarError::DuplicateRule(rule.name.clone()));
            }
        }
        Ok(grammar)
    }
}

/// Raw grammar structure matching the host's JSON dump.
#[derive(Debug, Deserialize)]
struct RawGrammar {
    rules: Vec<RawRule>,
}

#[derive(Debug, Deserialize)]
struct RawRule {
    name: String,
    expression: RawNode,
}

/// Raw expression node, tagged by the host's `type` field.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
enum RawNode {
    Literal {
        value: String,
        #[serde(default)]
        ignore_case: bool,
    },
    Class {
        #[serde(default)]
        inverted: bool,
        #[serde(default)]
        ignore_case: bool,
    },
    Any {},
    RuleRef {
        name: String,
    },
    Sequence {
        elements: Vec<RawNode>,
    },
    Choice {
        alternatives: Vec<RawNode>,
    },
    Labeled {
        #[serde(default)]
        label: Option<String>,
        expression: Box<RawNode>,
    },
    Action {
        expression: Box<RawNode>,
        #[serde(default)]
        return_type: Option<String>,
    },
    Optional {
        expression: Box<RawNode>,
    },
    ZeroOrMore {
        expression: Box<RawNode>,
    },
    OneOrMore {
        expression: Box<RawNode>,
    },
    Repeated {
        #[serde(default)]
        min: Option<u32>,
        #[serde(default)]
        max: Option<u32>,
        expression: Box<RawNode>,
    },
    Group {
        expression: Box<RawNode>,
    },
    /// `$expr`: always yields the matched substring, so it converts to a
    /// primitive string token regardless of the inner expression.
    Text {
        expression: Box<RawNode>,
    },
    /// Diagnostic name wrapper; transparent for typing.
    Named {
        expression: Box<RawNode>,
    },
    SimpleAnd {
        expression: Box<RawNode>,
    },
    SimpleNot {
        expression: Box<RawNode>,
    },
    SemanticAnd {},
    SemanticNot {},
}

impl From<RawGrammar> for Grammar {
    fn from(raw: RawGrammar) -> Self {
        Grammar {
            rules: raw
                .rules
                .into_iter()
                .map(|r| Rule {
                    name: r.name,
                    expression: r.expression.into(),
                })
                .collect(),
        }
    }
}

impl From<RawNode> for Expression {
    fn from(raw: RawNode) -> Self {
        fn boxed(raw: Box<RawNode>) -> Box<Expression> {
            Box::new((*raw).into())
        }

        fn repetition(expression: Box<RawNode>, min: u32, max: Option<u32>) -> Expression {
            Expression::Repetition {
                expression: boxed(expression),
                min,
                max,
            }
        }

        match raw {
            RawNode::Literal { value, ignore_case } => Expression::Literal { value, ignore_case },
            RawNode::Class {
                inverted,
                ignore_case,
            } => Expression::CharacterClass {
                inverted,
                ignore_case,
            },
            RawNode::Any {} => Expression::CharacterClass {
                inverted: false,
                ignore_case: false,
            },
            RawNode::RuleRef { name } => Expression::RuleRef { name },
            RawNode::Sequence { elements } => Expression::Sequence {
                elements: elements.into_iter().map(Into::into).collect(),
            },
            RawNode::Choice { alternatives } => Expression::Choice {
                alternatives: alternatives.into_iter().map(Into::into).collect(),
            },
            RawNode::Labeled { label, expression } => Expression::Labeled {
                label,
                expression: boxed(expression),
            },
            RawNode::Action {
                expression,
                return_type,
            } => Expression::Action {
                expression: boxed(expression),
                return_type,
            },
            RawNode::Optional { expression } => repetition(expression, 0, Some(1)),
            RawNode::ZeroOrMore { expression } => repetition(expression, 0, None),
            RawNode::OneOrMore { expression } => repetition(expression, 1, None),
            RawNode::Repeated {
                min,
                max,
                expression,
            } => repetition(expression, min.unwrap_or(0), max),
            RawNode::Group { expression } => Expression::Group {
                expression: boxed(expression),
            },
            RawNode::Text { expression: _ } => Expression::CharacterClass {
                inverted: false,
                ignore_case: false,
            },
            RawNode::Named { expression } => (*expression).into(),
            RawNode::SimpleAnd { expression } => Expression::Predicate {
                kind: PredicateKind::Positive,
                expression: Some(boxed(expression)),
            },
            RawNode::SimpleNot { expression } => Expression::Predicate {
                kind: PredicateKind::Negative,
                expression: Some(boxed(expression)),
            },
            RawNode::SemanticAnd {} => Expression::Predicate {
                kind: PredicateKind::Positive,
                expression: None,
            },
            RawNode::SemanticNot {} => Expression::Predicate {
                kind: PredicateKind::Negative,
                expression: None,
            },
        }
    }
}

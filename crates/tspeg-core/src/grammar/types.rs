//! Grammar type definitions.

use serde::{Deserialize, Serialize};

/// A parsed PEG grammar: an ordered sequence of named rules.
///
/// Rule names are unique within a grammar; [`Grammar::from_json`] rejects
/// duplicates. Definition order is preserved and significant (it decides
/// declaration order of the emitted type aliases and the fallback start
/// rule).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grammar {
    /// Production rules, preserving definition order.
    pub rules: Vec<Rule>,
}

impl Grammar {
    /// Look up a rule by name.
    pub fn rule(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.name == name)
    }

    /// Whether a rule with this name is defined.
    pub fn has_rule(&self, name: &str) -> bool {
        self.rule(name).is_some()
    }
}

/// A named parsing expression within a grammar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rule {
    pub name: String,
    pub expression: Expression,
}

/// One node of a rule's parsing logic.
///
/// Repetition sugar from the host AST (`optional`, `zero_or_more`,
/// `one_or_more`) is normalized to [`Expression::Repetition`] during
/// deserialization, and the four predicate node types collapse into
/// [`Expression::Predicate`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Expression {
    /// Literal token.
    Literal { value: String, ignore_case: bool },
    /// Character class token, e.g. `[0-9]`.
    CharacterClass { inverted: bool, ignore_case: bool },
    /// Reference to another rule by name.
    RuleRef { name: String },
    /// Ordered sequence (all elements must match).
    Sequence { elements: Vec<Expression> },
    /// Ordered choice (first matching alternative wins).
    Choice { alternatives: Vec<Expression> },
    /// Labeled sub-expression; the label binds the value inside actions.
    Labeled {
        label: Option<String>,
        expression: Box<Expression>,
    },
    /// Semantic action. `return_type` is the user-declared result type
    /// annotation, if any; the action code itself is never inspected.
    Action {
        expression: Box<Expression>,
        return_type: Option<String>,
    },
    /// Bounded repetition. `max: None` means unbounded.
    Repetition {
        expression: Box<Expression>,
        min: u32,
        max: Option<u32>,
    },
    /// Look-ahead predicate. Consumes no input and produces no value.
    /// `expression` is `None` for semantic predicates, which carry code
    /// instead of a sub-expression.
    Predicate {
        kind: PredicateKind,
        expression: Option<Box<Expression>>,
    },
    /// Parenthesized sub-expression.
    Group { expression: Box<Expression> },
}

/// Polarity of a look-ahead predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PredicateKind {
    /// `&expr` / `&{...}`: succeed if the operand matches.
    Positive,
    /// `!expr` / `!{...}`: succeed if the operand does not match.
    Negative,
}

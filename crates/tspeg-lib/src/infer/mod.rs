//! Type inference over a grammar's expression tree.
//!
//! # Overview
//!
//! Every rule gets exactly one exported type alias. Alias identifiers are
//! allocated up front for the whole grammar, so rule references resolve to an
//! alias name instead of an expanded type. That single decision is what makes
//! self- and mutually-recursive rules representable: `Expr` can mention
//! `Expr` by name and extraction still terminates.
//!
//! # Design Decisions
//!
//! ## Sequence results
//!
//! Look-ahead predicates consume no input and bind no value, so they are not
//! "effective" sequence elements. A sequence with one effective element has
//! that element's type; with several, the last effective element's type
//! (matching the runtime's sequence-result semantics); with none, the void
//! type.
//!
//! ## The void type
//!
//! A predicate's "no value produced" type is rendered as `undefined`, and it
//! participates in union computation rather than being dropped: `a / !b`
//! infers as `A | undefined`. Dropping it would make a choice that can
//! legitimately yield no value look total.
//!
//! ## Actions
//!
//! An action's result type comes only from its declared annotation; without
//! one it is `any`. The action's operand expression is never consulted —
//! arbitrary action code is outside what this stage can type.

use indexmap::IndexMap;

use tspeg_core::grammar::{Expression, Grammar};
use tspeg_core::ident::to_type_name;

use crate::{ConfigError, Result};

#[cfg(test)]
mod extractor_tests;

const STRING_TYPE: &str = "string";
const ANY_TYPE: &str = "any";
const VOID_TYPE: &str = "undefined";
const UNKNOWN_TYPE: &str = "unknown";

/// Output of type extraction for one grammar.
#[derive(Debug, Clone)]
pub struct Extraction {
    /// One `export type Alias = ...;` line per rule, in declaration order.
    pub declarations: String,
    /// Rule name to alias identifier, in declaration order.
    pub name_map: IndexMap<String, String>,
}

/// Infers a static type for every rule of a grammar.
///
/// Construction allocates the alias identifier for every rule; extraction
/// validates the request's configuration and renders the declarations.
/// Both are deterministic: identical inputs yield byte-identical output.
pub struct TypeExtractor<'g> {
    grammar: &'g Grammar,
    name_map: IndexMap<String, String>,
}

impl<'g> TypeExtractor<'g> {
    pub fn new(grammar: &'g Grammar, camel_case_type_names: bool) -> Self {
        let mut name_map = IndexMap::with_capacity(grammar.rules.len());
        for rule in &grammar.rules {
            let base = to_type_name(&rule.name, camel_case_type_names);
            let mut alias = base.clone();
            let mut suffix = 2u32;
            while name_map.values().any(|taken| *taken == alias) {
                alias = format!("{base}{suffix}");
                suffix += 1;
            }
            name_map.insert(rule.name.clone(), alias);
        }
        Self { grammar, name_map }
    }

    /// Rule name to alias identifier, in grammar declaration order.
    pub fn name_map(&self) -> &IndexMap<String, String> {
        &self.name_map
    }

    /// The alias identifier allocated for a rule.
    pub fn alias(&self, rule_name: &str) -> Option<&str> {
        self.name_map.get(rule_name).map(String::as_str)
    }

    /// Render the per-rule type-alias declarations.
    ///
    /// Fails with a [`ConfigError`] if any allowed start rule or override
    /// name is absent from the grammar; nothing is emitted in that case.
    pub fn extract(
        &self,
        allowed_start_rules: Option<&[String]>,
        type_overrides: &IndexMap<String, String>,
    ) -> Result<Extraction> {
        if let Some(start_rules) = allowed_start_rules {
            for name in start_rules {
                if !self.grammar.has_rule(name) {
                    return Err(ConfigError::UnknownStartRule(name.clone()).into());
                }
            }
        }
        for name in type_overrides.keys() {
            if !self.grammar.has_rule(name) {
                return Err(ConfigError::UnknownTypeOverride(name.clone()).into());
            }
        }

        let mut declarations = String::new();
        for rule in &self.grammar.rules {
            let alias = &self.name_map[&rule.name];
            let ty = match type_overrides.get(&rule.name) {
                // An override replaces inference wholesale; the rule's
                // expression is not traversed at all.
                Some(override_ty) => override_ty.clone(),
                None => self.infer(&rule.expression),
            };
            declarations.push_str("export type ");
            declarations.push_str(alias);
            declarations.push_str(" = ");
            declarations.push_str(&ty);
            declarations.push_str(";\n");
        }

        Ok(Extraction {
            declarations,
            name_map: self.name_map.clone(),
        })
    }

    /// Bottom-up inference over one expression tree.
    fn infer(&self, expression: &Expression) -> String {
        match expression {
            Expression::Literal { .. } | Expression::CharacterClass { .. } => {
                STRING_TYPE.to_string()
            }

            // Never inlined: referring to the alias is what lets recursive
            // rules terminate.
            Expression::RuleRef { name } => self
                .alias(name)
                .map(str::to_string)
                .unwrap_or_else(|| UNKNOWN_TYPE.to_string()),

            Expression::Sequence { elements } => {
                let effective: Vec<&Expression> = elements
                    .iter()
                    .filter(|e| !matches!(e, Expression::Predicate { .. }))
                    .collect();
                match effective.as_slice() {
                    [] => VOID_TYPE.to_string(),
                    [single] => self.infer(single),
                    rest => self.infer(rest[rest.len() - 1]),
                }
            }

            Expression::Choice { alternatives } => {
                let mut members: Vec<String> = Vec::new();
                for alternative in alternatives {
                    let ty = self.infer(alternative);
                    if !members.contains(&ty) {
                        members.push(ty);
                    }
                }
                if members.is_empty() {
                    VOID_TYPE.to_string()
                } else {
                    members.join(" | ")
                }
            }

            // Labels affect action bindings only, not the rule's own type.
            Expression::Labeled { expression, .. } => self.infer(expression),

            Expression::Action { return_type, .. } => match return_type {
                Some(declared) => declared.clone(),
                None => ANY_TYPE.to_string(),
            },

            Expression::Repetition {
                expression,
                min,
                max,
            } => {
                if *min == 1 && *max == Some(1) {
                    self.infer(expression)
                } else {
                    let inner = self.infer(expression);
                    format!("{}[]", wrap_if_union(&inner))
                }
            }

            Expression::Predicate { .. } => VOID_TYPE.to_string(),

            Expression::Group { expression } => self.infer(expression),
        }
    }
}

fn wrap_if_union(type_str: &str) -> String {
    if type_str.contains('|') {
        format!("({type_str})")
    } else {
        type_str.to_string()
    }
}

//! Naming helpers shared by the type extractor and the source splicer.

/// Derive the exported type-alias identifier for a grammar rule.
///
/// With `camel_case` enabled the rule name is normalized to PascalCase;
/// otherwise it is used verbatim. Collision resolution across rules is the
/// extractor's job, not this function's.
pub fn to_type_name(rule_name: &str, camel_case: bool) -> String {
    if camel_case {
        to_pascal_case(rule_name)
    } else {
        rule_name.to_string()
    }
}

/// Convert snake_case, kebab-case, or camelCase to PascalCase.
///
/// Normalizes words separated by `_`, `-`, or `.`. If the input is already
/// PascalCase (starts uppercase, has lowercase, no separators), it is
/// returned unchanged.
///
/// # Examples
/// ```
/// use tspeg_core::ident::to_pascal_case;
/// assert_eq!(to_pascal_case("foo_bar"), "FooBar");
/// assert_eq!(to_pascal_case("fooBar"), "FooBar");
/// assert_eq!(to_pascal_case("FooBar"), "FooBar");  // idempotent
/// ```
pub fn to_pascal_case(s: &str) -> String {
    fn is_separator(c: char) -> bool {
        matches!(c, '_' | '-' | '.')
    }

    let has_separator = s.chars().any(is_separator);
    let has_lowercase = s.chars().any(|c| c.is_ascii_lowercase());
    let starts_uppercase = s.chars().next().is_some_and(|c| c.is_ascii_uppercase());

    // Already PascalCase: starts uppercase, has lowercase, no separators
    if starts_uppercase && has_lowercase && !has_separator {
        return s.to_string();
    }

    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = true;
    for c in s.chars() {
        if is_separator(c) {
            capitalize_next = true;
            continue;
        }
        if capitalize_next {
            result.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }
    result
}

/// Whether `s` is a legal TypeScript identifier: a leading ASCII letter,
/// `_`, or `$`, followed by ASCII alphanumerics, `_`, or `$`.
pub fn is_valid_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_alphabetic() || first == '_' || first == '$') {
        return false;
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

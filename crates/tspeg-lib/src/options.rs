//! Per-request generation options.

use indexmap::IndexMap;
use serde::Deserialize;

/// Default display name for the exported syntax-error type.
pub const DEFAULT_ERROR_NAME: &str = "TspegSyntaxError";

/// Options recognized for one compilation request.
///
/// Deserializable so hosts can pass plugin configuration straight from
/// JSON; field names follow the host's camelCase convention.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TspegOptions {
    /// Emit tracing hooks and re-export the implementation's tracer.
    pub trace: bool,
    /// Forwarded to the host compiler untouched; no effect on this stage.
    pub cache: bool,
    /// Ordered subset of rule names valid as parse entry points.
    /// `None` means every rule is a valid start rule.
    pub allowed_start_rules: Option<Vec<String>>,
    /// Per-rule type overrides: rule name to literal type text. An override
    /// replaces inference for that rule wholesale.
    pub return_types: IndexMap<String, String>,
    /// User-supplied header text placed near the top of the module, ahead
    /// of everything except the suppression-disable comment.
    pub custom_header: Option<String>,
    /// Exported name for the syntax-error type.
    pub error_name: String,
    /// Skip type extraction entirely; the parse function is left untyped.
    pub skip_type_computation: bool,
    /// Emit only the custom header and the rule-type declarations, with no
    /// runtime implementation.
    pub only_generate_grammar_types: bool,
    /// Convert rule names to PascalCase aliases (default). When disabled,
    /// rule names are used verbatim.
    pub camel_case_type_names: bool,
}

impl Default for TspegOptions {
    fn default() -> Self {
        Self {
            trace: false,
            cache: false,
            allowed_start_rules: None,
            return_types: IndexMap::new(),
            custom_header: None,
            error_name: DEFAULT_ERROR_NAME.to_string(),
            skip_type_computation: false,
            only_generate_grammar_types: false,
            camel_case_type_names: true,
        }
    }
}

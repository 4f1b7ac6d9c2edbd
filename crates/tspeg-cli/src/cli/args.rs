//! Shared argument builders for the CLI.
//!
//! Each function returns a `clap::Arg`; `commands.rs` composes them into the
//! final command.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Grammar AST dump to process (positional).
pub fn grammar_path_arg() -> Arg {
    Arg::new("grammar_path")
        .value_name("GRAMMAR")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Grammar AST dump (JSON) produced by the host compiler")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Output file (default: grammar path with a .ts extension)")
}

/// Restrict the valid parse entry points (--allowed-start-rules).
pub fn allowed_start_rules_arg() -> Arg {
    Arg::new("allowed_start_rules")
        .long("allowed-start-rules")
        .value_name("RULES")
        .value_delimiter(',')
        .help("Comma-separated rule names valid as parse entry points")
}

/// Emit tracing hooks (--trace).
pub fn trace_arg() -> Arg {
    Arg::new("trace")
        .long("trace")
        .action(ArgAction::SetTrue)
        .help("Export the implementation's tracer")
}

/// Rule-result caching, forwarded to the host (--cache).
pub fn cache_arg() -> Arg {
    Arg::new("cache")
        .long("cache")
        .action(ArgAction::SetTrue)
        .help("Forward rule-result caching to the host compiler")
}

/// Inline custom header text (--custom-header).
pub fn custom_header_arg() -> Arg {
    Arg::new("custom_header")
        .long("custom-header")
        .value_name("TEXT")
        .help("Header text placed at the top of the generated module")
}

/// Custom header read from a file (--custom-header-file).
pub fn custom_header_file_arg() -> Arg {
    Arg::new("custom_header_file")
        .long("custom-header-file")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Read the custom header from a file (ignored when --custom-header is set)")
}

/// Exported syntax-error type name (--error-name).
pub fn error_name_arg() -> Arg {
    Arg::new("error_name")
        .long("error-name")
        .value_name("NAME")
        .help("Exported name for the syntax-error type")
}

/// The host compiler's generated parser source (--parser-source).
pub fn parser_source_arg() -> Arg {
    Arg::new("parser_source")
        .long("parser-source")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Generated parser expression emitted by the host compiler")
}

/// Emit rule-type declarations only (--types-only).
pub fn types_only_arg() -> Arg {
    Arg::new("types_only")
        .long("types-only")
        .action(ArgAction::SetTrue)
        .help("Emit only the header and the rule-type declarations")
}

//! Command builder for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI. One flat command: read a grammar AST dump, wrap
/// the host's generated parser in a typed module (or emit declarations
/// only), write the result.
pub fn build_cli() -> Command {
    Command::new("tspeg")
        .about("Typed-module generation for PEG parser output")
        .override_usage(
            "\
  tspeg [-o out.ts] --parser-source parser.js grammar.json
  tspeg --types-only grammar.json
  tspeg --allowed-start-rules start,expr --trace grammar.json",
        )
        .after_help(
            r#"EXAMPLES:
  tspeg grammar.json --parser-source parser.js        # typed module next to the grammar
  tspeg grammar.json --types-only -o types.d.ts       # declarations only
  tspeg grammar.json --parser-source parser.js \
        --allowed-start-rules digits --error-name MyError"#,
        )
        .arg(grammar_path_arg())
        .arg(output_file_arg())
        .arg(allowed_start_rules_arg())
        .arg(trace_arg())
        .arg(cache_arg())
        .arg(custom_header_arg())
        .arg(custom_header_file_arg())
        .arg(error_name_arg())
        .arg(parser_source_arg())
        .arg(types_only_arg())
}

//! The generate command: grammar dump in, typed module out.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::exit;

use tspeg_core::grammar::Grammar;
use tspeg_core::source::SourceTree;
use tspeg_lib::{TspegOptions, TypeExtractor, splice};

pub struct GenerateArgs {
    pub grammar_path: PathBuf,
    pub output: Option<PathBuf>,
    pub allowed_start_rules: Option<Vec<String>>,
    pub trace: bool,
    pub cache: bool,
    pub custom_header: Option<String>,
    pub custom_header_file: Option<PathBuf>,
    pub error_name: Option<String>,
    pub parser_source: Option<PathBuf>,
    pub types_only: bool,
}

pub fn run(args: GenerateArgs) {
    let grammar_json = fs::read_to_string(&args.grammar_path).unwrap_or_else(|e| {
        eprintln!(
            "error: failed to read grammar file {}: {e}",
            args.grammar_path.display()
        );
        exit(1);
    });
    let grammar = Grammar::from_json(&grammar_json).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        exit(1);
    });

    let custom_header = match (&args.custom_header, &args.custom_header_file) {
        (Some(text), _) => Some(text.clone()),
        (None, Some(path)) => Some(fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("error: failed to read header file {}: {e}", path.display());
            exit(1);
        })),
        (None, None) => None,
    };

    let mut options = TspegOptions {
        trace: args.trace,
        cache: args.cache,
        allowed_start_rules: args.allowed_start_rules,
        custom_header,
        only_generate_grammar_types: args.types_only,
        ..Default::default()
    };
    if let Some(name) = args.error_name {
        options.error_name = name;
    }

    let extraction = if options.skip_type_computation && !options.only_generate_grammar_types {
        None
    } else {
        let extractor = TypeExtractor::new(&grammar, options.camel_case_type_names);
        let result = extractor
            .extract(options.allowed_start_rules.as_deref(), &options.return_types)
            .unwrap_or_else(|e| {
                eprintln!("error: {e}");
                exit(1);
            });
        Some(result)
    };

    let code = args.parser_source.as_ref().map(|path| {
        let source = fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!(
                "error: failed to read parser source {}: {e}",
                path.display()
            );
            exit(1);
        });
        SourceTree::from_source(&source)
    });

    let module = splice(&grammar, code, extraction.as_ref(), &options).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        exit(1);
    });

    let out_path = args
        .output
        .unwrap_or_else(|| default_output_path(&args.grammar_path));
    fs::write(&out_path, module.to_string()).unwrap_or_else(|e| {
        eprintln!("error: failed to write {}: {e}", out_path.display());
        exit(1);
    });
}

fn default_output_path(grammar_path: &Path) -> PathBuf {
    grammar_path.with_extension("ts")
}

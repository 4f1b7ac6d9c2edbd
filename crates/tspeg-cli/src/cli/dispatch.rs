//! Dispatch logic: extract params from ArgMatches and convert to command
//! args.

use std::path::PathBuf;

use clap::ArgMatches;

use crate::generate::GenerateArgs;

pub struct GenerateParams {
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

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let allowed_start_rules = m
            .get_many::<String>("allowed_start_rules")
            .map(|values| values.cloned().collect());

        Self {
            grammar_path: m
                .get_one::<PathBuf>("grammar_path")
                .cloned()
                .unwrap_or_default(),
            output: m.get_one::<PathBuf>("output").cloned(),
            allowed_start_rules,
            trace: m.get_flag("trace"),
            cache: m.get_flag("cache"),
            custom_header: m.get_one::<String>("custom_header").cloned(),
            custom_header_file: m.get_one::<PathBuf>("custom_header_file").cloned(),
            error_name: m.get_one::<String>("error_name").cloned(),
            parser_source: m.get_one::<PathBuf>("parser_source").cloned(),
            types_only: m.get_flag("types_only"),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        Self {
            grammar_path: p.grammar_path,
            output: p.output,
            allowed_start_rules: p.allowed_start_rules,
            trace: p.trace,
            cache: p.cache,
            custom_header: p.custom_header,
            custom_header_file: p.custom_header_file,
            error_name: p.error_name,
            parser_source: p.parser_source,
            types_only: p.types_only,
        }
    }
}

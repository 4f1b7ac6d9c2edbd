mod cli;
mod generate;

use cli::{GenerateParams, build_cli};

fn main() {
    // Bare invocation prints usage and succeeds; anything else goes through
    // normal argument parsing.
    if std::env::args().len() <= 1 {
        let mut cmd = build_cli();
        let _ = cmd.print_help();
        return;
    }

    let matches = build_cli().get_matches();
    let params = GenerateParams::from_matches(&matches);
    generate::run(params.into());
}

use std::io;
use std::process;

use recipe_search::cli::{self, ParsedArgs};
use recipe_search::{SearchError, Settings};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match cli::parse_args(std::env::args_os()) {
        ParsedArgs::Ready(cli) => Ok(cli),
        ParsedArgs::Invalid(err) => Err(SearchError::from(err)),
        ParsedArgs::Info(info) => {
            // Help and version go to stdout
            let code = if info.print().is_ok() { 0 } else { 1 };
            process::exit(code);
        }
    };

    // Settings resolve first so a missing key wins over a missing query
    let result = Settings::load().and_then(|settings| {
        let cli = args?;
        let stdout = io::stdout();
        cli::run(&cli, &settings, &mut stdout.lock())
    });

    if let Err(err) = result {
        cli::report_error(&err, &mut io::stderr());
        process::exit(err.exit_code());
    }
}

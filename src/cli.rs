use clap::error::ErrorKind;
use clap::Parser;
use log::{error, info, log_enabled, Level};
use std::io::Write;

use crate::client::{QueryEncoding, RecipeClient};
use crate::config::Settings;
use crate::output::render_results;
use crate::SearchError;

/// Search the API Ninjas recipe database
#[derive(Debug, Parser)]
#[command(name = "recipe-search", version, about)]
pub struct Cli {
    /// Search term, e.g. "chicken curry"
    pub query: String,

    /// Insert the query into the URL without percent-encoding it
    #[arg(long)]
    pub raw_query: bool,
}

impl Cli {
    pub fn encoding(&self) -> QueryEncoding {
        if self.raw_query {
            QueryEncoding::Raw
        } else {
            QueryEncoding::Encoded
        }
    }
}

/// Outcome of argument parsing that has to be acted on before settings load
pub enum ParsedArgs {
    /// Arguments are valid
    Ready(Cli),
    /// `--help` or `--version`; print and exit successfully
    Info(clap::Error),
    /// Bad or missing arguments; reported once settings have resolved
    Invalid(clap::Error),
}

pub fn parse_args<I, T>(args: I) -> ParsedArgs
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => ParsedArgs::Ready(cli),
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            ParsedArgs::Info(err)
        }
        Err(err) => ParsedArgs::Invalid(err),
    }
}

/// Run one search and print the results to `out`
pub fn run<W: Write>(cli: &Cli, settings: &Settings, out: &mut W) -> Result<(), SearchError> {
    let client = RecipeClient::new(settings)?.with_encoding(cli.encoding());
    let recipes = client.search(&cli.query)?;
    info!("{} recipes for {:?}", recipes.len(), cli.query);

    render_results(out, &cli.query, &recipes)?;
    out.flush()?;
    Ok(())
}

/// Report a failed run on `stderr`.
///
/// Fatal config errors go through the logger; when logging is switched off
/// they are written directly so the process never exits silently.
pub fn report_error<W: Write>(err: &SearchError, stderr: &mut W) {
    if err.is_fatal() && log_enabled!(Level::Error) {
        error!("{err}");
        return;
    }
    let _ = writeln!(stderr, "{}", err.to_string().trim_end());
}

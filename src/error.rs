use thiserror::Error;

/// Errors that can occur while searching for recipes
#[derive(Error, Debug)]
pub enum SearchError {
    /// The command line was missing the search query
    #[error("{0}")]
    Usage(#[from] clap::Error),

    /// No usable configuration (missing API key, bad `.env` or config file)
    #[error("Configuration error: {0}")]
    Config(String),

    /// The HTTP client or request could not be constructed
    #[error("Error creating request: {0}")]
    RequestBuild(#[source] reqwest::Error),

    /// The request never produced a response (DNS, connect, TLS, ...)
    #[error("Request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The response body could not be read
    #[error("Error reading response body: {0}")]
    Read(#[source] reqwest::Error),

    /// The API answered with anything other than 200 OK
    #[error("Error: {status} {body}")]
    HttpStatus { status: u16, body: String },

    /// The body was not a JSON array of recipes
    #[error("Error decoding JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// Writing results to the output stream failed
    #[error("Error writing output: {0}")]
    Output(#[from] std::io::Error),
}

impl From<config::ConfigError> for SearchError {
    fn from(err: config::ConfigError) -> Self {
        SearchError::Config(err.to_string())
    }
}

impl From<dotenvy::Error> for SearchError {
    fn from(err: dotenvy::Error) -> Self {
        SearchError::Config(format!("failed to read .env: {err}"))
    }
}

impl SearchError {
    /// Config errors abort the process before any other work happens.
    pub fn is_fatal(&self) -> bool {
        matches!(self, SearchError::Config(_))
    }

    pub fn exit_code(&self) -> i32 {
        1
    }
}

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::SearchError;

pub const DEFAULT_BASE_URL: &str = "https://api.api-ninjas.com";
pub const DOTENV_FILE: &str = ".env";
pub const CONFIG_FILE: &str = "recipe-search.toml";
pub const ENV_PREFIX: &str = "RECIPE";

/// Resolved runtime settings for a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Credential sent in the `X-Api-Key` header. Not validated.
    pub api_key: String,
    /// Scheme and host of the API, without the `/v1/recipe` path
    pub base_url: String,
    /// Request timeout; `None` waits indefinitely
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct RawSettings {
    api_key: Option<String>,
    base_url: String,
    timeout_secs: Option<u64>,
}

impl Settings {
    /// Load settings from the working directory and process environment
    ///
    /// Sources, highest priority first:
    /// 1. Process environment (`RECIPE_API_KEY`, `RECIPE_BASE_URL`, `RECIPE_TIMEOUT_SECS`)
    /// 2. `.env` file in the current directory
    /// 3. `recipe-search.toml` in the current directory
    /// 4. Defaults
    pub fn load() -> Result<Self, SearchError> {
        let process_env = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)));
        Self::load_from(Path::new(CONFIG_FILE), Path::new(DOTENV_FILE), process_env)
    }

    /// Load settings from explicit sources instead of the process state.
    ///
    /// Both files are optional. The `.env` entries are overlaid by `env`,
    /// so a variable set in the process wins over the file.
    pub fn load_from<I>(config_file: &Path, dotenv_file: &Path, env: I) -> Result<Self, SearchError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut vars = read_dotenv(dotenv_file)?;
        vars.extend(env);

        let settings = Config::builder()
            .set_default("base_url", DEFAULT_BASE_URL)?
            .add_source(File::from(config_file).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).source(Some(vars)))
            .build()?;

        let raw: RawSettings = settings.try_deserialize()?;
        let api_key = raw.api_key.ok_or_else(|| {
            SearchError::Config(format!(
                "No API key found. Set {ENV_PREFIX}_API_KEY in the environment or in {DOTENV_FILE}"
            ))
        })?;

        Ok(Settings {
            api_key,
            base_url: raw.base_url.trim_end_matches('/').to_string(),
            timeout_secs: raw.timeout_secs,
        })
    }
}

/// Read a `.env` file into a map without touching the process environment.
fn read_dotenv(path: &Path) -> Result<config::Map<String, String>, SearchError> {
    let mut vars = config::Map::new();
    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(err) if err.not_found() => {
            log::debug!("no {} file, skipping", path.display());
            return Ok(vars);
        }
        Err(err) => return Err(err.into()),
    };

    for item in iter {
        let (key, value) = item?;
        vars.insert(key, value);
    }
    Ok(vars)
}

//! Search the API Ninjas recipe database.
//!
//! The binary is a thin wrapper around [`cli::run`]; the pieces are usable
//! on their own:
//!
//! ```no_run
//! use recipe_search::{RecipeClient, Settings};
//!
//! # fn main() -> Result<(), recipe_search::SearchError> {
//! let settings = Settings::load()?;
//! let recipes = RecipeClient::new(&settings)?.search("banana bread")?;
//! for recipe in recipes {
//!     println!("{}", recipe.title);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod output;

pub use crate::client::{QueryEncoding, RecipeClient};
pub use crate::config::Settings;
pub use crate::error::SearchError;
pub use crate::model::Recipe;
pub use crate::output::render_results;

pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::toml_config::TomlConfig;

pub use adapters::{CocktailDbClient, YouTubeClient};
pub use app::{CupSession, DrinkReport};
pub use core::recommend::Recommender;
pub use core::standardizer::CupStandardizer;
pub use utils::error::{CupError, Result};

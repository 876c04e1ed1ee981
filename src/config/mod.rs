pub mod toml_config;

#[cfg(feature = "cli")]
use crate::adapters::cocktail_db::DEFAULT_COCKTAIL_DB_URL;
#[cfg(feature = "cli")]
use crate::adapters::youtube::DEFAULT_YOUTUBE_API_URL;
#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::domain::model::Preferences;
#[cfg(feature = "cli")]
use crate::utils::error::{CupError, Result};
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "cli")]
use std::time::Duration;

/// Upper bound for `max_results`; each result costs one detail request.
pub const MAX_RESULTS_LIMIT: usize = 25;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "red-solo-cup")]
#[command(about = "Cocktail recommendations, cup breakdowns and BAC estimates")]
pub struct CliConfig {
    /// Alcohols you have, comma separated (e.g. vodka,rum)
    #[arg(long, value_delimiter = ',')]
    pub alcohols: Vec<String>,

    /// Mixers you have, comma separated (e.g. coke,orange juice)
    #[arg(long, value_delimiter = ',')]
    pub mixers: Vec<String>,

    /// Average weight of the drinkers in pounds
    #[arg(long)]
    pub weight_lbs: Option<f64>,

    #[arg(long, default_value = "5")]
    pub max_results: usize,

    /// Cup size in ounces that recipes are scaled to
    #[arg(long, default_value = "16.0")]
    pub cup_size: f64,

    /// Which recommendation (1-based) to show in detail
    #[arg(long, default_value = "1")]
    pub select: usize,

    #[arg(long, default_value = DEFAULT_COCKTAIL_DB_URL)]
    pub api_endpoint: String,

    #[arg(long, default_value = "10")]
    pub timeout_seconds: u64,

    #[arg(long, env = "YOUTUBE_API_KEY", hide_env_values = true)]
    pub youtube_api_key: Option<String>,

    #[arg(long, default_value = DEFAULT_YOUTUBE_API_URL)]
    pub youtube_endpoint: String,

    /// List mixers that go with --alcohols instead of recommending
    #[arg(long)]
    pub list_mixers: bool,

    /// List every ingredient the recipe database knows
    #[arg(long)]
    pub list_ingredients: bool,

    /// Print reports as JSON
    #[arg(long)]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn preferences(&self) -> Result<Preferences> {
        let weight_lbs = self.weight_lbs.ok_or_else(|| CupError::MissingConfigError {
            field: "weight_lbs".to_string(),
        })?;
        validation::validate_positive_float("weight_lbs", weight_lbs)?;

        Ok(Preferences {
            alcohol_types: Preferences::parse_list(&self.alcohols.join(",")),
            mixers: Preferences::parse_list(&self.mixers.join(",")),
            weight_lbs,
        })
    }

    fn recommends(&self) -> bool {
        !self.list_mixers && !self.list_ingredients
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    fn cup_size_oz(&self) -> f64 {
        self.cup_size
    }

    fn max_results(&self) -> usize {
        self.max_results
    }

    fn youtube_endpoint(&self) -> &str {
        &self.youtube_endpoint
    }

    fn youtube_api_key(&self) -> Option<&str> {
        self.youtube_api_key.as_deref().filter(|k| !k.trim().is_empty())
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api_endpoint", &self.api_endpoint)?;
        validation::validate_url("youtube_endpoint", &self.youtube_endpoint)?;
        validation::validate_positive_number("timeout_seconds", self.timeout_seconds as usize, 1)?;

        if self.list_ingredients {
            return Ok(());
        }
        validation::validate_non_empty_list("alcohols", &self.alcohols)?;
        if !self.recommends() {
            return Ok(());
        }

        validation::validate_positive_float("cup_size", self.cup_size)?;
        validation::validate_range("max_results", self.max_results, 1, MAX_RESULTS_LIMIT)?;
        validation::validate_range("select", self.select, 1, self.max_results)?;
        self.preferences().map(|_| ())
    }
}

use crate::adapters::cocktail_db::DEFAULT_COCKTAIL_DB_URL;
use crate::adapters::youtube::DEFAULT_YOUTUBE_API_URL;
use crate::config::MAX_RESULTS_LIMIT;
use crate::core::standardizer::DEFAULT_CUP_SIZE_OZ;
use crate::core::ConfigProvider;
use crate::domain::model::Preferences;
use crate::utils::error::{CupError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub cup: CupConfig,
    #[serde(default)]
    pub recommend: RecommendConfig,
    pub preferences: PreferencesConfig,
    pub tutorial: Option<TutorialConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub endpoint: String,
    pub timeout_seconds: Option<u64>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_COCKTAIL_DB_URL.to_string(),
            timeout_seconds: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CupConfig {
    pub size_oz: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendConfig {
    pub max_results: Option<usize>,
    pub select: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferencesConfig {
    pub alcohols: Vec<String>,
    #[serde(default)]
    pub mixers: Vec<String>,
    pub weight_lbs: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TutorialConfig {
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CupError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CupError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value. Unset variables are
    /// left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CupError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_url("source.endpoint", &self.source.endpoint)?;
        validation::validate_url("tutorial.endpoint", self.youtube_endpoint())?;
        if let Some(timeout) = self.source.timeout_seconds {
            validation::validate_positive_number("source.timeout_seconds", timeout as usize, 1)?;
        }

        validation::validate_positive_float("cup.size_oz", self.cup_size_oz())?;
        validation::validate_range("recommend.max_results", self.max_results(), 1, MAX_RESULTS_LIMIT)?;
        validation::validate_range("recommend.select", self.select(), 1, self.max_results())?;

        validation::validate_non_empty_list("preferences.alcohols", &self.preferences.alcohols)?;
        validation::validate_positive_float("preferences.weight_lbs", self.preferences.weight_lbs)?;
        Ok(())
    }

    /// 1-based index of the recommendation to show in detail.
    pub fn select(&self) -> usize {
        self.recommend.select.unwrap_or(1)
    }

    pub fn preferences(&self) -> Preferences {
        Preferences {
            alcohol_types: Preferences::parse_list(&self.preferences.alcohols.join(",")),
            mixers: Preferences::parse_list(&self.preferences.mixers.join(",")),
            weight_lbs: self.preferences.weight_lbs,
        }
    }
}

impl ConfigProvider for TomlConfig {
    fn api_endpoint(&self) -> &str {
        &self.source.endpoint
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.source.timeout_seconds.unwrap_or(10))
    }

    fn cup_size_oz(&self) -> f64 {
        self.cup.size_oz.unwrap_or(DEFAULT_CUP_SIZE_OZ)
    }

    fn max_results(&self) -> usize {
        self.recommend.max_results.unwrap_or(5)
    }

    fn youtube_endpoint(&self) -> &str {
        self.tutorial
            .as_ref()
            .and_then(|t| t.endpoint.as_deref())
            .unwrap_or(DEFAULT_YOUTUBE_API_URL)
    }

    /// An unsubstituted `${VAR}` placeholder counts as no key.
    fn youtube_api_key(&self) -> Option<&str> {
        self.tutorial
            .as_ref()
            .and_then(|t| t.api_key.as_deref())
            .map(str::trim)
            .filter(|k| !k.is_empty() && !k.starts_with("${"))
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

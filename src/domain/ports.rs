use crate::domain::model::{DrinkSummary, Recipe, TutorialLookup};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// The external recipe database. An `Err` from any method means "no data";
/// callers skip rather than abort.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    async fn drinks_by_ingredient(&self, keyword: &str) -> Result<Vec<DrinkSummary>>;
    async fn drink_detail(&self, id: &str) -> Result<Option<Recipe>>;
    async fn ingredient_catalog(&self) -> Result<Vec<String>>;
}

#[async_trait]
pub trait TutorialSource: Send + Sync {
    async fn find_tutorial(&self, cocktail_name: &str) -> TutorialLookup;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn cup_size_oz(&self) -> f64;
    fn max_results(&self) -> usize;
    fn youtube_endpoint(&self) -> &str;
    fn youtube_api_key(&self) -> Option<&str>;
}

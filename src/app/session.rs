use crate::app::report::DrinkReport;
use crate::core::recommend::Recommender;
use crate::domain::model::Preferences;
use crate::domain::ports::{RecipeSource, TutorialSource};
use crate::utils::error::{CupError, Result};

/// One recommend-then-pick round for a single set of preferences.
pub struct CupSession<S: RecipeSource, T: TutorialSource> {
    recommender: Recommender<S>,
    tutorials: T,
    cup_size_oz: f64,
}

impl<S: RecipeSource, T: TutorialSource> CupSession<S, T> {
    pub fn new(source: S, tutorials: T, cup_size_oz: f64) -> Self {
        Self {
            recommender: Recommender::new(source),
            tutorials,
            cup_size_oz,
        }
    }

    pub fn recommender(&self) -> &Recommender<S> {
        &self.recommender
    }

    pub async fn recommendations(
        &self,
        prefs: &Preferences,
        max_results: usize,
    ) -> Result<Vec<DrinkReport>> {
        tracing::info!(
            "Looking for drinks with {:?} (mixers: {:?})",
            prefs.alcohol_types,
            prefs.mixers
        );
        let recipes = self
            .recommender
            .recommend(&prefs.alcohol_types, &prefs.mixers, max_results)
            .await;

        recipes
            .iter()
            .map(|recipe| DrinkReport::build(recipe, prefs, self.cup_size_oz))
            .collect()
    }

    /// `position` is 1-based, as shown in the listing.
    pub async fn select(&self, reports: &[DrinkReport], position: usize) -> Result<DrinkReport> {
        let report = position
            .checked_sub(1)
            .and_then(|index| reports.get(index))
            .ok_or_else(|| {
                CupError::invalid_argument(
                    "select",
                    position,
                    &format!("choose a drink between 1 and {}", reports.len()),
                )
            })?;

        tracing::debug!("Fetching tutorial for '{}'", report.name);
        let tutorial = self.tutorials.find_tutorial(&report.name).await;
        Ok(report.clone().with_tutorial(tutorial))
    }
}

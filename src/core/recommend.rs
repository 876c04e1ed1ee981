//! Picks cocktails for the alcohols and mixers a user has on hand.

use crate::domain::model::{DrinkSummary, Recipe};
use crate::domain::ports::RecipeSource;
use std::collections::{BTreeSet, HashSet};

/// Names that refer to the same mixer. Membership is symmetric.
const ALIAS_GROUPS: &[&[&str]] = &[
    &["cola", "coke", "coca-cola", "coca cola"],
    &["orange juice", "oj", "orange"],
    &["lemon juice", "lemon"],
    &["lime juice", "lime"],
    &["sugar", "sugar syrup", "syrup", "simple syrup"],
    &["soda", "soda water", "club soda", "carbonated water"],
    &["tonic", "tonic water"],
    &["sprite", "7-up", "lemon-lime soda"],
];

/// Drink ids already handled during one call. Owned by that call only.
#[derive(Debug, Default)]
pub struct SeenDrinks {
    ids: HashSet<String>,
}

impl SeenDrinks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the id was already seen.
    pub fn insert(&mut self, id: &str) -> bool {
        self.ids.insert(id.to_string())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

fn are_aliases(a: &str, b: &str) -> bool {
    ALIAS_GROUPS
        .iter()
        .any(|group| group.contains(&a) && group.contains(&b))
}

fn shares_word(a: &str, b: &str) -> bool {
    let words: HashSet<&str> = a.split_whitespace().collect();
    b.split_whitespace().any(|word| words.contains(word))
}

/// True when no mixers were asked for, or any requested mixer aliases,
/// substring-matches or shares a word with a recipe ingredient.
pub fn drink_matches_mixers<M: AsRef<str>>(recipe: &Recipe, mixers: &[M]) -> bool {
    let mixers: Vec<String> = mixers
        .iter()
        .map(|m| m.as_ref().trim().to_lowercase())
        .filter(|m| !m.is_empty())
        .collect();
    if mixers.is_empty() {
        return true;
    }

    recipe.filled_slots().any(|slot| {
        let ingredient = slot.name.trim().to_lowercase();
        mixers.iter().any(|mixer| {
            are_aliases(mixer, &ingredient)
                || ingredient.contains(mixer.as_str())
                || mixer.contains(ingredient.as_str())
                || shares_word(mixer, &ingredient)
        })
    })
}

pub struct Recommender<S: RecipeSource> {
    source: S,
}

impl<S: RecipeSource> Recommender<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Walks alcohols in the given order and keeps source order within each.
    /// Never returns more than `max_results` recipes or a repeated id.
    pub async fn recommend<A: AsRef<str>, M: AsRef<str>>(
        &self,
        alcohol_types: &[A],
        mixers: &[M],
        max_results: usize,
    ) -> Vec<Recipe> {
        let mut results = Vec::new();
        if max_results == 0 {
            return results;
        }
        let mut seen = SeenDrinks::new();

        for alcohol in alcohol_types {
            let alcohol = alcohol.as_ref();
            for candidate in self.candidates(alcohol).await {
                if !seen.insert(&candidate.id) {
                    continue;
                }
                let Some(recipe) = self.detail(&candidate.id).await else {
                    continue;
                };
                if !drink_matches_mixers(&recipe, mixers) {
                    tracing::debug!("'{}' has none of the requested mixers", recipe.name);
                    continue;
                }

                results.push(recipe);
                if results.len() >= max_results {
                    tracing::info!("Collected {} recommendations", results.len());
                    return results;
                }
            }
        }

        tracing::info!(
            "Collected {} recommendations from {} candidates",
            results.len(),
            seen.len()
        );
        results
    }

    /// Every ingredient used alongside the given alcohols, except the
    /// alcohols themselves. Sorted, lowercase, unique.
    pub async fn compatible_mixers<A: AsRef<str>>(&self, alcohols: &[A]) -> Vec<String> {
        let requested: Vec<String> = alcohols
            .iter()
            .map(|a| a.as_ref().trim().to_lowercase())
            .filter(|a| !a.is_empty())
            .collect();

        let mut seen = SeenDrinks::new();
        let mut mixers = BTreeSet::new();

        for alcohol in &requested {
            for candidate in self.candidates(alcohol).await {
                if !seen.insert(&candidate.id) {
                    continue;
                }
                let Some(recipe) = self.detail(&candidate.id).await else {
                    continue;
                };
                for slot in recipe.filled_slots() {
                    let ingredient = slot.name.trim().to_lowercase();
                    if !requested.contains(&ingredient) {
                        mixers.insert(ingredient);
                    }
                }
            }
        }

        mixers.into_iter().collect()
    }

    /// Re-fetches a previously returned result set by id, in order.
    pub async fn recall<I: AsRef<str>>(&self, ids: &[I]) -> Vec<Recipe> {
        let mut recipes = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(recipe) = self.detail(id.as_ref()).await {
                recipes.push(recipe);
            }
        }
        recipes
    }

    async fn candidates(&self, alcohol: &str) -> Vec<DrinkSummary> {
        match self.source.drinks_by_ingredient(alcohol).await {
            Ok(drinks) => {
                tracing::debug!("{} candidate drinks for '{}'", drinks.len(), alcohol);
                drinks
            }
            Err(e) => {
                tracing::warn!("Skipping '{}': lookup failed: {}", alcohol, e);
                Vec::new()
            }
        }
    }

    async fn detail(&self, id: &str) -> Option<Recipe> {
        match self.source.drink_detail(id).await {
            Ok(Some(recipe)) => Some(recipe),
            Ok(None) => {
                tracing::warn!("Skipping drink {}: no detail record", id);
                None
            }
            Err(e) => {
                tracing::warn!("Skipping drink {}: detail fetch failed: {}", id, e);
                None
            }
        }
    }
}

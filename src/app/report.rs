use crate::adapters::youtube::tutorial_search_url;
use crate::app::render::{render_cup, render_tipsiness_bar};
use crate::core::bac::estimate_bac;
use crate::core::standardizer::CupStandardizer;
use crate::domain::model::{BacEstimate, CupBreakdown, Preferences, Recipe, TutorialLookup};
use crate::utils::error::Result;
use serde::Serialize;
use std::fmt::Write;

/// Everything the presentation layer shows for one drink.
#[derive(Debug, Clone, Serialize)]
pub struct DrinkReport {
    pub id: String,
    pub name: String,
    pub thumbnail: Option<String>,
    pub instructions: String,
    pub ingredient_lines: Vec<String>,
    pub cup_size_oz: f64,
    pub breakdown: CupBreakdown,
    pub bac: BacEstimate,
    pub tutorial_url: String,
    pub tutorial: Option<TutorialLookup>,
}

impl DrinkReport {
    /// The user's alcohol list doubles as the BAC keyword list.
    pub fn build(recipe: &Recipe, prefs: &Preferences, cup_size_oz: f64) -> Result<Self> {
        let breakdown = CupStandardizer::default().breakdown(recipe, cup_size_oz)?;
        let bac = estimate_bac(recipe, prefs.weight_lbs, &prefs.alcohol_types)?;

        Ok(Self {
            id: recipe.id.clone(),
            name: recipe.name.clone(),
            thumbnail: recipe.thumbnail.clone(),
            instructions: recipe.instructions.clone(),
            ingredient_lines: recipe.display_lines(),
            cup_size_oz,
            breakdown,
            bac,
            tutorial_url: tutorial_search_url(&recipe.name),
            tutorial: None,
        })
    }

    pub fn with_tutorial(mut self, tutorial: TutorialLookup) -> Self {
        self.tutorial = Some(tutorial);
        self
    }

    /// Short listing entry used for the recommendation list.
    pub fn render_summary(&self, position: usize) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}. {}", position, self.name);
        let _ = writeln!(out, "Ingredients:");
        for line in &self.ingredient_lines {
            let _ = writeln!(out, "  {}", line);
        }
        let _ = writeln!(out, "Instructions: {}", self.instructions);
        out.push_str(&render_tipsiness_bar(self.bac, &self.name));
        out
    }

    pub fn render_detail(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "You selected: {}", self.name);
        if let Some(thumbnail) = &self.thumbnail {
            let _ = writeln!(out, "Picture: {}", thumbnail);
        }
        match self.tutorial.as_ref().and_then(TutorialLookup::embed_url) {
            Some(embed) => {
                let _ = writeln!(out, "Video tutorial: {}", embed);
            }
            None => {
                let _ = writeln!(out, "YouTube tutorial: {}", self.tutorial_url);
            }
        }
        out.push('\n');
        if self.breakdown.liquids.is_empty() {
            let _ = writeln!(out, "No measurable liquids in this recipe.");
        } else {
            out.push_str(&render_cup(&self.breakdown, self.cup_size_oz));
        }
        out.push('\n');
        out.push_str(&render_tipsiness_bar(self.bac, &self.name));
        out
    }
}

//! Rescales a recipe's liquids so they fill one serving cup exactly.

use crate::core::classifier::{is_garnish, is_solid, GarnishContext, GarnishRule, DEFAULT_GARNISH_RULES};
use crate::core::inference::{infer_amounts_with, InferenceRule, DEFAULT_INFERENCE_RULES};
use crate::core::measurement::{is_ice_name, mentions_ice_word};
use crate::domain::model::{CupBreakdown, Recipe, SolidIngredient, StandardizedIngredient};
use crate::utils::error::Result;
use crate::utils::validation::validate_positive_float;

pub const DEFAULT_CUP_SIZE_OZ: f64 = 16.0;

/// Standardizer with its garnish and inference rule tables.
#[derive(Clone)]
pub struct CupStandardizer {
    garnish_rules: Vec<GarnishRule>,
    inference_rules: Vec<InferenceRule>,
}

impl Default for CupStandardizer {
    fn default() -> Self {
        Self {
            garnish_rules: DEFAULT_GARNISH_RULES.to_vec(),
            inference_rules: DEFAULT_INFERENCE_RULES.to_vec(),
        }
    }
}

impl CupStandardizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_garnish_rule(mut self, rule: GarnishRule) -> Self {
        self.garnish_rules.push(rule);
        self
    }

    pub fn with_inference_rule(mut self, rule: InferenceRule) -> Self {
        self.inference_rules.push(rule);
        self
    }

    pub fn standardize(&self, recipe: &Recipe, container_size: f64) -> Result<Vec<StandardizedIngredient>> {
        Ok(self.breakdown(recipe, container_size)?.liquids)
    }

    /// Liquids scaled to `container_size`, plus the solids and garnishes
    /// that were kept out of the volume math.
    pub fn breakdown(&self, recipe: &Recipe, container_size: f64) -> Result<CupBreakdown> {
        validate_positive_float("container_size", container_size)?;

        let mut breakdown = CupBreakdown::default();
        let mut liquids: Vec<(&str, &str)> = Vec::new();

        for slot in recipe.filled_slots() {
            let name = slot.name.trim();
            let ctx = GarnishContext::new(&recipe.name, name, slot.measure_text());
            let passthrough = SolidIngredient {
                name: name.to_string(),
                measure: slot.measure.clone(),
            };

            if is_garnish(&self.garnish_rules, &ctx) {
                breakdown.garnishes.push(passthrough);
            } else if is_solid(name) {
                breakdown.solids.push(passthrough);
            } else {
                liquids.push((name, slot.measure_text()));
            }
        }

        let amounts = infer_amounts_with(&self.inference_rules, &liquids, &recipe.name, container_size);
        let total: f64 = amounts.iter().map(|a| a.ounces).sum();
        if total <= 0.0 {
            return Ok(breakdown);
        }

        let ice_index = amounts.iter().position(|a| is_ice_name(&a.name));
        let scaled: Vec<f64> = match (detect_ice_proportion(&recipe.instructions), ice_index) {
            (Some(proportion), Some(ice_index)) => {
                let ice_ounces = proportion * container_size;
                let others_total: f64 = amounts
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| *i != ice_index)
                    .map(|(_, a)| a.ounces)
                    .sum();
                if others_total > 0.0 {
                    let factor = (container_size - ice_ounces) / others_total;
                    amounts
                        .iter()
                        .enumerate()
                        .map(|(i, a)| if i == ice_index { ice_ounces } else { a.ounces * factor })
                        .collect()
                } else {
                    let factor = container_size / total;
                    amounts.iter().map(|a| a.ounces * factor).collect()
                }
            }
            _ => {
                let factor = container_size / total;
                amounts.iter().map(|a| a.ounces * factor).collect()
            }
        };

        let mut percentages: Vec<f64> = scaled.iter().map(|oz| oz / container_size * 100.0).collect();
        if let Some((last, rest)) = percentages.split_last_mut() {
            *last = 100.0 - rest.iter().sum::<f64>();
        }

        breakdown.liquids = amounts
            .into_iter()
            .zip(scaled)
            .zip(percentages)
            .map(|((amount, ounces), percentage)| StandardizedIngredient {
                name: amount.name,
                ounces,
                percentage,
            })
            .collect();

        Ok(breakdown)
    }
}

pub fn standardize(recipe: &Recipe, container_size: f64) -> Result<Vec<StandardizedIngredient>> {
    CupStandardizer::default().standardize(recipe, container_size)
}

/// Share of the cup the instructions reserve for ice, if they say so.
pub fn detect_ice_proportion(instructions: &str) -> Option<f64> {
    if !mentions_ice_word(instructions) {
        return None;
    }
    let text = instructions.to_lowercase();
    let mentions_half = text.contains("half") || text.contains("1/2");

    if text.contains("half") {
        Some(0.5)
    } else if text.contains("fill") {
        Some(if mentions_half { 0.5 } else { 0.75 })
    } else if text.contains("top") || text.contains("quarter") {
        Some(0.25)
    } else {
        None
    }
}

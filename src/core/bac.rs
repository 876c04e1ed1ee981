//! Educational blood-alcohol estimate for one serving. Not medical advice.

use crate::core::measurement::ounces_or_zero;
use crate::domain::model::{BacEstimate, Recipe};
use crate::utils::error::Result;
use crate::utils::validation::validate_positive_float;

/// Every alcoholic ingredient is assumed to be a 40% ABV spirit.
const ASSUMED_ABV: f64 = 0.4;
const ETHANOL_OZ_PER_STANDARD_DRINK: f64 = 0.6;
const WIDMARK_CONSTANT: f64 = 5.14;
const DISTRIBUTION_RATIO: f64 = 0.7;

pub fn estimate_bac<K: AsRef<str>>(
    recipe: &Recipe,
    body_weight_lbs: f64,
    alcohol_keywords: &[K],
) -> Result<BacEstimate> {
    validate_positive_float("body_weight_lbs", body_weight_lbs)?;

    let keywords: Vec<String> = alcohol_keywords
        .iter()
        .map(|kw| kw.as_ref().trim().to_lowercase())
        .filter(|kw| !kw.is_empty())
        .collect();

    let alcohol_oz: f64 = recipe
        .filled_slots()
        .filter(|slot| {
            let name = slot.name.to_lowercase();
            keywords.iter().any(|kw| name.contains(kw.as_str()))
        })
        .map(|slot| ounces_or_zero(slot.measure_text()))
        .sum();

    if alcohol_oz <= 0.0 {
        return Ok(BacEstimate::Unmeasurable);
    }

    let ethanol_oz = alcohol_oz * ASSUMED_ABV;
    let standard_drinks = ethanol_oz / ETHANOL_OZ_PER_STANDARD_DRINK;
    let bac = standard_drinks * WIDMARK_CONSTANT / (body_weight_lbs * DISTRIBUTION_RATIO);
    Ok(BacEstimate::Estimated(bac))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipsinessLevel {
    VeryLight,
    LightBuzz,
    Tipsy,
    UnsafeToDrive,
}

impl TipsinessLevel {
    pub fn from_bac(bac: f64) -> Self {
        if bac < 0.02 {
            TipsinessLevel::VeryLight
        } else if bac < 0.05 {
            TipsinessLevel::LightBuzz
        } else if bac < 0.08 {
            TipsinessLevel::Tipsy
        } else {
            TipsinessLevel::UnsafeToDrive
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TipsinessLevel::VeryLight => "Very light effect",
            TipsinessLevel::LightBuzz => "Light buzz",
            TipsinessLevel::Tipsy => "Tipsy",
            TipsinessLevel::UnsafeToDrive => "Unsafe to drive",
        }
    }
}

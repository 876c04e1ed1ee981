use serde::{Deserialize, Serialize};

/// Recipe records expose at most this many ingredient slots.
pub const MAX_INGREDIENT_SLOTS: usize = 15;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientSlot {
    pub name: String,
    pub measure: Option<String>,
}

impl IngredientSlot {
    pub fn measure_text(&self) -> &str {
        self.measure.as_deref().unwrap_or("")
    }

    /// "<measure> <ingredient>", the way the recipe card lists it.
    pub fn display_line(&self) -> String {
        format!("{} {}", self.measure_text().trim(), self.name.trim())
            .trim()
            .to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub instructions: String,
    pub thumbnail: Option<String>,
    pub ingredients: Vec<IngredientSlot>,
}

impl Recipe {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            instructions: String::new(),
            thumbnail: None,
            ingredients: Vec::new(),
        }
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }

    pub fn with_ingredient(mut self, name: impl Into<String>, measure: Option<&str>) -> Self {
        self.ingredients.push(IngredientSlot {
            name: name.into(),
            measure: measure.map(str::to_string),
        });
        self
    }

    /// Slots whose ingredient name is not blank.
    pub fn filled_slots(&self) -> impl Iterator<Item = &IngredientSlot> {
        self.ingredients
            .iter()
            .filter(|slot| !slot.name.trim().is_empty())
    }

    pub fn display_lines(&self) -> Vec<String> {
        self.filled_slots().map(IngredientSlot::display_line).collect()
    }
}

/// One row of a category lookup, before the detail fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrinkSummary {
    pub id: String,
    pub name: Option<String>,
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardizedIngredient {
    pub name: String,
    pub ounces: f64,
    pub percentage: f64,
}

/// Solids keep their original measurement text and are never rescaled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolidIngredient {
    pub name: String,
    pub measure: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CupBreakdown {
    pub liquids: Vec<StandardizedIngredient>,
    pub solids: Vec<SolidIngredient>,
    pub garnishes: Vec<SolidIngredient>,
}

impl CupBreakdown {
    pub fn total_liquid_ounces(&self) -> f64 {
        self.liquids.iter().map(|l| l.ounces).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BacEstimate {
    Estimated(f64),
    /// No ingredient matched the alcohol keywords with a usable volume.
    Unmeasurable,
}

impl BacEstimate {
    pub fn value(&self) -> Option<f64> {
        match self {
            BacEstimate::Estimated(bac) => Some(*bac),
            BacEstimate::Unmeasurable => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    pub alcohol_types: Vec<String>,
    pub mixers: Vec<String>,
    pub weight_lbs: f64,
}

impl Preferences {
    /// Splits comma separated user input into trimmed, lowercase entries.
    pub fn parse_list(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(|item| item.trim().to_lowercase())
            .filter(|item| !item.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TutorialLookup {
    pub video_id: Option<String>,
    pub video_title: Option<String>,
    pub video_description: Option<String>,
    pub search_query: String,
    pub api_key_missing: bool,
}

impl TutorialLookup {
    pub fn embed_url(&self) -> Option<String> {
        self.video_id
            .as_ref()
            .map(|id| format!("https://www.youtube.com/embed/{}", id))
    }
}

//! Solid/liquid classification and the garnish rule table.

use crate::core::measurement::{mentions_garnish, parse_number};

const SOLID_KEYWORDS: &[&str] = &[
    "sugar", "salt", "syrup", "honey", "extract", "bitters", "cream", "milk", "mint", "fruit",
    "cherry", "olive", "onion", "celery", "cucumber", "ginger", "pepper", "powder",
];

/// Any of these makes the ingredient a liquid, whatever solid keyword it also contains.
const LIQUID_INDICATORS: &[&str] = &[
    "juice", "ade", "soda", "cola", "beer", "wine", "water", "tonic", "vodka", "tequila",
    "whiskey", "whisky", "bourbon", "scotch", "brandy", "cognac", "vermouth", "liqueur",
    "schnapps", "champagne", "prosecco", "cider", "mezcal", "absinthe",
];

/// Short names that hide inside other words ("ginger", "virgin", "drum"),
/// so they only count as whole words.
const LIQUID_WORDS: &[&str] = &["rum", "gin", "ale"];

const CITRUS: &[&str] = &["lemon", "lime", "orange", "grapefruit"];
const WHOLE_CITRUS_MAX_COUNT: f64 = 2.0;

/// Case-insensitive substring classification of an ingredient name.
pub fn is_solid(name: &str) -> bool {
    let name = name.trim().to_lowercase();
    if LIQUID_INDICATORS.iter().any(|kw| name.contains(kw)) {
        return false;
    }
    if name
        .split(|c: char| !c.is_alphanumeric())
        .any(|word| LIQUID_WORDS.contains(&word))
    {
        return false;
    }
    SOLID_KEYWORDS.iter().any(|kw| name.contains(kw))
}

/// What a garnish rule gets to look at. All fields are trimmed and lowercase.
#[derive(Debug, Clone)]
pub struct GarnishContext {
    pub recipe_name: String,
    pub ingredient: String,
    pub measure: String,
}

impl GarnishContext {
    pub fn new(recipe_name: &str, ingredient: &str, measure: &str) -> Self {
        Self {
            recipe_name: recipe_name.trim().to_lowercase(),
            ingredient: ingredient.trim().to_lowercase(),
            measure: measure.trim().to_lowercase(),
        }
    }
}

#[derive(Clone, Copy)]
pub struct GarnishRule {
    pub name: &'static str,
    pub applies: fn(&GarnishContext) -> bool,
}

/// Checked in order; the first match marks the slot as garnish.
pub const DEFAULT_GARNISH_RULES: &[GarnishRule] = &[
    GarnishRule {
        name: "garnish wording",
        applies: garnish_wording,
    },
    GarnishRule {
        name: "long island lemon",
        applies: long_island_lemon,
    },
    GarnishRule {
        name: "whole citrus count",
        applies: whole_citrus_count,
    },
];

pub fn is_garnish(rules: &[GarnishRule], ctx: &GarnishContext) -> bool {
    rules.iter().any(|rule| (rule.applies)(ctx))
}

fn garnish_wording(ctx: &GarnishContext) -> bool {
    mentions_garnish(&ctx.measure) || mentions_garnish(&ctx.ingredient)
}

fn long_island_lemon(ctx: &GarnishContext) -> bool {
    ctx.recipe_name.contains("long island") && ctx.ingredient == "lemon"
}

/// "1" or "2" next to a whole lemon/lime is a count of fruit, not ounces.
fn whole_citrus_count(ctx: &GarnishContext) -> bool {
    let Some(count) = parse_number(&ctx.measure) else {
        return false;
    };
    count <= WHOLE_CITRUS_MAX_COUNT
        && !ctx.ingredient.contains("juice")
        && CITRUS.iter().any(|fruit| ctx.ingredient.contains(fruit))
}

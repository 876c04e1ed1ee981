//! Fills in ounces for liquid ingredients that came without a usable measure.

use crate::core::measurement::parse_ingredient_volume;

#[derive(Debug, Clone, PartialEq)]
pub struct InferredAmount {
    pub name: String,
    pub ounces: f64,
    /// True when the amount came from a rule rather than the recipe text.
    pub inferred: bool,
}

/// Recipe-wide facts a rule can base its guess on.
#[derive(Debug, Clone)]
pub struct InferenceContext {
    /// Lowercase display name of the cocktail.
    pub cocktail_name: String,
    pub specified_count: usize,
    pub missing_count: usize,
    pub specified_total: f64,
    pub container_size: f64,
}

impl InferenceContext {
    fn remaining(&self) -> f64 {
        (self.container_size - self.specified_total).max(0.0)
    }
}

/// `fill` returns the ounces given to each missing ingredient.
#[derive(Clone, Copy)]
pub struct InferenceRule {
    pub name: &'static str,
    pub applies: fn(&InferenceContext) -> bool,
    pub fill: fn(&InferenceContext) -> f64,
}

/// Named conventions, tried in order before the even split.
pub const DEFAULT_INFERENCE_RULES: &[InferenceRule] = &[InferenceRule {
    name: "mimosa half and half",
    applies: mimosa_applies,
    fill: mimosa_fill,
}];

fn mimosa_applies(ctx: &InferenceContext) -> bool {
    ctx.cocktail_name.contains("mimosa") && ctx.specified_count == 1 && ctx.missing_count == 1
}

// Only an even 50/50 split at the default 16 oz container.
fn mimosa_fill(ctx: &InferenceContext) -> f64 {
    ctx.remaining()
}

fn even_split(ctx: &InferenceContext) -> f64 {
    if ctx.missing_count == 0 {
        return 0.0;
    }
    ctx.remaining() / ctx.missing_count as f64
}

pub fn infer_amounts(
    ingredients: &[(&str, &str)],
    cocktail_name: &str,
    container_size: f64,
) -> Vec<InferredAmount> {
    infer_amounts_with(DEFAULT_INFERENCE_RULES, ingredients, cocktail_name, container_size)
}

/// Entries come back in input order. `ingredients` are `(name, measure)`
/// pairs of liquids only.
pub fn infer_amounts_with(
    rules: &[InferenceRule],
    ingredients: &[(&str, &str)],
    cocktail_name: &str,
    container_size: f64,
) -> Vec<InferredAmount> {
    let parsed: Vec<(&str, Option<f64>)> = ingredients
        .iter()
        .map(|(name, measure)| (*name, parse_ingredient_volume(name, measure)))
        .collect();

    let specified_total: f64 = parsed.iter().filter_map(|(_, oz)| *oz).sum();
    let specified_count = parsed.iter().filter(|(_, oz)| oz.is_some()).count();
    let missing_count = parsed.len() - specified_count;

    let ctx = InferenceContext {
        cocktail_name: cocktail_name.trim().to_lowercase(),
        specified_count,
        missing_count,
        specified_total,
        container_size,
    };

    let per_missing = if missing_count == 0 {
        0.0
    } else {
        rules
            .iter()
            .find(|rule| (rule.applies)(&ctx))
            .map_or_else(|| even_split(&ctx), |rule| (rule.fill)(&ctx))
    };

    parsed
        .into_iter()
        .map(|(name, ounces)| InferredAmount {
            name: name.to_string(),
            ounces: ounces.unwrap_or(per_missing),
            inferred: ounces.is_none(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_specified_passes_through() {
        let amounts = infer_amounts(&[("Vodka", "2 oz"), ("Orange Juice", "4 oz")], "Screwdriver", 16.0);
        assert_eq!(
            amounts,
            vec![
                InferredAmount { name: "Vodka".into(), ounces: 2.0, inferred: false },
                InferredAmount { name: "Orange Juice".into(), ounces: 4.0, inferred: false },
            ]
        );
    }

    #[test]
    fn test_remaining_volume_split_evenly() {
        let amounts = infer_amounts(
            &[("Rum", "2 oz"), ("Cola", ""), ("Lime juice", "splash")],
            "Cuba Libre",
            16.0,
        );
        assert_eq!(amounts[0].ounces, 2.0);
        assert_eq!(amounts[1].ounces, 7.0);
        assert_eq!(amounts[2].ounces, 7.0);
        assert!(amounts[1].inferred && amounts[2].inferred);
    }

    #[test]
    fn test_overfull_recipe_gives_missing_nothing() {
        let amounts = infer_amounts(&[("Beer", "20 oz"), ("Tomato juice", "")], "Michelada", 16.0);
        assert_eq!(amounts[1].ounces, 0.0);
    }

    #[test]
    fn test_mimosa_convention() {
        let amounts = infer_amounts(&[("Champagne", "8 oz"), ("Orange juice", "")], "Mimosa", 16.0);
        assert_eq!(amounts[1].ounces, 8.0);
    }

    #[test]
    fn test_mimosa_with_two_missing_falls_back_to_even_split() {
        let amounts = infer_amounts(
            &[("Champagne", "6 oz"), ("Orange juice", ""), ("Grenadine", "")],
            "Mimosa",
            16.0,
        );
        assert_eq!(amounts[1].ounces, 5.0);
        assert_eq!(amounts[2].ounces, 5.0);
    }

    #[test]
    fn test_bloody_mary_uses_even_split() {
        let amounts = infer_amounts(
            &[("Vodka", "1 1/2 oz"), ("Tomato juice", ""), ("Lemon juice", "")],
            "Bloody Mary",
            16.0,
        );
        assert_eq!(amounts[1].ounces, 7.25);
        assert_eq!(amounts[2].ounces, 7.25);
    }

    #[test]
    fn test_custom_rule_takes_precedence() {
        fn applies(ctx: &InferenceContext) -> bool {
            ctx.cocktail_name.contains("shandy")
        }
        fn fill(_: &InferenceContext) -> f64 {
            1.0
        }
        let rules = [InferenceRule { name: "shandy", applies, fill }];
        let amounts = infer_amounts_with(&rules, &[("Beer", "8 oz"), ("Lemonade", "")], "Shandy", 16.0);
        assert_eq!(amounts[1].ounces, 1.0);
    }

    #[test]
    fn test_ice_ingredient_is_never_missing() {
        let amounts = infer_amounts(&[("Ice", ""), ("Gin", "2 oz")], "Gin on the rocks", 16.0);
        assert_eq!(amounts[0].ounces, 4.0);
        assert!(!amounts[0].inferred);
    }
}

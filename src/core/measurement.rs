//! Free-text recipe measurements ("1 1/2 oz", "50 ml", "3 cubes") to ounces.
//!
//! Anything that cannot be read as a volume comes back as `None`, so callers
//! can tell "no usable volume" apart from a real amount.

const GARNISH_WORDS: &[&str] = &[
    "garnish", "wedge", "slice", "twist", "wheel", "peel", "sprig", "leaf", "leaves",
];

const OUNCES_PER_ML: f64 = 0.0338;
const OUNCES_PER_CL: f64 = 0.338;
const OUNCES_PER_CUP: f64 = 8.0;

const DEFAULT_ICE_OUNCES: f64 = 4.0;
const OUNCES_PER_CUBE: f64 = 1.5;
const MIN_CUBES: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    Millilitre,
    Centilitre,
    Cup,
    Ounce,
}

impl Unit {
    fn from_word(word: &str) -> Option<Unit> {
        match word.trim_end_matches(['.', ',']) {
            "ml" | "milliliter" | "milliliters" | "millilitre" | "millilitres" => {
                Some(Unit::Millilitre)
            }
            "cl" | "centiliter" | "centiliters" | "centilitre" | "centilitres" => {
                Some(Unit::Centilitre)
            }
            "cup" | "cups" => Some(Unit::Cup),
            "oz" | "ounce" | "ounces" => Some(Unit::Ounce),
            _ => None,
        }
    }
}

/// Parses a measurement into ounces.
///
/// Numeric tokens (decimals and `a/b` fractions) are summed, including the
/// numeric head of fused tokens like `12oz`. A single unit factor is then
/// applied with precedence ml, cl, cup. Garnish wording wins over any number.
pub fn parse_volume(text: &str) -> Option<f64> {
    parse_measurement(text, false)
}

/// Same as [`parse_volume`] but treats the text as describing ice when the
/// ingredient itself is ice, so a bare "crushed" still gets the ice default.
pub fn parse_ingredient_volume(name: &str, measure: &str) -> Option<f64> {
    parse_measurement(measure, is_ice_name(name))
}

/// Numeric view for arithmetic: `None` counts as zero.
pub fn ounces_or_zero(text: &str) -> f64 {
    parse_volume(text).unwrap_or(0.0)
}

pub(crate) fn mentions_garnish(text: &str) -> bool {
    let lowered = text.to_lowercase();
    GARNISH_WORDS.iter().any(|word| lowered.contains(word))
}

pub fn is_ice_name(name: &str) -> bool {
    mentions_ice_word(name)
}

/// Whole-word "ice", so "juice" and "slice" do not count. Hyphens split
/// words ("ice-filled").
pub(crate) fn mentions_ice_word(text: &str) -> bool {
    text.to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '-')
        .any(|word| bare_word(word) == "ice")
}

fn parse_measurement(text: &str, force_ice: bool) -> Option<f64> {
    let lowered = text.trim().to_lowercase();
    if lowered.is_empty() && !force_ice {
        return None;
    }
    if mentions_garnish(&lowered) {
        return None;
    }

    let cleaned = lowered.replace(['(', ')'], " ");
    let words: Vec<&str> = cleaned.split_whitespace().collect();

    let mut total = 0.0;
    let mut units = Vec::new();
    let mut vocabulary: Vec<&str> = Vec::new();
    for word in &words {
        if let Some(value) = parse_number(word) {
            total += value;
        } else if let Some((value, unit_text)) = split_fused(word) {
            total += value;
            units.extend(Unit::from_word(unit_text));
            vocabulary.push(bare_word(unit_text));
        } else {
            if let Some(unit) = Unit::from_word(word) {
                units.push(unit);
            }
            vocabulary.extend(word.split('-').map(bare_word));
        }
    }
    if !total.is_finite() {
        return None;
    }

    let mentions_cube = vocabulary.iter().any(|w| w.starts_with("cube"));
    let mentions_ice = force_ice || mentions_cube || vocabulary.contains(&"ice");

    if mentions_cube {
        let cubes = if total < 2.0 { MIN_CUBES } else { total };
        return Some(cubes * OUNCES_PER_CUBE);
    }
    if total <= 0.0 {
        return mentions_ice.then_some(DEFAULT_ICE_OUNCES);
    }
    Some(total * conversion_factor(&units))
}

fn conversion_factor(units: &[Unit]) -> f64 {
    if units.contains(&Unit::Millilitre) {
        OUNCES_PER_ML
    } else if units.contains(&Unit::Centilitre) {
        OUNCES_PER_CL
    } else if units.contains(&Unit::Cup) {
        OUNCES_PER_CUP
    } else {
        1.0
    }
}

/// A plain decimal or an `a/b` fraction. Malformed fractions are `None`.
pub(crate) fn parse_number(token: &str) -> Option<f64> {
    let value = match token.trim().split_once('/') {
        Some((num, den)) => {
            let num = parse_decimal(num)?;
            let den = parse_decimal(den)?;
            if den == 0.0 {
                return None;
            }
            num / den
        }
        None => parse_decimal(token.trim())?,
    };
    (value.is_finite() && value >= 0.0).then_some(value)
}

/// Digits and at most one dot; no signs, exponents or "inf"/"nan".
fn parse_decimal(text: &str) -> Option<f64> {
    let digits_only = !text.is_empty()
        && text.chars().all(|c| c.is_ascii_digit() || c == '.')
        && text.chars().any(|c| c.is_ascii_digit());
    if !digits_only {
        return None;
    }
    text.parse().ok()
}

/// Splits `12oz` into `(12.0, "oz")`. The tail must be alphabetic.
fn split_fused(token: &str) -> Option<(f64, &str)> {
    let split_at = token
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '/'))
        .filter(|&idx| idx > 0)?;
    let (head, tail) = token.split_at(split_at);
    if !tail.chars().all(|c| c.is_alphabetic() || c == '.') {
        return None;
    }
    parse_number(head).map(|value| (value, tail))
}

fn bare_word(word: &str) -> &str {
    word.trim_matches(|c: char| !c.is_alphanumeric())
}

//! Plain-text rendering of reports for the terminal.

use crate::core::bac::TipsinessLevel;
use crate::core::classifier::is_solid;
use crate::core::palette::color_for;
use crate::domain::model::{BacEstimate, CupBreakdown};
use std::fmt::Write;

const BAR_WIDTH: usize = 20;
const BAR_FULL_BAC: f64 = 0.15;
const CUP_ROWS: usize = 10;
const CUP_FRACTION_DENOMINATORS: [u32; 5] = [2, 3, 4, 6, 8];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasurementContext {
    /// Liquids as a share of the cup ("1/2 of a cup").
    Visualization,
    /// Liquids in ounces ("8.0 oz").
    Breakdown,
}

/// Solids always keep the recipe's own wording.
pub fn format_measurement(
    name: &str,
    scaled_oz: f64,
    original: &str,
    context: MeasurementContext,
    cup_size: f64,
) -> String {
    if is_solid(name) {
        let original = original.trim();
        return if original.is_empty() {
            "to taste".to_string()
        } else {
            original.to_string()
        };
    }

    match context {
        MeasurementContext::Breakdown => format!("{:.1} oz", scaled_oz),
        MeasurementContext::Visualization => cup_fraction(scaled_oz / cup_size),
    }
}

fn cup_fraction(fraction: f64) -> String {
    if fraction >= 0.995 {
        return "a full cup".to_string();
    }
    if fraction < 1.0 / 16.0 {
        return "a splash".to_string();
    }

    let mut best = (1, 2);
    let mut best_error = f64::MAX;
    for den in CUP_FRACTION_DENOMINATORS {
        for num in 1..den {
            let error = (num as f64 / den as f64 - fraction).abs();
            if error < best_error {
                best = (num, den);
                best_error = error;
            }
        }
    }
    format!("{}/{} of a cup", best.0, best.1)
}

pub fn render_tipsiness_bar(estimate: BacEstimate, drink_label: &str) -> String {
    let bac = match estimate {
        BacEstimate::Unmeasurable => {
            return format!(
                "Tipsiness estimate for {}:\nCould not estimate BAC for this recipe.\n",
                drink_label
            );
        }
        BacEstimate::Estimated(bac) => bac,
    };

    let filled = ((bac / BAR_FULL_BAC).min(1.0) * BAR_WIDTH as f64) as usize;
    format!(
        "Estimated BAC from one serving of {}: {:.3}\n[{}{}] {}\nEducational estimate only. Never drink and drive.\n",
        drink_label,
        bac,
        "#".repeat(filled),
        " ".repeat(BAR_WIDTH - filled),
        TipsinessLevel::from_bac(bac).label()
    )
}

pub fn render_cup(breakdown: &CupBreakdown, cup_size: f64) -> String {
    let total = breakdown.total_liquid_ounces();
    let share = if cup_size > 0.0 { (total / cup_size).min(1.0) } else { 0.0 };
    let filled = (share * CUP_ROWS as f64).round() as usize;

    let mut out = String::new();
    let _ = writeln!(out, "Your Red Solo Cup fill level:");
    let _ = writeln!(out, "   _________ ");
    let _ = writeln!(out, "  /         \\");
    let _ = writeln!(out, " /           \\");
    for _ in filled..CUP_ROWS {
        let _ = writeln!(out, " |           |");
    }
    for _ in 0..filled {
        let _ = writeln!(out, " |###########|");
    }
    let _ = writeln!(out, " \\___________/");
    let _ = writeln!(
        out,
        "Estimated liquid: {:.1} oz ({:.0}% of a solo cup)",
        total,
        share * 100.0
    );

    for liquid in &breakdown.liquids {
        let _ = writeln!(
            out,
            "  [{}] {}: {} ({}, {:.1}%)",
            color_for(&liquid.name),
            liquid.name,
            format_measurement(&liquid.name, liquid.ounces, "", MeasurementContext::Breakdown, cup_size),
            format_measurement(&liquid.name, liquid.ounces, "", MeasurementContext::Visualization, cup_size),
            liquid.percentage
        );
    }
    for solid in breakdown.solids.iter().chain(&breakdown.garnishes) {
        let _ = writeln!(
            out,
            "  + {}: {}",
            solid.name,
            solid.measure.as_deref().unwrap_or("to taste")
        );
    }
    out
}

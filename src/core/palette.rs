use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

pub const PALETTE: [&str; 30] = [
    "#DC143C", "#FF4500", "#32CD32", "#00CED1", "#1E90FF", "#9370DB", "#FF69B4", "#8B4513",
    "#20B2AA", "#FF6347", "#4682B4", "#CD5C5C", "#40E0D0", "#800080", "#008000", "#FFA500",
    "#FF0000", "#0000FF", "#FFD700", "#228B22", "#FF00FF", "#00FFFF", "#800000", "#808000",
    "#008080", "#000080", "#696969", "#8B0000", "#8A2BE2", "#FF1493",
];

/// Stable color tag for an ingredient within one process run.
/// Names are compared lowercase with whitespace collapsed.
pub fn color_for(ingredient_name: &str) -> &'static str {
    let normalized = ingredient_name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    let mut hasher = DefaultHasher::new();
    normalized.hash(&mut hasher);
    PALETTE[(hasher.finish() % PALETTE.len() as u64) as usize]
}

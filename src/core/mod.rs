pub mod bac;
pub mod classifier;
pub mod inference;
pub mod measurement;
pub mod palette;
pub mod recommend;
pub mod standardizer;

pub use crate::domain::model::{BacEstimate, CupBreakdown, Recipe, StandardizedIngredient};
pub use crate::domain::ports::{ConfigProvider, RecipeSource, TutorialSource};
pub use crate::utils::error::Result;

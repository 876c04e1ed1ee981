// Adapters layer: concrete implementations of the domain ports over HTTP.

pub mod cocktail_db;
pub mod youtube;

pub use cocktail_db::CocktailDbClient;
pub use youtube::{tutorial_search_url, YouTubeClient};

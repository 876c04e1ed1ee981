use crate::domain::model::{DrinkSummary, IngredientSlot, Recipe, MAX_INGREDIENT_SLOTS};
use crate::domain::ports::{ConfigProvider, RecipeSource};
use crate::utils::error::{CupError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::time::Duration;

pub const DEFAULT_COCKTAIL_DB_URL: &str = "https://www.thecocktaildb.com/api/json/v1/1";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct DrinkRow {
    #[serde(rename = "idDrink")]
    id: String,
    #[serde(rename = "strDrink")]
    name: Option<String>,
    #[serde(rename = "strDrinkThumb")]
    thumbnail: Option<String>,
}

/// TheCocktailDB JSON API client.
#[derive(Debug, Clone)]
pub struct CocktailDbClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl CocktailDbClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.api_endpoint()).with_timeout(config.request_timeout())
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// GETs `path` and returns the `drinks` array. A null or non-array
    /// `drinks` value is an empty list.
    async fn fetch_drinks(&self, path: &str, query: &[(&str, &str)]) -> Result<Vec<Value>> {
        let url = self.endpoint(path);
        tracing::debug!("Making API request to: {} {:?}", url, query);

        let response = self
            .client
            .get(&url)
            .query(query)
            .timeout(self.timeout)
            .send()
            .await?;

        tracing::debug!("API response status: {}", response.status());
        if !response.status().is_success() {
            return Err(CupError::UpstreamStatus {
                endpoint: url,
                status: response.status().as_u16(),
            });
        }

        let body: Value = response.json().await?;
        match body.get("drinks") {
            Some(Value::Array(items)) => Ok(items.clone()),
            _ => Ok(Vec::new()),
        }
    }
}

fn text_field(record: &Map<String, Value>, key: &str) -> Option<String> {
    match record.get(key)? {
        Value::String(s) => Some(s.trim().to_string()).filter(|s| !s.is_empty()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Builds a recipe from one lookup record, keeping non-blank ingredient slots.
pub fn recipe_from_record(record: &Map<String, Value>) -> Option<Recipe> {
    let id = text_field(record, "idDrink")?;
    let name = text_field(record, "strDrink").unwrap_or_default();

    let ingredients = (1..=MAX_INGREDIENT_SLOTS)
        .filter_map(|n| {
            let name = text_field(record, &format!("strIngredient{}", n))?;
            Some(IngredientSlot {
                name,
                measure: text_field(record, &format!("strMeasure{}", n)),
            })
        })
        .collect();

    Some(Recipe {
        id,
        name,
        instructions: text_field(record, "strInstructions").unwrap_or_default(),
        thumbnail: text_field(record, "strDrinkThumb"),
        ingredients,
    })
}

#[async_trait]
impl RecipeSource for CocktailDbClient {
    async fn drinks_by_ingredient(&self, keyword: &str) -> Result<Vec<DrinkSummary>> {
        let rows = self.fetch_drinks("filter.php", &[("i", keyword)]).await?;
        Ok(rows
            .into_iter()
            .filter_map(|row| serde_json::from_value::<DrinkRow>(row).ok())
            .map(|row| DrinkSummary {
                id: row.id,
                name: row.name,
                thumbnail: row.thumbnail,
            })
            .collect())
    }

    async fn drink_detail(&self, id: &str) -> Result<Option<Recipe>> {
        let rows = self.fetch_drinks("lookup.php", &[("i", id)]).await?;
        Ok(rows
            .first()
            .and_then(Value::as_object)
            .and_then(recipe_from_record))
    }

    async fn ingredient_catalog(&self) -> Result<Vec<String>> {
        let rows = self.fetch_drinks("list.php", &[("i", "list")]).await?;
        let mut names: Vec<String> = rows
            .iter()
            .filter_map(Value::as_object)
            .filter_map(|row| text_field(row, "strIngredient1"))
            .collect();
        names.sort();
        names.dedup();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_drinks_by_ingredient() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/filter.php").query_param("i", "vodka");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({"drinks": [
                    {"strDrink": "Screwdriver", "strDrinkThumb": "https://img/1.jpg", "idDrink": "11000"},
                    {"strDrink": "Broken row"},
                    {"strDrink": "Cape Codder", "strDrinkThumb": null, "idDrink": "11001"}
                ]}));
        });

        let client = CocktailDbClient::new(server.base_url());
        let drinks = client.drinks_by_ingredient("vodka").await.unwrap();

        api_mock.assert();
        assert_eq!(drinks.len(), 2);
        assert_eq!(drinks[0].id, "11000");
        assert_eq!(drinks[0].name.as_deref(), Some("Screwdriver"));
        assert_eq!(drinks[1].thumbnail, None);
    }

    #[tokio::test]
    async fn test_no_drinks_is_empty() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/filter.php").query_param("i", "nothing");
            then.status(200).json_body(json!({"drinks": "None Found"}));
        });
        server.mock(|when, then| {
            when.method(GET).path("/lookup.php").query_param("i", "404");
            then.status(200).json_body(json!({"drinks": null}));
        });

        let client = CocktailDbClient::new(server.base_url());

        assert!(client.drinks_by_ingredient("nothing").await.unwrap().is_empty());
        assert_eq!(client.drink_detail("404").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_server_error_is_err() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/lookup.php");
            then.status(500);
        });

        let client = CocktailDbClient::new(format!("{}/", server.base_url()));
        let result = client.drink_detail("11000").await;

        assert!(matches!(result, Err(CupError::UpstreamStatus { status: 500, .. })));
    }

    #[tokio::test]
    async fn test_drink_detail_reads_slots() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/lookup.php").query_param("i", "11007");
            then.status(200).json_body(json!({"drinks": [{
                "idDrink": "11007",
                "strDrink": "Margarita",
                "strInstructions": " Rub the rim of the glass with the lime slice. ",
                "strDrinkThumb": "https://img/margarita.jpg",
                "strIngredient1": "Tequila", "strMeasure1": "1 1/2 oz ",
                "strIngredient2": "Triple sec", "strMeasure2": "1/2 oz ",
                "strIngredient3": "Lime juice", "strMeasure3": "1 oz ",
                "strIngredient4": "Salt", "strMeasure4": null,
                "strIngredient5": "", "strMeasure5": "",
                "strIngredient6": null, "strMeasure6": null
            }]}));
        });

        let client = CocktailDbClient::new(server.base_url());
        let recipe = client.drink_detail("11007").await.unwrap().unwrap();

        assert_eq!(recipe.name, "Margarita");
        assert_eq!(recipe.instructions, "Rub the rim of the glass with the lime slice.");
        assert_eq!(recipe.ingredients.len(), 4);
        assert_eq!(recipe.ingredients[0].measure.as_deref(), Some("1 1/2 oz"));
        assert_eq!(recipe.ingredients[3].measure, None);
    }

    #[tokio::test]
    async fn test_ingredient_catalog_sorted() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/list.php").query_param("i", "list");
            then.status(200).json_body(json!({"drinks": [
                {"strIngredient1": "Vodka"},
                {"strIngredient1": "Gin"},
                {"strIngredient1": "Applejack"},
                {"strIngredient1": "Gin"},
                {"strIngredient1": null}
            ]}));
        });

        let client = CocktailDbClient::new(server.base_url());
        let catalog = client.ingredient_catalog().await.unwrap();

        assert_eq!(catalog, vec!["Applejack", "Gin", "Vodka"]);
    }

    #[test]
    fn test_record_without_id_is_skipped() {
        let record = json!({"strDrink": "Nameless"});
        assert!(recipe_from_record(record.as_object().unwrap()).is_none());
    }
}

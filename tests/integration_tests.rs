use httpmock::prelude::*;
use red_solo_cup::core::ConfigProvider;
use red_solo_cup::domain::model::Preferences;
use red_solo_cup::utils::validation::Validate;
use red_solo_cup::{CocktailDbClient, CupSession, Recommender, TomlConfig, YouTubeClient};
use serde_json::json;
use std::io::Write;
use tempfile::NamedTempFile;

fn mock_filter(server: &MockServer, ingredient: &str, ids: &[&str]) {
    let drinks: Vec<_> = ids
        .iter()
        .map(|id| json!({"idDrink": id, "strDrink": format!("Drink {}", id), "strDrinkThumb": null}))
        .collect();
    let ingredient = ingredient.to_string();
    server.mock(move |when, then| {
        when.method(GET).path("/filter.php").query_param("i", ingredient.as_str());
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({ "drinks": drinks }));
    });
}

fn mock_lookup<'a>(
    server: &'a MockServer,
    id: &str,
    name: &str,
    ingredients: &[(&str, &str)],
) -> httpmock::Mock<'a> {
    let mut record = serde_json::Map::new();
    record.insert("idDrink".into(), json!(id));
    record.insert("strDrink".into(), json!(name));
    record.insert("strInstructions".into(), json!("Pour over ice and stir."));
    for (n, (ingredient, measure)) in ingredients.iter().enumerate() {
        record.insert(format!("strIngredient{}", n + 1), json!(ingredient));
        record.insert(format!("strMeasure{}", n + 1), json!(measure));
    }
    let id = id.to_string();
    server.mock(move |when, then| {
        when.method(GET).path("/lookup.php").query_param("i", id.as_str());
        then.status(200).json_body(json!({ "drinks": [record] }));
    })
}

fn prefs(alcohols: &[&str], mixers: &[&str]) -> Preferences {
    Preferences {
        alcohol_types: alcohols.iter().map(|s| s.to_string()).collect(),
        mixers: mixers.iter().map(|s| s.to_string()).collect(),
        weight_lbs: 160.0,
    }
}

#[tokio::test]
async fn test_end_to_end_recommendation_with_real_http() {
    let server = MockServer::start();
    mock_filter(&server, "vodka", &["11000", "11001"]);
    let screwdriver = mock_lookup(
        &server,
        "11000",
        "Screwdriver",
        &[("Vodka", "2 oz"), ("Orange juice", "4 oz")],
    );
    let cape_codder = mock_lookup(
        &server,
        "11001",
        "Cape Codder",
        &[("Vodka", "1 1/2 oz"), ("Cranberry", "3 oz"), ("Lime", "1 wedge")],
    );

    let session = CupSession::new(
        CocktailDbClient::new(server.base_url()),
        YouTubeClient::new(server.base_url(), None),
        16.0,
    );

    let reports = session
        .recommendations(&prefs(&["vodka"], &["orange juice"]), 5)
        .await
        .unwrap();

    screwdriver.assert();
    cape_codder.assert();
    assert_eq!(reports.len(), 1);

    let report = &reports[0];
    assert_eq!(report.name, "Screwdriver");
    assert_eq!(report.ingredient_lines, vec!["2 oz Vodka", "4 oz Orange juice"]);
    assert!((report.breakdown.total_liquid_ounces() - 16.0).abs() < 0.01);
    assert!(report.bac.value().unwrap() > 0.0);

    let chosen = session.select(&reports, 1).await.unwrap();
    let tutorial = chosen.tutorial.as_ref().unwrap();
    assert!(tutorial.api_key_missing);
    assert!(chosen.render_detail().contains("YouTube tutorial: https://www.youtube.com/results"));
}

#[tokio::test]
async fn test_results_are_capped_and_unique() {
    let server = MockServer::start();
    mock_filter(&server, "vodka", &["1", "2", "3"]);
    mock_filter(&server, "rum", &["2", "4"]);
    let first = mock_lookup(&server, "1", "One", &[("Vodka", "1 oz"), ("Cola", "4 oz")]);
    let second = mock_lookup(&server, "2", "Two", &[("Vodka", "1 oz"), ("Rum", "1 oz")]);
    let third = mock_lookup(&server, "3", "Three", &[("Vodka", "1 oz")]);
    let fourth = mock_lookup(&server, "4", "Four", &[("Rum", "2 oz"), ("Coke", "4 oz")]);

    let recommender = Recommender::new(CocktailDbClient::new(server.base_url()));

    let capped = recommender.recommend(&["vodka", "rum"], &[] as &[&str], 2).await;
    let ids: Vec<_> = capped.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2"]);
    third.assert_hits(0);

    let all = recommender.recommend(&["vodka", "rum"], &[] as &[&str], 10).await;
    let ids: Vec<_> = all.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4"]);
    first.assert_hits(2);
    second.assert_hits(2);
    fourth.assert_hits(1);
}

#[tokio::test]
async fn test_failed_lookups_are_skipped() {
    let server = MockServer::start();
    mock_filter(&server, "gin", &["10", "11"]);
    server.mock(|when, then| {
        when.method(GET).path("/filter.php").query_param("i", "mezcal");
        then.status(503);
    });
    server.mock(|when, then| {
        when.method(GET).path("/lookup.php").query_param("i", "10");
        then.status(500);
    });
    mock_lookup(&server, "11", "Gin Tonic", &[("Gin", "2 oz"), ("Tonic water", "5 oz")]);

    let recommender = Recommender::new(CocktailDbClient::new(server.base_url()));
    let results = recommender
        .recommend(&["mezcal", "gin"], &["tonic"], 5)
        .await;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Gin Tonic");
}

#[tokio::test]
async fn test_compatible_mixers_and_recall() {
    let server = MockServer::start();
    mock_filter(&server, "rum", &["20", "21"]);
    mock_lookup(&server, "20", "Cuba Libre", &[("Rum", "2 oz"), ("Coca-Cola", "4 oz"), ("Lime", "1")]);
    mock_lookup(&server, "21", "Daiquiri", &[("Light rum", "2 oz"), ("Lime", "1 oz")]);

    let recommender = Recommender::new(CocktailDbClient::new(server.base_url()));

    let mixers = recommender.compatible_mixers(&["Rum"]).await;
    assert_eq!(mixers, vec!["coca-cola", "light rum", "lime"]);

    let recalled = recommender.recall(&["21", "20"]).await;
    let names: Vec<_> = recalled.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Daiquiri", "Cuba Libre"]);
}

#[tokio::test]
async fn test_toml_config_drives_session() {
    let server = MockServer::start();
    mock_filter(&server, "tequila", &["30"]);
    mock_lookup(
        &server,
        "30",
        "Tequila Sunrise",
        &[("Tequila", "2 oz"), ("Orange juice", "4 oz"), ("Grenadine", "1/2 oz")],
    );
    let video = server.mock(|when, then| {
        when.method(GET)
            .path("/yt/search")
            .query_param("q", "how to make Tequila Sunrise cocktail recipe")
            .query_param("key", "test-key");
        then.status(200).json_body(json!({"items": [
            {"id": {"videoId": "sunrise1"}, "snippet": {"title": "Sunrise", "description": "Layered"}}
        ]}));
    });

    let toml_content = format!(
        r#"
[source]
endpoint = "{base}"
timeout_seconds = 5

[cup]
size_oz = 16.0

[preferences]
alcohols = ["Tequila"]
mixers = ["orange juice"]
weight_lbs = 150.0

[tutorial]
endpoint = "{base}/yt"
api_key = "test-key"
"#,
        base = server.base_url()
    );
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(toml_content.as_bytes()).unwrap();

    let config = TomlConfig::from_file(temp_file.path()).unwrap();
    config.validate().unwrap();

    let session = CupSession::new(
        CocktailDbClient::from_config(&config),
        YouTubeClient::from_config(&config),
        config.cup_size_oz(),
    );
    let reports = session
        .recommendations(&config.preferences(), config.max_results())
        .await
        .unwrap();
    let chosen = session.select(&reports, config.select()).await.unwrap();

    video.assert();
    assert!(chosen
        .render_detail()
        .contains("Video tutorial: https://www.youtube.com/embed/sunrise1"));
}

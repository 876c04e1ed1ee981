use crate::domain::model::TutorialLookup;
use crate::domain::ports::{ConfigProvider, TutorialSource};
use crate::utils::error::{CupError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_YOUTUBE_API_URL: &str = "https://www.googleapis.com/youtube/v3";
const YOUTUBE_RESULTS_URL: &str = "https://www.youtube.com/results";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Plain YouTube search link; needs no API key.
pub fn tutorial_search_url(cocktail_name: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("search_query", &format!("{} cocktail recipe", cocktail_name.trim()))
        .finish();
    format!("{}?{}", YOUTUBE_RESULTS_URL, query)
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: VideoId,
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
struct VideoId {
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Snippet {
    title: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct YouTubeClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl YouTubeClient {
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(
            config.youtube_endpoint(),
            config.youtube_api_key().map(str::to_string),
        )
        .with_timeout(config.request_timeout())
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn search(&self, api_key: &str, query: &str) -> Result<Option<SearchItem>> {
        let url = format!("{}/search", self.endpoint.trim_end_matches('/'));
        let response = self
            .client
            .get(&url)
            .query(&[
                ("part", "snippet"),
                ("q", query),
                ("type", "video"),
                ("maxResults", "3"),
                ("videoDuration", "short"),
                ("relevanceLanguage", "en"),
                ("key", api_key),
            ])
            .timeout(self.timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CupError::UpstreamStatus {
                endpoint: url,
                status: response.status().as_u16(),
            });
        }

        let body: SearchResponse = response.json().await?;
        Ok(body.items.into_iter().next())
    }
}

#[async_trait]
impl TutorialSource for YouTubeClient {
    async fn find_tutorial(&self, cocktail_name: &str) -> TutorialLookup {
        let search_query = format!("how to make {} cocktail recipe", cocktail_name.trim());
        let mut lookup = TutorialLookup {
            search_query,
            ..TutorialLookup::default()
        };

        let Some(api_key) = self.api_key.as_deref() else {
            tracing::warn!("No YouTube API key configured, cannot fetch videos for {}", cocktail_name);
            lookup.api_key_missing = true;
            return lookup;
        };

        match self.search(api_key, &lookup.search_query).await {
            Ok(Some(item)) => {
                lookup.video_id = item.id.video_id;
                lookup.video_title = item.snippet.title;
                lookup.video_description = item.snippet.description;
            }
            Ok(None) => tracing::info!("No tutorial videos found for {}", cocktail_name),
            Err(e) => tracing::warn!("YouTube search failed for {}: {}", cocktail_name, e),
        }
        lookup
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[test]
    fn test_search_url_is_encoded() {
        assert_eq!(
            tutorial_search_url("Long Island Tea"),
            "https://www.youtube.com/results?search_query=Long+Island+Tea+cocktail+recipe"
        );
        assert_eq!(
            tutorial_search_url("Piña & Co"),
            "https://www.youtube.com/results?search_query=Pi%C3%B1a+%26+Co+cocktail+recipe"
        );
    }

    #[test]
    fn test_missing_api_key() {
        let client = YouTubeClient::new(DEFAULT_YOUTUBE_API_URL, Some("  ".to_string()));
        let lookup = tokio_test::block_on(client.find_tutorial("Mojito"));

        assert!(lookup.api_key_missing);
        assert_eq!(lookup.video_id, None);
        assert_eq!(lookup.search_query, "how to make Mojito cocktail recipe");
    }

    #[tokio::test]
    async fn test_first_video_is_used() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/search")
                .query_param("q", "how to make Mojito cocktail recipe")
                .query_param("key", "secret")
                .query_param("maxResults", "3");
            then.status(200).json_body(json!({"items": [
                {"id": {"videoId": "abc123"}, "snippet": {"title": "Perfect Mojito", "description": "Muddle mint"}},
                {"id": {"videoId": "zzz999"}, "snippet": {"title": "Other", "description": ""}}
            ]}));
        });

        let client = YouTubeClient::new(server.base_url(), Some("secret".to_string()));
        let lookup = client.find_tutorial("Mojito").await;

        api_mock.assert();
        assert!(!lookup.api_key_missing);
        assert_eq!(lookup.video_id.as_deref(), Some("abc123"));
        assert_eq!(lookup.video_title.as_deref(), Some("Perfect Mojito"));
        assert_eq!(lookup.embed_url().as_deref(), Some("https://www.youtube.com/embed/abc123"));
    }

    #[tokio::test]
    async fn test_api_failure_yields_no_video() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/search");
            then.status(403).json_body(json!({"error": {"code": 403}}));
        });

        let client = YouTubeClient::new(server.base_url(), Some("secret".to_string()));
        let lookup = client.find_tutorial("Mojito").await;

        assert!(!lookup.api_key_missing);
        assert_eq!(lookup.video_id, None);
    }
}

use log::debug;
use reqwest::blocking::{Client, Request};
use reqwest::StatusCode;
use std::time::Duration;

use crate::config::Settings;
use crate::model::{parse_recipes, Recipe};
use crate::SearchError;

pub const SEARCH_PATH: &str = "/v1/recipe";
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// How the search term is placed into the request URL
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QueryEncoding {
    /// Percent-encode the term as a `query` parameter
    #[default]
    Encoded,
    /// Paste the term into the URL as typed
    Raw,
}

/// Blocking client for the recipe search endpoint
pub struct RecipeClient {
    client: Client,
    api_key: String,
    base_url: String,
    encoding: QueryEncoding,
}

impl RecipeClient {
    /// Create a client from resolved settings
    pub fn new(settings: &Settings) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(settings.timeout_secs.map(Duration::from_secs))
            .build()
            .map_err(SearchError::RequestBuild)?;

        Ok(RecipeClient {
            client,
            api_key: settings.api_key.clone(),
            base_url: settings.base_url.clone(),
            encoding: QueryEncoding::default(),
        })
    }

    pub fn with_encoding(mut self, encoding: QueryEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Build the GET request for `query` without sending it
    pub fn build_request(&self, query: &str) -> Result<Request, SearchError> {
        let endpoint = format!("{}{}", self.base_url, SEARCH_PATH);
        let builder = match self.encoding {
            QueryEncoding::Encoded => self.client.get(endpoint).query(&[("query", query)]),
            QueryEncoding::Raw => self.client.get(format!("{endpoint}?query={query}")),
        };

        builder
            .header(API_KEY_HEADER, &self.api_key)
            .build()
            .map_err(SearchError::RequestBuild)
    }

    /// Run one search and return the recipes in server order
    pub fn search(&self, query: &str) -> Result<Vec<Recipe>, SearchError> {
        let request = self.build_request(query)?;
        debug!("GET {}", request.url());

        let response = self
            .client
            .execute(request)
            .map_err(SearchError::Transport)?;
        let status = response.status();
        let body = response.bytes().map_err(SearchError::Read)?;
        debug!("{} ({} bytes)", status, body.len());

        if status != StatusCode::OK {
            return Err(SearchError::HttpStatus {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        let recipes = parse_recipes(&body)?;
        debug!("decoded {} recipes", recipes.len());
        Ok(recipes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    fn settings(base_url: String) -> Settings {
        Settings {
            api_key: "fake_api_key".to_string(),
            base_url,
            timeout_secs: Some(5),
        }
    }

    #[test]
    fn test_search_sends_key_and_query() {
        let mut server = Server::new();
        let mock = server
            .mock("GET", SEARCH_PATH)
            .match_header("x-api-key", "fake_api_key")
            .match_query(Matcher::UrlEncoded("query".into(), "pad thai".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[{
                    "title": "Pad Thai",
                    "ingredients": "rice noodles|tamarind|peanuts",
                    "servings": "2 Servings",
                    "instructions": "Soak noodles. Stir fry."
                }]"#,
            )
            .create();

        let client = RecipeClient::new(&settings(server.url())).unwrap();
        let recipes = client.search("pad thai").unwrap();

        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].title, "Pad Thai");
        mock.assert();
    }

    #[test]
    fn test_non_200_status_is_error_with_body() {
        let mut server = Server::new();
        let mock = server
            .mock("GET", SEARCH_PATH)
            .match_query(Matcher::Any)
            .with_status(404)
            .with_body("not found")
            .create();

        let client = RecipeClient::new(&settings(server.url())).unwrap();
        let err = client.search("anything").unwrap_err();

        match &err {
            SearchError::HttpStatus { status, body } => {
                assert_eq!(*status, 404);
                assert_eq!(body, "not found");
            }
            other => panic!("Expected HttpStatus, got {other:?}"),
        }
        mock.assert();
    }

    #[test]
    fn test_other_success_codes_are_errors() {
        let mut server = Server::new();
        let _m = server
            .mock("GET", SEARCH_PATH)
            .match_query(Matcher::Any)
            .with_status(204)
            .create();

        let client = RecipeClient::new(&settings(server.url())).unwrap();
        let err = client.search("eggs").unwrap_err();
        assert!(matches!(err, SearchError::HttpStatus { status: 204, .. }));
    }

    #[test]
    fn test_malformed_json_is_decode_error() {
        let mut server = Server::new();
        let _m = server
            .mock("GET", SEARCH_PATH)
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("{not json")
            .create();

        let client = RecipeClient::new(&settings(server.url())).unwrap();
        let err = client.search("eggs").unwrap_err();
        assert!(matches!(err, SearchError::Decode(_)));
    }

    #[test]
    fn test_connection_refused_is_transport_error() {
        // Port 1 is reserved and nothing listens on it
        let client = RecipeClient::new(&settings("http://127.0.0.1:1".to_string())).unwrap();
        let err = client.search("eggs").unwrap_err();
        assert!(matches!(err, SearchError::Transport(_)));
    }

    #[test]
    fn test_encoded_query_escapes_reserved_characters() {
        let client = RecipeClient::new(&settings("http://localhost".to_string())).unwrap();
        let request = client.build_request("mac & cheese").unwrap();

        assert_eq!(
            request.url().as_str(),
            "http://localhost/v1/recipe?query=mac+%26+cheese"
        );
        assert_eq!(
            request.headers().get(API_KEY_HEADER).unwrap(),
            "fake_api_key"
        );
    }

    #[test]
    fn test_raw_query_is_interpolated_verbatim() {
        let client = RecipeClient::new(&settings("http://localhost".to_string()))
            .unwrap()
            .with_encoding(QueryEncoding::Raw);
        let request = client.build_request("mac&cheese").unwrap();

        assert_eq!(
            request.url().as_str(),
            "http://localhost/v1/recipe?query=mac&cheese"
        );
    }

    #[test]
    fn test_invalid_base_url_is_request_build_error() {
        let client = RecipeClient::new(&settings("not a url".to_string())).unwrap();
        let err = client.build_request("eggs").unwrap_err();
        assert!(matches!(err, SearchError::RequestBuild(_)));
    }
}

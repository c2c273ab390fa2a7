use crate::models::{GenerateAudioRequest, GenerateAudioResponse};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ApiErrorKind {
    Network,
    Http,
    Parse,
}

#[derive(Clone, Debug)]
pub(crate) struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl ApiError {
    fn network(e: reqwest::Error) -> Self {
        Self {
            kind: ApiErrorKind::Network,
            message: e.to_string(),
        }
    }

    fn parse(e: impl std::fmt::Display) -> Self {
        Self {
            kind: ApiErrorKind::Parse,
            message: e.to_string(),
        }
    }

    fn http(status: reqwest::StatusCode, body: String, ctx: &str) -> Self {
        let body = body.trim();
        let message = if body.is_empty() {
            format!("{ctx} ({status})")
        } else {
            format!("{ctx} ({status}): {body}")
        };
        Self {
            kind: ApiErrorKind::Http,
            message,
        }
    }
}

pub(crate) type ApiResult<T> = Result<T, ApiError>;

const FALLBACK_API_URL: &str = "http://localhost:8000";

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct EnvConfig {
    pub api_url: String,
}

impl EnvConfig {
    pub fn new() -> Self {
        let Some(window) = web_sys::window() else {
            return Self {
                api_url: FALLBACK_API_URL.to_string(),
            };
        };

        // `window.ENV.API_URL` wins, `window.ENV.api_url` is accepted too.
        if let Some(env) = window.get("ENV") {
            if !env.is_undefined() && env.is_object() {
                for key in ["API_URL", "api_url"] {
                    if let Ok(api_url) = js_sys::Reflect::get(&env, &key.into()) {
                        if let Some(url_str) = api_url.as_string() {
                            return Self { api_url: url_str };
                        }
                    }
                }
            }
        }

        // The editor is normally served by the same backend it talks to.
        let api_url = window
            .location()
            .origin()
            .ok()
            .filter(|o| !o.is_empty() && o != "null")
            .unwrap_or_else(|| FALLBACK_API_URL.to_string());

        Self { api_url }
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Percent-encode each segment of a lesson file name, keeping `/` separators.
pub(crate) fn markdown_path(file: &str) -> String {
    let encoded = file
        .trim_start_matches('/')
        .split('/')
        .map(|seg| urlencoding::encode(seg).into_owned())
        .collect::<Vec<_>>()
        .join("/");
    format!("/outputs/markdown/{encoded}")
}

pub(crate) fn search_images_path(query: &str) -> String {
    format!("/api/search_images?q={}", urlencoding::encode(query))
}

/// Keep only the string entries of a JSON array; anything else is "no results".
pub(crate) fn parse_image_search_response(data: serde_json::Value) -> Vec<String> {
    data.as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|v| v.as_str())
                .map(|s| s.to_string())
                .collect()
        })
        .unwrap_or_default()
}

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    pub(crate) base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(EnvConfig::new().api_url)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, req: reqwest::RequestBuilder, ctx: &str) -> ApiResult<reqwest::Response> {
        let res = req.send().await.map_err(ApiError::network)?;

        if res.status().is_success() {
            Ok(res)
        } else {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            Err(ApiError::http(status, body, ctx))
        }
    }

    pub async fn fetch_markdown(&self, file: &str) -> ApiResult<String> {
        let client = reqwest::Client::new();
        let res = self
            .send(
                client.get(self.url(&markdown_path(file))),
                "Failed to load lesson",
            )
            .await?;
        res.text().await.map_err(ApiError::parse)
    }

    pub async fn search_images(&self, query: &str) -> ApiResult<Vec<String>> {
        let client = reqwest::Client::new();
        let res = self
            .send(
                client.get(self.url(&search_images_path(query))),
                "Image search failed",
            )
            .await?;
        let data: serde_json::Value = res.json().await.map_err(ApiError::parse)?;
        Ok(parse_image_search_response(data))
    }

    pub async fn generate_audio(&self, prompt: &str) -> ApiResult<GenerateAudioResponse> {
        let client = reqwest::Client::new();
        let req = client
            .post(self.url("/api/generate_audio"))
            .json(&GenerateAudioRequest {
                prompt: prompt.to_string(),
            });
        let res = self.send(req, "Audio generation failed").await?;
        res.json().await.map_err(ApiError::parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_client_new_strips_trailing_slash() {
        let client = ApiClient::new("http://localhost:8000/".to_string());
        assert_eq!(client.base_url, "http://localhost:8000");
        assert_eq!(
            client.url("/api/generate_audio"),
            "http://localhost:8000/api/generate_audio"
        );
    }

    #[test]
    fn test_search_images_path_is_url_encoded() {
        assert_eq!(
            search_images_path("red fox & hen"),
            "/api/search_images?q=red%20fox%20%26%20hen"
        );
        assert_eq!(search_images_path("cat"), "/api/search_images?q=cat");
    }

    #[test]
    fn test_markdown_path_encodes_segments_but_keeps_slashes() {
        assert_eq!(markdown_path("lesson.md"), "/outputs/markdown/lesson.md");
        assert_eq!(
            markdown_path("unit 1/day#2.md"),
            "/outputs/markdown/unit%201/day%232.md"
        );
        assert_eq!(markdown_path("/a.md"), "/outputs/markdown/a.md");
    }

    #[test]
    fn test_parse_image_search_response_keeps_order() {
        let urls = parse_image_search_response(serde_json::json!(["a.png", "b.png"]));
        assert_eq!(urls, vec!["a.png".to_string(), "b.png".to_string()]);
    }

    #[test]
    fn test_parse_image_search_response_non_array_is_empty() {
        assert!(parse_image_search_response(serde_json::json!({"images": ["a.png"]})).is_empty());
        assert!(parse_image_search_response(serde_json::json!(null)).is_empty());
        assert!(parse_image_search_response(serde_json::json!("a.png")).is_empty());
        assert!(parse_image_search_response(serde_json::json!([])).is_empty());
    }

    #[test]
    fn test_parse_image_search_response_skips_non_strings() {
        let urls = parse_image_search_response(serde_json::json!(["a.png", 3, null, "c.png"]));
        assert_eq!(urls, vec!["a.png".to_string(), "c.png".to_string()]);
    }

    #[test]
    fn test_api_error_http_message_includes_status_and_body() {
        let e = ApiError::http(reqwest::StatusCode::NOT_FOUND, "missing".to_string(), "Failed");
        assert_eq!(e.kind, ApiErrorKind::Http);
        assert_eq!(e.to_string(), "Failed (404 Not Found): missing");

        let e = ApiError::http(reqwest::StatusCode::BAD_GATEWAY, "  ".to_string(), "Failed");
        assert_eq!(e.to_string(), "Failed (502 Bad Gateway)");
    }
}

//! HTTP providers for the completion chain.

pub mod gemini;
pub mod openai;

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Response};
use serde_json::Value;

use vitrine_ai::{Provider, ProviderError, ProviderResolver};

pub use gemini::GeminiProvider;
pub use openai::OpenAiProvider;

/// Keys and models for the built-in providers.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ProviderSettings {
    pub google_api_key: Option<String>,
    pub gemini_model: String,
    pub openai_api_key: Option<String>,
    pub openai_model: String,
}

impl std::fmt::Debug for ProviderSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderSettings")
            .field("google_api_key", &self.google_api_key.as_ref().map(|_| "<redacted>"))
            .field("gemini_model", &self.gemini_model)
            .field("openai_api_key", &self.openai_api_key.as_ref().map(|_| "<redacted>"))
            .field("openai_model", &self.openai_model)
            .finish()
    }
}

/// Gemini first, OpenAI second, sharing one HTTP client.
pub fn build_resolver(settings: &ProviderSettings, timeout: Duration) -> ProviderResolver {
    let client = Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to build tuned HTTP client; using defaults");
            Client::new()
        });

    let providers: Vec<Arc<dyn Provider>> = vec![
        Arc::new(GeminiProvider::new(
            client.clone(),
            settings.google_api_key.clone(),
            settings.gemini_model.clone(),
        )),
        Arc::new(OpenAiProvider::new(
            client,
            settings.openai_api_key.clone(),
            settings.openai_model.clone(),
        )),
    ];

    let resolver = ProviderResolver::new(providers).with_timeout(timeout);
    tracing::info!(
        providers = ?resolver.provider_names(),
        any_available = resolver.has_available_provider(),
        "provider chain ready"
    );
    resolver
}

pub(crate) fn transport_error(e: reqwest::Error) -> ProviderError {
    ProviderError::Transport(e.to_string())
}

/// Turn a non-2xx response into `ProviderError::Status`, otherwise parse JSON.
pub(crate) async fn read_json(response: Response) -> Result<Value, ProviderError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ProviderError::Status {
            status: status.as_u16(),
            body,
        });
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| ProviderError::MalformedResponse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(google: Option<&str>, openai: Option<&str>) -> ProviderSettings {
        ProviderSettings {
            google_api_key: google.map(str::to_string),
            gemini_model: gemini::DEFAULT_GEMINI_MODEL.to_string(),
            openai_api_key: openai.map(str::to_string),
            openai_model: openai::DEFAULT_OPENAI_MODEL.to_string(),
        }
    }

    #[test]
    fn chain_is_gemini_then_openai() {
        let r = build_resolver(&settings(Some("g"), Some("sk")), Duration::from_secs(3));
        assert_eq!(r.provider_names(), vec!["gemini", "openai"]);
        assert_eq!(r.timeout(), Duration::from_secs(3));
        assert!(r.has_available_provider());
    }

    #[test]
    fn no_keys_means_nothing_available() {
        let r = build_resolver(
            &settings(None, Some(openai::PLACEHOLDER_OPENAI_KEY)),
            Duration::from_secs(1),
        );
        assert!(!r.has_available_provider());
    }

    #[test]
    fn debug_redacts_keys() {
        let out = format!("{:?}", settings(Some("secret-g"), Some("secret-o")));
        assert!(!out.contains("secret"));
        assert!(out.contains("<redacted>"));
    }

    /// Real providers against a local axum server standing in for both APIs.
    mod over_http {
        use super::*;
        use axum::Json;
        use axum::http::{HeaderMap, StatusCode};
        use axum::routing::post;
        use serde_json::json;
        use vitrine_ai::Completion;

        const GOOGLE_KEY: &str = "g-key";
        const OPENAI_KEY: &str = "sk-test";

        struct StubApi {
            base_url: String,
            handle: tokio::task::JoinHandle<()>,
        }

        impl StubApi {
            async fn spawn() -> Self {
                let app = axum::Router::new()
                    .route("/quota/models/:model", post(quota))
                    .route("/quota/chat/completions", post(quota))
                    .route("/empty/models/:model", post(empty_object))
                    .route("/empty/chat/completions", post(empty_object))
                    .route("/html/chat/completions", post(html_page))
                    .route("/ok/models/:model", post(gemini_ok))
                    .route("/ok/chat/completions", post(openai_ok));

                let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
                let base_url = format!("http://{}", listener.local_addr().unwrap());
                let handle = tokio::spawn(async move {
                    axum::serve(listener, app).await.unwrap();
                });
                Self { base_url, handle }
            }

            fn gemini(&self, prefix: &str, key: &str) -> GeminiProvider {
                GeminiProvider::new(Client::new(), Some(key.to_string()), gemini::DEFAULT_GEMINI_MODEL)
                    .with_base_url(format!("{}/{prefix}", self.base_url))
            }

            fn openai(&self, prefix: &str, key: &str) -> OpenAiProvider {
                OpenAiProvider::new(Client::new(), Some(key.to_string()), openai::DEFAULT_OPENAI_MODEL)
                    .with_base_url(format!("{}/{prefix}", self.base_url))
            }
        }

        impl Drop for StubApi {
            fn drop(&mut self) {
                self.handle.abort();
            }
        }

        fn header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
            headers.get(name).and_then(|v| v.to_str().ok())
        }

        async fn quota() -> (StatusCode, &'static str) {
            (StatusCode::TOO_MANY_REQUESTS, "quota")
        }

        async fn empty_object() -> Json<Value> {
            Json(json!({}))
        }

        async fn html_page() -> &'static str {
            "<html>maintenance</html>"
        }

        async fn gemini_ok(headers: HeaderMap, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
            if header(&headers, "x-goog-api-key") != Some(GOOGLE_KEY) {
                return (StatusCode::UNAUTHORIZED, Json(json!({ "error": "bad key" })));
            }
            let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap_or_default();
            assert!(prompt.ends_with("User Question: hi"));
            (
                StatusCode::OK,
                Json(json!({ "candidates": [{ "content": { "parts": [{ "text": "from gemini" }] } }] })),
            )
        }

        async fn openai_ok(headers: HeaderMap, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
            if header(&headers, "authorization") != Some("Bearer sk-test") {
                return (StatusCode::UNAUTHORIZED, Json(json!({ "error": "bad key" })));
            }
            assert_eq!(body["messages"][0]["role"], "system");
            assert_eq!(body["model"], openai::DEFAULT_OPENAI_MODEL);
            (
                StatusCode::OK,
                Json(json!({ "choices": [{ "message": { "role": "assistant", "content": "from openai" } }] })),
            )
        }

        #[tokio::test]
        async fn non_success_status_keeps_code_and_body() {
            let api = StubApi::spawn().await;
            let quota = ProviderError::Status {
                status: 429,
                body: "quota".to_string(),
            };

            assert_eq!(api.gemini("quota", GOOGLE_KEY).complete("hi").await, Err(quota.clone()));
            assert_eq!(api.openai("quota", OPENAI_KEY).complete("hi").await, Err(quota));
        }

        #[tokio::test]
        async fn bodies_without_text_are_malformed() {
            let api = StubApi::spawn().await;

            let r = api.gemini("empty", GOOGLE_KEY).complete("hi").await;
            assert!(matches!(r, Err(ProviderError::MalformedResponse(_))), "{r:?}");

            let r = api.openai("empty", OPENAI_KEY).complete("hi").await;
            assert!(matches!(r, Err(ProviderError::MalformedResponse(_))), "{r:?}");

            let r = api.openai("html", OPENAI_KEY).complete("hi").await;
            assert!(matches!(r, Err(ProviderError::MalformedResponse(_))), "{r:?}");
        }

        #[tokio::test]
        async fn keys_travel_in_provider_specific_headers() {
            let api = StubApi::spawn().await;

            assert_eq!(api.gemini("ok", GOOGLE_KEY).complete("hi").await.unwrap(), "from gemini");
            assert_eq!(api.openai("ok", OPENAI_KEY).complete("hi").await.unwrap(), "from openai");

            let r = api.gemini("ok", "wrong").complete("hi").await;
            assert!(matches!(r, Err(ProviderError::Status { status: 401, .. })), "{r:?}");
            let r = api.openai("ok", "sk-wrong").complete("hi").await;
            assert!(matches!(r, Err(ProviderError::Status { status: 401, .. })), "{r:?}");
        }

        #[tokio::test]
        async fn chain_falls_through_to_openai_when_gemini_is_throttled() {
            let api = StubApi::spawn().await;
            let providers: Vec<Arc<dyn Provider>> = vec![
                Arc::new(api.gemini("quota", GOOGLE_KEY)),
                Arc::new(api.openai("ok", OPENAI_KEY)),
            ];
            let resolver = ProviderResolver::new(providers).with_timeout(Duration::from_secs(5));

            assert_eq!(resolver.complete("hi").await, Completion::from_provider("openai", "from openai"));
        }
    }
}

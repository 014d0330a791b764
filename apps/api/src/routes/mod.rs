pub mod health;

use std::path::Path;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::{ServeDir, ServeFile};

use crate::enhance::handlers::handle_enhance;
use crate::letter::handlers::{handle_build_letter, handle_printable_letter};
use crate::lookup::handlers::handle_lookup_representative;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health_handler))
        .route("/api/representative", post(handle_lookup_representative))
        .route("/api/enhance", post(handle_enhance))
        .route("/api/letter", post(handle_build_letter))
        .route("/api/letter/printable", post(handle_printable_letter))
        .with_state(state)
}

/// Static files for the browser front end; unknown paths get `index.html`.
pub fn static_files(dir: &str) -> ServeDir<ServeFile> {
    ServeDir::new(dir).fallback(ServeFile::new(Path::new(dir).join("index.html")))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::llm_client::{LlmError, TextGenerator};
    use crate::lookup::civic_client::{LookupError, PostcodeResponse, RepresentativeSource};

    struct FakeRepresent(Option<Value>);

    #[async_trait]
    impl RepresentativeSource for FakeRepresent {
        async fn lookup(&self, _postal_code: &str) -> Result<PostcodeResponse, LookupError> {
            match &self.0 {
                Some(body) => Ok(serde_json::from_value(body.clone()).unwrap()),
                None => Err(LookupError::Status(500)),
            }
        }
    }

    struct EchoGenerator;

    #[async_trait]
    impl TextGenerator for EchoGenerator {
        async fn complete(&self, prompt: &str) -> Result<Option<String>, LlmError> {
            Ok(Some(format!("I am writing about this.\n\n{}", prompt.len())))
        }
    }

    fn represent_body() -> Value {
        json!({
            "representatives_centroid": [
                {
                    "name": "John Smith",
                    "elected_office": "MP",
                    "district_name": "Ottawa Centre",
                    "party_name": "Independent",
                    "email": "john.smith@parl.gc.ca",
                    "offices": [
                        {"type": "legislature", "postal": "House of Commons\nOttawa ON  K1A 0A6"},
                        {"type": "constituency", "postal": "K1A0A6", "tel": "613-555-0100"}
                    ]
                },
                {"name": "Mary Major", "elected_office": "MPP"}
            ],
            "representatives_concordance": [
                {"name": "John Smith", "elected_office": "MPP"}
            ]
        })
    }

    fn app(lookup: Option<Value>, with_generator: bool) -> Router {
        let text_generator =
            with_generator.then(|| Arc::new(EchoGenerator) as Arc<dyn TextGenerator>);
        build_router(AppState {
            representatives: Arc::new(FakeRepresent(lookup)),
            text_generator,
        })
    }

    async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn test_health() {
        let response = app(None, false)
            .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_representative_lookup_success() {
        let (status, body) = post_json(
            app(Some(represent_body()), false),
            "/api/representative",
            json!({"postalCode": "k1a 0a6", "level": "federal"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "John Smith");
        assert_eq!(body["elected_office"], "MP");
        assert_eq!(body["district_name"], "Ottawa Centre");
        assert_eq!(body["party_name"], "Independent");
        assert_eq!(body["email"], "john.smith@parl.gc.ca");
        assert_eq!(body["office_postal"], "K1A0A6");
        assert_eq!(body["office_tel"], "613-555-0100");
    }

    #[tokio::test]
    async fn test_representative_duplicate_name_does_not_leak_second_record() {
        // "John Smith" appears again in concordance as MPP; dedup keeps the MP record,
        // so the provincial lookup finds Mary Major instead.
        let (status, body) = post_json(
            app(Some(represent_body()), false),
            "/api/representative",
            json!({"postalCode": "K1A0A6", "level": "provincial"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Mary Major");
        assert_eq!(body["office_postal"], Value::Null);
    }

    #[tokio::test]
    async fn test_representative_missing_fields_is_400() {
        let (status, body) = post_json(
            app(Some(represent_body()), false),
            "/api/representative",
            json!({"postalCode": "K1A0A6"}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_REQUEST");
    }

    #[tokio::test]
    async fn test_representative_without_body_is_400() {
        let response = app(None, false)
            .oneshot(
                Request::post("/api/representative")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_representative_no_match_is_404() {
        let (status, body) = post_json(
            app(Some(json!({"representatives_centroid": []})), false),
            "/api/representative",
            json!({"postalCode": "K1A0A6", "level": "federal"}),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body["error"]["message"],
            "No representative found for this level. Check your postal code and level."
        );
    }

    #[tokio::test]
    async fn test_representative_upstream_failure_is_502() {
        let (status, _) = post_json(
            app(None, false),
            "/api/representative",
            json!({"postalCode": "K1A0A6", "level": "federal"}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_enhance_success() {
        let (status, body) = post_json(
            app(None, true),
            "/api/enhance",
            json!({
                "rawMessage": "fix the roads",
                "repName": "John Smith",
                "repRole": "Member of Parliament",
                "districtName": "Ottawa Centre"
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["enhancedBody"]
            .as_str()
            .unwrap()
            .starts_with("I am writing about this."));
    }

    #[tokio::test]
    async fn test_enhance_missing_fields_is_400() {
        let (status, _) = post_json(
            app(None, true),
            "/api/enhance",
            json!({"rawMessage": "fix the roads"}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_enhance_unconfigured_is_500() {
        let (status, body) = post_json(
            app(None, false),
            "/api/enhance",
            json!({
                "rawMessage": "fix the roads",
                "repName": "John Smith",
                "repRole": "Member of Parliament"
            }),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "ENHANCEMENT_UNCONFIGURED");
    }

    fn letter_request() -> Value {
        json!({
            "representative": {"name": "John Smith", "office_postal": "K1A0A6"},
            "level": "federal",
            "sender": {
                "name": "Jane Doe",
                "addr1": "1 Main St",
                "city": "Ottawa",
                "province": "ON",
                "postal": "K1A0A6"
            },
            "body": "Please support <bill> X & Y.",
            "date": "2024-03-05"
        })
    }

    #[tokio::test]
    async fn test_build_letter() {
        let (status, body) = post_json(app(None, false), "/api/letter", letter_request()).await;

        assert_eq!(status, StatusCode::OK);
        let letter = body["letter"].as_str().unwrap();
        assert!(letter.starts_with("Jane Doe\n1 Main St\nOttawa, ON K1A0A6\n\nMarch 5, 2024\n\n"));
        assert!(letter.contains("Dear John Smith,"));
        assert!(letter.ends_with("Sincerely,\n\nJane Doe"));
        assert!(!letter.contains("Re:"));
    }

    #[tokio::test]
    async fn test_build_letter_missing_sender_is_400() {
        let mut request = letter_request();
        request["sender"]["city"] = json!("");
        let (status, body) = post_json(app(None, false), "/api/letter", request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]["message"].as_str().unwrap().contains("city"));
    }

    #[tokio::test]
    async fn test_printable_letter_is_escaped_html() {
        let response = app(None, false)
            .oneshot(
                Request::post("/api/letter/printable")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(letter_request().to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/html"));

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.starts_with("<pre "));
        assert!(html.contains("Please support &lt;bill&gt; X &amp; Y."));
    }
}

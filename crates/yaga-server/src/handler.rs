//! Request dispatch: route → use case / static file → response.

use std::sync::Arc;
use tiny_http::Method;

use yaga_application::ExerciseSessionUseCase;
use yaga_core::error::Result;

use crate::dto::{NextResponse, StartResponse};
use crate::response::ApiResponse;
use crate::routes::{Route, RouteMatch};
use crate::static_files::{Asset, StaticFiles};

pub struct RequestHandler {
    usecase: Arc<ExerciseSessionUseCase>,
    static_files: StaticFiles,
}

impl RequestHandler {
    pub fn new(usecase: Arc<ExerciseSessionUseCase>, static_files: StaticFiles) -> Self {
        Self {
            usecase,
            static_files,
        }
    }

    /// Produces the response for one request. Never fails: errors become
    /// a 500 response and are logged.
    pub async fn handle(&self, method: &Method, url: &str) -> ApiResponse {
        let route = match Route::resolve(method, url) {
            RouteMatch::Found(route) => route,
            RouteMatch::MethodNotAllowed => return ApiResponse::method_not_allowed(),
            RouteMatch::NotFound => return ApiResponse::not_found(),
        };
        tracing::debug!("{} {} -> {:?}", method, url, route);

        match self.dispatch(route).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("{} {} failed: {}", method, url, e);
                ApiResponse::internal_error()
            }
        }
    }

    async fn dispatch(&self, route: Route) -> Result<ApiResponse> {
        match route {
            Route::Index => Ok(asset_response(self.static_files.index().await?)),
            Route::StaticAsset(path) => Ok(asset_response(self.static_files.load(&path).await?)),
            Route::StartChordPractice => {
                let session_id = self.usecase.start().await?;
                Ok(ApiResponse::ok_json(&StartResponse { session_id }))
            }
            Route::NextChordPrompt { session_id } => {
                let next = self.usecase.next(&session_id).await?;
                Ok(ApiResponse::ok_json(&NextResponse::from(next)))
            }
        }
    }
}

fn asset_response(asset: Option<Asset>) -> ApiResponse {
    match asset {
        Some(asset) => ApiResponse::file(asset.content_type, asset.body),
        None => ApiResponse::not_found(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;
    use std::fs;
    use yaga_core::config::SessionConfig;
    use yaga_infrastructure::InMemorySessionRepository;

    fn handler(static_root: &std::path::Path, settings: SessionConfig) -> RequestHandler {
        let repo = Arc::new(InMemorySessionRepository::new());
        let usecase = Arc::new(ExerciseSessionUseCase::new(repo, settings));
        RequestHandler::new(usecase, StaticFiles::new(static_root))
    }

    fn json(response: &ApiResponse) -> serde_json::Value {
        serde_json::from_slice(&response.body).unwrap()
    }

    #[tokio::test]
    async fn test_session_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let handler = handler(dir.path(), SessionConfig::default());

        let start = handler
            .handle(&Method::Post, "/exercise/chord-practice/start")
            .await;
        assert_eq!(start.status, 200);
        let session_id = json(&start)["session_id"].as_str().unwrap().to_string();

        let next_url = format!("/exercise/chord-practice/{}/next", session_id);
        let chord = Regex::new(r"^[A-G](#|b)?(m|7)?$").unwrap();
        for _ in 0..5 {
            let next = handler.handle(&Method::Get, &next_url).await;
            assert_eq!(next.status, 200);
            let body = json(&next);
            assert!(chord.is_match(body["prompt"].as_str().unwrap()), "{body}");
        }
        for _ in 0..3 {
            let done = handler.handle(&Method::Get, &next_url).await;
            assert_eq!(done.status, 200);
            assert_eq!(json(&done), serde_json::json!({"message": "Exercise complete"}));
        }
    }

    #[tokio::test]
    async fn test_unknown_session_completes() {
        let dir = tempfile::tempdir().unwrap();
        let handler = handler(dir.path(), SessionConfig::default());
        let response = handler
            .handle(&Method::Get, "/exercise/chord-practice/not-a-session/next")
            .await;
        assert_eq!(response.status, 200);
        assert_eq!(json(&response)["message"], "Exercise complete");
    }

    #[tokio::test]
    async fn test_index_and_static() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "<html></html>").unwrap();
        fs::write(dir.path().join("style.css"), "body {}").unwrap();
        let handler = handler(dir.path(), SessionConfig::default());

        let index = handler.handle(&Method::Get, "/").await;
        assert_eq!(index.status, 200);
        assert_eq!(index.content_type, "text/html");

        let css = handler.handle(&Method::Get, "/static/style.css").await;
        assert_eq!(css.status, 200);
        assert_eq!(css.content_type, "text/css");

        let missing = handler.handle(&Method::Get, "/static/nope.js").await;
        assert_eq!(missing.status, 404);
    }

    #[tokio::test]
    async fn test_encoded_static_paths() {
        let dir = tempfile::tempdir().unwrap();
        let site = dir.path().join("site");
        fs::create_dir(&site).unwrap();
        fs::write(site.join("my file.css"), "p {}").unwrap();
        fs::write(dir.path().join("secret.txt"), "hidden").unwrap();
        let handler = handler(&site, SessionConfig::default());

        let css = handler.handle(&Method::Get, "/static/my%20file.css").await;
        assert_eq!(css.status, 200);
        assert_eq!(css.body, b"p {}".to_vec());

        let escape = handler
            .handle(&Method::Get, "/static/..%2Fsecret.txt")
            .await;
        assert_eq!(escape.status, 404);
    }

    #[tokio::test]
    async fn test_routing_errors() {
        let dir = tempfile::tempdir().unwrap();
        let handler = handler(dir.path(), SessionConfig::default());
        assert_eq!(handler.handle(&Method::Get, "/nowhere").await.status, 404);
        assert_eq!(
            handler
                .handle(&Method::Get, "/exercise/chord-practice/start")
                .await
                .status,
            405
        );
    }

    #[tokio::test]
    async fn test_generation_failure_is_500() {
        let dir = tempfile::tempdir().unwrap();
        let handler = handler(
            dir.path(),
            SessionConfig {
                difficulty: 77,
                prompt_count: 5,
            },
        );
        let response = handler
            .handle(&Method::Post, "/exercise/chord-practice/start")
            .await;
        assert_eq!(response.status, 500);
        assert_eq!(json(&response)["detail"], "Internal Server Error");
    }
}

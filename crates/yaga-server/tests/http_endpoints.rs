use regex::Regex;
use serde_json::{Value, json};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tokio::task::JoinHandle;

use yaga_application::ExerciseSessionUseCase;
use yaga_core::config::{ServerConfig, SessionConfig};
use yaga_infrastructure::InMemorySessionRepository;
use yaga_server::{ExerciseServer, ShutdownHandle};

struct TestServer {
    base_url: String,
    shutdown: ShutdownHandle,
    task: JoinHandle<yaga_core::Result<()>>,
}

impl TestServer {
    fn start(static_dir: &Path) -> Self {
        let config = ServerConfig {
            bind_address: "127.0.0.1:0".to_string(),
            static_dir: static_dir.to_path_buf(),
        };
        let repository = Arc::new(InMemorySessionRepository::new());
        let usecase = Arc::new(ExerciseSessionUseCase::new(
            repository,
            SessionConfig::default(),
        ));
        let server = ExerciseServer::bind(&config, usecase).unwrap();
        let addr: SocketAddr = server.local_addr().unwrap();
        let shutdown = server.shutdown_handle();
        let task = tokio::spawn(server.run());

        Self {
            base_url: format!("http://{}", addr),
            shutdown,
            task,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn stop(self) {
        self.shutdown.shutdown();
        self.task.await.unwrap().unwrap();
    }
}

fn static_site() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<title>YAGA</title>").unwrap();
    std::fs::write(dir.path().join("app.js"), "// app").unwrap();
    dir
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_chord_practice_session_over_http() {
    let site = static_site();
    let server = TestServer::start(site.path());
    let client = reqwest::Client::new();

    let start = client
        .post(server.url("/exercise/chord-practice/start"))
        .send()
        .await
        .unwrap();
    assert_eq!(start.status(), 200);
    let body: Value = start.json().await.unwrap();
    let session_id = body["session_id"].as_str().unwrap().to_string();
    assert!(!session_id.is_empty());

    let next_url = server.url(&format!("/exercise/chord-practice/{}/next", session_id));
    let chord = Regex::new(r"^[A-G](#|b)?(m|7)?$").unwrap();
    for _ in 0..5 {
        let response = client.get(&next_url).send().await.unwrap();
        assert_eq!(response.status(), 200);
        let body: Value = response.json().await.unwrap();
        let prompt = body["prompt"].as_str().unwrap();
        assert!(chord.is_match(prompt), "unexpected prompt {prompt}");
    }

    for _ in 0..3 {
        let response = client.get(&next_url).send().await.unwrap();
        assert_eq!(response.status(), 200);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({"message": "Exercise complete"}));
    }

    server.stop().await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_unknown_session_over_http() {
    let site = static_site();
    let server = TestServer::start(site.path());

    let response = reqwest::get(server.url(
        "/exercise/chord-practice/00000000-0000-0000-0000-000000000000/next",
    ))
    .await
    .unwrap();
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"message": "Exercise complete"}));

    server.stop().await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_static_front_end_over_http() {
    let site = static_site();
    let server = TestServer::start(site.path());

    let index = reqwest::get(server.url("/")).await.unwrap();
    assert_eq!(index.status(), 200);
    assert_eq!(
        index.headers()["content-type"].to_str().unwrap(),
        "text/html"
    );
    assert_eq!(index.text().await.unwrap(), "<title>YAGA</title>");

    let script = reqwest::get(server.url("/static/app.js")).await.unwrap();
    assert_eq!(script.status(), 200);

    let missing = reqwest::get(server.url("/static/missing.png")).await.unwrap();
    assert_eq!(missing.status(), 404);

    let wrong_method = reqwest::get(server.url("/exercise/chord-practice/start"))
        .await
        .unwrap();
    assert_eq!(wrong_method.status(), 405);

    server.stop().await;
}

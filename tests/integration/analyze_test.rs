//! Integration tests for the analyze command against a mock analyzer

use tempfile::TempDir;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use chapview::analyzer::NO_FILE_ALERT;
use chapview::chapters::AnalysisResponse;

use crate::helpers::{fake_video, load_fixture, run_chapview};

const ANALYZER_PATH: &str = "/api/media-analyzer/vid-to-text";

async fn analyzer_returning(template: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ANALYZER_PATH))
        .and(body_string_contains("name=\"file\""))
        .respond_with(template)
        .mount(&server)
        .await;
    server
}

fn endpoint(server: &MockServer) -> String {
    format!("{}{}", server.uri(), ANALYZER_PATH)
}

/// Run the binary off the runtime so the mock server keeps serving.
async fn run(dir: TempDir, args: Vec<String>) -> (TempDir, (String, String, i32)) {
    tokio::task::spawn_blocking(move || {
        let refs: Vec<&str> = args.iter().map(String::as_str).collect();
        let result = run_chapview(&dir, &refs);
        (dir, result)
    })
    .await
    .expect("chapview run panicked")
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn missing_file_alerts_without_request() {
    let server = analyzer_returning(ResponseTemplate::new(200)).await;
    let dir = TempDir::new().unwrap();

    let args = vec!["analyze".to_string(), "--endpoint".to_string(), endpoint(&server)];
    let (_dir, (stdout, stderr, code)) = run(dir, args).await;

    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains(NO_FILE_ALERT), "stderr: {}", stderr);
    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn prints_chapters_from_analyzer() {
    let body = load_fixture("sample_response.json");
    let server =
        analyzer_returning(ResponseTemplate::new(200).set_body_string(body)).await;
    let dir = TempDir::new().unwrap();
    let video = fake_video(dir.path(), "talk.mp4");

    let args = vec![
        "analyze".to_string(),
        video.display().to_string(),
        "--endpoint".to_string(),
        endpoint(&server),
        "--duration".to_string(),
        "127".to_string(),
    ];
    let (_dir, (stdout, stderr, code)) = run(dir, args).await;

    assert_eq!(code, 0, "stderr: {}", stderr);
    assert!(stdout.contains("1. Intro (0:00:00)"));
    assert!(stdout.contains("2. Main (0:00:30)"));
    assert!(stdout.contains("23.6%"));
    assert!(stdout.contains("duration 0:02:07"));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let upload = String::from_utf8_lossy(&requests[0].body);
    assert!(upload.contains("filename=\"talk.mp4\""));
    assert!(upload.contains("video/mp4"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn json_flag_prints_response() {
    let body = load_fixture("sample_response.json");
    let server =
        analyzer_returning(ResponseTemplate::new(200).set_body_string(body)).await;
    let dir = TempDir::new().unwrap();
    let video = fake_video(dir.path(), "talk.webm");

    let args = vec![
        "analyze".to_string(),
        video.display().to_string(),
        "--endpoint".to_string(),
        endpoint(&server),
        "--json".to_string(),
    ];
    let (_dir, (stdout, _stderr, code)) = run(dir, args).await;

    assert_eq!(code, 0);
    let parsed = AnalysisResponse::from_json(&stdout).expect("stdout is a response");
    let titles: Vec<&str> = parsed.chapter_list().iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, ["Intro", "Main", "Outro"]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn output_flag_saves_renderable_response() {
    let body = load_fixture("sample_response.json");
    let server =
        analyzer_returning(ResponseTemplate::new(200).set_body_string(body)).await;
    let dir = TempDir::new().unwrap();
    let video = fake_video(dir.path(), "talk.mp4");
    let saved = dir.path().join("talk.chapters.json");

    let args = vec![
        "analyze".to_string(),
        video.display().to_string(),
        "--endpoint".to_string(),
        endpoint(&server),
        "--json".to_string(),
        "--output".to_string(),
        saved.display().to_string(),
    ];
    let (_dir, (_stdout, stderr, code)) = run(dir, args).await;

    assert_eq!(code, 0);
    assert!(stderr.contains("Saved response"));
    let loaded = AnalysisResponse::load(&saved).unwrap();
    assert_eq!(loaded.chapter_list().len(), 3);
    assert_eq!(loaded.span_end(), Some(127.0));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn server_error_fails() {
    let server =
        analyzer_returning(ResponseTemplate::new(500).set_body_string("boom")).await;
    let dir = TempDir::new().unwrap();
    let video = fake_video(dir.path(), "talk.mp4");

    let args = vec![
        "analyze".to_string(),
        video.display().to_string(),
        "--endpoint".to_string(),
        endpoint(&server),
        "--json".to_string(),
    ];
    let (_dir, (stdout, stderr, code)) = run(dir, args).await;

    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("HTTP 500"), "stderr: {}", stderr);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn unparseable_body_fails() {
    let server = analyzer_returning(
        ResponseTemplate::new(200).set_body_string(r#"{"chapters": {"items": []}}"#),
    )
    .await;
    let dir = TempDir::new().unwrap();
    let video = fake_video(dir.path(), "talk.mp4");

    let args = vec![
        "analyze".to_string(),
        video.display().to_string(),
        "--endpoint".to_string(),
        endpoint(&server),
        "--json".to_string(),
    ];
    let (_dir, (_stdout, stderr, code)) = run(dir, args).await;

    assert_eq!(code, 1);
    assert!(stderr.contains("could not be parsed"), "stderr: {}", stderr);
}

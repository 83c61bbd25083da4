//! Integration tests for the viewer controller against a mock analyzer

use std::time::Duration;

use tempfile::TempDir;
use tokio::runtime::Runtime;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use chapview::analyzer::AnalyzerClient;
use chapview::chapters::{time_to_seconds, Chapter};
use chapview::config::{AnalyzerConfig, ViewerConfig};
use chapview::viewer::{Controller, UploadOutcome};

use crate::helpers::{fake_video, load_fixture};

const WAIT: Duration = Duration::from_secs(10);

fn mock_analyzer(runtime: &Runtime, template: ResponseTemplate) -> MockServer {
    runtime.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/media-analyzer/vid-to-text"))
            .and(body_string_contains("name=\"file\""))
            .respond_with(template)
            .mount(&server)
            .await;
        server
    })
}

fn controller(runtime: &Runtime, server: &MockServer) -> Controller {
    let client = AnalyzerClient::new(&AnalyzerConfig {
        endpoint: format!("{}/api/media-analyzer/vid-to-text", server.uri()),
        ..AnalyzerConfig::default()
    })
    .unwrap();
    let config = ViewerConfig {
        probe_duration: false,
        ..ViewerConfig::default()
    };
    Controller::new(client, runtime.handle().clone(), config)
}

fn sample_response() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_string(load_fixture("sample_response.json"))
}

#[test]
fn successful_analysis_lists_and_marks_every_chapter() {
    let runtime = Runtime::new().unwrap();
    let server = mock_analyzer(&runtime, sample_response());
    let dir = TempDir::new().unwrap();
    let video = fake_video(dir.path(), "talk.mp4");
    let mut controller = controller(&runtime, &server).with_fixed_duration(Some(127.0));

    let outcome = controller.trigger_upload(Some(&video));
    assert_eq!(
        outcome,
        UploadOutcome::Started {
            file_name: "talk.mp4".to_string()
        }
    );
    assert!(controller.wait_for_event(WAIT));

    let view = controller.view();
    assert!(!view.is_loading());
    assert_eq!(view.list_entries(), ["Intro", "Main", "Outro"]);
    assert_eq!(view.markers().len(), 3);
    assert!((view.markers()[1].left_percent - 23.6).abs() < 0.05);
    assert!((view.markers()[2].width_percent - 21.3).abs() < 0.05);
    assert_eq!(view.metadata().map(|m| m.main_topics.len()), Some(2));
    assert!(view.transcript().unwrap().starts_with("Welcome"));
}

#[test]
fn activating_an_entry_seeks_to_its_start() {
    let runtime = Runtime::new().unwrap();
    let server = mock_analyzer(&runtime, sample_response());
    let dir = TempDir::new().unwrap();
    let video = fake_video(dir.path(), "talk.mp4");
    let mut controller = controller(&runtime, &server).with_fixed_duration(Some(127.0));

    controller.trigger_upload(Some(&video));
    assert!(controller.wait_for_event(WAIT));

    let view = controller.view_mut();
    let start = time_to_seconds(&view.chapters()[2].start_time);
    assert_eq!(view.activate_entry(2), Some(start));
    assert_eq!(view.clock.current_time, 100.0);
    assert_eq!(view.current_chapter(), Some(2));
}

#[test]
fn second_upload_while_loading_is_busy() {
    let runtime = Runtime::new().unwrap();
    let server = mock_analyzer(
        &runtime,
        sample_response().set_delay(Duration::from_millis(500)),
    );
    let dir = TempDir::new().unwrap();
    let video = fake_video(dir.path(), "talk.mp4");
    let mut controller = controller(&runtime, &server);

    assert!(matches!(
        controller.trigger_upload(Some(&video)),
        UploadOutcome::Started { .. }
    ));
    assert_eq!(controller.trigger_upload(Some(&video)), UploadOutcome::Busy);

    assert!(controller.wait_for_event(WAIT));
    let requests = runtime.block_on(server.received_requests()).unwrap();
    assert_eq!(requests.len(), 1);
}

#[test]
fn failed_analysis_keeps_previous_chapters() {
    let runtime = Runtime::new().unwrap();
    let server = mock_analyzer(&runtime, ResponseTemplate::new(503));
    let dir = TempDir::new().unwrap();
    let video = fake_video(dir.path(), "talk.mp4");
    let mut controller = controller(&runtime, &server).with_fixed_duration(Some(60.0));
    controller
        .view_mut()
        .set_chapters(vec![Chapter::new("Earlier", "00:00:00", "00:00:20")]);

    controller.trigger_upload(Some(&video));
    assert!(controller.wait_for_event(WAIT));

    let view = controller.view();
    assert!(!view.is_loading());
    assert_eq!(view.list_entries(), ["Earlier"]);
    assert_eq!(view.markers().len(), 1);
}

#[test]
fn unknown_duration_leaves_markers_undrawable() {
    let runtime = Runtime::new().unwrap();
    let server = mock_analyzer(&runtime, sample_response());
    let dir = TempDir::new().unwrap();
    let video = fake_video(dir.path(), "talk.mp4");
    let mut controller = controller(&runtime, &server);

    controller.trigger_upload(Some(&video));
    assert!(controller.wait_for_event(WAIT));

    let view = controller.view();
    assert_eq!(view.duration(), None);
    assert_eq!(view.markers().len(), 3);
    assert!(view.markers().iter().all(|m| !m.is_drawable()));

    controller.view_mut().set_duration(127.0);
    assert!(controller.view().markers().iter().all(|m| m.is_drawable()));
}

//! Viewer controller.
//!
//! Starts uploads and duration probes on a tokio runtime and feeds their
//! results back into the [`ChapterView`] through a channel. The UI loop calls
//! [`Controller::pump`] every tick, so the view is only ever touched from one
//! thread.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::Duration;

use tokio::runtime::Handle;

use super::view::{ChapterView, UploadDecision, ViewerEvent};
use crate::analyzer::{AnalyzerClient, PreviewSource};
use crate::config::ViewerConfig;
use crate::media::probe_duration;

/// What happened when an upload was requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// Nothing was sent; show this text in a blocking alert
    Alert(String),
    /// Nothing was sent; an upload is already running
    Busy,
    /// The upload is running in the background
    Started { file_name: String },
}

/// Drives a [`ChapterView`] from background work.
pub struct Controller {
    view: ChapterView,
    client: AnalyzerClient,
    runtime: Handle,
    events_tx: Sender<ViewerEvent>,
    events_rx: Receiver<ViewerEvent>,
    config: ViewerConfig,
    fixed_duration: Option<f64>,
}

impl Controller {
    pub fn new(client: AnalyzerClient, runtime: Handle, config: ViewerConfig) -> Self {
        let (events_tx, events_rx) = mpsc::channel();
        Self {
            view: ChapterView::new(),
            client,
            runtime,
            events_tx,
            events_rx,
            config,
            fixed_duration: None,
        }
    }

    /// Use `duration` for every video instead of probing it.
    pub fn with_fixed_duration(mut self, duration: Option<f64>) -> Self {
        self.fixed_duration = duration.filter(|d| d.is_finite() && *d > 0.0);
        self
    }

    pub fn view(&self) -> &ChapterView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ChapterView {
        &mut self.view
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Upload `selection` and start reading its duration.
    pub fn trigger_upload(&mut self, selection: Option<&Path>) -> UploadOutcome {
        let source = match self.view.begin_upload(selection) {
            UploadDecision::Alert(message) => {
                tracing::debug!(%message, "upload rejected");
                return UploadOutcome::Alert(message);
            }
            UploadDecision::Busy => return UploadOutcome::Busy,
            UploadDecision::Start(source) => source,
        };

        self.spawn_analysis(source.clone());
        self.load_metadata(&source);

        UploadOutcome::Started {
            file_name: source.file_name,
        }
    }

    fn spawn_analysis(&self, source: PreviewSource) {
        let client = self.client.clone();
        let tx = self.events_tx.clone();
        self.runtime.spawn(async move {
            let result = client.analyze_source(&source).await;
            // The receiver is gone once the viewer has quit
            let _ = tx.send(ViewerEvent::AnalysisFinished(result));
        });
    }

    fn load_metadata(&mut self, source: &PreviewSource) {
        if let Some(duration) = self.fixed_duration {
            self.view.apply(ViewerEvent::MetadataLoaded {
                source: source.path.clone(),
                duration,
            });
            return;
        }
        if !self.config.probe_duration {
            return;
        }

        let ffprobe = self.config.ffprobe.clone();
        let path: PathBuf = source.path.clone();
        let tx = self.events_tx.clone();
        self.runtime.spawn(async move {
            let event = match probe_duration(&ffprobe, &path).await {
                Ok(duration) => ViewerEvent::MetadataLoaded {
                    source: path,
                    duration,
                },
                Err(e) => ViewerEvent::MetadataFailed {
                    source: path,
                    message: e.to_string(),
                },
            };
            let _ = tx.send(event);
        });
    }

    /// Apply every event that has arrived. Returns how many were applied.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            self.view.apply(event);
            applied += 1;
        }
        applied
    }

    /// Block until one event arrives and apply it.
    ///
    /// Returns false on timeout.
    pub fn wait_for_event(&mut self, timeout: Duration) -> bool {
        match self.events_rx.recv_timeout(timeout) {
            Ok(event) => {
                self.view.apply(event);
                true
            }
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => false,
        }
    }

    /// Advance playback; returns true if a redraw is needed.
    pub fn tick(&mut self) -> bool {
        self.view.tick()
    }
}

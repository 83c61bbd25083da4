//! The chapter view-model.
//!
//! [`ChapterView`] owns everything the screen shows: the chapter list, the
//! video duration (once known), the derived timeline markers, the loading
//! flag, the selected file and its playback clock. Renderers read it; the
//! controller changes it through [`ChapterView::apply`] and the navigation
//! methods.

use std::path::{Path, PathBuf};

use crate::analyzer::{AnalyzeError, PreviewSource, NO_FILE_ALERT};
use crate::chapters::{AnalysisResponse, Chapter, ChapterMetadata};
use crate::timeline::{project_marker, TimelineMarker};
use crate::viewer::state::PlaybackClock;

/// Something that happened outside the UI loop.
#[derive(Debug)]
pub enum ViewerEvent {
    /// The upload request completed
    AnalysisFinished(Result<AnalysisResponse, AnalyzeError>),
    /// The duration of `source` became known
    MetadataLoaded { source: PathBuf, duration: f64 },
    /// The duration of `source` could not be determined
    MetadataFailed { source: PathBuf, message: String },
}

/// What to do with an upload request.
#[derive(Debug)]
pub enum UploadDecision {
    /// Show a blocking alert; nothing is sent
    Alert(String),
    /// An upload is already in flight; nothing is sent
    Busy,
    /// Send this file
    Start(PreviewSource),
}

/// Chapter list, markers and playback state for one viewer session.
#[derive(Debug, Default)]
pub struct ChapterView {
    chapters: Vec<Chapter>,
    metadata: Option<ChapterMetadata>,
    transcript: Option<String>,
    duration: Option<f64>,
    markers: Vec<TimelineMarker>,
    loading: bool,
    source: Option<PreviewSource>,
    selected: usize,
    /// Playback position of the selected file
    pub clock: PlaybackClock,
    /// True when the screen needs to be redrawn
    pub needs_render: bool,
}

impl ChapterView {
    pub fn new() -> Self {
        Self {
            needs_render: true,
            ..Self::default()
        }
    }

    // === Accessors ===

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn markers(&self) -> &[TimelineMarker] {
        &self.markers
    }

    pub fn duration(&self) -> Option<f64> {
        self.duration
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn source(&self) -> Option<&PreviewSource> {
        self.source.as_ref()
    }

    pub fn metadata(&self) -> Option<&ChapterMetadata> {
        self.metadata.as_ref()
    }

    pub fn transcript(&self) -> Option<&str> {
        self.transcript.as_deref()
    }

    /// Index of the highlighted list entry.
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_chapter(&self) -> Option<&Chapter> {
        self.chapters.get(self.selected)
    }

    /// Titles of the list entries, in navigation order.
    pub fn list_entries(&self) -> Vec<&str> {
        self.chapters.iter().map(|c| c.title.as_str()).collect()
    }

    // === Upload lifecycle ===

    /// Decide whether an upload of `selection` may start.
    ///
    /// On `Start`, the file becomes the playback source immediately: the
    /// clock rewinds, the previous duration is forgotten and the loading
    /// flag is raised. Chapters from an earlier upload stay until new ones
    /// arrive.
    pub fn begin_upload(&mut self, selection: Option<&Path>) -> UploadDecision {
        let Some(path) = selection.filter(|p| !p.as_os_str().is_empty()) else {
            return UploadDecision::Alert(NO_FILE_ALERT.to_string());
        };
        if self.loading {
            return UploadDecision::Busy;
        }

        let source = match PreviewSource::from_path(path) {
            Ok(source) => source,
            Err(e) => return UploadDecision::Alert(e.to_string()),
        };

        self.source = Some(source.clone());
        self.clock.reset();
        self.duration = None;
        self.loading = true;
        self.render_markers();
        UploadDecision::Start(source)
    }

    /// Apply an external event.
    pub fn apply(&mut self, event: ViewerEvent) {
        match event {
            ViewerEvent::AnalysisFinished(Ok(response)) => {
                self.loading = false;
                self.metadata = response.chapters.metadata.clone();
                self.transcript = response.transcript.clone();
                self.set_chapters(response.into_chapters());
            }
            ViewerEvent::AnalysisFinished(Err(e)) => {
                self.loading = false;
                tracing::error!(error = %e, "Error uploading video");
            }
            ViewerEvent::MetadataLoaded { source, duration } => {
                if self.is_current_source(&source) {
                    self.set_duration(duration);
                } else {
                    tracing::debug!(source = %source.display(), "ignoring metadata for stale source");
                }
            }
            ViewerEvent::MetadataFailed { source, message } => {
                tracing::warn!(source = %source.display(), %message, "video duration unavailable");
            }
        }
        self.needs_render = true;
    }

    fn is_current_source(&self, path: &Path) -> bool {
        match &self.source {
            Some(source) => source.path == path,
            None => true,
        }
    }

    // === Rendering inputs ===

    /// Replace the chapter list and re-project the markers.
    pub fn set_chapters(&mut self, chapters: Vec<Chapter>) {
        self.chapters = chapters;
        self.selected = 0;
        self.render_markers();
        self.report_issues();
    }

    /// Record the video duration and re-project the markers.
    pub fn set_duration(&mut self, duration: f64) {
        self.duration = Some(duration);
        self.render_markers();
        self.report_issues();
    }

    /// Discard the current markers and project one per chapter.
    ///
    /// An unknown duration projects against 0, which yields markers that
    /// are not drawable until the duration arrives.
    pub fn render_markers(&mut self) {
        let duration = self.duration.unwrap_or(0.0);
        self.markers.clear();
        self.markers
            .extend(self.chapters.iter().map(|c| project_marker(c, duration)));
        self.needs_render = true;
    }

    fn report_issues(&self) {
        for (idx, chapter) in self.chapters.iter().enumerate() {
            for issue in chapter.issues(self.duration) {
                tracing::warn!(chapter = idx + 1, title = %chapter.title, "{}", issue);
            }
        }
    }

    // === Navigation ===

    /// Activate list entry `index`: select it and seek to its start.
    ///
    /// Returns the new position, or `None` if the entry does not exist or
    /// its start time is not a number.
    pub fn activate_entry(&mut self, index: usize) -> Option<f64> {
        let start = self.chapters.get(index)?.start_seconds();
        self.selected = index;
        self.needs_render = true;
        if !start.is_finite() {
            tracing::warn!(chapter = index + 1, "cannot seek to malformed start time");
            return None;
        }
        Some(self.clock.seek(start, self.duration))
    }

    /// Activate the highlighted entry.
    pub fn activate_selected(&mut self) -> Option<f64> {
        self.activate_entry(self.selected)
    }

    /// Move the highlight down, wrapping around.
    pub fn select_next(&mut self) {
        if !self.chapters.is_empty() {
            self.selected = (self.selected + 1) % self.chapters.len();
            self.needs_render = true;
        }
    }

    /// Move the highlight up, wrapping around.
    pub fn select_previous(&mut self) {
        if !self.chapters.is_empty() {
            self.selected = if self.selected > 0 {
                self.selected - 1
            } else {
                self.chapters.len() - 1
            };
            self.needs_render = true;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
        self.needs_render = true;
    }

    pub fn select_last(&mut self) {
        self.selected = self.chapters.len().saturating_sub(1);
        self.needs_render = true;
    }

    /// Index of the chapter containing the playback position.
    pub fn current_chapter(&self) -> Option<usize> {
        let now = self.clock.current_time;
        self.chapters.iter().position(|c| c.contains(now))
    }

    /// Jump to the first chapter starting after the playback position.
    pub fn next_chapter(&mut self) -> Option<f64> {
        let now = self.clock.current_time;
        let idx = self
            .chapters
            .iter()
            .position(|c| c.start_seconds() > now + 0.1)?;
        self.activate_entry(idx)
    }

    /// Jump to the start of the previous chapter.
    ///
    /// More than a second into a chapter this restarts the chapter itself.
    pub fn previous_chapter(&mut self) -> Option<f64> {
        let now = self.clock.current_time;
        let idx = self
            .chapters
            .iter()
            .rposition(|c| c.start_seconds() < now - 1.0)?;
        self.activate_entry(idx)
    }

    // === Playback ===

    /// Advance the clock; returns true if a redraw is needed.
    pub fn tick(&mut self) -> bool {
        if self.clock.tick(self.duration) {
            self.needs_render = true;
        }
        self.needs_render
    }

    pub fn seek(&mut self, time: f64) -> f64 {
        self.needs_render = true;
        self.clock.seek(time, self.duration)
    }

    pub fn seek_by(&mut self, delta: f64) -> f64 {
        self.needs_render = true;
        self.clock.seek_by(delta, self.duration)
    }
}

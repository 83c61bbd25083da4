//! Interactive chapter viewer
//!
//! Shows the chapter list of an analyzed video next to the details of the
//! highlighted chapter, with a timeline track whose markers follow the
//! chapters. Uploads and duration probes run in the background; their
//! results are pulled in on every tick.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::app::modals::{render_alert_modal, render_help_modal};
use super::app::status_footer::{render_footer, render_status_line};
use super::app::App;
use crate::theme::current_theme;
use crate::viewer::input::handle_event;
use crate::viewer::render::{
    build_chapter_lines, build_detail_lines, build_header_line, build_progress_line,
    build_status_text, build_viewer_layout, list_scroll_offset, list_visible_rows, ViewerLayout,
};
use crate::viewer::{Controller, InputResult, UploadOutcome};

/// UI mode of the viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Browsing chapters and controlling playback
    #[default]
    Normal,
    /// Typing the path of the video to upload
    FileInput,
    /// A blocking alert is shown
    Alert,
    /// Showing keyboard shortcuts
    Help,
}

/// Viewer state apart from the terminal.
pub struct ViewerSession {
    controller: Controller,
    mode: Mode,
    /// Path being typed in file input mode
    file_input: String,
    /// Video the next upload sends
    selected_path: Option<PathBuf>,
    alert: Option<String>,
    status_message: Option<String>,
    layout: ViewerLayout,
}

impl ViewerSession {
    pub fn new(controller: Controller) -> Self {
        Self {
            controller,
            mode: Mode::Normal,
            file_input: String::new(),
            selected_path: None,
            alert: None,
            status_message: None,
            layout: ViewerLayout::default(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn selected_path(&self) -> Option<&PathBuf> {
        self.selected_path.as_ref()
    }

    /// Select `path` for the next upload.
    pub fn select_path(&mut self, path: Option<PathBuf>) {
        self.selected_path = path;
    }

    /// Upload the selected video.
    pub fn upload(&mut self) {
        match self.controller.trigger_upload(self.selected_path.as_deref()) {
            UploadOutcome::Alert(message) => {
                self.alert = Some(message);
                self.mode = Mode::Alert;
            }
            UploadOutcome::Busy => {
                self.status_message = Some("An upload is already in progress".to_string());
            }
            UploadOutcome::Started { .. } => {
                self.status_message = None;
            }
        }
    }

    /// Pull in background results and advance playback.
    pub fn update(&mut self) {
        self.controller.pump();
        self.controller.tick();
    }

    /// Handle one terminal event. Returns true when the viewer should quit.
    pub fn handle_event(&mut self, event: Event) -> bool {
        let quit = match self.mode {
            Mode::Normal => self.handle_normal_event(event),
            Mode::FileInput | Mode::Alert | Mode::Help => {
                if let Event::Key(key) = event {
                    if key.kind == KeyEventKind::Press {
                        self.handle_modal_key(key);
                    }
                }
                false
            }
        };
        self.controller.view_mut().needs_render = true;
        quit
    }

    fn handle_normal_event(&mut self, event: Event) -> bool {
        if matches!(event, Event::Key(_)) {
            self.status_message = None;
        }
        let seek_step = self.controller.config().seek_step;
        let layout = self.layout;
        match handle_event(event, self.controller.view_mut(), &layout, seek_step) {
            InputResult::Continue => false,
            InputResult::Quit => true,
            InputResult::Upload => {
                self.upload();
                false
            }
            InputResult::EditPath => {
                self.file_input = self
                    .selected_path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default();
                self.mode = Mode::FileInput;
                false
            }
            InputResult::Help => {
                self.mode = Mode::Help;
                false
            }
        }
    }

    fn handle_modal_key(&mut self, key: KeyEvent) {
        match self.mode {
            Mode::FileInput => match key.code {
                KeyCode::Char(c) => self.file_input.push(c),
                KeyCode::Backspace => {
                    self.file_input.pop();
                }
                KeyCode::Enter => {
                    let input = self.file_input.trim();
                    self.selected_path = (!input.is_empty()).then(|| PathBuf::from(input));
                    self.status_message = self
                        .selected_path
                        .as_ref()
                        .map(|p| format!("Selected {} (u: upload)", p.display()));
                    self.mode = Mode::Normal;
                }
                KeyCode::Esc => self.mode = Mode::Normal,
                _ => {}
            },
            Mode::Alert => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                    self.alert = None;
                    self.mode = Mode::Normal;
                }
            }
            Mode::Help => self.mode = Mode::Normal,
            Mode::Normal => {}
        }
    }

    /// Draw the whole screen.
    pub fn draw(&mut self, frame: &mut Frame) {
        let theme = current_theme();
        let area = frame.area();
        self.layout = build_viewer_layout(area);
        let layout = self.layout;
        let view = self.controller.view();

        frame.render_widget(Paragraph::new(build_header_line(view, &theme)), layout.header);

        // Chapter list
        let rows = list_visible_rows(layout.list);
        let offset = list_scroll_offset(view.selected(), rows);
        let lines = build_chapter_lines(
            view.chapters(),
            view.selected(),
            view.current_chapter(),
            offset,
            rows,
            layout.list.width.saturating_sub(2) as usize,
            &theme,
        );
        let list = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.text_secondary_style())
                .title(" Chapters "),
        );
        frame.render_widget(list, layout.list);

        // Details
        let details = Paragraph::new(build_detail_lines(
            view.selected_chapter(),
            view.metadata(),
            view.transcript(),
            &theme,
        ))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.text_secondary_style()),
        )
        .wrap(Wrap { trim: false });
        frame.render_widget(details, layout.details);

        // Timeline
        let track = build_progress_line(
            layout.timeline.width,
            view.clock.current_time,
            view.duration(),
            view.markers(),
            &theme,
        );
        frame.render_widget(Paragraph::new(track), layout.timeline);

        let status = self.status_text();
        render_status_line(frame, layout.status, &status);
        render_footer(frame, layout.footer, footer_keys(self.mode));

        match self.mode {
            Mode::Alert => {
                if let Some(message) = &self.alert {
                    render_alert_modal(frame, area, message);
                }
            }
            Mode::Help => render_help_modal(frame, area),
            Mode::Normal | Mode::FileInput => {}
        }
    }

    fn status_text(&self) -> String {
        match self.mode {
            Mode::FileInput => format!("Video file: {}_", self.file_input),
            _ => build_status_text(self.controller.view(), self.status_message.as_deref()),
        }
    }

    /// Whether the screen is out of date.
    pub fn needs_render(&self) -> bool {
        self.controller.view().needs_render
    }

    fn rendered(&mut self) {
        self.controller.view_mut().needs_render = false;
    }
}

/// Key hints for each mode.
fn footer_keys(mode: Mode) -> &'static [(&'static str, &'static str)] {
    match mode {
        Mode::Normal => &[
            ("o", "file"),
            ("u", "upload"),
            ("\u{2191}\u{2193}", "select"),
            ("Enter", "jump"),
            ("n/p", "chapter"),
            ("space", "play"),
            ("?", "help"),
            ("q", "quit"),
        ],
        Mode::FileInput => &[("Enter", "select"), ("Esc", "cancel"), ("Backspace", "delete")],
        Mode::Alert => &[("Enter/Esc", "dismiss")],
        Mode::Help => &[("any key", "close help")],
    }
}

/// The interactive viewer bound to the terminal.
pub struct ViewerApp {
    app: App,
    session: ViewerSession,
}

impl ViewerApp {
    /// Take over the terminal; redraws at least every `tick`.
    pub fn new(controller: Controller, tick: Duration) -> Result<Self> {
        Ok(Self {
            app: App::new(tick)?,
            session: ViewerSession::new(controller),
        })
    }

    /// Select `path` and upload it right away.
    pub fn open(&mut self, path: PathBuf) {
        self.session.select_path(Some(path));
        self.session.upload();
    }

    /// Run until the user quits.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.session.update();

            if self.session.needs_render() {
                let session = &mut self.session;
                self.app.draw(|frame| session.draw(frame))?;
                session.rendered();
            }

            if let Some(event) = self.app.poll_event()? {
                if self.session.handle_event(event) {
                    break;
                }
            }
        }
        tracing::debug!("viewer closed");
        Ok(())
    }
}

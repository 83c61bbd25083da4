//! Chapter list and details panel.

use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::chapters::{format_timestamp, transcript_excerpt, Chapter, ChapterMetadata};
use crate::theme::Theme;
use crate::timeline::truncate_to_width;

/// Visible rows of the chapter list.
///
/// Each row reads `> 2. Title    0:00:30`: a selection marker, the number,
/// the title truncated to fit and the start time. The chapter under the
/// playhead is drawn in the accent color.
pub fn build_chapter_lines(
    chapters: &[Chapter],
    selected: usize,
    playing: Option<usize>,
    offset: usize,
    rows: usize,
    width: usize,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let digits = chapters.len().to_string().len();

    chapters
        .iter()
        .enumerate()
        .skip(offset)
        .take(rows)
        .map(|(idx, chapter)| {
            let prefix = if idx == selected { "> " } else { "  " };
            let number = format!("{:>digits$}. ", idx + 1, digits = digits);
            let start = format!(" {}", format_timestamp(chapter.start_seconds()));

            let fixed = prefix.len() + number.len() + start.len();
            let title = truncate_to_width(&chapter.title, width.saturating_sub(fixed));
            let pad = width.saturating_sub(fixed + title.width());

            let style = if idx == selected {
                theme.highlight_style()
            } else if Some(idx) == playing {
                theme.accent_style()
            } else {
                theme.text_style()
            };

            Line::from(vec![
                Span::styled(format!("{}{}{}", prefix, number, title), style),
                Span::styled(" ".repeat(pad), style),
                Span::styled(start, style.patch(theme.text_secondary_style())),
            ])
        })
        .collect()
}

/// Details of the highlighted chapter, or a hint when there is none.
///
/// A chapter without `content` shows its share of the transcript instead.
/// An analysis that produced a transcript but no chapters shows the whole
/// transcript.
pub fn build_detail_lines(
    chapter: Option<&Chapter>,
    metadata: Option<&ChapterMetadata>,
    transcript: Option<&str>,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let transcript = transcript.filter(|t| !t.trim().is_empty());
    let Some(chapter) = chapter else {
        if let Some(transcript) = transcript {
            let mut lines = vec![section_heading("Transcript", theme)];
            lines.extend(text_lines(transcript.lines(), theme));
            return lines;
        }
        return vec![
            Line::from(Span::styled(
                "No chapters yet",
                theme.accent_bold_style(),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("o", theme.accent_style()),
                Span::styled(" choose a video, ", theme.text_secondary_style()),
                Span::styled("u", theme.accent_style()),
                Span::styled(" upload it for analysis", theme.text_secondary_style()),
            ]),
        ];
    };

    let mut lines = vec![
        Line::from(Span::styled(
            chapter.title.clone(),
            theme.accent_bold_style(),
        )),
        Line::from(Span::styled(
            format!(
                "{} - {}",
                format_timestamp(chapter.start_seconds()),
                format_timestamp(chapter.end_seconds())
            ),
            theme.text_secondary_style(),
        )),
        Line::from(""),
    ];

    match chapter.content.as_deref().filter(|c| !c.trim().is_empty()) {
        Some(content) => lines.extend(text_lines(content.lines(), theme)),
        None => {
            let excerpt = transcript
                .map(|t| transcript_excerpt(t, chapter))
                .unwrap_or_default();
            if !excerpt.is_empty() {
                lines.push(section_heading("Transcript", theme));
                lines.extend(text_lines(excerpt, theme));
            }
        }
    }

    if let Some(topics) = metadata.map(|m| &m.main_topics).filter(|t| !t.is_empty()) {
        lines.push(Line::from(""));
        lines.push(section_heading("Main topics", theme));
        lines.extend(
            topics
                .iter()
                .map(|t| Line::from(Span::styled(format!("  {}", t), theme.text_style()))),
        );
    }

    lines
}

fn section_heading(title: &'static str, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        title,
        theme.text_secondary_style().add_modifier(Modifier::BOLD),
    ))
}

fn text_lines<'a, I>(lines: I, theme: &Theme) -> impl Iterator<Item = Line<'static>> + 'a
where
    I: IntoIterator<Item = &'a str>,
    I::IntoIter: 'a,
{
    let style = theme.text_style();
    lines
        .into_iter()
        .map(move |l| Line::from(Span::styled(l.to_string(), style)))
}

//! Analyzer response types.
//!
//! The analyzer answers an upload with a JSON document shaped like:
//!
//! ```json
//! {
//!   "transcript": "[0:00:00] Hello ...",
//!   "chapters": {
//!     "chapters": [
//!       {"chapterNumber": 1, "title": "Intro", "content": "...",
//!        "startTime": "0:00:00", "endTime": "0:00:30"}
//!     ],
//!     "metadata": {"totalChapters": 1, "mainTopics": ["..."]}
//!   }
//! }
//! ```
//!
//! Only `chapters.chapters[].{title,startTime,endTime}` are required. The
//! other fields come straight from model output, so they are read leniently:
//! a value of the wrong type is dropped instead of failing the response.

use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::time::{parse_timestamp, time_to_seconds, TimestampError};

/// A named sub-segment of a video.
///
/// Boundaries are kept as the strings the analyzer sent; they are converted
/// to seconds on demand so that malformed values stay visible as `NaN`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    #[serde(
        default,
        deserialize_with = "lenient_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub chapter_number: Option<u32>,
    pub title: String,
    /// Transcript excerpt covered by this chapter
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub content: Option<String>,
    pub start_time: String,
    pub end_time: String,
}

impl Chapter {
    /// Create a chapter from its title and `H:MM:SS` boundaries.
    pub fn new(
        title: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            chapter_number: None,
            title: title.into(),
            content: None,
            start_time: start_time.into(),
            end_time: end_time.into(),
        }
    }

    /// Start of the chapter in seconds (`NaN` when malformed).
    pub fn start_seconds(&self) -> f64 {
        time_to_seconds(&self.start_time)
    }

    /// End of the chapter in seconds (`NaN` when malformed).
    pub fn end_seconds(&self) -> f64 {
        time_to_seconds(&self.end_time)
    }

    /// Whether `time` falls inside `[start, end)`.
    pub fn contains(&self, time: f64) -> bool {
        time >= self.start_seconds() && time < self.end_seconds()
    }

    /// List the ways this chapter breaks `start <= end <= duration`.
    ///
    /// Purely diagnostic: nothing rejects or repairs such chapters.
    pub fn issues(&self, duration: Option<f64>) -> Vec<ChapterIssue> {
        let mut issues = Vec::new();
        let start = parse_timestamp(&self.start_time);
        let end = parse_timestamp(&self.end_time);

        if let Err(e) = &start {
            issues.push(ChapterIssue::MalformedStart(e.clone()));
        }
        if let Err(e) = &end {
            issues.push(ChapterIssue::MalformedEnd(e.clone()));
        }
        if let (Ok(start), Ok(end)) = (start, end) {
            if start > end {
                issues.push(ChapterIssue::StartAfterEnd { start, end });
            }
            if let Some(duration) = duration.filter(|d| d.is_finite() && *d > 0.0) {
                if end > duration {
                    issues.push(ChapterIssue::EndPastDuration { end, duration });
                }
            }
        }
        issues
    }
}

/// A violation of the chapter bounds invariant.
#[derive(Debug, Clone, PartialEq)]
pub enum ChapterIssue {
    MalformedStart(TimestampError),
    MalformedEnd(TimestampError),
    StartAfterEnd { start: f64, end: f64 },
    EndPastDuration { end: f64, duration: f64 },
}

impl fmt::Display for ChapterIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedStart(e) => write!(f, "malformed start time: {}", e),
            Self::MalformedEnd(e) => write!(f, "malformed end time: {}", e),
            Self::StartAfterEnd { start, end } => {
                write!(f, "starts at {}s but ends at {}s", start, end)
            }
            Self::EndPastDuration { end, duration } => {
                write!(f, "ends at {}s, past the {}s video", end, duration)
            }
        }
    }
}

/// Summary the analyzer attaches to the chapter list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterMetadata {
    #[serde(
        default,
        deserialize_with = "lenient_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_chapters: Option<u32>,
    #[serde(default, deserialize_with = "lenient_topics")]
    pub main_topics: Vec<String>,
}

/// The `chapters` object of an analyzer response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChapterDocument {
    pub chapters: Vec<Chapter>,
    #[serde(
        default,
        deserialize_with = "lenient_metadata",
        skip_serializing_if = "Option::is_none"
    )]
    pub metadata: Option<ChapterMetadata>,
}

/// Full analyzer response body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub transcript: Option<String>,
    pub chapters: ChapterDocument,
}

impl AnalysisResponse {
    /// Parse a response body.
    pub fn from_json(body: &str) -> serde_json::Result<Self> {
        serde_json::from_str(body)
    }

    /// Load a previously saved response from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let body = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_json(&body)
            .with_context(|| format!("{} is not an analyzer response", path.display()))
    }

    /// Save the response as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let body = serde_json::to_string_pretty(self)?;
        fs::write(path, body).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    /// The ordered chapter list (`response.chapters.chapters`).
    pub fn chapter_list(&self) -> &[Chapter] {
        &self.chapters.chapters
    }

    /// Consume the response, keeping only the chapter list.
    pub fn into_chapters(self) -> Vec<Chapter> {
        self.chapters.chapters
    }

    /// Latest chapter end in seconds, ignoring malformed values.
    ///
    /// Used as a stand-in duration when the real one is unknown.
    pub fn span_end(&self) -> Option<f64> {
        self.chapter_list()
            .iter()
            .map(Chapter::end_seconds)
            .filter(|end| end.is_finite())
            .fold(None, |acc: Option<f64>, end| Some(acc.map_or(end, |a| a.max(end))))
    }
}

/// Text of the `[H:MM:SS] text` transcript lines that fall inside `chapter`.
///
/// Lines without a readable timestamp are skipped.
pub fn transcript_excerpt<'a>(transcript: &'a str, chapter: &Chapter) -> Vec<&'a str> {
    transcript
        .lines()
        .filter_map(|line| {
            let (stamp, text) = line.trim().strip_prefix('[')?.split_once(']')?;
            let at = time_to_seconds(stamp);
            (at.is_finite() && chapter.contains(at)).then(|| text.trim())
        })
        .filter(|text| !text.is_empty())
        .collect()
}

// Lenient readers for model-generated fields

/// Whole non-negative number, also when sent as `"3"` or `3.0`.
fn lenient_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    let count = match value {
        Some(Value::Number(n)) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| *f >= 0.0 && f.fract() == 0.0)
                .map(|f| f as u64)
        }),
        Some(Value::String(s)) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    Ok(count.and_then(|n| u32::try_from(n).ok()))
}

/// Text, also when sent as a list of fragments.
fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Array(items)) => {
            let parts: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
            (!parts.is_empty()).then(|| parts.join(" "))
        }
        _ => None,
    })
}

/// String entries of a list; anything else counts as no topics.
fn lenient_topics<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

/// Metadata object, or `None` when it is not an object.
fn lenient_metadata<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<ChapterMetadata>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .filter(Value::is_object)
        .and_then(|v| serde_json::from_value(v).ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "transcript": "[0:00:00] hello\n[0:00:31] main part",
        "chapters": {
            "chapters": [
                {"chapterNumber": 1, "title": "Intro", "content": "hello",
                 "startTime": "0:00:00", "endTime": "0:00:30"},
                {"chapterNumber": 2, "title": "Main", "content": "main part",
                 "startTime": "0:00:30", "endTime": "0:01:40"},
                {"title": "Outro", "startTime": "0:01:40", "endTime": "0:02:07"}
            ],
            "metadata": {"totalChapters": 3, "mainTopics": ["greeting", "content"]}
        }
    }"#;

    #[test]
    fn parses_full_response() {
        let response = AnalysisResponse::from_json(SAMPLE).unwrap();
        let chapters = response.chapter_list();
        assert_eq!(chapters.len(), 3);
        assert_eq!(chapters[0].title, "Intro");
        assert_eq!(chapters[0].chapter_number, Some(1));
        assert_eq!(chapters[1].content.as_deref(), Some("main part"));
        assert_eq!(chapters[2].chapter_number, None);
        assert_eq!(chapters[2].end_time, "0:02:07");

        let metadata = response.chapters.metadata.unwrap();
        assert_eq!(metadata.total_chapters, Some(3));
        assert_eq!(metadata.main_topics, vec!["greeting", "content"]);
    }

    #[test]
    fn parses_minimal_response() {
        let body = r#"{"chapters": {"chapters": [
            {"title": "Only", "startTime": "00:00:00", "endTime": "00:00:10"}
        ]}}"#;
        let response = AnalysisResponse::from_json(body).unwrap();
        assert!(response.transcript.is_none());
        assert!(response.chapters.metadata.is_none());
        assert_eq!(response.chapter_list()[0].end_seconds(), 10.0);
    }

    #[test]
    fn rejects_null_chapters() {
        // The analyzer sends null when its model output could not be parsed
        let body = r#"{"transcript": "x", "chapters": null}"#;
        assert!(AnalysisResponse::from_json(body).is_err());
    }

    fn single_chapter_body(extra_chapter: &str, metadata: &str) -> String {
        format!(
            r#"{{"chapters": {{"chapters": [
                {{{} "title": "Intro", "startTime": "0:00:00", "endTime": "0:00:30"}}
            ], "metadata": {}}}}}"#,
            extra_chapter, metadata
        )
    }

    #[test]
    fn accepts_chapter_number_as_string_or_float() {
        let body = single_chapter_body(r#""chapterNumber": "1","#, "null");
        let response = AnalysisResponse::from_json(&body).unwrap();
        assert_eq!(response.chapter_list()[0].chapter_number, Some(1));
        assert_eq!(response.chapter_list()[0].title, "Intro");

        let body = single_chapter_body(r#""chapterNumber": 2.0,"#, "null");
        let response = AnalysisResponse::from_json(&body).unwrap();
        assert_eq!(response.chapter_list()[0].chapter_number, Some(2));
    }

    #[test]
    fn drops_unusable_chapter_number() {
        for raw in [r#""one""#, "-1", "1.5", "true", "[1]"] {
            let body = single_chapter_body(&format!(r#""chapterNumber": {},"#, raw), "null");
            let response = AnalysisResponse::from_json(&body).unwrap();
            assert_eq!(response.chapter_list()[0].chapter_number, None, "{}", raw);
        }
    }

    #[test]
    fn null_main_topics_keeps_chapters() {
        let body = single_chapter_body("", r#"{"totalChapters": "1", "mainTopics": null}"#);
        let response = AnalysisResponse::from_json(&body).unwrap();
        assert_eq!(response.chapter_list().len(), 1);
        let metadata = response.chapters.metadata.unwrap();
        assert_eq!(metadata.total_chapters, Some(1));
        assert!(metadata.main_topics.is_empty());
    }

    #[test]
    fn main_topics_keep_only_strings() {
        let body = single_chapter_body("", r#"{"mainTopics": ["a", 2, null, "b"]}"#);
        let response = AnalysisResponse::from_json(&body).unwrap();
        assert_eq!(response.chapters.metadata.unwrap().main_topics, ["a", "b"]);
    }

    #[test]
    fn non_object_metadata_is_dropped() {
        for raw in ["null", r#""none""#, "[]", "3"] {
            let response = AnalysisResponse::from_json(&single_chapter_body("", raw)).unwrap();
            assert!(response.chapters.metadata.is_none(), "{}", raw);
            assert_eq!(response.chapter_list().len(), 1);
        }
    }

    #[test]
    fn content_as_list_is_joined() {
        let body = single_chapter_body(r#""content": ["Hello", "there"],"#, "null");
        let response = AnalysisResponse::from_json(&body).unwrap();
        assert_eq!(
            response.chapter_list()[0].content.as_deref(),
            Some("Hello there")
        );

        let body = single_chapter_body(r#""content": 42,"#, "null");
        let response = AnalysisResponse::from_json(&body).unwrap();
        assert_eq!(response.chapter_list()[0].content, None);
    }

    #[test]
    fn non_string_transcript_is_dropped() {
        let body = r#"{"transcript": {"segments": []}, "chapters": {"chapters": []}}"#;
        let response = AnalysisResponse::from_json(body).unwrap();
        assert!(response.transcript.is_none());
    }

    #[test]
    fn transcript_excerpt_follows_chapter_bounds() {
        let transcript = "[0:00:00] hello\n[0:00:29] still intro\n[0:00:30] main part\nno stamp\n[later] skipped";
        let intro = Chapter::new("Intro", "0:00:00", "0:00:30");
        let main = Chapter::new("Main", "0:00:30", "0:01:40");

        assert_eq!(transcript_excerpt(transcript, &intro), ["hello", "still intro"]);
        assert_eq!(transcript_excerpt(transcript, &main), ["main part"]);
        assert!(transcript_excerpt("plain text", &main).is_empty());
    }

    #[test]
    fn rejects_missing_title() {
        let body = r#"{"chapters": {"chapters": [{"startTime": "0:00:00", "endTime": "0:00:01"}]}}"#;
        assert!(AnalysisResponse::from_json(body).is_err());
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let chapter = Chapter::new("Intro", "0:00:00", "0:00:30");
        let json = serde_json::to_string(&chapter).unwrap();
        assert!(json.contains("\"startTime\":\"0:00:00\""));
        assert!(json.contains("\"endTime\":\"0:00:30\""));
        assert!(!json.contains("chapterNumber"));
    }

    #[test]
    fn save_and_load_preserve_response() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("response.json");
        let response = AnalysisResponse::from_json(SAMPLE).unwrap();

        response.save(&path).unwrap();
        let loaded = AnalysisResponse::load(&path).unwrap();

        assert_eq!(loaded, response);
    }

    #[test]
    fn load_reports_invalid_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{}").unwrap();

        let err = AnalysisResponse::load(&path).unwrap_err();
        assert!(err.to_string().contains("is not an analyzer response"));
    }

    #[test]
    fn span_end_uses_latest_valid_end() {
        let response = AnalysisResponse::from_json(SAMPLE).unwrap();
        assert_eq!(response.span_end(), Some(127.0));
        assert_eq!(AnalysisResponse::default().span_end(), None);
    }

    #[test]
    fn contains_is_half_open() {
        let chapter = Chapter::new("Main", "0:00:30", "0:01:40");
        assert!(chapter.contains(30.0));
        assert!(chapter.contains(99.9));
        assert!(!chapter.contains(100.0));
        assert!(!chapter.contains(29.0));
    }

    #[test]
    fn valid_chapter_has_no_issues() {
        let chapter = Chapter::new("Main", "0:00:30", "0:01:40");
        assert!(chapter.issues(Some(127.0)).is_empty());
        assert!(chapter.issues(None).is_empty());
    }

    #[test]
    fn issues_report_each_violation() {
        let reversed = Chapter::new("Backwards", "0:01:00", "0:00:10");
        assert_eq!(
            reversed.issues(None),
            vec![ChapterIssue::StartAfterEnd {
                start: 60.0,
                end: 10.0
            }]
        );

        let too_long = Chapter::new("Long", "0:00:00", "0:05:00");
        assert_eq!(
            too_long.issues(Some(127.0)),
            vec![ChapterIssue::EndPastDuration {
                end: 300.0,
                duration: 127.0
            }]
        );

        let malformed = Chapter::new("Bad", "soon", "0:00:10");
        let issues = malformed.issues(Some(127.0));
        assert_eq!(issues.len(), 1);
        assert!(issues[0].to_string().starts_with("malformed start time"));
    }
}

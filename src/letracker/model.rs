//! Core data types: modules, lectures and videos.
//!
//! Identifiers and names are validated newtypes. They serialize as plain
//! strings and re-validate when loaded, so a hand-edited data file cannot
//! smuggle in a value the parser would have rejected.

use crate::error::{Result, TrackerError};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

macro_rules! validated_string {
    ($(#[$meta:meta])* $name:ident, $check:path, $constraints:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            pub const CONSTRAINTS: &'static str = $constraints;

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = TrackerError;

            fn try_from(value: String) -> Result<Self> {
                let trimmed = value.trim();
                if $check(trimmed) {
                    Ok(Self(trimmed.to_string()))
                } else {
                    Err(TrackerError::parse(Self::CONSTRAINTS))
                }
            }
        }

        impl FromStr for $name {
            type Err = TrackerError;

            fn from_str(s: &str) -> Result<Self> {
                Self::try_from(s.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

fn is_valid_code(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric())
}

fn is_valid_name(s: &str) -> bool {
    !s.is_empty() && !s.contains('/')
}

fn is_valid_tag(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        }
        _ => false,
    }
}

validated_string!(
    /// Unique key of a module, e.g. `CS2040S`.
    ModuleCode,
    is_valid_code,
    "Module codes should only contain alphanumeric characters and should not be blank"
);

validated_string!(
    ModuleName,
    is_valid_name,
    "Module names should not be blank and should not contain '/'"
);

validated_string!(
    LectureName,
    is_valid_name,
    "Lecture names should not be blank and should not contain '/'"
);

validated_string!(
    VideoName,
    is_valid_name,
    "Video names should not be blank and should not contain '/'"
);

validated_string!(
    /// A label attached to a module, lecture or video.
    Tag,
    is_valid_tag,
    "Tags should start with a letter and only contain alphanumeric characters, '-' or '_'"
);

const TIMESTAMP_FORMAT: &str = "%H:%M:%S";

/// Position within a video where the user stopped watching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VideoTimestamp(NaiveTime);

impl VideoTimestamp {
    pub const CONSTRAINTS: &'static str =
        "Timestamps should be in the format HH:MM:SS, with HH between 00 and 23";

    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, second).map(Self)
    }
}

impl Default for VideoTimestamp {
    fn default() -> Self {
        Self(NaiveTime::MIN)
    }
}

impl TryFrom<String> for VideoTimestamp {
    type Error = TrackerError;

    fn try_from(value: String) -> Result<Self> {
        NaiveTime::parse_from_str(value.trim(), TIMESTAMP_FORMAT)
            .map(Self)
            .map_err(|_| TrackerError::parse(Self::CONSTRAINTS))
    }
}

impl FromStr for VideoTimestamp {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_from(s.to_string())
    }
}

impl From<VideoTimestamp> for String {
    fn from(value: VideoTimestamp) -> String {
        value.to_string()
    }
}

impl fmt::Display for VideoTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub name: VideoName,
    #[serde(default)]
    pub watched: bool,
    #[serde(default)]
    pub timestamp: VideoTimestamp,
    #[serde(default)]
    pub tags: BTreeSet<Tag>,
}

impl Video {
    pub fn new(name: VideoName) -> Self {
        Self {
            name,
            watched: false,
            timestamp: VideoTimestamp::default(),
            tags: BTreeSet::new(),
        }
    }

    pub fn with_timestamp(mut self, timestamp: VideoTimestamp) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    pub fn watched(mut self, watched: bool) -> Self {
        self.watched = watched;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lecture {
    pub name: LectureName,
    #[serde(default)]
    pub tags: BTreeSet<Tag>,
    #[serde(default)]
    pub videos: Vec<Video>,
}

impl Lecture {
    pub fn new(name: LectureName) -> Self {
        Self {
            name,
            tags: BTreeSet::new(),
            videos: Vec::new(),
        }
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    pub fn with_videos(mut self, videos: Vec<Video>) -> Self {
        self.videos = videos;
        self
    }

    pub fn video(&self, name: &VideoName) -> Option<&Video> {
        self.videos.iter().find(|v| &v.name == name)
    }

    pub fn has_video(&self, name: &VideoName) -> bool {
        self.video(name).is_some()
    }

    /// Returns `(watched, total)` video counts.
    pub fn progress(&self) -> (usize, usize) {
        let watched = self.videos.iter().filter(|v| v.watched).count();
        (watched, self.videos.len())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub code: ModuleCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<ModuleName>,
    #[serde(default)]
    pub tags: BTreeSet<Tag>,
    #[serde(default)]
    pub lectures: Vec<Lecture>,
}

impl Module {
    pub fn new(code: ModuleCode) -> Self {
        Self {
            code,
            name: None,
            tags: BTreeSet::new(),
            lectures: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: ModuleName) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    pub fn with_lectures(mut self, lectures: Vec<Lecture>) -> Self {
        self.lectures = lectures;
        self
    }

    pub fn lecture(&self, name: &LectureName) -> Option<&Lecture> {
        self.lectures.iter().find(|l| &l.name == name)
    }

    pub fn has_lecture(&self, name: &LectureName) -> bool {
        self.lecture(name).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_code_rejects_symbols_and_blank() {
        assert!("CS2040S".parse::<ModuleCode>().is_ok());
        assert!("CS 2040".parse::<ModuleCode>().is_err());
        assert!("".parse::<ModuleCode>().is_err());
        assert!("   ".parse::<ModuleCode>().is_err());
    }

    #[test]
    fn names_are_trimmed_and_reject_slashes() {
        let name: LectureName = "  Week 1 ".parse().unwrap();
        assert_eq!(name.as_str(), "Week 1");
        assert!("Week 1/2".parse::<LectureName>().is_err());
        assert!("".parse::<VideoName>().is_err());
    }

    #[test]
    fn tags_must_start_with_a_letter() {
        assert!("graphs".parse::<Tag>().is_ok());
        assert!("mid-term_2".parse::<Tag>().is_ok());
        assert!("2graphs".parse::<Tag>().is_err());
        assert!("two words".parse::<Tag>().is_err());
    }

    #[test]
    fn timestamp_parses_and_displays_hms() {
        let ts: VideoTimestamp = "01:02:03".parse().unwrap();
        assert_eq!(ts.to_string(), "01:02:03");
        assert_eq!(VideoTimestamp::default().to_string(), "00:00:00");
        assert!("25:00:00".parse::<VideoTimestamp>().is_err());
        assert!("1:2".parse::<VideoTimestamp>().is_err());
    }

    #[test]
    fn lecture_progress_counts_watched_videos() {
        let lecture = Lecture::new("Week 1".parse().unwrap()).with_videos(vec![
            Video::new("Intro".parse().unwrap()).watched(true),
            Video::new("Sorting".parse().unwrap()),
        ]);
        assert_eq!(lecture.progress(), (1, 2));
    }

    #[test]
    fn invalid_values_are_rejected_on_load() {
        let json = r#"{"name": "bad/name", "watched": false}"#;
        assert!(serde_json::from_str::<Video>(json).is_err());

        let json = r#"{"name": "Intro", "timestamp": "00:10:00", "tags": ["core"]}"#;
        let video: Video = serde_json::from_str(json).unwrap();
        assert!(!video.watched);
        assert_eq!(video.timestamp.to_string(), "00:10:00");
    }
}

//! # Rendering
//!
//! Turns command results and views into terminal text. Everything here
//! returns a `String`; printing happens in `cli/mod.rs`.
//!
//! Message levels use `colored`; list rows use the `console` styles in
//! `styles.rs`. Widths are measured on the plain text before styling, so
//! truncation is exact for wide characters.

use super::styles::{DETAIL, HEADER, INDEX, NAME, TAGS, WATCHED};
use colored::Colorize;
use letracker::commands::help;
use letracker::commands::{CmdMessage, MessageLevel};
use letracker::error::TrackerError;
use letracker::model::{Lecture, Module, Tag, Video};
use letracker::view::View;
use std::collections::BTreeSet;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Used when the terminal width cannot be detected.
pub const LINE_WIDTH: usize = 100;
const MIN_WIDTH: usize = 40;

pub fn terminal_width() -> usize {
    console::Term::stdout()
        .size_checked()
        .map(|(_, cols)| usize::from(cols))
        .unwrap_or(LINE_WIDTH)
        .max(MIN_WIDTH)
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|message| match message.level {
            MessageLevel::Info => message.content.dimmed().to_string(),
            MessageLevel::Success => message.content.green().to_string(),
            MessageLevel::Warning => message.content.yellow().to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_error(error: &TrackerError) -> String {
    error.to_string().red().to_string()
}

pub fn render_help() -> String {
    help::usages().join("\n\n")
}

pub fn render_view(view: &View, width: usize) -> String {
    let (header, rows, empty) = match view {
        View::Modules(modules) => (
            "Modules".to_string(),
            modules.iter().map(|m| module_row(m)).collect::<Vec<_>>(),
            "No modules to show.",
        ),
        View::Lectures { module, lectures } => (
            format!("Lectures of {}", module.code),
            lectures.iter().map(|l| lecture_row(l)).collect(),
            "No lectures to show.",
        ),
        View::Videos {
            module,
            lecture,
            videos,
        } => (
            format!("Videos of {} / {}", module.code, lecture.name),
            videos.iter().map(|v| video_row(v)).collect(),
            "No videos to show.",
        ),
    };

    let mut lines = vec![HEADER.apply_to(header).to_string()];
    if rows.is_empty() {
        lines.push(DETAIL.apply_to(empty).to_string());
    }
    for (i, row) in rows.into_iter().enumerate() {
        lines.push(row.render(i + 1, width));
    }
    lines.join("\n")
}

/// One list entry before layout: a name, its dimmed details and an
/// optional coloured status at the end of the line.
struct Row {
    name: String,
    details: String,
    tags: String,
    status: Option<(String, bool)>,
}

impl Row {
    fn render(&self, index: usize, width: usize) -> String {
        let index = format!("{:>3}. ", index);
        let status_width = self
            .status
            .as_ref()
            .map_or(0, |(text, _)| text.width() + 2);
        let tags_width = if self.tags.is_empty() {
            0
        } else {
            self.tags.width() + 2
        };
        let available = width.saturating_sub(index.width() + status_width + tags_width);

        let name = truncate_to_width(&self.name, available);
        let details_room = available.saturating_sub(name.width() + 2);
        let details = if self.details.is_empty() || details_room < 4 {
            String::new()
        } else {
            truncate_to_width(&self.details, details_room)
        };

        let mut line = format!("{}{}", INDEX.apply_to(&index), NAME.apply_to(&name));
        if !details.is_empty() {
            line.push_str(&format!("  {}", DETAIL.apply_to(&details)));
        }
        if !self.tags.is_empty() {
            line.push_str(&format!("  {}", TAGS.apply_to(&self.tags)));
        }
        if let Some((status, done)) = &self.status {
            let styled = if *done {
                WATCHED.apply_to(status).to_string()
            } else {
                DETAIL.apply_to(status).to_string()
            };
            line.push_str(&format!("  {}", styled));
        }
        line
    }
}

fn module_row(module: &Module) -> Row {
    let count = module.lectures.len();
    let lectures = format!(
        "{} lecture{}",
        count,
        letracker::messages::plural(count)
    );
    let details = match &module.name {
        Some(name) => format!("{} ({})", name, lectures),
        None => format!("({})", lectures),
    };
    Row {
        name: module.code.to_string(),
        details,
        tags: tag_list(&module.tags),
        status: None,
    }
}

fn lecture_row(lecture: &Lecture) -> Row {
    let (watched, total) = lecture.progress();
    let status = if total == 0 {
        ("No videos added".to_string(), false)
    } else {
        (
            format!("Progress: {}/{} videos watched", watched, total),
            watched == total,
        )
    };
    Row {
        name: lecture.name.to_string(),
        details: String::new(),
        tags: tag_list(&lecture.tags),
        status: Some(status),
    }
}

fn video_row(video: &Video) -> Row {
    let status = if video.watched {
        ("Watched".to_string(), true)
    } else {
        ("Not watched".to_string(), false)
    };
    Row {
        name: video.name.to_string(),
        details: format!("at {}", video.timestamp),
        tags: tag_list(&video.tags),
        status: Some(status),
    }
}

fn tag_list(tags: &BTreeSet<Tag>) -> String {
    if tags.is_empty() {
        return String::new();
    }
    let names: Vec<&str> = tags.iter().map(|t| t.as_str()).collect();
    format!("[{}]", names.join(", "))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

//! Argument parsers, one per command word.

use super::args::{tokenize, ArgumentMap, Prefix};
use crate::commands::add::{self, AddLecture, AddModule, AddVideo};
use crate::commands::delete::{self, Delete};
use crate::commands::edit::{
    self, EditLecture, EditModule, EditVideo, ModuleChanges, VideoChanges,
};
use crate::commands::export::{self, Export};
use crate::commands::find::{self, Find};
use crate::commands::import::{self, Import};
use crate::commands::list::{self, List};
use crate::commands::mark::{self, Mark};
use crate::commands::nav::{self, Nav};
use crate::commands::tag::{self, Tagging};
use crate::commands::{Command, Target};
use crate::error::{Result, TrackerError};
use crate::messages;
use crate::model::{
    Lecture, LectureName, Module, ModuleCode, ModuleName, Tag, Video, VideoName, VideoTimestamp,
};
use crate::navigation::NavigationContext;
use crate::view::FindFilter;
use std::collections::BTreeSet;
use std::str::FromStr;

fn invalid(usage: &str) -> TrackerError {
    TrackerError::parse(messages::invalid_format(usage))
}

fn parse_value<T>(value: &str) -> Result<T>
where
    T: FromStr<Err = TrackerError>,
{
    value.parse()
}

fn parse_optional<T>(map: &ArgumentMap, prefix: Prefix) -> Result<Option<T>>
where
    T: FromStr<Err = TrackerError>,
{
    map.value(prefix).map(parse_value).transpose()
}

fn parse_all<T>(map: &ArgumentMap, prefix: Prefix) -> Result<Vec<T>>
where
    T: FromStr<Err = TrackerError>,
{
    map.all_values(prefix).into_iter().map(parse_value).collect()
}

fn parse_tags(map: &ArgumentMap) -> Result<BTreeSet<Tag>> {
    Ok(parse_all::<Tag>(map, Prefix::Tag)?.into_iter().collect())
}

fn required_module(map: &ArgumentMap, usage: &str) -> Result<ModuleCode> {
    map.value(Prefix::Module)
        .ok_or_else(|| invalid(usage))
        .and_then(parse_value)
}

/// Drops repeated entries, keeping the first occurrence.
fn dedup<T: PartialEq>(items: Vec<T>) -> Vec<T> {
    let mut unique = Vec::with_capacity(items.len());
    for item in items {
        if !unique.contains(&item) {
            unique.push(item);
        }
    }
    unique
}

/// Optional `m/` and `l/` naming a list context; `l/` needs `m/`.
fn parse_context(map: &ArgumentMap, usage: &str) -> Result<NavigationContext> {
    let module: Option<ModuleCode> = parse_optional(map, Prefix::Module)?;
    let lecture: Option<LectureName> = parse_optional(map, Prefix::Lecture)?;
    match (module, lecture) {
        (None, None) => Ok(NavigationContext::Root),
        (Some(code), None) => Ok(NavigationContext::InModule(code)),
        (Some(code), Some(lecture)) => Ok(NavigationContext::InLecture(code, lecture)),
        (None, Some(_)) => Err(invalid(usage)),
    }
}

pub fn parse_add(args: &str) -> Result<Command> {
    let usage = add::USAGE;
    let map = tokenize(
        args,
        &[
            Prefix::Module,
            Prefix::Lecture,
            Prefix::Video,
            Prefix::Name,
            Prefix::Timestamp,
            Prefix::Tag,
        ],
    );
    map.verify_no_preamble(usage)?;
    map.verify_no_duplicates(
        &[
            Prefix::Module,
            Prefix::Lecture,
            Prefix::Video,
            Prefix::Name,
            Prefix::Timestamp,
        ],
        usage,
    )?;

    let code = required_module(&map, usage)?;
    let tags = parse_tags(&map)?;
    let lecture: Option<LectureName> = parse_optional(&map, Prefix::Lecture)?;
    let video: Option<VideoName> = parse_optional(&map, Prefix::Video)?;

    match (lecture, video) {
        (None, None) => {
            if map.is_present(Prefix::Timestamp) {
                return Err(invalid(usage));
            }
            let mut module = Module::new(code).with_tags(tags);
            if let Some(name) = parse_optional::<ModuleName>(&map, Prefix::Name)? {
                module = module.with_name(name);
            }
            Ok(Command::AddModule(AddModule { module }))
        }
        (Some(lecture), None) => {
            if map.is_present(Prefix::Name) || map.is_present(Prefix::Timestamp) {
                return Err(invalid(usage));
            }
            Ok(Command::AddLecture(AddLecture {
                module_code: code,
                lecture: Lecture::new(lecture).with_tags(tags),
            }))
        }
        (Some(lecture), Some(video)) => {
            if map.is_present(Prefix::Name) {
                return Err(invalid(usage));
            }
            let mut video = Video::new(video).with_tags(tags);
            if let Some(timestamp) = parse_optional::<VideoTimestamp>(&map, Prefix::Timestamp)? {
                video = video.with_timestamp(timestamp);
            }
            Ok(Command::AddVideo(AddVideo {
                module_code: code,
                lecture_name: lecture,
                video,
            }))
        }
        (None, Some(_)) => Err(invalid(usage)),
    }
}

pub fn parse_edit(args: &str) -> Result<Command> {
    let usage = edit::USAGE;
    let prefixes = [
        Prefix::Module,
        Prefix::Lecture,
        Prefix::Video,
        Prefix::Code,
        Prefix::Name,
        Prefix::Timestamp,
    ];
    let map = tokenize(args, &prefixes);
    map.verify_no_preamble(usage)?;
    map.verify_no_duplicates(&prefixes, usage)?;

    let code = required_module(&map, usage)?;
    let lecture: Option<LectureName> = parse_optional(&map, Prefix::Lecture)?;
    let video: Option<VideoName> = parse_optional(&map, Prefix::Video)?;

    match (lecture, video) {
        (None, None) => {
            if map.is_present(Prefix::Timestamp) {
                return Err(invalid(usage));
            }
            let changes = ModuleChanges {
                code: parse_optional(&map, Prefix::Code)?,
                name: parse_optional(&map, Prefix::Name)?,
            };
            if changes.is_empty() {
                return Err(TrackerError::parse(edit::MESSAGE_NOT_EDITED));
            }
            Ok(Command::EditModule(EditModule { code, changes }))
        }
        (Some(lecture), None) => {
            if map.is_present(Prefix::Code) || map.is_present(Prefix::Timestamp) {
                return Err(invalid(usage));
            }
            let new_name = parse_optional(&map, Prefix::Name)?
                .ok_or_else(|| TrackerError::parse(edit::MESSAGE_NOT_EDITED))?;
            Ok(Command::EditLecture(EditLecture {
                module_code: code,
                name: lecture,
                new_name,
            }))
        }
        (Some(lecture), Some(video)) => {
            if map.is_present(Prefix::Code) {
                return Err(invalid(usage));
            }
            let changes = VideoChanges {
                name: parse_optional(&map, Prefix::Name)?,
                timestamp: parse_optional(&map, Prefix::Timestamp)?,
            };
            if changes.is_empty() {
                return Err(TrackerError::parse(edit::MESSAGE_NOT_EDITED));
            }
            Ok(Command::EditVideo(EditVideo {
                module_code: code,
                lecture_name: lecture,
                name: video,
                changes,
            }))
        }
        (None, Some(_)) => Err(invalid(usage)),
    }
}

pub fn parse_delete(args: &str) -> Result<Command> {
    let usage = delete::USAGE;
    let map = tokenize(args, &[Prefix::Module, Prefix::Lecture, Prefix::Video]);
    map.verify_no_preamble(usage)?;
    if !map.is_present(Prefix::Module) {
        return Err(invalid(usage));
    }

    let targets = if map.is_present(Prefix::Video) {
        map.verify_no_duplicates(&[Prefix::Module, Prefix::Lecture], usage)?;
        let code = required_module(&map, usage)?;
        let lecture: LectureName = map
            .value(Prefix::Lecture)
            .ok_or_else(|| invalid(usage))
            .and_then(parse_value)?;
        parse_all::<VideoName>(&map, Prefix::Video)?
            .into_iter()
            .map(|video| Target::Video(code.clone(), lecture.clone(), video))
            .collect()
    } else if map.is_present(Prefix::Lecture) {
        map.verify_no_duplicates(&[Prefix::Module], usage)?;
        let code = required_module(&map, usage)?;
        parse_all::<LectureName>(&map, Prefix::Lecture)?
            .into_iter()
            .map(|lecture| Target::Lecture(code.clone(), lecture))
            .collect()
    } else {
        parse_all::<ModuleCode>(&map, Prefix::Module)?
            .into_iter()
            .map(Target::Module)
            .collect()
    };

    Ok(Command::Delete(Delete {
        targets: dedup(targets),
    }))
}

pub fn parse_mark(args: &str, watched: bool) -> Result<Command> {
    let usage = if watched {
        mark::USAGE_WATCHED
    } else {
        mark::USAGE_UNWATCHED
    };
    let map = tokenize(args, &[Prefix::Module, Prefix::Lecture, Prefix::Video]);
    map.verify_no_preamble(usage)?;
    map.verify_no_duplicates(&[Prefix::Module, Prefix::Lecture], usage)?;

    let code = required_module(&map, usage)?;
    let lecture: LectureName = map
        .value(Prefix::Lecture)
        .ok_or_else(|| invalid(usage))
        .and_then(parse_value)?;
    let videos = dedup(parse_all::<VideoName>(&map, Prefix::Video)?);
    if videos.is_empty() {
        return Err(invalid(usage));
    }

    Ok(Command::Mark(Mark {
        module_code: code,
        lecture_name: lecture,
        videos,
        watched,
    }))
}

pub fn parse_tagging(args: &str, untag: bool) -> Result<Command> {
    let usage = if untag { tag::USAGE_UNTAG } else { tag::USAGE_TAG };
    let map = tokenize(
        args,
        &[Prefix::Module, Prefix::Lecture, Prefix::Video, Prefix::Tag],
    );
    map.verify_no_preamble(usage)?;
    map.verify_no_duplicates(&[Prefix::Module, Prefix::Lecture, Prefix::Video], usage)?;

    let code = required_module(&map, usage)?;
    let lecture: Option<LectureName> = parse_optional(&map, Prefix::Lecture)?;
    let video: Option<VideoName> = parse_optional(&map, Prefix::Video)?;
    let target = match (lecture, video) {
        (None, None) => Target::Module(code),
        (Some(lecture), None) => Target::Lecture(code, lecture),
        (Some(lecture), Some(video)) => Target::Video(code, lecture, video),
        (None, Some(_)) => return Err(invalid(usage)),
    };
    let tags = parse_tags(&map)?;
    if tags.is_empty() {
        return Err(invalid(usage));
    }

    let tagging = Tagging { target, tags };
    Ok(if untag {
        Command::Untag(tagging)
    } else {
        Command::Tag(tagging)
    })
}

pub fn parse_find(args: &str) -> Result<Command> {
    let usage = find::USAGE;
    let map = tokenize(args, &[Prefix::Module, Prefix::Lecture, Prefix::Tag]);
    map.verify_no_duplicates(&[Prefix::Module, Prefix::Lecture], usage)?;

    let keywords: Vec<String> = map
        .preamble()
        .split_whitespace()
        .map(str::to_string)
        .collect();
    let tags = parse_all::<Tag>(&map, Prefix::Tag)?;
    let filter = FindFilter::new(keywords, dedup(tags));
    if filter.is_empty() {
        return Err(invalid(usage));
    }

    Ok(Command::Find(Find {
        context: parse_context(&map, usage)?,
        filter,
    }))
}

pub fn parse_list(args: &str) -> Result<Command> {
    let usage = list::USAGE;
    let map = tokenize(args, &[Prefix::Module, Prefix::Lecture]);
    map.verify_no_preamble(usage)?;
    map.verify_no_duplicates(&[Prefix::Module, Prefix::Lecture], usage)?;
    Ok(Command::List(List {
        context: parse_context(&map, usage)?,
    }))
}

pub fn parse_nav(args: &str) -> Result<Command> {
    if args.trim().is_empty() {
        return Ok(Command::RootNav);
    }

    let usage = nav::USAGE;
    let map = tokenize(args, &[Prefix::Module, Prefix::Lecture, Prefix::Video]);
    map.verify_no_preamble(usage)?;
    map.verify_no_duplicates(&[Prefix::Module, Prefix::Lecture, Prefix::Video], usage)?;

    let module_code = required_module(&map, usage)?;
    let lecture_name: Option<LectureName> = parse_optional(&map, Prefix::Lecture)?;
    let video_name: Option<VideoName> = parse_optional(&map, Prefix::Video)?;
    if lecture_name.is_none() && video_name.is_some() {
        return Err(invalid(usage));
    }

    Ok(Command::Nav(Nav {
        module_code,
        lecture_name,
        video_name,
    }))
}

pub fn parse_export(args: &str) -> Result<Command> {
    let usage = export::USAGE;
    let map = tokenize(args, &[Prefix::Overwrite]);
    if map.preamble().is_empty() {
        return Err(invalid(usage));
    }
    Ok(Command::Export(Export {
        file_name: map.preamble().to_string(),
        overwrite: map.is_present(Prefix::Overwrite),
    }))
}

pub fn parse_import(args: &str) -> Result<Command> {
    let usage = import::USAGE;
    let map = tokenize(args, &[Prefix::Module, Prefix::Overwrite]);
    if map.preamble().is_empty() {
        return Err(invalid(usage));
    }
    Ok(Command::Import(Import {
        file_name: map.preamble().to_string(),
        modules: dedup(parse_all(&map, Prefix::Module)?),
        overwrite: map.is_present(Prefix::Overwrite),
    }))
}

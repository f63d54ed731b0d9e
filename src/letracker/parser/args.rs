//! Tokenizer for prefixed arguments such as `m/CS2040S l/Week 1 t/exam`.
//!
//! A prefix only counts when it starts the argument string or follows
//! whitespace, so `n/TCP/IP` keeps its slash and `ts/` is never read as `t/`.

use crate::error::{Result, TrackerError};
use crate::messages;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prefix {
    Module,
    Lecture,
    Video,
    Name,
    Code,
    Timestamp,
    Tag,
    Overwrite,
    Root,
}

impl Prefix {
    pub const ALL: [Prefix; 9] = [
        Prefix::Module,
        Prefix::Lecture,
        Prefix::Video,
        Prefix::Name,
        Prefix::Code,
        Prefix::Timestamp,
        Prefix::Tag,
        Prefix::Overwrite,
        Prefix::Root,
    ];

    pub fn token(self) -> &'static str {
        match self {
            Prefix::Module => "m/",
            Prefix::Lecture => "l/",
            Prefix::Video => "v/",
            Prefix::Name => "n/",
            Prefix::Code => "c/",
            Prefix::Timestamp => "ts/",
            Prefix::Tag => "t/",
            Prefix::Overwrite => "o/",
            Prefix::Root => "r/",
        }
    }
}

/// Preamble plus every prefixed value, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMap {
    preamble: String,
    values: Vec<(Prefix, String)>,
}

/// Splits `args` on the given prefixes. Text before the first prefix is the
/// preamble; every value is trimmed.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMap {
    let mut positions: Vec<(usize, Prefix)> = Vec::new();
    let mut previous_is_space = true;
    for (index, ch) in args.char_indices() {
        if previous_is_space {
            if let Some(prefix) = prefixes
                .iter()
                .copied()
                .find(|p| args[index..].starts_with(p.token()))
            {
                positions.push((index, prefix));
            }
        }
        previous_is_space = ch.is_whitespace();
    }

    let preamble_end = positions.first().map_or(args.len(), |(start, _)| *start);
    let values = positions
        .iter()
        .enumerate()
        .map(|(i, (start, prefix))| {
            let value_start = start + prefix.token().len();
            let value_end = positions.get(i + 1).map_or(args.len(), |(next, _)| *next);
            (*prefix, args[value_start..value_end].trim().to_string())
        })
        .collect();

    ArgumentMap {
        preamble: args[..preamble_end].trim().to_string(),
        values,
    }
}

impl ArgumentMap {
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    pub fn is_present(&self, prefix: Prefix) -> bool {
        self.values.iter().any(|(p, _)| *p == prefix)
    }

    /// The last value given for `prefix`.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .iter()
            .rev()
            .find(|(p, _)| *p == prefix)
            .map(|(_, v)| v.as_str())
    }

    pub fn all_values(&self, prefix: Prefix) -> Vec<&str> {
        self.values
            .iter()
            .filter(|(p, _)| *p == prefix)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn count(&self, prefix: Prefix) -> usize {
        self.values.iter().filter(|(p, _)| *p == prefix).count()
    }

    /// Fails with `usage` if any of `prefixes` was given more than once.
    pub fn verify_no_duplicates(&self, prefixes: &[Prefix], usage: &str) -> Result<()> {
        if prefixes.iter().any(|p| self.count(*p) > 1) {
            return Err(TrackerError::parse(messages::invalid_format(usage)));
        }
        Ok(())
    }

    /// Fails with `usage` if the preamble is not empty.
    pub fn verify_no_preamble(&self, usage: &str) -> Result<()> {
        if self.preamble.is_empty() {
            Ok(())
        } else {
            Err(TrackerError::parse(messages::invalid_format(usage)))
        }
    }
}

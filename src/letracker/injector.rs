//! Expands context-relative input before it reaches the parser.
//!
//! Inside a module or lecture, users can leave out `m/` and `l/`; the
//! injector appends them from the current [`NavigationContext`]. `r/` opts
//! out and addresses from the root. `back` and `nav ..` are shorthands for
//! `navback`.

use crate::navigation::NavigationContext;
use crate::parser::args::{tokenize, Prefix};

const INJECTABLE_WORDS: [&str; 9] = [
    "add",
    "edit",
    "delete",
    "find",
    "list",
    "tag",
    "untag",
    "watched",
    "unwatched",
];

pub struct NavigationInjector;

impl NavigationInjector {
    /// Rewrites `input` for `context`. Pure: the same input and context
    /// always give the same output.
    pub fn inject(input: &str, context: &NavigationContext) -> String {
        let trimmed = input.trim();
        let (word, args) = match trimmed.find(char::is_whitespace) {
            Some(index) => (&trimmed[..index], trimmed[index..].trim()),
            None => (trimmed, ""),
        };

        if word == "back" || (word == "nav" && args == "..") {
            return "navback".to_string();
        }
        let injectable =
            INJECTABLE_WORDS.contains(&word) || (word == "nav" && !args.is_empty());
        if !injectable {
            return input.to_string();
        }

        let map = tokenize(args, &[Prefix::Module, Prefix::Lecture, Prefix::Root]);
        if map.is_present(Prefix::Root) {
            return join(word, &strip_root(args));
        }
        if map.is_present(Prefix::Module) {
            return input.to_string();
        }

        let mut injected = join(word, args);
        match context {
            NavigationContext::Root => return input.to_string(),
            NavigationContext::InModule(code) => {
                injected.push_str(&format!(" {}{}", Prefix::Module.token(), code));
            }
            NavigationContext::InLecture(code, lecture) => {
                injected.push_str(&format!(" {}{}", Prefix::Module.token(), code));
                if !map.is_present(Prefix::Lecture) {
                    injected.push_str(&format!(" {}{}", Prefix::Lecture.token(), lecture));
                }
            }
        }
        injected
    }
}

fn join(word: &str, args: &str) -> String {
    if args.is_empty() {
        word.to_string()
    } else {
        format!("{} {}", word, args)
    }
}

/// Removes every whitespace-delimited word starting with `r/`.
fn strip_root(args: &str) -> String {
    let token = Prefix::Root.token();
    let mut kept = String::with_capacity(args.len());
    let mut rest = args;
    let mut at_word_start = true;
    while let Some(ch) = rest.chars().next() {
        if at_word_start && rest.starts_with(token) {
            let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
            rest = &rest[end..];
            continue;
        }
        kept.push(ch);
        at_word_start = ch.is_whitespace();
        rest = &rest[ch.len_utf8()..];
    }
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

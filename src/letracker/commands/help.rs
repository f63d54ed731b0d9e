use crate::commands::{add, delete, edit, export, find, import, list, mark, nav, tag, CmdResult};

pub const USAGE_CLEAR: &str = "clear: Removes every module from the tracker.";
pub const USAGE_EXIT: &str = "exit: Exits the program.";
pub const USAGE_HELP: &str = "help: Shows this command reference.";

pub const MESSAGE_HELP: &str = "Showing command reference.";
pub const MESSAGE_EXIT: &str = "Exiting tracker as requested ...";

/// Usage of every command, in the order `help` prints them.
pub fn usages() -> [&'static str; 17] {
    [
        nav::USAGE,
        nav::USAGE_BACK,
        add::USAGE,
        edit::USAGE,
        delete::USAGE,
        mark::USAGE_WATCHED,
        mark::USAGE_UNWATCHED,
        tag::USAGE_TAG,
        tag::USAGE_UNTAG,
        find::USAGE,
        list::USAGE,
        export::USAGE,
        import::USAGE,
        USAGE_CLEAR,
        USAGE_HELP,
        USAGE_EXIT,
        CONTEXT_NOTE,
    ]
}

const CONTEXT_NOTE: &str = "Inside a module or lecture, m/ and l/ default to the current \
location. Add r/ to address from the root instead.";

pub fn help() -> CmdResult {
    CmdResult {
        show_help: true,
        ..CmdResult::info(MESSAGE_HELP)
    }
}

pub fn exit() -> CmdResult {
    CmdResult {
        exit: true,
        ..CmdResult::info(MESSAGE_EXIT)
    }
}

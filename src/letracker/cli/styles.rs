use console::Style;
use once_cell::sync::Lazy;

pub static HEADER: Lazy<Style> = Lazy::new(|| Style::new().bold().underlined());
pub static INDEX: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static NAME: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static TAGS: Lazy<Style> = Lazy::new(|| Style::new().cyan());
pub static DETAIL: Lazy<Style> = Lazy::new(|| Style::new().dim());
pub static WATCHED: Lazy<Style> = Lazy::new(|| Style::new().green());
pub static PROMPT: Lazy<Style> = Lazy::new(|| Style::new().blue().bold());

//! Pure formatting helpers: themes, relative time, escaping.

pub mod escape;
pub mod theme;
pub mod time;

pub use escape::{escape_html, escape_text, sanitize_link, sanitize_terminal};
pub use theme::{Theme, ThemeTable, Tone, component_theme, indicator_theme, theme_for};
pub use time::{relative_time, relative_time_between, relative_time_from_now};

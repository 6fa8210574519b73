//! Help popup and help line
//!
//! Key binding reference for the draft screen.

mod help_content;
pub mod help_line_render;
pub mod help_popup_render;

pub use help_content::{HELP_ENTRIES, HELP_FOOTER};

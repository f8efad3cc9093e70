//! Helpers shared with the rest of the scanner.

pub mod filetype;

pub use filetype::{determine_file_type, FileType};

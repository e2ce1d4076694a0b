//! Helper functions shared by commands and generators
//!
//! Grouping views over post lists, date formatting, URL building and
//! XML escaping.

mod date;
mod list;
mod url;
mod xml;

pub use date::*;
pub use list::*;
pub use url::*;
pub use xml::*;

//! Renders access-check result matrices (resource × verb) as aligned tables.
//!
//! The entry point is [`formatter::render`], which writes a table to any
//! [`terminal::Sink`] and colors the outcomes when the injected predicate says
//! the sink is an interactive terminal:
//!
//! ```
//! use access_matrix::formatter::render;
//! use access_matrix::terminal::is_interactive;
//! use access_matrix::types::{AccessOutcome, ResultRow};
//!
//! let rows = vec![ResultRow::new("pods").with(AccessOutcome::Allowed, &["get"])];
//! let mut out: Vec<u8> = Vec::new();
//! render(&mut out, &["get".to_string()], &rows, is_interactive).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "NAME  GET\npods  ✔\n");
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod formatter;
pub mod terminal;
pub mod types;

pub use error::{Error, Result};

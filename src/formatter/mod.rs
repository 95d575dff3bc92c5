use crate::config::OutputFormat;
use crate::error::Result;
use crate::terminal::Sink;
use crate::types;

pub mod access_code;
pub mod columns;
mod json;
mod pretty;
pub mod table;

pub use access_code::{color_category, glyph, ColorCategory};
pub use columns::{ColumnWriter, DisplayCell};
pub use table::render;

pub enum Formatter {
    Table(table::Table),
    Pretty(pretty::Pretty),
    Json(json::Json),
}

impl Formatter {
    pub fn new(format: OutputFormat, verbs: Vec<String>, result: types::FullResult) -> Self {
        match format {
            OutputFormat::Table => Formatter::Table(table::Table::new(verbs, result)),
            OutputFormat::Pretty => Formatter::Pretty(pretty::Pretty::new(verbs, result)),
            OutputFormat::Json => Formatter::Json(json::Json::new(&verbs, result)),
        }
    }

    /// Writes the result to `sink`; `is_interactive` decides whether to color.
    pub fn write<W, F>(&self, sink: &mut W, is_interactive: F) -> Result<()>
    where
        W: Sink + ?Sized,
        F: Fn(&W) -> bool,
    {
        match self {
            Formatter::Table(t) => t.write(sink, is_interactive),
            Formatter::Pretty(p) => {
                let colorize = is_interactive(&*sink);
                p.write(sink, colorize)
            }
            Formatter::Json(j) => j.write(sink),
        }
    }
}

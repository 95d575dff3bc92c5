use super::access_code::{color_category, glyph};
use super::columns::{ColumnWriter, DisplayCell};
use crate::constants;
use crate::error::Result;
use crate::terminal::Sink;
use crate::types::{self, AccessOutcome, ResultRow};

pub struct Table {
    verbs: Vec<String>,
    result: types::FullResult,
}

impl Table {
    pub fn new(verbs: Vec<String>, result: types::FullResult) -> Self {
        Self { verbs, result }
    }

    pub fn write<W, F>(&self, sink: &mut W, is_interactive: F) -> Result<()>
    where
        W: Sink + ?Sized,
        F: Fn(&W) -> bool,
    {
        render(sink, &self.verbs, &self.result.items, is_interactive)
    }
}

/// Writes `rows` as an aligned table with one column per verb.
///
/// Cells are colored only when `is_interactive` reports that `sink` is a
/// terminal. Rows are written in the given order. Nothing reaches the sink
/// before the whole table is laid out.
pub fn render<W, F>(
    sink: &mut W,
    verbs: &[String],
    rows: &[ResultRow],
    is_interactive: F,
) -> Result<()>
where
    W: Sink + ?Sized,
    F: Fn(&W) -> bool,
{
    let colorize = is_interactive(&*sink);
    tracing::debug!(
        rows = rows.len(),
        verbs = verbs.len(),
        colorize,
        "rendering access table"
    );

    let mut writer = ColumnWriter::new(sink);

    writer.cell(DisplayCell::plain(constants::NAME_HEADER));
    for verb in verbs {
        writer.cell(DisplayCell::plain(verb.to_uppercase()));
    }
    writer.end_line();

    for row in rows {
        writer.cell(DisplayCell::plain(row.name.as_str()));
        for verb in verbs {
            writer.cell(access_cell(row.outcome(verb), colorize));
        }
        writer.end_line();
    }

    writer.flush()?;
    Ok(())
}

fn access_cell(outcome: AccessOutcome, colorize: bool) -> DisplayCell {
    if colorize {
        DisplayCell::colored(glyph(outcome), color_category(outcome))
    } else {
        DisplayCell::plain(glyph(outcome))
    }
}

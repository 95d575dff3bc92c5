use std::io::Write;

use comfy_table::{presets::NOTHING, Attribute, Cell, CellAlignment, Color, Table};

use super::access_code::{color_category, glyph, ColorCategory};
use crate::constants;
use crate::error::Result;
use crate::terminal::Sink;
use crate::types::{self, AccessOutcome};

pub struct Pretty {
    verbs: Vec<String>,
    result: types::FullResult,
}

impl Pretty {
    pub fn new(verbs: Vec<String>, result: types::FullResult) -> Self {
        Self { verbs, result }
    }

    fn table(&self, colorize: bool) -> Table {
        let mut table = Table::new();
        table.load_preset(NOTHING);
        if colorize {
            table.enforce_styling();
        } else {
            table.force_no_tty();
        }

        let mut titles = Vec::with_capacity(self.verbs.len() + 1);
        titles.push(Cell::new(constants::NAME_HEADER).add_attribute(Attribute::Bold));
        titles.extend(
            self.verbs
                .iter()
                .map(|v| Cell::new(v.to_uppercase()).add_attribute(Attribute::Bold)),
        );
        table.set_header(titles);

        self.result.items.iter().for_each(|result| {
            let mut row: Vec<Cell> = Vec::with_capacity(self.verbs.len() + 1);
            row.push(Cell::new(&result.name));
            row.extend(self.verbs.iter().map(|v| access_cell(result.outcome(v))));
            table.add_row(row);
        });

        table
    }

    pub fn write<W: Sink + ?Sized>(&self, sink: &mut W, colorize: bool) -> Result<()> {
        writeln!(sink, "{}", self.table(colorize))?;
        sink.flush()?;
        Ok(())
    }
}

fn access_cell(outcome: AccessOutcome) -> Cell {
    let cell = Cell::new(glyph(outcome)).set_alignment(CellAlignment::Center);
    match color_category(outcome) {
        ColorCategory::None => cell,
        ColorCategory::Green => cell.fg(Color::Green),
        ColorCategory::Red => cell.fg(Color::Red),
        ColorCategory::Purple => cell.fg(Color::Magenta),
    }
}

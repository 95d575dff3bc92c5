//! Column aligned output for cells that may carry color.
//!
//! Cells keep their visible text and their color apart until they are written,
//! so the width of a column only ever depends on what a reader sees. A
//! colorized `✔` and a plain `✔` occupy the same number of terminal columns.
//!
//! The layout follows the usual elastic tab stop rules: every cell of a line
//! except the last one belongs to a column, a column is as wide as its widest
//! cell plus the padding (but never narrower than the minimum width), and the
//! last cell of a line is written without any padding.

use std::io::{self, Write};

use unicode_width::UnicodeWidthStr;

use super::access_code::ColorCategory;
use crate::constants;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisplayCell {
    pub text: String,
    pub color: ColorCategory,
}

impl DisplayCell {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: ColorCategory::None,
        }
    }

    pub fn colored(text: impl Into<String>, color: ColorCategory) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }

    /// Number of terminal columns the cell occupies once written.
    pub fn width(&self) -> usize {
        self.text.width()
    }

    fn write_to<W: Write + ?Sized>(&self, w: &mut W) -> io::Result<()> {
        match self.color.style() {
            Some(style) if !self.text.is_empty() => write!(w, "{}", style.apply_to(&self.text)),
            _ => w.write_all(self.text.as_bytes()),
        }
    }
}

/// Buffers lines of cells and writes them aligned on [`ColumnWriter::flush`].
pub struct ColumnWriter<'a, W: Write + ?Sized> {
    sink: &'a mut W,
    min_width: usize,
    padding: usize,
    lines: Vec<Vec<DisplayCell>>,
    current: Vec<DisplayCell>,
}

impl<'a, W: Write + ?Sized> ColumnWriter<'a, W> {
    pub fn new(sink: &'a mut W) -> Self {
        Self::with_layout(sink, constants::COLUMN_MIN_WIDTH, constants::COLUMN_PADDING)
    }

    pub fn with_layout(sink: &'a mut W, min_width: usize, padding: usize) -> Self {
        Self {
            sink,
            min_width,
            padding,
            lines: Vec::new(),
            current: Vec::new(),
        }
    }

    pub fn cell(&mut self, cell: DisplayCell) -> &mut Self {
        self.current.push(cell);
        self
    }

    pub fn end_line(&mut self) -> &mut Self {
        let line = std::mem::take(&mut self.current);
        self.lines.push(line);
        self
    }

    /// Column widths, padding included. Trailing cells do not count.
    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = Vec::new();
        for line in &self.lines {
            let columns = line.len().saturating_sub(1);
            for (i, cell) in line.iter().take(columns).enumerate() {
                let width = self.min_width.max(cell.width() + self.padding);
                match widths.get_mut(i) {
                    Some(w) => *w = (*w).max(width),
                    None => widths.push(width),
                }
            }
        }
        widths
    }

    /// Writes every buffered line, then flushes the sink.
    ///
    /// A line still being built is terminated first.
    pub fn flush(mut self) -> io::Result<()> {
        if !self.current.is_empty() {
            self.end_line();
        }
        let widths = self.column_widths();

        let mut out: Vec<u8> = Vec::new();
        for line in &self.lines {
            let last = line.len().saturating_sub(1);
            for (i, cell) in line.iter().enumerate() {
                cell.write_to(&mut out)?;
                if i < last {
                    let fill = widths[i] - cell.width();
                    out.extend(std::iter::repeat(b' ').take(fill));
                }
            }
            out.push(b'\n');
        }

        self.sink.write_all(&out)?;
        self.sink.flush()
    }
}

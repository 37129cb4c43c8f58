//! Column-aligned text output for todo items.
//!
//! # Design
//! `TabWriter` is an elastic-tabstop writer: it buffers everything written to
//! it, treats each tab-terminated run of text as a cell, and only on `flush`
//! computes one width per column and writes the padded lines to the sink.
//! Nothing reaches the sink before the widths are known. Text after the last
//! tab on a line is a trailing cell and is written without padding, so lines
//! never end in spaces.
//!
//! Columns are aligned across the whole buffer. A column whose cells are all
//! empty can be dropped entirely, which is how the done marker disappears when
//! no item is done.

use std::io::{self, Write};

use crate::types::Item;

/// Buffers tab-separated cells and writes them aligned on `flush`.
pub struct TabWriter<W: Write> {
    inner: W,
    min_width: usize,
    padding: usize,
    discard_empty_columns: bool,
    buf: Vec<u8>,
}

impl<W: Write> TabWriter<W> {
    /// A cell is padded to `max(min_width, widest cell + padding)`.
    pub fn new(inner: W, min_width: usize, padding: usize) -> Self {
        Self {
            inner,
            min_width,
            padding,
            discard_empty_columns: false,
            buf: Vec::new(),
        }
    }

    pub fn discard_empty_columns(mut self, discard: bool) -> Self {
        self.discard_empty_columns = discard;
        self
    }

    pub fn into_inner(self) -> W {
        self.inner
    }

    fn column_widths(&self, lines: &[Vec<&str>]) -> Vec<usize> {
        let columns = lines.iter().map(|cells| cells.len() - 1).max().unwrap_or(0);
        (0..columns)
            .map(|col| {
                let mut width = self.min_width;
                let mut empty = true;
                for cell in lines.iter().filter_map(|cells| cells[..cells.len() - 1].get(col)) {
                    let w = cell.chars().count();
                    width = width.max(w + self.padding);
                    empty &= w == 0;
                }
                if empty && self.discard_empty_columns {
                    0
                } else {
                    width
                }
            })
            .collect()
    }

    fn format(&self) -> String {
        let text = String::from_utf8_lossy(&self.buf);
        let lines: Vec<(Vec<&str>, bool)> = text
            .split_inclusive('\n')
            .map(|line| match line.strip_suffix('\n') {
                Some(stripped) => (stripped.split('\t').collect(), true),
                None => (line.split('\t').collect(), false),
            })
            .collect();
        let cells: Vec<Vec<&str>> = lines.iter().map(|(cells, _)| cells.clone()).collect();
        let widths = self.column_widths(&cells);

        let mut out = String::with_capacity(text.len());
        for (cells, terminated) in &lines {
            let Some((trailing, aligned)) = cells.split_last() else {
                continue;
            };
            for (cell, &width) in aligned.iter().zip(&widths) {
                if width == 0 {
                    continue;
                }
                out.push_str(cell);
                let pad = width.saturating_sub(cell.chars().count());
                out.push_str(&" ".repeat(pad));
            }
            out.push_str(trailing);
            if *terminated {
                out.push('\n');
            }
        }
        out
    }
}

impl<W: Write> Write for TabWriter<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.buf.is_empty() {
            let out = self.format();
            self.buf.clear();
            self.inner.write_all(out.as_bytes())?;
        }
        self.inner.flush()
    }
}

/// Writes items as `<marker> - <position> <task>` lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    min_width: usize,
    padding: usize,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            min_width: 0,
            padding: 1,
        }
    }
}

impl Renderer {
    pub fn with_layout(min_width: usize, padding: usize) -> Self {
        Self { min_width, padding }
    }

    /// Write one line per item in input order. The marker is `X` for done
    /// items and blank otherwise; the position is 1-based. Sink errors are
    /// returned as-is.
    ///
    /// Task text is written verbatim, so a tab inside it starts a new cell and
    /// a newline starts a new line, as with any elastic-tabstop writer.
    pub fn print<W: Write>(&self, sink: &mut W, items: &[Item]) -> io::Result<()> {
        let mut tw =
            TabWriter::new(sink, self.min_width, self.padding).discard_empty_columns(true);
        for (i, item) in items.iter().enumerate() {
            let marker = if item.done { "X" } else { "" };
            writeln!(tw, "{marker}\t-\t{}\t{}", i + 1, item.task)?;
        }
        tw.flush()
    }
}

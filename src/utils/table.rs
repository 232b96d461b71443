//! Table rendering utilities for CLI outputs.
//!
//! Widths are measured in terminal columns, so CJK names line up too.

use crate::utils::colors::RESET;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub header: String,
    pub align: Align,
}

impl Column {
    pub fn left(header: &str) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Left,
        }
    }

    pub fn right(header: &str) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Right,
        }
    }
}

/// A cell's text plus an optional ANSI color applied after padding.
#[derive(Debug, Clone)]
pub struct Cell {
    pub text: String,
    pub color: Option<&'static str>,
}

impl Cell {
    pub fn plain<T: Into<String>>(text: T) -> Self {
        Self {
            text: text.into(),
            color: None,
        }
    }

    pub fn colored<T: Into<String>>(text: T, color: &'static str) -> Self {
        Self {
            text: text.into(),
            color: Some(color),
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| UnicodeWidthStr::width(c.text.as_str()))
                    .chain(std::iter::once(UnicodeWidthStr::width(col.header.as_str())))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        // Header
        let header: Vec<Cell> = self
            .columns
            .iter()
            .map(|c| Cell::plain(c.header.clone()))
            .collect();
        out.push_str(&self.render_row(&header, &widths));
        out.push('\n');

        let total: usize = widths.iter().sum::<usize>() + widths.len().saturating_sub(1) * 2;
        out.push_str(&"-".repeat(total));
        out.push('\n');

        // Rows
        for row in &self.rows {
            out.push_str(&self.render_row(row, &widths));
            out.push('\n');
        }

        out
    }

    fn render_row(&self, row: &[Cell], widths: &[usize]) -> String {
        let mut parts = Vec::with_capacity(self.columns.len());
        for (i, col) in self.columns.iter().enumerate() {
            let empty = Cell::plain("");
            let cell = row.get(i).unwrap_or(&empty);
            let pad = " ".repeat(widths[i].saturating_sub(UnicodeWidthStr::width(cell.text.as_str())));
            let text = match cell.color {
                Some(color) => format!("{color}{}{RESET}", cell.text),
                None => cell.text.clone(),
            };
            parts.push(match col.align {
                Align::Left => format!("{text}{pad}"),
                Align::Right => format!("{pad}{text}"),
            });
        }
        parts.join("  ").trim_end().to_string()
    }
}

//! Table rendering utilities for CLI outputs.

use crate::utils::formatting::strip_ansi;

pub struct Column {
    pub header: String,
    pub width: usize,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&format!("{:<width$} ", col.header, width = col.width));
        }
        out.push('\n');

        // Rows (pad by visible width so ANSI-colored cells stay aligned)
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                let cell = &row[i];
                let visible = strip_ansi(cell).chars().count();
                let pad = col.width.saturating_sub(visible);
                out.push_str(cell);
                out.push_str(&" ".repeat(pad + 1));
            }
            out.push('\n');
        }

        out
    }
}

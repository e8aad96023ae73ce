use std::fmt;

use crate::presentation::formatters::{text, time};
use crate::presentation::view_models::ListViewModel;
use gridview_types::{Density, ViewMode};
use owo_colors::OwoColorize;

// Display constants
const MAX_CELL_WIDTH: usize = 32;
const CELL_GAP: &str = "  ";

pub struct ListView<'a> {
    data: &'a ListViewModel,
}

impl<'a> ListView<'a> {
    pub fn new(data: &'a ListViewModel) -> Self {
        Self { data }
    }

    fn render_empty(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "No {} found.", self.data.entity)?;
        if self.data.is_narrowed() {
            writeln!(f, "Search or filters are active; try widening them.")?;
        }
        Ok(())
    }

    fn render_table(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let cells: Vec<Vec<String>> = self
            .data
            .rows
            .iter()
            .map(|row| {
                row.cells
                    .iter()
                    .enumerate()
                    .map(|(i, cell)| display_cell(&self.data.columns[i].key, cell.as_deref()))
                    .collect()
            })
            .collect();

        // Column width: header or widest cell, whichever is larger
        let widths: Vec<usize> = self
            .data
            .columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                cells
                    .iter()
                    .map(|row| row[i].chars().count())
                    .max()
                    .unwrap_or(0)
                    .max(column.label.chars().count())
            })
            .collect();

        let header: Vec<String> = self
            .data
            .columns
            .iter()
            .enumerate()
            .map(|(i, column)| pad(&column.label.to_uppercase(), widths[i]))
            .collect();
        writeln!(f, "{}", header.join(CELL_GAP))?;

        let total_width = widths.iter().sum::<usize>() + CELL_GAP.len() * widths.len().saturating_sub(1);
        writeln!(f, "{}", "-".repeat(total_width))?;

        for row in &cells {
            let line: Vec<String> = row
                .iter()
                .enumerate()
                .map(|(i, value)| {
                    let padded = pad(value, widths[i]);
                    if self.data.columns[i].key == "status" {
                        paint_status(&padded, value)
                    } else {
                        padded
                    }
                })
                .collect();
            writeln!(f, "{}", line.join(CELL_GAP).trim_end())?;

            if self.data.density == Density::Comfortable {
                writeln!(f)?;
            }
        }

        writeln!(f)?;
        writeln!(
            f,
            "{} {} · sorted by {} ({})",
            self.data.total, self.data.entity, self.data.sort_key, self.data.sort_direction
        )
    }

    fn render_cards(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.data.rows {
            let title = row
                .cells
                .first()
                .and_then(|cell| cell.as_deref())
                .unwrap_or(row.id.as_str());
            writeln!(f, "{}", title.bold())?;

            for (i, column) in self.data.columns.iter().enumerate().skip(1) {
                let value = display_cell(&column.key, row.cells[i].as_deref());
                if value.is_empty() {
                    continue;
                }
                let shown = if column.key == "status" {
                    paint_status(&value, &value)
                } else if is_timestamp_key(&column.key) {
                    time::format_relative_time(row.cells[i].as_deref().unwrap_or(&value))
                } else {
                    value
                };
                writeln!(f, "  {}: {}", column.label, shown)?;
            }

            writeln!(f)?;
            if self.data.density == Density::Comfortable {
                writeln!(f)?;
            }
        }

        writeln!(
            f,
            "Page {} of {} · {} {}",
            self.data.page + 1,
            self.data.page_count.max(1),
            self.data.total,
            self.data.entity
        )
    }
}

impl<'a> fmt::Display for ListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.rows.is_empty() && self.data.total == 0 {
            return self.render_empty(f);
        }

        match self.data.effective_mode {
            ViewMode::Table => self.render_table(f),
            ViewMode::Cards => self.render_cards(f),
        }
    }
}

fn is_timestamp_key(key: &str) -> bool {
    key.ends_with("At")
}

/// Single-line, truncated, date-shortened form of one cell
fn display_cell(key: &str, cell: Option<&str>) -> String {
    let Some(raw) = cell else {
        return String::new();
    };

    let flat = text::normalize_whitespace(raw);
    let shown = if is_timestamp_key(key) {
        time::short_date(&flat)
    } else {
        flat
    };
    text::truncate(&shown, MAX_CELL_WIDTH)
}

fn pad(value: &str, width: usize) -> String {
    let len = value.chars().count();
    let mut padded = String::from(value);
    padded.extend(std::iter::repeat_n(' ', width.saturating_sub(len)));
    padded
}

/// Color status cells by lifecycle stage; padding is applied before
/// coloring so ANSI codes do not distort column widths
fn paint_status(padded: &str, raw: &str) -> String {
    match raw.to_lowercase().as_str() {
        "new" | "active" | "in progress" | "accepted" => padded.green().to_string(),
        "quoted" | "scheduled" | "sent" | "draft" | "pending" => padded.yellow().to_string(),
        "archived" | "completed" | "closed" => padded.dimmed().to_string(),
        _ => padded.to_string(),
    }
}

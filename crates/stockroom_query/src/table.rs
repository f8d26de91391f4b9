//! Column descriptors and plain-text tables.
//!
//! A [`TableModel`] pairs an ordered set of [`Column`]s with the message shown
//! when there is nothing to display. The column order drives both the header
//! and the cell order of every row; each record supplies its own cells through
//! [`Tabular`]. [`Table::to_text`] lays the result out with `comfy_table`.

use comfy_table::presets::NOTHING;
use comfy_table::{CellAlignment, TableComponent};

/// Horizontal alignment of a column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alignment {
    /// Pad on the right (default).
    #[default]
    Left,
    /// Pad evenly on both sides.
    Center,
    /// Pad on the left.
    Right,
}

/// Describes one column of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Key passed to [`Tabular::cell`].
    pub key: String,
    /// Header text.
    pub label: String,
    /// Alignment, [`Alignment::Left`] when unset.
    pub alignment: Option<Alignment>,
}

impl Column {
    /// Creates a column with default alignment.
    #[must_use]
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            alignment: None,
        }
    }

    /// Sets the column alignment.
    #[must_use]
    pub fn aligned(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }
}

/// Records that can be laid out as a table row.
pub trait Tabular {
    /// Display text for the column identified by `key`.
    ///
    /// Unknown keys should render as an empty string.
    fn cell(&self, key: &str) -> String;
}

/// Ordered columns plus the placeholder shown for an empty view.
#[derive(Debug, Clone)]
pub struct TableModel {
    columns: Vec<Column>,
    empty_message: String,
}

impl TableModel {
    /// Creates a table model.
    #[must_use]
    pub fn new(columns: Vec<Column>, empty_message: impl Into<String>) -> Self {
        Self {
            columns,
            empty_message: empty_message.into(),
        }
    }

    /// The column descriptors, in display order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// The placeholder shown when there are no rows.
    #[must_use]
    pub fn empty_message(&self) -> &str {
        &self.empty_message
    }

    /// Lays out `items` in column order.
    pub fn render<T: Tabular>(&self, items: &[T]) -> Table {
        if items.is_empty() {
            return Table::Empty {
                message: self.empty_message.clone(),
            };
        }

        let header = self.columns.iter().map(|c| c.label.clone()).collect();
        let alignments = self
            .columns
            .iter()
            .map(|c| c.alignment.unwrap_or_default())
            .collect();
        let rows = items
            .iter()
            .map(|item| self.columns.iter().map(|c| item.cell(&c.key)).collect())
            .collect();

        Table::Rows {
            header,
            alignments,
            rows,
        }
    }
}

/// A rendered table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Table {
    /// Nothing to show.
    Empty {
        /// Placeholder text.
        message: String,
    },
    /// Header and rows, cells in column order.
    Rows {
        /// Column labels.
        header: Vec<String>,
        /// One alignment per column.
        alignments: Vec<Alignment>,
        /// Cell text per row.
        rows: Vec<Vec<String>>,
    },
}

impl Table {
    /// Formats the table as borderless plain text, one line per row.
    ///
    /// The header is underlined with dashes and columns are separated by two
    /// spaces. Trailing whitespace is trimmed from each line.
    #[must_use]
    pub fn to_text(&self) -> String {
        let (header, alignments, rows) = match self {
            Table::Empty { message } => return message.clone(),
            Table::Rows {
                header,
                alignments,
                rows,
            } => (header, alignments, rows),
        };

        let mut table = comfy_table::Table::new();
        table
            .load_preset(NOTHING)
            .set_style(TableComponent::HeaderLines, '-')
            .set_header(header.clone());
        for row in rows {
            table.add_row(row.clone());
        }
        for (index, alignment) in alignments.iter().enumerate() {
            align_column(&mut table, index, (*alignment).into());
        }

        table
            .lines()
            .map(|line| line.trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl From<Alignment> for CellAlignment {
    fn from(alignment: Alignment) -> Self {
        match alignment {
            Alignment::Left => CellAlignment::Left,
            Alignment::Center => CellAlignment::Center,
            Alignment::Right => CellAlignment::Right,
        }
    }
}

fn align_column(table: &mut comfy_table::Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_padding((0, 2));
        column.set_cell_alignment(alignment);
    }
}

//! Row/column view over delimited text.
//!
//! [`TokenGrid`] splits a buffer into rows, then each row into cells, and
//! keeps only the spans. Cells are sub-slices of the original buffer and
//! are converted on demand.
//!
//! ```
//! use strkit::TokenGrid;
//!
//! let grid = TokenGrid::new(b"x,y\n1,2\n3,4,5\n", b"\n", b",");
//! assert_eq!(grid.row_count(), 3);
//! assert_eq!(grid.max_column_count(), 3);
//! assert_eq!(grid.get::<u32>(2, 2), Some(5));
//! assert_eq!(grid.column::<u32>(0, 1..).unwrap(), vec![1, 3]);
//! ```

use crate::convert::FromBytes;
use crate::errors::{ConvertError, ParseError};
use crate::options::SplitOptions;
use crate::parse::{FieldTuple, MAX_FIELDS};
use crate::split::split;
use core::ops::{Range, RangeBounds};

/// Cells of a delimited buffer, addressed by row and column.
#[derive(Debug, Clone)]
pub struct TokenGrid<'a> {
    input: &'a [u8],
    rows: Vec<Vec<Range<usize>>>,
}

impl<'a> TokenGrid<'a> {
    /// Builds a grid; blank rows are skipped and empty cells are kept.
    pub fn new(input: &'a [u8], row_delimiters: &[u8], column_delimiters: &[u8]) -> Self {
        Self::with_options(
            input,
            row_delimiters,
            column_delimiters,
            SplitOptions::COMPRESS_DELIMITERS,
            SplitOptions::DEFAULT,
        )
    }

    /// Builds a grid with explicit split options for rows and cells.
    pub fn with_options(
        input: &'a [u8],
        row_delimiters: &[u8],
        column_delimiters: &[u8],
        row_options: SplitOptions,
        column_options: SplitOptions,
    ) -> Self {
        let mut row_spans: Vec<Range<usize>> = Vec::new();
        split(row_delimiters, input, &mut row_spans, row_options);

        let rows = row_spans
            .into_iter()
            .map(|row| {
                let mut cells: Vec<Range<usize>> = Vec::new();
                split(column_delimiters, &input[row.clone()], &mut cells, column_options);
                for cell in &mut cells {
                    *cell = row.start + cell.start..row.start + cell.end;
                }
                cells
            })
            .collect();

        TokenGrid { input, rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Widest row, in cells.
    pub fn max_column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn row(&self, index: usize) -> Option<Row<'_, 'a>> {
        self.rows.get(index).map(|cells| Row {
            input: self.input,
            cells,
        })
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_, 'a>> {
        self.rows.iter().map(|cells| Row {
            input: self.input,
            cells,
        })
    }

    /// Raw bytes of one cell.
    pub fn cell(&self, row: usize, column: usize) -> Option<&'a [u8]> {
        let span = self.rows.get(row)?.get(column)?;
        Some(&self.input[span.clone()])
    }

    /// One cell converted to `T`; `None` if the cell is missing or invalid.
    pub fn get<T: FromBytes>(&self, row: usize, column: usize) -> Option<T> {
        T::from_bytes(self.cell(row, column)?).ok()
    }

    /// Converts `column` of every row in `rows` that has it.
    ///
    /// Rows too short to have the column are skipped; the first conversion
    /// failure is returned.
    pub fn column<T: FromBytes>(
        &self,
        column: usize,
        rows: impl RangeBounds<usize>,
    ) -> Result<Vec<T>, ConvertError> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(index, _)| rows.contains(index))
            .filter_map(|(_, cells)| cells.get(column))
            .map(|span| T::from_bytes(&self.input[span.clone()]))
            .collect()
    }
}

/// One row of a [`TokenGrid`].
#[derive(Debug, Clone, Copy)]
pub struct Row<'g, 'a> {
    input: &'a [u8],
    cells: &'g [Range<usize>],
}

impl<'g, 'a> Row<'g, 'a> {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cell(&self, column: usize) -> Option<&'a [u8]> {
        self.cells.get(column).map(|span| &self.input[span.clone()])
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a [u8]> {
        let input = self.input;
        self.cells.iter().map(move |span| &input[span.clone()])
    }

    /// Converts the leading cells of this row into a tuple.
    ///
    /// Cells past the tuple's arity are ignored.
    pub fn parse<F: FieldTuple>(&self) -> Result<F, ParseError> {
        if self.cells.len() < F::ARITY {
            return Err(ParseError::TokenCount {
                expected: F::ARITY,
                found: self.cells.len(),
            });
        }
        let mut tokens = [<&[u8]>::default(); MAX_FIELDS];
        for (slot, token) in tokens.iter_mut().zip(self.iter()) {
            *slot = token;
        }
        F::from_tokens(&tokens[..F::ARITY])
    }
}

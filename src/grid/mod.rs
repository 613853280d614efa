pub mod compare;

pub use compare::{Classification, Tally};

use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{GridError, GridResult};
use crate::shared::constants;

/// One cell of a membership grid.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Symbol {
    /// `x`: the point belongs to the set
    Member,
    /// `.`: the point escaped
    Outside,
}

impl Symbol {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            constants::MEMBER_SYMBOL => Some(Symbol::Member),
            constants::OUTSIDE_SYMBOL => Some(Symbol::Outside),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Symbol::Member => constants::MEMBER_SYMBOL,
            Symbol::Outside => constants::OUTSIDE_SYMBOL,
        }
    }
}

/// Rectangular matrix of symbols, stored row-major.
///
/// A `Grid` always has at least one row and one column, and every row
/// has the same length.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Symbol>,
}

impl Grid {
    /// Parse grid text, one row per line.
    pub fn parse(text: &str) -> GridResult<Self> {
        let mut width = None;
        let mut height = 0;
        let mut cells = Vec::new();

        for (idx, line) in text.lines().enumerate() {
            let line_no = idx + 1;
            let len = line.chars().count();

            match width {
                None => width = Some(len),
                Some(expected) if expected != len => {
                    return Err(GridError::RaggedRow {
                        line: line_no,
                        expected,
                        found: len,
                    });
                }
                Some(_) => {}
            }

            for (col, c) in line.chars().enumerate() {
                let symbol = Symbol::from_char(c).ok_or(GridError::UnrecognizedSymbol {
                    symbol: c,
                    line: line_no,
                    column: col + 1,
                })?;
                cells.push(symbol);
            }
            height += 1;
        }

        let width = width.ok_or(GridError::Empty("input has no rows"))?;
        if width == 0 {
            return Err(GridError::Empty("rows have no columns"));
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Read and parse a grid file.
    pub fn load(path: &Path) -> GridResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| GridError::io(path, e))?;
        Self::parse(&text)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Symbol]> {
        self.cells.chunks(self.width)
    }

    pub fn cells(&self) -> &[Symbol] {
        &self.cells
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: String = row.iter().map(|s| s.as_char()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

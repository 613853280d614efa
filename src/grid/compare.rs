use serde::Serialize;
use std::path::Path;

use super::{Grid, Symbol};
use crate::error::{GridError, GridResult};

/// Agreement class of one coordinate when a grid is checked against a
/// reference grid.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Classification {
    AgreeMember,
    AgreeOutside,
    /// left `x`, right `.`
    FalseMember,
    /// left `.`, right `x`
    FalseOutside,
}

impl Classification {
    pub fn of(left: Symbol, right: Symbol) -> Self {
        match (left, right) {
            (Symbol::Member, Symbol::Member) => Classification::AgreeMember,
            (Symbol::Outside, Symbol::Outside) => Classification::AgreeOutside,
            (Symbol::Member, Symbol::Outside) => Classification::FalseMember,
            (Symbol::Outside, Symbol::Member) => Classification::FalseOutside,
        }
    }

    pub fn is_agreement(self) -> bool {
        matches!(
            self,
            Classification::AgreeMember | Classification::AgreeOutside
        )
    }
}

/// Per-class cell counts of a comparison.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize)]
pub struct Tally {
    pub width: usize,
    pub height: usize,
    pub agree_member: usize,
    pub agree_outside: usize,
    pub false_member: usize,
    pub false_outside: usize,
    pub mismatched: usize,
}

/// Cell-by-cell classification of two equally shaped grids.
#[derive(Clone, Debug)]
pub struct Comparison {
    width: usize,
    height: usize,
    cells: Vec<Classification>,
}

impl Comparison {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cells(&self) -> &[Classification] {
        &self.cells
    }

    pub fn tally(&self) -> Tally {
        let mut tally = Tally {
            width: self.width,
            height: self.height,
            ..Default::default()
        };
        for class in &self.cells {
            match class {
                Classification::AgreeMember => tally.agree_member += 1,
                Classification::AgreeOutside => tally.agree_outside += 1,
                Classification::FalseMember => tally.false_member += 1,
                Classification::FalseOutside => tally.false_outside += 1,
            }
        }
        tally.mismatched = self.cells.iter().filter(|c| !c.is_agreement()).count();
        tally
    }
}

/// Classify `left` against the reference grid `right`.
pub fn compare(left: &Grid, right: &Grid) -> GridResult<Comparison> {
    if left.height() != right.height() {
        return Err(GridError::DimensionMismatch {
            detail: format!(
                "left grid has {} rows, right grid has {}",
                left.height(),
                right.height()
            ),
        });
    }
    if left.width() != right.width() {
        return Err(GridError::DimensionMismatch {
            detail: format!(
                "left grid rows have {} columns, right grid rows have {}",
                left.width(),
                right.width()
            ),
        });
    }

    let cells = left
        .cells()
        .iter()
        .zip(right.cells())
        .map(|(&l, &r)| Classification::of(l, r))
        .collect();

    Ok(Comparison {
        width: left.width(),
        height: left.height(),
        cells,
    })
}

/// Parse both files independently, then compare them.
pub fn compare_files(left: &Path, right: &Path) -> GridResult<Comparison> {
    let left = Grid::load(left)?;
    let right = Grid::load(right)?;
    compare(&left, &right)
}

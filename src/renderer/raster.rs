use rayon::prelude::*;

use super::palette::Paint;
#[cfg(test)]
use super::palette::RgbColor;
use crate::error::{GridError, GridResult};

/// Tightly packed RGB8 pixel buffer, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Raster {
    /// Paint `cells` (row-major, `width * height` long) into a new raster.
    ///
    /// Rows are filled in parallel; each row owns its `width * 3` slice.
    pub fn paint<T: Paint>(width: usize, height: usize, cells: &[T]) -> GridResult<Self> {
        if cells.len() != width * height {
            return Err(GridError::BufferSize {
                width,
                height,
                expected: width * height,
                found: cells.len(),
            });
        }

        let mut data = vec![0u8; width * height * 3];
        if width > 0 {
            data.par_chunks_mut(width * 3)
                .zip(cells.par_chunks(width))
                .for_each(|(row, src)| {
                    for (px, cell) in row.chunks_exact_mut(3).zip(src) {
                        px.copy_from_slice(&cell.color().channels());
                    }
                });
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}

#[cfg(test)]
impl Raster {
    /// Wrap an existing buffer, checking it holds exactly `width * height` pixels.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> GridResult<Self> {
        let expected = width * height * 3;
        if data.len() != expected {
            return Err(GridError::BufferSize {
                width,
                height,
                expected,
                found: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn pixel(&self, x: usize, y: usize) -> RgbColor {
        let offset = (y * self.width + x) * 3;
        RgbColor(self.data[offset], self.data[offset + 1], self.data[offset + 2])
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

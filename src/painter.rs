use crate::error::{DimensionMismatch, PainterError};
use crate::stack::Stack;
use std::fmt;

/// Default color type for [`ConnectedRegionPainter`].
pub type Color = i32;

/// Up, down, left, right. Diagonals do not connect regions.
const NEIGHBOURS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// A rectangular image with a 4-connected flood fill.
///
/// The image is a list of rows addressed by `(x, y)`, where `x` is the column
/// and `y` the row, both zero-based. The painter owns the grid for its whole
/// lifetime; use [`into_image`](Self::into_image) to take it back.
///
/// ```
/// use koans_rs::ConnectedRegionPainter;
///
/// let image = vec![
///     vec![0, 0, 1],
///     vec![1, 0, 1],
/// ];
/// let mut painter = ConnectedRegionPainter::new(image, 3, 2).unwrap();
/// assert_eq!(painter.flood_fill(0, 0, 5).unwrap(), 3);
/// assert_eq!(painter.get_image(), &[vec![5, 5, 1], vec![1, 5, 1]]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectedRegionPainter<C = Color> {
    image: Vec<Vec<C>>,
    width: usize,
    height: usize,
}

impl<C: Copy + PartialEq> ConnectedRegionPainter<C> {
    /// Takes ownership of `image` after checking that it has exactly `height`
    /// rows of `width` pixels.
    pub fn new(image: Vec<Vec<C>>, width: usize, height: usize) -> Result<Self, PainterError> {
        if image.len() != height {
            return Err(PainterError::InvalidDimension(DimensionMismatch::Height {
                expected: height,
                found: image.len(),
            }));
        }
        if let Some((row, pixels)) = image
            .iter()
            .enumerate()
            .find(|(_, pixels)| pixels.len() != width)
        {
            return Err(PainterError::InvalidDimension(DimensionMismatch::Width {
                row,
                expected: width,
                found: pixels.len(),
            }));
        }

        Ok(Self {
            image,
            width,
            height,
        })
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns true if `(x, y)` lies inside the image.
    pub fn is_valid_pixel(&self, x: isize, y: isize) -> bool {
        self.index(x, y).is_some()
    }

    pub fn get_pixel(&self, x: isize, y: isize) -> Result<C, PainterError> {
        let (col, row) = self.checked_index(x, y)?;
        Ok(self.image[row][col])
    }

    pub fn set_pixel(&mut self, x: isize, y: isize, color: C) -> Result<(), PainterError> {
        let (col, row) = self.checked_index(x, y)?;
        self.image[row][col] = color;
        Ok(())
    }

    /// Returns the current state of the image.
    pub fn get_image(&self) -> &[Vec<C>] {
        &self.image
    }

    /// Consumes the painter and returns the image.
    pub fn into_image(self) -> Vec<Vec<C>> {
        self.image
    }

    /// Repaints the region containing `(x, y)` with `new_color`.
    ///
    /// The region is every pixel reachable from `(x, y)` through up, down,
    /// left and right steps over pixels sharing its original color. Returns
    /// the number of repainted pixels, which is 0 when the seed already has
    /// `new_color`.
    ///
    /// Pixels are recolored as they are pushed on the work list, so each one
    /// is visited at most once and no recursion is involved.
    pub fn flood_fill(&mut self, x: isize, y: isize, new_color: C) -> Result<usize, PainterError> {
        let (col, row) = self.checked_index(x, y)?;
        let target = self.image[row][col];
        if target == new_color {
            log::trace!("flood fill at ({x}, {y}) already has the requested color");
            return Ok(0);
        }

        let mut pending = Stack::new();
        self.image[row][col] = new_color;
        pending.push((col, row));
        let mut filled = 1;

        while let Some((col, row)) = pending.pop() {
            for (dx, dy) in NEIGHBOURS {
                let Some((next_col, next_row)) = self.neighbour(col, row, dx, dy) else {
                    continue;
                };
                let pixel = &mut self.image[next_row][next_col];
                if *pixel == target {
                    *pixel = new_color;
                    filled += 1;
                    pending.push((next_col, next_row));
                }
            }
        }

        log::debug!("flood fill at ({x}, {y}) repainted {filled} pixels");
        Ok(filled)
    }

    fn index(&self, x: isize, y: isize) -> Option<(usize, usize)> {
        let col = usize::try_from(x).ok().filter(|&col| col < self.width)?;
        let row = usize::try_from(y).ok().filter(|&row| row < self.height)?;
        Some((col, row))
    }

    fn checked_index(&self, x: isize, y: isize) -> Result<(usize, usize), PainterError> {
        self.index(x, y).ok_or(PainterError::OutOfRange {
            x,
            y,
            width: self.width,
            height: self.height,
        })
    }

    fn neighbour(&self, col: usize, row: usize, dx: isize, dy: isize) -> Option<(usize, usize)> {
        let col = col.checked_add_signed(dx).filter(|&col| col < self.width)?;
        let row = row.checked_add_signed(dy).filter(|&row| row < self.height)?;
        Some((col, row))
    }
}

impl<C: fmt::Display> fmt::Display for ConnectedRegionPainter<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pixels in &self.image {
            for (i, pixel) in pixels.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{pixel}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

//! The grid canvas: per-cell color state plus the state-to-pixel mapping.

use log::{debug, trace};
use rand::Rng;

use crate::color::Color;
use crate::error::{Error, Result};
use crate::surface::Surface;

/// An `[x, y]` cell coordinate. Signed so that out-of-range queries,
/// including negative ones, can be asked and answered rather than rejected
/// by the type.
pub type Vector = [i32; 2];

/// Background color cells fall back to when set without an explicit color.
pub const DEFAULT_BACKGROUND: Color = Color::rgb(0x33, 0x33, 0x33);

/// A 2D grid of colored squares bound to one drawing surface.
///
/// The canvas owns its surface for its whole lifetime. Dimensions and square
/// size are fixed at construction; cells start unset and only
/// [`set_square_color`](GridCanvas::set_square_color) and
/// [`clear`](GridCanvas::clear) mutate them. Rendering is immediate-mode and
/// synchronous.
///
/// # Examples
///
/// ```
/// use canvasgrid::{Color, GridCanvas, Pixmap};
///
/// # fn main() -> canvasgrid::Result<()> {
/// let mut canvas = GridCanvas::new(Pixmap::new(0, 0), 10, 3, 3)?;
/// canvas
///     .set_square_color([1, 1], Some("#f00".parse()?))?
///     .draw();
/// assert_eq!(canvas.surface().pixel(10, 10), Some([255, 0, 0, 255]));
/// # Ok(())
/// # }
/// ```
pub struct GridCanvas<S: Surface> {
    surface: S,
    // Indexed [x][y]: outer vec is columns.
    grid: Vec<Vec<Option<Color>>>,
    square_size: u32,
    background: Color,
}

impl<S: Surface> GridCanvas<S> {
    /// Bind `surface` and size it to `square_size * cols` by
    /// `square_size * rows`, with all cells unset.
    ///
    /// Fails with [`Error::InvalidArgument`] if any sizing parameter is zero.
    pub fn new(surface: S, square_size: u32, cols: u32, rows: u32) -> Result<Self> {
        Self::with_background(surface, square_size, cols, rows, DEFAULT_BACKGROUND)
    }

    /// Like [`new`](GridCanvas::new), but with an explicit background color
    /// instead of [`DEFAULT_BACKGROUND`].
    pub fn with_background(
        mut surface: S,
        square_size: u32,
        cols: u32,
        rows: u32,
        background: Color,
    ) -> Result<Self> {
        if square_size == 0 || cols == 0 || rows == 0 {
            return Err(Error::InvalidArgument(format!(
                "square size and grid dimensions must be positive, got {}x{} cells at {}px",
                cols, rows, square_size
            )));
        }

        let width = square_size.checked_mul(cols).ok_or_else(|| {
            Error::InvalidArgument(format!(
                "surface width overflows: {} cols of {}px",
                cols, square_size
            ))
        })?;
        let height = square_size.checked_mul(rows).ok_or_else(|| {
            Error::InvalidArgument(format!(
                "surface height overflows: {} rows of {}px",
                rows, square_size
            ))
        })?;

        surface.set_size(width, height);
        debug!(
            "grid canvas bound: {}x{} cells, {}px squares, {}x{} surface",
            cols,
            rows,
            square_size,
            surface.width(),
            surface.height()
        );

        Ok(Self {
            surface,
            grid: vec![vec![None; rows as usize]; cols as usize],
            square_size,
            background,
        })
    }

    /// Set one cell's color. `None` means the configured background color.
    ///
    /// Returns `&mut Self` so calls chain; fails with [`Error::OutOfBounds`]
    /// when the coordinate falls outside the grid.
    pub fn set_square_color(&mut self, vector: Vector, color: Option<Color>) -> Result<&mut Self> {
        let (x, y) = self.cell_index(vector)?;
        self.grid[x][y] = Some(color.unwrap_or(self.background));
        Ok(self)
    }

    /// Paint every set cell onto the surface as a `square_size`-edged filled
    /// rectangle.
    ///
    /// Unset cells are skipped, not painted as background: pixels left by an
    /// earlier draw stay on the surface until [`clear`](GridCanvas::clear)
    /// runs. A draw over an all-unset grid touches no pixels at all.
    pub fn draw(&mut self) -> &mut Self {
        let mut filled = 0usize;
        for (col, column) in self.grid.iter().enumerate() {
            let x = self.square_size * col as u32;
            for (row, cell) in column.iter().enumerate() {
                if let Some(color) = cell {
                    let y = self.square_size * row as u32;
                    trace!("fill {}px square at ({}, {}) with {}", self.square_size, x, y, color);
                    self.surface
                        .fill_rect(x, y, self.square_size, self.square_size, *color);
                    filled += 1;
                }
            }
        }
        debug!("draw: {} of {} cells filled", filled, self.grid.len() * self.grid[0].len());
        self
    }

    /// Erase the surface and reset every cell to unset.
    pub fn clear(&mut self) -> &mut Self {
        self.surface.reset();
        for column in &mut self.grid {
            column.fill(None);
        }
        debug!("canvas cleared");
        self
    }

    /// Whether a coordinate lies within the grid: `0 <= x < cols` and
    /// `0 <= y < rows`.
    pub fn contains(&self, vector: Vector) -> bool {
        let [x, y] = vector;
        x >= 0 && (x as u32) < self.cols() && y >= 0 && (y as u32) < self.rows()
    }

    /// A uniformly random cell coordinate, drawn from `rng`.
    pub fn random_position_with<R: Rng>(&self, rng: &mut R) -> Vector {
        [
            rng.gen_range(0..self.cols()) as i32,
            rng.gen_range(0..self.rows()) as i32,
        ]
    }

    /// A uniformly random cell coordinate from the thread-local RNG.
    pub fn random_position(&self) -> Vector {
        self.random_position_with(&mut rand::thread_rng())
    }

    /// The color of one cell, `None` when unset.
    pub fn square_color(&self, vector: Vector) -> Result<Option<Color>> {
        let (x, y) = self.cell_index(vector)?;
        Ok(self.grid[x][y])
    }

    pub fn cols(&self) -> u32 {
        self.grid.len() as u32
    }

    pub fn rows(&self) -> u32 {
        self.grid[0].len() as u32
    }

    pub fn square_size(&self) -> u32 {
        self.square_size
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Unbind and return the surface, consuming the canvas.
    pub fn into_surface(self) -> S {
        self.surface
    }

    fn cell_index(&self, vector: Vector) -> Result<(usize, usize)> {
        if !self.contains(vector) {
            return Err(Error::OutOfBounds {
                x: vector[0],
                y: vector[1],
                cols: self.cols(),
                rows: self.rows(),
            });
        }
        Ok((vector[0] as usize, vector[1] as usize))
    }
}

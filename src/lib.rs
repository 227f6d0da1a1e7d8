//! CanvasGrid
//!
//! A small library for rendering a 2D grid of colored squares onto a drawing
//! surface while tracking per-cell color state.
//!
//! # Features
//!
//! - **Pluggable Surfaces**: the canvas paints through the [`Surface`] trait,
//!   with a bundled in-memory [`Pixmap`] backend
//! - **Typed Colors**: CSS-style `#rgb`/`#rrggbb` hex parsing at the boundary
//! - **Explicit Errors**: out-of-range coordinates surface as
//!   [`Error::OutOfBounds`] rather than panics
//!
//! # Example
//!
//! ```
//! use canvasgrid::{GridCanvas, Pixmap};
//!
//! # fn main() -> canvasgrid::Result<()> {
//! // A 3x3 grid of 10px squares on a 30x30 software surface.
//! let mut canvas = GridCanvas::new(Pixmap::new(0, 0), 10, 3, 3)?;
//!
//! canvas
//!     .set_square_color([0, 0], Some("#1e90ff".parse()?))?
//!     .set_square_color([2, 2], None)? // background color
//!     .draw();
//!
//! assert!(canvas.contains([2, 2]));
//! assert!(!canvas.contains([3, 0]));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

// Typed cell colors (hex parsing, serde as hex strings)
pub mod color;
pub use color::Color;

// The drawing-surface seam and the software pixmap backend
pub mod surface;
pub use surface::{Pixmap, Surface};

// The grid canvas itself
pub mod grid;
pub use grid::{GridCanvas, Vector, DEFAULT_BACKGROUND};

//! # koans-rs - Run-Length Encoding and Flood Fill
//!
//! Two small, independent exercises:
//!
//! - [`RleEncoder`] encodes a string as count/character pairs and decodes it back.
//! - [`ConnectedRegionPainter`] owns a grid of colors and repaints 4-connected
//!   regions ("paint bucket").
//!
//! The flood fill walks the region with an explicit [`Stack`] instead of
//! recursion, so large images do not exhaust the call stack.
//!
//! ## Example
//!
//! ```
//! use koans_rs::{ConnectedRegionPainter, RleEncoder};
//!
//! let encoder = RleEncoder::new();
//! assert_eq!(encoder.encode("AAB"), "2A1B");
//! assert_eq!(encoder.decode("2A1B").unwrap(), "AAB");
//!
//! let image = vec![
//!     vec![0, 1, 0],
//!     vec![0, 1, 0],
//! ];
//! let mut painter = ConnectedRegionPainter::new(image, 3, 2).unwrap();
//! painter.flood_fill(0, 0, 7).unwrap();
//! assert_eq!(painter.get_image(), &[vec![7, 1, 0], vec![7, 1, 0]]);
//! ```
//!
//! ## Logging
//!
//! Operations log through the [`log`] facade: repainted pixel counts at
//! `debug`, no-op fills at `trace`, and input dropped by lenient decoding at
//! `debug`. Install any logger (e.g. `env_logger`) to see them.

mod error;
mod painter;
mod rle;
mod stack;


pub use error::{DecodeError, DimensionMismatch, PainterError};
pub use painter::{Color, ConnectedRegionPainter};
pub use rle::{runs, DecodeMode, RleEncoder, Run, Runs};
pub use stack::Stack;

use thiserror::Error;

/// Errors returned by [`RleEncoder::decode`](crate::RleEncoder::decode) and
/// [`RleEncoder::parse`](crate::RleEncoder::parse).
///
/// Positions are byte offsets into the decoded input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("character {value:?} at byte {position} has no count")]
    MissingCount { position: usize, value: char },

    #[error("run at byte {position} has a zero count")]
    ZeroCount { position: usize },

    #[error("count starting at byte {position} is not followed by a character")]
    TrailingCount { position: usize },

    #[error("count starting at byte {position} does not fit in usize")]
    CountOverflow { position: usize },

    #[error("decoded output is too large to allocate")]
    OutputTooLarge,
}

/// Which side of an image did not match the declared size.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionMismatch {
    #[error("image has {found} rows but height is {expected}")]
    Height { expected: usize, found: usize },

    #[error("row {row} has {found} pixels but width is {expected}")]
    Width {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Errors returned by [`ConnectedRegionPainter`](crate::ConnectedRegionPainter).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PainterError {
    #[error("invalid dimension: {0}")]
    InvalidDimension(DimensionMismatch),

    #[error("pixel ({x}, {y}) is outside the {width}x{height} image")]
    OutOfRange {
        x: isize,
        y: isize,
        width: usize,
        height: usize,
    },
}

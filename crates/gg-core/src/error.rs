use thiserror::Error;

/// Errors originating from bitmap operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BitmapError {
    /// Zero dimension, zero scale factor, non-binary pixel value.
    #[error("Argument invalide : {0}")]
    InvalidArgument(String),

    /// Read, write or blit outside the addressed buffer.
    #[error("Coordonnées hors limites : ({x}, {y}) dans {width}×{height}")]
    IndexOutOfRange {
        /// Column of the rejected access.
        x: u64,
        /// Row of the rejected access.
        y: u64,
        /// Width of the addressed bitmap.
        width: u32,
        /// Height of the addressed bitmap.
        height: u32,
    },
}

/// The two failure classes a caller can match on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    IndexOutOfRange,
}

impl BitmapError {
    /// Failure class of this error.
    ///
    /// # Example
    /// ```
    /// use gg_core::error::{BitmapError, ErrorKind};
    /// let e = BitmapError::InvalidArgument("scale 0".into());
    /// assert_eq!(e.kind(), ErrorKind::InvalidArgument);
    /// ```
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
        }
    }

    pub(crate) fn out_of_range(x: u64, y: u64, width: u32, height: u32) -> Self {
        Self::IndexOutOfRange {
            x,
            y,
            width,
            height,
        }
    }
}

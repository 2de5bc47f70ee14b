/// Bitmap, pixels, configuration and PBM output for glyphgrid.
///
/// This crate holds the pixel buffer and everything shared across the
/// glyphgrid workspace.

pub mod bitmap;
pub mod config;
pub mod error;
pub mod pbm;
pub mod pixel;

pub use bitmap::Bitmap;
pub use config::GridConfig;
pub use error::{BitmapError, ErrorKind};
pub use pixel::{Layout, Pixel};

//! Plain PBM (`P1`) output.
//!
//! Pixels are written in raw storage order, each followed by one space, with
//! no row breaks. For `HeightStride` bitmaps that order is not row-major.
use std::io::{self, Write};

use crate::bitmap::Bitmap;

/// Format tag of the plain PBM header.
pub const MAGIC: &str = "P1";

/// Écrit `bitmap` au format P1 dans `out`.
///
/// # Errors
/// Propagates any I/O error from `out`.
///
/// # Example
/// ```
/// use gg_core::bitmap::Bitmap;
/// use gg_core::pbm::write_pbm;
/// let mut buf = Vec::new();
/// write_pbm(&Bitmap::new(2, 1).unwrap(), &mut buf).unwrap();
/// assert_eq!(buf, b"P1\n2 1\n1 1 ");
/// ```
pub fn write_pbm<W: Write>(bitmap: &Bitmap, mut out: W) -> io::Result<()> {
    writeln!(out, "{MAGIC}")?;
    writeln!(out, "{} {}", bitmap.width(), bitmap.height())?;
    for chunk in bitmap.pixels().chunks(4096) {
        let mut line = Vec::with_capacity(chunk.len() * 2);
        for p in chunk {
            line.push(b'0' + p.value());
            line.push(b' ');
        }
        out.write_all(&line)?;
    }
    out.flush()
}

impl Bitmap {
    /// Sérialise en texte P1.
    ///
    /// # Example
    /// ```
    /// use gg_core::bitmap::Bitmap;
    /// assert_eq!(Bitmap::new(1, 1).unwrap().serialize(), "P1\n1 1\n1 ");
    /// ```
    #[must_use]
    pub fn serialize(&self) -> String {
        let mut buf = Vec::with_capacity(16 + self.pixels().len() * 2);
        // Writing into a Vec cannot fail.
        let _ = write_pbm(self, &mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

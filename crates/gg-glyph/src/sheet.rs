use gg_core::bitmap::Bitmap;
use gg_core::config::GridConfig;
use gg_core::error::BitmapError;
use gg_core::pixel::Layout;

use crate::glyph::glyph;
use crate::source::UnitSource;

/// Géométrie d'une planche de glyphes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SheetSpec {
    pub columns: u32,
    pub rows: u32,
    pub glyph_size: u32,
    /// Bordure autour et entre les glyphes.
    pub padding: u32,
    pub layout: Layout,
}

impl Default for SheetSpec {
    fn default() -> Self {
        Self::from(&GridConfig::default())
    }
}

impl From<&GridConfig> for SheetSpec {
    fn from(c: &GridConfig) -> Self {
        Self {
            columns: c.columns,
            rows: c.rows,
            glyph_size: c.glyph_size,
            padding: c.padding,
            layout: c.layout,
        }
    }
}

impl SheetSpec {
    /// Dimensions du canevas : `n * (glyph_size + padding) + padding` par axe.
    ///
    /// # Errors
    /// `InvalidArgument` on a zero count or size, or if a side overflows.
    ///
    /// # Example
    /// ```
    /// use gg_glyph::sheet::SheetSpec;
    /// assert_eq!(SheetSpec::default().canvas_size().unwrap(), (30, 30));
    /// ```
    pub fn canvas_size(&self) -> Result<(u32, u32), BitmapError> {
        if self.columns == 0 || self.rows == 0 || self.glyph_size == 0 {
            return Err(BitmapError::InvalidArgument(format!(
                "planche vide : {}×{} glyphes de {} px",
                self.columns, self.rows, self.glyph_size
            )));
        }
        let side = |n: u32| {
            self.glyph_size
                .checked_add(self.padding)
                .and_then(|cell| cell.checked_mul(n))
                .and_then(|v| v.checked_add(self.padding))
                .ok_or_else(|| BitmapError::InvalidArgument("planche trop grande".to_string()))
        };
        Ok((side(self.columns)?, side(self.rows)?))
    }

    /// Coin supérieur gauche du glyphe `(column, row)`. `None` en cas de
    /// dépassement de `u32`.
    ///
    /// # Example
    /// ```
    /// use gg_glyph::sheet::SheetSpec;
    /// assert_eq!(SheetSpec::default().origin(1, 0), Some((9, 2)));
    /// assert_eq!(SheetSpec::default().origin(u32::MAX, 0), None);
    /// ```
    #[must_use]
    pub fn origin(&self, column: u32, row: u32) -> Option<(u32, u32)> {
        let cell = self.glyph_size.checked_add(self.padding)?;
        let at = |n: u32| n.checked_mul(cell)?.checked_add(self.padding);
        Some((at(column)?, at(row)?))
    }
}

/// Compose une planche : un glyphe frais par case, colonnes en boucle externe.
///
/// # Errors
/// `InvalidArgument` for an empty or oversized sheet; `IndexOutOfRange` if a
/// glyph does not fit the canvas under its layout.
///
/// # Example
/// ```
/// use gg_core::pixel::Pixel;
/// use gg_glyph::sheet::{SheetSpec, compose_sheet};
/// let sheet = compose_sheet(&SheetSpec::default(), &mut fastrand::Rng::with_seed(4)).unwrap();
/// assert_eq!(sheet.get(2, 2).unwrap(), Pixel::Mark);
/// assert_eq!(sheet.get(0, 0).unwrap(), Pixel::Background);
/// ```
pub fn compose_sheet<S: UnitSource + ?Sized>(
    spec: &SheetSpec,
    source: &mut S,
) -> Result<Bitmap, BitmapError> {
    let (width, height) = spec.canvas_size()?;
    log::debug!(
        "Planche {}×{} glyphes de {} px, canevas {width}×{height} ({:?})",
        spec.columns,
        spec.rows,
        spec.glyph_size,
        spec.layout
    );
    let mut canvas = Bitmap::with_layout(width, height, spec.layout)?;
    for column in 0..spec.columns {
        for row in 0..spec.rows {
            let g = glyph(spec.glyph_size, source)?;
            let (x, y) = spec.origin(column, row).ok_or_else(|| {
                BitmapError::InvalidArgument(format!("origine hors plage : ({column}, {row})"))
            })?;
            canvas.blit(&g, x, y)?;
        }
    }
    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{Scripted, seeded};
    use gg_core::error::ErrorKind;
    use gg_core::pixel::Pixel;

    #[test]
    fn default_sheet_matches_classic_layout() {
        let spec = SheetSpec::default();
        assert_eq!(spec.canvas_size().unwrap(), (30, 30));
        assert_eq!(spec.origin(0, 0), Some((2, 2)));
        assert_eq!(spec.origin(3, 1), Some((23, 9)));
    }

    #[test]
    fn padding_stays_empty() {
        let spec = SheetSpec {
            columns: 3,
            rows: 2,
            glyph_size: 3,
            padding: 1,
            layout: Layout::RowMajor,
        };
        let sheet = compose_sheet(&spec, &mut Scripted::new(vec![0.9])).unwrap();
        assert_eq!((sheet.width(), sheet.height()), (13, 9));
        for x in 0..13 {
            for y in 0..9 {
                if x % 4 == 0 || y % 4 == 0 {
                    assert_eq!(sheet.get(x, y).unwrap(), Pixel::Background, "({x}, {y})");
                }
            }
        }
        // 6 glyphes pleins sauf le centre.
        assert_eq!(sheet.count(Pixel::Mark), 6 * 8);
    }

    #[test]
    fn glyph_dots_land_on_origins() {
        let spec = SheetSpec::default();
        let sheet = compose_sheet(&spec, &mut seeded(Some(11))).unwrap();
        for c in 0..4 {
            for r in 0..4 {
                let (x, y) = spec.origin(c, r).unwrap();
                for dx in (0..5).step_by(2) {
                    for dy in (0..5).step_by(2) {
                        assert_eq!(sheet.get(x + dx, y + dy).unwrap(), Pixel::Mark);
                    }
                }
            }
        }
    }

    #[test]
    fn layouts_agree_on_square_sheets() {
        let row_major = compose_sheet(&SheetSpec::default(), &mut seeded(Some(3))).unwrap();
        let legacy = compose_sheet(
            &SheetSpec {
                layout: Layout::HeightStride,
                ..SheetSpec::default()
            },
            &mut seeded(Some(3)),
        )
        .unwrap();
        assert_eq!(row_major.serialize(), legacy.serialize());
    }

    #[test]
    fn origin_overflow_is_none() {
        let spec = SheetSpec {
            glyph_size: u32::MAX,
            ..SheetSpec::default()
        };
        assert_eq!(spec.origin(0, 0), None);
        assert_eq!(SheetSpec::default().origin(0, u32::MAX / 2), None);
    }

    #[test]
    fn wide_height_stride_sheet_scaled() {
        // Canevas 9×5 adressé en x + 5y : les lignes se chevauchent en stockage.
        let spec = SheetSpec {
            columns: 2,
            rows: 1,
            glyph_size: 3,
            padding: 1,
            layout: Layout::HeightStride,
        };
        let mut draws = Scripted::new(vec![0.9, 0.1, 0.7, 0.2, 0.1, 0.9, 0.3, 0.8]);
        let sheet = compose_sheet(&spec, &mut draws).unwrap();
        assert_eq!(draws.consumed(), 8);
        assert_eq!(
            sheet.serialize(),
            concat!(
                "P1\n9 5\n",
                "1 1 1 1 1 1 0 1 0 1 0 0 0 1 1 1 1 0 0 1 0 1 0 1 1 ",
                "1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 ",
            )
        );

        let big = sheet.scale(2).unwrap();
        assert_eq!(big.layout(), Layout::HeightStride);
        assert_eq!(
            big.serialize(),
            concat!(
                "P1\n18 10\n",
                "1 1 1 1 1 1 1 1 1 1 1 1 0 0 1 1 0 0 1 1 1 1 0 0 1 1 0 0 1 1 ",
                "0 0 0 0 0 0 1 1 1 1 0 0 0 0 0 0 1 1 1 1 1 1 1 1 0 0 0 0 1 1 ",
                "1 1 1 1 0 0 0 0 1 1 0 0 1 1 0 0 1 1 1 1 0 0 1 1 0 0 1 1 1 1 ",
                "1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 ",
                "1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 ",
                "1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 ",
            )
        );
    }

    #[test]
    fn zero_padding_tiles_glyphs() {
        let spec = SheetSpec {
            columns: 2,
            rows: 2,
            glyph_size: 3,
            padding: 0,
            layout: Layout::RowMajor,
        };
        let sheet = compose_sheet(&spec, &mut seeded(Some(1))).unwrap();
        assert_eq!((sheet.width(), sheet.height()), (6, 6));
    }

    #[test]
    fn empty_sheet_is_invalid() {
        let spec = SheetSpec {
            rows: 0,
            ..SheetSpec::default()
        };
        let err = compose_sheet(&spec, &mut seeded(Some(1))).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}

use gg_core::bitmap::Bitmap;
use gg_core::error::BitmapError;
use gg_core::pixel::Pixel;

use crate::source::UnitSource;

/// Champ pseudo-labyrinthe `width × height`.
///
/// Chaque cellule impaire/impaire devient `Mark` et s'ouvre soit vers la
/// droite (tirage > 0.5), soit vers le bas. La dernière colonne et la
/// dernière ligne sont ensuite remises à `Background`.
///
/// # Errors
/// `InvalidArgument` unless both dimensions are odd and at least 3.
///
/// # Example
/// ```
/// use gg_core::pixel::Pixel;
/// use gg_glyph::maze::maze;
/// let m = maze(7, 5, &mut fastrand::Rng::with_seed(2)).unwrap();
/// assert_eq!(m.get(1, 1).unwrap(), Pixel::Mark);
/// assert_eq!(m.get(6, 3).unwrap(), Pixel::Background);
/// ```
pub fn maze<S: UnitSource + ?Sized>(
    width: u32,
    height: u32,
    source: &mut S,
) -> Result<Bitmap, BitmapError> {
    if width < 3 || height < 3 || width % 2 == 0 || height % 2 == 0 {
        return Err(BitmapError::InvalidArgument(format!(
            "le labyrinthe exige des dimensions impaires ≥ 3, reçu {width}×{height}"
        )));
    }
    let mut img = Bitmap::new(width, height)?;
    for x in (1..width).step_by(2) {
        for y in (1..height).step_by(2) {
            img.set(x, y, Pixel::Mark)?;
            if source.coin() {
                img.set(x + 1, y, Pixel::Mark)?;
            } else {
                img.set(x, y + 1, Pixel::Mark)?;
            }
        }
    }
    for x in 0..width {
        img.set(x, height - 1, Pixel::Background)?;
    }
    for y in 0..height {
        img.set(width - 1, y, Pixel::Background)?;
    }
    Ok(img)
}

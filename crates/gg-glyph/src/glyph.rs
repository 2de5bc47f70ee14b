use gg_core::bitmap::Bitmap;
use gg_core::error::BitmapError;
use gg_core::pixel::Pixel;

use crate::source::UnitSource;

/// Génère un glyphe carré `size × size`.
///
/// Règle par coordonnée, `x` en boucle externe, `y` en boucle interne :
/// - `x` et `y` pairs : `Mark`, toujours ;
/// - un seul des deux pair : `Mark` si le tirage dépasse `0.5` ;
/// - `x` et `y` impairs : `Background`, sans tirage.
///
/// On obtient une grille de points reliés par un treillis clairsemé.
///
/// # Errors
/// `InvalidArgument` if `size` is zero.
///
/// # Example
/// ```
/// use gg_core::pixel::Pixel;
/// use gg_glyph::glyph::glyph;
/// let mut rng = fastrand::Rng::with_seed(1);
/// let g = glyph(5, &mut rng).unwrap();
/// assert_eq!(g.get(2, 4).unwrap(), Pixel::Mark);
/// assert_eq!(g.get(1, 3).unwrap(), Pixel::Background);
/// ```
pub fn glyph<S: UnitSource + ?Sized>(size: u32, source: &mut S) -> Result<Bitmap, BitmapError> {
    let mut img = Bitmap::new(size, size)?;
    for x in 0..size {
        for y in 0..size {
            let x_even = x % 2 == 0;
            let y_even = y % 2 == 0;
            let mark = if x_even && y_even {
                true
            } else if x_even || y_even {
                source.coin()
            } else {
                false
            };
            if mark {
                img.set(x, y, Pixel::Mark)?;
            }
        }
    }
    Ok(img)
}

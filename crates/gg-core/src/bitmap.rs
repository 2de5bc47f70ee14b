use crate::error::BitmapError;
use crate::pixel::{Layout, Pixel};

/// Plafond du nombre de pixels d'un bitmap (256 Mio de stockage).
pub const MAX_PIXELS: usize = 1 << 28;

/// Buffer de pixels binaires. Taille fixée à la construction, jamais redimensionné.
///
/// La position d'un pixel dans `pixels` dépend du [`Layout`] choisi.
///
/// # Example
/// ```
/// use gg_core::bitmap::Bitmap;
/// use gg_core::pixel::Pixel;
/// let mut bmp = Bitmap::new(3, 3).unwrap();
/// bmp.set(1, 2, Pixel::Mark).unwrap();
/// assert_eq!(bmp.get(1, 2).unwrap(), Pixel::Mark);
/// assert_eq!(bmp.count(Pixel::Background), 8);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    layout: Layout,
    pixels: Vec<Pixel>,
}

impl Bitmap {
    /// Crée un bitmap row-major, entièrement `Background`.
    ///
    /// # Errors
    /// `InvalidArgument` if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self, BitmapError> {
        Self::with_layout(width, height, Layout::RowMajor)
    }

    /// Crée un bitmap entièrement `Background` avec l'adressage donné.
    ///
    /// # Errors
    /// `InvalidArgument` if either dimension is zero or the pixel count
    /// exceeds [`MAX_PIXELS`].
    pub fn with_layout(width: u32, height: u32, layout: Layout) -> Result<Self, BitmapError> {
        if width == 0 || height == 0 {
            return Err(BitmapError::InvalidArgument(format!(
                "dimensions invalides : {width}×{height}"
            )));
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .filter(|&n| n <= MAX_PIXELS)
            .ok_or_else(|| {
                BitmapError::InvalidArgument(format!(
                    "bitmap trop grand : {width}×{height} (max {MAX_PIXELS} pixels)"
                ))
            })?;
        Ok(Self {
            width,
            height,
            layout,
            pixels: vec![Pixel::Background; len],
        })
    }

    /// Width in pixels.
    #[inline]
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Pixels in raw storage order.
    #[inline]
    #[must_use]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Number of pixels equal to `pixel`.
    #[must_use]
    pub fn count(&self, pixel: Pixel) -> usize {
        self.pixels.iter().filter(|&&p| p == pixel).count()
    }

    /// Storage offset of `(x, y)`, bounds-checked against both the
    /// coordinates and the buffer (the latter only matters for `HeightStride`).
    #[inline(always)]
    fn offset(&self, x: u32, y: u32) -> Result<usize, BitmapError> {
        if x >= self.width || y >= self.height {
            return Err(BitmapError::out_of_range(
                u64::from(x),
                u64::from(y),
                self.width,
                self.height,
            ));
        }
        let idx = x as usize + y as usize * self.layout.stride(self.width, self.height);
        if idx >= self.pixels.len() {
            return Err(BitmapError::out_of_range(
                u64::from(x),
                u64::from(y),
                self.width,
                self.height,
            ));
        }
        Ok(idx)
    }

    /// Lit le pixel (x, y).
    ///
    /// # Errors
    /// `IndexOutOfRange` if `(x, y)` is outside the bitmap.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Result<Pixel, BitmapError> {
        self.offset(x, y).map(|i| self.pixels[i])
    }

    /// Écrit le pixel (x, y).
    ///
    /// # Errors
    /// `IndexOutOfRange` if `(x, y)` is outside the bitmap.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: Pixel) -> Result<(), BitmapError> {
        let i = self.offset(x, y)?;
        self.pixels[i] = value;
        Ok(())
    }

    /// Écrit une valeur brute `0`/`1` au pixel (x, y).
    ///
    /// # Errors
    /// `InvalidArgument` for a non-binary value, `IndexOutOfRange` if `(x, y)`
    /// is outside the bitmap.
    ///
    /// # Example
    /// ```
    /// use gg_core::bitmap::Bitmap;
    /// let mut bmp = Bitmap::new(2, 2).unwrap();
    /// assert!(bmp.set_raw(0, 0, 0).is_ok());
    /// assert!(bmp.set_raw(0, 0, 7).is_err());
    /// ```
    pub fn set_raw(&mut self, x: u32, y: u32, value: u8) -> Result<(), BitmapError> {
        let pixel = Pixel::try_from(value)?;
        self.set(x, y, pixel)
    }

    /// Agrandissement plus-proche-voisin d'un facteur entier.
    ///
    /// Chaque pixel source devient un bloc `factor×factor`. Le receveur n'est
    /// pas modifié ; le résultat garde son layout.
    ///
    /// # Errors
    /// `InvalidArgument` if `factor` is zero or the scaled size overflows.
    ///
    /// # Example
    /// ```
    /// use gg_core::bitmap::Bitmap;
    /// use gg_core::pixel::Pixel;
    /// let mut bmp = Bitmap::new(2, 1).unwrap();
    /// bmp.set(1, 0, Pixel::Mark).unwrap();
    /// let big = bmp.scale(3).unwrap();
    /// assert_eq!((big.width(), big.height()), (6, 3));
    /// assert_eq!(big.get(5, 2).unwrap(), Pixel::Mark);
    /// assert_eq!(big.get(2, 2).unwrap(), Pixel::Background);
    /// ```
    pub fn scale(&self, factor: u32) -> Result<Self, BitmapError> {
        if factor == 0 {
            return Err(BitmapError::InvalidArgument(
                "facteur d'échelle nul".to_string(),
            ));
        }
        let overflow = || {
            BitmapError::InvalidArgument(format!(
                "échelle {factor} trop grande pour {}×{}",
                self.width, self.height
            ))
        };
        let width = self.width.checked_mul(factor).ok_or_else(overflow)?;
        let height = self.height.checked_mul(factor).ok_or_else(overflow)?;
        let mut out = Self::with_layout(width, height, self.layout)?;

        if self.layout == Layout::RowMajor {
            // Une ligne agrandie, recopiée `factor` fois.
            let f = factor as usize;
            let out_w = width as usize;
            let mut line = Vec::with_capacity(out_w);
            for (y, row) in self.pixels.chunks_exact(self.width as usize).enumerate() {
                line.clear();
                line.extend(row.iter().flat_map(|&p| std::iter::repeat_n(p, f)));
                for dy in 0..f {
                    let start = (y * f + dy) * out_w;
                    out.pixels[start..start + out_w].copy_from_slice(&line);
                }
            }
            return Ok(out);
        }

        for x in 0..self.width {
            for y in 0..self.height {
                let p = self.get(x, y)?;
                for dx in 0..factor {
                    for dy in 0..factor {
                        out.set(x * factor + dx, y * factor + dy, p)?;
                    }
                }
            }
        }
        Ok(out)
    }

    /// Copie `source` entier dans le receveur à `(at_x, at_y)`.
    ///
    /// Pas de clipping : toute coordonnée hors du receveur est une erreur.
    /// Les bornes sont vérifiées avant la première écriture, donc un échec
    /// laisse le receveur intact.
    ///
    /// # Errors
    /// `IndexOutOfRange` if `source` does not fit at the given offset.
    ///
    /// # Example
    /// ```
    /// use gg_core::bitmap::Bitmap;
    /// use gg_core::pixel::Pixel;
    /// let mut canvas = Bitmap::new(4, 4).unwrap();
    /// let mut dot = Bitmap::new(1, 1).unwrap();
    /// dot.set(0, 0, Pixel::Mark).unwrap();
    /// canvas.blit(&dot, 3, 3).unwrap();
    /// assert_eq!(canvas.get(3, 3).unwrap(), Pixel::Mark);
    /// assert!(canvas.blit(&dot, 4, 0).is_err());
    /// ```
    pub fn blit(&mut self, source: &Self, at_x: u32, at_y: u32) -> Result<(), BitmapError> {
        let last_x = u64::from(at_x) + u64::from(source.width) - 1;
        let last_y = u64::from(at_y) + u64::from(source.height) - 1;
        if last_x >= u64::from(self.width) || last_y >= u64::from(self.height) {
            return Err(BitmapError::out_of_range(
                last_x,
                last_y,
                self.width,
                self.height,
            ));
        }
        // Bottom-right corner holds the largest offset under both layouts.
        self.offset(last_x as u32, last_y as u32)?;

        if self.layout == Layout::RowMajor && source.layout == Layout::RowMajor {
            let sw = source.width as usize;
            let dw = self.width as usize;
            for (y, row) in source.pixels.chunks_exact(sw).enumerate() {
                let start = at_x as usize + (at_y as usize + y) * dw;
                self.pixels[start..start + sw].copy_from_slice(row);
            }
            return Ok(());
        }

        let mut staged = Vec::with_capacity(source.pixels.len());
        for x in 0..source.width {
            for y in 0..source.height {
                staged.push((x, y, source.get(x, y)?));
            }
        }
        for (x, y, p) in staged {
            self.set(at_x + x, at_y + y, p)?;
        }
        Ok(())
    }

    /// Copie ce bitmap dans un nouveau buffer adressé selon `layout`.
    ///
    /// # Errors
    /// `IndexOutOfRange` if some pixel has no slot under `layout` (a
    /// non-square bitmap converted to `HeightStride`).
    pub fn relayout(&self, layout: Layout) -> Result<Self, BitmapError> {
        if layout == self.layout {
            return Ok(self.clone());
        }
        let mut out = Self::with_layout(self.width, self.height, layout)?;
        out.blit(self, 0, 0)?;
        Ok(out)
    }
}

use std::fmt;

use serde::Deserialize;

use crate::error::BitmapError;

/// Un pixel binaire. `Mark` vaut `0`, `Background` vaut `1`.
///
/// # Example
/// ```
/// use gg_core::pixel::Pixel;
/// assert_eq!(Pixel::try_from(0u8).unwrap(), Pixel::Mark);
/// assert!(Pixel::try_from(2u8).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Pixel {
    /// Foreground, written as `0`.
    Mark,
    /// Empty cell, written as `1`.
    #[default]
    Background,
}

impl Pixel {
    /// Raw value as written in a P1 file.
    #[inline(always)]
    #[must_use]
    pub fn value(self) -> u8 {
        match self {
            Self::Mark => 0,
            Self::Background => 1,
        }
    }
}

impl TryFrom<u8> for Pixel {
    type Error = BitmapError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Mark),
            1 => Ok(Self::Background),
            v => Err(BitmapError::InvalidArgument(format!(
                "valeur de pixel non binaire : {v}"
            ))),
        }
    }
}

impl From<Pixel> for u8 {
    fn from(p: Pixel) -> u8 {
        p.value()
    }
}

impl fmt::Display for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Mapping from `(x, y)` to a storage offset.
///
/// `HeightStride` reproduces the historical `x + y * height` addressing, which
/// only agrees with `RowMajor` on square bitmaps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    /// `x + y * width`.
    #[default]
    RowMajor,
    /// `x + y * height`.
    HeightStride,
}

impl Layout {
    /// Stride between consecutive rows for a `width × height` buffer.
    #[inline(always)]
    #[must_use]
    pub fn stride(self, width: u32, height: u32) -> usize {
        match self {
            Self::RowMajor => width as usize,
            Self::HeightStride => height as usize,
        }
    }
}

impl std::str::FromStr for Layout {
    type Err = BitmapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "row-major" | "rowmajor" => Ok(Self::RowMajor),
            "height-stride" | "heightstride" | "legacy" => Ok(Self::HeightStride),
            other => Err(BitmapError::InvalidArgument(format!(
                "layout inconnu : {other}. Supporté : row-major, height-stride"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_values_match_p1() {
        assert_eq!(Pixel::Mark.value(), 0);
        assert_eq!(Pixel::Background.value(), 1);
        assert_eq!(Pixel::default(), Pixel::Background);
        assert_eq!(Pixel::Mark.to_string(), "0");
    }

    #[test]
    fn non_binary_value_is_rejected() {
        for v in 2..=255u8 {
            assert!(matches!(
                Pixel::try_from(v),
                Err(BitmapError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn layout_parses_names() {
        assert_eq!("row-major".parse::<Layout>().unwrap(), Layout::RowMajor);
        assert_eq!(
            "Height-Stride".parse::<Layout>().unwrap(),
            Layout::HeightStride
        );
        assert!("diagonal".parse::<Layout>().is_err());
    }

    #[test]
    fn stride_follows_layout() {
        assert_eq!(Layout::RowMajor.stride(7, 3), 7);
        assert_eq!(Layout::HeightStride.stride(7, 3), 3);
    }
}

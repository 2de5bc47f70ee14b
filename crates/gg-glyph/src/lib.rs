/// Procedural generators for glyphgrid (glyph sheets, mazes).

pub mod glyph;
pub mod maze;
pub mod sheet;
pub mod source;

use gg_core::bitmap::Bitmap;
use gg_core::config::{GridConfig, Pattern};

use sheet::{SheetSpec, compose_sheet};
use source::UnitSource;

/// Génère le motif choisi par la config, dans son layout, sans mise à l'échelle.
///
/// # Errors
/// Returns an error if the configured geometry is invalid for the pattern.
///
/// # Example
/// ```
/// use gg_core::config::GridConfig;
/// let img = gg_glyph::generate(&GridConfig::default(), &mut fastrand::Rng::with_seed(0)).unwrap();
/// assert_eq!((img.width(), img.height()), (30, 30));
/// ```
pub fn generate<S: UnitSource + ?Sized>(
    config: &GridConfig,
    source: &mut S,
) -> anyhow::Result<Bitmap> {
    let img = match config.pattern {
        Pattern::Glyphs => compose_sheet(&SheetSpec::from(config), source)?,
        Pattern::Maze => {
            log::debug!(
                "Labyrinthe {}×{}",
                config.maze_width,
                config.maze_height
            );
            maze::maze(config.maze_width, config.maze_height, source)?.relayout(config.layout)?
        }
    };
    Ok(img)
}

/// Génère puis agrandit d'un facteur `config.scale`.
///
/// # Errors
/// Returns an error if generation or scaling fails.
///
/// # Example
/// ```
/// use gg_core::config::GridConfig;
/// let config = GridConfig { scale: 2, ..GridConfig::default() };
/// let img = gg_glyph::render(&config, &mut fastrand::Rng::with_seed(0)).unwrap();
/// assert_eq!(img.width(), 60);
/// ```
pub fn render<S: UnitSource + ?Sized>(
    config: &GridConfig,
    source: &mut S,
) -> anyhow::Result<Bitmap> {
    let img = generate(config, source)?;
    let scaled = img.scale(config.scale)?;
    log::info!(
        "Rendu {:?} {}×{} -> {}×{}",
        config.pattern,
        img.width(),
        img.height(),
        scaled.width(),
        scaled.height()
    );
    Ok(scaled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gg_core::pixel::{Layout, Pixel};
    use crate::source::seeded;

    #[test]
    fn default_render_is_600_square() {
        let img = render(&GridConfig::default(), &mut seeded(Some(1))).unwrap();
        assert_eq!((img.width(), img.height()), (600, 600));
        assert!(img.serialize().starts_with("P1\n600 600\n"));
    }

    #[test]
    fn maze_pattern_uses_maze_dimensions() {
        let config = GridConfig {
            pattern: Pattern::Maze,
            maze_width: 9,
            maze_height: 5,
            scale: 3,
            ..GridConfig::default()
        };
        let img = render(&config, &mut seeded(Some(2))).unwrap();
        assert_eq!((img.width(), img.height()), (27, 15));
        assert_eq!(img.get(3, 3).unwrap(), Pixel::Mark);
    }

    #[test]
    fn wide_maze_with_height_stride_aliases_but_tall_fails() {
        let wide = GridConfig {
            pattern: Pattern::Maze,
            maze_width: 9,
            maze_height: 5,
            scale: 1,
            layout: Layout::HeightStride,
            ..GridConfig::default()
        };
        assert!(generate(&wide, &mut seeded(Some(2))).is_ok());

        let tall = GridConfig {
            maze_width: 5,
            maze_height: 9,
            ..wide
        };
        assert!(generate(&tall, &mut seeded(Some(2))).is_err());
    }

    #[test]
    fn oversized_output_is_rejected_before_allocation() {
        let mut huge = GridConfig {
            columns: 256,
            rows: 256,
            glyph_size: 256,
            padding: 256,
            scale: 256,
            ..GridConfig::default()
        };
        huge.sanitize();
        let err = render(&huge, &mut seeded(Some(1))).unwrap_err();
        let kind = err.downcast_ref::<gg_core::BitmapError>().map(gg_core::BitmapError::kind);
        assert_eq!(kind, Some(gg_core::ErrorKind::InvalidArgument));

        // La planche tient, c'est l'agrandissement qui dépasse.
        let wide = GridConfig {
            columns: 256,
            rows: 256,
            scale: 256,
            ..GridConfig::default()
        };
        assert!(generate(&wide, &mut seeded(Some(1))).is_ok());
        assert!(render(&wide, &mut seeded(Some(1))).is_err());
    }

    #[test]
    fn same_seed_same_output() {
        let config = GridConfig {
            scale: 1,
            ..GridConfig::default()
        };
        let a = render(&config, &mut seeded(Some(77))).unwrap();
        let b = render(&config, &mut seeded(Some(77))).unwrap();
        assert_eq!(a.serialize(), b.serialize());
    }
}

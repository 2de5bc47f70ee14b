use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::pixel::Layout;

/// Motif procédural à générer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pattern {
    /// Grid of random glyphs.
    #[default]
    Glyphs,
    /// Single maze-like field.
    Maze,
}

/// Configuration complète d'une génération.
///
/// Chargée depuis TOML. Chaque champ a une valeur par défaut saine.
///
/// # Example
/// ```
/// use gg_core::config::GridConfig;
/// let config = GridConfig::default();
/// assert_eq!(config.columns, 4);
/// assert_eq!(config.scale, 20);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct GridConfig {
    /// Motif à générer.
    pub pattern: Pattern,

    // === Planche de glyphes ===
    /// Glyphs per row of the sheet.
    pub columns: u32,
    /// Glyphs per column of the sheet.
    pub rows: u32,
    /// Side of one square glyph, in pixels.
    pub glyph_size: u32,
    /// Empty border around and between glyphs, in pixels.
    pub padding: u32,

    // === Labyrinthe ===
    /// Maze width. Must be odd.
    pub maze_width: u32,
    /// Maze height. Must be odd.
    pub maze_height: u32,

    // === Sortie ===
    /// Nearest-neighbor upscale factor applied before output.
    pub scale: u32,
    /// Pixel addressing of the output bitmap.
    pub layout: Layout,
    /// Graine du générateur. `None` = entropie.
    pub seed: Option<u64>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            pattern: Pattern::Glyphs,
            columns: 4,
            rows: 4,
            glyph_size: 5,
            padding: 2,
            maze_width: 51,
            maze_height: 31,
            scale: 20,
            layout: Layout::RowMajor,
            seed: None,
        }
    }
}

impl GridConfig {
    /// Ramène les valeurs hors plage dans leurs bornes.
    ///
    /// # Example
    /// ```
    /// use gg_core::config::GridConfig;
    /// let mut c = GridConfig { scale: 0, maze_width: 10, ..GridConfig::default() };
    /// c.sanitize();
    /// assert_eq!(c.scale, 1);
    /// assert_eq!(c.maze_width, 11);
    /// ```
    pub fn sanitize(&mut self) {
        self.columns = self.columns.clamp(1, 256);
        self.rows = self.rows.clamp(1, 256);
        self.glyph_size = self.glyph_size.clamp(1, 256);
        self.padding = self.padding.min(256);
        self.scale = self.scale.clamp(1, 256);
        self.maze_width = odd_at_least_three(self.maze_width.min(4095));
        self.maze_height = odd_at_least_three(self.maze_height.min(4095));
    }
}

fn odd_at_least_three(v: u32) -> u32 {
    let v = v.max(3);
    if v % 2 == 0 { v + 1 } else { v }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    pattern: Option<Pattern>,
    sheet: Option<SheetSection>,
    maze: Option<MazeSection>,
    output: Option<OutputSection>,
}

#[derive(Deserialize)]
struct SheetSection {
    columns: Option<u32>,
    rows: Option<u32>,
    glyph_size: Option<u32>,
    padding: Option<u32>,
}

#[derive(Deserialize)]
struct MazeSection {
    width: Option<u32>,
    height: Option<u32>,
}

#[derive(Deserialize)]
struct OutputSection {
    scale: Option<u32>,
    layout: Option<Layout>,
    seed: Option<u64>,
}

/// Parse un document TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the document is not valid TOML for this schema.
///
/// # Example
/// ```
/// use gg_core::config::parse_config;
/// let c = parse_config("[sheet]\ncolumns = 8\n").unwrap();
/// assert_eq!(c.columns, 8);
/// assert_eq!(c.rows, 4);
/// ```
pub fn parse_config(content: &str) -> Result<GridConfig> {
    let file: ConfigFile = toml::from_str(content).context("Erreur de parsing TOML")?;
    let mut config = GridConfig::default();

    if let Some(v) = file.pattern {
        config.pattern = v;
    }
    if let Some(s) = file.sheet {
        if let Some(v) = s.columns {
            config.columns = v;
        }
        if let Some(v) = s.rows {
            config.rows = v;
        }
        if let Some(v) = s.glyph_size {
            config.glyph_size = v;
        }
        if let Some(v) = s.padding {
            config.padding = v;
        }
    }
    if let Some(m) = file.maze {
        if let Some(v) = m.width {
            config.maze_width = v;
        }
        if let Some(v) = m.height {
            config.maze_height = v;
        }
    }
    if let Some(o) = file.output {
        if let Some(v) = o.scale {
            config.scale = v;
        }
        if let Some(v) = o.layout {
            config.layout = v;
        }
        if o.seed.is_some() {
            config.seed = o.seed;
        }
    }

    config.sanitize();
    Ok(config)
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use gg_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<GridConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    parse_config(&content).with_context(|| format!("Config invalide : {}", path.display()))
}

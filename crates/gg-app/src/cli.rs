use std::path::PathBuf;

use clap::Parser;
use gg_core::config::{GridConfig, Pattern};
use gg_core::pixel::Layout;

/// glyphgrid — planches de glyphes aléatoires au format PBM (P1).
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Fichier de configuration TOML. Absent : valeurs par défaut.
    #[arg(short, long, default_value = "config/glyphgrid.toml")]
    pub config: PathBuf,

    /// Motif : "glyphs" ou "maze".
    #[arg(long)]
    pub pattern: Option<String>,

    /// Nombre de glyphes par ligne.
    #[arg(long)]
    pub columns: Option<u32>,

    /// Nombre de glyphes par colonne.
    #[arg(long)]
    pub rows: Option<u32>,

    /// Côté d'un glyphe, en pixels.
    #[arg(long)]
    pub glyph_size: Option<u32>,

    /// Marge autour et entre les glyphes, en pixels.
    #[arg(long)]
    pub padding: Option<u32>,

    /// Largeur du labyrinthe (impaire).
    #[arg(long)]
    pub maze_width: Option<u32>,

    /// Hauteur du labyrinthe (impaire).
    #[arg(long)]
    pub maze_height: Option<u32>,

    /// Facteur d'agrandissement entier.
    #[arg(long)]
    pub scale: Option<u32>,

    /// Graine du générateur, pour une sortie reproductible.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Adressage des pixels : row-major, height-stride.
    #[arg(long)]
    pub layout: Option<String>,

    /// Fichier de sortie. Défaut : stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Applique les overrides CLI sur `config`, puis la re-borne.
    ///
    /// # Errors
    /// Returns an error on an unknown pattern or layout name.
    pub fn apply_overrides(&self, config: &mut GridConfig) -> anyhow::Result<()> {
        if let Some(ref name) = self.pattern {
            config.pattern = match name.to_lowercase().as_str() {
                "glyphs" | "glyph" => Pattern::Glyphs,
                "maze" | "mazelike" => Pattern::Maze,
                _ => anyhow::bail!("Motif inconnu : {name}. Supporté : glyphs, maze"),
            };
        }
        if let Some(ref name) = self.layout {
            config.layout = name.parse::<Layout>()?;
        }
        if let Some(v) = self.columns {
            config.columns = v;
        }
        if let Some(v) = self.rows {
            config.rows = v;
        }
        if let Some(v) = self.glyph_size {
            config.glyph_size = v;
        }
        if let Some(v) = self.padding {
            config.padding = v;
        }
        if let Some(v) = self.maze_width {
            config.maze_width = v;
        }
        if let Some(v) = self.maze_height {
            config.maze_height = v;
        }
        if let Some(v) = self.scale {
            config.scale = v;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config.sanitize();
        Ok(())
    }
}

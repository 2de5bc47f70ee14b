use std::fs::File;
use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use clap::Parser;
use gg_core::config::GridConfig;
use gg_core::pbm::write_pbm;

pub mod cli;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Charger la config, puis les overrides CLI
    let mut config = resolve_config(&cli)?;
    cli.apply_overrides(&mut config)?;
    log::debug!("Config effective : {config:?}");

    // 4. Générer
    let mut rng = gg_glyph::source::seeded(config.seed);
    let img = gg_glyph::render(&config, &mut rng)?;

    // 5. Écrire
    if let Some(ref path) = cli.output {
        let file = File::create(path)
            .with_context(|| format!("Impossible de créer {}", path.display()))?;
        write_pbm(&img, BufWriter::new(file))
            .with_context(|| format!("Écriture impossible : {}", path.display()))?;
        log::info!("PBM écrit dans {}", path.display());
    } else {
        let stdout = io::stdout();
        write_pbm(&img, BufWriter::new(stdout.lock())).context("Écriture sur stdout")?;
    }
    Ok(())
}

/// Config file if present, defaults otherwise.
fn resolve_config(cli: &cli::Cli) -> Result<GridConfig> {
    if cli.config.exists() {
        gg_core::config::load_config(&cli.config)
    } else {
        log::warn!(
            "Config introuvable : {}. Utilisation des défauts.",
            cli.config.display()
        );
        Ok(GridConfig::default())
    }
}

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use term_snake::game::{GameConfig, GrowthModel, IndexPolicy, SpeedPolicy};
use term_snake::logging;
use term_snake::modes::HumanMode;

#[derive(Parser, Debug)]
#[command(name = "term_snake")]
#[command(version, about = "Turn-paced Snake for the terminal")]
struct Cli {
    /// JSON config file; WINDOW_HEIGHT, WINDOW_WIDTH, INITIAL_SPEED and
    /// SPEED_INCREMENT are required in it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board height, border included
    #[arg(long)]
    height: Option<u16>,

    /// Board width, border included
    #[arg(long)]
    width: Option<u16>,

    /// Starting speed in ticks per second
    #[arg(long)]
    speed: Option<f64>,

    /// Speed gained per food item
    #[arg(long)]
    speed_increment: Option<f64>,

    #[arg(long, value_enum)]
    speed_policy: Option<SpeedPolicy>,

    #[arg(long, value_enum)]
    growth: Option<GrowthModel>,

    #[arg(long, value_enum)]
    index_policy: Option<IndexPolicy>,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (RUST_LOG sets the level)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    /// File values (or the defaults), then flags on top.
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_file(path)
                .with_context(|| format!("Invalid configuration in {}", path.display()))?,
            None => GameConfig::default(),
        };

        if let Some(height) = self.height {
            config.window_height = height;
        }
        if let Some(width) = self.width {
            config.window_width = width;
        }
        if let Some(speed) = self.speed {
            config.initial_speed = speed;
        }
        if let Some(increment) = self.speed_increment {
            config.speed_increment = increment;
        }
        if let Some(policy) = self.speed_policy {
            config.speed_policy = policy;
        }
        if let Some(model) = self.growth {
            config.growth_model = model;
        }
        if let Some(policy) = self.index_policy {
            config.index_policy = policy;
        }

        config.validate().context("Invalid configuration")?;
        Ok(config)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.log_file.as_deref())?;
    let config = cli.game_config()?;

    HumanMode::new(config, cli.seed).run().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_without_flags() {
        let cli = Cli::parse_from(["term_snake"]);
        assert_eq!(cli.game_config().unwrap(), GameConfig::default());
    }

    #[test]
    fn test_flags_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"WINDOW_HEIGHT": 30, "WINDOW_WIDTH": 30, "INITIAL_SPEED": 3, "SPEED_INCREMENT": 1}}"#
        )
        .unwrap();

        let cli = Cli::parse_from([
            "term_snake",
            "--config",
            file.path().to_str().unwrap(),
            "--width",
            "24",
            "--growth",
            "turning-points",
            "--speed-policy",
            "multiplicative",
        ]);
        let config = cli.game_config().unwrap();

        assert_eq!(config.window_height, 30);
        assert_eq!(config.window_width, 24);
        assert_eq!(config.initial_speed, 3.0);
        assert_eq!(config.growth_model, GrowthModel::TurningPoints);
        assert_eq!(config.speed_policy, SpeedPolicy::Multiplicative);
    }

    #[test]
    fn test_invalid_flag_value_fails() {
        let cli = Cli::parse_from(["term_snake", "--height", "5"]);
        assert!(cli.game_config().is_err());
    }
}

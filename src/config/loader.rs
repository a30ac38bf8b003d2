// Configuration file loading and creation

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use super::types::Config;

/// Default location of the configuration file
pub fn get_config_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("rally-pong");
    path.push("config.toml");
    path
}

/// Parse configuration text; missing sections and fields take their defaults
pub fn parse_config(contents: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(contents)
}

/// Load configuration from `path` (or the default location).
///
/// A missing file is created with defaults. A file that fails to parse is
/// reported and replaced by defaults in memory, never overwritten.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let config_path = path.map(Path::to_path_buf).unwrap_or_else(get_config_path);

    if config_path.exists() {
        let contents = fs::read_to_string(&config_path)
            .with_context(|| format!("reading config file {}", config_path.display()))?;
        match parse_config(&contents) {
            Ok(config) => Ok(config),
            Err(e) => {
                warn!(path = %config_path.display(), error = %e, "failed to parse config, using defaults");
                Ok(Config::default())
            }
        }
    } else {
        create_default_config(&config_path)?;
        Ok(Config::default())
    }
}

/// Create a default configuration file with helpful comments
pub fn create_default_config(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating config directory {}", dir.display()))?;
    }

    let config = Config::default();
    let toml_string =
        toml::to_string_pretty(&config).context("serializing default configuration")?;

    let commented_toml = format!(
        "# Rally Pong Configuration File\n\
         # Edit this file to customize game behavior\n\
         # After editing, restart the game for changes to take effect\n\
         #\n\
         # Key binding format: Use \"Up\", \"Down\", \"Left\", \"Right\", \"Enter\", \"Esc\"\n\
         #                     or single characters like \"W\", \"S\", \"Q\", etc.\n\
         #\n\
         # Colors: RGB values from 0-255\n\
         #\n\
         # Difficulties: \"easy\", \"normal\", \"hard\", \"expert\"\n\
         # Time models: \"delta_time\" (speeds per second), \"fixed_step\" (speeds per tick)\n\
         # Set physics.max_ball_speed to cap rally speed-up (unbounded by default)\n\n\
         {}",
        toml_string
    );

    fs::write(path, commented_toml)
        .with_context(|| format!("writing default config to {}", path.display()))?;
    info!(path = %path.display(), "created default config file");
    Ok(())
}

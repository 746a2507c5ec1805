//! Write a default .tagcheck.toml

use tagcheck::config::{Config, ConfigError};
use tagcheck::output::{OperationResult, OutputMode};

/// Create `.tagcheck.toml` in the current directory
pub fn init(force: bool, mode: OutputMode) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;

    let result = match Config::write_default(&cwd, force) {
        Ok(path) => {
            log::debug!("wrote {}", path.display());
            OperationResult {
                success: true,
                message: "Created .tagcheck.toml".to_string(),
            }
        },
        Err(ConfigError::AlreadyExists(_)) => OperationResult {
            success: false,
            message: "Already initialized (.tagcheck.toml exists). Use --force to overwrite."
                .to_string(),
        },
        Err(e) => return Err(e.into()),
    };

    result.render(mode);
    Ok(())
}

use std::env;
use std::path::PathBuf;

const CONFIG_PATH_ENV: &str = "FILEMAN_CONFIG";
const CONFIG_FILE_NAME: &str = ".fileman.yml";

/// Locate the configuration file: an explicit `FILEMAN_CONFIG` path wins,
/// otherwise `~/.fileman.yml` when it exists.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Ok(path) = env::var(CONFIG_PATH_ENV) {
        if !path.trim().is_empty() {
            return Some(PathBuf::from(path));
        }
    }

    let candidate = dirs::home_dir()?.join(CONFIG_FILE_NAME);
    if candidate.exists() {
        return Some(candidate);
    }

    None
}

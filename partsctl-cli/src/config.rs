//! Environment file loading
//!
//! Sources, highest priority first:
//! - variables already set in the process environment
//! - `./.env` (or the nearest one in a parent directory)
//! - `~/.partsctl/.env`
//!
//! dotenvy never overwrites a variable that is already set, so loading in
//! this order yields the priority above.

use std::path::{Path, PathBuf};

/// Directory under `$HOME` holding the global `.env`
const CONFIG_DIR: &str = ".partsctl";

/// Load every available `.env` file and return the paths that were read.
///
/// Missing or unreadable files are skipped.
pub fn load_dotenv() -> Vec<PathBuf> {
    let mut loaded = Vec::new();

    if let Ok(path) = dotenvy::dotenv() {
        loaded.push(path);
    }

    if let Some(env_file) = global_env_file() {
        if load_file(&env_file) {
            loaded.push(env_file);
        }
    }

    loaded
}

/// `~/.partsctl/.env`, if a home directory is known
pub fn global_env_file() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(".env"))
}

fn load_file(path: &Path) -> bool {
    path.exists() && dotenvy::from_path(path).is_ok()
}

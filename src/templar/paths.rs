use chrono::{DateTime, Local};
use directories::{BaseDirs, UserDirs};
use std::path::{Path, PathBuf};

const DEFAULT_TARGET_TIME_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Expands a leading `~` or `~/` to the home directory.
pub fn expand_home(input: &str) -> PathBuf {
    let input = input.trim();
    if input == "~" {
        if let Some(home) = home_dir() {
            return home;
        }
    }
    if let Some(stripped) = input.strip_prefix("~/") {
        if let Some(home) = home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(input)
}

/// Makes `path` absolute against the current directory. Does not touch the
/// filesystem, so the path need not exist yet.
pub fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

/// `<Downloads>/<prefix>_<YYYYmmdd_HHMMSS>`
pub fn default_target(prefix: &str, now: DateTime<Local>) -> PathBuf {
    downloads_dir().join(format!(
        "{}_{}",
        prefix,
        now.format(DEFAULT_TARGET_TIME_FORMAT)
    ))
}

fn home_dir() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
}

fn downloads_dir() -> PathBuf {
    UserDirs::new()
        .and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
        .or_else(|| home_dir().map(|home| home.join("Downloads")))
        .unwrap_or_else(|| PathBuf::from("."))
}

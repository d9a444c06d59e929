use std::path::{Path, PathBuf};

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};

use crate::config::{ConfigPaths, LoggingConfig};

const DEFAULT_LOG_BASENAME: &str = "concierge";

/// Start the rotating file logger.
///
/// File logging stops when the returned handle is dropped, so `run` keeps it
/// for the whole session.
pub fn init_logging(config: &LoggingConfig, paths: &ConfigPaths) -> anyhow::Result<LoggerHandle> {
    let (directory, basename) = log_target(config.path.as_deref(), &paths.logs_dir);
    let handle = Logger::try_with_env_or_str(&config.level)?
        .log_to_file(FileSpec::default().directory(directory).basename(basename))
        .rotate(
            Criterion::Size(config.rotate_size),
            Naming::Numbers,
            Cleanup::KeepLogFiles(config.rotate_keep),
        )
        .start()?;
    Ok(handle)
}

/// Directory and basename for the log file. flexi_logger appends its own
/// `.log` suffix, so any extension on `custom` is dropped.
fn log_target(custom: Option<&Path>, logs_dir: &Path) -> (PathBuf, String) {
    let Some(path) = custom else {
        return (logs_dir.to_path_buf(), DEFAULT_LOG_BASENAME.to_string());
    };
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => logs_dir.to_path_buf(),
    };
    let basename = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(DEFAULT_LOG_BASENAME)
        .to_string();
    (directory, basename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_logs_dir() {
        let (dir, name) = log_target(None, Path::new("/var/concierge/logs"));
        assert_eq!(dir, PathBuf::from("/var/concierge/logs"));
        assert_eq!(name, "concierge");
    }

    #[test]
    fn custom_path_splits_into_dir_and_stem() {
        let (dir, name) = log_target(Some(Path::new("/tmp/menu/chat.log")), Path::new("/unused"));
        assert_eq!(dir, PathBuf::from("/tmp/menu"));
        assert_eq!(name, "chat");
    }

    #[test]
    fn bare_file_name_lands_in_logs_dir() {
        let (dir, name) = log_target(Some(Path::new("waiter.log")), Path::new("/logs"));
        assert_eq!(dir, PathBuf::from("/logs"));
        assert_eq!(name, "waiter");
    }
}

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Directory under the home directory checked during discovery.
const HOME_DATA_DIR: [&str; 2] = [".bikeshare", "data"];

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Map a `--log-level` name to a `tracing` filter directive.
///
/// `CRITICAL` has no tracing counterpart and maps to `error`. Unknown names
/// fall back to `warn`.
pub fn level_directive(log_level: &str) -> &'static str {
    match log_level.to_uppercase().as_str() {
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARNING" => "warn",
        "ERROR" | "CRITICAL" => "error",
        _ => "warn",
    }
}

/// Initialise the global `tracing` subscriber.
///
/// Logs go to stderr so they never interleave with the prompts on stdout.
/// With `log_file` set they are appended to that file instead.
pub fn setup_logging(log_level: &str, log_file: Option<&Path>) -> anyhow::Result<()> {
    let filter = EnvFilter::new(level_directive(log_level));

    match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let layer = fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file));
            tracing_subscriber::registry().with(filter).with(layer).init();
        }
        None => {
            let layer = fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr);
            tracing_subscriber::registry().with(filter).with(layer).init();
        }
    }

    Ok(())
}

// ── Data-dir discovery ─────────────────────────────────────────────────────────

/// Pick the directory holding the city CSVs.
///
/// An explicit `--data-dir` always wins. Otherwise see
/// [`discover_data_dir_from`], rooted at the current directory and the
/// user's home.
pub fn discover_data_dir(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir;
    }
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    discover_data_dir_from(&cwd, dirs::home_dir().as_deref())
}

/// First existing of `cwd/data`, `cwd` itself when it holds `chicago.csv`,
/// and `home/.bikeshare/data`. Falls back to `cwd`.
pub fn discover_data_dir_from(cwd: &Path, home: Option<&Path>) -> PathBuf {
    let local = cwd.join("data");
    if local.is_dir() {
        return local;
    }
    if cwd.join("chicago.csv").is_file() {
        return cwd.to_path_buf();
    }
    if let Some(home) = home {
        let dir = HOME_DATA_DIR.iter().fold(home.to_path_buf(), |p, part| p.join(part));
        if dir.is_dir() {
            return dir;
        }
    }
    cwd.to_path_buf()
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_level_directive() {
        assert_eq!(level_directive("DEBUG"), "debug");
        assert_eq!(level_directive("info"), "info");
        assert_eq!(level_directive("WARNING"), "warn");
        assert_eq!(level_directive("ERROR"), "error");
        assert_eq!(level_directive("CRITICAL"), "error");
        assert_eq!(level_directive("bogus"), "warn");
    }

    #[test]
    fn test_explicit_data_dir_wins() {
        let tmp = TempDir::new().expect("tempdir");
        let dir = discover_data_dir(Some(tmp.path().join("elsewhere")));
        assert_eq!(dir, tmp.path().join("elsewhere"));
    }

    #[test]
    fn test_discover_prefers_local_data_dir() {
        let cwd = TempDir::new().expect("tempdir");
        let home = TempDir::new().expect("tempdir");
        std::fs::create_dir(cwd.path().join("data")).expect("data dir");
        std::fs::write(cwd.path().join("chicago.csv"), "").expect("chicago");
        std::fs::create_dir_all(home.path().join(".bikeshare").join("data")).expect("home data");

        let dir = discover_data_dir_from(cwd.path(), Some(home.path()));
        assert_eq!(dir, cwd.path().join("data"));
    }

    #[test]
    fn test_discover_uses_cwd_holding_chicago_csv() {
        let cwd = TempDir::new().expect("tempdir");
        let home = TempDir::new().expect("tempdir");
        std::fs::write(cwd.path().join("chicago.csv"), "").expect("chicago");
        std::fs::create_dir_all(home.path().join(".bikeshare").join("data")).expect("home data");

        let dir = discover_data_dir_from(cwd.path(), Some(home.path()));
        assert_eq!(dir, cwd.path());
    }

    #[test]
    fn test_discover_falls_back_to_home_data() {
        let cwd = TempDir::new().expect("tempdir");
        let home = TempDir::new().expect("tempdir");
        let home_data = home.path().join(".bikeshare").join("data");
        std::fs::create_dir_all(&home_data).expect("home data");

        assert_eq!(discover_data_dir_from(cwd.path(), Some(home.path())), home_data);
    }

    #[test]
    fn test_discover_defaults_to_cwd() {
        let cwd = TempDir::new().expect("tempdir");
        let home = TempDir::new().expect("tempdir");

        assert_eq!(discover_data_dir_from(cwd.path(), Some(home.path())), cwd.path());
        assert_eq!(discover_data_dir_from(cwd.path(), None), cwd.path());
    }
}

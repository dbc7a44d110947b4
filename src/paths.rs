use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::shell::filesystem::{weakly_canonical, FsError, FsResult};

/// Centralized path management for the explorer
/// Locates the per-user config file and the session's starting points
#[derive(Debug, Clone)]
pub struct PathManager {
    /// Directory for configuration files, when the platform defines one
    pub config_dir: Option<PathBuf>,
}

impl PathManager {
    /// Create a new PathManager, using XDG directories when available
    pub fn new() -> Self {
        let config_dir = ProjectDirs::from("", "", "mini-file-explorer").map(|dirs| dirs.config_dir().to_path_buf());
        if config_dir.is_none() {
            log::info!("No home directory for configuration lookup, using defaults only");
        }
        Self { config_dir }
    }

    /// Get the default configuration file path
    pub fn config_file(&self) -> Option<PathBuf> {
        self.config_dir.as_ref().map(|dir| dir.join("config.toml"))
    }

    /// Log the current directory configuration
    pub fn log_paths(&self) {
        log::info!("Path configuration:");
        match self.config_file() {
            Some(file) => log::info!("  Config file: {}", file.display()),
            None => log::info!("  Config file: <none>"),
        }
    }
}

impl Default for PathManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Pick the home directory: a non-empty `HOME` value first, then the configured fallback
pub fn resolve_home(env_home: Option<OsString>, fallback: Option<&Path>) -> Option<PathBuf> {
    let from_env = env_home.filter(|home| !home.is_empty()).map(PathBuf::from);
    let home = from_env.or_else(|| fallback.map(Path::to_path_buf))?;
    Some(weakly_canonical(&home))
}

/// The directory a session starts in: `requested` resolved against `base`, or
/// `base` itself. A requested path must be an existing directory.
pub fn startup_directory(base: &Path, requested: Option<&Path>) -> FsResult<PathBuf> {
    let Some(requested) = requested else {
        return Ok(weakly_canonical(base));
    };

    let dir = weakly_canonical(&base.join(requested));
    if !dir.exists() {
        return Err(FsError::NotFound(dir));
    }
    if !dir.is_dir() {
        return Err(FsError::NotADirectory(dir));
    }
    Ok(dir)
}

/// `startup_directory` relative to the process working directory
pub fn initial_directory(requested: Option<&Path>) -> FsResult<PathBuf> {
    let cwd = env::current_dir().map_err(|err| FsError::io(Path::new("."), err))?;
    startup_directory(&cwd, requested)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_file_lives_in_config_dir() {
        let paths = PathManager {
            config_dir: Some(PathBuf::from("/etc/explorer")),
        };
        assert_eq!(paths.config_file(), Some(PathBuf::from("/etc/explorer/config.toml")));
        assert_eq!(PathManager { config_dir: None }.config_file(), None);
    }

    #[test]
    fn test_resolve_home_prefers_environment() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().canonicalize().unwrap();
        let env_home = root.join("env");
        let fallback = root.join("fallback");

        assert_eq!(
            resolve_home(Some(env_home.clone().into_os_string()), Some(&fallback)),
            Some(env_home)
        );
        assert_eq!(resolve_home(Some(OsString::new()), Some(&fallback)), Some(fallback.clone()));
        assert_eq!(resolve_home(None, Some(&fallback)), Some(fallback));
        assert_eq!(resolve_home(None, None), None);
    }

    #[test]
    fn test_startup_directory_defaults_to_base() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().canonicalize().unwrap();

        assert_eq!(startup_directory(&root, None).unwrap(), root);
    }

    #[test]
    fn test_startup_directory_resolves_relative_request() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().canonicalize().unwrap();
        fs::create_dir(root.join("projects")).unwrap();

        let dir = startup_directory(&root, Some(Path::new("projects/../projects"))).unwrap();
        assert_eq!(dir, root.join("projects"));
    }

    #[test]
    fn test_startup_directory_rejects_missing_and_files() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().canonicalize().unwrap();
        fs::write(root.join("file"), b"").unwrap();

        assert!(matches!(
            startup_directory(&root, Some(Path::new("missing"))),
            Err(FsError::NotFound(_))
        ));
        assert!(matches!(
            startup_directory(&root, Some(Path::new("file"))),
            Err(FsError::NotADirectory(_))
        ));
    }
}

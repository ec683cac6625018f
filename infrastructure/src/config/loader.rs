//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "sugar-signal";
const PROJECT_FILES: [&str; 2] = ["sugar-signal.toml", ".sugar-signal.toml"];
const ENV_PREFIX: &str = "SUGAR_SIGNAL_";

/// A configuration source and whether it was found on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSource {
    pub label: &'static str,
    pub path: PathBuf,
    pub found: bool,
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `SUGAR_SIGNAL_<SECTION>__<KEY>` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./sugar-signal.toml` or `./.sugar-signal.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/sugar-signal/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(project_path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&project_path));
        }

        if let Some(path) = config_path {
            ensure_exists(path)?;
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment.extract().map_err(Box::new)
    }

    /// Load a single file on top of the defaults, ignoring every other source
    pub fn load_file(path: &Path) -> Result<FileConfig, Box<figment::Error>> {
        ensure_exists(path)?;
        Figment::new()
            .merge(Serialized::defaults(FileConfig::default()))
            .merge(Toml::file(path))
            .extract()
            .map_err(Box::new)
    }

    /// Resolve the configuration for the command-line flags.
    ///
    /// `--no-config` skips discovery and environment variables; an explicit
    /// `--config` file is still read on top of the defaults.
    pub fn load_for_cli(
        config_path: Option<&Path>,
        no_config: bool,
    ) -> Result<FileConfig, Box<figment::Error>> {
        match (no_config, config_path) {
            (true, Some(path)) => Self::load_file(path),
            (true, None) => Ok(Self::load_defaults()),
            (false, path) => Self::load(path),
        }
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/sugar-signal/config.toml if set,
    /// otherwise the platform config directory equivalent
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// The file sources consulted by [`ConfigLoader::load`], highest priority first
    pub fn sources(config_path: Option<&Path>) -> Vec<ConfigSource> {
        let mut sources = Vec::new();

        if let Some(path) = config_path {
            sources.push(ConfigSource {
                label: "Explicit",
                path: path.to_path_buf(),
                found: path.exists(),
            });
        }

        match Self::project_config_path() {
            Some(path) => sources.push(ConfigSource {
                label: "Project",
                path,
                found: true,
            }),
            None => sources.push(ConfigSource {
                label: "Project",
                path: PathBuf::from(PROJECT_FILES[0]),
                found: false,
            }),
        }

        if let Some(path) = Self::global_config_path() {
            let found = path.exists();
            sources.push(ConfigSource {
                label: "Global",
                path,
                found,
            });
        }

        sources
    }
}

/// An explicitly requested file must exist; figment treats missing files as empty
fn ensure_exists(path: &Path) -> Result<(), Box<figment::Error>> {
    if path.exists() {
        Ok(())
    } else {
        Err(Box::new(figment::Error::from(format!(
            "config file not found: {}",
            path.display()
        ))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::file_config::{DEFAULT_BIND, DEFAULT_UPSTREAM_URL};
    use std::io::Write;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.upstream.url, DEFAULT_UPSTREAM_URL);
        assert_eq!(config.server.bind, DEFAULT_BIND);
    }

    #[test]
    fn test_global_config_path_contains_app_dir() {
        if let Some(path) = ConfigLoader::global_config_path() {
            assert!(path.to_string_lossy().contains("sugar-signal"));
        }
    }

    #[test]
    fn test_load_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[upstream]
url = "http://127.0.0.1:9000/predict"
"#
        )
        .unwrap();

        let config = ConfigLoader::load_file(file.path()).unwrap();
        assert_eq!(config.upstream.url, "http://127.0.0.1:9000/predict");
        assert_eq!(config.server.bind, DEFAULT_BIND);
    }

    #[test]
    fn test_load_file_missing_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(ConfigLoader::load_file(&missing).is_err());
    }

    #[test]
    fn test_load_file_with_bad_toml_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server\nbind = ").unwrap();
        assert!(ConfigLoader::load_file(file.path()).is_err());
    }

    #[test]
    fn test_no_config_without_path_is_defaults() {
        let config = ConfigLoader::load_for_cli(None, true).unwrap();
        assert_eq!(config, ConfigLoader::load_defaults());
    }

    #[test]
    fn test_no_config_still_reads_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nbind = \"127.0.0.1:4100\"").unwrap();

        let config = ConfigLoader::load_for_cli(Some(file.path()), true).unwrap();
        assert_eq!(config.server.bind, "127.0.0.1:4100");
        assert_eq!(config.upstream.url, DEFAULT_UPSTREAM_URL);
    }

    #[test]
    fn test_no_config_with_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(ConfigLoader::load_for_cli(Some(&missing), true).is_err());
    }

    #[test]
    fn test_sources_lists_explicit_first() {
        let dir = tempfile::tempdir().unwrap();
        let explicit = dir.path().join("custom.toml");
        let sources = ConfigLoader::sources(Some(&explicit));
        assert_eq!(sources[0].label, "Explicit");
        assert!(!sources[0].found);
        assert!(sources.iter().any(|s| s.label == "Project"));
    }
}

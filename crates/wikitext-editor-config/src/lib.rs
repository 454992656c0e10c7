use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Editor text size preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl TextSize {
    /// Body text size relative to the platform default, in percent.
    pub fn scale(self) -> u16 {
        match self {
            TextSize::Small => 85,
            TextSize::Medium => 100,
            TextSize::Large => 125,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Root of the draft store.
    pub drafts_path: PathBuf,
    #[serde(default = "default_true")]
    pub syntax_highlighting: bool,
    #[serde(default)]
    pub text_size: TextSize,
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            drafts_path: Self::config_dir().join("drafts"),
            syntax_highlighting: true,
            text_size: TextSize::default(),
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        config.drafts_path = Self::expand_path(&config.drafts_path).unwrap_or(config.drafts_path);

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    /// Loads the config file, falling back to defaults when there is none.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        Ok(Self::load()?.unwrap_or_default())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to_path(Self::config_path())
    }

    pub fn config_dir() -> PathBuf {
        PathBuf::from(shellexpand::tilde("~/.config/wikitext-editor").as_ref())
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        shellexpand::full(&path_str)
            .ok()
            .map(|expanded| PathBuf::from(expanded.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn config_path_is_expanded() {
        let path_str = Config::config_path().to_string_lossy().into_owned();
        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/wikitext-editor/config.toml"));
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config: Config = toml::from_str(r#"drafts_path = "/srv/drafts""#).unwrap();
        assert_eq!(
            config,
            Config {
                drafts_path: PathBuf::from("/srv/drafts"),
                syntax_highlighting: true,
                text_size: TextSize::Medium,
            }
        );
    }

    #[test]
    fn text_size_is_lowercase_in_toml() {
        let config: Config = toml::from_str(
            r#"
drafts_path = "/d"
syntax_highlighting = false
text_size = "large"
"#,
        )
        .unwrap();
        assert!(!config.syntax_highlighting);
        assert_eq!(config.text_size, TextSize::Large);
        assert_eq!(config.text_size.scale(), 125);
    }

    #[test]
    fn unknown_text_size_is_a_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "drafts_path = \"/d\"\ntext_size = \"huge\"\n").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
    }

    #[test]
    fn expand_path_with_tilde() {
        let expanded = Config::expand_path(Path::new("~/wiki/drafts")).unwrap();
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().ends_with("wiki/drafts"));
    }

    #[test]
    fn expand_path_leaves_plain_paths() {
        for p in ["/absolute/path", "relative/path"] {
            assert_eq!(Config::expand_path(Path::new(p)), Some(PathBuf::from(p)));
        }
    }

    #[test]
    fn env_var_in_toml_is_expanded_on_load() {
        unsafe {
            env::set_var("WIKITEXT_DRAFTS_ROOT", "/custom/root");
        }
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "drafts_path = \"$WIKITEXT_DRAFTS_ROOT/drafts\"\n").unwrap();

        let config = Config::load_from_path(&config_file).unwrap().unwrap();
        assert_eq!(config.drafts_path, PathBuf::from("/custom/root/drafts"));

        unsafe {
            env::remove_var("WIKITEXT_DRAFTS_ROOT");
        }
    }

    #[test]
    fn load_missing_file_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let result = Config::load_from_path(temp_dir.path().join("nonexistent.toml")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn save_creates_parent_dirs_and_reloads() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested/dir/config.toml");
        let config = Config {
            drafts_path: PathBuf::from("/tmp/drafts"),
            syntax_highlighting: false,
            text_size: TextSize::Small,
        };

        config.save_to_path(&config_file).unwrap();
        let loaded = Config::load_from_path(&config_file).unwrap().unwrap();
        assert_eq!(loaded, config);
    }
}

use anyhow::{Context, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::warn;

use crate::core::config_schema::{ConfigSchema, ValidationHelpers};
use crate::core::dispatcher::DispatchOptions;
use crate::core::registry::{Category, DEFAULT_DISPLAY_LIMIT, DEFAULT_GRID_COLUMNS};

/// Configuration for unicode-palette
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Workspace file used by `insert` when none is given on the command line
    pub workspace_file: Option<PathBuf>,

    /// Logging configuration
    pub logging: Option<LoggingConfig>,

    /// Palette display settings, validated on access
    pub palette: Option<toml::Value>,

    /// Insertion dispatch settings
    pub dispatch: Option<DispatchOptions>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Enable verbose logging by default
    pub verbose: Option<bool>,

    /// Time format for log timestamps (uses time crate format syntax)
    pub time_format: Option<String>,
}

/// Palette display settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct PaletteConfig {
    #[schemars(description = "Category shown when none is requested, e.g. \"Greek Letters\"")]
    pub default_category: Option<String>,

    #[schemars(description = "Maximum number of symbols shown per category")]
    pub display_limit: Option<usize>,

    #[schemars(description = "Number of columns in the symbol grid")]
    pub columns: Option<usize>,
}

impl ConfigSchema for PaletteConfig {
    fn schema_name() -> &'static str {
        "palette"
    }

    fn validate(&self) -> Result<()> {
        if let Some(category) = &self.default_category {
            ValidationHelpers::validate_category_key(category)?;
        }
        if let Some(limit) = self.display_limit {
            ValidationHelpers::validate_positive("display_limit", limit)?;
        }
        if let Some(columns) = self.columns {
            ValidationHelpers::validate_positive("columns", columns)?;
        }
        Ok(())
    }
}

impl PaletteConfig {
    pub fn default_category(&self) -> Category {
        self.default_category
            .as_deref()
            .and_then(Category::from_key)
            .unwrap_or_default()
    }

    pub fn display_limit(&self) -> usize {
        self.display_limit.unwrap_or(DEFAULT_DISPLAY_LIMIT)
    }

    pub fn columns(&self) -> usize {
        self.columns.unwrap_or(DEFAULT_GRID_COLUMNS)
    }
}

impl Config {
    /// Load configuration from file
    pub async fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .await
            .context("Failed to read config file")?;

        let config: Config =
            toml::from_str(&content).context("Failed to parse config file as TOML")?;

        Ok(config)
    }

    /// Try to load configuration from standard locations
    pub async fn load() -> Result<Self> {
        for path in Self::get_config_paths() {
            if path.exists() {
                return Self::load_from_file(&path).await;
            }
        }

        Ok(Self::default())
    }

    /// Get potential configuration file paths in order of preference
    pub fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. Current directory
        paths.push(PathBuf::from("unicode-palette.toml"));
        paths.push(PathBuf::from(".unicode-palette.toml"));

        // 2. User config directory
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("unicode-palette").join("config.toml"));
            paths.push(config_dir.join("unicode-palette.toml"));
        }

        // 3. User home directory
        if let Some(home_dir) = dirs::home_dir() {
            paths.push(
                home_dir
                    .join(".config")
                    .join("unicode-palette")
                    .join("config.toml"),
            );
            paths.push(home_dir.join(".unicode-palette.toml"));
        }

        paths
    }

    /// Get the workspace file, using the configured value or default
    pub fn get_workspace_file(&self) -> PathBuf {
        let path = self
            .workspace_file
            .clone()
            .unwrap_or_else(|| PathBuf::from("./workspace.toml"));
        Self::expand_tilde(&path)
    }

    /// Expand tilde (~) to home directory if present
    fn expand_tilde(path: &Path) -> PathBuf {
        if let Some(path_str) = path.to_str() {
            if let Some(stripped) = path_str.strip_prefix("~/") {
                if let Some(home_dir) = dirs::home_dir() {
                    return home_dir.join(stripped);
                }
            } else if path_str == "~" {
                if let Some(home_dir) = dirs::home_dir() {
                    return home_dir;
                }
            }
        }
        path.to_path_buf()
    }

    /// Check if verbose logging is enabled by default
    pub fn is_verbose_default(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.verbose)
            .unwrap_or(false)
    }

    /// Get the time format for log timestamps
    pub fn get_time_format(&self) -> String {
        self.logging
            .as_ref()
            .and_then(|l| l.time_format.clone())
            .unwrap_or_else(|| "[year]-[month]-[day] [hour]:[minute]:[second]".to_string())
    }

    /// Get the palette settings, falling back to defaults if the section is invalid
    pub fn get_palette_config(&self) -> PaletteConfig {
        let Some(raw) = self.palette.as_ref() else {
            return PaletteConfig::default();
        };

        match PaletteConfig::from_toml_value(raw) {
            Ok(palette) => palette,
            Err(e) => {
                warn!(
                    "{}",
                    ValidationHelpers::format_validation_error(
                        "palette",
                        "default_category, display_limit, columns",
                        "default_category = \"Greek Letters\"",
                        &e,
                    )
                );
                PaletteConfig::default()
            }
        }
    }

    /// Get the dispatcher options
    pub fn get_dispatch_options(&self) -> DispatchOptions {
        self.dispatch.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.get_workspace_file(), PathBuf::from("./workspace.toml"));
        assert!(!config.is_verbose_default());
        assert_eq!(config.get_palette_config(), PaletteConfig::default());
        assert!(!config.get_dispatch_options().report_missing_text_buffer);
    }

    #[tokio::test]
    async fn test_config_load_from_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        let content = r#"
            workspace_file = "/tmp/workspace.toml"

            [logging]
            verbose = true
            time_format = "[hour]:[minute]:[second]"

            [palette]
            default_category = "Greek Letters"
            columns = 8

            [dispatch]
            report_missing_text_buffer = true
        "#;
        fs::write(&config_path, content).await?;

        let loaded = Config::load_from_file(&config_path).await?;

        assert_eq!(
            loaded.get_workspace_file(),
            PathBuf::from("/tmp/workspace.toml")
        );
        assert!(loaded.is_verbose_default());
        assert_eq!(loaded.get_time_format(), "[hour]:[minute]:[second]");
        assert!(loaded.get_dispatch_options().report_missing_text_buffer);

        let palette = loaded.get_palette_config();
        assert_eq!(palette.default_category(), Category::GreekLetters);
        assert_eq!(palette.columns(), 8);
        assert_eq!(palette.display_limit(), DEFAULT_DISPLAY_LIMIT);

        Ok(())
    }

    #[tokio::test]
    async fn test_config_paths() {
        let paths = Config::get_config_paths();
        assert!(!paths.is_empty());
        assert!(paths
            .iter()
            .any(|p| p.file_name().unwrap() == "unicode-palette.toml"));
    }

    #[tokio::test]
    async fn test_load_from_missing_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let result = Config::load_from_file(temp_dir.path().join("absent.toml")).await;
        assert!(result.is_err());
    }

    /// Test invalid palette settings
    /// Verifies an invalid [palette] section falls back to defaults instead of failing
    #[test]
    fn test_invalid_palette_falls_back_to_defaults() {
        let cases = [
            "default_category = \"greek letters\"",
            "display_limit = 0",
            "columns = 0",
            "columns = \"wide\"",
        ];

        for case in cases {
            let config = Config {
                palette: Some(toml::from_str(case).unwrap()),
                ..Config::default()
            };
            assert_eq!(
                config.get_palette_config(),
                PaletteConfig::default(),
                "case: {case}"
            );
        }
    }

    #[test]
    fn test_palette_defaults() {
        let palette = PaletteConfig::default();
        assert_eq!(palette.default_category(), Category::Symbols);
        assert_eq!(palette.display_limit(), 100);
        assert_eq!(palette.columns(), 5);
    }

    #[test]
    fn test_parse_full_config_toml() {
        let content = r#"
            workspace_file = "~/palette/workspace.toml"

            [logging]
            verbose = false

            [palette]
            default_category = "Card & Chess"
            display_limit = 12

            [dispatch]
            report_missing_text_buffer = true
        "#;
        let config: Config = toml::from_str(content).unwrap();

        let palette = config.get_palette_config();
        assert_eq!(palette.default_category(), Category::CardAndChess);
        assert_eq!(palette.display_limit(), 12);
        assert_eq!(palette.columns(), DEFAULT_GRID_COLUMNS);
        assert!(config.get_dispatch_options().report_missing_text_buffer);

        if let Some(home) = dirs::home_dir() {
            assert_eq!(
                config.get_workspace_file(),
                home.join("palette").join("workspace.toml")
            );
        }
    }

    #[test]
    fn test_palette_schema_mentions_fields() {
        let schema = PaletteConfig::schema_json().unwrap();
        assert!(schema.contains("default_category"));
        assert!(schema.contains("display_limit"));
        assert!(schema.contains("columns"));
    }
}

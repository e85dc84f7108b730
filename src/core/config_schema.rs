use crate::core::registry::Category;
use crate::symbols::*;
use anyhow::{Context, Result};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;

/// Trait for configuration sections that are validated after parsing
pub trait ConfigSchema: DeserializeOwned + JsonSchema {
    /// The name of this configuration schema (for error reporting)
    fn schema_name() -> &'static str;

    /// Validate the configuration and provide detailed error messages
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Parse and validate configuration from TOML value
    fn from_toml_value(value: &toml::Value) -> Result<Self> {
        let config: Self = value.clone().try_into().with_context(|| {
            format!(
                "Failed to parse {} configuration",
                <Self as ConfigSchema>::schema_name()
            )
        })?;

        config.validate().with_context(|| {
            format!(
                "Invalid {} configuration",
                <Self as ConfigSchema>::schema_name()
            )
        })?;

        Ok(config)
    }

    /// JSON schema of this section, pretty printed
    fn schema_json() -> Result<String> {
        let schema = schemars::schema_for!(Self);
        serde_json::to_string_pretty(&schema).context("Failed to render JSON schema")
    }
}

/// Helper functions for common validation patterns
pub struct ValidationHelpers;

impl ValidationHelpers {
    /// Validate that a numeric setting is greater than zero
    pub fn validate_positive(field: &str, value: usize) -> Result<()> {
        if value == 0 {
            return Err(anyhow::anyhow!("'{field}' must be greater than zero"));
        }
        Ok(())
    }

    /// Validate that a category key names one of the built-in categories
    pub fn validate_category_key(key: &str) -> Result<()> {
        if Category::from_key(key).is_none() {
            let known: Vec<&str> = Category::ALL.iter().map(|c| c.key()).collect();
            return Err(anyhow::anyhow!(
                "Unknown category '{}'. Known categories: {}",
                key,
                known.join(", ")
            ));
        }
        Ok(())
    }

    /// Format a validation error message for a config section
    pub fn format_validation_error(
        section_key: &str,
        valid_fields: &str,
        example: &str,
        error: &anyhow::Error,
    ) -> String {
        // Extract the most specific error from the chain
        let root_error = error
            .chain()
            .last()
            .map(|e| e.to_string())
            .unwrap_or_else(|| error.to_string());

        format!(
            "{SYMBOL_INDICATOR_WARNING} Configuration validation failed for [{section_key}]\n\
             Error: {root_error}\n\
             Valid fields: {valid_fields}\n\
             Example: {example}\n\
             Note: continuing with default settings"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Deserialize, Serialize, JsonSchema)]
    struct TestConfig {
        #[schemars(description = "Category shown first")]
        category: Option<String>,

        #[schemars(description = "Column count")]
        columns: Option<usize>,
    }

    impl ConfigSchema for TestConfig {
        fn schema_name() -> &'static str {
            "TestConfig"
        }

        fn validate(&self) -> Result<()> {
            if let Some(category) = &self.category {
                ValidationHelpers::validate_category_key(category)?;
            }
            if let Some(columns) = self.columns {
                ValidationHelpers::validate_positive("columns", columns)?;
            }
            Ok(())
        }
    }

    #[test]
    fn test_from_toml_value_valid() {
        let value: toml::Value = toml::from_str("category = \"Currency\"\ncolumns = 8").unwrap();
        let config = TestConfig::from_toml_value(&value).unwrap();
        assert_eq!(config.category.as_deref(), Some("Currency"));
        assert_eq!(config.columns, Some(8));
    }

    #[test]
    fn test_from_toml_value_rejects_unknown_category() {
        let value: toml::Value = toml::from_str("category = \"currency\"").unwrap();
        let error = TestConfig::from_toml_value(&value).unwrap_err();
        assert!(error.to_string().contains("Invalid TestConfig configuration"));
        assert!(error.root_cause().to_string().contains("Unknown category"));
    }

    #[test]
    fn test_from_toml_value_rejects_wrong_type() {
        let value: toml::Value = toml::from_str("columns = \"five\"").unwrap();
        let error = TestConfig::from_toml_value(&value).unwrap_err();
        assert!(error.to_string().contains("Failed to parse TestConfig"));
    }

    #[test]
    fn test_validate_positive() {
        assert!(ValidationHelpers::validate_positive("columns", 1).is_ok());
        assert!(ValidationHelpers::validate_positive("columns", 0).is_err());
    }

    #[test]
    fn test_format_validation_error() {
        let error = anyhow::anyhow!("'columns' must be greater than zero")
            .context("Invalid palette configuration");
        let message = ValidationHelpers::format_validation_error(
            "palette",
            "default_category, display_limit, columns",
            "columns = 5",
            &error,
        );
        assert!(message.contains("[palette]"));
        assert!(message.contains("'columns' must be greater than zero"));
        assert!(message.contains("columns = 5"));
    }

    #[test]
    fn test_schema_json_lists_fields() {
        let schema = TestConfig::schema_json().unwrap();
        assert!(schema.contains("\"category\""));
        assert!(schema.contains("Column count"));
    }
}

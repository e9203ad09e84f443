//! TOML configuration for loading and reshaping
//!
//! Every field has a default, so an empty document is a valid configuration.
//!
//! ```toml
//! [csv]
//! has_header = true
//! delimiter = ","
//! null_values = ["NA", "null"]
//!
//! [melt]
//! var_name = "variable"
//! value_name = "value"
//! coercion = "widen"     # or "strict"
//!
//! [pivot]
//! conflict = "first"     # "last" or "fail"
//!
//! [parallel]
//! row_threshold = 50000
//! ```

use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::dataframe::{MeltOptions, ValueCoercion, PARALLEL_THRESHOLD};
use crate::error::{Error, Result};
use crate::io::CsvReadOptions;
use crate::pivot::ConflictPolicy;

/// Output column names and type policy for melt
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MeltConfig {
    pub var_name: String,
    pub value_name: String,
    pub coercion: ValueCoercion,
}

impl Default for MeltConfig {
    fn default() -> Self {
        let defaults = MeltOptions::default();
        Self {
            var_name: defaults.var_name,
            value_name: defaults.value_name,
            coercion: defaults.coercion,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PivotConfig {
    pub conflict: ConflictPolicy,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParallelConfig {
    /// Row count from which partitioning runs on the rayon pool
    pub row_threshold: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            row_threshold: PARALLEL_THRESHOLD,
        }
    }
}

/// Complete configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReshapeConfig {
    pub csv: CsvReadOptions,
    pub melt: MeltConfig,
    pub pivot: PivotConfig,
    pub parallel: ParallelConfig,
}

impl ReshapeConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: ReshapeConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        debug!("loading configuration from {}", path.display());
        Self::from_toml_str(&content)
    }

    fn validate(&self) -> Result<()> {
        if !self.csv.delimiter.is_ascii() {
            return Err(Error::Config(format!(
                "csv.delimiter must be an ASCII character, got {:?}",
                self.csv.delimiter
            )));
        }
        if self.melt.var_name == self.melt.value_name {
            return Err(Error::Config(format!(
                "melt.var_name and melt.value_name are both {:?}",
                self.melt.var_name
            )));
        }
        Ok(())
    }

    /// Melt options with the configured names and coercion
    pub fn melt_options<S: AsRef<str>>(&self, id_vars: &[S]) -> MeltOptions {
        MeltOptions {
            var_name: self.melt.var_name.clone(),
            value_name: self.melt.value_name.clone(),
            coercion: self.melt.coercion,
            ..MeltOptions::new(id_vars)
        }
    }

    pub fn csv_options(&self) -> CsvReadOptions {
        self.csv.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_gives_defaults() {
        let config = ReshapeConfig::from_toml_str("").unwrap();
        assert_eq!(config, ReshapeConfig::default());
        assert_eq!(config.parallel.row_threshold, PARALLEL_THRESHOLD);
        assert_eq!(config.pivot.conflict, ConflictPolicy::First);
        assert_eq!(config.melt.coercion, ValueCoercion::Widen);
    }

    #[test]
    fn test_partial_sections() {
        let config = ReshapeConfig::from_toml_str(
            r#"
            [melt]
            value_name = "reading"
            coercion = "strict"

            [pivot]
            conflict = "fail"
            "#,
        )
        .unwrap();

        assert_eq!(config.melt.var_name, "variable");
        assert_eq!(config.melt.value_name, "reading");
        assert_eq!(config.pivot.conflict, ConflictPolicy::Fail);

        let options = config.melt_options(&["id"]);
        assert_eq!(options.id_vars, vec!["id".to_string()]);
        assert_eq!(options.value_name, "reading");
        assert_eq!(options.coercion, ValueCoercion::Strict);
        assert!(options.value_vars.is_none());
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            ReshapeConfig::from_toml_str("[pivot]\nconflict = \"random\"\n"),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            ReshapeConfig::from_toml_str("[melt]\nvar_name = \"v\"\nvalue_name = \"v\"\n"),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            ReshapeConfig::from_toml_str("[unknown]\n"),
            Err(Error::Config(_))
        ));
    }
}

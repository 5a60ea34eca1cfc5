//! Ingredient table files.
//!
//! Extra ingredients can be supplied as YAML or JSON:
//!
//! ```yaml
//! ingredients:
//!   - name: honey
//!     aliases: [honey, "clover honey"]
//!     density_kg_per_l: 1.42
//!   - name: saffron
//! ```

use std::path::Path;

use cb_core::{CoreError, ensure_positive};
use serde::Deserialize;

use crate::{IngredientError, IngredientResult};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct IngredientTable {
    #[serde(default)]
    pub ingredients: Vec<IngredientEntry>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IngredientEntry {
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub density_kg_per_l: Option<f64>,
}

impl IngredientTable {
    pub fn from_yaml_str(content: &str) -> IngredientResult<Self> {
        let table: Self = serde_yaml::from_str(content)?;
        table.validate()?;
        Ok(table)
    }

    pub fn from_json_str(content: &str) -> IngredientResult<Self> {
        let table: Self = serde_json::from_str(content)?;
        table.validate()?;
        Ok(table)
    }

    /// Load by extension: `.yaml`/`.yml` or `.json`.
    pub fn load(path: &Path) -> IngredientResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        let content = match extension.as_deref() {
            Some("yaml" | "yml" | "json") => std::fs::read_to_string(path)?,
            _ => {
                return Err(IngredientError::UnsupportedFormat {
                    path: path.display().to_string(),
                });
            }
        };
        let table = if extension.as_deref() == Some("json") {
            Self::from_json_str(&content)?
        } else {
            Self::from_yaml_str(&content)?
        };
        tracing::debug!(
            path = %path.display(),
            count = table.ingredients.len(),
            "loaded ingredient table"
        );
        Ok(table)
    }

    /// Names and aliases must be non-blank; densities finite and positive.
    pub fn validate(&self) -> IngredientResult<()> {
        for entry in &self.ingredients {
            if entry.name.trim().is_empty() {
                return Err(IngredientError::Core(CoreError::InvalidArg {
                    what: "ingredient name must not be blank",
                }));
            }
            if entry.aliases.iter().any(|alias| alias.trim().is_empty()) {
                return Err(IngredientError::Core(CoreError::InvalidArg {
                    what: "ingredient alias must not be blank",
                }));
            }
            if let Some(value) = entry.density_kg_per_l {
                ensure_positive(value, "density").map_err(|_| IngredientError::InvalidDensity {
                    ingredient: entry.name.clone(),
                    value,
                })?;
            }
        }
        Ok(())
    }
}

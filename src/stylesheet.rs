//! Stylesheet files for declared property values and custom defaults
//!
//! A stylesheet is a TOML file with an optional `[metadata]` table, an
//! optional `[defaults]` table overriding the fallback values, and an
//! optional `[properties]` table of declared custom property values.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::properties::{ConfigResolver, PropertyDefaults, StylePropertyMap};

/// Errors that can occur when loading or parsing stylesheets
#[derive(Error, Debug)]
pub enum StylesheetError {
    #[error("Failed to read stylesheet file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse stylesheet TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Declared values plus fallback defaults
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stylesheet {
    /// Optional name for the stylesheet
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Fallback values for missing properties
    pub defaults: PropertyDefaults,
    /// Declared values: property name -> value
    pub properties: HashMap<String, String>,
}

/// TOML structure for deserializing stylesheets
#[derive(Deserialize)]
struct TomlStylesheet {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    defaults: PropertyDefaults,
    #[serde(default)]
    properties: HashMap<String, TomlValue>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

/// Property values may be written as TOML numbers or strings
#[derive(Deserialize)]
#[serde(untagged)]
enum TomlValue {
    Integer(i64),
    Float(f64),
    String(String),
}

impl TomlValue {
    fn into_token(self) -> String {
        match self {
            TomlValue::Integer(i) => i.to_string(),
            TomlValue::Float(f) => f.to_string(),
            TomlValue::String(s) => s,
        }
    }
}

impl Stylesheet {
    /// Load stylesheet from TOML file
    pub fn from_file(path: &Path) -> Result<Self, StylesheetError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load stylesheet from TOML string
    pub fn from_str(content: &str) -> Result<Self, StylesheetError> {
        let parsed: TomlStylesheet = toml::from_str(content)?;

        Ok(Stylesheet {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            defaults: parsed.defaults,
            properties: parsed
                .properties
                .into_iter()
                .map(|(k, v)| (k, v.into_token()))
                .collect(),
        })
    }

    /// The declared values as a property source
    pub fn property_map(&self) -> StylePropertyMap {
        self.properties
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }

    /// A resolver using this stylesheet's defaults
    pub fn resolver(&self) -> ConfigResolver {
        ConfigResolver::with_defaults(self.defaults.clone())
    }
}

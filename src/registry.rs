//! Registry of named paint providers
//!
//! Plays the part of a host's paint registration facility: providers are
//! installed under a name and later invoked by that name.

use std::collections::HashMap;
use std::sync::Arc;

use log::debug;
use thiserror::Error;

use crate::geometry::Geometry;
use crate::painter::{PaintProvider, SmoothCornersPainter};
use crate::properties::PropertySource;
use crate::renderer::DrawingSurface;

/// Errors that can occur during registry operations
#[derive(Debug, Error, PartialEq)]
pub enum RegistryError {
    /// No provider registered under the name
    #[error("paint provider not found: {name}")]
    NotFound { name: String },

    /// A provider is already registered under the name
    #[error("duplicate paint provider: {name}")]
    Duplicate { name: String },
}

/// Name → provider table
#[derive(Default, Clone)]
pub struct PaintRegistry {
    providers: HashMap<String, Arc<dyn PaintProvider>>,
}

impl std::fmt::Debug for PaintRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaintRegistry")
            .field("providers", &self.providers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl PaintRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider under `name`
    pub fn register(
        &mut self,
        name: impl Into<String>,
        provider: impl PaintProvider + 'static,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        if self.providers.contains_key(&name) {
            return Err(RegistryError::Duplicate { name });
        }
        debug!("registering paint provider '{}'", name);
        self.providers.insert(name, Arc::new(provider));
        Ok(())
    }

    /// Get a provider by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn PaintProvider>> {
        self.providers.get(name).cloned()
    }

    /// Check if a provider exists
    pub fn contains(&self, name: &str) -> bool {
        self.providers.contains_key(name)
    }

    /// Get all provider names
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.providers.keys().map(|s| s.as_str())
    }

    /// Invoke the provider registered under `name`
    pub fn paint(
        &self,
        name: &str,
        surface: &mut dyn DrawingSurface,
        geometry: Geometry,
        properties: &dyn PropertySource,
    ) -> Result<(), RegistryError> {
        let provider = self
            .providers
            .get(name)
            .ok_or_else(|| RegistryError::NotFound {
                name: name.to_string(),
            })?;
        provider.paint(surface, geometry, properties);
        Ok(())
    }
}

/// Install the smooth-corners painter if a registry is available
///
/// Returns `Ok(false)` without doing anything when there is no registry.
pub fn register_smooth_corners(registry: Option<&mut PaintRegistry>) -> Result<bool, RegistryError> {
    match registry {
        Some(registry) => {
            registry.register(SmoothCornersPainter::NAME, SmoothCornersPainter::new())?;
            Ok(true)
        }
        None => {
            debug!("no paint registry available, skipping registration");
            Ok(false)
        }
    }
}

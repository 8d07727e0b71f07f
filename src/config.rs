//! Configuration management for content-typegen
//!
//! Supports loading configuration from:
//! - Default values
//! - Config file (typegen.toml)
//! - Environment variables (TYPEGEN__*)
//!
//! ## Example config file (typegen.toml):
//! ```toml
//! [schema]
//! path = ".contentlayer/schema.json"
//!
//! [output]
//! path = ".contentlayer/generated/types.d.ts"
//!
//! [generation]
//! source_plugin_type = "local"
//!
//! [generation.field_options]
//! type_field_name = "type"
//!
//! [[generation.document_type_labels]]
//! name = "Page"
//! label = "Landing page"
//! ```

use config_crate::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::codegen::GenerationOptions;
use crate::error::Result;

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TypegenConfig {
    /// Schema snapshot settings
    #[serde(default)]
    pub schema: SchemaSourceConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Options passed to the renderer
    #[serde(default)]
    pub generation: GenerationOptions,
}

/// Where the schema snapshot is read from
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaSourceConfig {
    /// Default schema JSON path when none is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Where the declarations module is written
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Path of the generated declarations file
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
}

fn default_output_path() -> PathBuf {
    PathBuf::from(".contentlayer/generated/types.d.ts")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

impl TypegenConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration, layering an explicit file over the default locations
    pub fn load_from(config_path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_locations = ["typegen.toml", ".typegen.toml", "config/typegen.toml"];

        for location in config_locations {
            builder = builder.add_source(File::with_name(location).required(false));
        }

        if let Some(config_dir) = directories::ProjectDirs::from("dev", "contentlayer", "typegen") {
            let xdg_config = config_dir.config_dir().join("typegen.toml");
            if xdg_config.exists() {
                builder = builder.add_source(File::from(xdg_config).required(false));
            }
        }

        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("TYPEGEN")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, content)
    }
}

//! Runtime settings.
//!
//! Layered lowest to highest: built-in defaults, an optional config file,
//! `VECBATCH_*` environment variables, then command-line overrides.

use std::path::Path;

use anyhow::{bail, Context, Result};
use ::config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::vectorizer::VectorizerKind;
use crate::{DEFAULT_MAX_FEATURES, DEFAULT_MAX_FILE_SIZE, ENV_PREFIX};

/// Settings for one batch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Byte ceiling for reading a single file
    pub max_file_size: usize,

    /// Maximum number of TF-IDF features per vector
    pub max_features: usize,

    /// Vectorizer used for every file in the batch
    pub vectorizer: VectorizerKind,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            max_features: DEFAULT_MAX_FEATURES,
            vectorizer: VectorizerKind::Tfidf,
        }
    }
}

impl Settings {
    /// Load settings from an optional file and the process environment.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        Self::load_from(config_file, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_from(config_file: Option<&Path>, env: Environment) -> Result<Self> {
        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default("max_file_size", defaults.max_file_size as u64)?
            .set_default("max_features", defaults.max_features as u64)?
            .set_default("vectorizer", defaults.vectorizer.as_str())?;

        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path).required(true));
        }

        let settings: Settings = builder
            .add_source(env.try_parsing(true))
            .build()
            .context("failed to load configuration")?
            .try_deserialize()
            .context("invalid configuration")?;

        settings.validate()?;
        Ok(settings)
    }

    /// Apply command-line overrides on top of loaded values.
    pub fn with_overrides(
        mut self,
        max_file_size: Option<usize>,
        max_features: Option<usize>,
        vectorizer: Option<VectorizerKind>,
    ) -> Result<Self> {
        if let Some(size) = max_file_size {
            self.max_file_size = size;
        }
        if let Some(features) = max_features {
            self.max_features = features;
        }
        if let Some(kind) = vectorizer {
            self.vectorizer = kind;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_file_size == 0 {
            bail!("max_file_size must be greater than zero");
        }
        if self.max_features == 0 {
            bail!("max_features must be greater than zero");
        }
        Ok(())
    }
}

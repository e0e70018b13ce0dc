use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use config::Config as ConfigBuilder;
use config::Environment;
use config::File;
use config::FileFormat;
use serde::Deserialize;
use thiserror::Error;

use crate::jwt::Hs256Signer;
use crate::jwt::Rs256Signer;
use crate::jwt::Signer;
use crate::jwt::TokenError;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Failed to read key file {path}: {source}")]
    KeyFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Key(#[from] TokenError),
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub signer: SignerConfig,
}

/// Token signing configuration, selected by `algorithm`.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(tag = "algorithm", rename_all = "lowercase")]
pub enum SignerConfig {
    Hs256 {
        secret: String,
    },
    Rs256 {
        private_key_path: PathBuf,
        public_key_path: PathBuf,
    },
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (SIGNER__ALGORITHM, SIGNER__SECRET, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: SIGNER__SECRET=... overrides signer.secret
            .add_source(Environment::default().separator("__"))
            .build()?;

        Ok(configuration.try_deserialize()?)
    }

    /// Parse configuration from an embedded TOML document.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let configuration = ConfigBuilder::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;

        Ok(configuration.try_deserialize()?)
    }
}

impl SignerConfig {
    /// Build the configured signer, reading key files once.
    ///
    /// # Errors
    /// * `KeyFile` - A key file could not be read
    /// * `Key` - Key material could not be parsed
    pub fn build(&self) -> Result<Signer, ConfigError> {
        match self {
            SignerConfig::Hs256 { secret } => {
                tracing::info!(algorithm = "HS256", "Token signer configured");
                Ok(Hs256Signer::new(secret.as_bytes()).into())
            }
            SignerConfig::Rs256 {
                private_key_path,
                public_key_path,
            } => {
                let private_key = read_key(private_key_path)?;
                let public_key = read_key(public_key_path)?;
                let signer = Rs256Signer::from_pem(&private_key, &public_key)?;

                tracing::info!(
                    algorithm = "RS256",
                    private_key = %private_key_path.display(),
                    public_key = %public_key_path.display(),
                    "Token signer configured"
                );
                Ok(signer.into())
            }
        }
    }
}

fn read_key(path: &Path) -> Result<Vec<u8>, ConfigError> {
    fs::read(path).map_err(|source| ConfigError::KeyFile {
        path: path.to_path_buf(),
        source,
    })
}

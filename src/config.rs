//! The config module captures all environment-sourced backend configuration
//! in one explicit struct, read once at process start.

use std::env;

use crate::constants::{
    AZURE_API_KEY_ENV, AZURE_API_VERSION_ENV, AZURE_DEPLOYMENT_ENV, AZURE_ENDPOINT_ENV,
    DEFAULT_LLAMA_ENDPOINT, DEFAULT_LLAMA_MODEL, LLAMA_ENDPOINT_ENV, LLAMA_MODEL_ENV,
};
use crate::error::{Error, Result};

/// Backend configuration as found in the process environment.
///
/// Every field is optional at this stage; validation happens when a concrete
/// backend is selected, so a run against the local backend never complains
/// about missing cloud credentials.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub azure_deployment: Option<String>,
    pub azure_api_version: Option<String>,
    pub azure_endpoint: Option<String>,
    pub azure_api_key: Option<String>,
    pub llama_endpoint: Option<String>,
    pub llama_model: Option<String>,
}

/// Validated configuration for the Azure OpenAI backend.
#[derive(Debug, Clone)]
pub struct AzureConfig {
    pub deployment: String,
    pub api_version: String,
    pub endpoint: String,
    pub api_key: String,
}

/// Configuration for the local model backend, with defaults applied.
#[derive(Debug, Clone)]
pub struct OllamaConfig {
    pub endpoint: String,
    pub model: String,
}

impl AppConfig {
    /// Reads all recognized variables from the process environment.
    pub fn from_env() -> Self {
        Self {
            azure_deployment: env::var(AZURE_DEPLOYMENT_ENV).ok(),
            azure_api_version: env::var(AZURE_API_VERSION_ENV).ok(),
            azure_endpoint: env::var(AZURE_ENDPOINT_ENV).ok(),
            azure_api_key: env::var(AZURE_API_KEY_ENV).ok(),
            llama_endpoint: env::var(LLAMA_ENDPOINT_ENV).ok(),
            llama_model: env::var(LLAMA_MODEL_ENV).ok(),
        }
    }

    /// Resolves the cloud backend configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] naming every missing variable if any of the
    /// four required Azure values is absent.
    pub fn azure(&self) -> Result<AzureConfig> {
        let mut missing = Vec::new();

        let deployment = required(&self.azure_deployment, AZURE_DEPLOYMENT_ENV, &mut missing);
        let api_version = required(&self.azure_api_version, AZURE_API_VERSION_ENV, &mut missing);
        let endpoint = required(&self.azure_endpoint, AZURE_ENDPOINT_ENV, &mut missing);
        let api_key = required(&self.azure_api_key, AZURE_API_KEY_ENV, &mut missing);

        if !missing.is_empty() {
            return Err(Error::Config(format!(
                "environment variables not set: {}",
                missing.join(", ")
            )));
        }

        Ok(AzureConfig {
            deployment,
            api_version,
            endpoint,
            api_key,
        })
    }

    /// Resolves the local backend configuration, applying defaults for
    /// anything not set.
    pub fn ollama(&self) -> OllamaConfig {
        OllamaConfig {
            endpoint: self
                .llama_endpoint
                .clone()
                .unwrap_or_else(|| DEFAULT_LLAMA_ENDPOINT.to_string()),
            model: self
                .llama_model
                .clone()
                .unwrap_or_else(|| DEFAULT_LLAMA_MODEL.to_string()),
        }
    }
}

fn required(value: &Option<String>, name: &'static str, missing: &mut Vec<&'static str>) -> String {
    match value {
        Some(value) => value.clone(),
        None => {
            missing.push(name);
            String::new()
        }
    }
}

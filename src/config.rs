use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use crate::services::ContentTypeMode;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub inference: InferenceSettings,
    #[serde(default)]
    pub upload: UploadSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub cors: CorsSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 4000 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InferenceSettings {
    /// Address of the ML service; unset means `/analyze` reports a configuration error
    pub url: Option<String>,
    #[serde(default)]
    pub content_type: ContentTypeMode,
}

impl InferenceSettings {
    /// Configured endpoint, ignoring blank values
    pub fn endpoint(&self) -> Option<&str> {
        self.url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadSettings {
    #[serde(default = "default_max_upload_bytes")]
    pub max_bytes: usize,
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self { max_bytes: default_max_upload_bytes() }
    }
}

fn default_max_upload_bytes() -> usize { 10 * 1024 * 1024 }

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSettings {
    /// JSON product file; the built-in catalog is used when unset
    pub path: Option<String>,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            path: None,
            max_results: default_max_results(),
        }
    }
}

fn default_max_results() -> usize { 10 }

#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

impl Default for CorsSettings {
    fn default() -> Self {
        Self { allowed_origins: default_allowed_origins() }
    }
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:5173".to_string()]
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables prefixed with SKINCARE__
    /// 5. ML_SERVICE_URL, PORT and CORS_ORIGINS
    pub fn load() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., SKINCARE__INFERENCE__URL -> inference.url
            .add_source(
                Environment::with_prefix("SKINCARE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        let builder = apply_conventional_env(builder, |key| std::env::var(key).ok())?;

        builder.build()?.try_deserialize()
    }
}

/// Apply the unprefixed variables a hosting platform usually sets
fn apply_conventional_env<F>(
    mut builder: ConfigBuilder<DefaultState>,
    lookup: F,
) -> Result<ConfigBuilder<DefaultState>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup("ML_SERVICE_URL") {
        builder = builder.set_override("inference.url", url)?;
    }

    if let Some(port) = lookup("PORT") {
        builder = builder.set_override("server.port", port)?;
    }

    if let Some(origins) = lookup("CORS_ORIGINS") {
        builder = builder.set_override("cors.allowed_origins", parse_origins(&origins))?;
    }

    Ok(builder)
}

/// Split a comma-separated origin list
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

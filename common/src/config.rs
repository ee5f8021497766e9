use serde::Deserialize;

fn default_api_version() -> String {
    "2024-01".to_string()
}

fn default_cors_allow_origin() -> String {
    "*".to_string()
}

fn default_cors_allow_headers() -> String {
    "authorization, x-client-info, apikey, content-type".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Admin API version segment used in every upstream endpoint.
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default = "default_cors_allow_origin")]
    pub cors_allow_origin: String,
    #[serde(default = "default_cors_allow_headers")]
    pub cors_allow_headers: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_version: default_api_version(),
            cors_allow_origin: default_cors_allow_origin(),
            cors_allow_headers: default_cors_allow_headers(),
        }
    }
}

impl AppConfig {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Ok(toml::from_str(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }
}

use std::time::Duration;

use serde::{Deserialize, Serialize};

const DEFAULT_BACKEND_URL: &str = "http://localhost:3001";
const DEFAULT_PROJECT_ID: &str = "default-project";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppProfile {
    Dev,
    Prod,
}

impl AppProfile {
    pub fn from_env(value: Option<String>) -> Self {
        match value.as_deref() {
            Some("prod") | Some("production") => Self::Prod,
            _ => Self::Dev,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url: String,
    pub default_project_id: String,
    pub profile: AppProfile,
    pub request_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            default_project_id: DEFAULT_PROJECT_ID.to_string(),
            profile: AppProfile::Dev,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        crate::config::load_dotenv();

        let mut config = Self::default();

        if let Some(url) = read_env("GOVCONSOLE_BACKEND_URL") {
            config.backend_url = url;
        }

        if let Some(project_id) = read_env("GOVCONSOLE_PROJECT_ID") {
            config.default_project_id = project_id;
        }

        let profile_raw = read_env("GOVCONSOLE_PROFILE");
        config.profile = AppProfile::from_env(profile_raw);

        if let Some(secs) =
            read_env("GOVCONSOLE_REQUEST_TIMEOUT_SECS").and_then(|value| value.parse::<u64>().ok())
        {
            config.request_timeout = Duration::from_secs(secs.max(1));
        }

        config
    }
}

fn read_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .or_else(|| option_env_from_build(key).map(|s| s.to_string()))
}

fn option_env_from_build(key: &str) -> Option<&'static str> {
    match key {
        "GOVCONSOLE_BACKEND_URL" => option_env!("GOVCONSOLE_BACKEND_URL"),
        "GOVCONSOLE_PROJECT_ID" => option_env!("GOVCONSOLE_PROJECT_ID"),
        "GOVCONSOLE_PROFILE" => option_env!("GOVCONSOLE_PROFILE"),
        "GOVCONSOLE_REQUEST_TIMEOUT_SECS" => option_env!("GOVCONSOLE_REQUEST_TIMEOUT_SECS"),
        _ => None,
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_dotenv() {
    if let Err(err) = dotenvy::dotenv() {
        if !matches!(err, dotenvy::Error::Io(ref io_err) if io_err.kind() == std::io::ErrorKind::NotFound)
        {
            tracing::warn!("failed to load .env: {err}");
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[inline]
pub fn load_dotenv() {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_parsing_defaults_to_dev() {
        assert_eq!(AppProfile::from_env(None), AppProfile::Dev);
        assert_eq!(
            AppProfile::from_env(Some("staging".to_string())),
            AppProfile::Dev
        );
        assert_eq!(
            AppProfile::from_env(Some("prod".to_string())),
            AppProfile::Prod
        );
        assert_eq!(
            AppProfile::from_env(Some("production".to_string())),
            AppProfile::Prod
        );
    }

    #[test]
    fn defaults_cover_every_field() {
        let config = AppConfig::default();
        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
        assert_eq!(config.default_project_id, DEFAULT_PROJECT_ID);
        assert_eq!(
            config.request_timeout,
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)
        );
    }
}

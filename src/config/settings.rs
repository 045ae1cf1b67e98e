use crate::domain::ports::SettingsProvider;
use crate::utils::error::{ParkonError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;
use std::sync::LazyLock;

pub const DEFAULT_SERVICE_URL: &str = "https://app.parkon.ch/api/";

static ENV_VAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

pub fn default_user_agent() -> String {
    format!("parkon-client/{}", env!("CARGO_PKG_VERSION"))
}

/// Layout of the optional settings file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsFile {
    pub service: Option<ServiceSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceSection {
    pub url: Option<String>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    service_url: String,
    user_agent: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            service_url: DEFAULT_SERVICE_URL.to_string(),
            user_agent: default_user_agent(),
        }
    }
}

impl ClientSettings {
    pub fn new(service_url: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self {
            service_url: normalize_base_url(service_url.into()),
            user_agent: user_agent.into(),
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ParkonError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses a settings file. Missing keys keep their defaults and
    /// `${VAR}` references are expanded from the environment.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = substitute_env_vars(content);
        let file: SettingsFile = toml::from_str(&processed)?;
        let service = file.service.unwrap_or_default();
        let defaults = Self::default();

        Ok(Self::new(
            service.url.unwrap_or(defaults.service_url),
            service.user_agent.unwrap_or(defaults.user_agent),
        ))
    }

    pub fn with_service_url(self, service_url: Option<String>) -> Self {
        match service_url {
            Some(url) => Self::new(url, self.user_agent),
            None => self,
        }
    }
}

impl SettingsProvider for ClientSettings {
    fn service_url(&self) -> &str {
        &self.service_url
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl Validate for ClientSettings {
    fn validate(&self) -> Result<()> {
        validate_url("service_url", &self.service_url)?;
        validate_non_empty_string("user_agent", &self.user_agent)
    }
}

fn normalize_base_url(mut url: String) -> String {
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}

fn substitute_env_vars(content: &str) -> String {
    ENV_VAR
        .replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
}

use std::collections::HashMap;

use crate::error::StartupError;

/// Key-value source of process configuration (`host`, `port`, `nodeUrl`,
/// `privateKey`, `accountAddress`, ...).
pub trait ConfigProvider: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn require(&self, key: &str) -> Result<String, StartupError> {
        self.get(key)
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| StartupError::MissingKey(key.to_string()))
    }

    fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }
}

/// Reads configuration from the process environment, after loading a `.env`
/// file if one is present. `nodeUrl` is looked up as `NODE_URL`.
#[derive(Debug, Clone, Default)]
pub struct EnvConfigProvider;

impl EnvConfigProvider {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self
    }

    pub fn env_var_name(key: &str) -> String {
        let mut name = String::with_capacity(key.len() + 4);
        for (i, c) in key.chars().enumerate() {
            if c.is_ascii_uppercase() && i > 0 {
                name.push('_');
            }
            name.push(c.to_ascii_uppercase());
        }
        name
    }
}

impl ConfigProvider for EnvConfigProvider {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(Self::env_var_name(key)).ok()
    }
}

/// In-memory provider, used when configuration comes from an embedding
/// program rather than the environment.
#[derive(Debug, Clone, Default)]
pub struct MapConfigProvider {
    values: HashMap<String, String>,
}

impl MapConfigProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl ConfigProvider for MapConfigProvider {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use crate::storage::{FileStore, KeyValueStore, MemoryStore, StorageError};

pub const DEFAULT_WHATSAPP_NUMBER: &str = "21698297835";
pub const DEFAULT_WHATSAPP_URL: &str = "https://wa.me";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("WhatsApp number must be digits only, got {0:?}")]
    InvalidWhatsAppNumber(String),

    #[error("Environment variable {0} is not valid unicode")]
    NotUnicode(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Recipient of order messages, international format without `+`.
    pub whatsapp_number: String,
    pub whatsapp_base_url: String,
    /// Directory for the file store. In-memory storage when unset.
    pub storage_dir: Option<PathBuf>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            whatsapp_number: DEFAULT_WHATSAPP_NUMBER.to_string(),
            whatsapp_base_url: DEFAULT_WHATSAPP_URL.to_string(),
            storage_dir: None,
        }
    }
}

impl StorefrontConfig {
    /// Defaults overridden by `.env` and the process environment
    /// (`LMCYCLE_WHATSAPP_NUMBER`, `LMCYCLE_WHATSAPP_URL`, `LMCYCLE_STORAGE_DIR`).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key))
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Result<String, std::env::VarError>,
    {
        let var = |key: &'static str| match lookup(key) {
            Ok(value) if !value.trim().is_empty() => Ok(Some(value.trim().to_string())),
            Ok(_) | Err(std::env::VarError::NotPresent) => Ok(None),
            Err(std::env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(key)),
        };

        let mut config = Self::default();
        if let Some(number) = var("LMCYCLE_WHATSAPP_NUMBER")? {
            config.whatsapp_number = number;
        }
        if let Some(url) = var("LMCYCLE_WHATSAPP_URL")? {
            config.whatsapp_base_url = url;
        }
        config.storage_dir = var("LMCYCLE_STORAGE_DIR")?.map(PathBuf::from);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let number = &self.whatsapp_number;
        if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::InvalidWhatsAppNumber(number.clone()));
        }
        Ok(())
    }

    /// File store under `storage_dir`, or a fresh memory store.
    pub fn open_store(&self) -> Result<Arc<dyn KeyValueStore>, StorageError> {
        let store: Arc<dyn KeyValueStore> = match &self.storage_dir {
            Some(dir) => Arc::new(FileStore::open(dir)?),
            None => Arc::new(MemoryStore::new()),
        };
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::env::VarError;

    fn lookup(vars: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Result<String, VarError> {
        let vars: HashMap<&'static str, String> = vars.iter().map(|(k, v)| (*k, v.to_string())).collect();
        move |key: &'static str| vars.get(key).cloned().ok_or(VarError::NotPresent)
    }

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.whatsapp_number, "21698297835");
    }

    #[test]
    fn test_overrides() {
        let config = StorefrontConfig::from_lookup(lookup(&[
            ("LMCYCLE_WHATSAPP_NUMBER", " 21612345678 "),
            ("LMCYCLE_STORAGE_DIR", "/tmp/lmcycle"),
            ("LMCYCLE_WHATSAPP_URL", ""),
        ]))
        .unwrap();
        assert_eq!(config.whatsapp_number, "21612345678");
        assert_eq!(config.whatsapp_base_url, DEFAULT_WHATSAPP_URL);
        assert_eq!(config.storage_dir, Some(PathBuf::from("/tmp/lmcycle")));
    }

    #[test]
    fn test_rejects_bad_number() {
        let err = StorefrontConfig::from_lookup(lookup(&[("LMCYCLE_WHATSAPP_NUMBER", "+216 98")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidWhatsAppNumber(_)));
    }

    #[test]
    fn test_open_store_on_disk() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config = StorefrontConfig { storage_dir: Some(temp_dir.path().join("data")), ..Default::default() };
        let store = config.open_store().unwrap();
        store.set("k", "v").unwrap();
        assert!(temp_dir.path().join("data").join("k.json").exists());
    }
}

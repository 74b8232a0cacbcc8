use crate::config::schema::ScraperConfig;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;
use url::Url;
use validator::Validate;

pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<ScraperConfig> {
        let path = path.as_ref();
        let config = Self::load_file(path)?;

        config.validate()?;

        for target in &config.targets {
            Url::parse(target)
                .map_err(|e| Error::Config(format!("Invalid target URL {}: {}", target, e)))?;
        }

        Ok(config)
    }

    fn load_file(path: &Path) -> Result<ScraperConfig> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let config: ScraperConfig = serde_json::from_str(&content)?;
                Ok(config)
            }
            Some("yaml") | Some("yml") => {
                let config: ScraperConfig = serde_yaml::from_str(&content)?;
                Ok(config)
            }
            Some("toml") => {
                let config: ScraperConfig = toml::from_str(&content)?;
                Ok(config)
            }
            _ => Err(Error::Config(format!(
                "Unsupported file extension: {}",
                path.display()
            ))),
        }
    }
}

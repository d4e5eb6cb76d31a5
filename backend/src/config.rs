use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::env;

pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub min_password_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let min_password_length = match lookup("MIN_PASSWORD_LENGTH") {
            Some(raw) => {
                let parsed: usize = raw
                    .trim()
                    .parse()
                    .map_err(|_| anyhow!("Invalid MIN_PASSWORD_LENGTH value: {}", raw))?;
                if parsed == 0 {
                    return Err(anyhow!("MIN_PASSWORD_LENGTH must be greater than zero"));
                }
                parsed
            }
            None => DEFAULT_MIN_PASSWORD_LENGTH,
        };

        Ok(Config {
            min_password_length,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn missing_variable_falls_back_to_default() {
        let config = Config::from_lookup(lookup_from(&[])).expect("config");
        assert_eq!(config, Config::default());
        assert_eq!(config.min_password_length, 8);
    }

    #[test]
    fn custom_minimum_is_parsed() {
        let config =
            Config::from_lookup(lookup_from(&[("MIN_PASSWORD_LENGTH", " 12 ")])).expect("config");
        assert_eq!(config.min_password_length, 12);
    }

    #[test]
    fn invalid_minimum_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("MIN_PASSWORD_LENGTH", "eight")]))
            .expect_err("should fail");
        assert!(err.to_string().contains("MIN_PASSWORD_LENGTH"));

        assert!(Config::from_lookup(lookup_from(&[("MIN_PASSWORD_LENGTH", "0")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("MIN_PASSWORD_LENGTH", "-3")])).is_err());
    }
}

//! Environment-driven configuration.
//!
//! | Variable | Default |
//! |---|---|
//! | `CANTEEN_PORT` | `3000` |
//! | `CANTEEN_ACTOR_BUFFER` | `32` |
//! | `CANTEEN_ENFORCE_TOTAL_PRICE` | `false` |
//! | `CANTEEN_ADMIN_EMAIL` | unset |
//! | `CANTEEN_ADMIN_PASSWORD` | unset, then `/run/secrets/canteen_admin_password` |

use std::{env, fmt::Display, fs::read_to_string, str::FromStr};
use thiserror::Error;
use tracing::{info, warn};

const SECRETS_DIR: &str = "/run/secrets";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid {key} value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Seed credentials for the admin account created at startup.
#[derive(Clone, PartialEq)]
pub struct AdminSeed {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for AdminSeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminSeed")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    /// Request channel capacity of each actor.
    pub actor_buffer: usize,
    /// Reject orders whose `totalPrice` disagrees with the cart.
    pub enforce_total_price: bool,
    pub admin: Option<AdminSeed>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            actor_buffer: 32,
            enforce_total_price: false,
            admin: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads from an arbitrary key lookup. Missing keys fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = try_load(&lookup, "CANTEEN_PORT", "3000")?;
        let actor_buffer: usize = try_load(&lookup, "CANTEEN_ACTOR_BUFFER", "32")?;
        if actor_buffer == 0 {
            return Err(ConfigError::Invalid {
                key: "CANTEEN_ACTOR_BUFFER",
                value: "0".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        let enforce_total_price = try_load(&lookup, "CANTEEN_ENFORCE_TOTAL_PRICE", "false")?;

        let admin = match lookup("CANTEEN_ADMIN_EMAIL") {
            Some(email) if !email.trim().is_empty() => {
                let password = lookup("CANTEEN_ADMIN_PASSWORD")
                    .or_else(|| read_secret("canteen_admin_password"));
                match password {
                    Some(password) => Some(AdminSeed { email, password }),
                    None => {
                        warn!("CANTEEN_ADMIN_EMAIL set without a password, admin login disabled");
                        None
                    }
                }
            }
            _ => {
                info!("CANTEEN_ADMIN_EMAIL not set, admin login disabled");
                None
            }
        };

        Ok(Self {
            port,
            actor_buffer,
            enforce_total_price,
            admin,
        })
    }
}

fn try_load<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: &str,
) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let value = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });
    let parsed = value.trim().parse::<T>();
    match parsed {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            warn!("Invalid {key} value: {e}");
            Err(ConfigError::Invalid {
                key,
                reason: e.to_string(),
                value,
            })
        }
    }
}

fn read_secret(secret_name: &str) -> Option<String> {
    let path = format!("{SECRETS_DIR}/{secret_name}");
    read_to_string(&path)
        .map(|s| s.trim().to_string())
        .map_err(|e| {
            info!("No {secret_name} secret at {path}: {e}");
        })
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_reads_every_variable() {
        let config = Config::from_lookup(lookup(&[
            ("CANTEEN_PORT", "8080"),
            ("CANTEEN_ACTOR_BUFFER", "4"),
            ("CANTEEN_ENFORCE_TOTAL_PRICE", "true"),
            ("CANTEEN_ADMIN_EMAIL", "admin@school.edu"),
            ("CANTEEN_ADMIN_PASSWORD", "hunter2"),
        ]))
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.actor_buffer, 4);
        assert!(config.enforce_total_price);
        assert_eq!(
            config.admin,
            Some(AdminSeed {
                email: "admin@school.edu".to_string(),
                password: "hunter2".to_string(),
            })
        );
    }

    #[test]
    fn test_unparsable_value_is_an_error() {
        let err = Config::from_lookup(lookup(&[("CANTEEN_PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "CANTEEN_PORT", .. }));
    }

    #[test]
    fn test_zero_buffer_is_rejected() {
        let err = Config::from_lookup(lookup(&[("CANTEEN_ACTOR_BUFFER", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "CANTEEN_ACTOR_BUFFER", .. }));
    }

    #[test]
    fn test_debug_hides_admin_password() {
        let seed = AdminSeed {
            email: "a@b.c".to_string(),
            password: "topsecret".to_string(),
        };
        assert!(!format!("{seed:?}").contains("topsecret"));
    }
}

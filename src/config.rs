use std::env;

use tracing::warn;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_ADMIN_PRINCIPAL: &str = "admin";
pub const DEFAULT_SESSION_TTL_SECS: i64 = 86400;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {value}")]
    Invalid { key: &'static str, value: String },
}

/// How the admin password is supplied.
#[derive(Clone, PartialEq, Eq)]
pub enum AdminPassword {
    /// Argon2 PHC string.
    Hash(String),
    /// Development only; hashed once at startup.
    Plain(String),
}

impl std::fmt::Debug for AdminPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdminPassword::Hash(_) => f.write_str("Hash(..)"),
            AdminPassword::Plain(_) => f.write_str("Plain(<redacted>)"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub admin_email: String,
    pub admin_password: AdminPassword,
    pub admin_principal: String,
    pub session_ttl_secs: i64,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) over any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = non_empty("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match non_empty("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                key: "PORT",
                value: raw,
            })?,
            None => DEFAULT_PORT,
        };

        let admin_email = non_empty("ADMIN_EMAIL").ok_or(ConfigError::Missing("ADMIN_EMAIL"))?;

        let admin_password = match (non_empty("ADMIN_PASSWORD_HASH"), non_empty("ADMIN_PASSWORD")) {
            (Some(hash), _) => AdminPassword::Hash(hash),
            (None, Some(plain)) => AdminPassword::Plain(plain),
            (None, None) => return Err(ConfigError::Missing("ADMIN_PASSWORD_HASH")),
        };

        let admin_principal =
            non_empty("ADMIN_PRINCIPAL").unwrap_or_else(|| DEFAULT_ADMIN_PRINCIPAL.to_string());

        let session_ttl_secs = match non_empty("ADMIN_SESSION_TTL_SECS") {
            Some(raw) => match raw.trim().parse::<i64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "ADMIN_SESSION_TTL_SECS",
                        value: raw,
                    })
                }
            },
            None => DEFAULT_SESSION_TTL_SECS,
        };

        Ok(Self {
            host,
            port,
            admin_email,
            admin_password,
            admin_principal,
            session_ttl_secs,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Loads `.env.{RUST_ENV}` (default `development`), falling back to `.env`.
pub fn load_env_files() -> String {
    let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() && dotenvy::dotenv().is_err() {
        warn!(file = %env_file, "No env file found, using process environment only");
    }

    env_name
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::hashmap;
    use std::collections::HashMap;

    fn lookup(vars: HashMap<&'static str, &'static str>) -> impl Fn(&str) -> Option<String> {
        move |key: &str| vars.get(key).map(|v| v.to_string())
    }

    #[test]
    fn test_defaults_apply_when_only_admin_is_set() {
        let config = ServerConfig::from_lookup(lookup(hashmap! {
            "ADMIN_EMAIL" => "owner@example.com",
            "ADMIN_PASSWORD_HASH" => "$argon2id$v=19$stub",
        }))
        .unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.admin_principal, "admin");
        assert_eq!(config.session_ttl_secs, 86400);
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(
            config.admin_password,
            AdminPassword::Hash("$argon2id$v=19$stub".to_string())
        );
    }

    #[test]
    fn test_hash_wins_over_plain_password() {
        let config = ServerConfig::from_lookup(lookup(hashmap! {
            "ADMIN_EMAIL" => "owner@example.com",
            "ADMIN_PASSWORD_HASH" => "$argon2id$stub",
            "ADMIN_PASSWORD" => "plain",
        }))
        .unwrap();

        assert!(matches!(config.admin_password, AdminPassword::Hash(_)));
    }

    #[test]
    fn test_plain_password_is_accepted_and_redacted() {
        let config = ServerConfig::from_lookup(lookup(hashmap! {
            "ADMIN_EMAIL" => "owner@example.com",
            "ADMIN_PASSWORD" => "hunter2",
        }))
        .unwrap();

        assert_eq!(config.admin_password, AdminPassword::Plain("hunter2".to_string()));
        assert!(!format!("{:?}", config).contains("hunter2"));
    }

    #[test]
    fn test_missing_admin_settings_are_errors() {
        assert_eq!(
            ServerConfig::from_lookup(lookup(hashmap! {})).unwrap_err(),
            ConfigError::Missing("ADMIN_EMAIL")
        );
        assert_eq!(
            ServerConfig::from_lookup(lookup(hashmap! {"ADMIN_EMAIL" => "a@b.c"})).unwrap_err(),
            ConfigError::Missing("ADMIN_PASSWORD_HASH")
        );
    }

    #[test]
    fn test_invalid_numbers_are_reported() {
        let bad_port = ServerConfig::from_lookup(lookup(hashmap! {
            "ADMIN_EMAIL" => "a@b.c",
            "ADMIN_PASSWORD" => "x",
            "PORT" => "eighty",
        }));
        let bad_ttl = ServerConfig::from_lookup(lookup(hashmap! {
            "ADMIN_EMAIL" => "a@b.c",
            "ADMIN_PASSWORD" => "x",
            "ADMIN_SESSION_TTL_SECS" => "0",
        }));

        assert!(matches!(bad_port, Err(ConfigError::Invalid { key: "PORT", .. })));
        assert!(matches!(
            bad_ttl,
            Err(ConfigError::Invalid {
                key: "ADMIN_SESSION_TTL_SECS",
                ..
            })
        ));
    }
}

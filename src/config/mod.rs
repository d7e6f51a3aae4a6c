//! Typed site configuration from environment variables.
//!
//! Loads once at startup, fails fast if required vars are missing or empty.
//! Sensitive values wrapped in secrecy::SecretString to prevent log leaks.

pub mod env;
pub mod secrets;

use crate::error::{Error, Result};
use env::{Environment, ProcessEnv, non_empty};
use secrets::{REDACTED, SecretString, secrets_eq};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

pub const NAME_DATABASE: &str = "NAME_DATABASE";
pub const USERNAME_DATABASE: &str = "USERNAME_DATABASE";
pub const PASSWORD_DATABASE: &str = "PASSWORD_DATABASE";
pub const WP_URL: &str = "WP_URL";

/// Database host. Not environment-configurable.
pub const DB_HOST: &str = "mariadb";
pub const DB_CHARSET: &str = "utf8";
pub const DB_COLLATE: &str = "";
pub const TABLE_PREFIX: &str = "wp_";
pub const DEBUG_ENABLED: bool = false;

/// Substituted for any auth key or salt that is unset. Not a secret, and
/// insecure outside local development.
pub const AUTH_KEY_PLACEHOLDER: &str = "put-unique-phrase-here";

/// A required configuration field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    DatabaseName,
    DatabaseUser,
    DatabasePassword,
    SiteUrl,
}

impl Field {
    /// Checked in this order; the first missing one is reported.
    pub const REQUIRED: [Field; 4] = [
        Field::DatabaseName,
        Field::DatabaseUser,
        Field::DatabasePassword,
        Field::SiteUrl,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Field::DatabaseName => "database_name",
            Field::DatabaseUser => "database_user",
            Field::DatabasePassword => "database_password",
            Field::SiteUrl => "site_url",
        }
    }

    pub fn env_var(self) -> &'static str {
        match self {
            Field::DatabaseName => NAME_DATABASE,
            Field::DatabaseUser => USERNAME_DATABASE,
            Field::DatabasePassword => PASSWORD_DATABASE,
            Field::SiteUrl => WP_URL,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the eight authentication keys and salts.
///
/// The environment variable and the rendered constant share the same name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthKey {
    AuthKey,
    SecureAuthKey,
    LoggedInKey,
    NonceKey,
    AuthSalt,
    SecureAuthSalt,
    LoggedInSalt,
    NonceSalt,
}

impl AuthKey {
    pub const ALL: [AuthKey; 8] = [
        AuthKey::AuthKey,
        AuthKey::SecureAuthKey,
        AuthKey::LoggedInKey,
        AuthKey::NonceKey,
        AuthKey::AuthSalt,
        AuthKey::SecureAuthSalt,
        AuthKey::LoggedInSalt,
        AuthKey::NonceSalt,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AuthKey::AuthKey => "AUTH_KEY",
            AuthKey::SecureAuthKey => "SECURE_AUTH_KEY",
            AuthKey::LoggedInKey => "LOGGED_IN_KEY",
            AuthKey::NonceKey => "NONCE_KEY",
            AuthKey::AuthSalt => "AUTH_SALT",
            AuthKey::SecureAuthSalt => "SECURE_AUTH_SALT",
            AuthKey::LoggedInSalt => "LOGGED_IN_SALT",
            AuthKey::NonceSalt => "NONCE_SALT",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for AuthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The eight auth secrets, with a note of which ones fell back to
/// [`AUTH_KEY_PLACEHOLDER`].
#[derive(Debug)]
pub struct AuthKeys {
    values: [SecretString; 8],
    defaulted: Vec<AuthKey>,
}

impl AuthKeys {
    fn load<E: Environment + ?Sized>(env: &E) -> Self {
        let mut defaulted = Vec::new();
        let values = AuthKey::ALL.map(|key| match non_empty(env, key.name()) {
            Some(value) => SecretString::from(value),
            None => {
                defaulted.push(key);
                SecretString::from(AUTH_KEY_PLACEHOLDER.to_string())
            }
        });
        Self { values, defaulted }
    }

    pub fn get(&self, key: AuthKey) -> &SecretString {
        &self.values[key.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (AuthKey, &SecretString)> {
        AuthKey::ALL.into_iter().zip(self.values.iter())
    }

    /// Keys that were unset or empty and now hold the placeholder.
    pub fn defaulted(&self) -> &[AuthKey] {
        &self.defaulted
    }
}

impl PartialEq for AuthKeys {
    fn eq(&self, other: &Self) -> bool {
        self.defaulted == other.defaulted
            && self
                .values
                .iter()
                .zip(other.values.iter())
                .all(|(a, b)| secrets_eq(a, b))
    }
}

/// The validated site configuration handed to the application at startup.
///
/// Only constructed through [`Config::load`] or [`Config::from_env`], so a
/// value of this type is always complete.
#[derive(Debug)]
pub struct Config {
    database_name: String,
    database_user: String,
    database_password: SecretString,
    site_url: String,
    auth_keys: AuthKeys,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// In local dev, call `dotenvy::dotenv().ok()` before this.
    /// In the container, the orchestrator injects the vars.
    pub fn from_env() -> Result<Self> {
        Self::load(&ProcessEnv)
    }

    /// Load configuration from any environment mapping.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingRequired`] for the first required field whose
    /// variable is unset or empty. Auth keys never fail; they fall back to
    /// the placeholder.
    pub fn load<E: Environment + ?Sized>(env: &E) -> Result<Self> {
        let database_name = required(env, Field::DatabaseName)?;
        let database_user = required(env, Field::DatabaseUser)?;
        let database_password = SecretString::from(required(env, Field::DatabasePassword)?);
        let site_url = required(env, Field::SiteUrl)?;

        let auth_keys = AuthKeys::load(env);
        for key in auth_keys.defaulted() {
            tracing::warn!(key = key.name(), "auth key not set; using insecure placeholder");
        }

        tracing::debug!(
            database = %database_name,
            site_url = %site_url,
            "site configuration loaded"
        );

        Ok(Self {
            database_name,
            database_user,
            database_password,
            site_url,
            auth_keys,
        })
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    pub fn database_user(&self) -> &str {
        &self.database_user
    }

    pub fn database_password(&self) -> &SecretString {
        &self.database_password
    }

    pub fn database_host(&self) -> &str {
        DB_HOST
    }

    pub fn database_charset(&self) -> &str {
        DB_CHARSET
    }

    pub fn database_collation(&self) -> &str {
        DB_COLLATE
    }

    pub fn table_prefix(&self) -> &str {
        TABLE_PREFIX
    }

    pub fn site_url(&self) -> &str {
        &self.site_url
    }

    pub fn auth_keys(&self) -> &AuthKeys {
        &self.auth_keys
    }

    pub fn debug_enabled(&self) -> bool {
        DEBUG_ENABLED
    }

    /// A printable view with every secret redacted.
    pub fn summary(&self) -> Summary<'_> {
        Summary {
            database_name: self.database_name(),
            database_user: self.database_user(),
            database_password: REDACTED,
            database_host: self.database_host(),
            database_charset: self.database_charset(),
            database_collation: self.database_collation(),
            table_prefix: self.table_prefix(),
            site_url: self.site_url(),
            auth_keys: AuthKey::ALL.iter().map(|key| (key.name(), REDACTED)).collect(),
            placeholder_auth_keys: self.auth_keys.defaulted().to_vec(),
            debug_enabled: self.debug_enabled(),
        }
    }
}

impl PartialEq for Config {
    fn eq(&self, other: &Self) -> bool {
        self.database_name == other.database_name
            && self.database_user == other.database_user
            && secrets_eq(&self.database_password, &other.database_password)
            && self.site_url == other.site_url
            && self.auth_keys == other.auth_keys
    }
}

/// Redacted, serializable view of a [`Config`].
#[derive(Debug, Serialize)]
pub struct Summary<'a> {
    pub database_name: &'a str,
    pub database_user: &'a str,
    pub database_password: &'static str,
    pub database_host: &'a str,
    pub database_charset: &'a str,
    pub database_collation: &'a str,
    pub table_prefix: &'a str,
    pub site_url: &'a str,
    pub auth_keys: BTreeMap<&'static str, &'static str>,
    pub placeholder_auth_keys: Vec<AuthKey>,
    pub debug_enabled: bool,
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Database:   {}", self.database_name)?;
        writeln!(f, "User:       {}", self.database_user)?;
        writeln!(f, "Password:   {}", self.database_password)?;
        writeln!(f, "Host:       {}", self.database_host)?;
        writeln!(f, "Charset:    {}", self.database_charset)?;
        writeln!(f, "Collation:  {:?}", self.database_collation)?;
        writeln!(f, "Prefix:     {}", self.table_prefix)?;
        writeln!(f, "Site URL:   {}", self.site_url)?;
        writeln!(f, "Debug:      {}", self.debug_enabled)?;
        for key in AuthKey::ALL {
            let name = key.name();
            let value = self.auth_keys.get(name).copied().unwrap_or(REDACTED);
            writeln!(f, "{name:<17} {value}")?;
        }
        if !self.placeholder_auth_keys.is_empty() {
            let names: Vec<_> = self.placeholder_auth_keys.iter().map(|k| k.name()).collect();
            writeln!(f, "---")?;
            writeln!(f, "Placeholder auth keys: {}", names.join(", "))?;
        }
        Ok(())
    }
}

fn required<E: Environment + ?Sized>(env: &E, field: Field) -> Result<String> {
    non_empty(env, field.env_var()).ok_or(Error::MissingRequired { field })
}

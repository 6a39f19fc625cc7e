//! Hub configuration assembly.
//!
//! Builds the complete configuration object the hub runtime consumes:
//! authentication policy, spawner policy and hub network addresses.
//! Assembly happens once at startup from an [`EnvSnapshot`]; the result is
//! immutable and handed to the runtime, never mutated in place.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::env::EnvSnapshot;
use crate::error::AppError;
use crate::spawner::SpawnerConfig;

/// Address the hub binds its internal API to.
const HUB_BIND_URL: &str = "http://0.0.0.0:8081";
/// Address spawned containers use to reach the hub.
const HUB_CONNECT_URL: &str = "http://hub:8081";

const DEFAULT_LOG_LEVEL: &str = "info";

/// Which authenticator implementation the hub binds at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthKind {
    /// Username/password accounts managed by the hub itself.
    Native,
}

/// Authentication policy.
#[derive(Debug, Clone, Serialize)]
pub struct AuthConfig {
    pub kind: AuthKind,
    /// Let users create their own accounts without operator approval.
    pub open_signup: bool,
    pub admin_users: BTreeSet<String>,
}

impl AuthConfig {
    /// Native auth, open signup, `admin` as the sole admin account.
    fn native() -> Self {
        Self {
            kind: AuthKind::Native,
            open_signup: true,
            admin_users: BTreeSet::from(["admin".to_string()]),
        }
    }
}

/// The assembled settings the hub runtime consumes.
#[derive(Debug, Clone, Serialize)]
pub struct HubConfig {
    pub authenticator: AuthConfig,
    pub spawner: SpawnerConfig,
    /// URL the hub listens on.
    pub bind_url: String,
    /// URL spawned containers reach the hub at.
    pub connect_url: String,
    /// Log level for the bootstrap process (`HUB_LOG_LEVEL`).
    pub log_level: String,
}

impl HubConfig {
    /// Assemble the hub configuration from an environment snapshot.
    ///
    /// Fails fast when a required variable is absent or an invariant does
    /// not hold; no partial configuration is produced.
    pub fn from_env(env: &EnvSnapshot) -> Result<Self, AppError> {
        let config = Self {
            authenticator: AuthConfig::native(),
            spawner: SpawnerConfig::from_env(env)?,
            bind_url: HUB_BIND_URL.into(),
            connect_url: HUB_CONNECT_URL.into(),
            log_level: env.get_or("HUB_LOG_LEVEL", DEFAULT_LOG_LEVEL),
        };
        config.spawner.validate()?;
        Ok(config)
    }
}

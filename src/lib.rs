//! Startup configuration assembly for a multi-user notebook hub.
//!
//! Resolves authentication policy, container-spawner policy and hub
//! addresses from the process environment, once, at startup. The hub
//! runtime, the authenticator and the container spawner are external; this
//! crate only produces the configuration object they consume, including
//! the pre-spawn hook the spawner invokes before each container launch.

pub mod config;
pub mod env;
pub mod error;
pub mod hook;
pub mod logger;
pub mod spawner;

pub use config::{AuthConfig, AuthKind, HubConfig};
pub use env::EnvSnapshot;
pub use error::AppError;
pub use hook::{PreSpawnHook, SpawnerState, VncSettings};
pub use spawner::{ImageRegistry, SpawnerConfig, SpawnerKind, VolumeTemplate};

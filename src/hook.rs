//! Pre-spawn hook: per-image environment injection.
//!
//! The external spawner calls the hook once per spawn attempt, just before
//! the container starts, handing over the in-progress spawner state. The
//! hook closes over values resolved at assembly time — it never reads the
//! ambient process environment itself.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::env::EnvSnapshot;

/// VNC server settings pushed into desktop containers.
///
/// Resolved once from the environment snapshot; every value has a safe
/// default, so resolution cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VncSettings {
    pub password: String,
    pub resolution: String,
    pub color_depth: String,
}

impl VncSettings {
    pub const DEFAULT_PASSWORD: &'static str = "changeme";
    pub const DEFAULT_RESOLUTION: &'static str = "1600x900";
    pub const DEFAULT_COLOR_DEPTH: &'static str = "24";

    /// Resolve from `VNC_PW`, `VNC_RESOLUTION` and `VNC_COL_DEPTH`.
    pub fn from_env(env: &EnvSnapshot) -> Self {
        Self {
            password: env.get_or("VNC_PW", Self::DEFAULT_PASSWORD),
            resolution: env.get_or("VNC_RESOLUTION", Self::DEFAULT_RESOLUTION),
            color_depth: env.get_or("VNC_COL_DEPTH", Self::DEFAULT_COLOR_DEPTH),
        }
    }
}

/// The slice of spawner state the hook contract needs: which image was
/// selected for this spawn, and the environment the container will start
/// with. Owned by the external spawner; one instance per spawn attempt.
#[derive(Debug, Clone, Default)]
pub struct SpawnerState {
    pub image: String,
    pub environment: BTreeMap<String, String>,
}

impl SpawnerState {
    pub fn new(image: impl Into<String>) -> Self {
        Self { image: image.into(), environment: BTreeMap::new() }
    }
}

/// Injects VNC settings into containers spawned from the desktop image.
/// Other images are left untouched.
#[derive(Debug, Clone, Serialize)]
pub struct PreSpawnHook {
    desktop_image: String,
    vnc: VncSettings,
}

impl PreSpawnHook {
    pub fn new(desktop_image: impl Into<String>, vnc: VncSettings) -> Self {
        Self { desktop_image: desktop_image.into(), vnc }
    }

    /// Apply the hook to an in-progress spawn. Idempotent: re-applying to
    /// the same state writes the same entries.
    pub fn apply(&self, state: &mut SpawnerState) {
        if state.image != self.desktop_image {
            return;
        }
        let env = &mut state.environment;
        env.insert("VNC_PW".into(), self.vnc.password.clone());
        env.insert("VNC_RESOLUTION".into(), self.vnc.resolution.clone());
        env.insert("VNC_COL_DEPTH".into(), self.vnc.color_depth.clone());
    }
}

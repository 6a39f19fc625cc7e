//! Container spawner policy: network, image registry, volumes, hook.
//!
//! The spawner itself is external; this module only assembles the settings
//! it consumes. The spawner variant is fixed at startup (strategy selection
//! from a closed set) rather than bound dynamically.

use serde::Serialize;

use crate::env::EnvSnapshot;
use crate::error::AppError;
use crate::hook::{PreSpawnHook, VncSettings};

/// User-facing label for the data-science image.
pub const DATASCI_LABEL: &str = "Data Science (JupyterLab + VS Code + RStudio)";
/// User-facing label for the desktop image.
pub const DESKTOP_LABEL: &str = "Linux Desktop (XFCE + noVNC)";

const DEFAULT_NETWORK: &str = "bridge";
const VOLUME_TEMPLATE: &str = "jhub-user-{username}";
const CONTAINER_HOME: &str = "/home/jovyan";
const USERNAME_PLACEHOLDER: &str = "{username}";

/// Which spawner implementation the hub binds at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpawnerKind {
    Docker,
}

/// One selectable container image: what the user sees, and what the
/// container runtime pulls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageEntry {
    pub label: String,
    pub image: String,
}

/// The set of images a user may choose from, in presentation order.
/// Built once at assembly; immutable thereafter.
#[derive(Debug, Clone, Serialize)]
pub struct ImageRegistry {
    entries: Vec<ImageEntry>,
}

impl ImageRegistry {
    pub fn new(entries: Vec<ImageEntry>) -> Self {
        Self { entries }
    }

    /// Image reference for a user-facing label, if the label is offered.
    pub fn resolve(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.image.as_str())
    }

    /// Whether `image` is one of the selectable image references.
    pub fn contains_image(&self, image: &str) -> bool {
        self.entries.iter().any(|e| e.image == image)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Per-user named volume mounted at the container's home directory.
///
/// The name template must contain the `{username}` placeholder so each
/// user's home maps to a distinct volume; without it, every user would
/// share one home directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VolumeTemplate {
    pub name_template: String,
    pub container_path: String,
}

impl VolumeTemplate {
    /// The per-user home volume: `jhub-user-{username}` -> `/home/jovyan`.
    pub fn user_home() -> Self {
        Self {
            name_template: VOLUME_TEMPLATE.into(),
            container_path: CONTAINER_HOME.into(),
        }
    }

    /// Volume name for a concrete user.
    pub fn render(&self, username: &str) -> String {
        self.name_template.replace(USERNAME_PLACEHOLDER, username)
    }

    fn validate(&self) -> Result<(), AppError> {
        if !self.name_template.contains(USERNAME_PLACEHOLDER) {
            return Err(AppError::Config(format!(
                "volume template '{}' lacks the {USERNAME_PLACEHOLDER} placeholder; \
                 user home directories would collide",
                self.name_template
            )));
        }
        Ok(())
    }
}

/// Everything the external spawner consumes.
#[derive(Debug, Clone, Serialize)]
pub struct SpawnerConfig {
    pub kind: SpawnerKind,
    /// Docker network the hub and user containers share.
    pub network_name: String,
    /// Remove the container when the session stops; state lives in volumes.
    pub remove_on_stop: bool,
    pub volume: VolumeTemplate,
    pub images: ImageRegistry,
    /// Image used when the user makes no explicit choice.
    pub default_image: String,
    pub pre_spawn: PreSpawnHook,
}

impl SpawnerConfig {
    /// Resolve the Docker spawner policy from the environment snapshot.
    ///
    /// `DATASCI_IMAGE` and `DESKTOP_IMAGE` are required — they identify the
    /// container images and have no safe fallback. `DOCKER_NETWORK_NAME`
    /// defaults to `bridge`.
    pub fn from_env(env: &EnvSnapshot) -> Result<Self, AppError> {
        let datasci_image = env.require("DATASCI_IMAGE")?;
        let desktop_image = env.require("DESKTOP_IMAGE")?;

        let images = ImageRegistry::new(vec![
            ImageEntry { label: DATASCI_LABEL.into(), image: datasci_image.clone() },
            ImageEntry { label: DESKTOP_LABEL.into(), image: desktop_image.clone() },
        ]);

        Ok(Self {
            kind: SpawnerKind::Docker,
            network_name: env.get_or("DOCKER_NETWORK_NAME", DEFAULT_NETWORK),
            remove_on_stop: true,
            volume: VolumeTemplate::user_home(),
            images,
            default_image: datasci_image,
            pre_spawn: PreSpawnHook::new(desktop_image, VncSettings::from_env(env)),
        })
    }

    /// Check the invariants the rest of the stack relies on.
    pub fn validate(&self) -> Result<(), AppError> {
        self.volume.validate()?;
        if !self.images.contains_image(&self.default_image) {
            return Err(AppError::Config(format!(
                "default image '{}' is not in the allowed-image registry",
                self.default_image
            )));
        }
        Ok(())
    }
}

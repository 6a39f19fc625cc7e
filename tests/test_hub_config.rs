//! End-to-end assembly tests: environment snapshot in, hub config out.

use nbhub_config::spawner::{DATASCI_LABEL, DESKTOP_LABEL};
use nbhub_config::{AppError, EnvSnapshot, HubConfig, SpawnerState};

fn full_env() -> EnvSnapshot {
    EnvSnapshot::from_iter([
        ("DOCKER_NETWORK_NAME", "jhub-net"),
        ("DATASCI_IMAGE", "registry.local/datasci:2024.1"),
        ("DESKTOP_IMAGE", "registry.local/desktop:2024.1"),
        ("VNC_PW", "hunter2"),
        ("VNC_RESOLUTION", "2560x1440"),
        ("VNC_COL_DEPTH", "32"),
    ])
}

#[test]
fn test_full_environment_assembles() {
    let config = HubConfig::from_env(&full_env()).unwrap();

    assert_eq!(config.spawner.network_name, "jhub-net");
    assert_eq!(config.spawner.default_image, "registry.local/datasci:2024.1");
    assert!(config.spawner.remove_on_stop);
    assert_eq!(config.spawner.volume.render("ines"), "jhub-user-ines");
    assert_eq!(config.spawner.volume.container_path, "/home/jovyan");
    assert_eq!(config.bind_url, "http://0.0.0.0:8081");
    assert_eq!(config.connect_url, "http://hub:8081");
}

#[test]
fn test_minimal_environment_uses_defaults() {
    let env = EnvSnapshot::from_iter([
        ("DATASCI_IMAGE", "ds:1"),
        ("DESKTOP_IMAGE", "desk:1"),
    ]);
    let config = HubConfig::from_env(&env).unwrap();

    assert_eq!(config.spawner.network_name, "bridge");
    assert_eq!(config.log_level, "info");

    let mut state = SpawnerState::new("desk:1");
    config.spawner.pre_spawn.apply(&mut state);
    assert_eq!(state.environment.get("VNC_PW").unwrap(), "changeme");
    assert_eq!(state.environment.get("VNC_RESOLUTION").unwrap(), "1600x900");
    assert_eq!(state.environment.get("VNC_COL_DEPTH").unwrap(), "24");
}

#[test]
fn test_missing_required_variable_fails_fast() {
    for missing in ["DATASCI_IMAGE", "DESKTOP_IMAGE"] {
        let env: EnvSnapshot = [
            ("DOCKER_NETWORK_NAME", "jhub-net"),
            ("DATASCI_IMAGE", "registry.local/datasci:2024.1"),
            ("DESKTOP_IMAGE", "registry.local/desktop:2024.1"),
        ]
        .into_iter()
        .filter(|(name, _)| *name != missing)
        .collect();

        let err = HubConfig::from_env(&env).unwrap_err();
        match err {
            AppError::MissingEnv { ref name } => assert_eq!(name, missing),
            other => panic!("expected MissingEnv, got: {other}"),
        }
    }
}

#[test]
fn test_registry_labels_match_selection_menu() {
    let config = HubConfig::from_env(&full_env()).unwrap();
    let labels: Vec<&str> = config
        .spawner
        .images
        .iter()
        .map(|e| e.label.as_str())
        .collect();
    assert_eq!(labels, vec![DATASCI_LABEL, DESKTOP_LABEL]);
    assert_eq!(
        config.spawner.images.resolve(DESKTOP_LABEL).unwrap(),
        "registry.local/desktop:2024.1"
    );
}

#[test]
fn test_hook_targets_only_the_desktop_image() {
    let config = HubConfig::from_env(&full_env()).unwrap();

    let mut desktop = SpawnerState::new("registry.local/desktop:2024.1");
    config.spawner.pre_spawn.apply(&mut desktop);
    assert_eq!(desktop.environment.get("VNC_PW").unwrap(), "hunter2");
    assert_eq!(desktop.environment.get("VNC_RESOLUTION").unwrap(), "2560x1440");
    assert_eq!(desktop.environment.get("VNC_COL_DEPTH").unwrap(), "32");

    let mut datasci = SpawnerState::new("registry.local/datasci:2024.1");
    config.spawner.pre_spawn.apply(&mut datasci);
    assert!(datasci.environment.is_empty());
}

#[test]
fn test_concurrent_spawns_have_disjoint_state() {
    // Each spawn gets its own state instance; hook invocations never share
    // mutable data, so interleaving them cannot cross-contaminate.
    let config = HubConfig::from_env(&full_env()).unwrap();
    let hook = config.spawner.pre_spawn.clone();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let hook = hook.clone();
            std::thread::spawn(move || {
                let image = if i % 2 == 0 {
                    "registry.local/desktop:2024.1"
                } else {
                    "registry.local/datasci:2024.1"
                };
                let mut state = SpawnerState::new(image);
                hook.apply(&mut state);
                (i, state)
            })
        })
        .collect();

    for handle in handles {
        let (i, state) = handle.join().unwrap();
        if i % 2 == 0 {
            assert_eq!(state.environment.len(), 3);
        } else {
            assert!(state.environment.is_empty());
        }
    }
}
